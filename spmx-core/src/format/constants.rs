//! Keys and delimiters of the matrix text format

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between entry fields
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an entry: row, column, value
pub const FIELD_COUNT: usize = 3;
