//! Human-readable rendering of matrices

use spmx_core::{format, SparseMatrix};
use std::fmt;

/// How a result matrix is shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    /// Mapping of coordinate pairs to values: `{(0, 0): 5, (1, 1): 7}`
    #[default]
    Mapping,
    /// The same text that is written to files
    Text,
    /// JSON object with `rows`, `cols` and `entries`
    #[cfg(feature = "serde")]
    Json,
}

impl std::str::FromStr for DisplayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mapping" | "map" => Ok(DisplayFormat::Mapping),
            "text" => Ok(DisplayFormat::Text),
            #[cfg(feature = "serde")]
            "json" => Ok(DisplayFormat::Json),
            other => Err(format!("unknown display format `{other}`")),
        }
    }
}

/// Display adapter printing non-zero entries as a coordinate mapping
///
/// Entries are listed in row-major order; an all-zero matrix prints `{}`.
pub struct CoordinateMap<'a>(pub &'a SparseMatrix);

impl fmt::Display for CoordinateMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, entry) in self.0.sorted_entries().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {}): {}", entry.row, entry.col, entry.value)?;
        }
        write!(f, "}}")
    }
}

/// Render a matrix in the requested format
pub fn render(matrix: &SparseMatrix, display: DisplayFormat) -> String {
    match display {
        DisplayFormat::Mapping => CoordinateMap(matrix).to_string(),
        DisplayFormat::Text => format::serialize(matrix),
        #[cfg(feature = "serde")]
        DisplayFormat::Json => serde_json::to_string_pretty(matrix).unwrap_or_else(|e| {
            log::warn!("Failed to render matrix as JSON: {e}");
            CoordinateMap(matrix).to_string()
        }),
    }
}
