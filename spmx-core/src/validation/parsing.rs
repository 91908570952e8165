//! Parsing utilities for the matrix text format
//!
//! This module provides pure, allocation-free parsing functions for the
//! individual fields of the text format. Line structure (headers, blank
//! lines, line numbers) is handled by [`crate::format::text`].

use crate::format::constants::{ENTRY_CLOSE, ENTRY_OPEN, FIELD_COUNT, FIELD_SEPARATOR};
use crate::FormatIssue;

/// Parse a signed decimal integer, tolerating surrounding whitespace
///
/// Accepts an optional leading `+` or `-`. Anything else that is not an
/// ASCII digit, or a value that does not fit in an `i64`, is rejected.
pub fn parse_integer(s: &str) -> Result<i64, FormatIssue> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() {
        return Err(FormatIssue::NonInteger);
    }

    let mut result: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(FormatIssue::NonInteger);
        }

        let digit = i64::from(byte - b'0');

        // Accumulate towards the sign so i64::MIN is representable
        result = result
            .checked_mul(10)
            .and_then(|r| {
                if negative {
                    r.checked_sub(digit)
                } else {
                    r.checked_add(digit)
                }
            })
            .ok_or(FormatIssue::NonInteger)?;
    }

    Ok(result)
}

/// Parse a non-negative dimension such as the value of `rows=`
pub fn parse_dimension(s: &str) -> Option<usize> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let mut result: usize = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        result = result
            .checked_mul(10)?
            .checked_add(usize::from(byte - b'0'))?;
    }

    Some(result)
}

/// Split an entry line into its three raw fields
///
/// The line must be wrapped in parentheses; whitespace around the
/// parentheses and the separators is tolerated.
pub fn split_entry(line: &str) -> Result<[&str; FIELD_COUNT], FormatIssue> {
    let inner = line
        .trim()
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(FormatIssue::MalformedEntry)?;

    let mut fields = [""; FIELD_COUNT];
    let mut count = 0;
    for field in inner.split(FIELD_SEPARATOR) {
        if count < FIELD_COUNT {
            fields[count] = field.trim();
        }
        count += 1;
    }

    if count != FIELD_COUNT {
        return Err(FormatIssue::FieldCount(count));
    }

    Ok(fields)
}

/// Parse an entry line into `(row, col, value)`
///
/// Coordinates are returned signed; bounds are checked by the caller
/// once the declared dimensions are known.
pub fn parse_entry(line: &str) -> Result<(i64, i64, i64), FormatIssue> {
    let [row, col, value] = split_entry(line)?;

    if value.contains('.') {
        return Err(FormatIssue::FloatingValue);
    }

    Ok((parse_integer(row)?, parse_integer(col)?, parse_integer(value)?))
}
