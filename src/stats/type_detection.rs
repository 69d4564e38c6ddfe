//! Type detection for CSV cells.

use super::regexes::{FLOAT_PATTERN, INTEGER_PATTERN};
use crate::field_type::Type;

/// A field is null when nothing but whitespace is left after trimming.
#[inline]
pub fn is_null_value(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check for boolean values without regex.
#[inline]
fn is_boolean(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// Detect the type of a single cell value.
///
/// Null cells come back as [`Type::Empty`].
pub fn detect_cell_type(value: &str) -> Type {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Type::Empty;
    }

    // Fast path before the regex: plain digit strings are the common case
    if trimmed.bytes().all(|b| b.is_ascii_digit()) || INTEGER_PATTERN.is_match(trimmed) {
        return Type::Integer;
    }

    if FLOAT_PATTERN.is_match(trimmed) {
        return Type::Float;
    }

    if is_boolean(trimmed) {
        return Type::Boolean;
    }

    Type::String
}

/// Infer one type for a column from its cell values.
pub fn infer_column_type<'a, I>(values: I) -> Type
where
    I: IntoIterator<Item = &'a str>,
{
    let mut merged = Type::Empty;

    for value in values {
        merged = merged.merge(detect_cell_type(value));
        if merged == Type::String {
            break;
        }
    }

    merged
}
