//! Compiled regex patterns for cell type detection.

use regex::Regex;

/// Pattern for base-10 integers, optionally signed.
pub static INTEGER_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("Invalid integer pattern"));

/// Pattern for decimal and exponential numbers.
pub static FLOAT_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?$")
        .expect("Invalid float pattern")
});
