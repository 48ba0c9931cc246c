use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect measurement text
    /// Matches a feet mark, an inch mark, or a digit/digit fraction
    /// Examples: "2' 6", "5 1/2\"", "3/8 + 1/4"
    static ref MEASUREMENT_PATTERN: Regex = Regex::new(r#"['"]|\d+/\d+"#).unwrap();
}

/// Check if an expression carries measurement markers (feet/inch marks or
/// fraction literals). Plain arithmetic has none and takes the fast path.
pub fn looks_like_measurement(s: &str) -> bool {
    MEASUREMENT_PATTERN.is_match(s)
}
