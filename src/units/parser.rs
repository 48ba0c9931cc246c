use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Mixed number: whole, whitespace, numerator/denominator ("10 3/8")
    static ref MIXED_NUMBER: Regex = Regex::new(r"^(\d+)\s+(\d+)/(\d+)$").unwrap();
    /// Bare fraction: numerator/denominator ("3/8")
    static ref BARE_FRACTION: Regex = Regex::new(r"^(\d+)/(\d+)$").unwrap();
    /// Longest numeric prefix, sign and decimal point allowed
    static ref FLOAT_PREFIX: Regex = Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)").unwrap();
}

/// Parse a single measurement token into decimal inches.
///
/// Total function: anything unparseable contributes zero, because the
/// tokens come from noisy speech transcription and a best-effort number
/// beats a hard failure. The inch mark `"` is decorative and stripped;
/// the feet mark `'` splits the token into a feet part (times 12) and a
/// remaining inches/fraction part.
///
/// Examples: `3' 5 1/2` -> 41.5, `7/8` -> 0.875, `5'` -> 60, `12` -> 12.
pub fn parse_quantity(token: &str) -> f64 {
    let s = token.trim().replace('"', "");

    let mut feet = 0.0;
    let mut rest = s.as_str();
    if let Some(idx) = s.find('\'') {
        feet = parse_float_prefix(&s[..idx]).unwrap_or(0.0);
        rest = &s[idx + 1..];
    }

    let rest = rest.trim();
    if rest.is_empty() {
        return feet * 12.0;
    }

    if let Some(caps) = MIXED_NUMBER.captures(rest) {
        let whole: f64 = caps[1].parse().unwrap_or(0.0);
        let num: f64 = caps[2].parse().unwrap_or(0.0);
        let den: f64 = caps[3].parse().unwrap_or(0.0);
        return feet * 12.0 + whole + num / den;
    }

    if let Some(caps) = BARE_FRACTION.captures(rest) {
        let num: f64 = caps[1].parse().unwrap_or(0.0);
        let den: f64 = caps[2].parse().unwrap_or(0.0);
        return feet * 12.0 + num / den;
    }

    feet * 12.0 + parse_float_prefix(rest).unwrap_or(0.0)
}

/// Parse the longest numeric prefix of a string, like JavaScript's
/// `parseFloat`. Returns None when the string starts with no number.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    FLOAT_PREFIX
        .find(trimmed)
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_inches() {
        assert_eq!(parse_quantity("12"), 12.0);
        assert_eq!(parse_quantity("0"), 0.0);
        assert_eq!(parse_quantity("7\""), 7.0);
    }

    #[test]
    fn test_bare_fraction() {
        assert_eq!(parse_quantity("7/8"), 0.875);
        assert_eq!(parse_quantity("1/2"), 0.5);
        assert_eq!(parse_quantity("3/16"), 3.0 / 16.0);
    }

    #[test]
    fn test_mixed_number() {
        assert_eq!(parse_quantity("10 3/8"), 10.375);
        assert_eq!(parse_quantity("3 1/4"), 3.25);
    }

    #[test]
    fn test_feet() {
        assert_eq!(parse_quantity("5'"), 60.0);
        assert_eq!(parse_quantity("3' 5 1/2"), 41.5);
        assert_eq!(parse_quantity("2' 6"), 30.0);
        assert_eq!(parse_quantity("1.5'"), 18.0);
    }

    #[test]
    fn test_inch_mark_is_decorative() {
        assert_eq!(parse_quantity("3' 5 1/2\""), 41.5);
        assert_eq!(parse_quantity("1/2\""), 0.5);
    }

    #[test]
    fn test_decimal_inches() {
        assert_eq!(parse_quantity("5.75"), 5.75);
        assert_eq!(parse_quantity("-3"), -3.0);
    }

    #[test]
    fn test_garbage_degrades_to_zero() {
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("   "), 0.0);
        assert_eq!(parse_quantity("abc"), 0.0);
        // Feet part survives even when the remainder is garbage
        assert_eq!(parse_quantity("5' abc"), 60.0);
        // Garbage feet part contributes zero
        assert_eq!(parse_quantity("abc' 3"), 3.0);
    }

    #[test]
    fn test_numeric_prefix_semantics() {
        assert_eq!(parse_float_prefix("3.5abc"), Some(3.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("-2 rest"), Some(-2.0));
        assert_eq!(parse_float_prefix("  7"), Some(7.0));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("+"), None);
        // Trailing text after the number is ignored, like parseFloat
        assert_eq!(parse_quantity("3.5abc"), 3.5);
    }

    #[test]
    fn test_zero_denominator_goes_non_finite() {
        assert!(!parse_quantity("3/0").is_finite());
    }
}
