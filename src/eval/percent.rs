use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `BASE (+|-) PCT %`: add or subtract a percentage of the base
    static ref PERCENT_ADJUST: Regex =
        Regex::new(r"^(-?\d+(?:\.\d+)?)\s*([+-])\s*(\d+(?:\.\d+)?)\s*%$").unwrap();
    /// `A % [of|de|x|×|*]? B`: percentage applied to a base
    static ref PERCENT_OF: Regex =
        Regex::new(r"^(-?\d+(?:\.\d+)?)\s*%\s*(?:of|de|x|×|\*)?\s*(-?\d+(?:\.\d+)?)$").unwrap();
    /// `A (×|*) B %`: base times a percentage
    static ref TIMES_PERCENT: Regex =
        Regex::new(r"^(-?\d+(?:\.\d+)?)\s*(?:×|\*)\s*(\d+(?:\.\d+)?)\s*%$").unwrap();
}

/// Try the two supported percentage expression shapes against a trimmed
/// expression. Returns the plain numeric result, or None when neither
/// shape matches and the caller falls through to general evaluation.
///
/// Which operand of the percent-of shape is treated as the percentage is
/// decided by where the `%` sign falls relative to the midpoint of the
/// expression. That heuristic came with the original calculator and its
/// exact behavior is kept, ambiguity included.
pub fn try_percentage(expr: &str) -> Option<f64> {
    if let Some(caps) = PERCENT_ADJUST.captures(expr) {
        let base: f64 = caps[1].parse().ok()?;
        let pct: f64 = caps[3].parse().ok()?;
        let delta = base * (pct / 100.0);
        return Some(if &caps[2] == "+" { base + delta } else { base - delta });
    }

    let caps = PERCENT_OF
        .captures(expr)
        .or_else(|| TIMES_PERCENT.captures(expr))?;
    let first: f64 = caps[1].parse().ok()?;
    let second: f64 = caps[2].parse().ok()?;

    let pct_pos = expr.chars().position(|c| c == '%')?;
    let (pct, base) = if pct_pos < expr.chars().count() / 2 {
        (first, second)
    } else {
        (second, first)
    };
    Some(pct / 100.0 * base)
}
