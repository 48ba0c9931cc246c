use crate::format::fraction::Fraction;

/// Render a decimal inch value as feet, whole inches and a sixteenth
/// fraction in lowest terms, e.g. `1' 6"` or `8 3/4"`.
///
/// Total function: non-finite input renders the literal string "Error".
pub fn format_feet_inches(inches: f64) -> String {
    if !inches.is_finite() {
        return "Error".to_string();
    }

    let negative = inches < 0.0;
    let value = inches.abs();

    let mut feet = (value / 12.0).floor() as i64;
    let remainder = value % 12.0;
    let mut whole = remainder.floor() as i64;
    let frac = remainder - remainder.floor();

    let mut sixteenths = (frac * 16.0).round() as i64;
    // Rounding can land exactly on the next whole inch; roll it over, and
    // into the next foot when the inch count reaches 12.
    if sixteenths == 16 {
        sixteenths = 0;
        whole += 1;
        if whole == 12 {
            whole = 0;
            feet += 1;
        }
    }

    let frac_str = fraction_suffix(sixteenths);

    let mut result = String::new();
    if feet > 0 {
        result.push_str(&format!("{}' ", feet));
    }
    // A bare zero renders as 0", never as an empty string
    if whole > 0 || (feet == 0 && frac_str.is_empty()) {
        result.push_str(&whole.to_string());
    }
    result.push_str(&frac_str);
    result.push('"');

    let result = result.trim().to_string();
    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Render a decimal inch value as total inches with a sixteenth fraction,
/// e.g. "18 In" or "8 3/4 In". Non-finite input renders "Error".
pub fn format_total_inches(inches: f64) -> String {
    if !inches.is_finite() {
        return "Error".to_string();
    }

    let negative = inches < 0.0;
    let value = inches.abs();

    let mut whole = value.floor() as i64;
    let frac = value - value.floor();

    let mut sixteenths = (frac * 16.0).round() as i64;
    if sixteenths == 16 {
        sixteenths = 0;
        whole += 1;
    }

    let frac_str = fraction_suffix(sixteenths);

    let mut result = String::new();
    if whole > 0 || frac_str.is_empty() {
        result.push_str(&whole.to_string());
    }
    result.push_str(&frac_str);

    let result = result.trim().to_string();
    format!("{}{} In", if negative { "-" } else { "" }, result)
}

/// Render a plain numeric result, for expressions with no unit semantics.
/// Non-finite values render "Error".
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "Error".to_string();
    }
    format!("{}", value)
}

fn fraction_suffix(sixteenths: i64) -> String {
    if sixteenths > 0 && sixteenths < 16 {
        format!(" {}", Fraction::from_sixteenths(sixteenths as u32))
    } else {
        String::new()
    }
}
