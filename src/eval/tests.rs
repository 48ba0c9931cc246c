#[cfg(test)]
mod tests {
    use super::super::error::EvalError;
    use super::super::evaluator::{evaluate, evaluate_parts};
    use crate::format::format_feet_inches;
    use crate::units::parse_quantity;

    #[test]
    fn test_mixed_number_addition() {
        let result = evaluate("5 1/2 + 3 1/4").unwrap();
        assert_eq!(result.value, 8.75);
        assert_eq!(result.display, "8 3/4\"");
        assert_eq!(result.total_inches, "8 3/4 In");
        assert!(result.measurement);
        assert_eq!(result.expression, "5 1/2 + 3 1/4");
    }

    #[test]
    fn test_feet_subtraction() {
        let result = evaluate("2' 6 - 1'").unwrap();
        assert_eq!(result.value, 18.0);
        assert_eq!(result.display, "1' 6\"");
        assert_eq!(result.total_inches, "18 In");
    }

    #[test]
    fn test_multiplication_before_subtraction() {
        // 2 * 1/2 collapses to 1 before the additive pass runs
        let result = evaluate("5 1/2 + 3 1/4 - 2 * 1/2").unwrap();
        assert_eq!(result.value, 7.75);
    }

    #[test]
    fn test_single_token_short_circuits() {
        let result = evaluate("3' 5 1/2").unwrap();
        assert_eq!(result.value, 41.5);
        assert_eq!(result.display, "3' 5 1/2\"");
    }

    #[test]
    fn test_percentage_addition_is_plain_mode() {
        let result = evaluate("100 + 10%").unwrap();
        assert_eq!(result.value, 110.0);
        assert_eq!(result.display, "110");
        assert!(!result.measurement);
    }

    #[test]
    fn test_percent_of_base() {
        let result = evaluate("50% of 200").unwrap();
        assert_eq!(result.value, 100.0);
        assert!(!result.measurement);
    }

    #[test]
    fn test_plain_arithmetic_mode() {
        let result = evaluate("20 - 5").unwrap();
        assert_eq!(result.value, 15.0);
        assert_eq!(result.display, "15");
        assert!(!result.measurement);

        let result = evaluate("(2 + 3) × 4").unwrap();
        assert_eq!(result.value, 20.0);
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(evaluate(""), Err(EvalError::EmptyExpression));
        assert_eq!(evaluate("   "), Err(EvalError::EmptyExpression));
    }

    #[test]
    fn test_division_by_zero_renders_error() {
        // Plain arithmetic goes non-finite and falls through to the
        // measurement path, where the zero divisor degrades to NaN
        let result = evaluate("5 / 0").unwrap();
        assert!(!result.value.is_finite());
        assert_eq!(result.display, "Error");
        assert_eq!(result.total_inches, "Error");

        let result = evaluate("1' 6 / 0").unwrap();
        assert_eq!(result.display, "Error");
    }

    #[test]
    fn test_dangling_operator_is_recovered() {
        let result = evaluate("5 +");
        assert_eq!(result, Err(EvalError::Evaluation("5 +".to_string())));
    }

    #[test]
    fn test_fraction_input_reduces_to_lowest_terms() {
        let result = evaluate("2/4").unwrap();
        assert_eq!(result.value, 0.5);
        assert_eq!(result.display, "1/2\"");
    }

    #[test]
    fn test_whole_inch_round_trip() {
        // Whole inch values under a foot survive a parse/format cycle
        for n in 0..12 {
            let formatted = format_feet_inches(parse_quantity(&n.to_string()));
            assert_eq!(formatted, format!("{}\"", n));
        }
    }

    #[test]
    fn test_power_of_two_fractions_round_trip() {
        for d in [2u32, 4, 8, 16] {
            for n in 1..d {
                let token = format!("{}/{}", n, d);
                let value = parse_quantity(&token);
                assert_eq!(value, n as f64 / d as f64);
                // Formatting renders the fraction in lowest terms
                let formatted = format_feet_inches(value);
                assert_eq!(parse_quantity(&formatted), value);
            }
        }
    }

    #[test]
    fn test_formatting_is_idempotent_for_exact_sixteenths() {
        for feet in 0..3i64 {
            for whole in 0..12i64 {
                for sixteenths in 0..16i64 {
                    let value =
                        (feet * 12 + whole) as f64 + sixteenths as f64 / 16.0;
                    let formatted = format_feet_inches(value);
                    let reparsed = parse_quantity(&formatted);
                    assert_eq!(
                        format_feet_inches(reparsed),
                        formatted,
                        "value {} formatted as {:?} did not survive reformatting",
                        value,
                        formatted
                    );
                }
            }
        }
    }

    #[test]
    fn test_structured_parts_form() {
        let result = evaluate_parts("3 1/4", "+", "5 3/8").unwrap();
        assert_eq!(result.value, 8.625);
        assert_eq!(result.display, "8 5/8\"");
        assert_eq!(result.expression, "3 1/4 + 5 3/8");

        let result = evaluate_parts("2'", "-", "7").unwrap();
        assert_eq!(result.value, 17.0);
        assert_eq!(result.display, "1' 5\"");
    }

    #[test]
    fn test_noisy_token_degrades_to_zero() {
        // Unparseable residue contributes zero instead of failing
        let result = evaluate("garbage + 5").unwrap();
        assert_eq!(result.value, 5.0);
    }
}
