use crate::eval::arithmetic::{evaluate_arithmetic, is_plain_arithmetic};
use crate::eval::error::EvalError;
use crate::eval::percent::try_percentage;
use crate::eval::tokenizer::{tokenize, BinOp, Token};
use crate::format::{format_feet_inches, format_number, format_total_inches};
use crate::units::{looks_like_measurement, parse_quantity, Evaluation};

/// Evaluate a free-form expression string.
///
/// Resolution order, first match wins:
/// 1. the two percentage shapes (plain-numeric mode),
/// 2. plain arithmetic with parentheses when no measurement markers are
///    present (plain-numeric mode),
/// 3. measurement evaluation: tokenize, resolve each value token through
///    the unit parser, reduce left to right in two precedence passes
///    (measurement mode).
///
/// Only empty input and token-less input fail. Everything else degrades
/// to a best-effort numeric answer, with non-finite intermediates
/// surfacing as "Error" display strings rather than panics.
pub fn evaluate(expression: &str) -> Result<Evaluation, EvalError> {
    let expr = expression.trim();
    if expr.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    if expr.contains('%') {
        if let Some(value) = try_percentage(expr) {
            return Ok(plain_result(expr, value));
        }
    }

    if !looks_like_measurement(expr) && is_plain_arithmetic(expr) {
        if let Ok(value) = evaluate_arithmetic(expr) {
            if value.is_finite() {
                return Ok(plain_result(expr, value));
            }
        }
        // Parse failure or non-finite result: fall through and let the
        // measurement path produce its best effort
    }

    let tokens = tokenize(expr);
    if tokens.is_empty() {
        return Err(EvalError::MalformedExpression);
    }

    let value = reduce(&tokens).ok_or_else(|| EvalError::Evaluation(expr.to_string()))?;
    Ok(measurement_result(expr, value))
}

/// Legacy structured form: the upstream interpreter can hand back the two
/// operands and the operator separately; they join with single spaces
/// into one expression.
pub fn evaluate_parts(a: &str, op: &str, b: &str) -> Result<Evaluation, EvalError> {
    evaluate(&format!("{} {} {}", a.trim(), op.trim(), b.trim()))
}

fn plain_result(expr: &str, value: f64) -> Evaluation {
    Evaluation {
        expression: expr.to_string(),
        value,
        display: format_number(value),
        total_inches: format_number(value),
        measurement: false,
    }
}

fn measurement_result(expr: &str, value: f64) -> Evaluation {
    Evaluation {
        expression: expr.to_string(),
        value,
        display: format_feet_inches(value),
        total_inches: format_total_inches(value),
        measurement: true,
    }
}

// Reduction slots: resolved numbers at even indices, operators at odd ones
#[derive(Clone, Copy)]
enum Slot {
    Num(f64),
    Op(BinOp),
}

/// Two-pass left-to-right reduction: multiplication and division first,
/// then addition and subtraction. Each pass splices operator triples out
/// of the slot list in place and rescans from the spliced position.
/// Returns None when the stream is malformed (dangling operator, operator
/// in a value position).
fn reduce(tokens: &[Token]) -> Option<f64> {
    let mut slots: Vec<Slot> = tokens
        .iter()
        .map(|t| match t {
            Token::Value(text) => Slot::Num(parse_quantity(text)),
            Token::Op(op) => Slot::Op(*op),
        })
        .collect();

    reduce_pass(&mut slots, &[BinOp::Mul, BinOp::Div])?;
    reduce_pass(&mut slots, &[BinOp::Add, BinOp::Sub])?;

    match slots.as_slice() {
        [Slot::Num(value)] => Some(*value),
        _ => None,
    }
}

fn reduce_pass(slots: &mut Vec<Slot>, ops: &[BinOp]) -> Option<()> {
    let mut i = 1;
    while i + 1 < slots.len() {
        let op = match slots[i] {
            Slot::Op(op) => op,
            Slot::Num(_) => return None,
        };
        if ops.contains(&op) {
            let lhs = match slots[i - 1] {
                Slot::Num(n) => n,
                Slot::Op(_) => return None,
            };
            let rhs = match slots[i + 1] {
                Slot::Num(n) => n,
                Slot::Op(_) => return None,
            };
            slots[i - 1] = Slot::Num(op.apply(lhs, rhs));
            slots.drain(i..=i + 1);
        } else {
            i += 2;
        }
    }
    Some(())
}
