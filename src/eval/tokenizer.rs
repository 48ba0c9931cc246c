/// One of the four binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            // Division by zero degrades to NaN; the formatter renders "Error"
            BinOp::Div => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
        }
    }

    /// Operator for a character, with the display glyphs × and ÷
    /// normalized to * and /
    fn from_char(c: char) -> Option<BinOp> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' | '×' => Some(BinOp::Mul),
            '/' | '÷' => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Measurement text destined for the unit parser ("3' 5 1/2", "7/8")
    Value(String),
    Op(BinOp),
}

/// Split an expression into alternating value and operator tokens.
///
/// The scan accumulates characters into a buffer and only treats an
/// operator character as a boundary when the buffer is non-empty and the
/// character has a space on at least one side or ends the expression.
/// This keeps the fraction separator in `3/8` inside its token while
/// `3 / 8` still divides. Well-formed output alternates value, operator,
/// value, ... starting and ending with a value; garbage input can break
/// that shape and the reducer handles it.
pub fn tokenize(expr: &str) -> Vec<Token> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut buf = String::new();

    for i in 0..chars.len() {
        let c = chars[i];
        if let Some(op) = BinOp::from_char(c) {
            if !buf.trim().is_empty() && is_operator_boundary(&chars, i) {
                // A slash packed between digits is a fraction separator,
                // not division
                if c == '/' && digit_flanked(&chars, i) {
                    buf.push(c);
                    continue;
                }
                tokens.push(Token::Value(buf.trim().to_string()));
                tokens.push(Token::Op(op));
                buf.clear();
                continue;
            }
        }
        buf.push(c);
    }

    if !buf.trim().is_empty() {
        tokens.push(Token::Value(buf.trim().to_string()));
    }

    tokens
}

fn is_operator_boundary(chars: &[char], i: usize) -> bool {
    let space_before = i > 0 && chars[i - 1].is_whitespace();
    let space_after = i + 1 < chars.len() && chars[i + 1].is_whitespace();
    let is_last = i + 1 == chars.len();
    space_before || space_after || is_last
}

fn digit_flanked(chars: &[char], i: usize) -> bool {
    i > 0
        && chars[i - 1].is_ascii_digit()
        && i + 1 < chars.len()
        && chars[i + 1].is_ascii_digit()
}
