use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters the plain-arithmetic fast path accepts: digits,
    /// whitespace, decimal points, the four operators and their display
    /// glyphs, parentheses, and percent signs
    static ref PLAIN_ARITHMETIC: Regex = Regex::new(r"^[\d\s.+\-*/×÷()%]+$").unwrap();
}

/// Errors from the plain-arithmetic evaluator. These never escape
/// `evaluate`; a failed parse falls through to measurement evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    UnexpectedEnd,
    UnexpectedChar(char, usize),
    InvalidNumber(String),
    UnbalancedParen,
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::UnexpectedEnd => write!(f, "Unexpected end of expression"),
            ArithmeticError::UnexpectedChar(c, pos) => {
                write!(f, "Unexpected character '{}' at position {}", c, pos)
            }
            ArithmeticError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ArithmeticError::UnbalancedParen => write!(f, "Unbalanced parenthesis"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Whether an expression qualifies for the plain-arithmetic fast path
/// (the caller also requires the absence of measurement markers)
pub fn is_plain_arithmetic(expr: &str) -> bool {
    !expr.is_empty() && PLAIN_ARITHMETIC.is_match(expr)
}

/// Normalize the display glyphs × and ÷ and drop everything else outside
/// the arithmetic alphabet. Keypad input and transcriptions produce both
/// glyph sets, plus stray percent signs the grammar does not carry.
fn sanitize(expr: &str) -> String {
    expr.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || ".+-*/()".contains(*c))
        .collect()
}

/// Evaluate `+ - * / ( )` with standard precedence and unary sign.
/// Division by zero follows IEEE-754 and surfaces as a non-finite value,
/// which the caller treats as a miss for this path.
pub fn evaluate_arithmetic(expr: &str) -> Result<f64, ArithmeticError> {
    let mut cursor = Cursor {
        chars: sanitize(expr).chars().collect(),
        pos: 0,
    };
    let value = cursor.expression()?;
    match cursor.peek() {
        None => Ok(value),
        Some(c) => Err(ArithmeticError::UnexpectedChar(c, cursor.pos)),
    }
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn peek(&mut self) -> Option<char> {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
        self.chars.get(self.pos).copied()
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, ArithmeticError> {
        let mut value = self.term()?;
        while let Some(c) = self.peek() {
            match c {
                '+' => {
                    self.pos += 1;
                    value += self.term()?;
                }
                '-' => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, ArithmeticError> {
        let mut value = self.factor()?;
        while let Some(c) = self.peek() {
            match c {
                '*' => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                '/' => {
                    self.pos += 1;
                    let rhs = self.factor()?;
                    value /= rhs;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // factor := ('+' | '-') factor | '(' expression ')' | number
    fn factor(&mut self) -> Result<f64, ArithmeticError> {
        match self.peek() {
            Some('+') => {
                self.pos += 1;
                self.factor()
            }
            Some('-') => {
                self.pos += 1;
                Ok(-self.factor()?)
            }
            Some('(') => {
                self.pos += 1;
                let value = self.expression()?;
                match self.peek() {
                    Some(')') => {
                        self.pos += 1;
                        Ok(value)
                    }
                    _ => Err(ArithmeticError::UnbalancedParen),
                }
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) => Err(ArithmeticError::UnexpectedChar(c, self.pos)),
            None => Err(ArithmeticError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, ArithmeticError> {
        let start = self.pos;
        while self.pos < self.chars.len()
            && (self.chars[self.pos].is_ascii_digit() || self.chars[self.pos] == '.')
        {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse()
            .map_err(|_| ArithmeticError::InvalidNumber(text.clone()))
    }
}
