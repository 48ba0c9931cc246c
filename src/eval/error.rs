use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Input was empty or whitespace only; no computation attempted
    EmptyExpression,
    /// Tokenization produced no tokens
    MalformedExpression,
    /// Reduction could not collapse the token stream; carries the input
    Evaluation(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyExpression => write!(f, "Expression is empty"),
            EvalError::MalformedExpression => write!(f, "Expression produced no tokens"),
            EvalError::Evaluation(expr) => {
                write!(f, "Could not evaluate expression: '{}'", expr)
            }
        }
    }
}

impl std::error::Error for EvalError {}
