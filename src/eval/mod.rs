pub mod arithmetic;
pub mod error;
pub mod evaluator;
pub mod percent;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use arithmetic::{evaluate_arithmetic, is_plain_arithmetic};
pub use error::EvalError;
pub use evaluator::{evaluate, evaluate_parts};
pub use tokenizer::{tokenize, BinOp, Token};
