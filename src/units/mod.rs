// Measurement token parsing: feet marks, inch marks, mixed numbers and
// bare fractions, all normalized to decimal inches.

pub mod detector;
pub mod parser;
pub mod types;

pub use detector::looks_like_measurement;
pub use parser::{parse_float_prefix, parse_quantity};
pub use types::Evaluation;
