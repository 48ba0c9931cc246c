pub mod formatter;
pub mod fraction;

pub use formatter::{format_feet_inches, format_number, format_total_inches};
pub use fraction::{gcd, Fraction};
