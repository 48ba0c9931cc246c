pub mod config;
pub mod eval;
pub mod format;
pub mod units;
