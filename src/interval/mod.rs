//! Single intervals over the real line and their pairwise algebra.

mod error;
mod interval;
mod ops;

pub use error::IntervalError;
pub use interval::Interval;
