//! Normalized unions of intervals and the set algebra over them.

mod interval_set;
mod operations;

pub use interval_set::IntervalSet;
