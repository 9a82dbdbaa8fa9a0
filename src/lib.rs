//! interval_algebra - tolerance-aware interval arithmetic over `f64`
//!
//! Comparison predicates that treat values within a [`Tolerance`] as equal,
//! single [`Interval`]s with inclusive or exclusive endpoints, and normalized
//! [`IntervalSet`]s with union, intersection, complement and difference.
//!
//! ```
//! use interval_algebra::{Interval, IntervalSet, Tolerance};
//!
//! let tolerance = Tolerance::STANDARD;
//! let busy = IntervalSet::create(
//!     [Interval::closed(0.0, 2.0)?, Interval::closed_open(5.0, 8.0)?],
//!     tolerance,
//! );
//! let free = busy.complement();
//!
//! assert!(free.contains(3.0, tolerance));
//! assert!(!free.contains(2.0, tolerance));
//! assert_eq!(free.to_string(), "(-inf, 0) ∪ (2, 5) ∪ [8, inf)");
//! # Ok::<(), interval_algebra::IntervalError>(())
//! ```

pub mod compare;
pub mod equality;
pub mod interval;
pub mod interval_set;
pub mod tolerance;

pub use compare::ToleranceCmp;
pub use equality::{EqualityComparer, ToleranceEq};
pub use interval::{Interval, IntervalError};
pub use interval_set::IntervalSet;
pub use tolerance::{Tolerance, ToleranceError};
