//! Slice-level building blocks behind [`IntervalSet`](super::IntervalSet).
//!
//! Every function here takes intervals sorted by minimum and returns a `Vec`;
//! only [`normalize`] guarantees canonical output, so callers route results
//! through it before wrapping them in a set.

mod complement;
mod intersection;
mod normalize;

pub(crate) mod assertions;

pub use complement::compute_complement;
pub use intersection::compute_intersection;
pub use normalize::normalize;
