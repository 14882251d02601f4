//! Candidate filtering
//!
//! Narrows a dictionary to the words still consistent with every annotated
//! guess so far. Filtering is pure: the dictionary is never mutated and
//! filtering an already-filtered list by the same history changes nothing.

mod candidates;
mod constraint;

pub use candidates::{filter, filter_candidates, is_consistent};
pub use constraint::GuessConstraint;
