//! Grading core
//!
//! Turns a learner's submitted source code plus an exercise's test cases
//! into per-test verdicts and an aggregate scored outcome.

pub mod comparator;
pub mod engine;

pub use comparator::*;
pub use engine::*;
