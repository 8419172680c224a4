//! Computes the first `n + 1` Fibonacci numbers into a caller-supplied buffer
//! and measures the average process CPU time of repeating that computation
//!

pub mod harness;
pub mod sequence;

pub mod prelude;
