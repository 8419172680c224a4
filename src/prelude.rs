//! `use fibonacci_sequence_bench::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::harness::*;

#[doc(hidden)]
pub use crate::sequence::*;
