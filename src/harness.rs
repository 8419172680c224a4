//! The harness orchestrates measurement, not computation: it owns the single
//! [SequenceBuffer], drives [sequence::fill] a fixed number of times with
//! identical arguments and reads the process CPU clock (not wall clock)
//! immediately around the repetition loop. Allocation and release of the
//! buffer stay outside the timed region.
//!
//! The benchmark configuration is deliberately a pair of adjustable
//! constants rather than runtime flags.
//!

use std::fmt;
use std::time::Duration;

use cpu_time::ProcessTime;
use log::warn;

use crate::sequence::{self, SequenceBuffer};

/// Inclusive upper sequence index every timed run computes
pub const SEQUENCE_UPPER_INDEX: i64 = 15;
/// How many times the fill repeats inside the timed region
pub const NUM_RUNS: u32 = 10_000;

/// Elapsed process CPU time of a timed region and the run count it covered.
///
/// `Display` renders the two statistics lines the benchmark prints, with six
/// fractional digits on the seconds values so sub-millisecond differences
/// stay visible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingReport {
	/// Runs the timed region repeated
	runs: u32,
	/// CPU time consumed across all runs
	total: Duration,
}

impl TimingReport {
	/// Create a report for a measured region
	pub fn new(runs: u32, total: Duration) -> Self {
		TimingReport { runs, total }
	}
	/// Runs the timed region repeated
	pub fn runs(&self) -> u32 {
		self.runs
	}
	/// CPU time consumed across all runs
	pub fn total(&self) -> Duration {
		self.total
	}
	/// Mean CPU time of a single run, zero when the region ran nothing
	pub fn average(&self) -> Duration {
		if self.runs == 0 {
			Duration::ZERO
		} else {
			self.total / self.runs
		}
	}
}

impl fmt::Display for TimingReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(
			f,
			"Total CPU time used for {} runs: {:.6} seconds",
			self.runs,
			self.total.as_secs_f64()
		)?;
		write!(
			f,
			"Average CPU time per run:        {:.6} seconds",
			self.average().as_secs_f64()
		)
	}
}

/// Call [sequence::fill] exactly `runs` times against the same buffer and
/// measure the process CPU time the repetition consumed.
///
/// A refused run emits a non-fatal warning naming the run index and the loop
/// carries on; the next run is unaffected since a refused fill never mutates
/// the buffer. With a buffer from [SequenceBuffer::try_allocate] for the
/// same `n` the refusal path cannot trigger, it exists for callers that size
/// their own memory
pub fn time_fills(n: i64, runs: u32, buffer: &mut SequenceBuffer) -> TimingReport {
	let start = ProcessTime::now();
	for run in 0..runs {
		if let Err(error) = sequence::fill(n, buffer.as_mut_slice()) {
			// non-fatal, the warning names the failing run index
			eprintln!("Warning: fibonacci_sequence failed on run {run}");
			warn!("run {run} refused: {error}");
		}
	}
	let total = start.elapsed();
	TimingReport::new(runs, total)
}
