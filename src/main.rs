//! Benchmark binary: allocates the sequence buffer once, times the repeated
//! fill over the fixed configuration and prints total and average process
//! CPU time to stdout
//!

use std::process::ExitCode;

use fibonacci_sequence_bench::prelude::*;
use log::{debug, error, info};

/// Announce, allocate, time, report. Allocation failure is the only fatal
/// path and maps to exit code 1; a refused run inside the timed loop is a
/// warning and the benchmark still completes with exit code 0
fn main() -> ExitCode {
	pretty_env_logger::init();
	info!(
		"host: {} {}",
		std::env::consts::OS,
		std::env::consts::ARCH
	);
	let mut buffer = match SequenceBuffer::try_allocate(SEQUENCE_UPPER_INDEX) {
		Ok(buffer) => buffer,
		Err(allocation) => {
			eprintln!("Error: Failed to allocate memory for the result buffer.");
			error!("{allocation}");
			return ExitCode::from(1);
		}
	};
	println!(
		"Timing fibonacci_sequence for n={SEQUENCE_UPPER_INDEX} (runs={NUM_RUNS})..."
	);
	let report = time_fills(SEQUENCE_UPPER_INDEX, NUM_RUNS, &mut buffer);
	debug!("sequence after final run: {:?}", buffer.as_slice());
	println!("{report}");
	ExitCode::SUCCESS
}
