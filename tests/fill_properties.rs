//! Properties of the fill and timing harness against the canonical sequence
//!

use fibonacci_sequence_bench::prelude::*;
use rand::Rng;

#[test]
fn canonical_sequence_through_the_harness_path() {
	let mut buffer = SequenceBuffer::try_allocate(15).unwrap();
	let report = time_fills(15, 10, &mut buffer);
	assert_eq!(10, report.runs());
	let actual: [u64; 16] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610];
	assert_eq!(actual.as_slice(), buffer.as_slice());
}

#[test]
fn refill_overwrites_in_place_and_spares_the_tail() {
	let mut buffer = vec![0u64; 21];
	fill(20, &mut buffer).unwrap();
	let tail: Vec<u64> = buffer[16..].to_vec();
	// a shorter refill must leave the prior values beyond its own range
	fill(15, &mut buffer).unwrap();
	assert_eq!(610, buffer[15]);
	assert_eq!(tail, buffer[16..].to_vec());
}

#[test]
fn one_element_short_is_refused_without_mutation() {
	let mut buffer = vec![42u64; 15];
	let result = fill(15, &mut buffer);
	assert!(result.is_err());
	assert!(buffer.iter().all(|value| *value == 42));
	let again = fill(15, &mut buffer);
	assert_eq!(result, again);
	assert!(buffer.iter().all(|value| *value == 42));
}

#[test]
fn random_upper_indexes_satisfy_the_recurrence() {
	let mut rng = rand::rng();
	for _ in 0..50 {
		let n = rng.random_range(2..=400i64);
		let mut buffer = vec![0u64; n as usize + 1];
		fill(n, &mut buffer).unwrap();
		assert_eq!(0, buffer[0]);
		assert_eq!(1, buffer[1]);
		for i in 2..buffer.len() {
			assert_eq!(buffer[i - 1].wrapping_add(buffer[i - 2]), buffer[i]);
		}
	}
}

#[test]
fn average_matches_total_over_runs() {
	let mut buffer = SequenceBuffer::try_allocate(SEQUENCE_UPPER_INDEX).unwrap();
	let report = time_fills(SEQUENCE_UPPER_INDEX, 1000, &mut buffer);
	let expected = report.total().as_secs_f64() / 1000.0;
	assert!((report.average().as_secs_f64() - expected).abs() < 1e-9);
}
