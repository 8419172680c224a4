//! Measure one fill of the harness's fixed-length sequence buffer
//!

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fibonacci_sequence_bench::prelude::*;

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("sequence_fill");
	group.significance_level(0.05).sample_size(100);
	let mut buffer = SequenceBuffer::try_allocate(SEQUENCE_UPPER_INDEX).unwrap();
	group.bench_function("fill_n15_reused_buffer", |b| {
		b.iter(|| fill(black_box(SEQUENCE_UPPER_INDEX), buffer.as_mut_slice()))
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
