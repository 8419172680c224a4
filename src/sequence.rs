//! The sequence filler writes Fibonacci values `F(0)` through `F(n)` into a
//! caller-supplied buffer of unsigned 64-bit integers:
//!
//! ```text
//!  _____________________________________________________________________
//! |     |     |     |     |     |     |     |     |     |      |        |
//! |  0  |  1  |  1  |  2  |  3  |  5  |  8  | 13  | 21  |  34  |  ...   |
//! |_____|_____|_____|_____|_____|_____|_____|_____|_____|______|________|
//!    0     1     2     3     4     5     6     7     8     9      i
//! ```
//!
//! The filler never allocates. Ownership of the memory stays with the caller
//! throughout; [fill] only writes indices `0..=n` and refuses to write at all
//! when the buffer cannot hold them. The [SequenceBuffer] type is the owned
//! allocation the timing harness reuses across runs, released automatically
//! when it goes out of scope.
//!

use std::collections::TryReserveError;

use thiserror::Error;

/// Failure of [fill] to place the requested sequence in the caller's buffer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FillError {
	/// The buffer is too short for indices `0..=n`. Nothing has been written
	#[error("buffer of {capacity} element(s) cannot hold fibonacci indices 0 to {n}")]
	InsufficientCapacity {
		/// Inclusive upper sequence index the caller asked for
		n: i64,
		/// Number of elements the caller's buffer can actually hold
		capacity: usize,
	},
}

/// Failure to acquire the memory backing a [SequenceBuffer]
#[derive(Debug, Error)]
#[error("failed to allocate a sequence buffer of {len} element(s)")]
pub struct AllocationError {
	/// Element count that was requested
	len: usize,
	/// Allocator detail for the failure
	#[source]
	source: TryReserveError,
}

/// Fill `buffer` with the Fibonacci sequence from `F(0)` to `F(n)` inclusive.
///
/// The slice length is the capacity: it must be at least `n + 1` or the fill
/// is refused with [FillError::InsufficientCapacity] and the buffer is left
/// untouched, no partial writes. Elements beyond index `n` are never
/// modified. A negative `n` asks for nothing and succeeds whatever the
/// capacity, including zero.
///
/// Values wrap on `u64` overflow (from index 94 onwards) rather than
/// erroring, matching fixed-width unsigned addition in both debug and
/// release builds. Callers wanting exact large values must accept the
/// wraparound or cap `n` at 93.
pub fn fill(n: i64, buffer: &mut [u64]) -> Result<(), FillError> {
	if n < 0 {
		return Ok(());
	}
	// `n + 1` elements are required; a count that cannot even be indexed on
	// this target is unsatisfiable by any buffer
	let required = match usize::try_from(n).ok().and_then(|last| last.checked_add(1)) {
		Some(required) => required,
		None => {
			return Err(FillError::InsufficientCapacity {
				n,
				capacity: buffer.len(),
			})
		}
	};
	if buffer.len() < required {
		return Err(FillError::InsufficientCapacity {
			n,
			capacity: buffer.len(),
		});
	}
	buffer[0] = 0;
	if n >= 1 {
		buffer[1] = 1;
	}
	// each value depends on the two before it so the walk must ascend
	for i in 2..required {
		buffer[i] = buffer[i - 1].wrapping_add(buffer[i - 2]);
	}
	Ok(())
}

/// An owned, fixed-length run of `u64` elements sized for one sequence.
///
/// The harness allocates exactly one of these before timing begins and
/// overwrites it in place on every run; dropping it releases the memory on
/// every exit path
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceBuffer(Vec<u64>);

impl SequenceBuffer {
	/// Allocate a zero-filled buffer of exactly `n + 1` elements, empty for
	/// negative `n`. Acquisition is fallible rather than aborting so the
	/// harness can report the failure and exit cleanly
	pub fn try_allocate(n: i64) -> Result<SequenceBuffer, AllocationError> {
		let len = if n < 0 {
			0
		} else {
			// counts beyond the target's address range are pushed through the
			// allocator so they surface as the ordinary allocation failure
			usize::try_from(n)
				.map(|last| last.saturating_add(1))
				.unwrap_or(usize::MAX)
		};
		let mut elements = Vec::new();
		elements
			.try_reserve_exact(len)
			.map_err(|source| AllocationError { len, source })?;
		elements.resize(len, 0);
		Ok(SequenceBuffer(elements))
	}
	/// Number of elements the buffer holds
	pub fn len(&self) -> usize {
		self.0.len()
	}
	/// Whether the buffer holds no elements at all
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
	/// Read access to the stored values
	pub fn as_slice(&self) -> &[u64] {
		&self.0
	}
	/// The writable memory handed to [fill]
	pub fn as_mut_slice(&mut self) -> &mut [u64] {
		&mut self.0
	}
}
