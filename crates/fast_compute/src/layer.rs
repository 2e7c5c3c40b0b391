// Copyright 2025 Irreducible Inc.

use heavy_compute::{compute_scalar, ComputeLayer, Error, Operand, N_PIPELINES};
use heavy_compute_utils::rayon::items_per_task;
use rayon::prelude::*;
use tracing::instrument;

/// Number of rayon tasks to aim for per thread when the task size is chosen automatically.
const TASKS_PER_THREAD: usize = 4;

/// Data-parallel layer that hands groups of `P` elements to the rayon thread pool.
///
/// Consecutive groups are batched into tasks of at least `min_groups_per_task` groups. The last
/// group is cut short at the end of the buffers, so no index past the end is ever visited.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastCpuLayer<const P: usize = N_PIPELINES> {
	min_groups_per_task: Option<usize>,
}

impl<const P: usize> FastCpuLayer<P> {
	const NONZERO_WIDTH: () = assert!(P > 0, "group width must be positive");

	/// Fixes the minimum number of groups per task instead of deriving it from the thread count.
	pub fn with_min_groups_per_task(self, min_groups_per_task: usize) -> Self {
		Self {
			min_groups_per_task: Some(min_groups_per_task.max(1)),
		}
	}

	fn groups_per_task(&self, len: usize) -> usize {
		#[allow(clippy::let_unit_value)]
		let () = Self::NONZERO_WIDTH;

		self.min_groups_per_task
			.unwrap_or_else(|| items_per_task(len.div_ceil(P), TASKS_PER_THREAD))
	}
}

impl<const P: usize> ComputeLayer for FastCpuLayer<P> {
	fn group_width(&self) -> usize {
		P
	}

	#[instrument(
		skip_all,
		name = "FastCpuLayer::transform",
		level = "debug",
		fields(size = output.len())
	)]
	fn transform(
		&self,
		input_a: &[i32],
		input_b: &[i32],
		output: &mut [i32],
	) -> Result<(), Error> {
		debug_assert_eq!(
			input_a.len(),
			output.len(),
			"precondition: buffers must have the same length"
		);
		debug_assert_eq!(
			input_b.len(),
			output.len(),
			"precondition: buffers must have the same length"
		);

		let groups_per_task = self.groups_per_task(output.len());
		output
			.par_chunks_mut(P)
			.zip(input_a.par_chunks(P))
			.zip(input_b.par_chunks(P))
			.with_min_len(groups_per_task)
			.for_each(|((output, input_a), input_b)| {
				for ((out, &a), &b) in output.iter_mut().zip(input_a).zip(input_b) {
					*out = compute_scalar(a, b);
				}
			});
		Ok(())
	}

	#[instrument(
		skip_all,
		name = "FastCpuLayer::transform_in_place",
		level = "debug",
		fields(size = inout.len())
	)]
	fn transform_in_place(
		&self,
		inout: &mut [i32],
		other: &[i32],
		aliased: Operand,
	) -> Result<(), Error> {
		debug_assert_eq!(
			other.len(),
			inout.len(),
			"precondition: buffers must have the same length"
		);

		let groups_per_task = self.groups_per_task(inout.len());
		inout
			.par_chunks_mut(P)
			.zip(other.par_chunks(P))
			.with_min_len(groups_per_task)
			.for_each(|(inout, other)| {
				for (x, &y) in inout.iter_mut().zip(other) {
					let (a, b) = aliased.arrange(*x, y);
					*x = compute_scalar(a, b);
				}
			});
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_groups_per_task() {
		let layer = FastCpuLayer::<8>::default();
		assert!(layer.groups_per_task(0) >= 1);
		assert!(layer.groups_per_task(8 * 1024) >= 1);

		let layer = layer.with_min_groups_per_task(16);
		assert_eq!(layer.groups_per_task(0), 16);
		assert_eq!(layer.groups_per_task(1 << 20), 16);

		let layer = layer.with_min_groups_per_task(0);
		assert_eq!(layer.groups_per_task(100), 1);
	}

	#[test]
	fn test_group_width() {
		assert_eq!(<FastCpuLayer>::default().group_width(), N_PIPELINES);
		assert_eq!(FastCpuLayer::<5>::default().group_width(), 5);
	}
}
