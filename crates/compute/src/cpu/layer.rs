// Copyright 2025 Irreducible Inc.

use tracing::instrument;

use crate::{
	layer::{ComputeLayer, Operand},
	scalar::compute_scalar,
	Error, N_PIPELINES,
};

/// Single-threaded layer that walks the buffers in groups of `P` elements.
///
/// The outer loop advances one group at a time; the inner loop visits the `P` lanes of the group
/// and bounds checks each one, since the last group may extend past the end of the buffers.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuLayer<const P: usize = N_PIPELINES>;

impl<const P: usize> CpuLayer<P> {
	const NONZERO_WIDTH: () = assert!(P > 0, "group width must be positive");

	#[inline]
	fn for_each_index(len: usize, mut f: impl FnMut(usize)) {
		#[allow(clippy::let_unit_value)]
		let () = Self::NONZERO_WIDTH;

		for group_start in (0..len).step_by(P) {
			for lane in 0..P {
				let index = group_start + lane;
				if index < len {
					f(index);
				}
			}
		}
	}
}

impl<const P: usize> ComputeLayer for CpuLayer<P> {
	fn group_width(&self) -> usize {
		P
	}

	#[instrument(
		skip_all,
		name = "CpuLayer::transform",
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

		Self::for_each_index(output.len(), |index| {
			output[index] = compute_scalar(input_a[index], input_b[index]);
		});
		Ok(())
	}

	#[instrument(
		skip_all,
		name = "CpuLayer::transform_in_place",
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

		Self::for_each_index(inout.len(), |index| {
			let (a, b) = aliased.arrange(inout[index], other[index]);
			inout[index] = compute_scalar(a, b);
		});
		Ok(())
	}
}
