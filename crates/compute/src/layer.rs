// Copyright 2025 Irreducible Inc.

use std::fmt::Debug;

use auto_impl::auto_impl;

use crate::Error;

/// Which input buffer an in-place transform overwrites with the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
	A,
	B,
}

impl Operand {
	/// Orders an element of the aliased buffer and an element of the other buffer as `(a, b)`.
	#[inline]
	pub fn arrange(self, aliased: i32, other: i32) -> (i32, i32) {
		match self {
			Self::A => (aliased, other),
			Self::B => (other, aliased),
		}
	}
}

/// A hardware abstraction layer (HAL) for the elementwise transform.
///
/// Implementations differ only in how they schedule the elements. Every implementation must
/// produce `output[i] == compute_scalar(input_a[i], input_b[i])` at every index, regardless of its
/// group width or processing order.
#[auto_impl(&, Box, Arc)]
pub trait ComputeLayer: Debug + Send + Sync {
	/// The number of elements issued together per scheduling step.
	fn group_width(&self) -> usize;

	/// Applies the scalar function to every index.
	///
	/// ## Preconditions
	///
	/// * `input_a`, `input_b` and `output` must have the same length.
	fn transform(&self, input_a: &[i32], input_b: &[i32], output: &mut [i32])
		-> Result<(), Error>;

	/// Applies the scalar function to every index, writing the results over the `aliased` input.
	///
	/// ## Preconditions
	///
	/// * `inout` and `other` must have the same length.
	fn transform_in_place(
		&self,
		inout: &mut [i32],
		other: &[i32],
		aliased: Operand,
	) -> Result<(), Error>;
}

static_assertions::assert_obj_safe!(ComputeLayer);
