// Copyright 2025 Irreducible Inc.

use heavy_compute_utils::ensure;

use crate::{
	error::{Buffer, Error},
	layer::{ComputeLayer, Operand},
};

/// Applies the transform to the first `size` elements of the buffers.
///
/// Elements of `output` at indices `size` and above are left untouched. A `size` of zero performs
/// no reads or writes at all.
///
/// ## Throws
///
/// * [`Error::NegativeSize`] if `size` is negative.
/// * [`Error::BufferTooShort`] if any buffer holds fewer than `size` elements.
pub fn transform<L: ComputeLayer + ?Sized>(
	layer: &L,
	input_a: &[i32],
	input_b: &[i32],
	output: &mut [i32],
	size: i32,
) -> Result<(), Error> {
	let size = checked_size(size)?;
	check_len(Buffer::InputA, input_a.len(), size)?;
	check_len(Buffer::InputB, input_b.len(), size)?;
	check_len(Buffer::Output, output.len(), size)?;

	if size == 0 {
		return Ok(());
	}
	layer.transform(&input_a[..size], &input_b[..size], &mut output[..size])
}

/// Applies the transform to the first `size` elements, overwriting the `aliased` input with the
/// results.
///
/// Each element is read exactly once before it is written, so the outcome is identical to
/// [`transform`] into a separate buffer.
///
/// ## Throws
///
/// * [`Error::NegativeSize`] if `size` is negative.
/// * [`Error::BufferTooShort`] if either buffer holds fewer than `size` elements.
pub fn transform_in_place<L: ComputeLayer + ?Sized>(
	layer: &L,
	inout: &mut [i32],
	other: &[i32],
	aliased: Operand,
	size: i32,
) -> Result<(), Error> {
	let size = checked_size(size)?;
	let (inout_buffer, other_buffer) = match aliased {
		Operand::A => (Buffer::InputA, Buffer::InputB),
		Operand::B => (Buffer::InputB, Buffer::InputA),
	};
	check_len(inout_buffer, inout.len(), size)?;
	check_len(other_buffer, other.len(), size)?;

	if size == 0 {
		return Ok(());
	}
	layer.transform_in_place(&mut inout[..size], &other[..size], aliased)
}

fn checked_size(size: i32) -> Result<usize, Error> {
	ensure!(size >= 0, Error::NegativeSize { size });
	Ok(size as usize)
}

fn check_len(buffer: Buffer, len: usize, size: usize) -> Result<(), Error> {
	ensure!(len >= size, Error::BufferTooShort { buffer, len, size });
	Ok(())
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	use assert_matches::assert_matches;

	use super::*;
	use crate::{compute_scalar, cpu::CpuLayer};

	#[test]
	fn test_reference_vector() {
		let input = [0, 1, 2, 3];
		let mut output = [i32::MIN; 4];
		transform(&CpuLayer::<8>, &input, &input, &mut output, 4).unwrap();
		assert_eq!(output, [0, 2, -1, 0]);
	}

	#[test]
	fn test_negative_size() {
		let mut output = [7; 4];
		assert_matches!(
			transform(&CpuLayer::<8>, &[0; 4], &[0; 4], &mut output, -1),
			Err(Error::NegativeSize { size: -1 })
		);
		assert_matches!(
			transform_in_place(&CpuLayer::<8>, &mut output, &[0; 4], Operand::A, i32::MIN),
			Err(Error::NegativeSize { .. })
		);
		assert_eq!(output, [7; 4]);
	}

	#[test]
	fn test_short_buffers() {
		let layer = CpuLayer::<8>;
		let mut output = [0; 5];

		assert_matches!(
			transform(&layer, &[0; 4], &[0; 5], &mut output, 5),
			Err(Error::BufferTooShort {
				buffer: Buffer::InputA,
				len: 4,
				size: 5
			})
		);
		assert_matches!(
			transform(&layer, &[0; 5], &[0; 3], &mut output, 5),
			Err(Error::BufferTooShort {
				buffer: Buffer::InputB,
				len: 3,
				..
			})
		);
		assert_matches!(
			transform(&layer, &[0; 5], &[0; 5], &mut output[..2], 5),
			Err(Error::BufferTooShort {
				buffer: Buffer::Output,
				..
			})
		);
		assert_matches!(
			transform_in_place(&layer, &mut output, &[0; 4], Operand::B, 5),
			Err(Error::BufferTooShort {
				buffer: Buffer::InputA,
				len: 4,
				..
			})
		);
	}

	#[test]
	fn test_zero_size_leaves_output_untouched() {
		let mut output = [42; 3];
		transform(&CpuLayer::<8>, &[], &[], &mut output, 0).unwrap();
		assert_eq!(output, [42; 3]);

		transform_in_place(&CpuLayer::<8>, &mut output, &[], Operand::A, 0).unwrap();
		assert_eq!(output, [42; 3]);
	}

	#[test]
	fn test_longer_buffers_only_touch_prefix() {
		let input_a = [5, 6, 7, 8, 9];
		let input_b = [1, 2, 3, 4, 5];
		let mut output = [i32::MAX; 5];
		transform(&CpuLayer::<2>, &input_a, &input_b, &mut output, 3).unwrap();

		for i in 0..3 {
			assert_eq!(output[i], compute_scalar(input_a[i], input_b[i]));
		}
		assert_eq!(output[3..], [i32::MAX; 2]);
	}

	#[test]
	fn test_error_messages() {
		let err = transform(&CpuLayer::<8>, &[0; 1], &[0; 4], &mut [0; 4], 4).unwrap_err();
		assert_eq!(err.to_string(), "input a buffer has length 1, which is shorter than size 4");
	}
}
