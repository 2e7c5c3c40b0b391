// Copyright 2025 Irreducible Inc.

use std::iter::repeat_with;

use heavy_compute::{compute_scalar, transform, transform_in_place, ComputeLayer, Operand};
use itertools::Itertools;
use rand::{prelude::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Inputs of the end-to-end reference case; both operands use the same vector.
pub const REFERENCE_INPUT: [i32; 4] = [0, 1, 2, 3];

/// Expected output for [`REFERENCE_INPUT`].
pub const REFERENCE_OUTPUT: [i32; 4] = [0, 2, -1, 0];

/// Value used to detect writes past the requested size.
const SENTINEL: i32 = i32::MIN;

pub fn random_inputs(rng: &mut impl Rng, size: usize) -> (Vec<i32>, Vec<i32>) {
	let mut sample = || -> i32 {
		// Mix small values, where the trigonometric terms vary quickly, with the full range.
		if rng.gen_bool(0.5) {
			rng.gen_range(-1024..1024)
		} else {
			rng.gen()
		}
	};
	let input_a = repeat_with(&mut sample).take(size).collect();
	let input_b = repeat_with(&mut sample).take(size).collect();
	(input_a, input_b)
}

/// Sequential evaluation of the scalar function at every index.
pub fn expected_output(input_a: &[i32], input_b: &[i32]) -> Vec<i32> {
	input_a
		.iter()
		.zip_eq(input_b)
		.map(|(&a, &b)| compute_scalar(a, b))
		.collect()
}

fn to_size(len: usize) -> i32 {
	i32::try_from(len).expect("test sizes fit in i32")
}

pub fn test_generic_reference_vector<L: ComputeLayer>(layer: L) {
	let mut output = [SENTINEL; 4];
	transform(&layer, &REFERENCE_INPUT, &REFERENCE_INPUT, &mut output, 4).unwrap();
	assert_eq!(output, REFERENCE_OUTPUT);
}

pub fn test_generic_matches_scalar<L: ComputeLayer>(layer: L, size: usize) {
	let mut rng = StdRng::seed_from_u64(0);
	let (input_a, input_b) = random_inputs(&mut rng, size);

	let mut output = vec![SENTINEL; size];
	transform(&layer, &input_a, &input_b, &mut output, to_size(size)).unwrap();

	assert_eq!(output, expected_output(&input_a, &input_b));
}

/// Checks sizes around every multiple of the group width up to a few groups, with buffers longer
/// than the requested size.
pub fn test_generic_partial_groups<L: ComputeLayer>(layer: L) {
	let mut rng = StdRng::seed_from_u64(1);

	let width = layer.group_width();
	let capacity = 4 * width + 3;
	let (input_a, input_b) = random_inputs(&mut rng, capacity);
	let expected = expected_output(&input_a, &input_b);

	for size in 0..capacity {
		let mut output = vec![SENTINEL; capacity];
		transform(&layer, &input_a, &input_b, &mut output, to_size(size)).unwrap();

		assert_eq!(output[..size], expected[..size], "size={size}, width={width}");
		assert!(
			output[size..].iter().all(|&x| x == SENTINEL),
			"wrote past size={size}, width={width}"
		);
	}
}

pub fn test_generic_in_place<L: ComputeLayer>(layer: L, size: usize) {
	let mut rng = StdRng::seed_from_u64(2);
	let (input_a, input_b) = random_inputs(&mut rng, size);
	let expected = expected_output(&input_a, &input_b);

	let mut inout = input_a.clone();
	transform_in_place(&layer, &mut inout, &input_b, Operand::A, to_size(size)).unwrap();
	assert_eq!(inout, expected);

	let mut inout = input_b.clone();
	transform_in_place(&layer, &mut inout, &input_a, Operand::B, to_size(size)).unwrap();
	assert_eq!(inout, expected);

	// Only a prefix is transformed, the rest of the aliased input keeps its values.
	let prefix = size / 2;
	let mut inout = input_a.clone();
	transform_in_place(&layer, &mut inout, &input_b, Operand::A, to_size(prefix)).unwrap();
	assert_eq!(inout[..prefix], expected[..prefix]);
	assert_eq!(inout[prefix..], input_a[prefix..]);
}

/// Processes the same inputs in several orders and checks that they all agree.
pub fn test_generic_processing_order<L: ComputeLayer>(layer: L, size: usize) {
	let mut rng = StdRng::seed_from_u64(3);
	let (input_a, input_b) = random_inputs(&mut rng, size);

	let mut whole = vec![SENTINEL; size];
	transform(&layer, &input_a, &input_b, &mut whole, to_size(size)).unwrap();

	// Reverse index order.
	let mut reversed = vec![SENTINEL; size];
	for i in (0..size).rev() {
		reversed[i] = compute_scalar(input_a[i], input_b[i]);
	}
	assert_eq!(whole, reversed);

	// Uneven chunks through the layer, last chunk first.
	let mut chunked = vec![SENTINEL; size];
	let chunk_len = layer.group_width() * 2 + 1;
	let starts = (0..size).step_by(chunk_len).collect::<Vec<_>>();
	for &start in starts.iter().rev() {
		let end = (start + chunk_len).min(size);
		transform(
			&layer,
			&input_a[start..end],
			&input_b[start..end],
			&mut chunked[start..end],
			to_size(end - start),
		)
		.unwrap();
	}
	assert_eq!(whole, chunked);

	// Shuffled single-element calls.
	let mut indices = (0..size).collect::<Vec<_>>();
	indices.shuffle(&mut rng);
	let mut shuffled = vec![SENTINEL; size];
	for i in indices {
		transform(&layer, &input_a[i..=i], &input_b[i..=i], &mut shuffled[i..=i], 1).unwrap();
	}
	assert_eq!(whole, shuffled);
}

/// Checks that two layers, possibly with different group widths, agree on the same inputs.
pub fn test_generic_layers_agree<L1: ComputeLayer, L2: ComputeLayer>(
	lhs: L1,
	rhs: L2,
	size: usize,
) {
	let mut rng = StdRng::seed_from_u64(4);
	let (input_a, input_b) = random_inputs(&mut rng, size);

	let mut lhs_output = vec![SENTINEL; size];
	let mut rhs_output = vec![SENTINEL; size];
	transform(&lhs, &input_a, &input_b, &mut lhs_output, to_size(size)).unwrap();
	transform(&rhs, &input_a, &input_b, &mut rhs_output, to_size(size)).unwrap();

	assert_eq!(lhs_output, rhs_output);
}
