// Copyright 2025 Irreducible Inc.

/// Number of terms accumulated per element.
pub const ACCUMULATION_STEPS: usize = 5;

/// Computes one output element from a pair of inputs.
///
/// Evaluates $\sum_{j=0}^{4} \sin(a + j) \cos(b - j)$ in single precision and truncates the sum
/// toward zero. The magnitude of the sum is bounded by [`ACCUMULATION_STEPS`], so the result lies
/// in `-5..=5` for every input.
#[inline]
pub fn compute_scalar(a: i32, b: i32) -> i32 {
	let val_a = a as f32;
	let val_b = b as f32;

	let acc = (0..ACCUMULATION_STEPS).fold(0.0f32, |acc, j| {
		let j = j as f32;
		acc + (val_a + j).sin() * (val_b - j).cos()
	});

	acc as i32
}
