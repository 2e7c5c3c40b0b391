// Copyright 2025 Irreducible Inc.

//! Multi-threaded compute layer built on rayon, and constructors that pick a layer at runtime.

pub mod layer;

use heavy_compute::{cpu::CpuLayer, ComputeLayer};
use heavy_compute_utils::env::{boolean_env_flag_set, parsed_env_var};
pub use layer::FastCpuLayer;

/// When set, [`make_compute_layer`] returns the single-threaded reference layer.
pub const REFERENCE_LAYER_ENV: &str = "HEAVY_COMPUTE_REFERENCE_LAYER";

/// Overrides the number of element groups each rayon task processes at minimum.
pub const MIN_GROUPS_PER_TASK_ENV: &str = "HEAVY_COMPUTE_MIN_GROUPS_PER_TASK";

pub fn make_portable_layer() -> CpuLayer {
	CpuLayer::default()
}

/// Creates the layer selected by the environment.
///
/// This is [`FastCpuLayer`] unless [`REFERENCE_LAYER_ENV`] is set.
pub fn make_compute_layer() -> Box<dyn ComputeLayer> {
	if boolean_env_flag_set(REFERENCE_LAYER_ENV) {
		tracing::debug!("using the reference compute layer");
		return Box::new(make_portable_layer());
	}

	let layer = match parsed_env_var::<usize>(MIN_GROUPS_PER_TASK_ENV).filter(|&n| n > 0) {
		Some(min_groups) => <FastCpuLayer>::default().with_min_groups_per_task(min_groups),
		None => <FastCpuLayer>::default(),
	};
	Box::new(layer)
}
