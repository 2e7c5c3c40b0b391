// Copyright 2025 Irreducible Inc.

use heavy_compute::{cpu::CpuLayer, ComputeLayer, REFERENCE_BATCH_SIZE};
use heavy_compute_test_utils::layer::{
	test_generic_in_place, test_generic_layers_agree, test_generic_matches_scalar,
	test_generic_partial_groups, test_generic_processing_order, test_generic_reference_vector,
};

#[test]
fn test_exec_reference_vector() {
	test_generic_reference_vector(<CpuLayer>::default());
	test_generic_reference_vector(CpuLayer::<3>);
}

#[test]
fn test_exec_matches_scalar() {
	test_generic_matches_scalar(<CpuLayer>::default(), REFERENCE_BATCH_SIZE);
	test_generic_matches_scalar(<CpuLayer>::default(), REFERENCE_BATCH_SIZE + 5);
}

#[test]
fn test_exec_partial_groups() {
	test_generic_partial_groups(<CpuLayer>::default());
	test_generic_partial_groups(CpuLayer::<1>);
	test_generic_partial_groups(CpuLayer::<3>);
	test_generic_partial_groups(CpuLayer::<16>);
}

#[test]
fn test_exec_in_place() {
	test_generic_in_place(<CpuLayer>::default(), 1001);
	test_generic_in_place(CpuLayer::<5>, 17);
}

#[test]
fn test_exec_processing_order() {
	test_generic_processing_order(<CpuLayer>::default(), 333);
}

#[test]
fn test_exec_group_width_does_not_change_result() {
	test_generic_layers_agree(CpuLayer::<1>, CpuLayer::<8>, 517);
	test_generic_layers_agree(CpuLayer::<7>, CpuLayer::<64>, 517);
}

#[test]
fn test_exec_through_trait_objects() {
	let boxed: Box<dyn ComputeLayer> = Box::new(CpuLayer::<4>);
	assert_eq!(boxed.group_width(), 4);
	test_generic_reference_vector(&boxed);
	test_generic_layers_agree(boxed, &CpuLayer::<8>, 100);
}
