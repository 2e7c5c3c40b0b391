// Copyright 2025 Irreducible Inc.

//! An elementwise trigonometric transform over pairs of `i32` vectors.
//!
//! Every output element is `compute_scalar(a[i], b[i])`, with no dependency between indices. The
//! [`ComputeLayer`] trait abstracts over how the elements are scheduled; [`cpu::CpuLayer`] is the
//! single-threaded reference. Callers should go through [`transform`] and [`transform_in_place`],
//! which validate the buffer lengths before handing equal-length slices to a layer.

pub mod cpu;
mod error;
pub mod layer;
pub mod ops;
pub mod scalar;

pub use error::*;
pub use layer::{ComputeLayer, Operand};
pub use ops::{transform, transform_in_place};
pub use scalar::compute_scalar;

/// Default number of elements a layer issues together per scheduling step.
pub const N_PIPELINES: usize = 8;

/// Batch size the kernel is dimensioned for. Inputs of any length are accepted.
pub const REFERENCE_BATCH_SIZE: usize = 4096;
