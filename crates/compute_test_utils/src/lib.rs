// Copyright 2025 Irreducible Inc.

//! Test routines shared by every [`heavy_compute::ComputeLayer`] implementation.

pub mod layer;
