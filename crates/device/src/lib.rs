// Copyright 2025 Irreducible Inc.

//! Identifiers for the compute back-ends a host application can target.
//!
//! The labels are stable and shared with the host configuration, so they must never change.

use std::{fmt, str::FromStr};

/// Label of [`Device::GpuOpenCl`].
pub const GPU_CL: &str = "gpu_opencl";
/// Label of [`Device::GpuMetal`].
pub const GPU_MTL: &str = "gpu_metal";
/// Label of [`Device::Fpga`].
pub const FPGA: &str = "fpga";
/// Label of [`Device::CpuFf`].
pub const CPU_FF: &str = "cpu_ff";
/// Label of [`Device::CpuOpenMp`].
pub const CPU_OMP: &str = "cpu_omp";

/// A compute back-end, identified in configuration by its [`label`](Device::label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
	GpuOpenCl,
	GpuMetal,
	Fpga,
	CpuFf,
	CpuOpenMp,
}

/// Broad hardware class of a [`Device`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
	Gpu,
	Fpga,
	Cpu,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device label {0:?}")]
pub struct UnknownDevice(pub String);

impl Device {
	pub const ALL: [Self; 5] = [
		Self::GpuOpenCl,
		Self::GpuMetal,
		Self::Fpga,
		Self::CpuFf,
		Self::CpuOpenMp,
	];

	pub const fn label(self) -> &'static str {
		match self {
			Self::GpuOpenCl => GPU_CL,
			Self::GpuMetal => GPU_MTL,
			Self::Fpga => FPGA,
			Self::CpuFf => CPU_FF,
			Self::CpuOpenMp => CPU_OMP,
		}
	}

	pub const fn kind(self) -> DeviceKind {
		match self {
			Self::GpuOpenCl | Self::GpuMetal => DeviceKind::Gpu,
			Self::Fpga => DeviceKind::Fpga,
			Self::CpuFf | Self::CpuOpenMp => DeviceKind::Cpu,
		}
	}
}

impl fmt::Display for Device {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Device {
	type Err = UnknownDevice;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|device| device.label().eq_ignore_ascii_case(s))
			.ok_or_else(|| UnknownDevice(s.to_owned()))
	}
}
