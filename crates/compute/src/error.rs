// Copyright 2025 Irreducible Inc.

use std::fmt;

/// Identifies one of the three buffers of a transform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
	InputA,
	InputB,
	Output,
}

impl fmt::Display for Buffer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::InputA => "input a",
			Self::InputB => "input b",
			Self::Output => "output",
		};
		f.write_str(name)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("size must be non-negative, got {size}")]
	NegativeSize { size: i32 },
	#[error("{buffer} buffer has length {len}, which is shorter than size {size}")]
	BufferTooShort {
		buffer: Buffer,
		len: usize,
		size: usize,
	},
}
