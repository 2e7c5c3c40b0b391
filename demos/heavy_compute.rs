// Copyright 2025 Irreducible Inc.

use std::{fmt::Display, iter::repeat_with, str::FromStr, time::Instant};

use anyhow::{ensure, Result};
use clap::{value_parser, Parser};
use heavy_compute::{
	compute_scalar, cpu::CpuLayer, transform, transform_in_place, ComputeLayer, Operand,
	REFERENCE_BATCH_SIZE,
};
use heavy_compute_fast::{make_compute_layer, FastCpuLayer};
use heavy_compute_utils::rayon::adjust_thread_pool;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{info, info_span};
use tracing_profile::init_tracing;

#[derive(Debug, Clone, Copy)]
enum LayerKind {
	Reference,
	Parallel,
}

impl FromStr for LayerKind {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"reference" => Ok(Self::Reference),
			"parallel" => Ok(Self::Parallel),
			_ => Err(anyhow::anyhow!("Unknown layer, expected `reference` or `parallel`")),
		}
	}
}

impl Display for LayerKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}",
			match self {
				LayerKind::Reference => "reference",
				LayerKind::Parallel => "parallel",
			}
		)
	}
}

#[derive(Debug, Parser)]
struct Args {
	/// The number of elements to transform.
	#[arg(short, long, default_value_t = REFERENCE_BATCH_SIZE as i32, value_parser = value_parser!(i32).range(0..))]
	size: i32,
	/// The compute layer to run on. Chosen from the environment when omitted.
	#[arg(long)]
	layer: Option<LayerKind>,
	/// Seed for the random input vectors.
	#[arg(long, default_value_t = 0)]
	seed: u64,
	/// Write the results over input vector `a` instead of a separate buffer.
	#[arg(long, default_value_t = false)]
	in_place: bool,
}

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.expect("failed to init thread pool");

	let args = Args::parse();

	let _guard = init_tracing().expect("failed to initialize tracing");

	let layer: Box<dyn ComputeLayer> = match args.layer {
		Some(LayerKind::Reference) => Box::new(<CpuLayer>::default()),
		Some(LayerKind::Parallel) => Box::new(<FastCpuLayer>::default()),
		None => make_compute_layer(),
	};

	println!("Transforming {} elements on {:?}", args.size, layer);

	let size = args.size as usize;
	let mut rng = StdRng::seed_from_u64(args.seed);
	let input_a = repeat_with(|| rng.gen::<i32>()).take(size).collect::<Vec<_>>();
	let input_b = repeat_with(|| rng.gen::<i32>()).take(size).collect::<Vec<_>>();

	let start = Instant::now();
	let output = {
		let _span = info_span!("transform", size, in_place = args.in_place).entered();
		if args.in_place {
			let mut inout = input_a.clone();
			transform_in_place(&layer, &mut inout, &input_b, Operand::A, args.size)?;
			inout
		} else {
			let mut output = vec![0; size];
			transform(&layer, &input_a, &input_b, &mut output, args.size)?;
			output
		}
	};
	let elapsed = start.elapsed();

	let mismatches = output
		.iter()
		.zip(input_a.iter().zip(&input_b))
		.filter(|&(&out, (&a, &b))| out != compute_scalar(a, b))
		.count();
	ensure!(mismatches == 0, "{mismatches} of {size} elements differ from the scalar reference");

	info!(size, ?elapsed, group_width = layer.group_width(), "transform verified");
	Ok(())
}
