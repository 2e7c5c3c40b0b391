// Copyright 2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use heavy_compute::{cpu::CpuLayer, transform, ComputeLayer, REFERENCE_BATCH_SIZE};
use heavy_compute_fast::FastCpuLayer;
use heavy_compute_test_utils::layer::random_inputs;
use rand::{rngs::StdRng, SeedableRng};

fn bench_layer(c: &mut Criterion, name: &str, layer: &dyn ComputeLayer) {
	let mut group = c.benchmark_group(name);
	let mut rng = StdRng::seed_from_u64(0);
	for size in [REFERENCE_BATCH_SIZE, 1 << 16, 1 << 20] {
		let (input_a, input_b) = random_inputs(&mut rng, size);
		let mut output = vec![0i32; size];

		group.throughput(Throughput::Bytes((3 * size * std::mem::size_of::<i32>()) as u64));
		group.bench_function(BenchmarkId::from_parameter(size), |bench| {
			bench.iter(|| transform(layer, &input_a, &input_b, &mut output, size as i32));
		});
	}
	group.finish()
}

fn bench_transform(c: &mut Criterion) {
	bench_layer(c, "transform/cpu", &<CpuLayer>::default());
	bench_layer(c, "transform/fast_cpu", &<FastCpuLayer>::default());
	bench_layer(c, "transform/fast_cpu_p32", &FastCpuLayer::<32>::default());
}

criterion_main!(transform_benches);
criterion_group!(transform_benches, bench_transform);
