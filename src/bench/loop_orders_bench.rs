//! Criterion benchmark comparing the six loop orders.
//!
//! Sizes are kept small enough for criterion's iteration counts; the stride
//! effects already separate the orders clearly by n=256. For the full-size
//! runs (5000, 10000) use the binary, which times a single pass per kernel.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use loop_orders::Kernel;
use loop_orders::matrix::{self, SEED};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_loop_orders(crit: &mut Criterion) {
    let mut group = crit.benchmark_group("loop_orders");

    for n in [64, 128, 256] {
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut a = matrix::alloc(n).expect("bench allocation");
        let mut b = matrix::alloc(n).expect("bench allocation");
        let mut c = matrix::alloc(n).expect("bench allocation");
        matrix::fill(&mut a, &mut rng);
        matrix::fill(&mut b, &mut rng);

        // ~2n^3 flops per multiplication.
        group.throughput(Throughput::Elements(2 * (n as u64).pow(3)));

        for kernel in Kernel::ALL {
            group.bench_with_input(BenchmarkId::new(kernel.name(), n), &n, |bench, &n| {
                bench.iter(|| {
                    if kernel.needs_zero() {
                        matrix::zero(&mut c);
                    }
                    kernel.run(&a, &b, &mut c, n);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_loop_orders);
criterion_main!(benches);
