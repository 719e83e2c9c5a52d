use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sat_core::{solve_breadth_first, solve_depth_first, FormulaStoreBuilder};

/// A random 3-SAT formula at a fixed clause-to-variable ratio, built with a
/// deterministic seed so benchmark runs are comparable.
fn random_3sat(num_vars: usize, ratio: f64, seed: u64) -> sat_core::FormulaStore {
    let num_clauses = (num_vars as f64 * ratio) as usize;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = FormulaStoreBuilder::new(num_vars, num_clauses);
    for _ in 0..num_clauses {
        let clause: Vec<i64> = (0..3)
            .map(|_| {
                let var = rng.gen_range(1..=num_vars) as i64;
                if rng.gen_bool(0.5) {
                    var
                } else {
                    -var
                }
            })
            .collect();
        builder.push_clause(clause).unwrap();
    }
    builder.build().unwrap()
}

fn driver_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("random-3sat");
    for &num_vars in &[20usize, 40, 60] {
        group.bench_function(format!("depth-first/{}", num_vars), |b| {
            b.iter_batched(
                || random_3sat(num_vars, 4.25, 42),
                |store| black_box(solve_depth_first(&store)),
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("breadth-first/{}", num_vars), |b| {
            b.iter_batched(
                || random_3sat(num_vars, 4.25, 42),
                |store| black_box(solve_breadth_first(&store)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = driver_benchmark
}
criterion_main!(benches);
