//! Optional differential test against a production-grade reference solver.
//! Only compiled when the `cadical-crosscheck` feature is enabled, since
//! building `cadical`'s bundled C++ sources is not assumed in every
//! environment (spec SPEC_FULL §4.13).
#![cfg(feature = "cadical-crosscheck")]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sat_core::{solve_depth_first, FormulaStoreBuilder};

fn random_3sat(num_vars: usize, seed: u64) -> (sat_core::FormulaStore, Vec<Vec<i64>>) {
    let num_clauses = (num_vars as f64 * 4.25) as usize;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut clauses = Vec::with_capacity(num_clauses);
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
        builder.push_clause(clause.iter().copied()).unwrap();
        clauses.push(clause);
    }
    (builder.build().unwrap(), clauses)
}

fn cadical_is_sat(clauses: &[Vec<i64>]) -> bool {
    let mut solver: cadical::Solver = Default::default();
    for clause in clauses {
        solver.add_clause(clause.iter().map(|&lit| lit as i32));
    }
    matches!(solver.solve(), Some(true))
}

#[test]
fn agrees_with_cadical_on_random_instances() {
    for seed in 0..20u64 {
        let (store, clauses) = random_3sat(30, seed);
        let ours = solve_depth_first(&store);
        let reference = cadical_is_sat(&clauses);
        assert_eq!(ours.is_sat(), reference, "seed {} disagreed", seed);
    }
}
