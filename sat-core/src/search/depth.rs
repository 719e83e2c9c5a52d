use log::error;

use crate::config::Configuration;
use crate::heuristic::Chooser;
use crate::solution::SatSolution;
use crate::store::FormulaStore;

use super::{dpll_step, StepResult};

/// The depth-first recursive DPLL driver (spec §4.7). Uses
/// `O(depth * sizeof(Configuration))` stack/heap; never fails outright —
/// a chooser returning no literal while clauses remain unsatisfied is
/// treated defensively as UNSAT, per spec §7's error table, rather than
/// surfaced as an error.
pub fn solve_depth_first_with(store: &FormulaStore, chooser: &dyn Chooser) -> SatSolution {
    let cfg = Configuration::new(store);
    match dpll_rec(store, cfg, chooser) {
        Some(solved) => SatSolution::from_configuration(store, &solved),
        None => SatSolution::Unsatisfiable,
    }
}

fn dpll_rec(store: &FormulaStore, mut cfg: Configuration, chooser: &dyn Chooser) -> Option<Configuration> {
    match dpll_step(&mut cfg, store) {
        StepResult::Fail => return None,
        StepResult::Success => return Some(cfg),
        StepResult::Tbd => {}
    }

    let lit = match chooser.choose(store, &cfg) {
        Some(lit) => lit,
        None => {
            error!("chooser returned no literal with unsatisfied clauses remaining");
            return None;
        }
    };

    // Clone-before-branch: the positive attempt gets a fresh copy so that,
    // on failure, `cfg` is still available to try the negative branch
    // (spec §5).
    let mut branch_pos = cfg.clone();
    branch_pos.assign_lit(store, lit);
    if let Some(solved) = dpll_rec(store, branch_pos, chooser) {
        return Some(solved);
    }

    cfg.assign_lit(store, -lit);
    dpll_rec(store, cfg, chooser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::MaxOccurPower;
    use crate::store::FormulaStoreBuilder;

    fn store(clauses: &[&[i64]], num_vars: usize) -> FormulaStore {
        let mut builder = FormulaStoreBuilder::new(num_vars, clauses.len());
        for c in clauses {
            builder.push_clause(c.iter().copied()).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn sat_example() {
        let store = store(&[&[1, 2], &[-1, 3]], 3);
        let solution = solve_depth_first_with(&store, &MaxOccurPower);
        assert!(solution.is_sat());
    }

    #[test]
    fn unsat_example() {
        let store = store(&[&[1], &[-1]], 1);
        let solution = solve_depth_first_with(&store, &MaxOccurPower);
        assert!(solution.is_unsat());
    }

    #[test]
    fn empty_formula_is_trivially_sat() {
        let store = store(&[], 3);
        let solution = solve_depth_first_with(&store, &MaxOccurPower);
        assert!(solution.is_sat());
    }
}
