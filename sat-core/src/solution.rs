//! The solver's result type (spec §3 I4, §6, §8 P1).

use crate::config::Configuration;
use crate::store::FormulaStore;

/// A full variable assignment, indexed `0..num_vars` for variables
/// `1..=num_vars`. Free variables are reported as `true` (spec §9 open
/// question (c)).
pub type Valuation = Vec<bool>;

/// The verdict a search driver returns for a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatSolution {
    Satisfiable(Valuation),
    Unsatisfiable,
}

impl SatSolution {
    pub fn from_configuration(store: &FormulaStore, cfg: &Configuration) -> SatSolution {
        debug_assert!(cfg.all_satisfied(store));
        SatSolution::Satisfiable(store.var_indices().map(|v| cfg.value_of(v)).collect())
    }

    pub fn is_sat(&self) -> bool {
        matches!(self, SatSolution::Satisfiable(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, SatSolution::Unsatisfiable)
    }

    /// Checks that every clause of `store` is satisfied by this valuation
    /// (spec §8 P1/P8). Returns `true` trivially for `Unsatisfiable`.
    pub fn satisfies(&self, store: &FormulaStore, clauses: &[Vec<i64>]) -> bool {
        match self {
            SatSolution::Unsatisfiable => true,
            SatSolution::Satisfiable(valuation) => {
                let _ = store;
                clauses.iter().all(|clause| {
                    clause.iter().any(|&lit| {
                        let var = lit.unsigned_abs() as usize;
                        let value = valuation[var - 1];
                        if lit > 0 {
                            value
                        } else {
                            !value
                        }
                    })
                })
            }
        }
    }
}
