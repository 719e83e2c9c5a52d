//! Search drivers: depth-first recursive DPLL and the breadth-first
//! frontier (spec §4.7, §4.8).

mod breadth;
mod depth;

pub use breadth::solve_breadth_first_with;
pub use depth::solve_depth_first_with;

use crate::config::Configuration;
use crate::heuristic::MaxOccurPower;
use crate::store::FormulaStore;

/// Result of advancing a single configuration by one reduction round
/// (spec §4.8's `DPLL_STEP`).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum StepResult {
    Tbd,
    Fail,
    Success,
}

/// One clause-length reduction pass plus pure-variable reduction,
/// classified into `{TBD, FAIL, SUCCESS}`.
pub(crate) fn dpll_step(cfg: &mut Configuration, store: &FormulaStore) -> StepResult {
    if crate::reduce::clen_reductions(cfg, store).is_err() {
        return StepResult::Fail;
    }
    crate::reduce::purity_reduction(cfg, store);
    if cfg.all_satisfied(store) {
        StepResult::Success
    } else {
        StepResult::Tbd
    }
}

/// Solves `store` with the depth-first recursive driver, using the
/// default production chooser ([`MaxOccurPower`]).
pub fn solve_depth_first(store: &FormulaStore) -> crate::SatSolution {
    solve_depth_first_with(store, &MaxOccurPower)
}

/// Solves `store` with the breadth-first frontier driver, using the
/// default production chooser ([`MaxOccurPower`]).
pub fn solve_breadth_first(store: &FormulaStore) -> Result<crate::SatSolution, crate::SolveError> {
    solve_breadth_first_with(store, &MaxOccurPower)
}
