//! The reducer: clause-length reductions (unit propagation + empty-clause
//! detection) and pure-variable reduction, both run to a fixed point with
//! the cyclic wrap-around scan mandated by spec §4.4/§4.5/§9.

use log::trace;

use crate::config::{Configuration, VariableState};
use crate::error::SolveError;
use crate::store::FormulaStore;

/// Scans clauses to a fixed point, propagating every unit clause found.
///
/// The scan is cyclic: positions are visited `1, 2, .., C, 1, 2, ..`, and
/// stop only once a full lap completes with no productive step. A plain
/// forward-only sweep would miss cascades created by an assignment made
/// later in the same pass (spec §9, "fixed-point loop discipline") — the
/// cursor/`last_edit` pair below exists to avoid exactly that bug.
pub fn clen_reductions(cfg: &mut Configuration, store: &FormulaStore) -> Result<(), SolveError> {
    let c = store.num_clauses();
    if c == 0 {
        return Ok(());
    }

    let mut last_edit = c + 1;
    let mut i = 1usize;
    while i != last_edit {
        if i == c + 1 {
            i = 1;
        }
        if !cfg.is_clause_satisfied(i) {
            match cfg.clause_length(store, i) {
                0 => return Err(SolveError::EmptyClause { clause: i }),
                1 => {
                    let lit = cfg.unit_of(store, i);
                    trace!("clen_reductions: clause {} forces {}", i, lit);
                    cfg.assign_lit(store, lit);
                    last_edit = if i == 1 { c + 1 } else { i };
                }
                _ => {}
            }
        }
        i += 1;
    }
    Ok(())
}

/// Scans variables to a fixed point, assigning every variable whose
/// remaining polarity among unsatisfied clauses is pure (or absent).
/// Unlike [`clen_reductions`], this can never fail: it only ever marks
/// clauses satisfied, never contradicts an existing assignment.
pub fn purity_reduction(cfg: &mut Configuration, store: &FormulaStore) {
    let v = store.num_vars();
    if v == 0 {
        return;
    }

    let mut last_edit = v + 1;
    let mut i = 1usize;
    while i != last_edit {
        if i == v + 1 {
            i = 1;
        }
        if cfg.assignment_state(i) == crate::config::AssignmentState::Unassigned {
            use crate::literal::Literal;
            match cfg.variable_state(store, i) {
                VariableState::PureTrue => {
                    trace!("purity_reduction: variable {} is pure positive", i);
                    cfg.assign_lit(store, Literal::pos(i));
                    last_edit = if i == 1 { v + 1 } else { i };
                }
                VariableState::PureFalse => {
                    trace!("purity_reduction: variable {} is pure negative", i);
                    cfg.assign_lit(store, Literal::neg(i));
                    last_edit = if i == 1 { v + 1 } else { i };
                }
                VariableState::Absent => {
                    // Free variable: arbitrarily fix it to eliminate it
                    // from future consideration (spec §4.5, §9 open
                    // question (b)). Satisfiability is unaffected.
                    trace!("purity_reduction: variable {} is free, defaulting to true", i);
                    cfg.assign_lit(store, Literal::pos(i));
                    last_edit = if i == 1 { v + 1 } else { i };
                }
                VariableState::Mixed => {}
            }
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FormulaStoreBuilder;

    fn store(clauses: &[&[i64]], num_vars: usize) -> FormulaStore {
        let mut builder = FormulaStoreBuilder::new(num_vars, clauses.len());
        for c in clauses {
            builder.push_clause(c.iter().copied()).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn unit_propagation_cascades_in_one_pass() {
        // 1 2 / -2 3 / -3 : unit on -3 forces 3=false, cascading to 2=false, 1=true.
        let store = store(&[&[1, 2], &[-2, 3], &[-3]], 3);
        let mut cfg = Configuration::new(&store);
        clen_reductions(&mut cfg, &store).unwrap();
        assert!(cfg.all_satisfied(&store));
    }

    #[test]
    fn empty_clause_is_detected() {
        let store = store(&[&[1], &[-1]], 1);
        let mut cfg = Configuration::new(&store);
        let err = clen_reductions(&mut cfg, &store).unwrap_err();
        assert!(matches!(err, SolveError::EmptyClause { .. }));
    }

    #[test]
    fn purity_reduction_never_fails_and_eliminates_pure_vars() {
        let store = store(&[&[1, 2], &[1, -2]], 2);
        let mut cfg = Configuration::new(&store);
        purity_reduction(&mut cfg, &store);
        assert!(cfg.all_satisfied(&store));
    }

    #[test]
    fn idempotent_on_repeated_calls() {
        let store = store(&[&[1, 2], &[-2, 3], &[-3]], 3);
        let mut cfg = Configuration::new(&store);
        clen_reductions(&mut cfg, &store).unwrap();
        let after_first = cfg.clone();
        clen_reductions(&mut cfg, &store).unwrap();
        assert_eq!(format!("{:?}", after_first), format!("{:?}", cfg));
    }
}
