//! Branching heuristics (spec §4.6, §9 "dispatch of the chooser").
//!
//! The teacher exposes branching as a pluggable `BranchingStrategy` trait
//! with several interchangeable implementations selected when a solver is
//! constructed; `Chooser` follows the same shape here. Only
//! [`MaxOccurPower`] is used by the production drivers — the others exist
//! for benchmarking (`sat-bench`) and to document the lighter variants the
//! original source left as dead code.

use crate::config::{AssignmentState, Configuration};
use crate::literal::Literal;
use crate::store::FormulaStore;

/// Picks the next literal to branch on. Implementations must be
/// deterministic given `(store, cfg)` so that search-tree shapes are
/// reproducible across runs.
pub trait Chooser: Send + Sync {
    /// Returns `None` iff no undecided variable remains.
    fn choose(&self, store: &FormulaStore, cfg: &Configuration) -> Option<Literal>;
}

fn is_undecided(cfg: &Configuration, v: usize) -> bool {
    cfg.assignment_state(v) == AssignmentState::Unassigned
}

/// The composite heuristic: score each undecided literal by occurrence
/// count plus a weighted "power" term, then blend the two polarities with
/// a 0.75 cross-term. The only chooser used by the production search
/// drivers.
#[derive(Clone, Copy, Default)]
pub struct MaxOccurPower;

impl Chooser for MaxOccurPower {
    fn choose(&self, store: &FormulaStore, cfg: &Configuration) -> Option<Literal> {
        let c = store.num_clauses();
        let unsat_count = c - cfg.sat_count();
        let f = if c == 0 {
            0.0
        } else {
            (store.mean_occ_len() * unsat_count as f64 / c as f64).round()
        };

        let mut best: Option<(f64, Literal)> = None;
        for v in store.var_indices() {
            if !is_undecided(cfg, v) {
                continue;
            }
            let pos = Literal::pos(v);
            let neg = Literal::neg(v);

            let count_pos = cfg.occurrence_count(store, pos) as f64;
            let count_neg = cfg.occurrence_count(store, neg) as f64;
            let power_pos = cfg.power(store, pos) as f64;
            let power_neg = cfg.power(store, neg) as f64;

            let score_pos = count_pos + f * power_neg;
            let score_neg = count_neg + f * power_pos;

            let final_pos = score_pos + 0.75 * score_neg;
            let final_neg = score_neg + 0.75 * score_pos;

            // Positive polarity is checked before negative for the same
            // variable, and variables are visited low-to-high: first-seen
            // wins ties (spec §4.6).
            if best.map_or(true, |(best_score, _)| final_pos > best_score) {
                best = Some((final_pos, pos));
            }
            if best.map_or(true, |(best_score, _)| final_neg > best_score) {
                best = Some((final_neg, neg));
            }
        }
        best.map(|(_, lit)| lit)
    }
}

/// The first undecided variable, always tried positively. Grounded in the
/// original source's unused `var_choose_first`.
#[derive(Clone, Copy, Default)]
pub struct FirstUndecided;

impl Chooser for FirstUndecided {
    fn choose(&self, store: &FormulaStore, cfg: &Configuration) -> Option<Literal> {
        store
            .var_indices()
            .find(|&v| is_undecided(cfg, v))
            .map(Literal::pos)
    }
}

/// The undecided literal (either polarity) with the most unsatisfied
/// occurrences — a lighter alternative to [`MaxOccurPower`] without the
/// power term, suitable for the breadth-first driver's optional "lighter"
/// chooser (spec §4.8 step 2). Grounded in the original source's unused
/// `lit_choose_max_occur`.
#[derive(Clone, Copy, Default)]
pub struct MaxOccurrenceLiteral;

impl Chooser for MaxOccurrenceLiteral {
    fn choose(&self, store: &FormulaStore, cfg: &Configuration) -> Option<Literal> {
        let mut best: Option<(usize, Literal)> = None;
        for v in store.var_indices() {
            if !is_undecided(cfg, v) {
                continue;
            }
            let pos = Literal::pos(v);
            let neg = Literal::neg(v);
            let count_pos = cfg.occurrence_count(store, pos);
            let count_neg = cfg.occurrence_count(store, neg);
            if best.map_or(true, |(best_count, _)| count_pos > best_count) {
                best = Some((count_pos, pos));
            }
            if best.map_or(true, |(best_count, _)| count_neg > best_count) {
                best = Some((count_neg, neg));
            }
        }
        best.map(|(_, lit)| lit)
    }
}
