//! The immutable, post-parse formula store (spec §3, §4.2).
//!
//! Clauses are numbered `1..=num_clauses` and variables `1..=num_vars`
//! internally (index 0 of every bitset is unused); this is the 1-indexed
//! choice the spec explicitly permits implementers to make as long as the
//! public interface keeps DIMACS-style variable numbering.

use crate::bitset::Bitset;
use crate::error::SolveError;
use crate::literal::{Literal, VarId};

/// Per-clause literal lists and per-literal occurrence lists, built once by
/// [`FormulaStoreBuilder`] and shared read-only by every search node.
#[derive(Clone, Debug)]
pub struct FormulaStore {
    num_vars: usize,
    num_clauses: usize,
    /// `clauses_pos[k]`: bitset over variables appearing positively in clause k.
    clauses_pos: Vec<Bitset>,
    /// `clauses_neg[k]`: bitset over variables appearing negatively in clause k.
    clauses_neg: Vec<Bitset>,
    /// `occur_pos[v]`: bitset over clauses in which `+v` appears.
    occur_pos: Vec<Bitset>,
    /// `occur_neg[v]`: bitset over clauses in which `-v` appears.
    occur_neg: Vec<Bitset>,
    n_lits: usize,
    mean_occ_len: f64,
}

impl FormulaStore {
    #[inline]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    #[inline]
    pub fn num_clauses(&self) -> usize {
        self.num_clauses
    }

    #[inline]
    pub fn mean_occ_len(&self) -> f64 {
        self.mean_occ_len
    }

    #[inline]
    pub fn n_lits(&self) -> usize {
        self.n_lits
    }

    #[inline]
    pub fn clause_pos(&self, clause: usize) -> &Bitset {
        &self.clauses_pos[clause]
    }

    #[inline]
    pub fn clause_neg(&self, clause: usize) -> &Bitset {
        &self.clauses_neg[clause]
    }

    /// The bitset of clauses in which `lit` occurs.
    #[inline]
    pub fn occur(&self, lit: Literal) -> &Bitset {
        if lit.sign() {
            &self.occur_pos[lit.var()]
        } else {
            &self.occur_neg[lit.var()]
        }
    }

    /// Iterates clause indices `1..=num_clauses`.
    #[inline]
    pub fn clause_indices(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.num_clauses
    }

    /// Iterates variable ids `1..=num_vars`.
    #[inline]
    pub fn var_indices(&self) -> std::ops::RangeInclusive<VarId> {
        1..=self.num_vars
    }
}

/// Incrementally builds a [`FormulaStore`] from a declared `(num_vars,
/// num_clauses)` shape and a stream of clauses, each a list of nonzero
/// signed literals (spec §4.2). This is the core-side half of formula
/// construction; decoding DIMACS text into literal lists is an external
/// collaborator's job (see the `sat-cli` crate).
pub struct FormulaStoreBuilder {
    num_vars: usize,
    num_clauses: usize,
    clauses_pos: Vec<Bitset>,
    clauses_neg: Vec<Bitset>,
    occur_pos: Vec<Bitset>,
    occur_neg: Vec<Bitset>,
    n_lits: usize,
    next_clause: usize,
}

impl FormulaStoreBuilder {
    pub fn new(num_vars: usize, num_clauses: usize) -> FormulaStoreBuilder {
        FormulaStoreBuilder {
            num_vars,
            num_clauses,
            clauses_pos: (0..=num_clauses).map(|_| Bitset::new(num_vars + 1)).collect(),
            clauses_neg: (0..=num_clauses).map(|_| Bitset::new(num_vars + 1)).collect(),
            occur_pos: (0..=num_vars).map(|_| Bitset::new(num_clauses + 1)).collect(),
            occur_neg: (0..=num_vars).map(|_| Bitset::new(num_clauses + 1)).collect(),
            n_lits: 0,
            next_clause: 0,
        }
    }

    /// Adds one clause, given as an iterator of nonzero signed literals.
    /// Duplicate literals within a clause are idempotent; a clause
    /// containing both `v` and `-v` (a tautology) is accepted as-is.
    pub fn push_clause(
        &mut self,
        literals: impl IntoIterator<Item = i64>,
    ) -> Result<(), SolveError> {
        self.next_clause += 1;
        let clause = self.next_clause;
        if clause > self.num_clauses {
            return Err(SolveError::ClauseCountMismatch {
                declared: self.num_clauses,
                actual: clause,
            });
        }
        for value in literals {
            if value == 0 || value.unsigned_abs() as usize > self.num_vars {
                return Err(SolveError::LiteralOutOfRange {
                    clause,
                    lit: value,
                    num_vars: self.num_vars,
                });
            }
            let lit = Literal::from_i64(value);
            if lit.sign() {
                self.clauses_pos[clause].set(lit.var());
            } else {
                self.clauses_neg[clause].set(lit.var());
            }
            self.occur(lit).set(clause);
            self.n_lits += 1;
        }
        Ok(())
    }

    fn occur(&mut self, lit: Literal) -> &mut Bitset {
        if lit.sign() {
            &mut self.occur_pos[lit.var()]
        } else {
            &mut self.occur_neg[lit.var()]
        }
    }

    /// Finalizes the store. Fails if fewer or more than `num_clauses`
    /// clauses were pushed.
    pub fn build(self) -> Result<FormulaStore, SolveError> {
        if self.next_clause != self.num_clauses {
            return Err(SolveError::ClauseCountMismatch {
                declared: self.num_clauses,
                actual: self.next_clause,
            });
        }
        let mean_occ_len = if self.num_vars == 0 {
            0.0
        } else {
            self.n_lits as f64 / self.num_vars as f64
        };
        Ok(FormulaStore {
            num_vars: self.num_vars,
            num_clauses: self.num_clauses,
            clauses_pos: self.clauses_pos,
            clauses_neg: self.clauses_neg,
            occur_pos: self.occur_pos,
            occur_neg: self.occur_neg,
            n_lits: self.n_lits,
            mean_occ_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_small_formula() {
        let mut builder = FormulaStoreBuilder::new(3, 2);
        builder.push_clause([1, 2]).unwrap();
        builder.push_clause([-1, 3]).unwrap();
        let store = builder.build().unwrap();

        assert_eq!(store.num_vars(), 3);
        assert_eq!(store.num_clauses(), 2);
        assert!(store.clause_pos(1).get(1));
        assert!(store.clause_pos(1).get(2));
        assert!(store.clause_neg(2).get(1));
        assert!(store.clause_pos(2).get(3));
        assert!(store.occur(Literal::pos(1)).get(1));
        assert!(store.occur(Literal::neg(1)).get(2));
    }

    #[test]
    fn literal_out_of_range_is_rejected() {
        let mut builder = FormulaStoreBuilder::new(2, 1);
        let err = builder.push_clause([3]).unwrap_err();
        assert!(matches!(err, SolveError::LiteralOutOfRange { .. }));
    }

    #[test]
    fn clause_count_mismatch_is_rejected() {
        let mut builder = FormulaStoreBuilder::new(2, 2);
        builder.push_clause([1]).unwrap();
        let err = builder.build().unwrap_err();
        assert!(matches!(err, SolveError::ClauseCountMismatch { .. }));
    }

    #[test]
    fn empty_formula_has_zero_clauses() {
        let store = FormulaStoreBuilder::new(3, 0).build().unwrap();
        assert_eq!(store.num_clauses(), 0);
    }
}
