use thiserror::Error;

/// Failures that can arise while building a [`crate::FormulaStore`] or
/// running a search driver over it.
///
/// SAT/UNSAT verdicts are *not* represented here; they are results
/// ([`crate::SatSolution`]), not errors. This type only covers the
/// malformed-input and resource-exhaustion paths from the error table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("formula declares {num_vars} variable(s) but literal {lit} was added to clause {clause}")]
    LiteralOutOfRange { clause: usize, lit: i64, num_vars: usize },

    #[error("formula declares {declared} clause(s) but {actual} were added")]
    ClauseCountMismatch { declared: usize, actual: usize },

    #[error("clause {clause} has no satisfiable literal left")]
    EmptyClause { clause: usize },

    #[error("breadth-first frontier could not grow past {attempted} slots")]
    FrontierAllocationFailed { attempted: usize },
}
