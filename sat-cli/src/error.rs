use thiserror::Error;

use crate::dimacs::DimacsError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("could not open {path:?}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {path:?}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Dimacs(#[from] DimacsError),

    #[error(transparent)]
    Solve(#[from] sat_core::SolveError),
}
