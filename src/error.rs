use thiserror::Error;

use crate::maze::Cell;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The run was aborted through its [CancellationToken](crate::CancellationToken). No partial
    /// result is produced.
    #[error("Search was cancelled")]
    Cancelled,

    #[error("The {role} cell {cell} lies outside the maze")]
    InvalidCell { role: &'static str, cell: Cell },

    #[error("The {role} cell {cell} is blocked")]
    BlockedCell { role: &'static str, cell: Cell },

    /// The grid produced a neighbour that is not a free cell one step away.
    #[error("Grid returned neighbour {to} of {from} which is not an adjacent free cell")]
    InvalidNeighbor { from: Cell, to: Cell },

    #[error("Could not spawn search worker: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Search worker panicked")]
    WorkerPanicked,
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

pub type SearchResult<T> = Result<T, SearchError>;
