//! Runs a two-goal search on a background thread so the thread presenting results never blocks
//! on the search itself.
use log::info;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::cancel::CancellationToken;
use crate::error::{SearchError, SearchResult};
use crate::logs::LogSink;
use crate::maze::{Cell, Maze};
use crate::results::MultiGoalResults;
use crate::solver::AstarSolver;

/// Handle to a two-goal search running on its own thread.
pub struct SearchWorker {
    handle: JoinHandle<SearchResult<MultiGoalResults>>,
    cancellation: CancellationToken,
}

impl SearchWorker {
    /// Validates the cells on the calling thread, then starts the search on a new thread. The
    /// maze is owned by the worker for the duration of the run.
    pub fn spawn(
        maze: Maze,
        start: Cell,
        goal_a: Cell,
        goal_b: Cell,
        solver: AstarSolver,
        sink: Arc<dyn LogSink>,
    ) -> SearchResult<SearchWorker> {
        AstarSolver::validate(&maze, "start", start)?;
        AstarSolver::validate(&maze, "first goal", goal_a)?;
        AstarSolver::validate(&maze, "second goal", goal_b)?;

        let cancellation = CancellationToken::new();
        let token = cancellation.clone();
        let handle = thread::Builder::new()
            .name("maze-search".to_owned())
            .spawn(move || {
                sink.clear();
                let result =
                    solver.run_multi_goal(&maze, start, goal_a, goal_b, &token, sink.as_ref());
                if let Err(e) = &result {
                    sink.write(&e.to_string());
                }
                result
            })?;
        info!("Spawned search worker from {}", start);
        Ok(SearchWorker {
            handle,
            cancellation,
        })
    }

    /// Requests the search to stop. It ends within one expansion cycle and [join](Self::join)
    /// then returns [SearchError::Cancelled].
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the search to end.
    pub fn join(self) -> SearchResult<MultiGoalResults> {
        self.handle
            .join()
            .map_err(|_| SearchError::WorkerPanicked)?
    }
}
