use crate::cancel::CancellationToken;
use crate::error::{SearchError, SearchResult};
use crate::logs::LogSink;
use crate::maze::{Cell, Grid};
use crate::results::{AStarResults, MultiGoalResults};

pub mod astar;
pub mod multi_goal;

/// How previously expanded cells are treated when generating children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClosedSetMode {
    /// A child is only rejected if its cell already occurs among its own ancestors. The same cell
    /// may be opened again through a different branch.
    #[default]
    AncestorOnly,
    /// Additionally reject children whose cell has already been expanded anywhere in the tree.
    Global,
}

/// Settings for a weighted A* search over a [Grid].
#[derive(Clone, Debug, PartialEq)]
pub struct AstarSolver {
    /// Multiplies the heuristic estimate. Values above 1.0 trade optimality for speed.
    pub heuristic_factor: f64,
    pub closed_set: ClosedSetMode,
    /// Cost assigned to the initial state.
    pub initial_weight: f64,
    /// Whether every opened and closed state is written to the log sink.
    pub trace: bool,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            closed_set: ClosedSetMode::AncestorOnly,
            initial_weight: 0.0,
            trace: true,
        }
    }

    /// Checks that `cell` can take part in a search.
    pub fn validate<G: Grid>(grid: &G, role: &'static str, cell: Cell) -> SearchResult<()> {
        if !grid.contains(cell) {
            return Err(SearchError::InvalidCell { role, cell });
        }
        if grid.is_blocked(cell) {
            return Err(SearchError::BlockedCell { role, cell });
        }
        Ok(())
    }

    /// Searches a path from `start` to `destination`. Returns [SearchError::Cancelled] if the token
    /// is cancelled before the search ends, and a result without final state if the destination
    /// cannot be reached.
    pub fn run_search<G: Grid>(
        &self,
        grid: &G,
        start: Cell,
        destination: Cell,
        cancellation: &CancellationToken,
        sink: &dyn LogSink,
    ) -> SearchResult<AStarResults> {
        Self::validate(grid, "start", start)?;
        Self::validate(grid, "destination", destination)?;
        astar::search(self, grid, start, destination, cancellation, sink)
    }

    /// Routes from `start` through the nearer of the two goals to the other one, see
    /// [multi_goal::order_goals].
    pub fn run_multi_goal<G: Grid>(
        &self,
        grid: &G,
        start: Cell,
        goal_a: Cell,
        goal_b: Cell,
        cancellation: &CancellationToken,
        sink: &dyn LogSink,
    ) -> SearchResult<MultiGoalResults> {
        Self::validate(grid, "start", start)?;
        Self::validate(grid, "first goal", goal_a)?;
        Self::validate(grid, "second goal", goal_b)?;
        multi_goal::run(self, grid, start, goal_a, goal_b, cancellation, sink)
    }
}
