//! # maze_astar
//!
//! A maze pathfinding system. Implements a weighted
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search over a grid of free and
//! blocked cells where horizontal moves cost [HORIZONTAL_COST] and vertical moves cost
//! [VERTICAL_COST], and chains two such searches to route from a start cell through the
//! nearer of two goals to the farther one.
//!
//! The search keeps every generated [State](state::State) in an arena for the duration of a run.
//! Cycles are only rejected along a node's own ancestry, and the open set is reduced to the best
//! node per cell after every expansion. This is weaker than a global closed set, so the same cell
//! may be opened many times through different branches; the number of opened states reported by
//! [AStarResults] reflects that. A global closed set is available through
//! [ClosedSetMode::Global](solver::ClosedSetMode::Global).
//!
//! Unreachable goals are not errors: the run completes with no final state. Cancellation is
//! cooperative and checked once per expansion cycle, see [CancellationToken].
pub mod cancel;
pub mod error;
pub mod logs;
pub mod maze;
pub mod results;
pub mod solver;
pub mod state;
pub mod worker;

pub use crate::cancel::CancellationToken;
pub use crate::error::{SearchError, SearchResult};
pub use crate::logs::{BoundedLog, FacadeLog, LogSink, NoopLog};
pub use crate::maze::{Cell, Direction, Grid, Maze, MazeConfig};
pub use crate::results::{AStarResults, MultiGoalResults};
pub use crate::solver::{AstarSolver, ClosedSetMode};
pub use crate::state::{SearchTree, State, StateId};
pub use crate::worker::SearchWorker;

/// Cost of a move to the left or right.
pub const HORIZONTAL_COST: f64 = 0.5;
/// Cost of a move up or down.
pub const VERTICAL_COST: f64 = 1.0;

/// Estimated remaining cost between two cells, weighting column distance by [HORIZONTAL_COST]
/// and row distance by [VERTICAL_COST]. Never overestimates on a maze without obstacles, since
/// every path needs at least that many moves along each axis.
pub fn heuristic(a: Cell, b: Cell) -> f64 {
    a.column.abs_diff(b.column) as f64 * HORIZONTAL_COST
        + a.row.abs_diff(b.row) as f64 * VERTICAL_COST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_weights_axes_differently() {
        let origin = Cell::new(0, 0);
        assert_eq!(heuristic(origin, Cell::new(0, 4)), 2.0);
        assert_eq!(heuristic(origin, Cell::new(4, 0)), 4.0);
        assert_eq!(heuristic(Cell::new(3, 1), Cell::new(1, 4)), 3.5);
    }

    #[test]
    fn heuristic_is_symmetric() {
        let a = Cell::new(2, 7);
        let b = Cell::new(5, 1);
        assert_eq!(heuristic(a, b), heuristic(b, a));
        assert_eq!(heuristic(a, a), 0.0);
    }
}
