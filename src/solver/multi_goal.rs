use log::info;

use crate::cancel::CancellationToken;
use crate::error::SearchResult;
use crate::heuristic;
use crate::logs::LogSink;
use crate::maze::{Cell, Grid};
use crate::results::MultiGoalResults;
use crate::solver::{astar, AstarSolver};

/// Orders two goals by heuristic distance from `start`, nearest first. Ties keep `goal_a` first.
pub fn order_goals(start: Cell, goal_a: Cell, goal_b: Cell) -> (Cell, Cell) {
    if heuristic(start, goal_a) <= heuristic(start, goal_b) {
        (goal_a, goal_b)
    } else {
        (goal_b, goal_a)
    }
}

/// Searches `start` to the nearer goal and, if that succeeds, the nearer goal to the farther one.
/// The two searches run one after the other on the calling thread since the second starts where
/// the first ends.
pub(crate) fn run<G: Grid>(
    solver: &AstarSolver,
    grid: &G,
    start: Cell,
    goal_a: Cell,
    goal_b: Cell,
    cancellation: &CancellationToken,
    sink: &dyn LogSink,
) -> SearchResult<MultiGoalResults> {
    let (destination_near, destination_far) = order_goals(start, goal_a, goal_b);
    info!(
        "First destination is {}, second is {}",
        destination_near, destination_far
    );

    let first = astar::search(solver, grid, start, destination_near, cancellation, sink)?;
    let second = match first.final_state() {
        Some(state) => {
            let from = state.cell;
            Some(astar::search(
                solver,
                grid,
                from,
                destination_far,
                cancellation,
                sink,
            )?)
        }
        None => {
            info!(
                "Skipping search towards {} since {} was not reached",
                destination_far, destination_near
            );
            None
        }
    };

    Ok(MultiGoalResults {
        destination_near,
        destination_far,
        first,
        second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearer_goal_goes_first() {
        let start = Cell::new(0, 0);
        // Three columns away costs 1.5, two rows away costs 2.
        let wide = Cell::new(0, 3);
        let tall = Cell::new(2, 0);
        assert_eq!(order_goals(start, tall, wide), (wide, tall));
        assert_eq!(order_goals(start, wide, tall), (wide, tall));
    }

    #[test]
    fn ties_keep_first_goal() {
        let start = Cell::new(2, 2);
        let a = Cell::new(2, 4);
        let b = Cell::new(3, 2);
        assert_eq!(order_goals(start, a, b), (a, b));
        assert_eq!(order_goals(start, b, a), (b, a));
    }
}
