use maze_astar::{AstarSolver, CancellationToken, Cell, ClosedSetMode, MazeConfig, NoopLog};
use rand::prelude::*;

// Compares the number of opened states with and without a global closed set on a random maze.
// The default mode only rejects cells already on a node's own branch, so cells can be opened
// many times over.

fn main() {
    let config = MazeConfig {
        rows: 10,
        columns: 10,
        blocked_probability: 0.25,
    };
    let mut rng = StdRng::seed_from_u64(7);
    let mut maze = config.build(&mut rng);
    let start = Cell::new(0, 0);
    let end = Cell::new(config.rows - 1, config.columns - 1);
    maze.set_blocked(start, false);
    maze.set_blocked(end, false);
    println!("{}", maze);

    for closed_set in [ClosedSetMode::AncestorOnly, ClosedSetMode::Global] {
        let mut solver = AstarSolver::new();
        solver.closed_set = closed_set;
        let results = solver
            .run_search(&maze, start, end, &CancellationToken::new(), &NoopLog)
            .unwrap();
        println!(
            "{:?}: cost {:?}, {} states opened",
            closed_set,
            results.cost(),
            results.states_opened
        );
    }
}
