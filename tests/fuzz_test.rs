/// Fuzzes the search by checking for many random mazes that a path is found exactly when the goal
/// is reachable by being part of the same connected component. Both closed-set modes are tested.
use maze_astar::{
    heuristic, AstarSolver, CancellationToken, Cell, ClosedSetMode, Grid, Maze, NoopLog,
};
use rand::prelude::*;

fn random_maze(n: usize, rng: &mut StdRng, p: f64, start: Cell, end: Cell) -> Maze {
    let mut maze = Maze::random(n, n, p, rng);
    maze.set_blocked(start, false);
    maze.set_blocked(end, false);
    maze.update();
    maze
}

fn visualize_maze(maze: &Maze, start: &Cell, end: &Cell) {
    for row in 0..maze.rows() {
        for column in 0..maze.columns() {
            let c = Cell::new(row, column);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if maze.is_blocked(c) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let token = CancellationToken::new();
    for closed_set in [ClosedSetMode::AncestorOnly, ClosedSetMode::Global] {
        let mut solver = AstarSolver::new();
        solver.closed_set = closed_set;
        solver.trace = false;
        let start = Cell::new(0, 0);
        let end = Cell::new(N - 1, N - 1);
        for _ in 0..N_GRIDS {
            let maze = random_maze(N, &mut rng, 0.35, start, end);
            let reachable = maze.reachable(start, end);
            let results = solver
                .run_search(&maze, start, end, &token, &NoopLog)
                .unwrap();
            // Show the maze if a path is not found
            if results.found() != reachable {
                visualize_maze(&maze, &start, &end);
            }
            assert!(results.found() == reachable);
            if let Some(cost) = results.cost() {
                assert!(cost >= heuristic(start, end));
                let cells = results.path_cells();
                assert_eq!(cells.first(), Some(&start));
                assert_eq!(cells.last(), Some(&end));
            }
        }
    }
}

/// The global closed set must find paths of the same cost while never opening more states.
#[test]
fn fuzz_closed_set_modes_agree() {
    const N: usize = 7;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    let token = CancellationToken::new();
    let ancestor_only = AstarSolver::new();
    let mut global = AstarSolver::new();
    global.closed_set = ClosedSetMode::Global;
    let start = Cell::new(0, 0);
    let end = Cell::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, &mut rng, 0.3, start, end);
        let a = ancestor_only
            .run_search(&maze, start, end, &token, &NoopLog)
            .unwrap();
        let g = global
            .run_search(&maze, start, end, &token, &NoopLog)
            .unwrap();
        if a.cost() != g.cost() {
            visualize_maze(&maze, &start, &end);
        }
        assert_eq!(a.cost(), g.cost());
        assert!(g.states_opened <= a.states_opened);
    }
}

/// Without obstacles the heuristic is exact.
#[test]
fn fuzz_open_maze_distance() {
    const N: usize = 9;
    let mut rng = StdRng::seed_from_u64(0);
    let maze = Maze::square(N);
    let solver = AstarSolver::new();
    let token = CancellationToken::new();
    for _ in 0..200 {
        let start = Cell::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let end = Cell::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let results = solver
            .run_search(&maze, start, end, &token, &NoopLog)
            .unwrap();
        assert_eq!(results.cost(), Some(heuristic(start, end)));
    }
}
