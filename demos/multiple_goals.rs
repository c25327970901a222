use maze_astar::{AstarSolver, CancellationToken, Cell, Maze, NoopLog};

// In this example a route is found from the start through two goals on a 5x5 maze with shape
//  _____
// |S...G|
// |.###.|
// |.....|
// |.#.#.|
// |G....|
//  _____
// The goal in the top row is only 2.0 away by the heuristic, the one in the bottom row 4.0, so
// it is visited first.

fn main() {
    let maze = Maze::from_lines(&[".....", ".###.", ".....", ".#.#.", "....."]);
    let results = AstarSolver::new()
        .run_multi_goal(
            &maze,
            Cell::new(0, 0),
            Cell::new(4, 0),
            Cell::new(0, 4),
            &CancellationToken::new(),
            &NoopLog,
        )
        .unwrap();
    let second = results
        .second
        .as_ref()
        .map(|r| r.path_cells())
        .unwrap_or_default();
    println!("{}", maze.render_routes(&results.first.path_cells(), &second));
    for line in results.report() {
        println!("{}", line);
    }
}
