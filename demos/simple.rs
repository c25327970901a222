use maze_astar::{AstarSolver, CancellationToken, Cell, FacadeLog, Maze};

// In this example a path is found on a 3x3 maze with shape
//  ___
// |S#E|
// |.#.|
// |...|
//  ___
// where
// - # marks a blocked cell
// - S marks the start
// - E marks the end
//
// Horizontal moves cost 0.5 and vertical moves cost 1.0.

fn main() {
    let maze = Maze::from_lines(&[".#.", ".#.", "..."]);
    println!("{}", maze);
    let results = AstarSolver::new()
        .run_search(
            &maze,
            Cell::new(0, 0),
            Cell::new(0, 2),
            &CancellationToken::new(),
            &FacadeLog,
        )
        .unwrap();
    for line in results.results() {
        println!("{}", line);
    }
}
