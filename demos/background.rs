use maze_astar::{AstarSolver, BoundedLog, Cell, Maze, SearchWorker};
use std::sync::Arc;

// Runs the two-goal search on a worker thread and prints the trace it left in the log once done.

fn main() {
    let maze = Maze::square(6);
    let log = Arc::new(BoundedLog::default());
    let worker = SearchWorker::spawn(
        maze,
        Cell::new(0, 0),
        Cell::new(5, 5),
        Cell::new(3, 0),
        AstarSolver::new(),
        log.clone(),
    )
    .unwrap();
    match worker.join() {
        Ok(results) => {
            for line in log.lines() {
                println!("{}", line);
            }
            println!("Total cost: {:?}", results.total_cost());
        }
        Err(e) => println!("Search failed: {}", e),
    }
}
