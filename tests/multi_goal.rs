use maze_astar::{
    AstarSolver, BoundedLog, CancellationToken, Cell, LogSink, Maze, NoopLog, SearchError,
};

fn run(maze: &Maze, start: Cell, a: Cell, b: Cell) -> maze_astar::MultiGoalResults {
    AstarSolver::new()
        .run_multi_goal(maze, start, a, b, &CancellationToken::new(), &NoopLog)
        .unwrap()
}

#[test]
fn chains_nearer_goal_first() {
    let maze = Maze::square(5);
    let start = Cell::new(0, 0);
    let far = Cell::new(4, 4);
    let near = Cell::new(0, 4);
    let results = run(&maze, start, far, near);
    assert_eq!(results.destination_near, near);
    assert_eq!(results.destination_far, far);
    let second = results.second.as_ref().unwrap();
    assert_eq!(second.start(), near);
    assert_eq!(results.first.cost(), Some(2.0));
    assert_eq!(second.cost(), Some(4.0));
    assert_eq!(results.total_cost(), Some(6.0));
    assert_eq!(
        results.total_states_opened(),
        results.first.states_opened + second.states_opened
    );
    let route = results.route();
    assert_eq!(route.first(), Some(&start));
    assert_eq!(route.last(), Some(&far));
    // 4 horizontal moves, then 4 vertical moves, the nearer goal counted once.
    assert_eq!(route.len(), 9);
}

#[test]
fn combined_report_sums_both_legs() {
    let maze = Maze::square(5);
    let results = run(&maze, Cell::new(2, 2), Cell::new(0, 2), Cell::new(2, 4));
    let report = results.report();
    assert_eq!(
        report[0],
        "As first destination was chosen the (2, 4) and as second the (0, 2)"
    );
    assert_eq!(report[2], "Total cost= 4");
    let opened = results.total_states_opened();
    assert_eq!(report[3], format!("Total states opened: {}", opened));
    assert!(report.contains(&"Path found from (2, 2) to (2, 4)".to_owned()));
    assert!(report.contains(&"Path found from (2, 4) to (0, 2)".to_owned()));
    let second = results.second.as_ref().unwrap();
    assert_eq!(
        maze_astar::AStarResults::combined(&results.first, second),
        report
    );
}

#[test]
fn unreachable_far_goal_leaves_total_blank() {
    // The bottom right cell is a sealed pocket.
    let maze = Maze::from_lines(&["....", "....", "...#", "..#."]);
    let start = Cell::new(0, 0);
    let pocket = Cell::new(3, 3);
    let other = Cell::new(0, 3);
    let results = run(&maze, start, pocket, other);
    // (0, 3) is 1.5 away and (3, 3) is 4.5 away.
    assert_eq!(results.destination_near, other);
    assert!(results.first.found());
    let second = results.second.as_ref().unwrap();
    assert!(!second.found());
    assert!(!results.found());
    assert_eq!(results.total_cost(), None);
    assert_eq!(results.report()[2], "Total cost= ");
}

#[test]
fn second_leg_skipped_when_first_fails() {
    let maze = Maze::from_lines(&[".#.", "##.", "..."]);
    let start = Cell::new(2, 0);
    let sealed = Cell::new(0, 0);
    let results = run(&maze, start, Cell::new(2, 2), sealed);
    // (0, 0) is 2 away and (2, 2) is 1 away, so the reachable goal goes first.
    assert_eq!(results.destination_near, Cell::new(2, 2));
    assert!(results.second.as_ref().is_some_and(|r| !r.found()));

    let results = run(&maze, Cell::new(0, 2), sealed, Cell::new(2, 2));
    assert_eq!(results.destination_near, sealed);
    assert!(!results.first.found());
    assert!(results.second.is_none());
    let report = results.report();
    assert_eq!(
        report[0],
        "As first destination was chosen the (0, 0) and as second the (2, 2)"
    );
    assert_eq!(report[2], "Total cost= ");
    assert_eq!(
        report[3],
        format!("Total states opened: {}", results.first.states_opened)
    );
    assert!(report.contains(&"No path found from (0, 2) to (0, 0)".to_owned()));
}

#[test]
fn cancellation_propagates_from_driver() {
    let maze = Maze::square(5);
    let token = CancellationToken::new();
    token.cancel();
    let results = AstarSolver::new().run_multi_goal(
        &maze,
        Cell::new(0, 0),
        Cell::new(4, 4),
        Cell::new(0, 4),
        &token,
        &NoopLog,
    );
    assert!(matches!(results, Err(SearchError::Cancelled)));
}

#[test]
fn both_legs_write_to_shared_log() {
    let maze = Maze::square(3);
    let log = BoundedLog::default();
    AstarSolver::new()
        .run_multi_goal(
            &maze,
            Cell::new(0, 0),
            Cell::new(2, 2),
            Cell::new(0, 2),
            &CancellationToken::new(),
            &log,
        )
        .unwrap();
    let banners = log
        .messages()
        .into_iter()
        .filter(|m| m.starts_with("**** Analyzing initial state"))
        .collect::<Vec<_>>();
    assert_eq!(
        banners,
        vec![
            "**** Analyzing initial state (0, 0) with A* algorithm ****",
            "**** Analyzing initial state (0, 2) with A* algorithm ****",
        ]
    );
    log.clear();
    assert!(log.is_empty());
}
