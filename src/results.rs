use std::time::Duration;

use crate::maze::Cell;
use crate::state::{SearchTree, State, StateId};

/// Outcome of one completed search. A missing final state means the destination could not be
/// reached, which is a normal outcome rather than an error.
#[derive(Clone, Debug)]
pub struct AStarResults {
    tree: SearchTree,
    final_state: Option<StateId>,
    pub total_time: Duration,
    pub states_opened: u64,
}

impl AStarResults {
    pub(crate) fn new(
        tree: SearchTree,
        final_state: Option<StateId>,
        total_time: Duration,
        states_opened: u64,
    ) -> AStarResults {
        AStarResults {
            tree,
            final_state,
            total_time,
            states_opened,
        }
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    pub fn initial_state(&self) -> &State {
        self.tree.root()
    }

    pub fn final_state(&self) -> Option<&State> {
        self.final_state.map(|id| self.tree.get(id))
    }

    pub fn found(&self) -> bool {
        self.final_state.is_some()
    }

    pub fn start(&self) -> Cell {
        self.initial_state().cell
    }

    pub fn destination(&self) -> Cell {
        self.tree.destination()
    }

    /// Accumulated cost at the final state.
    pub fn cost(&self) -> Option<f64> {
        self.final_state().map(|s| s.g)
    }

    pub fn total_time_ms(&self) -> u128 {
        self.total_time.as_millis()
    }

    /// States from the initial to the final state, both included. Empty if no path was found.
    pub fn path_states(&self) -> Vec<&State> {
        self.final_state
            .map(|id| self.tree.path(id).into_iter().map(|i| self.tree.get(i)).collect())
            .unwrap_or_default()
    }

    pub fn path_cells(&self) -> Vec<Cell> {
        self.final_state
            .map(|id| self.tree.path_cells(id))
            .unwrap_or_default()
    }

    /// The full report of this run, as appended to the trace once the search ends.
    pub fn results(&self) -> Vec<String> {
        let mut messages = vec![format!(
            "Searching path from {} to {}",
            self.start(),
            self.destination()
        )];
        match self.final_state() {
            Some(state) => {
                messages.push(format!(
                    "Path found with final state: {} with {}",
                    state,
                    state.costs()
                ));
                messages.push(format!("Total cost = {}", state.g));
                messages.push(format!("States opened: {}", self.states_opened));
                messages.push(format!("Total time: {} ms", self.total_time_ms()));
                messages.push("Path until reach destination: ".to_owned());
                for state in self.path_states() {
                    let kind = if state.is_root() {
                        "initial state"
                    } else {
                        "move at state"
                    };
                    messages.push(format!("{} {} with {}", kind, state.cell, state.costs()));
                }
            }
            None => messages.push("No path found".to_owned()),
        }
        messages
    }

    /// A short success or failure statement followed by an empty line.
    pub fn summary(&self) -> Vec<String> {
        let mut messages = Vec::new();
        match self.final_state() {
            Some(state) => {
                messages.push(format!(
                    "Path found from {} to {}",
                    self.start(),
                    self.destination()
                ));
                messages.push(format!("Cost of this path = {}", state.g));
                messages.push(format!("States opened: {}", self.states_opened));
                messages.push(format!("Search time: {} ms", self.total_time_ms()));
            }
            None => messages.push(format!(
                "No path found from {} to {}",
                self.start(),
                self.destination()
            )),
        }
        messages.push(String::new());
        messages
    }

    /// One line per move from the initial state (excluded) to the final state.
    pub fn path(&self) -> Vec<String> {
        self.path_states()
            .into_iter()
            .filter(|s| !s.is_root())
            .map(|s| format!("move at state {} with {}", s.cell, s.costs()))
            .collect()
    }

    /// Combines two chained runs into a single report.
    pub fn combined(first: &AStarResults, second: &AStarResults) -> Vec<String> {
        report(first, second.destination(), Some(second))
    }
}

/// Report over a first run and an optional second run towards `far`. The total cost is left blank
/// when either run is missing a final state; counts and times are summed over the runs present.
fn report(first: &AStarResults, far: Cell, second: Option<&AStarResults>) -> Vec<String> {
    let runs = std::iter::once(first).chain(second).collect::<Vec<_>>();
    let total_cost = match second {
        Some(second) => first.cost().zip(second.cost()).map(|(a, b)| a + b),
        None => None,
    };
    let total_opened: u64 = runs.iter().map(|r| r.states_opened).sum();
    let total_time: Duration = runs.iter().map(|r| r.total_time).sum();

    let mut result = vec![
        format!(
            "As first destination was chosen the {} and as second the {}",
            first.destination(),
            far
        ),
        String::new(),
        format!(
            "Total cost= {}",
            total_cost.map(|c| c.to_string()).unwrap_or_default()
        ),
        format!("Total states opened: {}", total_opened),
        format!("Total search time: {} ms", total_time.as_millis()),
        String::new(),
    ];
    for run in &runs {
        result.extend(run.summary());
    }
    result.push("Path found:".to_owned());
    for run in &runs {
        result.extend(run.path());
    }
    result
}

/// Outcome of a two-goal run: the nearer goal is searched first from the start, then the farther
/// goal from the nearer one. The second search only runs if the first one found a path.
#[derive(Clone, Debug)]
pub struct MultiGoalResults {
    pub destination_near: Cell,
    pub destination_far: Cell,
    pub first: AStarResults,
    pub second: Option<AStarResults>,
}

impl MultiGoalResults {
    /// Whether the full route through both goals was found.
    pub fn found(&self) -> bool {
        self.first.found() && self.second.as_ref().is_some_and(|r| r.found())
    }

    /// Sum of both legs' costs, absent unless both legs were found.
    pub fn total_cost(&self) -> Option<f64> {
        self.first
            .cost()
            .zip(self.second.as_ref().and_then(|r| r.cost()))
            .map(|(a, b)| a + b)
    }

    pub fn total_states_opened(&self) -> u64 {
        self.first.states_opened + self.second.as_ref().map_or(0, |r| r.states_opened)
    }

    pub fn total_time(&self) -> Duration {
        self.first.total_time + self.second.as_ref().map_or(Duration::ZERO, |r| r.total_time)
    }

    /// The route through both goals. The nearer goal appears once.
    pub fn route(&self) -> Vec<Cell> {
        let mut route = self.first.path_cells();
        if let Some(second) = &self.second {
            route.extend(second.path_cells().into_iter().skip(1));
        }
        route
    }

    pub fn report(&self) -> Vec<String> {
        report(&self.first, self.destination_far, self.second.as_ref())
    }
}
