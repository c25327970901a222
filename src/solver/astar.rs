use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info, trace, warn};
use std::time::Instant;

use crate::cancel::CancellationToken;
use crate::error::{SearchError, SearchResult};
use crate::logs::LogSink;
use crate::maze::{Cell, Direction, Grid};
use crate::results::AStarResults;
use crate::solver::{AstarSolver, ClosedSetMode};
use crate::state::{SearchTree, StateId};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Keeps a single open state per cell: the one with the lowest `f`, the earliest one on ties.
/// Cells keep the order in which they first appear in `open`.
fn dedup_open(tree: &SearchTree, open: &[StateId]) -> Vec<StateId> {
    let mut best: FxIndexMap<Cell, StateId> = FxIndexMap::default();
    for &id in open {
        match best.entry(tree.get(id).cell) {
            Vacant(e) => {
                e.insert(id);
            }
            Occupied(mut e) => {
                if tree.get(id).f < tree.get(*e.get()).f {
                    e.insert(id);
                }
            }
        }
    }
    best.into_values().collect()
}

/// Position of the open state with the lowest `f`, the first one on ties.
fn select_best(tree: &SearchTree, open: &[StateId]) -> Option<usize> {
    open.iter()
        .position_min_by(|a, b| tree.get(**a).f.total_cmp(&tree.get(**b).f))
}

/// Runs a single A* search. Cells are assumed to have been validated by the caller.
pub(crate) fn search<G: Grid>(
    solver: &AstarSolver,
    grid: &G,
    start: Cell,
    destination: Cell,
    cancellation: &CancellationToken,
    sink: &dyn LogSink,
) -> SearchResult<AStarResults> {
    let watch = Instant::now();
    let mut tree = SearchTree::new(
        start,
        destination,
        solver.initial_weight,
        solver.heuristic_factor,
    );
    let mut open: Vec<StateId> = vec![SearchTree::ROOT];
    let mut closed: FxHashSet<Cell> = FxHashSet::default();
    let mut states_opened: u64 = 1;
    let mut selected = SearchTree::ROOT;
    let mut final_state = tree.root().is_final().then_some(SearchTree::ROOT);

    info!("Searching path from {} to {}", start, destination);
    let root = tree.root();
    sink.write(&format!(
        "**** Analyzing initial state {} with A* algorithm ****",
        root
    ));
    sink.write(&format!("Initial state: {} with {}", root, root.costs()));

    while final_state.is_none() && !open.is_empty() {
        if let Err(e) = cancellation.check() {
            warn!(
                "Search from {} to {} cancelled after opening {} states",
                start, destination, states_opened
            );
            return Err(e);
        }

        let current = tree.get(selected).cell;
        for direction in Direction::ALL {
            let Some(cell) = grid.neighbor(current, direction) else {
                continue;
            };
            if current.offset(direction) != Some(cell)
                || !grid.contains(cell)
                || grid.is_blocked(cell)
            {
                return Err(SearchError::InvalidNeighbor {
                    from: current,
                    to: cell,
                });
            }
            if !tree.is_unique_descendant(selected, cell) {
                continue;
            }
            if solver.closed_set == ClosedSetMode::Global && closed.contains(&cell) {
                continue;
            }
            let child = tree.child(selected, cell, direction.edge_weight());
            open.push(child);
            states_opened += 1;
            let state = tree.get(child);
            trace!("opening child {} with {}", state, state.costs());
            if solver.trace {
                sink.write(&format!("opening child {} with {}", state, state.costs()));
            }
        }

        if let Some(ix) = open.iter().position(|id| *id == selected) {
            open.remove(ix);
        }
        closed.insert(current);
        if solver.trace {
            sink.write(&format!("closing state {}", tree.get(selected)));
        }

        if open.is_empty() {
            break;
        }

        open = dedup_open(&tree, &open);
        let Some(ix) = select_best(&tree, &open) else {
            break;
        };
        selected = open[ix];
        let state = tree.get(selected);
        debug!("new selected state {} with {}", state, state.costs());
        if solver.trace {
            sink.write(&format!(
                "new selected state {} with {}",
                state,
                state.costs()
            ));
        }

        if state.is_final() {
            final_state = Some(selected);
            sink.write(&format!(
                "found final state {} with {}",
                state,
                state.costs()
            ));
        }
    }

    sink.write(&format!(
        "Analyzing initial state {} with A* algorithm ended",
        tree.root()
    ));
    if final_state.is_none() {
        warn!(
            "No path from {} to {} after opening {} states",
            start, destination, states_opened
        );
    }

    let results = AStarResults::new(tree, final_state, watch.elapsed(), states_opened);
    info!(
        "Search from {} to {} finished: cost {:?}, {} states opened",
        start,
        destination,
        results.cost(),
        states_opened
    );
    for message in results.results() {
        sink.write(&message);
    }
    Ok(results)
}
