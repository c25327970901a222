use core::fmt;
use itertools::Itertools;

use crate::heuristic;
use crate::maze::Cell;

/// Index of a [State] inside its [SearchTree].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub usize);

/// A node of the search tree. `g`, `h` and `f` are fixed when the node is created.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub cell: Cell,
    pub destination: Cell,
    pub parent: Option<StateId>,
    /// Cost of the move from the parent to this node.
    pub weight: f64,
    pub g: f64,
    pub h: f64,
    pub f: f64,
}

impl State {
    pub fn is_final(&self) -> bool {
        self.cell == self.destination
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// `g`, `h` and `f` in the form used by trace lines.
    pub fn costs(&self) -> String {
        format!("g={}, h={}, f={}", self.g, self.h, self.f)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.cell.fmt(f)
    }
}

/// Arena owning every [State] generated during one search. Parents are referenced by index, so
/// many children can share an ancestor and the final path is recovered by walking indices.
#[derive(Clone, Debug)]
pub struct SearchTree {
    states: Vec<State>,
    destination: Cell,
    heuristic_factor: f64,
}

impl SearchTree {
    pub const ROOT: StateId = StateId(0);

    /// Creates a tree holding only the evaluated root at [SearchTree::ROOT].
    pub fn new(start: Cell, destination: Cell, initial_weight: f64, heuristic_factor: f64) -> Self {
        let mut tree = SearchTree {
            states: Vec::new(),
            destination,
            heuristic_factor,
        };
        let h = tree.estimate(start);
        tree.states.push(State {
            cell: start,
            destination,
            parent: None,
            weight: initial_weight,
            g: initial_weight,
            h,
            f: initial_weight + h,
        });
        tree
    }

    fn estimate(&self, cell: Cell) -> f64 {
        heuristic(cell, self.destination) * self.heuristic_factor
    }

    pub fn destination(&self) -> Cell {
        self.destination
    }

    pub fn root(&self) -> &State {
        &self.states[Self::ROOT.0]
    }

    pub fn get(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Adds an evaluated child of `parent` occupying `cell`, reached by a move costing `weight`.
    pub fn child(&mut self, parent: StateId, cell: Cell, weight: f64) -> StateId {
        let g = self.get(parent).g + weight;
        let h = self.estimate(cell);
        let id = StateId(self.states.len());
        self.states.push(State {
            cell,
            destination: self.destination,
            parent: Some(parent),
            weight,
            g,
            h,
            f: g + h,
        });
        id
    }

    /// Iterates from `id` up to the root, `id` included.
    pub fn ancestry(&self, id: StateId) -> impl Iterator<Item = StateId> + '_ {
        std::iter::successors(Some(id), |id| self.get(*id).parent)
    }

    /// Whether a child of `parent` placed on `cell` would be the first occurrence of that cell on
    /// its own branch. Only ancestors are checked, not the rest of the tree.
    pub fn is_unique_descendant(&self, parent: StateId, cell: Cell) -> bool {
        self.ancestry(parent).all(|id| self.get(id).cell != cell)
    }

    /// The branch ending at `id`, root first.
    pub fn path(&self, id: StateId) -> Vec<StateId> {
        let mut path = self.ancestry(id).collect_vec();
        path.reverse();
        path
    }

    pub fn path_cells(&self, id: StateId) -> Vec<Cell> {
        self.path(id).into_iter().map(|i| self.get(i).cell).collect()
    }
}
