use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::Rng;

use crate::{HORIZONTAL_COST, VERTICAL_COST};

/// A position in the maze. Identity is by coordinate only; whether the cell is blocked is owned
/// by the [Maze].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Cell {
        Cell { row, column }
    }

    /// The cell one step away in `direction`, ignoring any grid bounds. [None] if the step would
    /// leave the non-negative coordinates.
    pub fn offset(self, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        Some(Cell::new(
            self.row.checked_add_signed(dr)?,
            self.column.checked_add_signed(dc)?,
        ))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The four axis-aligned moves. [Direction::ALL] is the order in which a node's neighbours are
/// expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Cost of taking a step in this direction.
    pub fn edge_weight(self) -> f64 {
        if self.horizontal() {
            HORIZONTAL_COST
        } else {
            VERTICAL_COST
        }
    }

    /// Row and column offset of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }

    pub fn horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// What the search needs from a grid. [Maze] is the implementation shipped with the crate.
pub trait Grid {
    /// Whether the cell lies inside the grid.
    fn contains(&self, cell: Cell) -> bool;
    fn is_blocked(&self, cell: Cell) -> bool;
    /// The cell one step away in `direction`, or [None] if that step leaves the grid or lands on
    /// a blocked cell.
    fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell>;
}

/// Parameters for generating a random [Maze].
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    /// Chance of each cell being blocked, clamped to `[0, 1]`.
    pub blocked_probability: f64,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: 5,
            columns: 5,
            blocked_probability: 0.2,
        }
    }
}

impl MazeConfig {
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Maze {
        Maze::random(self.rows, self.columns, self.blocked_probability, rng)
    }
}

/// [Maze] stores whether each cell is blocked in row-major order and maintains connected
/// components of free cells using a [UnionFind] structure. Components are only used to answer
/// reachability queries; the search itself never consults them.
#[derive(Clone, Debug)]
pub struct Maze {
    rows: usize,
    columns: usize,
    blocked: Vec<bool>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for Maze {
    fn default() -> Maze {
        Maze::square(MazeConfig::default().rows)
    }
}

impl Maze {
    /// Creates a maze with every cell free.
    pub fn new(rows: usize, columns: usize) -> Maze {
        Maze::with_blocked(rows, columns, vec![false; rows * columns])
    }

    /// Builds the maze around a row-major blocked mask and generates its components once.
    fn with_blocked(rows: usize, columns: usize, blocked: Vec<bool>) -> Maze {
        let mut maze = Maze {
            rows,
            columns,
            blocked,
            components: UnionFind::new(rows * columns),
            components_dirty: false,
        };
        maze.generate_components();
        maze
    }

    pub fn square(n: usize) -> Maze {
        Maze::new(n, n)
    }

    /// Creates a maze where each cell is independently blocked with the given probability.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        blocked_probability: f64,
        rng: &mut R,
    ) -> Maze {
        let p = blocked_probability.clamp(0.0, 1.0);
        let blocked = (0..rows * columns).map(|_| rng.gen_bool(p)).collect();
        Maze::with_blocked(rows, columns, blocked)
    }

    /// Parses a maze from lines of `#` (blocked) and any other character (free).
    ///
    /// # Panics
    ///
    /// Panics if the lines do not all have the same length.
    pub fn from_lines(lines: &[&str]) -> Maze {
        let rows = lines.len();
        let columns = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        let mut blocked = Vec::with_capacity(rows * columns);
        for (row, line) in lines.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                columns,
                "row {} of the maze has a different length than the first row",
                row
            );
            blocked.extend(line.chars().map(|c| c == '#'));
        }
        Maze::with_blocked(rows, columns, blocked)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The cell at the given coordinates, or [None] if out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        let cell = Cell::new(row, column);
        self.contains(cell).then_some(cell)
    }

    fn ix(&self, cell: Cell) -> usize {
        cell.row * self.columns + cell.column
    }

    fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.offset(direction).filter(|n| self.contains(*n))
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// they are (potentially) broken apart into multiple.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if !self.contains(cell) {
            return;
        }
        let ix = self.ix(cell);
        if blocked {
            if !self.blocked[ix] {
                self.components_dirty = true;
            }
        } else {
            for direction in Direction::ALL {
                if let Some(n) = self.neighbor(cell, direction) {
                    let n_ix = self.ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
        self.blocked[ix] = blocked;
    }

    /// Flips a cell between free and blocked.
    pub fn toggle(&mut self, cell: Cell) {
        if self.contains(cell) {
            let blocked = self.is_blocked(cell);
            self.set_blocked(cell, !blocked);
        }
    }

    /// Frees every cell.
    pub fn reset(&mut self) {
        self.blocked.iter_mut().for_each(|b| *b = false);
        self.generate_components();
    }

    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |column| Cell::new(row, column)))
            .filter(move |c| !self.is_blocked(*c))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} maze",
            self.rows, self.columns
        );
        self.components = UnionFind::new(self.rows * self.columns);
        self.components_dirty = false;
        for row in 0..self.rows {
            for column in 0..self.columns {
                let cell = Cell::new(row, column);
                if self.is_blocked(cell) {
                    continue;
                }
                let ix = self.ix(cell);
                // Right and down cover every edge once.
                for direction in [Direction::Right, Direction::Down] {
                    if let Some(n) = self.neighbor(cell, direction) {
                        let n_ix = self.ix(n);
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }

    /// Checks if start and goal are free cells on the same component.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component of free cells.
    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        if self.contains(start)
            && self.contains(goal)
            && !self.is_blocked(start)
            && !self.is_blocked(goal)
        {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }

    /// Renders the maze with two routes drawn on top: `1` for cells only on the first, `2` for
    /// cells only on the second and `*` for cells on both.
    pub fn render_routes(&self, first: &[Cell], second: &[Cell]) -> String {
        let mut out = String::with_capacity((self.columns + 1) * self.rows);
        for row in 0..self.rows {
            for column in 0..self.columns {
                let cell = Cell::new(row, column);
                let c = match (first.contains(&cell), second.contains(&cell)) {
                    (true, true) => '*',
                    (true, false) => '1',
                    (false, true) => '2',
                    (false, false) if self.is_blocked(cell) => '#',
                    (false, false) => '.',
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

impl Grid for Maze {
    fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    /// Cells outside the maze count as blocked.
    fn is_blocked(&self, cell: Cell) -> bool {
        !self.contains(cell) || self.blocked[self.ix(cell)]
    }

    fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.step(cell, direction).filter(|n| !self.is_blocked(*n))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_routes(&[], &[]))
    }
}
