use rand::Rng;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::traffic::CongestionMap;

/// Coordinate of a single grid cell, addressed as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced from this one by (d_row, d_col).
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}

/// Passability and congestion category of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Free,
    Light,
    Moderate,
    Heavy,
    Obstacle,
}

impl Terrain {
    /// Traversal cost implied by the terrain class alone.
    ///
    /// Obstacles are never entered, so their nominal cost is the same as an
    /// uncongested cell; passability is checked separately.
    pub fn base_cost(self) -> f64 {
        match self {
            Terrain::Free | Terrain::Light | Terrain::Obstacle => 1.0,
            Terrain::Moderate => 2.0,
            Terrain::Heavy => 5.0,
        }
    }
}

/// Neighborhood used when expanding a cell during search.
///
/// The iteration order of each set is fixed; depth-first search results
/// depend on it, so it must not change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionSet {
    /// The four cardinal steps: up, down, left, right.
    #[default]
    Cardinal,
    /// Cardinal steps plus the four diagonals.
    ///
    /// Diagonal moves are allowed to pass between two orthogonally blocked
    /// cells ("corner cutting"); callers that care must filter the returned
    /// path themselves.
    Diagonal,
}

const CARDINAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

impl DirectionSet {
    /// The (d_row, d_col) steps of this set, in expansion order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            DirectionSet::Cardinal => &CARDINAL,
            DirectionSet::Diagonal => &DIAGONAL,
        }
    }
}

/// Sampling weights for random grid generation, one per terrain class.
///
/// Weights are relative, not required to sum to one. Passed explicitly to
/// [`Grid::random`]; there is no global default beyond [`Default`].
#[derive(Debug, Clone)]
pub struct TerrainDistribution {
    pub free: f64,
    pub light: f64,
    pub moderate: f64,
    pub heavy: f64,
    pub obstacle: f64,
}

impl Default for TerrainDistribution {
    fn default() -> Self {
        Self {
            free: 0.85,
            light: 0.10,
            moderate: 0.04,
            heavy: 0.0,
            obstacle: 0.01,
        }
    }
}

impl TerrainDistribution {
    fn sample(&self, rng: &mut impl Rng) -> Terrain {
        let weights = [
            (Terrain::Free, self.free),
            (Terrain::Light, self.light),
            (Terrain::Moderate, self.moderate),
            (Terrain::Heavy, self.heavy),
            (Terrain::Obstacle, self.obstacle),
        ];
        let total: f64 = weights.iter().map(|(_, w)| w.max(0.0)).sum();
        if total <= 0.0 {
            return Terrain::Free;
        }

        let mut roll = rng.random::<f64>() * total;
        for (terrain, weight) in weights {
            let weight = weight.max(0.0);
            if roll < weight {
                return terrain;
            }
            roll -= weight;
        }
        // Floating-point slack can leave a sliver past the last bucket.
        Terrain::Obstacle
    }
}

/// Bounded 2-D occupancy surface mapping each cell to a [`Terrain`] class.
///
/// Dimensions are fixed at construction. Searches borrow the grid immutably,
/// so concurrent searches over one grid are safe.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Terrain>,
}

impl Grid {
    /// Create a grid with every cell set to `terrain`.
    pub fn filled(rows: usize, cols: usize, terrain: Terrain) -> Self {
        Self {
            rows,
            cols,
            cells: vec![terrain; rows * cols],
        }
    }

    /// Generate a grid by sampling each cell independently from `dist`.
    pub fn random(
        rows: usize,
        cols: usize,
        dist: &TerrainDistribution,
        rng: &mut impl Rng,
    ) -> Self {
        let cells = (0..rows * cols).map(|_| dist.sample(rng)).collect();
        Self { rows, cols, cells }
    }

    /// Build a grid from external congestion readings.
    ///
    /// Starts all-Free, then maps each cell's reading to a terrain class:
    /// Light, Moderate, and Heavy congestion carry over directly, and cells
    /// without a reading stay Free. Deterministic, no sampling involved.
    pub fn from_congestion(rows: usize, cols: usize, map: &CongestionMap) -> Self {
        let mut grid = Self::filled(rows, cols, Terrain::Free);
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                let cell = Cell::new(row, col);
                if let Some(level) = map.classify(cell) {
                    let idx = grid.index(cell);
                    grid.cells[idx] = level.terrain();
                }
            }
        }
        grid
    }

    /// Grid dimensions as (rows, cols).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `cell` lies within `[0, rows) x [0, cols)`.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// Terrain class at `cell`, or [`Error::OutOfBounds`] outside the grid.
    pub fn terrain_at(&self, cell: Cell) -> Result<Terrain> {
        if !self.in_bounds(cell) {
            return Err(Error::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[self.index(cell)])
    }

    /// Overwrite the terrain at `cell`. Intended for construction; grids are
    /// read-only while a search is running.
    pub fn set_terrain(&mut self, cell: Cell, terrain: Terrain) -> Result<()> {
        if !self.in_bounds(cell) {
            return Err(Error::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(cell);
        self.cells[idx] = terrain;
        Ok(())
    }

    /// True iff `cell` is in bounds and its terrain is not an obstacle.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cells[self.index(cell)] != Terrain::Obstacle
    }

    /// Passable neighbors of `cell` under `directions`, in expansion order.
    pub fn passable_neighbors<'a>(
        &'a self,
        cell: Cell,
        directions: DirectionSet,
    ) -> impl Iterator<Item = Cell> + 'a {
        directions
            .offsets()
            .iter()
            .map(move |&(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(move |&neighbor| self.is_passable(neighbor))
    }
}
