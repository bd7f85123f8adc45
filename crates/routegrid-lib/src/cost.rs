//! Per-cell traversal costs supplied to the search engine.
//!
//! A [`CostProvider`] maps a cell to the cost of entering it. Providers are
//! pure and read-only during a search; the engine sanitises every returned
//! value, so a misbehaving provider degrades to the fallback cost instead of
//! corrupting the search.

use std::collections::HashMap;

use tracing::warn;

use crate::grid::{Cell, Grid};
use crate::traffic::CongestionMap;

/// Cost assumed for a cell when no better information exists.
pub const FALLBACK_COST: f64 = 1.0;

/// Source of non-negative traversal costs, keyed by target cell.
pub trait CostProvider {
    /// Cost of entering `cell`. Must be finite and >= 0; values that are not
    /// are clamped to [`FALLBACK_COST`] by the engine.
    fn cost(&self, cell: Cell) -> f64;
}

/// Clamp a provider value that violates the cost contract.
pub(crate) fn sanitize_cost(cell: Cell, raw: f64) -> f64 {
    if raw.is_finite() && raw >= 0.0 {
        raw
    } else {
        warn!(
            row = cell.row,
            col = cell.col,
            raw,
            "cost provider returned an invalid cost; using fallback"
        );
        FALLBACK_COST
    }
}

/// The default provider: one flat cost for every cell.
#[derive(Debug, Clone)]
pub struct UniformCost {
    cost: f64,
}

impl UniformCost {
    pub fn new(cost: f64) -> Self {
        Self { cost }
    }
}

impl Default for UniformCost {
    fn default() -> Self {
        Self {
            cost: FALLBACK_COST,
        }
    }
}

impl CostProvider for UniformCost {
    fn cost(&self, _cell: Cell) -> f64 {
        self.cost
    }
}

/// Sparse costs derived from known congestion readings.
///
/// Cells without a reading fall back to the configured constant, so a route
/// through unobserved cells is priced like free-flowing traffic.
#[derive(Debug, Clone)]
pub struct CongestionCost {
    readings: HashMap<Cell, f64>,
    fallback: f64,
}

impl CongestionCost {
    pub fn new(fallback: f64) -> Self {
        Self {
            readings: HashMap::new(),
            fallback,
        }
    }

    /// Price every observed cell of `map` with the fixed congestion schedule.
    pub fn from_congestion(map: &CongestionMap, fallback: f64) -> Self {
        let readings = map
            .readings()
            .map(|(cell, level)| (cell, level.cost()))
            .collect();
        Self { readings, fallback }
    }

    /// Record or overwrite the cost of a single cell.
    pub fn insert(&mut self, cell: Cell, cost: f64) {
        self.readings.insert(cell, cost);
    }
}

impl CostProvider for CongestionCost {
    fn cost(&self, cell: Cell) -> f64 {
        self.readings.get(&cell).copied().unwrap_or(self.fallback)
    }
}

/// Costs implied by a grid's own terrain classes.
///
/// May disagree with another provider layered over the same grid; the search
/// consults exactly one provider, so whichever is passed wins.
#[derive(Debug, Clone)]
pub struct TerrainCost<'a> {
    grid: &'a Grid,
    fallback: f64,
}

impl<'a> TerrainCost<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            fallback: FALLBACK_COST,
        }
    }
}

impl CostProvider for TerrainCost<'_> {
    fn cost(&self, cell: Cell) -> f64 {
        self.grid
            .terrain_at(cell)
            .map(|terrain| terrain.base_cost())
            .unwrap_or(self.fallback)
    }
}
