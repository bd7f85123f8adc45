//! Search strategies implementing the Strategy pattern.
//!
//! Each planner wraps one search body from [`crate::path`] and exposes it
//! behind the [`RoutePlanner`] trait, so the orchestrator in the parent
//! module stays algorithm-agnostic.

use crate::cost::CostProvider;
use crate::grid::{Cell, DirectionSet, Grid};
use crate::path::{find_path_a_star, find_path_bfs, find_path_dfs};

use super::SearchAlgorithm;

/// Trait for search strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Execute the search on the given grid.
    ///
    /// Returns `Some(path)` from start to goal inclusive, or `None` when the
    /// frontier empties without reaching the goal. `provider` is ignored by
    /// unweighted strategies.
    fn find_path(
        &self,
        grid: &Grid,
        provider: &dyn CostProvider,
        start: Cell,
        goal: Cell,
        directions: DirectionSet,
    ) -> Option<Vec<Cell>>;
}

/// Breadth-first search planner.
///
/// Finds the path with the fewest hops but ignores traversal costs; not for
/// use where congestion matters.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Bfs
    }

    fn find_path(
        &self,
        grid: &Grid,
        _provider: &dyn CostProvider,
        start: Cell,
        goal: Cell,
        directions: DirectionSet,
    ) -> Option<Vec<Cell>> {
        find_path_bfs(grid, start, goal, directions)
    }
}

/// Depth-first search planner.
///
/// Returns whichever path the fixed exploration order reaches first.
#[derive(Debug, Clone, Default)]
pub struct DfsPlanner;

impl RoutePlanner for DfsPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Dfs
    }

    fn find_path(
        &self,
        grid: &Grid,
        _provider: &dyn CostProvider,
        start: Cell,
        goal: Cell,
        directions: DirectionSet,
    ) -> Option<Vec<Cell>> {
        find_path_dfs(grid, start, goal, directions)
    }
}

/// A* planner guided by Manhattan distance and per-cell provider costs.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::AStar
    }

    fn find_path(
        &self,
        grid: &Grid,
        provider: &dyn CostProvider,
        start: Cell,
        goal: Cell,
        directions: DirectionSet,
    ) -> Option<Vec<Cell>> {
        find_path_a_star(grid, provider, start, goal, directions)
    }
}

/// Select the planner for a given algorithm.
pub fn select_planner(algorithm: SearchAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        SearchAlgorithm::Bfs => Box::new(BfsPlanner),
        SearchAlgorithm::Dfs => Box::new(DfsPlanner),
        SearchAlgorithm::AStar => Box::new(AStarPlanner),
    }
}
