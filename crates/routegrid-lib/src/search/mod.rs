//! Route planning over an occupancy grid.
//!
//! This module provides:
//! - [`SearchAlgorithm`] - Supported search strategies (A*, BFS, DFS)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each algorithm is encapsulated in its own planner struct behind the
//! [`RoutePlanner`] trait, so new strategies can be added without touching
//! the orchestration logic. All strategies share one neighbor model
//! ([`DirectionSet`]) and one grid abstraction.
//!
//! # Example
//!
//! ```
//! use routegrid_lib::{plan_route, Grid, RouteRequest, Terrain, UniformCost};
//!
//! let grid = Grid::filled(3, 3, Terrain::Free);
//! let request = RouteRequest::astar((0, 0).into(), (2, 2).into());
//! let plan = plan_route(&grid, &request, &UniformCost::default()).unwrap();
//! assert_eq!(plan.hop_count(), 4);
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, BfsPlanner, DfsPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;

use crate::cost::CostProvider;
use crate::error::{Error, Result};
use crate::grid::{Cell, DirectionSet, Grid, Terrain};

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Breadth-first search (unweighted, shortest by edge count).
    Bfs,
    /// Depth-first search (any path, no optimality guarantee).
    Dfs,
    /// A* search (cost-aware, heuristic guided).
    #[default]
    AStar,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::Dfs => "dfs",
            SearchAlgorithm::AStar => "astar",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: Cell,
    pub goal: Cell,
    pub algorithm: SearchAlgorithm,
    pub directions: DirectionSet,
}

impl RouteRequest {
    /// Convenience constructor for 4-connected A* routes.
    pub fn astar(start: Cell, goal: Cell) -> Self {
        Self {
            start,
            goal,
            algorithm: SearchAlgorithm::AStar,
            directions: DirectionSet::Cardinal,
        }
    }

    /// Convenience constructor for BFS routes.
    pub fn bfs(start: Cell, goal: Cell) -> Self {
        Self {
            algorithm: SearchAlgorithm::Bfs,
            ..Self::astar(start, goal)
        }
    }

    /// Convenience constructor for DFS routes.
    pub fn dfs(start: Cell, goal: Cell) -> Self {
        Self {
            algorithm: SearchAlgorithm::Dfs,
            ..Self::astar(start, goal)
        }
    }

    /// Use the given neighbor set instead of the 4-connected default.
    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }
}

/// Planned route returned by the library.
///
/// Steps run from start to goal inclusive and are immutable once returned.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: SearchAlgorithm,
    pub start: Cell,
    pub goal: Cell,
    pub steps: Vec<Cell>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
///
/// This is the main entry point for route planning. It:
/// 1. Validates that start and goal lie inside the grid
/// 2. Rejects impassable endpoints up front
/// 3. Selects the planner strategy and executes the search
///
/// An exhausted search is reported as [`Error::RouteNotFound`]; it is an
/// expected outcome, not a malfunction. The cost provider is consulted only
/// by the A* strategy; BFS and DFS traverse unweighted.
pub fn plan_route(
    grid: &Grid,
    request: &RouteRequest,
    provider: &dyn CostProvider,
) -> Result<RoutePlan> {
    let start_terrain = grid.terrain_at(request.start)?;
    let goal_terrain = grid.terrain_at(request.goal)?;

    if start_terrain == Terrain::Obstacle || goal_terrain == Terrain::Obstacle {
        return Err(Error::RouteNotFound {
            start: request.start,
            goal: request.goal,
        });
    }

    tracing::debug!(
        algorithm = %request.algorithm,
        start = ?request.start,
        goal = ?request.goal,
        "planning route"
    );

    let planner = select_planner(request.algorithm);
    let steps = planner
        .find_path(
            grid,
            provider,
            request.start,
            request.goal,
            request.directions,
        )
        .ok_or(Error::RouteNotFound {
            start: request.start,
            goal: request.goal,
        })?;

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start,
        goal: request.goal,
        steps,
    })
}
