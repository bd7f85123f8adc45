//! routegrid library entry points.
//!
//! This crate exposes helpers to build occupancy grids (random or adjusted
//! from live congestion data), price cells through pluggable cost providers,
//! and run pathfinding strategies over them. Higher-level consumers (the
//! CLI, renderers) should only depend on the items exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod cost;
pub mod error;
pub mod grid;
pub mod output;
pub mod path;
pub mod search;
pub mod traffic;

pub use cost::{CongestionCost, CostProvider, TerrainCost, UniformCost, FALLBACK_COST};
pub use error::{Error, Result};
pub use grid::{Cell, DirectionSet, Grid, Terrain, TerrainDistribution};
pub use output::{render_grid, PathSummary};
pub use path::manhattan;
pub use search::{plan_route, RoutePlan, RouteRequest, SearchAlgorithm};
pub use traffic::{CongestionLevel, CongestionMap, TrafficClient, TrafficConfig};
