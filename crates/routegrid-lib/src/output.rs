use std::collections::HashSet;
use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid, Terrain};
use crate::search::{RoutePlan, SearchAlgorithm};

/// Structured representation of a planned route that consumers can serialise
/// or print. Consumes the plan's data, never mutates it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathSummary {
    pub algorithm: SearchAlgorithm,
    pub hops: usize,
    pub start: Cell,
    pub goal: Cell,
    pub steps: Vec<Cell>,
}

impl PathSummary {
    /// Convert a [`RoutePlan`] into a summary.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            start: plan.start,
            goal: plan.goal,
            steps: plan.steps.clone(),
        })
    }

    /// One-line-per-step textual rendering.
    pub fn render_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} route from ({}, {}) to ({}, {}): {} hops",
            self.algorithm, self.start.row, self.start.col, self.goal.row, self.goal.col, self.hops
        );
        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. ({}, {})", index, step.row, step.col);
        }
        out
    }
}

fn terrain_glyph(terrain: Terrain) -> char {
    match terrain {
        Terrain::Free => '.',
        Terrain::Light => '1',
        Terrain::Moderate => '2',
        Terrain::Heavy => '5',
        Terrain::Obstacle => '#',
    }
}

/// Render the grid as ASCII art with `steps` overlaid.
///
/// Path cells are drawn as `*`, with the endpoints as `S` and `G`; all other
/// cells show their terrain glyph. Both inputs are borrowed read-only.
pub fn render_grid(grid: &Grid, steps: &[Cell]) -> String {
    let on_path: HashSet<Cell> = steps.iter().copied().collect();
    let start = steps.first().copied();
    let goal = steps.last().copied();

    let (rows, cols) = grid.dimensions();
    let mut out = String::with_capacity(rows * (cols + 1));

    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            let cell = Cell::new(row, col);
            let glyph = if Some(cell) == start {
                'S'
            } else if Some(cell) == goal {
                'G'
            } else if on_path.contains(&cell) {
                '*'
            } else {
                // Cells of an owned grid are always in bounds.
                terrain_glyph(grid.terrain_at(cell).unwrap_or(Terrain::Free))
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}
