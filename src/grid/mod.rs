//! # Grid Spanner
//!
//! Equal-tempered scales drawn on a periodic grid. Two generators, each a
//! step count plus a screen displacement, span the plane; a grid point
//! `i·δ1 + j·δ2` carries step class `(i·delta1 + j·delta2) mod modulus`.
//! Every point inside the viewport whose class occurs in the scale becomes
//! a vertex.
//!
//! All enumeration is bounded by `range`, `max_vertices` and `max_edges`,
//! so degenerate generators (tiny displacements covering the viewport
//! millions of times) still terminate with bounded output.

pub mod lines;

use std::ops::ControlFlow;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::model::{Edge, EdgeType, GridLayout, GridVertex, StepIndices};
use crate::vector::mmod;
use crate::{Error, Result};

pub use lines::GridLines;

fn default_range() -> i64 {
    100
}

fn default_max_vertices() -> usize {
    1000
}

fn default_max_edges() -> usize {
    2000
}

// ============================================================================
// Configuration
// ============================================================================

/// Axis-aligned screen rectangle, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Viewport {
    pub fn contains(&self, [x, y]: [f64; 2]) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    pub fn clamp(&self, [x, y]: [f64; 2]) -> [f64; 2] {
        [x.clamp(self.min_x, self.max_x), y.clamp(self.min_y, self.max_y)]
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Equal-tempered grid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Steps per period.
    pub modulus: i64,
    /// Step count of the first generator.
    pub delta1: i64,
    pub delta1_x: f64,
    pub delta1_y: f64,
    /// Step count of the second generator.
    pub delta2: i64,
    pub delta2_x: f64,
    pub delta2_y: f64,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// Screen displacements to connect, each implying its negation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_vectors: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    pub grid_lines: GridLines,
    #[serde(default)]
    pub merge_edges: bool,
    /// Largest generator coefficient searched in either direction.
    #[serde(default = "default_range")]
    pub range: i64,
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
    #[serde(default = "default_max_edges")]
    pub max_edges: usize,
}

impl GridConfig {
    /// Generators are `(steps, [screen dx, screen dy])`.
    pub fn new(
        modulus: i64,
        delta1: (i64, [f64; 2]),
        delta2: (i64, [f64; 2]),
        viewport: Viewport,
    ) -> Self {
        Self {
            modulus,
            delta1: delta1.0,
            delta1_x: delta1.1[0],
            delta1_y: delta1.1[1],
            delta2: delta2.0,
            delta2_x: delta2.1[0],
            delta2_y: delta2.1[1],
            min_x: viewport.min_x,
            max_x: viewport.max_x,
            min_y: viewport.min_y,
            max_y: viewport.max_y,
            edge_vectors: None,
            grid_lines: GridLines::default(),
            merge_edges: false,
            range: default_range(),
            max_vertices: default_max_vertices(),
            max_edges: default_max_edges(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_edge_vectors(mut self, vectors: impl IntoIterator<Item = [f64; 2]>) -> Self {
        self.edge_vectors = Some(vectors.into_iter().collect());
        self
    }

    pub fn with_grid_lines(mut self, grid_lines: GridLines) -> Self {
        self.grid_lines = grid_lines;
        self
    }

    pub fn with_merge_edges(mut self, merge: bool) -> Self {
        self.merge_edges = merge;
        self
    }

    pub fn with_range(mut self, range: i64) -> Self {
        self.range = range;
        self
    }

    pub fn with_limits(mut self, max_vertices: usize, max_edges: usize) -> Self {
        self.max_vertices = max_vertices;
        self.max_edges = max_edges;
        self
    }

    pub fn viewport(&self) -> Viewport {
        Viewport { min_x: self.min_x, max_x: self.max_x, min_y: self.min_y, max_y: self.max_y }
    }

    /// Screen position of generator combination `(i, j)`.
    pub fn position(&self, i: i64, j: i64) -> [f64; 2] {
        let (i, j) = (i as f64, j as f64);
        [
            self.delta1_x * i + self.delta2_x * j,
            self.delta1_y * i + self.delta2_y * j,
        ]
    }

    /// Step class of generator combination `(i, j)`.
    pub fn step(&self, i: i64, j: i64) -> i64 {
        mmod(self.delta1 * i + self.delta2 * j, self.modulus)
    }

    /// Whether either generator has no screen displacement.
    pub fn is_degenerate(&self) -> bool {
        (self.delta1_x == 0.0 && self.delta1_y == 0.0)
            || (self.delta2_x == 0.0 && self.delta2_y == 0.0)
    }

    fn validate(&self) -> Result<()> {
        if self.modulus <= 0 {
            return Err(Error::InvalidArgument(format!(
                "grid modulus must be positive, got {}",
                self.modulus
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Enumeration
// ============================================================================

/// Visit every grid point inside `window`, `i` outer and `j` inner, until
/// `visit` breaks.
fn for_each_point(
    config: &GridConfig,
    window: &Viewport,
    mut visit: impl FnMut([f64; 2], i64) -> ControlFlow<()>,
) {
    if config.is_degenerate() {
        tracing::debug!("grid generator without screen displacement, nothing to enumerate");
        return;
    }
    let range = config.range;
    for i in -range..=range {
        for j in -range..=range {
            let position = config.position(i, j);
            if !window.contains(position) {
                continue;
            }
            if visit(position, config.step(i, j)).is_break() {
                return;
            }
        }
    }
}

/// Hashable exact position. `-0.0` and `0.0` share a key.
fn key([x, y]: [f64; 2]) -> (u64, u64) {
    ((x + 0.0).to_bits(), (y + 0.0).to_bits())
}

fn translate([x, y]: [f64; 2], [dx, dy]: [f64; 2], sign: f64) -> [f64; 2] {
    [x + sign * dx, y + sign * dy]
}

// ============================================================================
// Spanning
// ============================================================================

/// Lay out the scale `steps` on the grid described by `config`.
///
/// Vertices come in enumeration order. Edges are the custom edges followed
/// by gridlines, capped at `config.max_edges` in total.
pub fn span_grid(steps: &[i64], config: &GridConfig) -> Result<GridLayout> {
    config.validate()?;

    let mut groups: HashMap<i64, StepIndices> = HashMap::new();
    for (index, &step) in steps.iter().enumerate() {
        groups.entry(mmod(step, config.modulus)).or_default().push(index);
    }

    let viewport = config.viewport();
    let mut vertices = Vec::new();
    for_each_point(config, &viewport, |[x, y], step| {
        if vertices.len() >= config.max_vertices {
            tracing::debug!(max_vertices = config.max_vertices, "grid vertex ceiling reached");
            return ControlFlow::Break(());
        }
        if let Some(indices) = groups.get(&step) {
            vertices.push(GridVertex { x, y, indices: indices.clone() });
        }
        ControlFlow::Continue(())
    });

    let mut edges = Vec::new();
    if let Some(vectors) = &config.edge_vectors {
        let _ = add_custom_edges(&vertices, vectors, config, &mut edges);
    }
    let _ = add_grid_lines(config, &viewport, &mut edges);

    tracing::debug!(vertices = vertices.len(), edges = edges.len(), "spanned grid");
    Ok(GridLayout { vertices, edges })
}

fn push_edge(edges: &mut Vec<Edge>, edge: Edge, max_edges: usize) -> ControlFlow<()> {
    if edges.len() >= max_edges {
        tracing::debug!(max_edges, "grid edge ceiling reached");
        return ControlFlow::Break(());
    }
    edges.push(edge);
    ControlFlow::Continue(())
}

fn add_custom_edges(
    vertices: &[GridVertex],
    vectors: &[[f64; 2]],
    config: &GridConfig,
    edges: &mut Vec<Edge>,
) -> ControlFlow<()> {
    let occupied: HashSet<(u64, u64)> = vertices.iter().map(|v| key(v.position())).collect();

    for &vector in vectors {
        if vector == [0.0, 0.0] {
            continue;
        }
        if !config.merge_edges {
            for vertex in vertices {
                let start = vertex.position();
                let end = translate(start, vector, 1.0);
                if occupied.contains(&key(end)) {
                    push_edge(edges, Edge::new(start, end, EdgeType::Custom), config.max_edges)?;
                }
            }
            continue;
        }

        // Maximal runs: each vertex belongs to exactly one run per vector.
        let mut visited: HashSet<(u64, u64)> = HashSet::new();
        for vertex in vertices {
            let origin = vertex.position();
            if visited.contains(&key(origin)) {
                continue;
            }
            let mut start = origin;
            for _ in 0..vertices.len() {
                let previous = translate(start, vector, -1.0);
                if !occupied.contains(&key(previous)) || previous == start {
                    break;
                }
                start = previous;
            }
            let mut end = start;
            visited.insert(key(end));
            for _ in 0..vertices.len() {
                let next = translate(end, vector, 1.0);
                if !occupied.contains(&key(next)) || next == end {
                    break;
                }
                end = next;
                visited.insert(key(end));
            }
            if end != start {
                push_edge(edges, Edge::new(start, end, EdgeType::Custom), config.max_edges)?;
            }
        }
    }
    ControlFlow::Continue(())
}

fn add_grid_lines(config: &GridConfig, viewport: &Viewport, edges: &mut Vec<Edge>) -> ControlFlow<()> {
    for family in lines::families(config) {
        for i in -config.range..=config.range {
            if let Some((start, end)) = lines::visible_segment(&family, i, config.range, viewport) {
                push_edge(edges, Edge::new(start, end, EdgeType::Gridline), config.max_edges)?;
            }
        }
    }
    ControlFlow::Continue(())
}

/// Shortest screen displacement that realises step class `step`.
///
/// Searches the origin-centred window twice the viewport's width and
/// height, ignoring the zero displacement. Fails with `NotFound` when the
/// class never appears within range.
pub fn shortest_edge(step: i64, config: &GridConfig) -> Result<[f64; 2]> {
    config.validate()?;
    let target = mmod(step, config.modulus);
    let (w, h) = (config.viewport().width().abs(), config.viewport().height().abs());
    let window = Viewport { min_x: -w, max_x: w, min_y: -h, max_y: h };

    let mut best: Option<([f64; 2], f64)> = None;
    for_each_point(config, &window, |position, class| {
        if class == target && position != [0.0, 0.0] {
            let norm = position[0].hypot(position[1]);
            if best.is_none_or(|(_, b)| norm < b) {
                best = Some((position, norm));
            }
        }
        ControlFlow::Continue(())
    });

    best.map(|(position, _)| position).ok_or_else(|| {
        Error::NotFound(format!(
            "step class {target} of {} within range {}",
            config.modulus, config.range
        ))
    })
}
