//! # Lattice Spanner
//!
//! Turns a batch of monzos and one coordinate table per screen axis into
//! drawable vertices and edges.
//!
//! ```text
//! monzos ─project─▶ connect ─▶ auxiliaries ─unproject─▶ dot(·, axis) ─▶ Layout
//!                     │                                              ▲
//!                     └──────────── connections ─────────────────────┘
//! ```
//!
//! The planar and spatial variants run the same pipeline; only the number
//! of coordinate tables differs.

pub mod connect;
pub mod project;
pub mod three;

use serde::{Deserialize, Serialize};

use crate::merge::merge_edges;
use crate::model::{Edge, EdgeType, Layout, Monzo, Vertex};
use crate::vector::{dot, negate, resize, sub, vectors_equal};
use crate::{Error, Result};

pub use connect::{Connectivity, connect, taxicab_distance};
pub use project::{project, unproject};
pub use three::{LatticeConfig3D, span_lattice_3d};

pub(crate) fn default_max_distance() -> u32 {
    1
}

// ============================================================================
// Configuration
// ============================================================================

/// Planar lattice configuration.
///
/// Coordinate tables are indexed by prime (2, 3, 5, ...). A prime whose
/// entry is zero (or missing) in both tables does not move vertices on
/// screen and is ignored when measuring distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatticeConfig {
    pub horizontal_coordinates: Vec<f64>,
    pub vertical_coordinates: Vec<f64>,
    /// 0 (no edges), 1 (unit steps) or 2 (bridge distance-2 pairs).
    #[serde(default = "default_max_distance")]
    pub max_distance: u32,
    /// Extra connection vectors declared by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_monzos: Option<Vec<Monzo>>,
    #[serde(default)]
    pub merge_edges: bool,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            horizontal_coordinates: Vec::new(),
            vertical_coordinates: Vec::new(),
            max_distance: default_max_distance(),
            edge_monzos: None,
            merge_edges: false,
        }
    }
}

impl LatticeConfig {
    pub fn new(horizontal_coordinates: Vec<f64>, vertical_coordinates: Vec<f64>) -> Self {
        Self { horizontal_coordinates, vertical_coordinates, ..Default::default() }
    }

    /// Parse a camelCase JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_max_distance(mut self, max_distance: u32) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_edge_monzos(mut self, edge_monzos: impl IntoIterator<Item = Monzo>) -> Self {
        self.edge_monzos = Some(edge_monzos.into_iter().collect());
        self
    }

    pub fn with_merge_edges(mut self, merge: bool) -> Self {
        self.merge_edges = merge;
        self
    }

    /// Screen position of a single monzo.
    pub fn position(&self, monzo: &[f64]) -> [f64; 2] {
        [
            dot(monzo, &self.horizontal_coordinates),
            dot(monzo, &self.vertical_coordinates),
        ]
    }

    /// Rotate the coordinate tables so the prime at `horizontal_index`
    /// points right, keeping its length `r`.
    ///
    /// With a `tonnetz_index` the tables are sheared as well, sending that
    /// prime to `(r/2, -r·√3/2)`: up and to the right at 60°, giving a
    /// triangular lattice between the two primes.
    pub fn align(&mut self, horizontal_index: usize, tonnetz_index: Option<usize>) -> Result<()> {
        let len = self.horizontal_coordinates.len().max(self.vertical_coordinates.len());
        let h = resize(&self.horizontal_coordinates, len);
        let v = resize(&self.vertical_coordinates, len);
        let at = |i: usize| [h.get(i).copied().unwrap_or(0.0), v.get(i).copied().unwrap_or(0.0)];

        let [ax, ay] = at(horizontal_index);
        let r = ax.hypot(ay);
        if r == 0.0 {
            return Err(Error::InvalidArgument(format!(
                "prime {horizontal_index} has no screen direction to align"
            )));
        }

        let matrix = match tonnetz_index {
            None => {
                let (c, s) = (ax / r, ay / r);
                [[c, s], [-s, c]]
            }
            Some(tonnetz_index) => {
                let [bx, by] = at(tonnetz_index);
                let det = ax * by - ay * bx;
                if det == 0.0 {
                    return Err(Error::InvalidArgument(format!(
                        "primes {horizontal_index} and {tonnetz_index} are parallel on screen"
                    )));
                }
                let (t1x, t1y) = (r, 0.0);
                let (t2x, t2y) = (0.5 * r, -0.5 * 3f64.sqrt() * r);
                [
                    [(t1x * by - t2x * ay) / det, (t2x * ax - t1x * bx) / det],
                    [(t1y * by - t2y * ay) / det, (t2y * ax - t1y * bx) / det],
                ]
            }
        };

        let (horizontal, vertical): (Vec<f64>, Vec<f64>) = h
            .iter()
            .zip(&v)
            .map(|(x, y)| {
                (
                    matrix[0][0] * x + matrix[0][1] * y,
                    matrix[1][0] * x + matrix[1][1] * y,
                )
            })
            .unzip();
        self.horizontal_coordinates = horizontal;
        self.vertical_coordinates = vertical;
        Ok(())
    }
}

// ============================================================================
// Shared pipeline
// ============================================================================

type Point<const N: usize> = [f64; N];

/// Vertices and edges before they are packed into dimension-specific
/// records.
pub(crate) struct Spanned<const N: usize> {
    pub vertices: Vec<(Point<N>, Option<usize>)>,
    pub edges: Vec<(Point<N>, Point<N>, EdgeType)>,
    pub auxiliary_count: usize,
}

/// Project, connect, unproject and place `monzos` on `N` screen axes.
pub(crate) fn span<const N: usize>(
    monzos: &[Monzo],
    axes: [&[f64]; N],
    max_distance: u32,
    edge_monzos: Option<&[Monzo]>,
) -> Result<Spanned<N>> {
    let projected = project(monzos, &axes);
    let Connectivity { connections, auxiliaries } = connect(&projected, max_distance)?;
    let restored = unproject(&auxiliaries, &axes);

    let place = |m: &[f64]| -> Point<N> { std::array::from_fn(|a| dot(m, axes[a])) };
    let vertices: Vec<(Point<N>, Option<usize>)> = monzos
        .iter()
        .enumerate()
        .map(|(i, m)| (place(m.as_slice()), Some(i)))
        .chain(restored.iter().map(|m| (place(m.as_slice()), None)))
        .collect();

    let mut edges: Vec<_> = connections
        .iter()
        .map(|c| (vertices[c.index1].0, vertices[c.index2].0, c.edge_type))
        .collect();

    if let Some(edge_monzos) = edge_monzos {
        let forward = project(edge_monzos, &axes);
        let displacements: Vec<Monzo> = forward
            .iter()
            .cloned()
            .chain(forward.iter().map(|d| negate(d)))
            .collect();
        let extended: Vec<&Monzo> = projected.iter().chain(&auxiliaries).collect();
        for (i, a) in extended.iter().enumerate() {
            for (offset, b) in extended[i + 1..].iter().enumerate() {
                let j = i + 1 + offset;
                let diff = sub(b, a);
                if displacements.iter().any(|d| vectors_equal(&diff, d)) {
                    let edge_type = if j < monzos.len() {
                        EdgeType::Custom
                    } else {
                        EdgeType::Auxiliary
                    };
                    edges.push((vertices[i].0, vertices[j].0, edge_type));
                }
            }
        }
    }

    Ok(Spanned { vertices, edges, auxiliary_count: restored.len() })
}

// ============================================================================
// Planar entry point
// ============================================================================

/// Lay out `monzos` on the plane.
///
/// Vertices come in input order (each tagged with its input index)
/// followed by auxiliary vertices. Fails only when
/// `config.max_distance > 2`.
pub fn span_lattice(monzos: &[Monzo], config: &LatticeConfig) -> Result<Layout> {
    let spanned = span(
        monzos,
        [
            config.horizontal_coordinates.as_slice(),
            config.vertical_coordinates.as_slice(),
        ],
        config.max_distance,
        config.edge_monzos.as_deref(),
    )?;

    let vertices: Vec<Vertex> = spanned
        .vertices
        .iter()
        .map(|&([x, y], index)| Vertex { x, y, index })
        .collect();
    let mut edges: Vec<Edge> = spanned
        .edges
        .iter()
        .map(|&(start, end, edge_type)| Edge::new(start, end, edge_type))
        .collect();
    if config.merge_edges {
        edges = merge_edges(&edges);
    }

    tracing::debug!(
        vertices = vertices.len(),
        auxiliaries = spanned.auxiliary_count,
        edges = edges.len(),
        "spanned lattice"
    );
    Ok(Layout { vertices, edges })
}
