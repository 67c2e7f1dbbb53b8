//! # Layout Model
//!
//! Output records shared by the lattice and grid spanners.
//! These are plain DTOs handed to a renderer: no state, no geometry logic
//! beyond endpoint accessors.

pub mod edge;
pub mod vertex;

pub use edge::{Connection, Edge, Edge3D, EdgeType};
pub use vertex::{GridVertex, StepIndices, Vertex, Vertex3D};

/// Prime exponent vector, one entry per prime in ascending order.
///
/// Entries are normally integers; values within a small tolerance of an
/// integer are accepted. Shorter monzos are implicitly zero-padded.
pub type Monzo = Vec<f64>;

/// Planar layout: vertices plus the edges drawn between them.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

/// Spatial layout.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layout3D {
    pub vertices: Vec<Vertex3D>,
    pub edges: Vec<Edge3D>,
}

/// Equal-tempered grid layout.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridLayout {
    pub vertices: Vec<GridVertex>,
    pub edges: Vec<Edge>,
}
