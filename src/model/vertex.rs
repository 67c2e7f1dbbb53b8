//! Vertices of lattice and grid layouts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A planar lattice vertex.
///
/// `index` points back into the caller's monzo batch; auxiliary vertices
/// have none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Vertex {
    pub fn primary(x: f64, y: f64, index: usize) -> Self {
        Self { x, y, index: Some(index) }
    }

    pub fn auxiliary(x: f64, y: f64) -> Self {
        Self { x, y, index: None }
    }

    pub fn is_auxiliary(&self) -> bool {
        self.index.is_none()
    }

    pub fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// A spatial lattice vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Vertex3D {
    pub fn is_auxiliary(&self) -> bool {
        self.index.is_none()
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Indices of every input step that lands on one grid point.
pub type StepIndices = SmallVec<[usize; 4]>;

/// A vertex of an equal-tempered grid.
///
/// Several scale degrees may reduce to the same step class, so a grid
/// vertex carries all of their indices in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridVertex {
    pub x: f64,
    pub y: f64,
    pub indices: StepIndices,
}

impl GridVertex {
    pub fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}
