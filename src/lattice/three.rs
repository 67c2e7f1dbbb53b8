//! Spatial lattices: a third coordinate table for depth.

use serde::{Deserialize, Serialize};

use super::{default_max_distance, span};
use crate::merge::merge_edges_3d;
use crate::model::{Edge3D, Layout3D, Monzo, Vertex3D};
use crate::vector::dot;
use crate::Result;

/// Spatial lattice configuration. Same semantics as
/// [`LatticeConfig`](super::LatticeConfig) with one more axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatticeConfig3D {
    pub horizontal_coordinates: Vec<f64>,
    pub vertical_coordinates: Vec<f64>,
    pub depth_coordinates: Vec<f64>,
    #[serde(default = "default_max_distance")]
    pub max_distance: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_monzos: Option<Vec<Monzo>>,
    #[serde(default)]
    pub merge_edges: bool,
}

impl Default for LatticeConfig3D {
    fn default() -> Self {
        Self {
            horizontal_coordinates: Vec::new(),
            vertical_coordinates: Vec::new(),
            depth_coordinates: Vec::new(),
            max_distance: default_max_distance(),
            edge_monzos: None,
            merge_edges: false,
        }
    }
}

impl LatticeConfig3D {
    pub fn new(
        horizontal_coordinates: Vec<f64>,
        vertical_coordinates: Vec<f64>,
        depth_coordinates: Vec<f64>,
    ) -> Self {
        Self {
            horizontal_coordinates,
            vertical_coordinates,
            depth_coordinates,
            ..Default::default()
        }
    }

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

    pub fn position(&self, monzo: &[f64]) -> [f64; 3] {
        [
            dot(monzo, &self.horizontal_coordinates),
            dot(monzo, &self.vertical_coordinates),
            dot(monzo, &self.depth_coordinates),
        ]
    }
}

/// Lay out `monzos` in space.
pub fn span_lattice_3d(monzos: &[Monzo], config: &LatticeConfig3D) -> Result<Layout3D> {
    let spanned = span(
        monzos,
        [
            config.horizontal_coordinates.as_slice(),
            config.vertical_coordinates.as_slice(),
            config.depth_coordinates.as_slice(),
        ],
        config.max_distance,
        config.edge_monzos.as_deref(),
    )?;

    let vertices: Vec<Vertex3D> = spanned
        .vertices
        .iter()
        .map(|&([x, y, z], index)| Vertex3D { x, y, z, index })
        .collect();
    let mut edges: Vec<Edge3D> = spanned
        .edges
        .iter()
        .map(|&(start, end, edge_type)| Edge3D::new(start, end, edge_type))
        .collect();
    if config.merge_edges {
        edges = merge_edges_3d(&edges);
    }

    tracing::debug!(
        vertices = vertices.len(),
        auxiliaries = spanned.auxiliary_count,
        edges = edges.len(),
        "spanned 3D lattice"
    );
    Ok(Layout3D { vertices, edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeType;
    use pretty_assertions::assert_eq;

    fn cube() -> LatticeConfig3D {
        LatticeConfig3D::new(
            vec![0.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
        )
    }

    #[test]
    fn depth_axis_keeps_seventh_apart() {
        let monzos = vec![vec![0.0], vec![0.0, 0.0, 0.0, 1.0]];
        let layout = span_lattice_3d(&monzos, &cube()).unwrap();
        assert_eq!(layout.vertices[1].position(), [0.0, 0.0, 1.0]);
        assert_eq!(
            layout.edges,
            vec![Edge3D::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], EdgeType::Primary)]
        );
    }

    #[test]
    fn space_diagonal_needs_three_steps_and_stays_unbridged() {
        let monzos = vec![vec![0.0], vec![0.0, 1.0, 1.0, 1.0]];
        let layout = span_lattice_3d(&monzos, &cube().with_max_distance(2)).unwrap();
        assert_eq!(layout.vertices.len(), 2);
        assert!(layout.edges.is_empty());
    }

    #[test]
    fn face_diagonal_is_bridged_in_space() {
        let monzos = vec![vec![0.0], vec![0.0, 0.0, 1.0, 1.0]];
        let layout = span_lattice_3d(&monzos, &cube().with_max_distance(2)).unwrap();
        let auxiliary: Vec<_> = layout.vertices.iter().filter(|v| v.is_auxiliary()).collect();
        assert_eq!(auxiliary.len(), 2);
        assert_eq!(auxiliary[0].position(), [0.0, 0.0, 1.0]);
        assert_eq!(auxiliary[1].position(), [0.0, 1.0, 0.0]);
        assert_eq!(layout.edges.len(), 4);
    }
}
