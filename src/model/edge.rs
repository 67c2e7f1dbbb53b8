//! Edges and index-level connections.

use serde::{Deserialize, Serialize};

/// What kind of line an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// Both endpoints are input monzos.
    Primary,
    /// Declared by the caller through an extra connection vector.
    Custom,
    /// At least one endpoint is a synthesized vertex.
    Auxiliary,
    /// Construction line of an equal-tempered grid.
    Gridline,
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EdgeType::Primary => "primary",
            EdgeType::Custom => "custom",
            EdgeType::Auxiliary => "auxiliary",
            EdgeType::Gridline => "gridline",
        };
        f.write_str(name)
    }
}

/// Unit-distance link between two entries of a combined
/// (primary followed by auxiliary) vertex list.
///
/// `index1 < index2` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub index1: usize,
    pub index2: usize,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

/// A planar line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

impl Edge {
    pub fn new(start: [f64; 2], end: [f64; 2], edge_type: EdgeType) -> Self {
        Self { x1: start[0], y1: start[1], x2: end[0], y2: end[1], edge_type }
    }

    pub fn start(&self) -> [f64; 2] {
        [self.x1, self.y1]
    }

    pub fn end(&self) -> [f64; 2] {
        [self.x2, self.y2]
    }

    /// Same segment traversed the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.end(), self.start(), self.edge_type)
    }
}

/// A spatial line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge3D {
    pub x1: f64,
    pub y1: f64,
    pub z1: f64,
    pub x2: f64,
    pub y2: f64,
    pub z2: f64,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

impl Edge3D {
    pub fn new(start: [f64; 3], end: [f64; 3], edge_type: EdgeType) -> Self {
        Self {
            x1: start[0],
            y1: start[1],
            z1: start[2],
            x2: end[0],
            y2: end[1],
            z2: end[2],
            edge_type,
        }
    }

    pub fn start(&self) -> [f64; 3] {
        [self.x1, self.y1, self.z1]
    }

    pub fn end(&self) -> [f64; 3] {
        [self.x2, self.y2, self.z2]
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end(), self.start(), self.edge_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_type_serializes_lowercase() {
        let json = serde_json::to_string(&EdgeType::Auxiliary).unwrap();
        assert_eq!(json, "\"auxiliary\"");
        assert_eq!(EdgeType::Gridline.to_string(), "gridline");
    }

    #[test]
    fn edge_serializes_type_field() {
        let edge = Edge::new([0.0, 0.0], [40.0, 0.0], EdgeType::Primary);
        let value = serde_json::to_value(edge).unwrap();
        assert_eq!(value["type"], "primary");
        assert_eq!(value["x2"], 40.0);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let edge = Edge3D::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], EdgeType::Custom);
        let back = edge.reversed();
        assert_eq!(back.start(), [4.0, 5.0, 6.0]);
        assert_eq!(back.end(), [1.0, 2.0, 3.0]);
        assert_eq!(back.edge_type, EdgeType::Custom);
    }
}
