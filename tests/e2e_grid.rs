//! End-to-end tests for equal-tempered grids.

use ji_lattice::{EdgeType, Error, GridConfig, GridLines, Viewport, shortest_edge, span_grid};
use pretty_assertions::assert_eq;

/// 12-TET with fifths to the right and major thirds upward.
fn fifths_and_thirds() -> GridConfig {
    GridConfig::new(
        12,
        (7, [1.0, 0.0]),
        (4, [0.0, -1.0]),
        Viewport { min_x: -2.0, max_x: 2.0, min_y: -2.0, max_y: 2.0 },
    )
}

const PENTATONIC: [i64; 5] = [0, 2, 4, 7, 9];

fn count(edges: &[ji_lattice::Edge], edge_type: EdgeType) -> usize {
    edges.iter().filter(|e| e.edge_type == edge_type).count()
}

// ============================================================================
// 1. Vertices
// ============================================================================

#[test]
fn test_pentatonic_vertices() {
    let layout = span_grid(&PENTATONIC, &fifths_and_thirds()).unwrap();

    assert_eq!(layout.vertices.len(), 9);
    assert!(layout.edges.is_empty());

    let tonic: Vec<_> = layout
        .vertices
        .iter()
        .filter(|v| v.indices.as_slice() == [0])
        .map(|v| v.position())
        .collect();
    assert_eq!(tonic, vec![[0.0, 0.0]]);
    for vertex in &layout.vertices {
        assert!(vertex.x.abs() <= 2.0 && vertex.y.abs() <= 2.0);
    }
}

// ============================================================================
// 2. Custom edges and gridlines
// ============================================================================

#[test]
fn test_pentatonic_edges_and_gridlines() {
    let config = fifths_and_thirds()
        .with_edge_vectors([[1.0, 0.0], [0.0, -1.0]])
        .with_grid_lines(GridLines::generators());

    let layout = span_grid(&PENTATONIC, &config).unwrap();

    assert_eq!(layout.vertices.len(), 9);
    assert_eq!(count(&layout.edges, EdgeType::Custom), 7);
    assert_eq!(count(&layout.edges, EdgeType::Gridline), 10);
}

#[test]
fn test_gridlines_span_the_viewport() {
    let config = fifths_and_thirds().with_grid_lines(GridLines { delta1: true, ..Default::default() });
    let layout = span_grid(&PENTATONIC, &config).unwrap();

    assert_eq!(layout.edges.len(), 5);
    for edge in &layout.edges {
        assert_eq!((edge.x1, edge.x2), (-2.0, 2.0));
        assert_eq!(edge.y1, edge.y2);
    }
}

#[test]
fn test_merged_custom_edges() {
    let config = fifths_and_thirds()
        .with_edge_vectors([[1.0, 0.0]])
        .with_merge_edges(true);
    let layout = span_grid(&PENTATONIC, &config).unwrap();

    // three rows holding three consecutive fifths each
    let custom: Vec<_> = layout.edges.iter().filter(|e| e.edge_type == EdgeType::Custom).collect();
    assert_eq!(custom.len(), 3);
    let total: f64 = custom.iter().map(|e| e.x2 - e.x1).sum();
    assert_eq!(total.abs(), 6.0);
}

#[test]
fn test_edge_ceiling_applies_to_everything() {
    let config = fifths_and_thirds()
        .with_edge_vectors([[1.0, 0.0], [0.0, -1.0]])
        .with_grid_lines(GridLines::all())
        .with_limits(1000, 8);

    let layout = span_grid(&PENTATONIC, &config).unwrap();

    assert_eq!(layout.edges.len(), 8);
    assert_eq!(count(&layout.edges, EdgeType::Custom), 7);
}

// ============================================================================
// 3. Shortest edge
// ============================================================================

#[test]
fn test_shortest_whole_tone() {
    // two fifths: 14 = 2 mod 12
    assert_eq!(shortest_edge(2, &fifths_and_thirds()).unwrap(), [2.0, 0.0]);
}

#[test]
fn test_shortest_edge_not_found() {
    let config = fifths_and_thirds().with_range(0);
    let err = shortest_edge(7, &config).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
