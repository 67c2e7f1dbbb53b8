//! Collinear edge fusion.
//!
//! Dense lattices and grids produce long runs of unit segments along the
//! same line. Fusing each run into one segment cuts rendering cost without
//! changing what is drawn. Endpoint order is canonicalized first, so the
//! direction in which an edge was emitted never matters.

use std::cmp::Ordering;

use crate::model::{Edge, Edge3D, EdgeType};

type Segment<const N: usize> = ([f64; N], [f64; N], EdgeType);

/// Fuse chains of collinear, same-type, end-to-start planar edges.
///
/// Collinearity is tested exactly (cross product equal to zero). Output is
/// sorted by canonical start point.
pub fn merge_edges(edges: &[Edge]) -> Vec<Edge> {
    let segments = edges.iter().map(|e| (e.start(), e.end(), e.edge_type)).collect();
    merge_segments::<2>(segments)
        .into_iter()
        .map(|(start, end, edge_type)| Edge::new(start, end, edge_type))
        .collect()
}

/// Spatial analogue of [`merge_edges`]. Collinearity must hold on all three
/// coordinate planes.
pub fn merge_edges_3d(edges: &[Edge3D]) -> Vec<Edge3D> {
    let segments = edges.iter().map(|e| (e.start(), e.end(), e.edge_type)).collect();
    merge_segments::<3>(segments)
        .into_iter()
        .map(|(start, end, edge_type)| Edge3D::new(start, end, edge_type))
        .collect()
}

fn lex_cmp<const N: usize>(a: &[f64; N], b: &[f64; N]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn direction<const N: usize>(start: &[f64; N], end: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| end[i] - start[i])
}

/// Exact parallelism: every 2x2 minor of the direction pair vanishes.
fn collinear<const N: usize>(u: &[f64; N], v: &[f64; N]) -> bool {
    (0..N).all(|a| (a + 1..N).all(|b| u[a] * v[b] == u[b] * v[a]))
}

fn merge_segments<const N: usize>(mut segments: Vec<Segment<N>>) -> Vec<Segment<N>> {
    for segment in &mut segments {
        if lex_cmp(&segment.1, &segment.0) == Ordering::Less {
            std::mem::swap(&mut segment.0, &mut segment.1);
        }
    }
    segments.sort_by(|a, b| lex_cmp(&a.0, &b.0));

    let mut consumed = vec![false; segments.len()];
    let mut merged = Vec::new();
    for i in 0..segments.len() {
        if consumed[i] {
            continue;
        }
        let (start, mut end, edge_type) = segments[i];
        loop {
            let mut grew = false;
            for j in i + 1..segments.len() {
                if consumed[j] {
                    continue;
                }
                let (next_start, next_end, next_type) = segments[j];
                if next_type == edge_type
                    && next_start == end
                    && collinear(&direction(&start, &end), &direction(&next_start, &next_end))
                {
                    end = next_end;
                    consumed[j] = true;
                    grew = true;
                }
            }
            if !grew {
                break;
            }
        }
        merged.push((start, end, edge_type));
    }
    merged
}
