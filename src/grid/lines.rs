//! Viewport-clipped construction lines of an equal-tempered grid.

use super::{GridConfig, Viewport};

/// Which directions get construction lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridLines {
    /// Along the first generator.
    pub delta1: bool,
    /// Along the second generator.
    pub delta2: bool,
    /// Along `delta1 - delta2`.
    pub diagonal1: bool,
    /// Along `delta1 + delta2`.
    pub diagonal2: bool,
}

impl GridLines {
    pub fn generators() -> Self {
        Self { delta1: true, delta2: true, ..Default::default() }
    }

    pub fn all() -> Self {
        Self { delta1: true, delta2: true, diagonal1: true, diagonal2: true }
    }
}

/// A line family: points `i * offset + j * direction` for each `i`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineFamily {
    pub direction: [f64; 2],
    pub offset: [f64; 2],
}

/// Line families requested by `config.grid_lines`, skipping directions
/// with no screen displacement.
pub(crate) fn families(config: &GridConfig) -> Vec<LineFamily> {
    let d1 = [config.delta1_x, config.delta1_y];
    let d2 = [config.delta2_x, config.delta2_y];
    let flags = config.grid_lines;
    [
        (flags.delta1, d1, d2),
        (flags.delta2, d2, d1),
        (flags.diagonal1, [d1[0] - d2[0], d1[1] - d2[1]], d1),
        (flags.diagonal2, [d1[0] + d2[0], d1[1] + d2[1]], d1),
    ]
    .into_iter()
    .filter(|&(wanted, direction, _)| wanted && direction != [0.0, 0.0])
    .map(|(_, direction, offset)| LineFamily { direction, offset })
    .collect()
}

/// The visible part of line `i` of `family`.
///
/// Walks `j` upward from `-range - 1` until a lattice point falls inside
/// the viewport, then on until one falls outside. The segment between the
/// last point before entry and the exit point is clipped to the viewport.
/// Lines with no lattice point inside within range are skipped.
pub(crate) fn visible_segment(
    family: &LineFamily,
    i: i64,
    range: i64,
    viewport: &Viewport,
) -> Option<([f64; 2], [f64; 2])> {
    let point = |j: i64| {
        [
            family.offset[0] * i as f64 + family.direction[0] * j as f64,
            family.offset[1] * i as f64 + family.direction[1] * j as f64,
        ]
    };
    let entry = (-range - 1..=range).find(|&j| viewport.contains(point(j)))?;
    let exit = (entry + 1..=range + 1)
        .find(|&j| !viewport.contains(point(j)))
        .unwrap_or(range + 1);
    clip(point(entry - 1), point(exit), viewport)
}

/// Liang–Barsky clipping of the segment `p`–`q` against `viewport`.
pub(crate) fn clip(p: [f64; 2], q: [f64; 2], viewport: &Viewport) -> Option<([f64; 2], [f64; 2])> {
    let d = [q[0] - p[0], q[1] - p[1]];
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let bounds = [
        (-d[0], p[0] - viewport.min_x),
        (d[0], viewport.max_x - p[0]),
        (-d[1], p[1] - viewport.min_y),
        (d[1], viewport.max_y - p[1]),
    ];
    for (pk, qk) in bounds {
        if pk == 0.0 {
            if qk < 0.0 {
                return None;
            }
            continue;
        }
        let r = qk / pk;
        if pk < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let at = |t: f64| viewport.clamp([p[0] + t * d[0], p[1] + t * d[1]]);
    Some((at(t0), at(t1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unit_box() -> Viewport {
        Viewport { min_x: -2.0, max_x: 2.0, min_y: -2.0, max_y: 2.0 }
    }

    #[test]
    fn clip_horizontal_line() {
        let clipped = clip([-3.0, 1.0], [3.0, 1.0], &unit_box()).unwrap();
        assert_eq!(clipped, ([-2.0, 1.0], [2.0, 1.0]));
    }

    #[test]
    fn clip_misses_box() {
        assert!(clip([-3.0, 5.0], [3.0, 5.0], &unit_box()).is_none());
    }

    #[test]
    fn clip_keeps_inner_segment() {
        let clipped = clip([-1.0, 0.0], [1.0, 1.0], &unit_box()).unwrap();
        assert_eq!(clipped, ([-1.0, 0.0], [1.0, 1.0]));
    }

    #[test]
    fn segment_spans_whole_viewport() {
        let family = LineFamily { direction: [1.0, 0.0], offset: [0.0, -1.0] };
        let segment = visible_segment(&family, -1, 100, &unit_box()).unwrap();
        assert_eq!(segment, ([-2.0, 1.0], [2.0, 1.0]));
    }

    #[test]
    fn line_outside_viewport_is_skipped() {
        let family = LineFamily { direction: [1.0, 0.0], offset: [0.0, -1.0] };
        assert!(visible_segment(&family, 3, 100, &unit_box()).is_none());
    }
}
