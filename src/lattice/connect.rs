//! Unit-step connection search with distance-2 bridging.
//!
//! Two monzos are joined when they differ by exactly one step along one
//! prime axis. With a maximum distance of 2, pairs two steps apart get an
//! auxiliary monzo (or two) inserted between them so that the pair still
//! renders as connected through a path of unit steps.
//!
//! Only two distance-2 shapes are bridged:
//!
//! ```text
//!   gap ±2 on one axis        →  one midpoint on that axis
//!   gap ±1 on two axes k < l  →  two corners, one per axis
//! ```
//!
//! Anything else stays unconnected.

use smallvec::SmallVec;

use crate::model::{Connection, EdgeType, Monzo};
use crate::vector::{pad_pair, sub, vectors_equal};
use crate::{Error, Result};

/// Largest per-coordinate deviation from an integer still counted as
/// integral.
pub const EPSILON: f64 = 1e-6;

/// Largest supported `max_distance`.
pub const MAX_SUPPORTED_DISTANCE: u32 = 2;

/// Result of [`connect`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Connectivity {
    /// Links into `monzos ++ auxiliaries`.
    pub connections: Vec<Connection>,
    /// Synthesized monzos, in discovery order.
    pub auxiliaries: Vec<Monzo>,
}

/// Taxicab distance between two monzos, zero-extending the shorter one.
///
/// Returns `None` when some coordinate differs by a non-integral amount,
/// i.e. the pair can never be reached by whole steps.
pub fn taxicab_distance(a: &[f64], b: &[f64]) -> Option<u64> {
    let (a, b) = pad_pair(a, b);
    let mut total = 0u64;
    for (x, y) in a.iter().zip(&b) {
        let d = (x - y).abs();
        let r = d.round();
        if (d - r).abs() > EPSILON {
            return None;
        }
        total += r as u64;
    }
    Some(total)
}

/// Compute unit-distance connections between `monzos`.
///
/// `max_distance` of 0 disables connections altogether, 1 links direct
/// neighbours only and 2 additionally synthesizes bridging monzos.
pub fn connect(monzos: &[Monzo], max_distance: u32) -> Result<Connectivity> {
    if max_distance > MAX_SUPPORTED_DISTANCE {
        return Err(Error::InvalidArgument(format!(
            "max distance {max_distance} is not supported (at most {MAX_SUPPORTED_DISTANCE})"
        )));
    }
    if max_distance == 0 {
        return Ok(Connectivity::default());
    }

    let mut auxiliaries: Vec<Monzo> = Vec::new();
    if max_distance > 1 {
        for (i, first) in monzos.iter().enumerate() {
            for second in &monzos[i + 1..] {
                let Some(distance) = taxicab_distance(first, second) else {
                    continue;
                };
                if distance <= 1 || distance > u64::from(max_distance) {
                    continue;
                }
                for candidate in bridge(first, second) {
                    let known = monzos
                        .iter()
                        .chain(&auxiliaries)
                        .any(|m| vectors_equal(m, &candidate));
                    if !known {
                        tracing::trace!(?candidate, "synthesized auxiliary monzo");
                        auxiliaries.push(candidate);
                    }
                }
            }
        }
    }

    let primary_count = monzos.len();
    let extended: Vec<&Monzo> = monzos.iter().chain(&auxiliaries).collect();
    let mut connections = Vec::new();
    for (i, a) in extended.iter().enumerate() {
        for (offset, b) in extended[i + 1..].iter().enumerate() {
            if taxicab_distance(a, b) == Some(1) {
                let j = i + 1 + offset;
                let edge_type = if j < primary_count {
                    EdgeType::Primary
                } else {
                    EdgeType::Auxiliary
                };
                connections.push(Connection { index1: i, index2: j, edge_type });
            }
        }
    }

    Ok(Connectivity { connections, auxiliaries })
}

/// Intermediate monzos joining `second` towards `first`.
///
/// Scans coordinates low to high and resolves only the first qualifying
/// gap. Returns nothing for gap shapes that are not bridged.
fn bridge(first: &[f64], second: &[f64]) -> SmallVec<[Monzo; 2]> {
    let gap = sub(first, second);
    let (_, base) = pad_pair(first, second);
    let shifted = |axis: usize, amount: f64| {
        let mut m = base.clone();
        m[axis] += amount;
        m
    };

    let mut out = SmallVec::new();
    for (k, &g) in gap.iter().enumerate() {
        let steps = g.round().abs();
        if steps == 2.0 {
            out.push(shifted(k, g / 2.0));
            return out;
        }
        if steps == 1.0 {
            let companion = gap
                .iter()
                .enumerate()
                .skip(k + 1)
                .find(|(_, d)| d.round() != 0.0);
            if let Some((l, &h)) = companion {
                out.push(shifted(k, g));
                out.push(shifted(l, h));
                return out;
            }
        }
    }
    out
}
