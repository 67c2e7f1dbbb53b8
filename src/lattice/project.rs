//! Dimension projection.
//!
//! Prime axes that no screen axis uses are dropped before connection
//! search and restored (as zero columns) afterwards, so that distance is
//! measured only along primes that actually move a vertex on screen.

/// Length of the longest coordinate table.
pub fn axis_limit(axes: &[&[f64]]) -> usize {
    axes.iter().map(|a| a.len()).max().unwrap_or(0)
}

/// Whether every screen axis ignores prime `index`.
pub fn is_unused(axes: &[&[f64]], index: usize) -> bool {
    axes.iter().all(|a| a.get(index).is_none_or(|&c| c == 0.0))
}

/// Indices of the prime axes that influence at least one screen axis,
/// ascending.
pub fn used_axes(axes: &[&[f64]]) -> Vec<usize> {
    (0..axis_limit(axes)).filter(|&i| !is_unused(axes, i)).collect()
}

/// Drop unused prime axes from every vector.
///
/// Vectors are first zero-extended or truncated to the longest coordinate
/// table. Column order of the kept axes is preserved. Returns fresh owned
/// vectors.
pub fn project(vectors: &[Vec<f64>], axes: &[&[f64]]) -> Vec<Vec<f64>> {
    let keep = used_axes(axes);
    vectors
        .iter()
        .map(|v| {
            keep.iter()
                .map(|&i| v.get(i).copied().unwrap_or(0.0))
                .collect()
        })
        .collect()
}

/// Inverse of [`project`]: re-insert a zero column at every unused axis.
///
/// Output vectors always have the full coordinate table width, even when
/// every axis was dropped.
pub fn unproject(vectors: &[Vec<f64>], axes: &[&[f64]]) -> Vec<Vec<f64>> {
    if vectors.is_empty() {
        return Vec::new();
    }
    let limit = axis_limit(axes);
    vectors
        .iter()
        .map(|v| {
            let mut kept = v.iter().copied();
            (0..limit)
                .map(|i| {
                    if is_unused(axes, i) {
                        0.0
                    } else {
                        kept.next().unwrap_or(0.0)
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const H: [f64; 4] = [0.0, 40.0, 0.0, 13.0];
    const V: [f64; 4] = [0.0, 0.0, -40.0, -11.0];

    #[test]
    fn drops_equave_axis() {
        let projected = project(&[vec![1.0], vec![2.0, -1.0], vec![-3.0, 2.0]], &[&H, &V]);
        assert_eq!(
            projected,
            vec![
                vec![0.0, 0.0, 0.0],
                vec![-1.0, 0.0, 0.0],
                vec![2.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn truncates_past_longest_table() {
        let projected = project(&[vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]], &[&H, &V[..2]]);
        assert_eq!(projected, vec![vec![1.0, 3.0]]);
    }

    #[test]
    fn unproject_restores_zero_columns() {
        let restored = unproject(&[vec![1.0, 0.0, 2.0]], &[&H, &V]);
        assert_eq!(restored, vec![vec![0.0, 1.0, 0.0, 2.0]]);
    }

    #[test]
    fn all_zero_mapping_round_trips_to_full_width() {
        let zeros = [0.0; 3];
        let projected = project(&[vec![1.0, 2.0, 3.0]], &[&zeros, &zeros]);
        assert_eq!(projected, vec![Vec::<f64>::new()]);
        let restored = unproject(&projected, &[&zeros, &zeros]);
        assert_eq!(restored, vec![vec![0.0, 0.0, 0.0]]);
    }

    #[test]
    fn unproject_of_nothing_is_nothing() {
        assert!(unproject(&[], &[&H, &V]).is_empty());
    }
}
