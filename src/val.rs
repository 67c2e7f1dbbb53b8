//! Unique step mappings ("vals") modulo an equal division.
//!
//! A val sends each prime, through its logarithm, to a whole number of
//! steps. Circular presets need every prime on a distinct step of the
//! ring, so collisions are resolved here: first by nudging the step size
//! slightly (keeping the generators as consistent as possible), and
//! failing that by moving colliding primes to the nearest free step.

use hashbrown::HashSet;

use crate::vector::mmod;
use crate::{Error, Result};

/// Map `logs` to pairwise-distinct steps in `[0, divisions)`.
///
/// The first logarithm is the equave and always lands on step 0 under the
/// base normalizer `divisions / logs[0]`.
///
/// With `search_resolution > 0` the normalizer is scaled by
/// `1 ± i / (4 · divisions · search_resolution)` for `i = 0..=search_resolution`
/// (smallest offset first, positive before negative) and the first scale
/// giving distinct steps wins. Otherwise, or when no scale works,
/// collisions of the plain rounding are repaired left to right.
pub fn mod_val(logs: &[f64], divisions: usize, search_resolution: usize) -> Result<Vec<i64>> {
    if logs.len() > divisions {
        return Err(Error::InvalidArgument(format!(
            "{} logarithms cannot map injectively into {divisions} divisions",
            logs.len()
        )));
    }
    let Some(&equave) = logs.first() else {
        return Ok(Vec::new());
    };
    if equave == 0.0 || !equave.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "equave logarithm must be finite and nonzero, got {equave}"
        )));
    }

    let d = divisions as i64;
    let normalizer = divisions as f64 / equave;

    if search_resolution > 0 {
        let scale = 4.0 * divisions as f64 * search_resolution as f64;
        let factors = std::iter::once(1.0).chain((1..=search_resolution).flat_map(|i| {
            let offset = i as f64 / scale;
            [1.0 + offset, 1.0 - offset]
        }));
        for factor in factors {
            let steps: Vec<i64> = logs
                .iter()
                .map(|l| mmod((l * normalizer * factor).round() as i64, d))
                .collect();
            if all_distinct(&steps) {
                tracing::trace!(factor, "val found by normalizer search");
                return Ok(steps);
            }
        }
    }

    let mut taken: HashSet<i64> = HashSet::with_capacity(logs.len());
    let mut steps = Vec::with_capacity(logs.len());
    for &log in logs {
        let exact = log * normalizer;
        let rounded = exact.round() as i64;
        let step = if taken.contains(&mmod(rounded, d)) {
            let sign = if exact >= rounded as f64 { 1 } else { -1 };
            let repaired = (1..=d / 2)
                .flat_map(|j| [rounded + j * sign, rounded - j * sign])
                .find(|s| !taken.contains(&mmod(*s, d)))
                .ok_or_else(|| {
                    Error::InvalidArgument(format!("no free step left for logarithm {log}"))
                })?;
            tracing::trace!(log, from = rounded, to = repaired, "repaired val collision");
            repaired
        } else {
            rounded
        };
        taken.insert(mmod(step, d));
        steps.push(mmod(step, d));
    }
    Ok(steps)
}

fn all_distinct(steps: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(steps.len());
    steps.iter().all(|s| seen.insert(*s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::LOG_PRIMES;
    use pretty_assertions::assert_eq;

    #[test]
    fn twelve_edo_patent_val() {
        assert_eq!(mod_val(&LOG_PRIMES[..3], 12, 0).unwrap(), vec![0, 7, 4]);
    }

    #[test]
    fn nine_primes_on_twenty_four_steps() {
        assert_eq!(
            mod_val(&LOG_PRIMES[..9], 24, 0).unwrap(),
            vec![0, 14, 8, 19, 11, 17, 2, 6, 13]
        );
    }

    #[test]
    fn too_many_logs_fail() {
        let err = mod_val(&LOG_PRIMES[..5], 4, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(mod_val(&[], 0, 3).unwrap().is_empty());
    }

    #[test]
    fn collision_moves_towards_residual() {
        assert_eq!(mod_val(&[1.0, 1.01], 3, 0).unwrap(), vec![0, 1]);
        assert_eq!(mod_val(&[1.0, 0.99], 3, 0).unwrap(), vec![0, 2]);
    }

    #[test]
    fn repeated_collisions_walk_outwards() {
        assert_eq!(mod_val(&[1.0, 1.01, 1.02], 3, 0).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn normalizer_search_resolves_collision() {
        // 11.2 and 11.4 both round to 11 at the plain step size
        assert_eq!(mod_val(&[1.0, 1.12, 1.14], 10, 1).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn search_keeps_plain_val_when_already_distinct() {
        assert_eq!(mod_val(&LOG_PRIMES[..3], 12, 4).unwrap(), vec![0, 7, 4]);
    }
}
