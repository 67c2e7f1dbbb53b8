//! Ready-made coordinate tables.
//!
//! Every preset takes an `equave_index`: the prime of equivalence whose
//! coordinates are zeroed so that it is projected out of the lattice.

use std::f64::consts::TAU;

use crate::lattice::{LatticeConfig, LatticeConfig3D};
use crate::primes::{LOG_PRIMES, PRIMES, log2_prime};
use crate::val::mod_val;
use crate::{Error, Result};

const KRAIG_GRADY_X: [f64; 9] = [0.0, 40.0, 0.0, 13.0, -14.0, -8.0, -5.0, 7.0, 20.0];
const KRAIG_GRADY_Y: [f64; 9] = [0.0, 0.0, -40.0, -11.0, -18.0, -4.0, -32.0, -25.0, -6.0];

const WGP_X: [f64; 9] = [0.0, 40.0, 20.0, -12.0, 28.0, 8.0, -28.0, -18.0, 30.0];
const WGP_Y: [f64; 9] = [0.0, 0.0, -34.641016151377545, -30.0, -14.0, -38.0, -20.0, -36.0, -26.0];

/// Screen length of one octave on the circular presets.
const RING_SCALE: f64 = 20.0;

const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653; // π(3 − √5)

fn zero_equave(h: &mut [f64], v: &mut [f64], equave_index: usize) {
    if let Some(x) = h.get_mut(equave_index) {
        *x = 0.0;
    }
    if let Some(y) = v.get_mut(equave_index) {
        *y = 0.0;
    }
}

/// Kraig Grady's 23-limit lattice: 3 to the right, 5 straight up.
pub fn kraig_grady_9(equave_index: usize) -> LatticeConfig {
    let (mut h, mut v) = (KRAIG_GRADY_X.to_vec(), KRAIG_GRADY_Y.to_vec());
    zero_equave(&mut h, &mut v, equave_index);
    LatticeConfig::new(h, v)
}

/// 23-limit table with 3 horizontal and 5 on the 60° diagonal, so 3 and 5
/// form a triangular tonnetz.
pub fn wgp_9(equave_index: usize) -> LatticeConfig {
    let (mut h, mut v) = (WGP_X.to_vec(), WGP_Y.to_vec());
    zero_equave(&mut h, &mut v, equave_index);
    LatticeConfig::new(h, v)
}

/// Place primes on a clock face: prime `k` points at step `steps[k]` of
/// `divisions` (step 0 straight up) with length proportional to its size
/// in octaves.
fn ring(steps: &[i64], divisions: usize, equave_index: usize) -> LatticeConfig {
    let (mut h, mut v): (Vec<f64>, Vec<f64>) = steps
        .iter()
        .enumerate()
        .map(|(k, &step)| {
            let radius = RING_SCALE * log2_prime(k).unwrap_or(0.0);
            let angle = TAU * step as f64 / divisions as f64;
            (radius * angle.sin(), -radius * angle.cos())
        })
        .unzip();
    zero_equave(&mut h, &mut v, equave_index);
    LatticeConfig::new(h, v)
}

/// Scott Dakota's 24-step prime ring over the 23-limit.
pub fn scott_dakota_24(equave_index: usize) -> Result<LatticeConfig> {
    let steps = mod_val(&LOG_PRIMES[..9], 24, 0)?;
    Ok(ring(&steps, 24, equave_index))
}

/// The first `prime_count` primes on a 72-step ring.
pub fn prime_ring_72(
    prime_count: usize,
    equave_index: usize,
    search_resolution: usize,
) -> Result<LatticeConfig> {
    if prime_count > PRIMES.len() {
        return Err(Error::InvalidArgument(format!(
            "prime ring supports at most {} primes, got {prime_count}",
            PRIMES.len()
        )));
    }
    let steps = mod_val(&LOG_PRIMES[..prime_count], 72, search_resolution)?;
    Ok(ring(&steps, 72, equave_index))
}

/// Spatial preset: the first `prime_count` primes spread over a Fibonacci
/// sphere, each scaled by its size in octaves.
pub fn prime_sphere(prime_count: usize, equave_index: usize) -> Result<LatticeConfig3D> {
    if prime_count > PRIMES.len() {
        return Err(Error::InvalidArgument(format!(
            "prime sphere supports at most {} primes, got {prime_count}",
            PRIMES.len()
        )));
    }
    let n = prime_count as f64;
    let mut config = LatticeConfig3D::default();
    for k in 0..prime_count {
        let radius = if k == equave_index {
            0.0
        } else {
            RING_SCALE * log2_prime(k).unwrap_or(0.0)
        };
        let z = 1.0 - 2.0 * (k as f64 + 0.5) / n;
        let r = (1.0 - z * z).sqrt();
        let phi = GOLDEN_ANGLE * k as f64;
        config.horizontal_coordinates.push(radius * r * phi.cos());
        config.vertical_coordinates.push(radius * r * phi.sin());
        config.depth_coordinates.push(radius * z);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn kraig_grady_basics() {
        let config = kraig_grady_9(0);
        assert_eq!(config.position(&[0.0, 1.0]), [40.0, 0.0]);
        assert_eq!(config.position(&[0.0, 0.0, 1.0]), [0.0, -40.0]);
    }

    #[test]
    fn equave_is_zeroed() {
        let config = kraig_grady_9(1);
        assert_eq!(config.horizontal_coordinates[1], 0.0);
        assert_eq!(config.vertical_coordinates[1], 0.0);
    }

    #[test]
    fn wgp_five_sits_at_sixty_degrees() {
        let config = wgp_9(0);
        let [x, y] = config.position(&[0.0, 0.0, 1.0]);
        assert!((x.hypot(y) - 40.0).abs() < 1e-9);
        assert!((y.atan2(x) + PI / 3.0).abs() < 1e-9);
    }

    #[test]
    fn scott_dakota_lengths_follow_octaves() {
        let config = scott_dakota_24(0).unwrap();
        assert_eq!(config.horizontal_coordinates.len(), 9);
        let three = config.horizontal_coordinates[1].hypot(config.vertical_coordinates[1]);
        assert!((three - RING_SCALE * 3f64.log2()).abs() < 1e-9);
        assert_eq!(config.horizontal_coordinates[0], 0.0);
    }

    #[test]
    fn prime_ring_directions_are_distinct() {
        let config = prime_ring_72(24, 0, 2).unwrap();
        let angles: Vec<f64> = (1..24)
            .map(|k| config.horizontal_coordinates[k].atan2(config.vertical_coordinates[k]))
            .collect();
        for (a, first) in angles.iter().enumerate() {
            for second in &angles[a + 1..] {
                assert!((first - second).abs() > 1e-6);
            }
        }
    }

    #[test]
    fn prime_ring_rejects_too_many_primes() {
        assert!(prime_ring_72(73, 0, 0).is_err());
    }

    #[test]
    fn prime_sphere_has_three_tables() {
        let config = prime_sphere(9, 0).unwrap();
        assert_eq!(config.depth_coordinates.len(), 9);
        let [x, y, z] = config.position(&[0.0, 1.0]);
        let length = (x * x + y * y + z * z).sqrt();
        assert!((length - RING_SCALE * 3f64.log2()).abs() < 1e-9);
        assert_eq!(config.position(&[1.0]), [0.0, 0.0, 0.0]);
    }
}
