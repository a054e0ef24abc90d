//! Seedless value noise
//!
//! A bit-mixing hash over the integer lattice, smoothed with a raised-cosine
//! blend and layered into fractal noise. Everything here is a pure function of
//! its arguments.

use std::f32::consts::PI;

/// Pseudo-random value in [-1, 1] for an integer lattice point.
pub fn lattice_noise(x: i32, z: i32) -> f32 {
    let n = x.wrapping_add(z.wrapping_mul(57));
    let n = (n << 13) ^ n;
    let mixed = n
        .wrapping_mul(
            n.wrapping_mul(n)
                .wrapping_mul(15731)
                .wrapping_add(789_221),
        )
        .wrapping_add(1_376_312_589);
    1.0 - (mixed & 0x7fff_ffff) as f32 / 1_073_741_824.0
}

/// Blend from `a` to `b` with weight `(1 - cos(pi * t)) / 2`.
///
/// The weight has zero slope at t = 0 and t = 1, so neighbouring lattice cells
/// join without creases.
pub fn cosine_interpolate(a: f32, b: f32, t: f32) -> f32 {
    let f = (1.0 - (t * PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}

/// Continuous noise: cosine-blended lattice values around (x, z).
pub fn smoothed_noise(x: f32, z: f32) -> f32 {
    let ix = x.floor() as i32;
    let iz = z.floor() as i32;
    let fx = x - ix as f32;
    let fz = z - iz as f32;

    let v00 = lattice_noise(ix, iz);
    let (jx, jz) = (ix.wrapping_add(1), iz.wrapping_add(1));
    let v10 = lattice_noise(jx, iz);
    let v01 = lattice_noise(ix, jz);
    let v11 = lattice_noise(jx, jz);

    let near = cosine_interpolate(v00, v10, fx);
    let far = cosine_interpolate(v01, v11, fx);
    cosine_interpolate(near, far, fz)
}

/// Sum of `octaves` layers of smoothed noise.
///
/// Each octave doubles the frequency and multiplies the amplitude by
/// `persistence`, starting from 1 and 1. The result is not clamped; its
/// magnitude is bounded by [`fractal_amplitude`].
pub fn fractal_noise(x: f32, z: f32, octaves: u32, persistence: f32) -> f32 {
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;

    for _ in 0..octaves {
        total += smoothed_noise(x * frequency, z * frequency) * amplitude;
        amplitude *= persistence;
        frequency *= 2.0;
    }
    total
}

/// Upper bound on `|fractal_noise(..)|` for the given octave parameters.
pub fn fractal_amplitude(octaves: u32, persistence: f32) -> f32 {
    (0..octaves).map(|i| persistence.powi(i as i32)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_noise_range() {
        for x in -64..64 {
            for z in -64..64 {
                let v = lattice_noise(x, z);
                assert!((-1.0..=1.0).contains(&v), "noise({}, {}) = {}", x, z, v);
            }
        }
    }

    #[test]
    fn test_lattice_noise_deterministic() {
        for (x, z) in [(0, 0), (1, 0), (0, 1), (-7, 13), (i32::MAX, i32::MIN)] {
            assert_eq!(lattice_noise(x, z).to_bits(), lattice_noise(x, z).to_bits());
        }
        // Not constant across the lattice
        assert_ne!(lattice_noise(0, 0), lattice_noise(1, 0));
    }

    #[test]
    fn test_cosine_interpolate_endpoints() {
        assert_eq!(cosine_interpolate(-0.5, 0.75, 0.0), -0.5);
        assert!((cosine_interpolate(-0.5, 0.75, 1.0) - 0.75).abs() < 1e-6);
        assert!((cosine_interpolate(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_smoothed_noise_matches_lattice_at_integers() {
        for (x, z) in [(0, 0), (3, -2), (-5, 9)] {
            let smooth = smoothed_noise(x as f32, z as f32);
            assert!((smooth - lattice_noise(x, z)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_smoothed_noise_continuous() {
        // Approaching a lattice line from either side gives the same value
        let below = smoothed_noise(2.0 - 1e-4, 0.3);
        let above = smoothed_noise(2.0 + 1e-4, 0.3);
        assert!((below - above).abs() < 1e-3);
    }

    #[test]
    fn test_fractal_noise_bounded() {
        let bound = fractal_amplitude(5, 0.45);
        assert!((bound - 1.784_631_3).abs() < 1e-5);

        for i in 0..200 {
            let x = i as f32 * 0.173 - 17.0;
            let z = i as f32 * 0.291 - 29.0;
            let v = fractal_noise(x, z, 5, 0.45);
            assert!(v.abs() <= bound + 1e-5);
        }
    }

    #[test]
    fn test_single_octave_is_smoothed_noise() {
        assert_eq!(fractal_noise(1.3, -4.7, 1, 0.45), smoothed_noise(1.3, -4.7));
        assert_eq!(fractal_noise(1.3, -4.7, 0, 0.45), 0.0);
    }
}
