//! Vector and color helpers over `Vec4`.
//!
//! The same `Vec4` carries points, directions (xyz, w = 0) and RGB colors
//! (w unused). Geometric operations only look at the xyz lanes so a stray
//! value in `w` never leaks into a dot product or a normal.

use crate::Vec4;

/// Component-wise sum.
#[inline]
pub fn add(a: Vec4, b: Vec4) -> Vec4 {
    a + b
}

/// Scale by a scalar.
#[inline]
pub fn mult(a: Vec4, s: f32) -> Vec4 {
    a * s
}

/// Component-wise product (color filtering).
#[inline]
pub fn mult_each(a: Vec4, b: Vec4) -> Vec4 {
    a * b
}

/// Linear blend `a * (1 - t) + b * t`.
///
/// Written in this form, rather than `a + (b - a) * t`, so that `t = 0`
/// yields `a` and `t = 1` yields `b` bit for bit.
#[inline]
pub fn mix(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a * (1.0 - t) + b * t
}

/// Dot product of the xyz lanes.
#[inline]
pub fn dot(a: Vec4, b: Vec4) -> f32 {
    a.truncate().dot(b.truncate())
}

/// Length of the xyz lanes.
#[inline]
pub fn length(a: Vec4) -> f32 {
    a.truncate().length()
}

/// Unit vector in the direction of `a`, with `w = 0`.
///
/// `a` must not be the zero vector.
#[inline]
pub fn normalize(a: Vec4) -> Vec4 {
    debug_assert!(length(a) > 0.0, "normalize called with a zero-length vector");
    a.truncate().normalize().extend(0.0)
}

/// Cross product of the xyz lanes, with `w = 0`.
#[inline]
pub fn cross(a: Vec4, b: Vec4) -> Vec4 {
    a.truncate().cross(b.truncate()).extend(0.0)
}

/// Any unit vector orthogonal to `n`.
///
/// Zeroes the smallest-magnitude component of `n`, then swaps and negates the
/// other two. Skipping the smallest component keeps the result well away
/// from zero length.
pub fn perpendicular(n: Vec4) -> Vec4 {
    let (ax, ay, az) = (n.x.abs(), n.y.abs(), n.z.abs());
    let p = if ax <= ay && ax <= az {
        Vec4::new(0.0, -n.z, n.y, 0.0)
    } else if ay <= az {
        Vec4::new(-n.z, 0.0, n.x, 0.0)
    } else {
        Vec4::new(-n.y, n.x, 0.0, 0.0)
    };
    normalize(p)
}

/// Mirror `d` about the surface normal `n`.
#[inline]
pub fn reflect(d: Vec4, n: Vec4) -> Vec4 {
    d - n * (2.0 * dot(d, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_unit(rng: &mut StdRng) -> Vec4 {
        loop {
            let v = Vec4::new(
                rng.gen::<f32>() * 2.0 - 1.0,
                rng.gen::<f32>() * 2.0 - 1.0,
                rng.gen::<f32>() * 2.0 - 1.0,
                0.0,
            );
            let len_sq = dot(v, v);
            if len_sq > 1e-4 && len_sq <= 1.0 {
                return normalize(v);
            }
        }
    }

    #[test]
    fn test_perpendicular_is_orthogonal_unit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let n = random_unit(&mut rng);
            let p = perpendicular(n);
            assert!(dot(n, p).abs() < 1e-5, "n={n:?} p={p:?}");
            assert!((length(p) - 1.0).abs() < 1e-5);
            assert_eq!(p.w, 0.0);
        }
    }

    #[test]
    fn test_perpendicular_axes() {
        for n in [Vec4::X, Vec4::Y, Vec4::Z, -Vec4::X, -Vec4::Y, -Vec4::Z] {
            let p = perpendicular(n);
            assert!(dot(n, p).abs() < 1e-6);
            assert!((length(p) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_mix_endpoints_exact() {
        let a = Vec4::new(0.1, 0.7, 0.3, 0.0);
        let b = Vec4::new(0.9, 0.2, 0.55, 0.0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn test_mix_is_affine() {
        let a = Vec4::new(0.0, 1.0, 2.0, 0.0);
        let b = Vec4::new(4.0, 3.0, 2.0, 0.0);
        let mid = mix(a, b, 0.5);
        assert!((mid - Vec4::new(2.0, 2.0, 2.0, 0.0)).length() < 1e-6);

        // Equal steps in t give equal steps in the result
        let s1 = mix(a, b, 0.5) - mix(a, b, 0.25);
        let s2 = mix(a, b, 0.75) - mix(a, b, 0.5);
        assert!((s1 - s2).length() < 1e-6);
    }

    #[test]
    fn test_dot_ignores_w() {
        let a = Vec4::new(1.0, 2.0, 3.0, 100.0);
        let b = Vec4::new(1.0, 1.0, 1.0, -5.0);
        assert_eq!(dot(a, b), 6.0);
    }

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(cross(Vec4::X, Vec4::Y), Vec4::Z);
        assert_eq!(cross(Vec4::Y, Vec4::Z), Vec4::X);
        assert_eq!(cross(Vec4::Y, Vec4::X), -Vec4::Z);
    }

    #[test]
    fn test_xyz_ops_drop_w() {
        let a = Vec4::new(0.0, 3.0, 4.0, 9.0);
        let b = Vec4::new(1.0, 0.0, 0.0, -2.0);
        assert_eq!(length(a), 5.0);
        assert_eq!(cross(a, b), Vec4::new(0.0, 4.0, -3.0, 0.0));
        assert_eq!(normalize(a).w, 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(Vec4::new(3.0, 0.0, 4.0, 7.0));
        assert!((n - Vec4::new(0.6, 0.0, 0.8, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_reflect() {
        // Ray going down-right bounces off a floor
        let d = normalize(Vec4::new(1.0, -1.0, 0.0, 0.0));
        let r = reflect(d, Vec4::Y);
        assert!((r - normalize(Vec4::new(1.0, 1.0, 0.0, 0.0))).length() < 1e-6);
    }

    #[test]
    fn test_arithmetic_helpers() {
        let a = Vec4::new(1.0, 2.0, 3.0, 0.0);
        let b = Vec4::new(0.5, 0.5, 2.0, 0.0);
        assert_eq!(add(a, b), Vec4::new(1.5, 2.5, 5.0, 0.0));
        assert_eq!(mult(a, 2.0), Vec4::new(2.0, 4.0, 6.0, 0.0));
        assert_eq!(mult_each(a, b), Vec4::new(0.5, 1.0, 6.0, 0.0));
    }
}
