//! Measurement of internal-coordinate values from Cartesian geometry.

use nalgebra::Point3;

/// Bond length between two atoms.
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Valence angle a-b-c in radians, in `[0, π]`.
pub fn angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ba = a - b;
    let bc = c - b;
    let cos = ba.dot(&bc) / (ba.norm() * bc.norm());
    cos.clamp(-1.0, 1.0).acos()
}

/// Signed dihedral angle a-b-c-d in radians, in `(-π, π]`.
///
/// Uses the atan2 formulation, which stays well-conditioned near planar
/// configurations where the plain arccos form loses precision.
pub fn dihedral(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>, d: &Point3<f64>) -> f64 {
    let b1 = b - a;
    let b2 = c - b;
    let b3 = d - c;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);
    let m = n1.cross(&b2.normalize());

    let x = n1.dot(&n2);
    let y = m.dot(&n2);
    y.atan2(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn distance_and_angle() {
        assert!((distance(&p(0.0, 0.0, 0.0), &p(3.0, 4.0, 0.0)) - 5.0).abs() < 1e-12);
        let a = angle(&p(1.0, 0.0, 0.0), &p(0.0, 0.0, 0.0), &p(0.0, 1.0, 0.0));
        assert!((a - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn dihedral_trans_is_pi() {
        // Staggered trans arrangement.
        let d = dihedral(
            &p(0.0, 1.0, 0.0),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(1.0, -1.0, 0.0),
        );
        assert!((d.abs() - PI).abs() < 1e-12);
    }

    #[test]
    fn dihedral_perpendicular_is_half_pi() {
        let d = dihedral(
            &p(0.0, 1.0, 0.0),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(1.0, 0.0, 1.0),
        );
        assert!((d.abs() - FRAC_PI_2).abs() < 1e-12);
    }
}
