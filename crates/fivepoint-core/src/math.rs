//! Mathematical utilities and type definitions.
//!
//! This module provides the fundamental types used throughout the workspace
//! and a few epipolar-geometry helpers shared by solvers, tests and examples.

use nalgebra::{Matrix3, Point2, Point3, SVector, Vector2, Vector3};

/// Scalar type used throughout the workspace (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 9-vector with [`Real`] components; an unrolled 3×3 matrix.
pub type Vec9 = SVector<Real, 9>;
/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
/// 3D point with [`Real`] coordinates.
pub type Pt3 = Point3<Real>;
/// 3×3 matrix with [`Real`] entries.
pub type Mat3 = Matrix3<Real>;

/// Convert a 2D point in Euclidean coordinates into homogeneous coordinates.
///
/// Given a point `p = (x, y)`, returns the homogeneous vector `(x, y, 1)`.
pub fn to_homogeneous(p: &Pt2) -> Vec3 {
    Vec3::new(p.x, p.y, 1.0)
}

/// Convert a 3D homogeneous vector back to a 2D point.
///
/// The input is interpreted as `(x, y, w)` and the result is `(x / w, y / w)`.
/// The caller is responsible for ensuring that `w != 0`.
pub fn from_homogeneous(v: &Vec3) -> Pt2 {
    Pt2::new(v.x / v.z, v.y / v.z)
}

/// Skew-symmetric cross-product matrix `[v]×` such that `[v]× w = v × w`.
pub fn skew_symmetric(v: &Vec3) -> Mat3 {
    Mat3::new(0.0, -v.z, v.y, v.z, 0.0, -v.x, -v.y, v.x, 0.0)
}

/// Scalar epipolar residual `x_r^T E x_l` for one correspondence.
///
/// Both points are taken in normalized image coordinates and lifted to
/// homogeneous form. Vanishes exactly when the correspondence satisfies the
/// epipolar constraint of `e`.
pub fn epipolar_residual(e: &Mat3, right: &Pt2, left: &Pt2) -> Real {
    let xl = to_homogeneous(left);
    let xr = to_homogeneous(right);
    (xr.transpose() * e * xl)[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homogeneous_round_trip() {
        let p = Pt2::new(0.25, -1.5);
        let h = to_homogeneous(&p);
        assert_eq!(h, Vec3::new(0.25, -1.5, 1.0));
        let q = from_homogeneous(&(h * 2.0));
        assert!((q - p).norm() < 1e-15);
    }

    #[test]
    fn skew_matches_cross_product() {
        let v = Vec3::new(0.3, -0.7, 1.1);
        let w = Vec3::new(-0.2, 0.5, 0.9);
        let via_matrix = skew_symmetric(&v) * w;
        let via_cross = v.cross(&w);
        assert!((via_matrix - via_cross).norm() < 1e-15);
        assert!((skew_symmetric(&v) + skew_symmetric(&v).transpose()).norm() < 1e-15);
    }

    #[test]
    fn residual_vanishes_on_epipolar_pair() {
        // E for a pure translation along x: [t]x with t = (1, 0, 0).
        let e = skew_symmetric(&Vec3::new(1.0, 0.0, 0.0));
        // Points on the same epipolar line (equal y).
        let left = Pt2::new(0.1, 0.4);
        let right = Pt2::new(0.7, 0.4);
        assert!(epipolar_residual(&e, &right, &left).abs() < 1e-15);
    }
}
