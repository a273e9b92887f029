//! Nullspace basis of the epipolar constraint matrix.
//!
//! First stage of the pipeline: the five correspondences give a 5×9 linear
//! system on the unrolled essential matrix, whose right nullspace is
//! four-dimensional in the generic case.

use crate::FivePointError;
use fivepoint_core::{Pt2, Real, Vec9};
use nalgebra::DMatrix;

/// Compute the four-dimensional right nullspace of the epipolar matrix.
///
/// Row `i` of the constraint matrix encodes `x_r^T E x_l = 0` for the i-th
/// correspondence, with the nine entries of `E` unrolled across the columns:
///
/// ```text
/// [ xr*xl, yr*xl, xl, xr*yl, yr*yl, yl, xr, yr, 1 ]
/// ```
///
/// The matrix is zero-padded to 9×9 so the SVD exposes the full set of right
/// singular vectors; the four vectors of the smallest singular values span
/// the nullspace and are returned in order. Extraction is positional: with
/// five rows over a nine-dimensional space, the generic nullspace dimension
/// is exactly four.
///
/// Both slices must already hold exactly five points.
pub(crate) fn nullspace_basis(
    right_points: &[Pt2],
    left_points: &[Pt2],
) -> Result<[Vec9; 4], FivePointError> {
    let mut a = DMatrix::<Real>::zeros(9, 9);

    for (i, (pr, pl)) in right_points.iter().zip(left_points.iter()).enumerate() {
        a[(i, 0)] = pr.x * pl.x;
        a[(i, 1)] = pr.y * pl.x;
        a[(i, 2)] = pl.x;

        a[(i, 3)] = pr.x * pl.y;
        a[(i, 4)] = pr.y * pl.y;
        a[(i, 5)] = pl.y;

        a[(i, 6)] = pr.x;
        a[(i, 7)] = pr.y;
        a[(i, 8)] = 1.0;
    }

    let svd = a.svd(true, true);
    let v_t = svd.v_t.ok_or(FivePointError::SvdFailed)?;

    let mut basis = [Vec9::zeros(); 4];
    for (k, vector) in basis.iter_mut().enumerate() {
        for j in 0..9 {
            vector[j] = v_t[(5 + k, j)];
        }
    }

    Ok(basis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivepoint_core::{synthetic::project_two_views, Pt3, Vec3};
    use nalgebra::Rotation3;

    fn test_scene() -> (Vec<Pt2>, Vec<Pt2>) {
        let rot = Rotation3::from_euler_angles(0.1, -0.05, 0.2);
        let t = Vec3::new(0.1, 0.02, 0.03);
        let world = vec![
            Pt3::new(0.1, 0.2, 2.0),
            Pt3::new(-0.2, 0.1, 2.5),
            Pt3::new(0.3, -0.1, 3.0),
            Pt3::new(-0.15, -0.2, 2.2),
            Pt3::new(0.05, 0.3, 2.8),
        ];
        let (left, right) = project_two_views(rot.matrix(), &t, &world);
        (right, left)
    }

    fn constraint_row(pr: &Pt2, pl: &Pt2) -> [Real; 9] {
        [
            pr.x * pl.x,
            pr.y * pl.x,
            pl.x,
            pr.x * pl.y,
            pr.y * pl.y,
            pl.y,
            pr.x,
            pr.y,
            1.0,
        ]
    }

    #[test]
    fn basis_vectors_annihilate_constraint_rows() {
        let (right, left) = test_scene();
        let basis = nullspace_basis(&right, &left).unwrap();

        for vector in &basis {
            for (pr, pl) in right.iter().zip(left.iter()) {
                let row = constraint_row(pr, pl);
                let dot: Real = row.iter().zip(vector.iter()).map(|(a, b)| a * b).sum();
                assert!(dot.abs() < 1e-12, "nullspace residual too large: {}", dot);
            }
        }
    }

    #[test]
    fn basis_vectors_are_orthonormal() {
        let (right, left) = test_scene();
        let basis = nullspace_basis(&right, &left).unwrap();

        for (i, a) in basis.iter().enumerate() {
            assert!((a.norm() - 1.0).abs() < 1e-12);
            for b in basis.iter().skip(i + 1) {
                assert!(a.dot(b).abs() < 1e-12);
            }
        }
    }
}
