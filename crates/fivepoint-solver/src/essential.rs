//! Essential matrix estimation from five correspondences.
//!
//! Top-level entry point of the pipeline, plus the final eigen-extraction
//! stage: eigenvalues of the action matrix locate the roots of the
//! constraint system, and each real root reconstructs one candidate
//! essential matrix from the nullspace basis.

use crate::action::action_matrix;
use crate::groebner::groebner_basis;
use crate::nullspace::nullspace_basis;
use crate::polynomial::constraint_system;
use crate::FivePointError;
use fivepoint_core::{Mat3, Pt2, Real, Vec9};
use log::debug;
use nalgebra::linalg::Schur;

/// Divisors below this magnitude disqualify a candidate instead of being
/// inverted.
const DIVISOR_EPS: Real = 1e-12;

/// Iteration bound for the Schur decomposition of the action matrix.
const SCHUR_MAX_ITERS: usize = 10_000;

/// Configuration for [`essential_five_point`].
#[derive(Debug, Clone, Copy)]
pub struct FivePointOptions {
    /// Upper bound on the imaginary part of an action-matrix eigenvalue for
    /// its root to be treated as real. Nullspace extraction is positional,
    /// so this does not affect the SVD stage.
    pub tolerance: Real,
}

impl Default for FivePointOptions {
    fn default() -> Self {
        Self { tolerance: 1e-4 }
    }
}

/// Five-point algorithm for the essential matrix in normalized coordinates.
///
/// The inputs must be **calibrated** (e.g. apply `K^{-1}` to pixel points)
/// and each contain exactly five correspondences, ordered so that
/// `right_points[i]` matches `left_points[i]`. Returns up to ten candidate
/// matrices, each normalized so its (2,2) entry equals 1 and each satisfying
/// `x_r^T E x_l = 0` for the five inputs; choose among them by cheirality or
/// by scoring against additional correspondences.
///
/// Degenerate configurations are not detected: they simply yield fewer (or
/// numerically poor) candidates, and an empty list is a valid outcome.
pub fn essential_five_point(
    right_points: &[Pt2],
    left_points: &[Pt2],
    opts: &FivePointOptions,
) -> Result<Vec<Mat3>, FivePointError> {
    if right_points.len() != 5 || left_points.len() != 5 {
        debug!(
            "wrong number of input points: right has {}, left has {}",
            right_points.len(),
            left_points.len()
        );
        return Err(FivePointError::InvalidPointCount {
            expected: 5,
            right: right_points.len(),
            left: left_points.len(),
        });
    }

    let basis = nullspace_basis(right_points, left_points)?;
    let constraints = constraint_system(&basis);
    let groebner = groebner_basis(&constraints);
    let action = action_matrix(&groebner);

    let schur = Schur::try_new(action.clone(), Real::EPSILON, SCHUR_MAX_ITERS)
        .ok_or(FivePointError::EigenFailed)?;
    let eigenvalues = schur.complex_eigenvalues();

    let mut candidates = Vec::new();
    for val in eigenvalues.iter() {
        if val.im.abs() > opts.tolerance {
            continue;
        }

        // Right eigenvector of the action matrix for this root: the unit
        // nullspace vector of (A - lambda I). Its components are the basis
        // monomials {x², xy, y², xz, yz, z², x, y, z, 1} evaluated at the
        // root, up to a common scale w.
        let mut shifted = action.clone();
        for i in 0..10 {
            shifted[(i, i)] -= val.re;
        }
        let svd = shifted.svd(true, true);
        let v_t = svd.v_t.ok_or(FivePointError::SvdFailed)?;
        let vector = v_t.row(v_t.nrows() - 1);

        let w = vector[9];
        if w.abs() < DIVISOR_EPS {
            continue;
        }

        let x = vector[6] / w;
        let y = vector[7] / w;
        let z = vector[8] / w;

        let e: Vec9 = basis[0] * x + basis[1] * y + basis[2] * z + basis[3];
        if e[8].abs() < DIVISOR_EPS {
            continue;
        }
        let e = e / e[8];

        // The entry layout used by the algebra is the transpose of the
        // matrix acting on homogeneous left points, so the candidate is
        // assembled column-wise.
        candidates.push((val.re, Mat3::from_column_slice(e.as_slice())));
    }

    candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    debug!("five-point solve produced {} candidate(s)", candidates.len());

    Ok(candidates.into_iter().map(|(_, e)| e).collect())
}

/// Reusable five-point solver carrying its configuration.
///
/// Thin wrapper over [`essential_five_point`] for callers that thread one
/// configuration through many invocations (e.g. a RANSAC loop).
#[derive(Debug, Clone, Copy, Default)]
pub struct FivePointSolver {
    options: FivePointOptions,
}

impl FivePointSolver {
    pub fn new(options: FivePointOptions) -> Self {
        Self { options }
    }

    /// See [`essential_five_point`].
    pub fn solve(
        &self,
        right_points: &[Pt2],
        left_points: &[Pt2],
    ) -> Result<Vec<Mat3>, FivePointError> {
        essential_five_point(right_points, left_points, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_point_count() {
        let four = vec![
            Pt2::new(0.0, 0.0),
            Pt2::new(1.0, 0.0),
            Pt2::new(0.0, 1.0),
            Pt2::new(1.0, 1.0),
        ];
        let five = vec![
            Pt2::new(0.0, 0.0),
            Pt2::new(1.0, 0.0),
            Pt2::new(0.0, 1.0),
            Pt2::new(1.0, 1.0),
            Pt2::new(0.5, 0.5),
        ];

        let err = essential_five_point(&four, &five, &FivePointOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            FivePointError::InvalidPointCount {
                expected: 5,
                right: 4,
                left: 5
            }
        ));

        let err = essential_five_point(&five, &four, &FivePointOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            FivePointError::InvalidPointCount {
                expected: 5,
                right: 5,
                left: 4
            }
        ));
    }

    #[test]
    fn identity_correspondences_complete_without_error() {
        // No camera motion: every candidate still lies in the nullspace of
        // the measurement matrix, so the epipolar residuals vanish by
        // construction even though no meaningful motion can be recovered.
        let points = vec![
            Pt2::new(0.0, 0.0),
            Pt2::new(1.0, 0.0),
            Pt2::new(0.0, 1.0),
            Pt2::new(1.0, 1.0),
            Pt2::new(0.5, 0.5),
        ];

        let candidates =
            essential_five_point(&points, &points, &FivePointOptions::default()).unwrap();
        assert!(candidates.len() <= 10);

        for e in &candidates {
            let e = *e / e.norm();
            for p in &points {
                let residual = fivepoint_core::epipolar_residual(&e, p, p);
                assert!(residual.abs() < 1e-8, "residual too large: {}", residual);
            }
        }
    }
}
