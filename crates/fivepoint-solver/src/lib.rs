//! Nistér's five-point algorithm for the essential matrix.
//!
//! Computes up to ten candidate essential matrices relating two calibrated
//! views from exactly five point correspondences in normalized image
//! coordinates. The candidates are algebraic solutions of the epipolar and
//! singular-value constraints, intended as minimal-sample hypotheses for an
//! outer robust-estimation loop.
//!
//! The pipeline runs five stages on the calling thread, with no shared
//! state: nullspace-basis extraction, constraint-polynomial expansion,
//! Gröbner reduction, action-matrix assembly and eigen-extraction. See
//! [`essential_five_point`] for the entry point.

use thiserror::Error;

mod action;
mod essential;
mod groebner;
mod math;
mod nullspace;
mod polynomial;

pub use essential::{essential_five_point, FivePointOptions, FivePointSolver};

/// Errors that can occur during five-point essential matrix estimation.
///
/// Numerically degenerate configurations (e.g. coplanar points) are not an
/// error: the solver returns whatever candidates survive its filters,
/// possibly none, and leaves rejection to the caller.
#[derive(Debug, Error)]
pub enum FivePointError {
    /// One of the point lists does not contain exactly five correspondences.
    #[error("invalid number of correspondences: expected {expected}, right has {right}, left has {left}")]
    InvalidPointCount {
        expected: usize,
        right: usize,
        left: usize,
    },
    /// A singular value decomposition in the pipeline failed.
    #[error("svd failed in five-point estimation")]
    SvdFailed,
    /// The eigensolver did not converge on the action matrix.
    #[error("eigensolver failed to converge on the action matrix")]
    EigenFailed,
}
