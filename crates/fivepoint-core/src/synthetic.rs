//! Deterministic synthetic two-view scene generation.
//!
//! Small building blocks for constructing synthetic relative-pose problems
//! used in tests and examples: a ground-truth essential matrix from a known
//! motion, and normalized-coordinate projections of world points into two
//! views. Everything is deterministic; there are no random inputs.

use crate::math::{skew_symmetric, Mat3, Pt2, Pt3, Vec3};

/// Essential matrix of the relative motion `(R, t)`.
///
/// With the left camera at the origin and the right camera observing
/// `x_r = R x_w + t`, the matrix `E = [t]× R` satisfies `x_r^T E x_l = 0`
/// for every correspondence.
pub fn essential_from_motion(rot: &Mat3, t: &Vec3) -> Mat3 {
    skew_symmetric(t) * rot
}

/// Project world points into two views related by `(R, t)`.
///
/// The left camera sits at the origin with identity orientation; the right
/// camera maps world points as `p_r = R p_w + t`. Both projections are
/// returned in normalized image coordinates (division by depth), as
/// `(left, right)`.
///
/// All supplied points must have positive depth in both views; no visibility
/// filtering is performed.
pub fn project_two_views(rot: &Mat3, t: &Vec3, world: &[Pt3]) -> (Vec<Pt2>, Vec<Pt2>) {
    let mut left = Vec::with_capacity(world.len());
    let mut right = Vec::with_capacity(world.len());

    for pw in world {
        let pl = pw.coords;
        let pr = rot * pw.coords + t;

        left.push(Pt2::new(pl.x / pl.z, pl.y / pl.z));
        right.push(Pt2::new(pr.x / pr.z, pr.y / pr.z));
    }

    (left, right)
}
