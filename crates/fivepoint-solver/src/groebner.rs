//! Gröbner basis of the constraint system via row reduction.
//!
//! The ten cubic constraints share the fixed 20-monomial support, so the
//! Gröbner basis computation specializes to Gaussian elimination on their
//! coefficient matrix; full Buchberger is not required.

use crate::math::rref;
use crate::polynomial::{Poly3, MONOMIALS};
use fivepoint_core::Real;
use nalgebra::DMatrix;

/// Row-reduce the ten constraints and return the reduced coefficient block.
///
/// Row `i` of the 10×20 matrix holds constraint `i` against the fixed
/// monomial ordering, so columns 0..9 carry the leading degree-3 monomials.
/// After reduction to reduced row echelon form those columns form an
/// identity block in the generic case, and each row reads
///
/// ```text
/// leading_monomial_i + sum_j G[i][j] * basis_monomial_j = 0
/// ```
///
/// where the basis monomials are `{x², xy, y², xz, yz, z², x, y, z, 1}`.
/// The returned 10×10 matrix `G` is the block of columns 10..19.
pub(crate) fn groebner_basis(constraints: &[Poly3; 10]) -> DMatrix<Real> {
    let mut m = DMatrix::<Real>::zeros(10, 20);
    for (r, p) in constraints.iter().enumerate() {
        for (c, &(dx, dy, dz)) in MONOMIALS.iter().enumerate() {
            m[(r, c)] = p.coeff(dx, dy, dz);
        }
    }

    rref(&mut m);

    let mut g = DMatrix::<Real>::zeros(10, 10);
    for r in 0..10 {
        for c in 0..10 {
            g[(r, c)] = m[(r, c + 10)];
        }
    }
    g
}
