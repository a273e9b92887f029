//! Action matrix of the quotient algebra.
//!
//! Fourth stage: the reduced basis turns multiplication by the first
//! indeterminate into a 10×10 linear map on the basis monomials
//! `{x², xy, y², xz, yz, z², x, y, z, 1}`, whose eigen-structure encodes the
//! roots of the constraint system.

use fivepoint_core::Real;
use nalgebra::DMatrix;

/// Rows of the reduced basis selected for the degree-raising products.
///
/// Multiplying the first six basis monomials by x yields the leading
/// monomials `x³, x²y, xy², x²z, xyz, xz²`, which sit at rows 0, 1, 2, 4, 5
/// and 7 of the reduced basis under the fixed monomial ordering.
const REDUCED_ROWS: [usize; 6] = [0, 1, 2, 4, 5, 7];

/// Assemble the action matrix from the reduced coefficient block.
///
/// Rows 0..5 are the negated reduced-basis rows for `x * {x², xy, y², xz,
/// yz, z²}` (the sign comes from moving the leading term across the
/// equation); rows 6..9 state that `x * {x, y, z, 1} = {x², xy, xz, x}` are
/// themselves basis monomials, at columns 0, 1, 3 and 6.
pub(crate) fn action_matrix(g: &DMatrix<Real>) -> DMatrix<Real> {
    let mut action = DMatrix::<Real>::zeros(10, 10);

    for (i, &row) in REDUCED_ROWS.iter().enumerate() {
        for c in 0..10 {
            action[(i, c)] = -g[(row, c)];
        }
    }

    action[(6, 0)] = 1.0;
    action[(7, 1)] = 1.0;
    action[(8, 3)] = 1.0;
    action[(9, 6)] = 1.0;

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembly_is_mechanical() {
        let g = DMatrix::<Real>::from_fn(10, 10, |r, c| (10 * r + c) as Real);
        let action = action_matrix(&g);

        for (i, &row) in REDUCED_ROWS.iter().enumerate() {
            for c in 0..10 {
                assert_eq!(action[(i, c)], -g[(row, c)]);
            }
        }

        let units = [(6, 0), (7, 1), (8, 3), (9, 6)];
        for r in 6..10 {
            for c in 0..10 {
                let expected = if units.contains(&(r, c)) { 1.0 } else { 0.0 };
                assert_eq!(action[(r, c)], expected);
            }
        }
    }
}
