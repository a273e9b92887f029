//! Shared numeric helpers for the five-point pipeline.

use fivepoint_core::Real;
use nalgebra::DMatrix;

/// Pivots smaller than this are treated as zero during row reduction.
const PIVOT_EPS: Real = 1e-12;

/// Reduce a rectangular matrix to reduced row echelon form in place.
///
/// Gauss-Jordan elimination with partial pivoting: for each pivot column the
/// row with the largest remaining magnitude is selected, normalized, and
/// eliminated from every other row. Columns whose best remaining pivot is
/// below `PIVOT_EPS` are skipped, so rank-deficient inputs reduce without
/// dividing by a vanishing pivot.
pub(crate) fn rref(m: &mut DMatrix<Real>) {
    let (rows, cols) = m.shape();

    let mut pivot_row = 0;
    for col in 0..cols {
        if pivot_row >= rows {
            break;
        }

        let mut best = pivot_row;
        for r in (pivot_row + 1)..rows {
            if m[(r, col)].abs() > m[(best, col)].abs() {
                best = r;
            }
        }
        if m[(best, col)].abs() < PIVOT_EPS {
            continue;
        }

        m.swap_rows(pivot_row, best);

        let inv = 1.0 / m[(pivot_row, col)];
        for c in col..cols {
            m[(pivot_row, c)] *= inv;
        }

        for r in 0..rows {
            if r == pivot_row {
                continue;
            }
            let factor = m[(r, col)];
            if factor == 0.0 {
                continue;
            }
            for c in col..cols {
                m[(r, c)] -= factor * m[(pivot_row, c)];
            }
        }

        pivot_row += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rref_small_matrix() {
        let mut m = DMatrix::from_row_slice(2, 3, &[0.0, 2.0, 4.0, 1.0, 1.0, 1.0]);
        rref(&mut m);

        let expected = DMatrix::from_row_slice(2, 3, &[1.0, 0.0, -1.0, 0.0, 1.0, 2.0]);
        assert!((m - expected).norm() < 1e-12);
    }

    #[test]
    fn rref_leaves_identity_augmented_block_alone() {
        // [I | B] is already in reduced form.
        let mut m = DMatrix::from_row_slice(
            3,
            5,
            &[
                1.0, 0.0, 0.0, 2.0, -1.0, //
                0.0, 1.0, 0.0, 0.5, 3.0, //
                0.0, 0.0, 1.0, -2.0, 4.0,
            ],
        );
        let expected = m.clone();
        rref(&mut m);
        assert!((m - expected).norm() < 1e-12);
    }

    #[test]
    fn rref_handles_rank_deficiency() {
        let mut m = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        rref(&mut m);

        assert!((m[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((m[(0, 1)] - 2.0).abs() < 1e-12);
        assert!(m.row(1).norm() < 1e-12);
    }
}
