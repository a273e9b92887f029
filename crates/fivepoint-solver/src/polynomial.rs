//! Constraint polynomial system for the five-point solver.
//!
//! Symbolic polynomial arithmetic in three variables (x, y, z) up to total
//! degree 3, used to expand the essential-matrix constraints over the
//! nullspace parametrization `E = x B0 + y B1 + z B2 + B3`.

use fivepoint_core::{Real, Vec9};

/// The 20 monomials of degree ≤ 3 in (x, y, z), as exponent triples.
///
/// The first ten are the leading degree-3 monomials; the rest follow in
/// decreasing total degree. This ordering is a contract shared with the
/// Gröbner reduction and the action-matrix assembly: coefficient row layout,
/// the selection of reduced rows and the unit-row columns all index into it.
pub(crate) const MONOMIALS: [(u8, u8, u8); 20] = [
    (3, 0, 0), // x^3
    (2, 1, 0), // x^2 y
    (1, 2, 0), // x y^2
    (0, 3, 0), // y^3
    (2, 0, 1), // x^2 z
    (1, 1, 1), // x y z
    (0, 2, 1), // y^2 z
    (1, 0, 2), // x z^2
    (0, 1, 2), // y z^2
    (0, 0, 3), // z^3
    (2, 0, 0), // x^2
    (1, 1, 0), // x y
    (0, 2, 0), // y^2
    (1, 0, 1), // x z
    (0, 1, 1), // y z
    (0, 0, 2), // z^2
    (1, 0, 0), // x
    (0, 1, 0), // y
    (0, 0, 1), // z
    (0, 0, 0), // 1
];

/// Index of the monomial `x^dx * y^dy * z^dz` in [`MONOMIALS`].
fn monomial_index(dx: u8, dy: u8, dz: u8) -> Option<usize> {
    MONOMIALS.iter().position(|&m| m == (dx, dy, dz))
}

/// Polynomial in (x, y, z) with total degree ≤ 3.
///
/// Coefficients are stored flat, keyed by [`MONOMIALS`].
#[derive(Clone, Copy)]
pub(crate) struct Poly3 {
    pub coeffs: [Real; 20],
}

impl Poly3 {
    pub fn zero() -> Self {
        Self { coeffs: [0.0; 20] }
    }

    /// Linear polynomial `c0 + cx*x + cy*y + cz*z`.
    pub fn linear(c0: Real, cx: Real, cy: Real, cz: Real) -> Self {
        let mut p = Self::zero();
        p.coeffs[19] = c0;
        p.coeffs[16] = cx;
        p.coeffs[17] = cy;
        p.coeffs[18] = cz;
        p
    }

    /// Coefficient of the monomial `x^dx * y^dy * z^dz`, zero if absent.
    pub fn coeff(&self, dx: u8, dy: u8, dz: u8) -> Real {
        monomial_index(dx, dy, dz).map_or(0.0, |i| self.coeffs[i])
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut out = Self::zero();
        for i in 0..20 {
            out.coeffs[i] = self.coeffs[i] + other.coeffs[i];
        }
        out
    }

    pub fn sub(&self, other: &Self) -> Self {
        let mut out = Self::zero();
        for i in 0..20 {
            out.coeffs[i] = self.coeffs[i] - other.coeffs[i];
        }
        out
    }

    pub fn scale(&self, s: Real) -> Self {
        let mut out = Self::zero();
        for i in 0..20 {
            out.coeffs[i] = self.coeffs[i] * s;
        }
        out
    }

    /// Product of two polynomials.
    ///
    /// Only ever invoked with factors whose degrees sum to at most 3 (linear
    /// times quadratic at worst); higher-degree terms would be dropped.
    pub fn mul(&self, other: &Self) -> Self {
        let mut out = Self::zero();
        for (i, &ai) in self.coeffs.iter().enumerate() {
            if ai == 0.0 {
                continue;
            }
            let (ix, iy, iz) = MONOMIALS[i];
            for (j, &bj) in other.coeffs.iter().enumerate() {
                if bj == 0.0 {
                    continue;
                }
                let (jx, jy, jz) = MONOMIALS[j];
                let (dx, dy, dz) = (ix + jx, iy + jy, iz + jz);
                if dx + dy + dz > 3 {
                    continue;
                }
                if let Some(idx) = monomial_index(dx, dy, dz) {
                    out.coeffs[idx] += ai * bj;
                }
            }
        }
        out
    }
}

/// Multiply two 3×3 polynomial matrices.
fn poly_mat_mul(a: &[[Poly3; 3]; 3], b: &[[Poly3; 3]; 3]) -> [[Poly3; 3]; 3] {
    let mut out = [[Poly3::zero(); 3]; 3];
    for r in 0..3 {
        for c in 0..3 {
            let mut sum = Poly3::zero();
            for k in 0..3 {
                sum = sum.add(&a[r][k].mul(&b[k][c]));
            }
            out[r][c] = sum;
        }
    }
    out
}

/// Transpose a 3×3 polynomial matrix.
fn poly_transpose(a: &[[Poly3; 3]; 3]) -> [[Poly3; 3]; 3] {
    let mut out = [[Poly3::zero(); 3]; 3];
    for r in 0..3 {
        for c in 0..3 {
            out[r][c] = a[c][r];
        }
    }
    out
}

/// Determinant of a 3×3 polynomial matrix.
///
/// Expanded in the grouping
/// `e11 (e00 e22 - e20 e02) + e12 (e01 e20 - e00 e21) + e10 (e02 e21 - e01 e22)`
/// so the term accumulation order is fixed.
fn poly_det3(e: &[[Poly3; 3]; 3]) -> Poly3 {
    let term1 = e[1][1].mul(&e[0][0].mul(&e[2][2]).sub(&e[2][0].mul(&e[0][2])));
    let term2 = e[1][2].mul(&e[0][1].mul(&e[2][0]).sub(&e[0][0].mul(&e[2][1])));
    let term3 = e[1][0].mul(&e[0][2].mul(&e[2][1]).sub(&e[0][1].mul(&e[2][2])));

    term1.add(&term2).add(&term3)
}

/// Expand the ten cubic constraints of the five-point problem.
///
/// The parametric matrix `E(x, y, z) = x B0 + y B1 + z B2 + B3` (each basis
/// vector unrolled over the entries in index order) must have zero
/// determinant and two equal nonzero singular values. The latter is encoded
/// by the matrix identity `2 E E^T E - trace(E E^T) E = 0`.
///
/// Returns `[det, C0, ..., C8]`, with `C0..C8` walking the entries of the
/// matrix identity row-major. Every constraint has total degree ≤ 3 by
/// construction.
pub(crate) fn constraint_system(basis: &[Vec9; 4]) -> [Poly3; 10] {
    let mut e = [[Poly3::zero(); 3]; 3];
    for r in 0..3 {
        for c in 0..3 {
            let k = 3 * r + c;
            e[r][c] = Poly3::linear(basis[3][k], basis[0][k], basis[1][k], basis[2][k]);
        }
    }

    let det = poly_det3(&e);

    let e_t = poly_transpose(&e);
    let eet = poly_mat_mul(&e, &e_t);
    let eet_e = poly_mat_mul(&eet, &e);

    let trace = eet[0][0].add(&eet[1][1]).add(&eet[2][2]);

    let mut eqs = [Poly3::zero(); 10];
    eqs[0] = det;

    let mut row = 1;
    for r in 0..3 {
        for c in 0..3 {
            eqs[row] = eet_e[r][c].scale(2.0).sub(&trace.mul(&e[r][c]));
            row += 1;
        }
    }

    eqs
}
