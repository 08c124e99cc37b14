//! Coefficient tables of the rank-48 complex bilinear scheme for 4x4x4
//! matrix multiplication.
//!
//! Every coefficient is `(re + im*i) / 2` with `re, im` in `{-1, 0, 1}`, so the
//! tables are stored exactly as small integers and scaled when they are read.
//! Operand entries are indexed row-major: entry `(r, c)` of a 4x4 operand is
//! column `4 * r + c` of a row of [`LHS`] or [`RHS`].

use num_complex::Complex64;

/// One table coefficient, `(re + im*i) / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coeff {
    pub re: i8,
    pub im: i8,
}

impl Coeff {
    pub const fn new(re: i8, im: i8) -> Self {
        Coeff { re, im }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0 && self.im == 0
    }

    /// The coefficient as a complex number.
    pub fn value(&self) -> Complex64 {
        Complex64::new(0.5 * self.re as f64, 0.5 * self.im as f64)
    }
}

const Z: Coeff = Coeff::new(0, 0);
const P: Coeff = Coeff::new(1, 0);
const M: Coeff = Coeff::new(-1, 0);
const I: Coeff = Coeff::new(0, 1);
const MI: Coeff = Coeff::new(0, -1);
const PPI: Coeff = Coeff::new(1, 1);
const PMI: Coeff = Coeff::new(1, -1);
const MPI: Coeff = Coeff::new(-1, 1);
const MMI: Coeff = Coeff::new(-1, -1);

/// Number of scalar products in the scheme.
pub const RANK: usize = 48;

/// Linear forms over the entries of the left operand, one per product.
#[rustfmt::skip]
pub const LHS: [[Coeff; 16]; 48] = [
    // 0
    [
        PPI, PPI, Z, Z, PMI, PMI, Z, Z,
        PMI, PMI, Z, Z, PMI, PMI, Z, Z,
    ],
    // 1
    [
        PPI, Z, Z, MPI, PPI, Z, Z, MPI,
        MMI, Z, Z, PMI, PMI, Z, Z, PPI,
    ],
    // 2
    [
        Z, M, P, Z, Z, MI, I, Z,
        Z, I, MI, Z, Z, MI, I, Z,
    ],
    // 3
    [
        MI, M, P, M, I, M, P, P,
        MI, M, P, M, M, MI, I, I,
    ],
    // 4
    [
        PPI, MMI, Z, Z, MPI, PMI, Z, Z,
        MPI, PMI, Z, Z, PMI, MPI, Z, Z,
    ],
    // 5
    [
        Z, Z, PMI, MMI, Z, Z, PMI, MMI,
        Z, Z, MPI, PPI, Z, Z, MMI, MPI,
    ],
    // 6
    [
        I, Z, Z, P, M, Z, Z, I,
        P, Z, Z, MI, M, Z, Z, I,
    ],
    // 7
    [
        PPI, MMI, Z, Z, MMI, PPI, Z, Z,
        MMI, PPI, Z, Z, MPI, PMI, Z, Z,
    ],
    // 8
    [
        MI, MI, M, MI, P, P, MI, P,
        M, M, MI, P, P, P, I, M,
    ],
    // 9
    [
        MPI, Z, Z, MMI, PPI, Z, Z, MPI,
        MMI, Z, Z, PMI, MMI, Z, Z, PMI,
    ],
    // 10
    [
        MPI, PMI, Z, Z, MPI, PMI, Z, Z,
        PMI, MPI, Z, Z, PPI, MMI, Z, Z,
    ],
    // 11
    [
        P, P, MI, M, M, M, I, P,
        P, P, I, P, MI, MI, P, MI,
    ],
    // 12
    [
        Z, PPI, MMI, Z, Z, MPI, PMI, Z,
        Z, MPI, PMI, Z, Z, PMI, MPI, Z,
    ],
    // 13
    [
        Z, PMI, MPI, Z, Z, PMI, MPI, Z,
        Z, PMI, MPI, Z, Z, PPI, MMI, Z,
    ],
    // 14
    [
        I, M, P, M, P, MI, I, I,
        P, I, MI, I, P, MI, I, I,
    ],
    // 15
    [
        Z, Z, MPI, PPI, Z, Z, PMI, MMI,
        Z, Z, PMI, MMI, Z, Z, MMI, MPI,
    ],
    // 16
    [
        M, I, I, MI, M, MI, MI, MI,
        M, I, I, MI, MI, P, P, P,
    ],
    // 17
    [
        PPI, PPI, Z, Z, PPI, PPI, Z, Z,
        PPI, PPI, Z, Z, MPI, MPI, Z, Z,
    ],
    // 18
    [
        I, I, M, I, I, I, M, I,
        I, I, P, MI, M, M, I, P,
    ],
    // 19
    [
        Z, Z, PMI, PPI, Z, Z, PMI, PPI,
        Z, Z, PMI, PPI, Z, Z, PPI, MPI,
    ],
    // 20
    [
        Z, PPI, MMI, Z, Z, PPI, MMI, Z,
        Z, MMI, PPI, Z, Z, PMI, MPI, Z,
    ],
    // 21
    [
        I, MI, M, MI, MI, I, P, I,
        MI, I, M, MI, M, P, I, M,
    ],
    // 22
    [
        MMI, Z, Z, MPI, PMI, Z, Z, MMI,
        PMI, Z, Z, MMI, MPI, Z, Z, PPI,
    ],
    // 23
    [
        Z, Z, MMI, PMI, Z, Z, PMI, PPI,
        Z, Z, PMI, PPI, Z, Z, MPI, MMI,
    ],
    // 24
    [
        M, P, MI, M, MI, I, P, MI,
        MI, I, M, I, I, MI, P, MI,
    ],
    // 25
    [
        Z, Z, PMI, PPI, Z, Z, MMI, PMI,
        Z, Z, PPI, MPI, Z, Z, PPI, MPI,
    ],
    // 26
    [
        Z, PPI, PPI, Z, Z, MMI, MMI, Z,
        Z, PPI, PPI, Z, Z, PMI, PMI, Z,
    ],
    // 27
    [
        MI, MI, P, I, M, M, MI, P,
        M, M, I, M, M, M, I, M,
    ],
    // 28
    [
        MPI, MPI, Z, Z, MMI, MMI, Z, Z,
        PPI, PPI, Z, Z, MMI, MMI, Z, Z,
    ],
    // 29
    [
        PPI, Z, Z, PMI, MMI, Z, Z, MPI,
        PPI, Z, Z, PMI, PMI, Z, Z, MMI,
    ],
    // 30
    [
        Z, PPI, PPI, Z, Z, MMI, MMI, Z,
        Z, MMI, MMI, Z, Z, MPI, MPI, Z,
    ],
    // 31
    [
        P, M, MI, P, P, M, MI, P,
        M, P, MI, P, MI, I, P, I,
    ],
    // 32
    [
        Z, Z, PPI, PMI, Z, Z, MPI, PPI,
        Z, Z, PMI, MMI, Z, Z, MPI, PPI,
    ],
    // 33
    [
        P, I, MI, MI, M, I, MI, I,
        M, MI, I, I, I, P, M, P,
    ],
    // 34
    [
        MI, I, M, I, M, P, I, P,
        P, M, I, P, P, M, I, P,
    ],
    // 35
    [
        Z, Z, PMI, PPI, Z, Z, MPI, MMI,
        Z, Z, PMI, PPI, Z, Z, MMI, PMI,
    ],
    // 36
    [
        Z, MMI, MMI, Z, Z, MPI, MPI, Z,
        Z, PMI, PMI, Z, Z, PMI, PMI, Z,
    ],
    // 37
    [
        P, MI, MI, MI, I, M, M, P,
        I, P, P, P, MI, P, P, M,
    ],
    // 38
    [
        Z, PMI, PMI, Z, Z, MMI, MMI, Z,
        Z, MMI, MMI, Z, Z, MMI, MMI, Z,
    ],
    // 39
    [
        M, MI, MI, MI, M, I, I, MI,
        P, I, I, I, I, P, P, M,
    ],
    // 40
    [
        MMI, MMI, Z, Z, PPI, PPI, Z, Z,
        MMI, MMI, Z, Z, MPI, MPI, Z, Z,
    ],
    // 41
    [
        PMI, Z, Z, MMI, MPI, Z, Z, PPI,
        MPI, Z, Z, PPI, PPI, Z, Z, PMI,
    ],
    // 42
    [
        PPI, Z, Z, MPI, PMI, Z, Z, PPI,
        PMI, Z, Z, PPI, PMI, Z, Z, PPI,
    ],
    // 43
    [
        I, P, M, M, P, I, MI, I,
        M, I, MI, MI, M, MI, I, MI,
    ],
    // 44
    [
        Z, Z, PMI, MMI, Z, Z, MMI, MPI,
        Z, Z, MMI, MPI, Z, Z, MMI, MPI,
    ],
    // 45
    [
        MPI, PMI, Z, Z, PPI, MMI, Z, Z,
        MMI, PPI, Z, Z, MMI, PPI, Z, Z,
    ],
    // 46
    [
        PMI, Z, Z, PPI, PMI, Z, Z, PPI,
        PMI, Z, Z, PPI, PPI, Z, Z, MPI,
    ],
    // 47
    [
        P, I, I, MI, I, P, P, P,
        MI, P, P, M, I, P, P, P,
    ],
];

/// Linear forms over the entries of the right operand, one per product.
#[rustfmt::skip]
pub const RHS: [[Coeff; 16]; 48] = [
    // 0
    [
        M, Z, Z, Z, M, Z, Z, Z,
        P, Z, Z, Z, MI, Z, Z, Z,
    ],
    // 1
    [
        Z, I, Z, I, Z, I, Z, I,
        Z, I, Z, I, Z, P, Z, P,
    ],
    // 2
    [
        Z, PPI, Z, Z, Z, MMI, Z, Z,
        Z, PPI, Z, Z, Z, PMI, Z, Z,
    ],
    // 3
    [
        MI, Z, I, Z, Z, MI, MI, Z,
        Z, I, I, Z, P, Z, M, Z,
    ],
    // 4
    [
        M, Z, P, P, P, Z, M, M,
        P, Z, M, M, I, Z, MI, MI,
    ],
    // 5
    [
        Z, P, Z, P, Z, P, Z, P,
        Z, P, Z, P, Z, I, Z, I,
    ],
    // 6
    [
        Z, MMI, Z, Z, Z, PPI, Z, Z,
        Z, PPI, Z, Z, Z, PMI, Z, Z,
    ],
    // 7
    [
        M, Z, Z, P, P, Z, Z, M,
        M, Z, Z, P, I, Z, Z, MI,
    ],
    // 8
    [
        P, Z, M, M, P, Z, M, M,
        Z, P, Z, Z, Z, MI, Z, Z,
    ],
    // 9
    [
        Z, I, I, I, Z, I, I, I,
        Z, MI, MI, MI, Z, P, P, P,
    ],
    // 10
    [
        Z, I, Z, I, Z, MI, Z, MI,
        Z, MI, Z, MI, Z, M, Z, M,
    ],
    // 11
    [
        MI, Z, Z, I, MI, Z, Z, I,
        Z, I, I, Z, Z, M, M, Z,
    ],
    // 12
    [
        M, Z, P, P, M, Z, P, P,
        P, Z, M, M, I, Z, MI, MI,
    ],
    // 13
    [
        I, Z, MI, Z, MI, Z, I, Z,
        I, Z, MI, Z, M, Z, P, Z,
    ],
    // 14
    [
        Z, M, Z, Z, M, Z, Z, Z,
        P, Z, Z, Z, Z, I, Z, Z,
    ],
    // 15
    [
        I, Z, Z, MI, I, Z, Z, MI,
        MI, Z, Z, I, P, Z, Z, M,
    ],
    // 16
    [
        Z, P, P, Z, P, Z, M, Z,
        P, Z, M, Z, Z, MI, MI, Z,
    ],
    // 17
    [
        MI, Z, I, Z, MI, Z, I, Z,
        MI, Z, I, Z, P, Z, M, Z,
    ],
    // 18
    [
        Z, MI, Z, MI, Z, MI, Z, MI,
        MI, Z, I, Z, P, Z, M, Z,
    ],
    // 19
    [
        MI, Z, I, Z, I, Z, MI, Z,
        I, Z, MI, Z, P, Z, M, Z,
    ],
    // 20
    [
        Z, MI, Z, MI, Z, MI, Z, MI,
        Z, I, Z, I, Z, P, Z, P,
    ],
    // 21
    [
        Z, M, M, Z, Z, P, P, Z,
        M, Z, Z, P, I, Z, Z, MI,
    ],
    // 22
    [
        MI, Z, I, I, MI, Z, I, I,
        MI, Z, I, I, P, Z, M, M,
    ],
    // 23
    [
        M, Z, P, P, M, Z, P, P,
        M, Z, P, P, I, Z, MI, MI,
    ],
    // 24
    [
        Z, I, Z, Z, Z, MI, Z, Z,
        MI, Z, I, I, P, Z, M, M,
    ],
    // 25
    [
        Z, I, I, I, Z, I, I, I,
        Z, MI, MI, MI, Z, M, M, M,
    ],
    // 26
    [
        Z, P, P, Z, Z, M, M, Z,
        Z, M, M, Z, Z, MI, MI, Z,
    ],
    // 27
    [
        Z, I, I, I, Z, I, I, I,
        MI, Z, Z, Z, M, Z, Z, Z,
    ],
    // 28
    [
        Z, P, Z, Z, Z, P, Z, Z,
        Z, P, Z, Z, Z, MI, Z, Z,
    ],
    // 29
    [
        Z, I, I, Z, Z, MI, MI, Z,
        Z, I, I, Z, Z, M, M, Z,
    ],
    // 30
    [
        M, Z, Z, P, M, Z, Z, P,
        M, Z, Z, P, I, Z, Z, MI,
    ],
    // 31
    [
        P, Z, M, Z, M, Z, P, Z,
        Z, M, Z, M, Z, I, Z, I,
    ],
    // 32
    [
        Z, I, Z, Z, Z, MI, Z, Z,
        Z, MI, Z, Z, Z, P, Z, Z,
    ],
    // 33
    [
        Z, M, Z, M, P, Z, Z, M,
        M, Z, Z, P, Z, MI, Z, MI,
    ],
    // 34
    [
        I, Z, Z, Z, MI, Z, Z, Z,
        Z, I, I, I, Z, M, M, M,
    ],
    // 35
    [
        Z, MI, MI, Z, Z, I, I, Z,
        Z, MI, MI, Z, Z, M, M, Z,
    ],
    // 36
    [
        Z, M, M, M, Z, M, M, M,
        Z, M, M, M, Z, MI, MI, MI,
    ],
    // 37
    [
        Z, I, I, I, MI, Z, I, I,
        MI, Z, I, I, Z, M, M, M,
    ],
    // 38
    [
        I, Z, Z, Z, MI, Z, Z, Z,
        MI, Z, Z, Z, M, Z, Z, Z,
    ],
    // 39
    [
        MI, Z, Z, I, Z, I, Z, I,
        Z, I, Z, I, M, Z, Z, P,
    ],
    // 40
    [
        Z, I, I, Z, Z, I, I, Z,
        Z, MI, MI, Z, Z, P, P, Z,
    ],
    // 41
    [
        P, Z, Z, M, P, Z, Z, M,
        M, Z, Z, P, I, Z, Z, MI,
    ],
    // 42
    [
        I, Z, Z, Z, MI, Z, Z, Z,
        I, Z, Z, Z, P, Z, Z, Z,
    ],
    // 43
    [
        P, Z, M, M, Z, M, M, M,
        Z, P, P, P, MI, Z, I, I,
    ],
    // 44
    [
        MI, Z, Z, Z, I, Z, Z, Z,
        MI, Z, Z, Z, P, Z, Z, Z,
    ],
    // 45
    [
        Z, MI, MI, MI, Z, I, I, I,
        Z, MI, MI, MI, Z, P, P, P,
    ],
    // 46
    [
        M, Z, P, Z, P, Z, M, Z,
        P, Z, M, Z, I, Z, MI, Z,
    ],
    // 47
    [
        P, Z, Z, Z, Z, P, Z, Z,
        Z, P, Z, Z, I, Z, Z, Z,
    ],
];

/// Recombination of the 48 products into each output cell, row-major.
#[rustfmt::skip]
pub const OUT: [[Coeff; 48]; 16] = [
    // 0
    [
        I, MI, Z, Z, Z, M, Z, Z, P, I, Z, MPI,
        Z, Z, P, MI, MMI, I, MMI, Z, Z, Z, Z, Z,
        MI, Z, I, I, P, Z, I, Z, MI, Z, P, Z,
        P, MI, M, PMI, MI, Z, M, M, M, Z, MI, P,
    ],
    // 1
    [
        MI, Z, P, MMI, Z, P, P, Z, M, Z, Z, PMI,
        M, I, I, I, Z, MI, PPI, Z, P, Z, M, Z,
        I, Z, Z, MI, M, MI, Z, Z, I, MMI, M, Z,
        Z, M, Z, Z, I, I, Z, MI, P, Z, Z, MI,
    ],
    // 2
    [
        Z, Z, M, P, Z, M, Z, Z, MI, Z, Z, I,
        P, MI, MI, MI, M, Z, M, I, M, I, Z, M,
        MI, M, I, P, Z, Z, I, M, MI, P, P, I,
        P, MI, M, MI, Z, Z, Z, I, M, Z, Z, P,
    ],
    // 3
    [
        I, MI, Z, I, MI, Z, M, P, P, I, M, M,
        Z, Z, P, Z, MI, I, MI, Z, Z, M, P, Z,
        P, Z, Z, I, P, I, Z, MI, Z, I, I, Z,
        Z, P, Z, P, MI, MI, M, M, Z, MI, MI, I,
    ],
    // 4
    [
        M, M, Z, Z, Z, M, Z, Z, MI, MI, Z, PMI,
        Z, Z, MI, I, MPI, I, MMI, Z, Z, Z, Z, Z,
        M, Z, P, M, MI, Z, P, Z, M, Z, I, Z,
        P, M, M, MMI, I, Z, P, I, MI, Z, M, MI,
    ],
    // 5
    [
        P, Z, M, PMI, Z, P, P, Z, I, Z, Z, MPI,
        P, M, M, MI, Z, MI, PPI, Z, I, Z, M, Z,
        P, Z, Z, P, I, P, Z, Z, P, PMI, MI, Z,
        Z, MI, Z, Z, MI, M, Z, P, I, Z, Z, P,
    ],
    // 6
    [
        Z, Z, P, M, Z, M, Z, Z, M, Z, Z, MI,
        M, P, P, I, M, Z, M, I, MI, MI, Z, I,
        M, MI, P, I, Z, Z, P, M, M, M, I, MI,
        P, M, M, MI, Z, Z, Z, M, MI, Z, Z, MI,
    ],
    // 7
    [
        M, M, Z, I, M, Z, M, M, MI, MI, M, P,
        Z, Z, MI, Z, I, I, MI, Z, Z, P, P, Z,
        MI, Z, Z, M, MI, M, Z, MI, Z, I, M, Z,
        Z, I, Z, M, I, P, P, I, Z, P, M, M,
    ],
    // 8
    [
        MI, I, Z, Z, Z, I, Z, Z, MI, P, Z, PPI,
        Z, Z, I, M, MMI, P, MPI, Z, Z, Z, Z, Z,
        M, Z, I, P, M, Z, MI, Z, MI, Z, MI, Z,
        MI, M, MI, MPI, M, Z, MI, I, M, Z, MI, I,
    ],
    // 9
    [
        I, Z, I, MMI, Z, MI, I, Z, I, Z, Z, MMI,
        I, I, M, P, Z, M, PMI, Z, M, Z, I, Z,
        P, Z, Z, M, P, MI, Z, Z, I, PPI, I, Z,
        Z, I, Z, Z, P, MI, Z, M, P, Z, Z, P,
    ],
    // 10
    [
        Z, Z, MI, P, Z, I, Z, Z, P, Z, Z, I,
        MI, MI, P, M, M, Z, M, M, P, MI, Z, P,
        M, P, I, I, Z, Z, MI, P, MI, M, MI, M,
        MI, M, MI, I, Z, Z, Z, P, M, Z, Z, I,
    ],
    // 11
    [
        MI, I, Z, I, MI, Z, MI, I, MI, P, MI, P,
        Z, Z, I, Z, MI, P, I, Z, Z, M, MI, Z,
        I, Z, Z, P, M, I, Z, MI, Z, MI, M, Z,
        Z, MI, Z, M, M, I, MI, I, Z, MI, MI, M,
    ],
    // 12
    [
        MI, MI, Z, Z, Z, P, Z, Z, I, I, Z, MPI,
        Z, Z, MI, MI, PPI, MI, PPI, Z, Z, Z, Z, Z,
        P, Z, MI, P, P, Z, I, Z, I, Z, MI, Z,
        M, P, M, PMI, MI, Z, P, MI, M, Z, I, MI,
    ],
    // 13
    [
        I, Z, M, MMI, Z, M, P, Z, MI, Z, Z, PMI,
        M, I, M, I, Z, I, MMI, Z, M, Z, P, Z,
        M, Z, Z, M, M, MI, Z, Z, MI, PPI, I, Z,
        Z, I, Z, Z, I, MI, Z, M, P, Z, Z, P,
    ],
    // 14
    [
        Z, Z, P, I, Z, P, Z, Z, M, Z, Z, M,
        P, MI, P, MI, I, Z, I, I, P, P, Z, M,
        P, P, MI, I, Z, Z, I, MI, I, MI, MI, MI,
        M, P, M, P, Z, Z, Z, P, M, Z, Z, MI,
    ],
    // 15
    [
        MI, MI, Z, P, I, Z, M, M, I, I, M, I,
        Z, Z, MI, Z, P, MI, P, Z, Z, MI, M, Z,
        MI, Z, Z, P, P, I, Z, M, Z, M, M, Z,
        Z, MI, Z, MI, MI, I, P, MI, Z, MI, I, M,
    ],
];
