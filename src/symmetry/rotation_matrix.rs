//! Exact integer rotation matrices and their crystallographic classification.

use std::fmt;
use std::ops::{Add, Mul, Neg};

use anyhow::{self, bail, ensure, format_err};
use nalgebra::{Matrix3, Vector3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::symmetry::axis_catalog;

#[cfg(test)]
#[path = "rotation_matrix_tests.rs"]
mod rotation_matrix_tests;

// ================
// Enum definitions
// ================

/// An enumerated type to classify an integer rotation matrix by its
/// properness and rotational order. The ten variants are the only rotation
/// types compatible with a lattice (crystallographic restriction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RotationType {
    /// Improper six-fold rotation ($`\bar{6}`$, $`S_3`$-like).
    ImproperSixFold,

    /// Improper four-fold rotation ($`\bar{4}`$, $`S_4`$-like).
    ImproperFourFold,

    /// Improper three-fold rotation ($`\bar{3}`$, $`S_6`$-like).
    ImproperThreeFold,

    /// Improper two-fold rotation ($`\bar{2}`$, a mirror plane).
    ImproperTwoFold,

    /// The inversion ($`\bar{1}`$).
    Inversion,

    /// The identity ($`1`$).
    Identity,

    /// Proper two-fold rotation.
    TwoFold,

    /// Proper three-fold rotation.
    ThreeFold,

    /// Proper four-fold rotation.
    FourFold,

    /// Proper six-fold rotation.
    SixFold,
}

impl RotationType {
    /// All rotation types in the fixed occurrence-table order.
    pub const ALL: [RotationType; 10] = [
        RotationType::ImproperSixFold,
        RotationType::ImproperFourFold,
        RotationType::ImproperThreeFold,
        RotationType::ImproperTwoFold,
        RotationType::Inversion,
        RotationType::Identity,
        RotationType::TwoFold,
        RotationType::ThreeFold,
        RotationType::FourFold,
        RotationType::SixFold,
    ];

    /// The signed integer encoding of this type: the rotational order, with
    /// negative sign for improper rotations.
    pub fn value(self) -> i32 {
        match self {
            RotationType::ImproperSixFold => -6,
            RotationType::ImproperFourFold => -4,
            RotationType::ImproperThreeFold => -3,
            RotationType::ImproperTwoFold => -2,
            RotationType::Inversion => -1,
            RotationType::Identity => 1,
            RotationType::TwoFold => 2,
            RotationType::ThreeFold => 3,
            RotationType::FourFold => 4,
            RotationType::SixFold => 6,
        }
    }

    /// The number of times a matrix of this type must be composed with itself
    /// to reach the identity.
    pub fn order(self) -> usize {
        let n = self.value();
        if n > 0 {
            // for N = 1, 2, 3, 4, 6 the order is N
            n as usize
        } else if n % 2 != 0 {
            // for N = -1 and N = -3 the order is -2N
            (-2 * n) as usize
        } else {
            // for N = -2, -4, -6 the order is -N
            (-n) as usize
        }
    }

    /// `true` for the proper types (determinant $`+1`$).
    pub fn is_proper(self) -> bool {
        self.value() > 0
    }
}

impl fmt::Display for RotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.value();
        if n < 0 {
            write!(f, "-{}", -n)
        } else {
            write!(f, "{n}")
        }
    }
}

// ==================
// Struct definitions
// ==================

/// An exact $`3 \times 3`$ integer matrix representing a (possibly improper)
/// rotation expressed in a lattice basis. Equality and hashing are
/// element-wise; all arithmetic is exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationMatrix(pub Matrix3<i32>);

impl RotationMatrix {
    /// Constructs a rotation matrix from its nine elements in row-major
    /// order.
    #[rustfmt::skip]
    pub fn new(
        m11: i32, m12: i32, m13: i32,
        m21: i32, m22: i32, m23: i32,
        m31: i32, m32: i32, m33: i32,
    ) -> Self {
        Self(Matrix3::new(m11, m12, m13, m21, m22, m23, m31, m32, m33))
    }

    /// Constructs a rotation matrix from its three column vectors.
    pub fn from_columns(c1: Vector3<i32>, c2: Vector3<i32>, c3: Vector3<i32>) -> Self {
        Self(Matrix3::from_columns(&[c1, c2, c3]))
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// The inversion $`\bar{1}`$.
    pub fn inversion() -> Self {
        Self(-Matrix3::identity())
    }

    /// Rounds a real matrix to the nearest integer matrix.
    pub fn from_real(m: &Matrix3<f64>) -> Self {
        Self(m.map(|v| v.round() as i32))
    }

    /// The matrix with real entries, for composition with cell matrices.
    pub fn to_real(&self) -> Matrix3<f64> {
        self.0.map(f64::from)
    }

    /// Generates a random rotation matrix with entries in $`\{-1, 0, 1\}`$
    /// and determinant $`\pm 1`$ (or of the requested properness), rejecting
    /// candidates that are not of a crystallographic rotation type.
    pub fn random<R: Rng>(rng: &mut R, properness: Option<bool>) -> Self {
        loop {
            let mat = Self(Matrix3::from_fn(|_, _| rng.gen_range(-1..=1)));
            let det = mat.determinant();
            let accepted = match properness {
                Some(true) => det == 1,
                Some(false) => det == -1,
                None => det == 1 || det == -1,
            };
            if accepted && mat.rotation_type().is_ok() {
                return mat;
            }
        }
    }

    /// The determinant by cofactor expansion, evaluated exactly.
    pub fn determinant(&self) -> i32 {
        let m = &self.0;
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }

    /// The trace, evaluated exactly.
    pub fn trace(&self) -> i32 {
        self.0[(0, 0)] + self.0[(1, 1)] + self.0[(2, 2)]
    }

    /// The transpose.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// The adjugate (transposed cofactor matrix), satisfying
    /// $`\mathbf{M} \mathrm{adj}(\mathbf{M}) = \det(\mathbf{M}) \mathbf{I}`$.
    #[rustfmt::skip]
    pub fn adjugate(&self) -> Self {
        let m = &self.0;
        Self::new(
            m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
            m[(0, 2)] * m[(2, 1)] - m[(0, 1)] * m[(2, 2)],
            m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
            m[(1, 2)] * m[(2, 0)] - m[(1, 0)] * m[(2, 2)],
            m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
            m[(0, 2)] * m[(1, 0)] - m[(0, 0)] * m[(1, 2)],
            m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)],
            m[(0, 1)] * m[(2, 0)] - m[(0, 0)] * m[(2, 1)],
            m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        )
    }

    /// The exact inverse, defined only for unimodular matrices.
    ///
    /// Not all space-group rotation matrices are orthogonal (e.g. the
    /// three-fold rotations in a hexagonal basis); they are nevertheless
    /// invertible over the integers as long as the determinant is $`\pm 1`$.
    ///
    /// # Errors
    ///
    /// Errors if the determinant is not $`\pm 1`$.
    pub fn inverse(&self) -> Result<Self, anyhow::Error> {
        let det = self.determinant();
        ensure!(
            det == 1 || det == -1,
            "`{self}` has determinant {det} and no integer inverse."
        );
        Ok(self.adjugate().scalar_mul(det))
    }

    /// The proper part: the matrix itself if the determinant is $`+1`$,
    /// otherwise its negation.
    pub fn proper(&self) -> Self {
        if self.determinant() == 1 {
            *self
        } else {
            -*self
        }
    }

    /// Classifies this matrix into one of the ten crystallographic rotation
    /// types from its determinant and trace.
    ///
    /// # Errors
    ///
    /// Errors if the (determinant, trace) pair is not realizable by a lattice
    /// rotation: such a matrix is invalid input, not a degenerate case.
    pub fn rotation_type(&self) -> Result<RotationType, anyhow::Error> {
        let det = self.determinant();
        let tr = self.trace();
        match (det, tr) {
            (-1, -3) => Ok(RotationType::Inversion),
            (-1, -2) => Ok(RotationType::ImproperSixFold),
            (-1, -1) => Ok(RotationType::ImproperFourFold),
            (-1, 0) => Ok(RotationType::ImproperThreeFold),
            (-1, 1) => Ok(RotationType::ImproperTwoFold),
            (1, -1) => Ok(RotationType::TwoFold),
            (1, 0) => Ok(RotationType::ThreeFold),
            (1, 1) => Ok(RotationType::FourFold),
            (1, 2) => Ok(RotationType::SixFold),
            (1, 3) => Ok(RotationType::Identity),
            _ => bail!("`{self}` (det {det}, trace {tr}) is not a crystallographic rotation."),
        }
    }

    /// The rotational order: the smallest positive $`n`$ with
    /// $`\mathbf{M}_{\mathrm{p}}^n = \mathbf{I}`$ for the proper part
    /// $`\mathbf{M}_{\mathrm{p}}`$.
    pub fn order(&self) -> Result<usize, anyhow::Error> {
        Ok(self.rotation_type()?.order())
    }

    /// The `exponent`-th iterated product of this matrix with itself.
    pub fn power(&self, exponent: usize) -> Self {
        let mut result = Self::identity();
        for _ in 0..exponent {
            result = result * *self;
        }
        result
    }

    /// The accumulated sum
    /// $`\mathbf{I} + \mathbf{M} + \mathbf{M}^2 + \ldots + \mathbf{M}^{n-1}`$
    /// over the rotational order $`n`$ of this matrix.
    pub fn accumulate(&self) -> Result<Self, anyhow::Error> {
        let order = self.order()?;
        let mut power = *self;
        let mut result = Self::identity() + *self;
        for _ in 2..order {
            power = power * *self;
            result = result + power;
        }
        if order == 1 {
            Ok(*self)
        } else {
            Ok(result)
        }
    }

    /// The rotation axis: the first catalog vector fixed by the proper part
    /// of this matrix (the eigenvector with eigenvalue one, found by
    /// exhaustive scan over the closed, pre-sorted axis catalog so that all
    /// arithmetic stays exact). The identity and the inversion fix every
    /// direction and yield the zero vector.
    ///
    /// # Errors
    ///
    /// Errors if no catalog vector is fixed, which indicates an invalid
    /// matrix in the upstream search rather than a representable rotation.
    pub fn rotation_axis(&self) -> Result<Vector3<i32>, anyhow::Error> {
        match self.rotation_type()? {
            RotationType::Identity | RotationType::Inversion => Ok(Vector3::zeros()),
            _ => {
                let proper = self.proper();
                axis_catalog::find_axis(|axis| proper * *axis == *axis)
                    .copied()
                    .ok_or_else(|| {
                        format_err!("No rotation axis found in the candidate catalog for `{self}`.")
                    })
            }
        }
    }

    /// All catalog vectors orthogonal to the rotation axis of this matrix.
    ///
    /// A vector $`\mathbf{x}`$ lies in the plane perpendicular to the axis of
    /// a proper rotation $`\mathbf{W}_{\mathrm{p}}`$ of order $`n`$ if and
    /// only if $`\mathbf{S} \mathbf{x} = \mathbf{0}`$ with
    /// $`\mathbf{S} = \mathbf{I} + \mathbf{W}_{\mathrm{p}} + \ldots +
    /// \mathbf{W}_{\mathrm{p}}^{n-1}`$ (Boisen & Gibbs, Theorem TA4.1; see
    /// also Grosse-Kunstleve, Acta Cryst. A55, 383–395, 1999).
    pub fn orthogonal_to_axis(&self, rotation_order: usize) -> Vec<Vector3<i32>> {
        let mut sum = Self::identity();
        let mut power = Self::identity();
        let proper = self.proper();
        for _ in 0..rotation_order.saturating_sub(1) {
            power = power * proper;
            sum = sum + power;
        }
        axis_catalog::filter_axes(|axis| sum * *axis == Vector3::zeros())
    }

    /// Whether this matrix rotates by a positive sense about the given axis.
    pub fn positive_sense_of_rotation(&self, rotation_axis: &Vector3<i32>) -> bool {
        let proper = self.proper();
        if rotation_axis.z == 0 && rotation_axis.y == 0 && rotation_axis.x * proper.0[(1, 2)] > 0 {
            return true;
        }
        proper.0[(0, 1)] * rotation_axis.z - proper.0[(0, 2)] * rotation_axis.y > 0
    }

    /// Multiplies every element by a scalar.
    pub fn scalar_mul(&self, k: i32) -> Self {
        Self(self.0.map(|v| v * k))
    }

    /// Divides every element by a scalar. Every element must divide evenly;
    /// a remainder is a violated contract of the caller, not a recoverable
    /// condition.
    pub fn exact_div(&self, k: i32) -> Self {
        Self(self.0.map(|v| {
            assert!(
                v % k == 0,
                "Element {v} of `{self}` is not divisible by {k}."
            );
            v / k
        }))
    }
}

impl fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {}; {} {} {}; {} {} {}]",
            self.0[(0, 0)],
            self.0[(0, 1)],
            self.0[(0, 2)],
            self.0[(1, 0)],
            self.0[(1, 1)],
            self.0[(1, 2)],
            self.0[(2, 0)],
            self.0[(2, 1)],
            self.0[(2, 2)],
        )
    }
}

impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: RotationMatrix) -> Self::Output {
        RotationMatrix(self.0 * rhs.0)
    }
}

impl Mul<Vector3<i32>> for RotationMatrix {
    type Output = Vector3<i32>;

    fn mul(self, rhs: Vector3<i32>) -> Self::Output {
        self.0 * rhs
    }
}

impl Add for RotationMatrix {
    type Output = RotationMatrix;

    fn add(self, rhs: RotationMatrix) -> Self::Output {
        RotationMatrix(self.0 + rhs.0)
    }
}

impl Neg for RotationMatrix {
    type Output = RotationMatrix;

    fn neg(self) -> Self::Output {
        RotationMatrix(-self.0)
    }
}
