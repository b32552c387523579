//! Integer change-of-basis transformations with fractional translations.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Mul;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::symmetry::rotation_matrix::RotationMatrix;

#[cfg(test)]
#[path = "transformation_tests.rs"]
mod transformation_tests;

/// The denominator of all fractional translations: every translation of a
/// space-group setting is expressible in twenty-fourths.
pub const TRANSLATION_DENOMINATOR: i32 = 24;

/// An integer rotation paired with an integer translation in units of
/// 1/24th of a lattice vector, used for centering and basis changes and for
/// composing correction matrices onto a constructed basis.
///
/// Two transformations are equal when their rotations agree element-wise and
/// their translations agree modulo 24; hashing reduces accordingly.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TransformationMatrix {
    /// The integer rotation part.
    pub rotation: RotationMatrix,

    /// The translation part, in units of 1/24th.
    pub translation: Vector3<i32>,
}

impl TransformationMatrix {
    /// Constructs a pure rotation with zero translation.
    pub fn new(rotation: RotationMatrix) -> Self {
        Self {
            rotation,
            translation: Vector3::zeros(),
        }
    }

    /// Constructs a transformation from three column vectors and zero
    /// translation.
    pub fn from_columns(c1: Vector3<i32>, c2: Vector3<i32>, c3: Vector3<i32>) -> Self {
        Self::new(RotationMatrix::from_columns(c1, c2, c3))
    }

    /// The identity transformation.
    pub fn identity() -> Self {
        Self::new(RotationMatrix::identity())
    }

    /// The determinant of the rotation part.
    pub fn determinant(&self) -> i32 {
        self.rotation.determinant()
    }

    /// The translation reduced into $`[0, 24)`$ per component.
    pub fn reduced_translation(&self) -> Vector3<i32> {
        self.translation
            .map(|t| t.rem_euclid(TRANSLATION_DENOMINATOR))
    }

    /// The rotation part with real entries, for composition with cell
    /// matrices.
    pub fn to_real(&self) -> Matrix3<f64> {
        self.rotation.to_real()
    }

    /// Swaps two columns of the rotation part, negating neither; used to
    /// restore right-handedness of a constructed basis.
    pub fn with_swapped_columns(&self, i: usize, j: usize) -> Self {
        let mut m = self.rotation.0;
        m.swap_columns(i, j);
        Self {
            rotation: RotationMatrix(m),
            translation: self.translation,
        }
    }
}

impl PartialEq for TransformationMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.rotation == other.rotation
            && self.reduced_translation() == other.reduced_translation()
    }
}

impl Eq for TransformationMatrix {}

impl Hash for TransformationMatrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rotation.hash(state);
        self.reduced_translation().hash(state);
    }
}

impl Mul for TransformationMatrix {
    type Output = TransformationMatrix;

    /// Composes two transformations:
    /// $`(\mathbf{A} | \mathbf{a}) (\mathbf{B} | \mathbf{b}) =
    /// (\mathbf{A}\mathbf{B} | \mathbf{A}\mathbf{b} + \mathbf{a})`$.
    fn mul(self, rhs: TransformationMatrix) -> Self::Output {
        TransformationMatrix {
            rotation: self.rotation * rhs.rotation,
            translation: self.rotation * rhs.translation + self.translation,
        }
    }
}

impl fmt::Display for TransformationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + [{}/24, {}/24, {}/24]",
            self.rotation, self.translation.x, self.translation.y, self.translation.z
        )
    }
}
