//! The fixed, finite catalogs used by every exhaustive axis search.
//!
//! These tables are data, not logic: their membership (bounded Miller-index
//! magnitude) is a deliberate finite search space and they are transcribed
//! verbatim rather than regenerated. They are initialized once at first use
//! and never mutated.

use lazy_static::lazy_static;
use nalgebra::Vector3;

use crate::symmetry::rotation_matrix::RotationMatrix;

#[cfg(test)]
#[path = "axis_catalog_tests.rs"]
mod axis_catalog_tests;

/// A pre-classified two-fold lattice operation together with its invariant
/// axis in direct space and in reciprocal space.
///
/// The 81 entries are the only two-fold operations possible for reduced
/// cells: matrices with elements in $`\{-1, 0, 1\}`$ and determinant one
/// whose powers stay within that element range.
#[derive(Clone, Copy, Debug)]
pub struct TwoFoldOperation {
    /// The two-fold rotation matrix.
    pub rotation: RotationMatrix,

    /// The invariant axis in direct space.
    pub axis_direct: Vector3<i32>,

    /// The invariant axis in reciprocal space.
    pub axis_reciprocal: Vector3<i32>,
}

lazy_static! {
    /// All possible rotation axes written in terms of integers.
    ///
    /// Convention: $`e_3`$ is positive; if $`e_3 = 0`$, then $`e_2`$ is
    /// positive; if $`e_3 = e_2 = 0`$, then $`e_1`$ is chosen as positive.
    pub static ref ROTATION_AXES: [Vector3<i32>; 73] = [
        Vector3::new(1, 0, 0),
        Vector3::new(0, 1, 0),
        Vector3::new(0, 0, 1),
        Vector3::new(0, 1, 1),
        Vector3::new(1, 0, 1),
        Vector3::new(1, 1, 0),
        Vector3::new(0, -1, 1),
        Vector3::new(-1, 0, 1),
        Vector3::new(-1, 1, 0),
        Vector3::new(1, 1, 1),  // 10
        Vector3::new(-1, 1, 1),
        Vector3::new(1, -1, 1),
        Vector3::new(-1, -1, 1),
        Vector3::new(0, 1, 2),
        Vector3::new(2, 0, 1),
        Vector3::new(1, 2, 0),
        Vector3::new(0, 2, 1),
        Vector3::new(1, 0, 2),
        Vector3::new(2, 1, 0),
        Vector3::new(0, -1, 2),  // 20
        Vector3::new(-2, 0, 1),
        Vector3::new(-1, 2, 0),
        Vector3::new(0, -2, 1),
        Vector3::new(-1, 0, 2),
        Vector3::new(-2, 1, 0),
        Vector3::new(2, 1, 1),
        Vector3::new(1, 2, 1),
        Vector3::new(1, 1, 2),
        Vector3::new(-2, 1, 1),
        Vector3::new(1, -2, 1),  // 30
        Vector3::new(-1, -1, 2),
        Vector3::new(-2, -1, 1),
        Vector3::new(-1, 2, 1),
        Vector3::new(1, -1, 2),
        Vector3::new(2, -1, 1),
        Vector3::new(-1, -2, 1),
        Vector3::new(-1, 1, 2),
        Vector3::new(3, 1, 2),
        Vector3::new(2, 3, 1),
        Vector3::new(1, 2, 3),  // 40
        Vector3::new(3, 2, 1),
        Vector3::new(1, 3, 2),
        Vector3::new(2, 1, 3),
        Vector3::new(3, -1, 2),
        Vector3::new(-2, -3, 1),
        Vector3::new(-1, 2, 3),
        Vector3::new(3, -2, 1),
        Vector3::new(-1, -3, 2),
        Vector3::new(-2, 1, 3),
        Vector3::new(-3, 1, 2),  // 50
        Vector3::new(2, -3, 1),
        Vector3::new(-1, -2, 3),
        Vector3::new(-3, 2, 1),
        Vector3::new(1, -3, 2),
        Vector3::new(-2, -1, 3),
        Vector3::new(-3, -1, 2),
        Vector3::new(-2, 3, 1),
        Vector3::new(1, -2, 3),
        Vector3::new(-3, -2, 1),
        Vector3::new(-1, 3, 2),  // 60
        Vector3::new(2, -1, 3),
        Vector3::new(1, 1, 3),
        Vector3::new(-1, 1, 3),
        Vector3::new(1, -1, 3),
        Vector3::new(-1, -1, 3),
        Vector3::new(1, 3, 1),
        Vector3::new(-1, 3, 1),
        Vector3::new(-1, -3, 1),
        Vector3::new(1, -3, 1),
        Vector3::new(3, 1, 1),  // 70
        Vector3::new(-3, -1, 1),
        Vector3::new(3, -1, 1),
        Vector3::new(-3, 1, 1),
    ];

    /// The 26 small-index lattice directions whose ordered triples form the
    /// candidate matrices of the lattice-symmetry search.
    pub static ref LATTICE_AXES: [Vector3<i32>; 26] = [
        Vector3::new(1, 1, 1),
        Vector3::new(1, 1, 0),
        Vector3::new(1, 1, -1),
        Vector3::new(1, 0, 1),
        Vector3::new(1, 0, 0),
        Vector3::new(1, 0, -1),
        Vector3::new(1, -1, 1),
        Vector3::new(1, -1, 0),
        Vector3::new(1, -1, -1),
        Vector3::new(0, 1, 1),
        Vector3::new(0, 1, 0),
        Vector3::new(0, 1, -1),
        Vector3::new(0, 0, 1),
        Vector3::new(0, 0, -1),
        Vector3::new(0, -1, 1),
        Vector3::new(0, -1, 0),
        Vector3::new(0, -1, -1),
        Vector3::new(-1, 1, 1),
        Vector3::new(-1, 1, 0),
        Vector3::new(-1, 1, -1),
        Vector3::new(-1, 0, 1),
        Vector3::new(-1, 0, 0),
        Vector3::new(-1, 0, -1),
        Vector3::new(-1, -1, 1),
        Vector3::new(-1, -1, 0),
        Vector3::new(-1, -1, -1),
    ];

    /// The 81 two-fold symmetry operations possible for reduced cells, with
    /// their direct- and reciprocal-space axis directions.
    ///
    /// Any crystal lattice is centrosymmetric, so the acentric subgroup
    /// spanned by these operations determines the full holohedry once the
    /// inversion is adjoined.
    pub static ref TWO_FOLD_OPERATIONS: [TwoFoldOperation; 81] = [
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(-1, 0, 1), Vector3::new(-1, 1, 0)),
            axis_direct: Vector3::new(-1, 1, 1),
            axis_reciprocal: Vector3::new(0, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(-1, 1, -1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(1, -2, 1),
            axis_reciprocal: Vector3::new(0, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(-1, 1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-1, 2, 0),
            axis_reciprocal: Vector3::new(0, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(-1, 1, 1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-1, 2, 1),
            axis_reciprocal: Vector3::new(0, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(-1, 0, -1), Vector3::new(1, -1, 0)),
            axis_direct: Vector3::new(1, -1, 1),
            axis_reciprocal: Vector3::new(0, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(-1, -1, 1)),
            axis_direct: Vector3::new(-1, -1, 2),
            axis_reciprocal: Vector3::new(0, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(-1, 0, 1)),
            axis_direct: Vector3::new(-1, 0, 2),
            axis_reciprocal: Vector3::new(0, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(-1, 1, 1)),
            axis_direct: Vector3::new(-1, 1, 2),
            axis_reciprocal: Vector3::new(0, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, -1, 1), Vector3::new(0, 0, -1), Vector3::new(0, -1, 0)),
            axis_direct: Vector3::new(0, -1, 1),
            axis_reciprocal: Vector3::new(1, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, -1, -1), Vector3::new(0, 0, 1), Vector3::new(0, 1, 0)),
            axis_direct: Vector3::new(0, 1, 1),
            axis_reciprocal: Vector3::new(-1, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, -1, 0), Vector3::new(0, 1, 0), Vector3::new(0, -1, -1)),
            axis_direct: Vector3::new(0, 1, 0),
            axis_reciprocal: Vector3::new(1, -2, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, -1, 0), Vector3::new(0, 1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(0, 1, 0),
            axis_reciprocal: Vector3::new(-1, 2, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, -1, 0), Vector3::new(0, 1, 0), Vector3::new(0, 1, -1)),
            axis_direct: Vector3::new(0, 1, 0),
            axis_reciprocal: Vector3::new(-1, 2, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(0, -1, 1)),
            axis_direct: Vector3::new(0, -1, 2),
            axis_reciprocal: Vector3::new(0, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, -1), Vector3::new(0, -1, -1), Vector3::new(0, 0, 1)),
            axis_direct: Vector3::new(0, 0, 1),
            axis_reciprocal: Vector3::new(-1, -1, 2),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, -1), Vector3::new(0, -1, 0), Vector3::new(0, 0, 1)),
            axis_direct: Vector3::new(0, 0, 1),
            axis_reciprocal: Vector3::new(-1, 0, 2),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, -1), Vector3::new(0, -1, 1), Vector3::new(0, 0, 1)),
            axis_direct: Vector3::new(0, 0, 1),
            axis_reciprocal: Vector3::new(-1, 1, 2),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, -1), Vector3::new(0, 0, 1)),
            axis_direct: Vector3::new(0, 0, 1),
            axis_reciprocal: Vector3::new(0, -1, 2),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(0, 0, 1)),
            axis_direct: Vector3::new(0, 0, 1),
            axis_reciprocal: Vector3::new(0, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 1), Vector3::new(0, 0, 1)),
            axis_direct: Vector3::new(0, 0, 1),
            axis_reciprocal: Vector3::new(0, 1, 2),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 1), Vector3::new(0, -1, -1), Vector3::new(0, 0, 1)),
            axis_direct: Vector3::new(0, 0, 1),
            axis_reciprocal: Vector3::new(1, -1, 2),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 1), Vector3::new(0, -1, 0), Vector3::new(0, 0, 1)),
            axis_direct: Vector3::new(0, 0, 1),
            axis_reciprocal: Vector3::new(1, 0, 2),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 1), Vector3::new(0, -1, 1), Vector3::new(0, 0, 1)),
            axis_direct: Vector3::new(0, 0, 1),
            axis_reciprocal: Vector3::new(1, 1, 2),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(0, 1, 1)),
            axis_direct: Vector3::new(0, 1, 2),
            axis_reciprocal: Vector3::new(0, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, 0, -1), Vector3::new(0, -1, 0)),
            axis_direct: Vector3::new(0, -1, 1),
            axis_reciprocal: Vector3::new(0, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, 0, 1), Vector3::new(0, 1, 0)),
            axis_direct: Vector3::new(0, 1, 1),
            axis_reciprocal: Vector3::new(0, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, 1, 0), Vector3::new(0, -1, -1)),
            axis_direct: Vector3::new(0, 1, 0),
            axis_reciprocal: Vector3::new(0, -2, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, 1, -1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(0, -2, 1),
            axis_reciprocal: Vector3::new(0, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, 1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(0, 1, 0),
            axis_reciprocal: Vector3::new(0, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, 1, 1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(0, 2, 1),
            axis_reciprocal: Vector3::new(0, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, 1, 0), Vector3::new(0, 1, -1)),
            axis_direct: Vector3::new(0, 1, 0),
            axis_reciprocal: Vector3::new(0, 2, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 1, -1), Vector3::new(0, 0, -1), Vector3::new(0, -1, 0)),
            axis_direct: Vector3::new(0, -1, 1),
            axis_reciprocal: Vector3::new(-1, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 1, 1), Vector3::new(0, 0, 1), Vector3::new(0, 1, 0)),
            axis_direct: Vector3::new(0, 1, 1),
            axis_reciprocal: Vector3::new(1, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 1, 0), Vector3::new(0, 1, 0), Vector3::new(0, -1, -1)),
            axis_direct: Vector3::new(0, 1, 0),
            axis_reciprocal: Vector3::new(-1, -2, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 1, 0), Vector3::new(0, 1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(0, 1, 0),
            axis_reciprocal: Vector3::new(1, 2, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 1, 0), Vector3::new(0, 1, 0), Vector3::new(0, 1, -1)),
            axis_direct: Vector3::new(0, 1, 0),
            axis_reciprocal: Vector3::new(1, 2, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(1, -1, 1)),
            axis_direct: Vector3::new(1, -1, 2),
            axis_reciprocal: Vector3::new(0, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(1, 0, 1)),
            axis_direct: Vector3::new(1, 0, 2),
            axis_reciprocal: Vector3::new(0, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(1, 1, 1)),
            axis_direct: Vector3::new(1, 1, 2),
            axis_reciprocal: Vector3::new(0, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(1, 0, -1), Vector3::new(-1, -1, 0)),
            axis_direct: Vector3::new(-1, -1, 1),
            axis_reciprocal: Vector3::new(0, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(1, 1, -1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-1, -2, 1),
            axis_reciprocal: Vector3::new(0, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(1, 1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(1, 2, 0),
            axis_reciprocal: Vector3::new(0, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(1, 1, 1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(1, 2, 1),
            axis_reciprocal: Vector3::new(0, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(-1, 0, 0), Vector3::new(1, 0, 1), Vector3::new(1, 1, 0)),
            axis_direct: Vector3::new(1, 1, 1),
            axis_reciprocal: Vector3::new(0, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, -1, 0), Vector3::new(-1, 0, 0), Vector3::new(-1, 1, -1)),
            axis_direct: Vector3::new(-1, 1, 0),
            axis_reciprocal: Vector3::new(-1, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 0, -1), Vector3::new(-1, -1, 1), Vector3::new(-1, 0, 0)),
            axis_direct: Vector3::new(-1, 0, 1),
            axis_reciprocal: Vector3::new(-1, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, -1, -1), Vector3::new(-1, 0, 1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-1, 1, 1),
            axis_reciprocal: Vector3::new(-1, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, -1, 0), Vector3::new(-1, 0, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-1, 1, 0),
            axis_reciprocal: Vector3::new(-1, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, -1, 1), Vector3::new(-1, 0, -1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(1, -1, 1),
            axis_reciprocal: Vector3::new(-1, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, -1, 0), Vector3::new(-1, 0, 0), Vector3::new(1, -1, -1)),
            axis_direct: Vector3::new(-1, 1, 0),
            axis_reciprocal: Vector3::new(1, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 0, 1), Vector3::new(-1, -1, -1), Vector3::new(1, 0, 0)),
            axis_direct: Vector3::new(1, 0, 1),
            axis_reciprocal: Vector3::new(1, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, -1, -1), Vector3::new(0, -1, 0), Vector3::new(-1, 1, 0)),
            axis_direct: Vector3::new(-1, 1, 1),
            axis_reciprocal: Vector3::new(-1, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 0, -1), Vector3::new(0, -1, 0), Vector3::new(-1, 0, 0)),
            axis_direct: Vector3::new(-1, 0, 1),
            axis_reciprocal: Vector3::new(-1, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 1, -1), Vector3::new(0, -1, 0), Vector3::new(-1, -1, 0)),
            axis_direct: Vector3::new(-1, -1, 1),
            axis_reciprocal: Vector3::new(-1, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, -1, 1), Vector3::new(0, -1, 0), Vector3::new(1, -1, 0)),
            axis_direct: Vector3::new(1, -1, 1),
            axis_reciprocal: Vector3::new(1, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 0, 1), Vector3::new(0, -1, 0), Vector3::new(1, 0, 0)),
            axis_direct: Vector3::new(1, 0, 1),
            axis_reciprocal: Vector3::new(1, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 1, 1), Vector3::new(0, -1, 0), Vector3::new(1, 1, 0)),
            axis_direct: Vector3::new(1, 1, 1),
            axis_reciprocal: Vector3::new(1, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 0, -1), Vector3::new(1, -1, -1), Vector3::new(-1, 0, 0)),
            axis_direct: Vector3::new(-1, 0, 1),
            axis_reciprocal: Vector3::new(-1, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 1, 0), Vector3::new(1, 0, 0), Vector3::new(-1, -1, -1)),
            axis_direct: Vector3::new(1, 1, 0),
            axis_reciprocal: Vector3::new(-1, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 1, -1), Vector3::new(1, 0, -1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-1, -1, 1),
            axis_reciprocal: Vector3::new(1, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 1, 0), Vector3::new(1, 0, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(1, 1, 0),
            axis_reciprocal: Vector3::new(1, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 1, 1), Vector3::new(1, 0, 1), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(1, 1, 1),
            axis_reciprocal: Vector3::new(1, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 0, 1), Vector3::new(1, -1, 1), Vector3::new(1, 0, 0)),
            axis_direct: Vector3::new(1, 0, 1),
            axis_reciprocal: Vector3::new(1, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(0, 1, 0), Vector3::new(1, 0, 0), Vector3::new(1, 1, -1)),
            axis_direct: Vector3::new(1, 1, 0),
            axis_reciprocal: Vector3::new(1, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 0), Vector3::new(-1, -1, 0), Vector3::new(-1, 0, -1)),
            axis_direct: Vector3::new(1, 0, 0),
            axis_reciprocal: Vector3::new(-2, 1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 0), Vector3::new(-1, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(1, 0, 0),
            axis_reciprocal: Vector3::new(-2, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 0), Vector3::new(-1, -1, 0), Vector3::new(1, 0, -1)),
            axis_direct: Vector3::new(1, 0, 0),
            axis_reciprocal: Vector3::new(2, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(-1, 0, -1)),
            axis_direct: Vector3::new(1, 0, 0),
            axis_reciprocal: Vector3::new(-2, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, -1, -1), Vector3::new(0, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-2, 1, 1),
            axis_reciprocal: Vector3::new(1, 0, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, -1, 0), Vector3::new(0, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-2, 1, 0),
            axis_reciprocal: Vector3::new(1, 0, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, -1, 1), Vector3::new(0, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(2, -1, 1),
            axis_reciprocal: Vector3::new(1, 0, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, -1), Vector3::new(0, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-2, 0, 1),
            axis_reciprocal: Vector3::new(1, 0, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(1, 0, 0),
            axis_reciprocal: Vector3::new(1, 0, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 1), Vector3::new(0, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(2, 0, 1),
            axis_reciprocal: Vector3::new(1, 0, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 1, -1), Vector3::new(0, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(-2, -1, 1),
            axis_reciprocal: Vector3::new(1, 0, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 1, 0), Vector3::new(0, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(2, 1, 0),
            axis_reciprocal: Vector3::new(1, 0, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 1, 1), Vector3::new(0, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(2, 1, 1),
            axis_reciprocal: Vector3::new(1, 0, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 0), Vector3::new(0, -1, 0), Vector3::new(1, 0, -1)),
            axis_direct: Vector3::new(1, 0, 0),
            axis_reciprocal: Vector3::new(2, 0, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 0), Vector3::new(1, -1, 0), Vector3::new(-1, 0, -1)),
            axis_direct: Vector3::new(1, 0, 0),
            axis_reciprocal: Vector3::new(-2, -1, 1),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 0), Vector3::new(1, -1, 0), Vector3::new(0, 0, -1)),
            axis_direct: Vector3::new(1, 0, 0),
            axis_reciprocal: Vector3::new(2, 1, 0),
        },
        TwoFoldOperation {
            rotation: RotationMatrix::from_columns(Vector3::new(1, 0, 0), Vector3::new(1, -1, 0), Vector3::new(1, 0, -1)),
            axis_direct: Vector3::new(1, 0, 0),
            axis_reciprocal: Vector3::new(2, 1, 1),
        },
    ];
}

/// Returns the first catalog axis satisfying `predicate`. The scan order is
/// the fixed catalog order, so ties resolve deterministically.
pub fn find_axis<P>(predicate: P) -> Option<&'static Vector3<i32>>
where
    P: Fn(&Vector3<i32>) -> bool,
{
    ROTATION_AXES.iter().find(|axis| predicate(axis))
}

/// Returns every catalog axis satisfying `predicate`, in catalog order.
pub fn filter_axes<P>(predicate: P) -> Vec<Vector3<i32>>
where
    P: Fn(&Vector3<i32>) -> bool,
{
    ROTATION_AXES
        .iter()
        .filter(|axis| predicate(axis))
        .copied()
        .collect()
}

/// The position of `axis` in the catalog, used to rank competing axis
/// choices during basis construction.
pub fn axis_rank(axis: &Vector3<i32>) -> Option<usize> {
    ROTATION_AXES.iter().position(|a| a == axis)
}
