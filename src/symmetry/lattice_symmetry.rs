//! Search for the integer rotations that leave a lattice metric invariant.
//!
//! Determining the lattice symmetry is equivalent to determining the Bravais
//! type: the result of either search below is the holohedral point group of
//! the lattice, expressed in the basis of the supplied (reduced) cell.

use anyhow::{self, Context};
use indexmap::IndexSet;
use nalgebra::Matrix3;
use rayon::prelude::*;

use crate::symmetry::axis_catalog::{LATTICE_AXES, TWO_FOLD_OPERATIONS};
use crate::symmetry::rotation_matrix::RotationMatrix;

#[cfg(test)]
#[path = "lattice_symmetry_tests.rs"]
mod lattice_symmetry_tests;

/// The default precision (in length units) for metric-tensor comparisons.
pub const DEFAULT_SYMMETRY_PRECISION: f64 = 1e-4;

/// The default precision (in degrees) for the angle-based search.
pub const DEFAULT_ANGLE_PRECISION: f64 = 3.0;

// ==================
// Struct definitions
// ==================

/// A set of integer rotations forming (a subgroup of) a lattice point group.
/// Insertion order is preserved so that downstream axis construction is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSymmetrySet {
    rotations: IndexSet<RotationMatrix>,
}

impl PointSymmetrySet {
    /// Wraps a set of rotations.
    pub fn new(rotations: IndexSet<RotationMatrix>) -> Self {
        Self { rotations }
    }

    /// The number of rotations in the set.
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Whether the set contains `rotation`.
    pub fn contains(&self, rotation: &RotationMatrix) -> bool {
        self.rotations.contains(rotation)
    }

    /// Iterates over the rotations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RotationMatrix> {
        self.rotations.iter()
    }

    /// The rotations as a vector, in insertion order.
    pub fn to_vec(&self) -> Vec<RotationMatrix> {
        self.rotations.iter().copied().collect()
    }

    /// Inserts a rotation.
    pub fn insert(&mut self, rotation: RotationMatrix) -> bool {
        self.rotations.insert(rotation)
    }

    /// Closes the set under pairwise composition, iterating until no new
    /// product appears.
    pub fn close_under_composition(&mut self) {
        loop {
            let products: Vec<RotationMatrix> = self
                .rotations
                .iter()
                .flat_map(|a| self.rotations.iter().map(move |b| *a * *b))
                .collect();
            let before = self.rotations.len();
            self.rotations.extend(products);
            if self.rotations.len() == before {
                break;
            }
        }
    }

    /// Conjugates every rotation into another basis:
    /// $`\mathbf{M}' = \mathbf{T}^{-1} \mathbf{M} \mathbf{T}`$, for the
    /// integral unimodular change-of-basis matrix `transformation` (the
    /// identity when the caller performed no cell reduction).
    ///
    /// # Errors
    ///
    /// Errors if `transformation` is not unimodular.
    pub fn change_of_basis(
        &self,
        transformation: &RotationMatrix,
    ) -> Result<PointSymmetrySet, anyhow::Error> {
        let inverse = transformation
            .inverse()
            .context("The change-of-basis matrix must be unimodular.")?;
        Ok(Self::new(
            self.rotations
                .iter()
                .map(|rotation| inverse * *rotation * *transformation)
                .collect(),
        ))
    }
}

impl FromIterator<RotationMatrix> for PointSymmetrySet {
    fn from_iter<I: IntoIterator<Item = RotationMatrix>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ================
// Metric criterion
// ================

/// Whether a transformed metric tensor equals the original within
/// `symmetry_precision`: the three lengths must agree, and for each pair of
/// basis vectors the angular mismatch $`\Delta\theta`$ must satisfy
/// $`\sin^2(\Delta\theta) \cdot \bar{l}_j \bar{l}_k \le p^2`$ with
/// $`\bar{l}`$ the averaged lengths, so that the tolerance is expressed in
/// length units throughout.
fn is_identity_metric(
    metric_rotated: &Matrix3<f64>,
    metric_orig: &Matrix3<f64>,
    symmetry_precision: f64,
) -> bool {
    let length_orig = [
        metric_orig[(0, 0)].sqrt(),
        metric_orig[(1, 1)].sqrt(),
        metric_orig[(2, 2)].sqrt(),
    ];
    let length_rot = [
        metric_rotated[(0, 0)].sqrt(),
        metric_rotated[(1, 1)].sqrt(),
        metric_rotated[(2, 2)].sqrt(),
    ];

    for i in 0..3 {
        if (length_orig[i] - length_rot[i]).abs() > symmetry_precision {
            return false;
        }
    }

    // dtheta = arccos(c1) - arccos(c2) = arccos(c1 c2 + sqrt((1-c1^2)(1-c2^2)))
    // sin(dtheta) = sqrt(1 - x^2)
    for (j, k) in [(0, 1), (0, 2), (1, 2)] {
        let cos1 = metric_orig[(j, k)] / length_orig[j] / length_orig[k];
        let cos2 = metric_rotated[(j, k)] / length_rot[j] / length_rot[k];
        let x = cos1 * cos2 + (1.0 - cos1 * cos1).sqrt() * (1.0 - cos2 * cos2).sqrt();
        let sin_dtheta2 = 1.0 - x * x;
        let length_ave2 = (length_orig[j] + length_rot[j]) * (length_orig[k] + length_rot[k]);
        if sin_dtheta2 > 1e-12
            && sin_dtheta2 * length_ave2 * 0.25 > symmetry_precision * symmetry_precision
        {
            return false;
        }
    }

    true
}

// ========
// Searches
// ========

/// Finds the point symmetry of a lattice from its (pre-reduced) cell matrix
/// by metric-tensor comparison.
///
/// Every ordered triple of catalog directions forms a candidate matrix; the
/// unimodular candidates whose transformed metric tensor
/// $`(\mathbf{L}\mathbf{M})^{\mathrm{T}} (\mathbf{L}\mathbf{M})`$ matches the
/// metric tensor of $`\mathbf{L}`$ within `symmetry_precision` constitute
/// the lattice point group. No atomic positions are taken into account.
///
/// The enumeration is bounded ($`26^3`$ candidates) and order-independent,
/// so the outer loop runs data-parallel.
pub fn find_lattice_symmetry(
    reduced_cell: &Matrix3<f64>,
    symmetry_precision: f64,
) -> PointSymmetrySet {
    let metric_orig = reduced_cell.transpose() * reduced_cell;

    LATTICE_AXES
        .par_iter()
        .flat_map_iter(|first_axis| {
            LATTICE_AXES.iter().flat_map(move |second_axis| {
                LATTICE_AXES.iter().filter_map(move |third_axis| {
                    let axes = RotationMatrix::from_columns(*first_axis, *second_axis, *third_axis);
                    let det = axes.determinant();
                    if det != 1 && det != -1 {
                        return None;
                    }
                    let lattice = reduced_cell * axes.to_real();
                    let metric = lattice.transpose() * lattice;
                    is_identity_metric(&metric, &metric_orig, symmetry_precision).then_some(axes)
                })
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Finds the point symmetry of a lattice by matching the 81 tabulated
/// two-fold operations on their axis directions.
///
/// For each tabulated operation the cosine of the angle between its
/// direct-space axis mapped through the cell and its reciprocal-space axis
/// mapped through the inverse cell is compared against
/// $`\cos(\texttt{angle\_precision})`$; matches are seeded into the set, the
/// inversion is adjoined (any lattice is centrosymmetric), and the set is
/// closed under composition.
///
/// This is a documented alternative to [`find_lattice_symmetry`]: the
/// metric-tensor enumeration is exact given rational inputs and is the
/// primary algorithm. The closure step here iterates to a fixpoint rather
/// than over a fixed index range.
pub fn find_lattice_symmetry_by_angles(
    cell: &Matrix3<f64>,
    angle_precision: f64,
) -> Result<PointSymmetrySet, anyhow::Error> {
    let min_cos_delta = (angle_precision * std::f64::consts::PI / 180.0)
        .cos()
        .min(1.0 - f64::EPSILON);

    let inverse_cell = cell
        .try_inverse()
        .context("The cell matrix is singular.")?;

    let mut point_symmetries = PointSymmetrySet::default();
    for operation in TWO_FOLD_OPERATIONS.iter() {
        let t = cell * operation.axis_direct.map(f64::from);
        let tau = inverse_cell.transpose() * operation.axis_reciprocal.map(f64::from);

        let numerator = t.dot(&tau).abs();
        let denominator = (t.norm_squared() * tau.norm_squared()).sqrt();

        if numerator / denominator >= min_cos_delta {
            point_symmetries.insert(operation.rotation);
        }
    }

    point_symmetries.insert(RotationMatrix::inversion());
    point_symmetries.close_under_composition();

    Ok(point_symmetries)
}
