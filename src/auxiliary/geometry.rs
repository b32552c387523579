//! Unit-cell geometry: cell matrices, frames, periodic wrapping, replicas.

use anyhow::{self, ensure, Context};
use nalgebra::{Matrix3, Vector3};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;

// ==================
// Struct definitions
// ==================

/// The six lattice parameters of a cell, with the angles in radians.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CellParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl CellParameters {
    /// Constructs lattice parameters from lengths and angles in degrees, the
    /// convention of every structure-file format.
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha: alpha.to_radians(),
            beta: beta.to_radians(),
            gamma: gamma.to_radians(),
        }
    }

    /// Reads lengths and angles off a cell matrix of column lattice vectors.
    pub fn from_cell_matrix(cell: &Matrix3<f64>) -> Self {
        let c1 = cell.column(0);
        let c2 = cell.column(1);
        let c3 = cell.column(2);
        let (a, b, c) = (c1.norm(), c2.norm(), c3.norm());
        Self {
            a,
            b,
            c,
            alpha: (c2.dot(&c3) / (b * c)).acos(),
            beta: (c1.dot(&c3) / (a * c)).acos(),
            gamma: (c1.dot(&c2) / (a * b)).acos(),
        }
    }

    /// Reads lengths and angles off a metric tensor.
    pub fn from_metric_tensor(metric: &Matrix3<f64>) -> Self {
        let a = metric[(0, 0)].sqrt();
        let b = metric[(1, 1)].sqrt();
        let c = metric[(2, 2)].sqrt();
        Self {
            a,
            b,
            c,
            alpha: (metric[(1, 2)] / (b * c)).acos(),
            beta: (metric[(0, 2)] / (a * c)).acos(),
            gamma: (metric[(0, 1)] / (a * b)).acos(),
        }
    }

    /// The cell matrix in the standard orientation: $`\mathbf{a}`$ along x,
    /// $`\mathbf{b}`$ in the xy plane.
    ///
    /// # Errors
    ///
    /// Errors if the parameters do not describe a realizable cell (the
    /// radicand of the third lattice vector is non-positive).
    pub fn cell_matrix(&self) -> Result<Matrix3<f64>, anyhow::Error> {
        let temp = (self.alpha.cos() - self.gamma.cos() * self.beta.cos()) / self.gamma.sin();
        let radicand = 1.0 - self.beta.cos() * self.beta.cos() - temp * temp;
        ensure!(
            radicand > 0.0,
            "The lattice parameters (a={}, b={}, c={}, alpha={}, beta={}, gamma={}) describe a degenerate cell.",
            self.a,
            self.b,
            self.c,
            self.alpha.to_degrees(),
            self.beta.to_degrees(),
            self.gamma.to_degrees(),
        );
        let v1 = Vector3::new(self.a, 0.0, 0.0);
        let v2 = Vector3::new(self.b * self.gamma.cos(), self.b * self.gamma.sin(), 0.0);
        let v3 = Vector3::new(
            self.c * self.beta.cos(),
            self.c * temp,
            self.c * radicand.sqrt(),
        );
        Ok(Matrix3::from_columns(&[v1, v2, v3]))
    }
}

/// A unit cell with an independent replica range per axis.
///
/// The cell matrix holds the lattice vectors $`\mathbf{a}, \mathbf{b},
/// \mathbf{c}`$ as columns. The full cell is the unit cell scaled by the
/// replica counts; it and its inverse are recomputed together whenever the
/// unit cell or the replica range changes, so the two can never disagree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitCell {
    unit_cell: Matrix3<f64>,
    inverse_unit_cell: Matrix3<f64>,
    full_cell: Matrix3<f64>,
    inverse_full_cell: Matrix3<f64>,
    minimum_replica: Vector3<i32>,
    maximum_replica: Vector3<i32>,
}

impl UnitCell {
    /// Builds a cell from lattice parameters.
    ///
    /// # Errors
    ///
    /// Errors for degenerate parameters, see [`CellParameters::cell_matrix`].
    pub fn from_parameters(parameters: &CellParameters) -> Result<Self, anyhow::Error> {
        Self::from_matrix(&parameters.cell_matrix()?)
    }

    /// Builds a cell from a matrix of column lattice vectors.
    ///
    /// # Errors
    ///
    /// Errors if the matrix is singular.
    pub fn from_matrix(unit_cell: &Matrix3<f64>) -> Result<Self, anyhow::Error> {
        let inverse_unit_cell = unit_cell
            .try_inverse()
            .context("The cell matrix is singular.")?;
        Ok(Self {
            unit_cell: *unit_cell,
            inverse_unit_cell,
            full_cell: *unit_cell,
            inverse_full_cell: inverse_unit_cell,
            minimum_replica: Vector3::zeros(),
            maximum_replica: Vector3::zeros(),
        })
    }

    /// The cell matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.unit_cell
    }

    /// The inverse cell matrix.
    pub fn inverse_matrix(&self) -> &Matrix3<f64> {
        &self.inverse_unit_cell
    }

    /// The full-cell matrix (unit cell scaled by the replica counts).
    pub fn full_cell_matrix(&self) -> &Matrix3<f64> {
        &self.full_cell
    }

    /// Replaces the replica range; the full cell and its inverse are
    /// recomputed in the same step.
    pub fn set_replica_range(&mut self, minimum: Vector3<i32>, maximum: Vector3<i32>) {
        self.minimum_replica = minimum;
        self.maximum_replica = maximum;
        let counts = self.number_of_replicas();
        let mut full_cell = self.unit_cell;
        for axis in 0..3 {
            full_cell
                .column_mut(axis)
                .scale_mut(f64::from(counts[axis]));
        }
        self.full_cell = full_cell;
        self.inverse_full_cell = full_cell
            .try_inverse()
            .expect("A non-singular cell scaled by positive counts stays non-singular.");
    }

    /// The replica counts per axis.
    pub fn number_of_replicas(&self) -> Vector3<i32> {
        self.maximum_replica - self.minimum_replica + Vector3::new(1, 1, 1)
    }

    /// The metric tensor $`\mathbf{G}^{\mathrm{T}} \mathbf{G}`$ of the cell
    /// matrix, encoding lengths and angles independent of orientation.
    pub fn metric_tensor(&self) -> Matrix3<f64> {
        self.unit_cell.transpose() * self.unit_cell
    }

    /// The signed cell volume $`\mathbf{a} \cdot (\mathbf{b} \times
    /// \mathbf{c})`$.
    pub fn volume(&self) -> f64 {
        let c1 = Vector3::from(self.unit_cell.column(0));
        let c2 = Vector3::from(self.unit_cell.column(1));
        let c3 = Vector3::from(self.unit_cell.column(2));
        c1.dot(&c2.cross(&c3))
    }

    /// The perpendicular widths of the cell: per axis, the volume divided by
    /// the area spanned by the other two lattice vectors.
    pub fn perpendicular_widths(&self) -> Vector3<f64> {
        let c1 = Vector3::from(self.unit_cell.column(0));
        let c2 = Vector3::from(self.unit_cell.column(1));
        let c3 = Vector3::from(self.unit_cell.column(2));
        let v1 = c1.cross(&c2);
        let v2 = c2.cross(&c3);
        let v3 = c3.cross(&c1);
        let volume = c1.dot(&v2);
        Vector3::new(volume / v2.norm(), volume / v3.norm(), volume / v1.norm())
    }

    /// The lattice parameters of the cell.
    pub fn parameters(&self) -> CellParameters {
        CellParameters::from_cell_matrix(&self.unit_cell)
    }

    /// Whether all three cell angles are right angles (within a milliradian).
    pub fn is_orthorhombic(&self) -> bool {
        let parameters = self.parameters();
        let half_pi = std::f64::consts::FRAC_PI_2;
        (parameters.alpha - half_pi).abs() < 0.001
            && (parameters.beta - half_pi).abs() < 0.001
            && (parameters.gamma - half_pi).abs() < 0.001
    }

    /// Converts fractional to Cartesian coordinates.
    pub fn to_cartesian(&self, s: &Vector3<f64>) -> Vector3<f64> {
        self.unit_cell * s
    }

    /// Converts Cartesian to fractional coordinates.
    pub fn to_fractional(&self, r: &Vector3<f64>) -> Vector3<f64> {
        self.inverse_unit_cell * r
    }

    /// Reduces a Cartesian displacement to its nearest periodic image with
    /// respect to the unit cell.
    pub fn apply_unit_cell_boundary_condition(&self, dr: &Vector3<f64>) -> Vector3<f64> {
        let s = (self.inverse_unit_cell * dr).map(|v| v - v.round());
        self.unit_cell * s
    }

    /// Reduces a Cartesian displacement to its nearest periodic image with
    /// respect to the full (replicated) cell.
    pub fn apply_full_cell_boundary_condition(&self, dr: &Vector3<f64>) -> Vector3<f64> {
        let s = (self.inverse_full_cell * dr).map(|v| v - v.round());
        self.full_cell * s
    }

    /// Converts Cartesian coordinates to fractional coordinates wrapped into
    /// $`[0, 1)`$ per axis.
    pub fn to_normalized_fractional(&self, r: &Vector3<f64>) -> Vector3<f64> {
        (self.inverse_unit_cell * r).map(|v| {
            let mut w = v - v.round();
            if w < 0.0 {
                w += 1.0;
            }
            if w > 1.0 {
                w -= 1.0;
            }
            w
        })
    }

    /// The number of cell replicas per axis needed to cover a real-space
    /// interaction cutoff: $`\lceil 2 r_{\mathrm{c}} / w_{\perp} \rceil`$
    /// per perpendicular width $`w_{\perp}`$.
    pub fn number_of_replicas_for_cutoff(&self, cutoff: f64) -> Vector3<i32> {
        self.perpendicular_widths().map(|width| {
            (2.0 * cutoff / (width + 1e-6))
                .ceil()
                .to_i32()
                .unwrap_or_else(|| panic!("Replica count for cutoff {cutoff} exceeds `i32`."))
        })
    }

    /// The axis-aligned bounding box enclosing the full replica range.
    pub fn enclosing_bounding_box(&self) -> (Vector3<f64>, Vector3<f64>) {
        let mut minimum = Vector3::repeat(f64::INFINITY);
        let mut maximum = Vector3::repeat(f64::NEG_INFINITY);
        for &i in &[self.minimum_replica.x, self.maximum_replica.x + 1] {
            for &j in &[self.minimum_replica.y, self.maximum_replica.y + 1] {
                for &k in &[self.minimum_replica.z, self.maximum_replica.z + 1] {
                    let corner =
                        self.unit_cell * Vector3::new(f64::from(i), f64::from(j), f64::from(k));
                    minimum = minimum.zip_map(&corner, f64::min);
                    maximum = maximum.zip_map(&corner, f64::max);
                }
            }
        }
        (minimum, maximum)
    }
}
