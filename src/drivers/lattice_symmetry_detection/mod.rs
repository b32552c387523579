//! Driver for lattice-symmetry detection and point-group classification.

use std::fmt;

use anyhow::{self, format_err};
use derive_builder::Builder;
use itertools::Itertools;
use log;
use serde::{Deserialize, Serialize};

use crate::auxiliary::geometry::UnitCell;
use crate::drivers::XtalsymDriver;
use crate::io::format::{log_subtitle, log_title, nice_bool, write_subtitle, XtalsymOutput};
use crate::symmetry::lattice_symmetry::{
    find_lattice_symmetry, PointSymmetrySet, DEFAULT_SYMMETRY_PRECISION,
};
use crate::symmetry::point_group::{Centering, PointGroup};
use crate::symmetry::transformation::TransformationMatrix;

#[cfg(test)]
#[path = "lattice_symmetry_detection_tests.rs"]
mod lattice_symmetry_detection_tests;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

/// A structure containing control parameters for lattice-symmetry detection.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct LatticeSymmetryDetectionParams {
    /// Threshold (in length units) for metric-tensor comparisons.
    #[builder(setter(custom), default = "DEFAULT_SYMMETRY_PRECISION")]
    pub symmetry_precision: f64,

    /// Boolean indicating if the located rotations are to be written to the
    /// output.
    #[builder(default = "false")]
    pub write_rotations: bool,
}

impl LatticeSymmetryDetectionParams {
    /// Returns a builder to construct a [`LatticeSymmetryDetectionParams`]
    /// structure.
    pub fn builder() -> LatticeSymmetryDetectionParamsBuilder {
        LatticeSymmetryDetectionParamsBuilder::default()
    }
}

impl Default for LatticeSymmetryDetectionParams {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("The default parameters are buildable.")
    }
}

impl LatticeSymmetryDetectionParamsBuilder {
    pub fn symmetry_precision(&mut self, thresh: f64) -> &mut Self {
        if thresh >= f64::EPSILON {
            self.symmetry_precision = Some(thresh);
        } else {
            log::error!(
                "Symmetry precision {} is invalid. It must be at least the machine epsilon.",
                thresh
            );
            self.symmetry_precision = None;
        }
        self
    }
}

impl fmt::Display for LatticeSymmetryDetectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Metric threshold: {:.3e}", self.symmetry_precision)?;
        writeln!(
            f,
            "Write located rotations: {}",
            nice_bool(self.write_rotations)
        )?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure containing the result of a lattice-symmetry detection.
#[derive(Clone, Debug)]
pub struct LatticeSymmetryDetectionResult {
    /// The rotations leaving the lattice metric invariant, in the basis of
    /// the supplied cell.
    pub rotations: PointSymmetrySet,

    /// The point group matched by the rotation set.
    pub point_group: &'static PointGroup,

    /// The canonical basis constructed from the rotation axes.
    pub basis: TransformationMatrix,

    /// The centering of the canonical basis, after correction.
    pub centering: Centering,

    /// The correction applied to normalize the centering choice.
    pub correction: TransformationMatrix,
}

impl fmt::Display for LatticeSymmetryDetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, "Lattice symmetry")?;
        writeln!(f)?;
        writeln!(f, "Rotations found: {}", self.rotations.len())?;
        writeln!(
            f,
            "Point group: {} ({}), number {}",
            self.point_group.symbol, self.point_group.schoenflies, self.point_group.number
        )?;
        writeln!(f, "Holohedry: {}", self.point_group.holohedry)?;
        writeln!(f, "Laue class: {}", self.point_group.laue)?;
        writeln!(
            f,
            "Centrosymmetric: {}",
            nice_bool(self.point_group.centrosymmetric)
        )?;
        writeln!(
            f,
            "Enantiomorphic: {}",
            nice_bool(self.point_group.enantiomorphic)
        )?;
        writeln!(f, "Canonical basis: {}", self.basis)?;
        writeln!(f, "Centering: {}", self.centering)?;
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for lattice-symmetry detection: metric-invariant rotation
/// search, point-group classification, canonical basis construction and
/// centering correction.
#[derive(Clone, Builder)]
pub struct LatticeSymmetryDetectionDriver<'a> {
    /// The control parameters for lattice-symmetry detection.
    parameters: &'a LatticeSymmetryDetectionParams,

    /// The (reduced) unit cell to analyse.
    unit_cell: &'a UnitCell,

    /// The result of the detection.
    #[builder(setter(skip), default = "None")]
    result: Option<LatticeSymmetryDetectionResult>,
}

impl<'a> LatticeSymmetryDetectionDriver<'a> {
    /// Returns a builder to construct a [`LatticeSymmetryDetectionDriver`]
    /// structure.
    pub fn builder() -> LatticeSymmetryDetectionDriverBuilder<'a> {
        LatticeSymmetryDetectionDriverBuilder::default()
    }

    fn detect_lattice_symmetry(&mut self) -> Result<(), anyhow::Error> {
        log_title("Lattice-Symmetry Detection");
        log::info!(target: "xtalsym-output", "");
        let params = self.parameters;
        params.log_output_display();

        let parameters = self.unit_cell.parameters();
        log::info!(
            target: "xtalsym-output",
            "Cell lengths: {:.6}, {:.6}, {:.6}",
            parameters.a, parameters.b, parameters.c
        );
        log::info!(
            target: "xtalsym-output",
            "Cell angles: {:.4}, {:.4}, {:.4}",
            parameters.alpha.to_degrees(),
            parameters.beta.to_degrees(),
            parameters.gamma.to_degrees()
        );
        log::info!(target: "xtalsym-output", "");

        log_subtitle("Metric-invariant rotation search");
        log::info!(target: "xtalsym-output", "");
        let rotations =
            find_lattice_symmetry(self.unit_cell.matrix(), params.symmetry_precision);
        log::info!(
            target: "xtalsym-output",
            "{} metric-preserving rotations found.",
            rotations.len()
        );
        if params.write_rotations {
            log::info!(
                target: "xtalsym-output",
                "{}",
                rotations.iter().map(|rotation| rotation.to_string()).join("\n")
            );
        }
        log::info!(target: "xtalsym-output", "");

        let rotation_list = rotations.to_vec();
        let point_group = PointGroup::from_rotations(rotation_list.iter())?;
        let basis = point_group.construct_axes(&rotation_list)?;
        let centering = point_group.compute_centering(&basis)?;
        let (correction, centering) = point_group.basis_correction(&basis, centering)?;
        let corrected_basis = correction * basis;

        let result = LatticeSymmetryDetectionResult {
            rotations,
            point_group,
            basis: corrected_basis,
            centering,
            correction,
        };
        result.log_output_display();

        self.result = Some(result);
        Ok(())
    }
}

impl<'a> XtalsymDriver for LatticeSymmetryDetectionDriver<'a> {
    type Params = LatticeSymmetryDetectionParams;
    type Outcome = LatticeSymmetryDetectionResult;

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.detect_lattice_symmetry()
    }

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No lattice-symmetry detection results found."))
    }
}
