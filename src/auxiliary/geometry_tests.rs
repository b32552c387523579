use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};
use proptest::prelude::*;

use crate::auxiliary::geometry::{CellParameters, UnitCell};

fn cubic(a: f64) -> UnitCell {
    UnitCell::from_parameters(&CellParameters::new(a, a, a, 90.0, 90.0, 90.0)).unwrap()
}

#[test]
fn test_cell_parameters_matrix_construction() {
    let parameters = CellParameters::new(5.0, 6.0, 7.0, 90.0, 100.0, 90.0);
    let cell = parameters.cell_matrix().unwrap();
    // a along x, b along y, c in the xz plane with an obtuse beta
    assert_relative_eq!(cell[(0, 0)], 5.0, epsilon = 1e-12);
    assert_relative_eq!(cell[(1, 1)], 6.0, epsilon = 1e-12);
    assert_relative_eq!(cell.column(2).norm(), 7.0, epsilon = 1e-12);
    assert!(cell[(0, 2)] < 0.0);

    let recovered = CellParameters::from_cell_matrix(&cell);
    assert_relative_eq!(recovered.a, 5.0, epsilon = 1e-10);
    assert_relative_eq!(recovered.b, 6.0, epsilon = 1e-10);
    assert_relative_eq!(recovered.c, 7.0, epsilon = 1e-10);
    assert_relative_eq!(recovered.beta.to_degrees(), 100.0, epsilon = 1e-10);
}

#[test]
fn test_cell_parameters_degenerate_cell() {
    // these angles cannot close a parallelepiped
    let degenerate = CellParameters::new(1.0, 1.0, 1.0, 170.0, 10.0, 10.0);
    assert!(degenerate.cell_matrix().is_err());
}

#[test]
fn test_cell_parameters_from_metric_tensor() {
    let cell = cubic(10.0);
    let parameters = CellParameters::from_metric_tensor(&cell.metric_tensor());
    assert_relative_eq!(parameters.a, 10.0, epsilon = 1e-10);
    assert_relative_eq!(parameters.gamma.to_degrees(), 90.0, epsilon = 1e-10);
}

#[test]
fn test_unit_cell_singular_matrix() {
    let singular = Matrix3::from_columns(&[
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ]);
    assert!(UnitCell::from_matrix(&singular).is_err());
}

#[test]
fn test_unit_cell_metric_volume_widths() {
    let cell =
        UnitCell::from_parameters(&CellParameters::new(4.0, 5.0, 6.0, 90.0, 90.0, 90.0)).unwrap();
    assert!(cell.is_orthorhombic());
    assert_relative_eq!(cell.volume(), 120.0, epsilon = 1e-9);
    let metric = cell.metric_tensor();
    assert_relative_eq!(metric[(0, 0)], 16.0, epsilon = 1e-9);
    assert_relative_eq!(metric[(1, 1)], 25.0, epsilon = 1e-9);
    assert_relative_eq!(metric[(2, 2)], 36.0, epsilon = 1e-9);
    assert_relative_eq!(metric[(0, 1)], 0.0, epsilon = 1e-9);

    // for a rectangular cell the perpendicular widths are the cell lengths
    let widths = cell.perpendicular_widths();
    assert_relative_eq!(widths.x, 4.0, epsilon = 1e-9);
    assert_relative_eq!(widths.y, 5.0, epsilon = 1e-9);
    assert_relative_eq!(widths.z, 6.0, epsilon = 1e-9);
}

#[test]
fn test_unit_cell_replica_count_for_cutoff() {
    let cell = cubic(10.0);
    assert_eq!(
        cell.number_of_replicas_for_cutoff(12.0),
        Vector3::new(3, 3, 3)
    );
    assert_eq!(
        cell.number_of_replicas_for_cutoff(5.0),
        Vector3::new(1, 1, 1)
    );
}

#[test]
fn test_unit_cell_boundary_condition() {
    let cell = cubic(10.0);
    let wrapped = cell.apply_unit_cell_boundary_condition(&Vector3::new(12.0, -7.0, 3.0));
    assert_relative_eq!(wrapped.x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(wrapped.y, 3.0, epsilon = 1e-9);
    assert_relative_eq!(wrapped.z, 3.0, epsilon = 1e-9);
}

#[test]
fn test_unit_cell_full_cell_invariant() {
    let mut cell = cubic(10.0);
    assert_eq!(cell.number_of_replicas(), Vector3::new(1, 1, 1));
    assert_relative_eq!(cell.full_cell_matrix()[(0, 0)], 10.0, epsilon = 1e-12);

    cell.set_replica_range(Vector3::new(0, 0, 0), Vector3::new(1, 1, 0));
    assert_eq!(cell.number_of_replicas(), Vector3::new(2, 2, 1));
    assert_relative_eq!(cell.full_cell_matrix()[(0, 0)], 20.0, epsilon = 1e-12);
    assert_relative_eq!(cell.full_cell_matrix()[(2, 2)], 10.0, epsilon = 1e-12);

    // the inverse tracks the full cell in the same update
    let wrapped = cell.apply_full_cell_boundary_condition(&Vector3::new(12.0, 0.0, 0.0));
    assert_relative_eq!(wrapped.x, -8.0, epsilon = 1e-9);

    let (minimum, maximum) = cell.enclosing_bounding_box();
    assert_relative_eq!(minimum.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(maximum.x, 20.0, epsilon = 1e-12);
    assert_relative_eq!(maximum.z, 10.0, epsilon = 1e-12);
}

#[test]
fn test_unit_cell_normalized_fractional() {
    let cell = cubic(10.0);
    let normalized = cell.to_normalized_fractional(&Vector3::new(-3.0, 27.0, 5.0));
    assert_relative_eq!(normalized.x, 0.7, epsilon = 1e-9);
    assert_relative_eq!(normalized.y, 0.7, epsilon = 1e-9);
    assert_relative_eq!(normalized.z, 0.5, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn test_unit_cell_fractional_cartesian_round_trip(
        x in -2.0f64..2.0,
        y in -2.0f64..2.0,
        z in -2.0f64..2.0,
    ) {
        let cell = UnitCell::from_parameters(
            &CellParameters::new(5.0, 6.0, 7.0, 80.0, 95.0, 103.0),
        ).unwrap();
        let fractional = Vector3::new(x, y, z);
        let recovered = cell.to_fractional(&cell.to_cartesian(&fractional));
        prop_assert!((recovered - fractional).norm() < 1e-10);
    }
}
