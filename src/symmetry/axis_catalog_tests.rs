use itertools::Itertools;
use nalgebra::Vector3;

use crate::symmetry::axis_catalog::{
    axis_rank, filter_axes, find_axis, LATTICE_AXES, ROTATION_AXES, TWO_FOLD_OPERATIONS,
};
use crate::symmetry::rotation_matrix::RotationType;

#[test]
fn test_axis_catalog_membership() {
    assert_eq!(ROTATION_AXES.len(), 73);
    assert_eq!(ROTATION_AXES.iter().unique().count(), 73);
    assert!(ROTATION_AXES.iter().all(|axis| *axis != Vector3::zeros()));

    // sign convention: e3 positive; if e3 = 0 then e2 positive; if both are
    // zero then e1 positive
    for axis in ROTATION_AXES.iter() {
        if axis.z != 0 {
            assert!(axis.z > 0, "{axis} violates the sign convention.");
        } else if axis.y != 0 {
            assert!(axis.y > 0, "{axis} violates the sign convention.");
        } else {
            assert!(axis.x > 0, "{axis} violates the sign convention.");
        }
    }
}

#[test]
fn test_lattice_axes_membership() {
    assert_eq!(LATTICE_AXES.len(), 26);
    assert_eq!(LATTICE_AXES.iter().unique().count(), 26);
    assert!(LATTICE_AXES
        .iter()
        .all(|axis| axis.iter().all(|component| component.abs() <= 1)));
}

#[test]
fn test_two_fold_operations_invariants() {
    assert_eq!(TWO_FOLD_OPERATIONS.len(), 81);
    for operation in TWO_FOLD_OPERATIONS.iter() {
        assert_eq!(operation.rotation.determinant(), 1);
        assert_eq!(
            operation.rotation.rotation_type().unwrap(),
            RotationType::TwoFold
        );
        // the direct axis is fixed by the rotation, the reciprocal axis by
        // its transpose
        assert_eq!(
            operation.rotation * operation.axis_direct,
            operation.axis_direct
        );
        assert_eq!(
            operation.rotation.transpose() * operation.axis_reciprocal,
            operation.axis_reciprocal
        );
        // powers stay within elements {-1, 0, 1}
        assert!((operation.rotation * operation.rotation)
            .0
            .iter()
            .all(|element| element.abs() <= 1));
    }
}

#[test]
fn test_axis_scan_helpers() {
    let found = find_axis(|axis| *axis == Vector3::new(0, 0, 1)).unwrap();
    assert_eq!(*found, Vector3::new(0, 0, 1));
    assert!(find_axis(|axis| axis.x > 5).is_none());

    let with_zero_z = filter_axes(|axis| axis.z == 0);
    assert!(with_zero_z.contains(&Vector3::new(1, 0, 0)));
    assert!(with_zero_z.iter().all(|axis| axis.z == 0));

    assert_eq!(axis_rank(&Vector3::new(1, 0, 0)), Some(0));
    assert_eq!(axis_rank(&Vector3::new(0, 0, 1)), Some(2));
    assert_eq!(axis_rank(&Vector3::new(5, 5, 5)), None);
}
