use nalgebra::Vector3;

use xtalsym::auxiliary::geometry::{CellParameters, UnitCell};
use xtalsym::spacegroup::asymmetric_unit;
use xtalsym::symmetry::lattice_symmetry::find_lattice_symmetry;
use xtalsym::symmetry::point_group::{Centering, Holohedry, Laue, PointGroup};
use xtalsym::symmetry::rotation_matrix::RotationType;

#[test]
fn test_cubic_cell_has_the_full_holohedral_point_group() {
    let cell = UnitCell::from_parameters(&CellParameters::new(
        10.0, 10.0, 10.0, 90.0, 90.0, 90.0,
    ))
    .unwrap();
    let rotations = find_lattice_symmetry(cell.matrix(), 1e-5);
    assert_eq!(rotations.len(), 48);

    let rotation_list = rotations.to_vec();
    let point_group = PointGroup::from_rotations(rotation_list.iter()).unwrap();
    assert_eq!(point_group.symbol, "m-3m");
    assert_eq!(point_group.holohedry, Holohedry::Cubic);
    assert_eq!(point_group.laue, Laue::LaueM3M);
    assert!(point_group.centrosymmetric);

    let basis = point_group.construct_axes(&rotation_list).unwrap();
    let centering = point_group.compute_centering(&basis).unwrap();
    assert_eq!(centering, Centering::Primitive);
}

#[test]
fn test_monoclinic_cell_classifies_as_two_over_m() {
    let cell =
        UnitCell::from_parameters(&CellParameters::new(5.0, 6.0, 7.0, 90.0, 100.0, 90.0))
            .unwrap();
    let rotations = find_lattice_symmetry(cell.matrix(), 1e-5);

    // the only proper rotations besides the identity are of order two
    for rotation in rotations.iter() {
        let rotation_type = rotation.rotation_type().unwrap();
        if rotation.determinant() == 1 && rotation_type != RotationType::Identity {
            assert_eq!(rotation_type, RotationType::TwoFold);
        }
    }

    let rotation_list = rotations.to_vec();
    let point_group = PointGroup::from_rotations(rotation_list.iter()).unwrap();
    assert_eq!(point_group.symbol, "2/m");
    assert_eq!(point_group.laue, Laue::Laue2M);
}

#[test]
fn test_p1_asymmetric_unit_contains_the_whole_cell() {
    let steps = 10;
    for ix in 0..=steps {
        for iy in 0..=steps {
            for iz in 0..=steps {
                let point = Vector3::new(
                    f64::from(ix) / f64::from(steps),
                    f64::from(iy) / f64::from(steps),
                    f64::from(iz) / f64::from(steps),
                );
                assert!(asymmetric_unit::contains(1, &point).unwrap());
            }
        }
    }
}

#[test]
fn test_fractional_cartesian_round_trip() {
    let cell =
        UnitCell::from_parameters(&CellParameters::new(6.5, 7.5, 9.0, 75.0, 88.0, 112.0))
            .unwrap();
    for point in [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.25, 0.5, 0.75),
        Vector3::new(-0.4, 1.3, 0.9),
    ] {
        let recovered = cell.to_fractional(&cell.to_cartesian(&point));
        assert!((recovered - point).norm() < 1e-10);
    }
}
