use nalgebra::Matrix3;

use crate::auxiliary::geometry::CellParameters;
use crate::symmetry::lattice_symmetry::{
    find_lattice_symmetry, find_lattice_symmetry_by_angles, PointSymmetrySet,
    DEFAULT_ANGLE_PRECISION, DEFAULT_SYMMETRY_PRECISION,
};
use crate::symmetry::point_group::PointGroup;
use crate::symmetry::rotation_matrix::{RotationMatrix, RotationType};

fn cell(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Matrix3<f64> {
    CellParameters::new(a, b, c, alpha, beta, gamma)
        .cell_matrix()
        .unwrap()
}

#[test]
fn test_find_lattice_symmetry_cubic() {
    let rotations = find_lattice_symmetry(&cell(10.0, 10.0, 10.0, 90.0, 90.0, 90.0), 1e-4);
    assert_eq!(rotations.len(), 48);
    assert!(rotations.contains(&RotationMatrix::identity()));
    assert!(rotations.contains(&RotationMatrix::inversion()));
    for rotation in rotations.iter() {
        assert!(rotation.determinant().abs() == 1);
        assert!(rotation.rotation_type().is_ok());
    }
}

#[test]
fn test_find_lattice_symmetry_tetragonal() {
    let rotations = find_lattice_symmetry(&cell(4.0, 4.0, 6.0, 90.0, 90.0, 90.0), 1e-4);
    assert_eq!(rotations.len(), 16);
}

#[test]
fn test_find_lattice_symmetry_orthorhombic() {
    let rotations = find_lattice_symmetry(&cell(4.0, 5.0, 6.0, 90.0, 90.0, 90.0), 1e-4);
    assert_eq!(rotations.len(), 8);
}

#[test]
fn test_find_lattice_symmetry_hexagonal() {
    let rotations = find_lattice_symmetry(&cell(4.0, 4.0, 6.0, 90.0, 90.0, 120.0), 1e-4);
    assert_eq!(rotations.len(), 24);
    let six_folds = rotations
        .iter()
        .filter(|rotation| {
            rotation.rotation_type().unwrap() == RotationType::SixFold
        })
        .count();
    assert_eq!(six_folds, 2);
}

#[test]
fn test_find_lattice_symmetry_monoclinic() {
    let rotations =
        find_lattice_symmetry(&cell(5.0, 6.0, 7.0, 90.0, 100.0, 90.0), DEFAULT_SYMMETRY_PRECISION);
    assert_eq!(rotations.len(), 4);
    // besides the identity and the inversion, only the two-fold about b and
    // its mirror survive
    for rotation in rotations.iter() {
        assert!(matches!(
            rotation.rotation_type().unwrap(),
            RotationType::Identity
                | RotationType::Inversion
                | RotationType::TwoFold
                | RotationType::ImproperTwoFold
        ));
    }
}

#[test]
fn test_find_lattice_symmetry_triclinic() {
    let rotations = find_lattice_symmetry(&cell(5.0, 6.0, 7.0, 80.0, 85.0, 95.0), 1e-4);
    assert_eq!(rotations.len(), 2);
}

#[test]
fn test_find_lattice_symmetry_is_subgroup_of_holohedral_group() {
    // every result is a subgroup of the 48-element cubic holohedry in terms
    // of size, and is closed under composition
    for parameters in [
        (10.0, 10.0, 10.0, 90.0, 90.0, 90.0),
        (4.0, 4.0, 6.0, 90.0, 90.0, 90.0),
        (4.0, 4.0, 6.0, 90.0, 90.0, 120.0),
        (5.0, 6.0, 7.0, 90.0, 100.0, 90.0),
    ] {
        let (a, b, c, alpha, beta, gamma) = parameters;
        let rotations = find_lattice_symmetry(&cell(a, b, c, alpha, beta, gamma), 1e-4);
        assert!(rotations.len() <= 48);
        assert!(48 % rotations.len() == 0);
        for p in rotations.iter() {
            for q in rotations.iter() {
                assert!(
                    rotations.contains(&(*p * *q)),
                    "The rotation set is not closed under composition."
                );
            }
        }
    }
}

#[test]
fn test_find_lattice_symmetry_change_of_basis() {
    let rotations = find_lattice_symmetry(&cell(10.0, 10.0, 10.0, 90.0, 90.0, 90.0), 1e-4);

    // conjugation by the identity is the identity map
    let unchanged = rotations
        .change_of_basis(&RotationMatrix::identity())
        .unwrap();
    assert_eq!(unchanged, rotations);

    // conjugation by a unimodular matrix preserves size and rotation types
    let transformation = RotationMatrix::new(1, 1, 0, 0, 1, 0, 0, 0, 1);
    let conjugated = rotations.change_of_basis(&transformation).unwrap();
    assert_eq!(conjugated.len(), rotations.len());

    let singular = RotationMatrix::new(1, 0, 0, 0, 1, 0, 0, 0, 0);
    assert!(rotations.change_of_basis(&singular).is_err());
}

#[test]
fn test_find_lattice_symmetry_by_angles_cubic() {
    let rotations = find_lattice_symmetry_by_angles(
        &cell(10.0, 10.0, 10.0, 90.0, 90.0, 90.0),
        DEFAULT_ANGLE_PRECISION,
    )
    .unwrap();
    assert_eq!(rotations.len(), 48);
    assert_eq!(
        PointGroup::from_rotations(rotations.iter()).unwrap().symbol,
        "m-3m"
    );
}

#[test]
fn test_point_symmetry_set_closure() {
    let mut set: PointSymmetrySet = [crate::symmetry::point_group::rot_4_001()]
        .into_iter()
        .collect();
    set.close_under_composition();
    assert_eq!(set.len(), 4);
    assert!(set.contains(&RotationMatrix::identity()));
}
