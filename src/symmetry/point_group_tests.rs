use nalgebra::Vector3;

use crate::auxiliary::geometry::CellParameters;
use crate::symmetry::lattice_symmetry::find_lattice_symmetry;
use crate::symmetry::point_group::{
    generators, rot_2_010, rot_3_111, Centering, Holohedry, Laue, OccurrenceTable, PointGroup,
    POINT_GROUP_DATA,
};
use crate::symmetry::rotation_matrix::{RotationMatrix, RotationType};
use crate::symmetry::transformation::TransformationMatrix;

fn lattice_rotations(
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
) -> Vec<RotationMatrix> {
    let cell = CellParameters::new(a, b, c, alpha, beta, gamma)
        .cell_matrix()
        .unwrap();
    find_lattice_symmetry(&cell, 1e-4).to_vec()
}

#[test]
fn test_point_group_reference_table() {
    assert_eq!(POINT_GROUP_DATA.len(), 33);
    for (index, point_group) in POINT_GROUP_DATA.iter().enumerate() {
        assert_eq!(point_group.number, index);
    }
    // every record carries exactly one identity except the "no match"
    // sentinel
    for point_group in &POINT_GROUP_DATA[1..] {
        assert_eq!(point_group.table.count(RotationType::Identity), 1);
        assert_eq!(
            point_group.centrosymmetric,
            point_group.table.count(RotationType::Inversion) == 1
        );
    }
    assert_eq!(PointGroup::from_number(5).unwrap().symbol, "2/m");
    assert_eq!(PointGroup::from_number(32).unwrap().schoenflies, "Oh");
    assert!(PointGroup::from_number(0).is_none());
    assert!(PointGroup::from_number(33).is_none());
}

#[test]
fn test_occurrence_table_from_rotations() {
    let rotations = [
        RotationMatrix::identity(),
        RotationMatrix::inversion(),
        rot_2_010(),
        -rot_2_010(),
    ];
    let table = OccurrenceTable::from_rotations(rotations.iter()).unwrap();
    assert_eq!(table, OccurrenceTable::new(0, 0, 0, 1, 1, 1, 1, 0, 0, 0));
}

#[test]
fn test_classify_identity_only() {
    let rotations = [RotationMatrix::identity()];
    let point_group = PointGroup::from_rotations(rotations.iter()).unwrap();
    assert_eq!(point_group.number, 1);
    assert_eq!(point_group.symbol, "1");
}

#[test]
fn test_classify_monoclinic_two_fold() {
    // the two-fold alone gives point group 2; the full set gives 2/m
    let chiral = [RotationMatrix::identity(), rot_2_010()];
    assert_eq!(PointGroup::from_rotations(chiral.iter()).unwrap().symbol, "2");

    let full = [
        RotationMatrix::identity(),
        RotationMatrix::inversion(),
        rot_2_010(),
        -rot_2_010(),
    ];
    let point_group = PointGroup::from_rotations(full.iter()).unwrap();
    assert_eq!(point_group.symbol, "2/m");
    assert_eq!(point_group.laue, Laue::Laue2M);
    assert_eq!(point_group.holohedry, Holohedry::Monoclinic);
    assert!(point_group.centrosymmetric);
}

#[test]
fn test_classify_lattice_point_groups() {
    let cases = [
        ((10.0, 10.0, 10.0, 90.0, 90.0, 90.0), "m-3m"),
        ((4.0, 4.0, 6.0, 90.0, 90.0, 90.0), "4/mmm"),
        ((4.0, 5.0, 6.0, 90.0, 90.0, 90.0), "mmm"),
        ((4.0, 4.0, 6.0, 90.0, 90.0, 120.0), "6/mmm"),
        ((5.0, 6.0, 7.0, 90.0, 100.0, 90.0), "2/m"),
        ((5.0, 6.0, 7.0, 80.0, 85.0, 95.0), "-1"),
    ];
    for ((a, b, c, alpha, beta, gamma), symbol) in cases {
        let rotations = lattice_rotations(a, b, c, alpha, beta, gamma);
        let point_group = PointGroup::from_rotations(rotations.iter()).unwrap();
        assert_eq!(point_group.symbol, symbol);
        assert!(point_group.centrosymmetric);
    }
}

#[test]
fn test_classify_no_match_is_an_error() {
    // a two-fold without the identity cannot be a point group
    let rotations = [rot_2_010()];
    assert!(PointGroup::from_rotations(rotations.iter()).is_err());
}

#[test]
fn test_classify_is_basis_independent() {
    let rotations = lattice_rotations(10.0, 10.0, 10.0, 90.0, 90.0, 90.0);
    let reference = PointGroup::from_rotations(rotations.iter()).unwrap();

    let transformation = RotationMatrix::new(1, 1, 0, 0, 1, 0, 0, 0, 1);
    let inverse = transformation.inverse().unwrap();
    let conjugated: Vec<RotationMatrix> = rotations
        .iter()
        .map(|rotation| inverse * *rotation * transformation)
        .collect();
    let conjugated_point_group = PointGroup::from_rotations(conjugated.iter()).unwrap();
    assert_eq!(conjugated_point_group.number, reference.number);
}

#[test]
fn test_construct_axes_triclinic() {
    let point_group = PointGroup::from_number(2).unwrap();
    let basis = point_group
        .construct_axes(&[RotationMatrix::identity(), RotationMatrix::inversion()])
        .unwrap();
    assert_eq!(basis, TransformationMatrix::identity());
}

#[test]
fn test_construct_axes_monoclinic() {
    let rotations = lattice_rotations(5.0, 6.0, 7.0, 90.0, 100.0, 90.0);
    let point_group = PointGroup::from_rotations(rotations.iter()).unwrap();
    let basis = point_group.construct_axes(&rotations).unwrap();
    assert!(basis.determinant() > 0);
    // the unique two-fold axis is the middle basis vector
    assert_eq!(
        Vector3::from(basis.rotation.0.column(1)),
        Vector3::new(0, 1, 0)
    );
    assert_eq!(
        point_group.compute_centering(&basis).unwrap(),
        Centering::Primitive
    );
}

#[test]
fn test_construct_axes_higher_symmetry() {
    for parameters in [
        (10.0, 10.0, 10.0, 90.0, 90.0, 90.0),
        (4.0, 4.0, 6.0, 90.0, 90.0, 90.0),
        (4.0, 5.0, 6.0, 90.0, 90.0, 90.0),
        (4.0, 4.0, 6.0, 90.0, 90.0, 120.0),
    ] {
        let (a, b, c, alpha, beta, gamma) = parameters;
        let rotations = lattice_rotations(a, b, c, alpha, beta, gamma);
        let point_group = PointGroup::from_rotations(rotations.iter()).unwrap();
        let basis = point_group.construct_axes(&rotations).unwrap();
        assert!(basis.determinant() > 0, "Basis is not right-handed.");
        assert!(basis.determinant().abs() < 4);
        let centering = point_group.compute_centering(&basis).unwrap();
        let (correction, corrected_centering) =
            point_group.basis_correction(&basis, centering).unwrap();
        assert_eq!(correction.determinant().abs(), 1);
        // primitive lattices stay primitive
        if basis.determinant().abs() == 1 {
            assert_eq!(corrected_centering, Centering::Primitive);
        }
    }
}

#[test]
fn test_compute_centering_patterns() {
    let point_group = PointGroup::from_number(5).unwrap();

    let primitive = TransformationMatrix::identity();
    assert_eq!(
        point_group.compute_centering(&primitive).unwrap(),
        Centering::Primitive
    );

    // a column equal to a unit vector along a marks an A-face choice
    let a_face = TransformationMatrix::from_columns(
        Vector3::new(0, 1, 1),
        Vector3::new(0, -1, 1),
        Vector3::new(1, 0, 0),
    );
    assert_eq!(a_face.determinant().abs(), 2);
    assert_eq!(
        point_group.compute_centering(&a_face).unwrap(),
        Centering::AFace
    );

    let rhombohedral = TransformationMatrix::from_columns(
        Vector3::new(1, -1, 0),
        Vector3::new(0, 1, -1),
        Vector3::new(1, 1, 1),
    );
    assert_eq!(rhombohedral.determinant(), 3);
    assert_eq!(
        point_group.compute_centering(&rhombohedral).unwrap(),
        Centering::Rhombohedral
    );
}

#[test]
fn test_basis_correction_monoclinic_a_to_c() {
    let point_group = PointGroup::from_number(5).unwrap();
    let a_face = TransformationMatrix::from_columns(
        Vector3::new(0, 1, 1),
        Vector3::new(0, -1, 1),
        Vector3::new(1, 0, 0),
    );
    let centering = point_group.compute_centering(&a_face).unwrap();
    let (correction, corrected) = point_group.basis_correction(&a_face, centering).unwrap();
    assert_eq!(corrected, Centering::CFace);
    assert_eq!(correction.determinant(), 1);
    assert_ne!(correction, TransformationMatrix::identity());
}

#[test]
fn test_basis_correction_rhombohedral_settings() {
    let point_group = PointGroup::from_number(17).unwrap();

    // obverse setting: no correction
    let obverse = TransformationMatrix::from_columns(
        Vector3::new(1, -1, 0),
        Vector3::new(0, 1, -1),
        Vector3::new(1, 1, 1),
    );
    let (correction, _) = point_group
        .basis_correction(&obverse, Centering::Rhombohedral)
        .unwrap();
    assert_eq!(correction, TransformationMatrix::identity());

    // reverse setting: corrected to obverse
    let reverse = TransformationMatrix::from_columns(
        Vector3::new(-1, 1, 0),
        Vector3::new(0, -1, 1),
        Vector3::new(1, 1, 1),
    );
    let (correction, _) = point_group
        .basis_correction(&reverse, Centering::Rhombohedral)
        .unwrap();
    assert_ne!(correction, TransformationMatrix::identity());
}

#[test]
fn test_generators_table() {
    let (required, optional) = generators(Holohedry::Cubic).unwrap();
    assert_eq!(required.len(), 2);
    assert_eq!(optional, &[rot_3_111()]);
    for rotation in required.iter().chain(optional) {
        assert_eq!(rotation.determinant(), 1);
    }
    assert!(generators(Holohedry::None).is_none());
}
