use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::symmetry::point_group::{
    rot_2_001, rot_2_010, rot_3_001, rot_3_111, rot_4_001, rot_6_001,
};
use crate::symmetry::rotation_matrix::{RotationMatrix, RotationType};

#[test]
fn test_rotation_matrix_type_classification() {
    assert_eq!(
        RotationMatrix::identity().rotation_type().unwrap(),
        RotationType::Identity
    );
    assert_eq!(
        RotationMatrix::inversion().rotation_type().unwrap(),
        RotationType::Inversion
    );
    assert_eq!(rot_2_001().rotation_type().unwrap(), RotationType::TwoFold);
    assert_eq!(
        rot_3_001().rotation_type().unwrap(),
        RotationType::ThreeFold
    );
    assert_eq!(rot_4_001().rotation_type().unwrap(), RotationType::FourFold);
    assert_eq!(rot_6_001().rotation_type().unwrap(), RotationType::SixFold);
    assert_eq!(
        (-rot_2_001()).rotation_type().unwrap(),
        RotationType::ImproperTwoFold
    );
    assert_eq!(
        (-rot_3_001()).rotation_type().unwrap(),
        RotationType::ImproperThreeFold
    );
    assert_eq!(
        (-rot_4_001()).rotation_type().unwrap(),
        RotationType::ImproperFourFold
    );
    assert_eq!(
        (-rot_6_001()).rotation_type().unwrap(),
        RotationType::ImproperSixFold
    );
}

#[test]
fn test_rotation_matrix_type_invalid() {
    // determinant 0 and determinant 2 matrices are not rotations
    let singular = RotationMatrix::new(1, 0, 0, 0, 1, 0, 0, 0, 0);
    assert!(singular.rotation_type().is_err());
    let doubled = RotationMatrix::new(2, 0, 0, 0, 1, 0, 0, 0, 1);
    assert!(doubled.rotation_type().is_err());
}

#[test]
fn test_rotation_matrix_order_rule() {
    assert_eq!(RotationType::Identity.order(), 1);
    assert_eq!(RotationType::Inversion.order(), 2);
    assert_eq!(RotationType::TwoFold.order(), 2);
    assert_eq!(RotationType::ThreeFold.order(), 3);
    assert_eq!(RotationType::FourFold.order(), 4);
    assert_eq!(RotationType::SixFold.order(), 6);
    assert_eq!(RotationType::ImproperTwoFold.order(), 2);
    assert_eq!(RotationType::ImproperThreeFold.order(), 6);
    assert_eq!(RotationType::ImproperFourFold.order(), 4);
    assert_eq!(RotationType::ImproperSixFold.order(), 6);
}

#[test]
fn test_rotation_matrix_proper_power_cycles() {
    for rotation in [
        rot_2_001(),
        rot_2_010(),
        rot_3_001(),
        rot_3_111(),
        rot_4_001(),
        rot_6_001(),
        -rot_2_001(),
        -rot_3_001(),
        -rot_4_001(),
        -rot_6_001(),
    ] {
        let order = rotation.order().unwrap();
        assert_eq!(
            rotation.proper().power(order),
            RotationMatrix::identity(),
            "{rotation} does not cycle after {order} applications."
        );
    }
}

#[test]
fn test_rotation_matrix_random_cycles() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..200 {
        let rotation = RotationMatrix::random(&mut rng, None);
        let det = rotation.determinant();
        assert!(det == 1 || det == -1);
        let order = rotation.order().unwrap();
        assert_eq!(rotation.proper().power(order), RotationMatrix::identity());
    }
}

#[test]
fn test_rotation_matrix_inverse() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let rotation = RotationMatrix::random(&mut rng, None);
        let inverse = rotation.inverse().unwrap();
        assert_eq!(rotation * inverse, RotationMatrix::identity());
        assert_eq!(inverse * rotation, RotationMatrix::identity());
    }
    let singular = RotationMatrix::new(1, 0, 0, 0, 1, 0, 0, 0, 0);
    assert!(singular.inverse().is_err());
}

#[test]
fn test_rotation_matrix_adjugate_identity() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..100 {
        let rotation = RotationMatrix::random(&mut rng, None);
        let det = rotation.determinant();
        assert_eq!(
            rotation * rotation.adjugate(),
            RotationMatrix::identity().scalar_mul(det)
        );
    }
}

#[test]
fn test_rotation_matrix_columns_round_trip() {
    let c1 = Vector3::new(1, -1, 0);
    let c2 = Vector3::new(0, 1, -1);
    let c3 = Vector3::new(1, 1, 1);
    let rotation = RotationMatrix::from_columns(c1, c2, c3);
    assert_eq!(Vector3::from(rotation.0.column(0)), c1);
    assert_eq!(Vector3::from(rotation.0.column(1)), c2);
    assert_eq!(Vector3::from(rotation.0.column(2)), c3);
}

#[test]
fn test_rotation_matrix_rotation_axis() {
    assert_eq!(
        rot_2_001().rotation_axis().unwrap(),
        Vector3::new(0, 0, 1)
    );
    assert_eq!(
        rot_4_001().rotation_axis().unwrap(),
        Vector3::new(0, 0, 1)
    );
    assert_eq!(
        rot_3_111().rotation_axis().unwrap(),
        Vector3::new(1, 1, 1)
    );
    assert_eq!(
        rot_2_010().rotation_axis().unwrap(),
        Vector3::new(0, 1, 0)
    );
    // improper rotations share the axis of their proper part
    assert_eq!(
        (-rot_4_001()).rotation_axis().unwrap(),
        Vector3::new(0, 0, 1)
    );
    // the identity and the inversion have no specific axis
    assert_eq!(
        RotationMatrix::identity().rotation_axis().unwrap(),
        Vector3::zeros()
    );
    assert_eq!(
        RotationMatrix::inversion().rotation_axis().unwrap(),
        Vector3::zeros()
    );
}

#[test]
fn test_rotation_matrix_orthogonal_to_axis() {
    let orthogonal = rot_2_001().orthogonal_to_axis(2);
    assert!(!orthogonal.is_empty());
    for axis in &orthogonal {
        assert_eq!(axis.z, 0, "{axis} is not orthogonal to the z axis.");
    }
    assert!(orthogonal.contains(&Vector3::new(1, 0, 0)));
    assert!(orthogonal.contains(&Vector3::new(0, 1, 0)));

    // the accumulated projector annihilates exactly the orthogonal plane
    let accumulated = rot_4_001().proper().accumulate().unwrap();
    for axis in rot_4_001().orthogonal_to_axis(4) {
        assert_eq!(accumulated * axis, Vector3::zeros());
    }
    let principal = rot_4_001().rotation_axis().unwrap();
    assert_eq!(accumulated * principal, principal.map(|v| v * 4));
}

#[test]
fn test_rotation_matrix_exact_div() {
    let matrix = RotationMatrix::new(2, 4, 6, 0, -2, 8, 10, 2, 4);
    assert_eq!(
        matrix.exact_div(2),
        RotationMatrix::new(1, 2, 3, 0, -1, 4, 5, 1, 2)
    );
}

#[test]
#[should_panic]
fn test_rotation_matrix_exact_div_remainder() {
    let matrix = RotationMatrix::new(2, 4, 6, 0, -2, 8, 10, 2, 3);
    let _ = matrix.exact_div(2);
}
