use std::collections::HashSet;

use nalgebra::Vector3;

use crate::symmetry::point_group::rot_4_001;
use crate::symmetry::rotation_matrix::RotationMatrix;
use crate::symmetry::transformation::{TransformationMatrix, TRANSLATION_DENOMINATOR};

#[test]
fn test_transformation_translation_reduced_modulo_24() {
    assert_eq!(TRANSLATION_DENOMINATOR, 24);
    let reference = TransformationMatrix {
        rotation: rot_4_001(),
        translation: Vector3::new(1, 12, 0),
    };
    let shifted = TransformationMatrix {
        rotation: rot_4_001(),
        translation: Vector3::new(25, -12, 48),
    };
    assert_eq!(reference, shifted);

    let mut set = HashSet::new();
    set.insert(reference);
    assert!(set.contains(&shifted));

    let different = TransformationMatrix {
        rotation: rot_4_001(),
        translation: Vector3::new(2, 12, 0),
    };
    assert_ne!(reference, different);
}

#[test]
fn test_transformation_composition() {
    let a = TransformationMatrix {
        rotation: rot_4_001(),
        translation: Vector3::new(0, 0, 12),
    };
    let b = TransformationMatrix {
        rotation: RotationMatrix::identity(),
        translation: Vector3::new(6, 0, 0),
    };
    let product = a * b;
    assert_eq!(product.rotation, rot_4_001());
    // the four-fold about c maps (6, 0, 0) to (0, 6, 0) before the shift
    assert_eq!(product.translation, Vector3::new(0, 6, 12));
}

#[test]
fn test_transformation_swapped_columns_determinant() {
    let basis = TransformationMatrix::from_columns(
        Vector3::new(1, 0, 0),
        Vector3::new(0, 1, 0),
        Vector3::new(0, 0, 1),
    );
    let swapped = basis.with_swapped_columns(0, 2);
    assert_eq!(basis.determinant(), 1);
    assert_eq!(swapped.determinant(), -1);
}
