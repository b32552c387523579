use approx::assert_relative_eq;
use nalgebra::Vector3;

use crate::spacegroup::asymmetric_unit::{
    asymmetric_unit, contains, contains_with_tolerance, AxisInterval, ASYMMETRIC_UNIT_DATA,
    DEFAULT_TOLERANCE,
};

#[test]
fn test_axis_interval_residue_membership() {
    let half = AxisInterval::closed(0, 12);
    assert!(half.contains(0.3, 0.0));
    assert!(!half.contains(-0.3, 0.0));
    // 0.7 wraps to -0.3, outside [0, 1/2]
    assert!(!half.contains(0.7 - 1.0, 0.0));

    let full = AxisInterval::closed(0, 24);
    // every residue is inside the full interval
    assert!(full.contains(-0.3, 0.0));
    assert!(full.contains(0.49, 0.0));

    let centred = AxisInterval::closed(-6, 6);
    assert!(centred.contains(-0.2, 0.0));
    assert!(centred.contains(0.2, 0.0));
    assert!(!centred.contains(0.3, 0.0));

    // an open upper end excludes the boundary itself
    let open = AxisInterval::open(0, 12);
    assert!(open.contains(0.499, 0.0));
    assert!(!open.contains(0.5, 0.0));
    assert!(AxisInterval::closed(0, 12).contains(0.5, 0.0));
    assert_eq!(open.to_string(), "0<={}<1/2");
}

#[test]
fn test_asymmetric_unit_table_extent() {
    assert_eq!(ASYMMETRIC_UNIT_DATA.len(), 231);
    for number in 1..=230 {
        let unit = asymmetric_unit(number).unwrap();
        assert!(unit.x.lower < unit.x.upper);
        assert!(unit.y.lower < unit.y.upper);
        assert!(unit.z.lower < unit.z.upper);
    }
}

#[test]
fn test_asymmetric_unit_number_out_of_range() {
    assert!(asymmetric_unit(0).is_err());
    assert!(asymmetric_unit(231).is_err());
    assert!(contains(0, &Vector3::zeros()).is_err());
}

#[test]
fn test_asymmetric_unit_p1_contains_everything() {
    for &x in &[0.0, 0.1, 0.25, 0.5, 0.75, 0.99, 1.0] {
        for &y in &[0.0, 0.3, 0.6, 0.9] {
            for &z in &[0.0, 0.45, 0.8] {
                assert!(
                    contains(1, &Vector3::new(x, y, z)).unwrap(),
                    "({x}, {y}, {z}) must lie in the asymmetric unit of P 1."
                );
            }
        }
    }
}

#[test]
fn test_asymmetric_unit_every_group_has_an_interior_point() {
    // a coarse grid over each rule's bounding box must hit the unit even
    // with zero tolerance
    let steps = 48;
    for number in 1..=230 {
        let unit = asymmetric_unit(number).unwrap();
        let mut found = false;
        'grid: for ix in 0..=steps {
            for iy in 0..=steps {
                for iz in 0..=steps {
                    let point = Vector3::new(
                        interpolate(&unit.x, ix, steps),
                        interpolate(&unit.y, iy, steps),
                        interpolate(&unit.z, iz, steps),
                    );
                    if unit.contains(&point, 0.0) {
                        found = true;
                        break 'grid;
                    }
                }
            }
        }
        assert!(found, "The asymmetric unit of group {number} is empty.");
    }
}

fn interpolate(interval: &AxisInterval, step: usize, steps: usize) -> f64 {
    let lower = f64::from(interval.lower) / 24.0;
    let upper = f64::from(interval.upper) / 24.0;
    lower + (upper - lower) * (step as f64) / (steps as f64)
}

#[test]
fn test_asymmetric_unit_box_centroids_are_inside() {
    for number in 1..=230 {
        let unit = asymmetric_unit(number).unwrap();
        if unit.extra.is_some() {
            continue;
        }
        let centroid = Vector3::new(
            f64::from(unit.x.lower + unit.x.upper) / 48.0,
            f64::from(unit.y.lower + unit.y.upper) / 48.0,
            f64::from(unit.z.lower + unit.z.upper) / 48.0,
        );
        assert!(
            unit.contains(&centroid, 0.0),
            "The centroid of group {number} lies outside its own unit."
        );
    }
}

#[test]
fn test_asymmetric_unit_boundary_rejection() {
    // P -1 restricts x to [0, 1/2]: a point beyond the boundary by more
    // than the tolerance is outside
    assert!(contains(2, &Vector3::new(0.25, 0.3, 0.7)).unwrap());
    assert!(!contains(2, &Vector3::new(0.6, 0.3, 0.7)).unwrap());
    assert!(!contains_with_tolerance(2, &Vector3::new(0.52, 0.3, 0.7), 1e-4).unwrap());
    // within the default tolerance the boundary is soft
    assert!(contains(2, &Vector3::new(0.505, 0.3, 0.7)).unwrap());
}

#[test]
fn test_asymmetric_unit_wedge_constraints() {
    // P 4 m m restricts to the wedge x <= y
    assert!(contains(99, &Vector3::new(0.1, 0.3, 0.5)).unwrap());
    assert!(!contains(99, &Vector3::new(0.3, 0.1, 0.5)).unwrap());

    // P m -3 m restricts to 0 <= z <= y <= x <= 1/2
    assert!(contains(221, &Vector3::new(0.25, 0.2, 0.1)).unwrap());
    assert!(!contains(221, &Vector3::new(0.25, 0.2, 0.4)).unwrap());
}

#[test]
fn test_asymmetric_unit_periodic_wrap() {
    // coordinates differing by whole lattice vectors are equivalent
    assert_eq!(
        contains(2, &Vector3::new(0.25, 0.3, 0.7)).unwrap(),
        contains(2, &Vector3::new(1.25, -0.7, 2.7)).unwrap()
    );
    // boundaries symmetric around zero accept both sides of the origin
    assert!(contains(1, &Vector3::new(-0.1, 0.5, 0.5)).unwrap());
}

#[test]
fn test_asymmetric_unit_display() {
    assert_eq!(
        asymmetric_unit(1).unwrap().to_string(),
        "0<=x<=1; 0<=y<=1; 0<=z<=1"
    );
    assert_eq!(
        asymmetric_unit(2).unwrap().to_string(),
        "0<=x<=1/2; 0<=y<=1; 0<=z<=1"
    );
    // an extra inequality is marked but not expanded
    assert!(asymmetric_unit(99)
        .unwrap()
        .to_string()
        .starts_with("0<=x<=1/2; 0<=y<=1/2; 0<=z<=1"));
}

#[test]
fn test_asymmetric_unit_default_tolerance() {
    assert_relative_eq!(DEFAULT_TOLERANCE, 1e-2);
}
