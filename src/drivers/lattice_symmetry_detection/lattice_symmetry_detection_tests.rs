use nalgebra::Vector3;

use crate::auxiliary::geometry::{CellParameters, UnitCell};
use crate::drivers::lattice_symmetry_detection::{
    LatticeSymmetryDetectionDriver, LatticeSymmetryDetectionParams,
};
use crate::drivers::XtalsymDriver;
use crate::symmetry::point_group::Centering;

#[test]
fn test_lattice_symmetry_detection_driver_cubic() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = LatticeSymmetryDetectionParams::builder()
        .symmetry_precision(1e-5)
        .build()
        .unwrap();
    let cell =
        UnitCell::from_parameters(&CellParameters::new(10.0, 10.0, 10.0, 90.0, 90.0, 90.0))
            .unwrap();
    let mut driver = LatticeSymmetryDetectionDriver::builder()
        .parameters(&params)
        .unit_cell(&cell)
        .build()
        .unwrap();
    assert!(driver.result().is_err());

    driver.run().unwrap();
    let result = driver.result().unwrap();
    assert_eq!(result.rotations.len(), 48);
    assert_eq!(result.point_group.symbol, "m-3m");
    assert_eq!(result.centering, Centering::Primitive);
    assert!(result.basis.determinant() > 0);
}

#[test]
fn test_lattice_symmetry_detection_driver_monoclinic() {
    let params = LatticeSymmetryDetectionParams::default();
    let cell = UnitCell::from_parameters(&CellParameters::new(5.0, 6.0, 7.0, 90.0, 100.0, 90.0))
        .unwrap();
    let mut driver = LatticeSymmetryDetectionDriver::builder()
        .parameters(&params)
        .unit_cell(&cell)
        .build()
        .unwrap();
    driver.run().unwrap();
    let result = driver.result().unwrap();
    assert_eq!(result.point_group.symbol, "2/m");
    assert_eq!(
        Vector3::from(result.basis.rotation.0.column(1)),
        Vector3::new(0, 1, 0)
    );
}

#[test]
fn test_lattice_symmetry_detection_params_rejects_bad_threshold() {
    assert!(LatticeSymmetryDetectionParams::builder()
        .symmetry_precision(0.0)
        .build()
        .is_err());
}
