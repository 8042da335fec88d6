use std::f64::consts::PI;

use approx::assert_abs_diff_eq;

use sightline::angles::{emission_angle, illuminator_position, phase_angle, resolution};
use sightline::constants::RADEG;
use sightline::coordinates::{CartesianPoint, CartesianVector, ImagePoint};
use sightline::sensor::Sensor;
use sightline::sensor_model::SensorModel;
use sightline::shape_model::ShapeModel;
use sightline::sightline_errors::SightlineError;
use sightline::spherical::{compute_ra_dec, lat2rect, rect2lat};

#[test]
fn test_celestial_queries_through_the_facade() {
    let sensor = Sensor::new("integration", "csm").unwrap();

    // Alpha Centauri in heliocentric-xyz parsecs; truth values from SIMBAD.
    let direction = CartesianVector::new(-0.495304, -0.414169, -1.15686);
    assert_abs_diff_eq!(
        sensor.right_ascension(direction) / RADEG,
        219.90205833,
        epsilon = 1e-4
    );
    assert_abs_diff_eq!(
        sensor.declination(direction) / RADEG,
        -60.83399269,
        epsilon = 1e-4
    );
}

#[test]
fn test_angle_derivations_compose_with_the_shape_model() {
    let shape: ShapeModel = "ellipsoid".parse().unwrap();

    // Observer straight above a surface point of the spherical reference body.
    let ground = CartesianPoint::new(1000.0, 0.0, 0.0);
    let observer = CartesianPoint::new(2500.0, 0.0, 0.0);
    let normal = shape.surface_normal(ground);

    assert_abs_diff_eq!(emission_angle(observer, ground, normal), 0.0, epsilon = 1e-9);

    // An illuminator at opposition sits behind the observer: zero phase.
    let illuminator = CartesianPoint::new(5000.0, 0.0, 0.0);
    assert_abs_diff_eq!(
        phase_angle(observer, illuminator, ground),
        0.0,
        epsilon = 1e-9
    );

    // Terminator geometry: illuminator orthogonal to the look direction.
    let grazing = CartesianPoint::new(1000.0, 4000.0, 0.0);
    assert_abs_diff_eq!(
        phase_angle(observer, grazing, ground),
        PI / 2.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_illuminator_recovery_round_trip() {
    let ground = CartesianPoint::new(0.0, 1.0, 0.0);
    let illuminator = CartesianPoint::new(1.0, 1.0, -1.0);

    // direction runs from the illuminator to the ground point, so recovery subtracts it back out.
    let direction = CartesianVector::new(
        ground.x - illuminator.x,
        ground.y - illuminator.y,
        ground.z - illuminator.z,
    );
    assert_eq!(illuminator_position(ground, direction), illuminator);
}

#[test]
fn test_conversion_round_trip_through_public_api() {
    let original = CartesianPoint::new(-1362.0, 785.5, -92.25);
    let round_tripped = lat2rect(rect2lat(original));
    assert_abs_diff_eq!(round_tripped.x, original.x, epsilon = 1e-6);
    assert_abs_diff_eq!(round_tripped.y, original.y, epsilon = 1e-6);
    assert_abs_diff_eq!(round_tripped.z, original.z, epsilon = 1e-6);

    let (ra, dec) = compute_ra_dec(original);
    assert!((0.0..2.0 * PI).contains(&ra));
    assert!((-PI / 2.0..=PI / 2.0).contains(&dec));
}

#[test]
fn test_unknown_models_fail_loudly() {
    assert_eq!(
        Sensor::new("integration", "hirise"),
        Err(SightlineError::UnknownSensorModel("hirise".to_string()))
    );
    assert_eq!(
        "torus".parse::<ShapeModel>(),
        Err(SightlineError::UnknownShapeModel("torus".to_string()))
    );
    assert!(SensorModel::from_name("csm", "payload").is_ok());
}

#[test]
fn test_unimplemented_mappings_do_not_fabricate_geometry() {
    let sensor = Sensor::new("integration", "csm").unwrap();
    let result = sensor.phase_angle_from_image(ImagePoint::new(512.0, 512.0, 0.0));
    assert!(matches!(result, Err(SightlineError::NotImplemented(_))));
}

#[test]
fn test_resolution_sentinel_contract() {
    assert_eq!(resolution(10.0, 500.0, 0.1, 1.0), 2.0);
    // 0.0 means "invalid configuration", not a legitimate zero resolution.
    assert_eq!(resolution(-10.0, 500.0, 0.1, 1.0), 0.0);
}
