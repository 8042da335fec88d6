//! # Observation-geometry angle derivations
//!
//! Phase, emission, and off-nadir angles between a sensor, a surface point, and an
//! illuminator, plus the illuminator-position recovery and the ground-resolution
//! estimate. All functions are pure and operate on positions already resolved into
//! a common body-fixed or inertial frame by the caller.
//!
//! ## Numeric policy
//!
//! The cosine handed to every `acos` is clamped first: `cosθ ≥ 1` yields 0 and
//! `cosθ ≤ −1` yields π. Floating rounding can push a dot product of two unit
//! vectors slightly outside [−1, 1], which would make `acos` undefined, so the
//! clamp is a contract here, not an optional nicety. Zero-magnitude inputs never
//! produce NaN either: a zero vector normalizes to itself, its dot products are 0,
//! and the angle queries resolve to π/2 (a zero vector is treated as orthogonal
//! to everything).

use std::f64::consts::PI;

use crate::constants::{Kilometer, MetersPerPixel, Millimeter, Radian};
use crate::coordinates::{CartesianPoint, CartesianVector};
use crate::vector_math::{dot, normalize, subtract};

/// Clamp-and-acos shared by the angle derivations.
fn acos_clamped(cos_angle: f64) -> Radian {
    if cos_angle >= 1.0 {
        return 0.0;
    }
    if cos_angle <= -1.0 {
        return PI;
    }
    cos_angle.acos()
}

/// Compute the phase angle, in radians, at a surface intersection point.
///
/// The phase angle is the angle between the vector from the surface intersection
/// point to the observer (usually the spacecraft) and the vector from the surface
/// intersection point to the illuminator (usually the sun).
///
/// Arguments
/// ---------
/// * `observer_position`: three-dimensional position of the observer, in the
///   coordinate system of the target body.
/// * `illuminator_position`: three-dimensional position of the illuminator, in the
///   body-fixed coordinate system.
/// * `surface_intersection`: three-dimensional position of the ground (surface
///   intersection) point, in the body-fixed coordinate system.
///
/// Return
/// ------
/// * Phase angle in [0, π] radians.
pub fn phase_angle(
    observer_position: CartesianPoint,
    illuminator_position: CartesianPoint,
    surface_intersection: CartesianPoint,
) -> Radian {
    let surface_to_observer = normalize(subtract(observer_position, surface_intersection));
    let surface_to_illuminator = normalize(subtract(illuminator_position, surface_intersection));

    acos_clamped(dot(surface_to_observer, surface_to_illuminator))
}

/// Compute the emission angle, in radians, at a ground intersection point.
///
/// The emission angle is the angle between the local surface normal and the look
/// vector from the ground point to the observer. The normal is used as supplied;
/// a non-unit normal scales the cosine and saturates at the clamp bounds.
///
/// Arguments
/// ---------
/// * `observer_position`: three-dimensional position of the observer, in the
///   coordinate system of the target body.
/// * `ground_intersection`: three-dimensional position of the ground point, in the
///   body-fixed coordinate system.
/// * `surface_normal`: outward surface normal at the ground point.
///
/// Return
/// ------
/// * Emission angle in [0, π] radians.
pub fn emission_angle(
    observer_position: CartesianPoint,
    ground_intersection: CartesianPoint,
    surface_normal: CartesianVector,
) -> Radian {
    let look_vector = normalize(subtract(observer_position, ground_intersection));

    acos_clamped(dot(look_vector, surface_normal))
}

/// Compute the off-nadir angle, in radians, of an observation.
///
/// The off-nadir angle separates the observer's actual look direction from the
/// look direction it would have if positioned directly overhead (nadir) of the
/// intersection point. With `θ` the angle subtended at the body's center between
/// the ground point and the observer position, it is derived as
///
/// ```text
/// offNadir = π − (θ + (π − emissionAngle))
/// ```
///
/// Arguments
/// ---------
/// * `observer_position`: three-dimensional position of the observer, in the
///   coordinate system of the target body.
/// * `ground_intersection`: three-dimensional position of the ground point, in the
///   body-fixed coordinate system.
/// * `surface_normal`: outward surface normal at the ground point.
///
/// Return
/// ------
/// * Off-nadir angle in radians.
pub fn off_nadir_angle(
    observer_position: CartesianPoint,
    ground_intersection: CartesianPoint,
    surface_normal: CartesianVector,
) -> Radian {
    let subtended = acos_clamped(dot(
        normalize(ground_intersection),
        normalize(observer_position),
    ));
    let emission = emission_angle(observer_position, ground_intersection, surface_normal);

    PI - (subtended + (PI - emission))
}

/// Recover the illuminator position from a ground point and an illumination direction.
///
/// The illumination direction is the vector from the illuminator to the ground
/// point (center illuminator to ground point); subtracting it from the body-fixed
/// ground coordinate (center body to ground point) yields the illuminator position
/// (center body to center illuminator) in the same frame.
///
/// Arguments
/// ---------
/// * `ground_intersection`: body-fixed position of the ground point.
/// * `illuminator_direction`: vector from the illuminator to the ground point.
///
/// Return
/// ------
/// * The position of the illuminator in the body-fixed coordinate system.
pub fn illuminator_position(
    ground_intersection: CartesianPoint,
    illuminator_direction: CartesianVector,
) -> CartesianPoint {
    subtract(ground_intersection, illuminator_direction)
}

/// Estimate the ground resolution of one detector pixel, in meters per pixel.
///
/// Invalid physical parameters degrade to a sentinel 0.0 rather than an error:
/// callers must treat 0.0 as "invalid configuration", never as a legitimate zero
/// resolution.
///
/// Arguments
/// ---------
/// * `distance`: slant distance from the sensor to the surface, in kilometers.
/// * `focal_length`: effective focal length of the instrument, in millimeters.
/// * `pixel_pitch`: physical detector pixel size, in millimeters.
/// * `summing`: on-chip pixel summing (binning) mode; 1.0 means no summing.
///
/// Return
/// ------
/// * Meters per pixel, or 0.0 when `distance` or `summing` is negative or
///   `focal_length` or `pixel_pitch` is non-positive.
pub fn resolution(
    distance: Kilometer,
    focal_length: Millimeter,
    pixel_pitch: Millimeter,
    summing: f64,
) -> MetersPerPixel {
    if distance < 0.0 || summing < 0.0 || focal_length <= 0.0 || pixel_pitch <= 0.0 {
        return 0.0;
    }

    (distance / (focal_length / pixel_pitch)) * summing * 1000.0
}
