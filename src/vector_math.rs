//! # Elementary vector algebra
//!
//! Stateless free functions over [`CartesianPoint`] / [`CartesianVector`]: dot product,
//! subtraction, normalization, Euclidean distance, and the angle between two rays.
//! Every function is a pure function of its arguments and safe to call concurrently.
//!
//! ## Degenerate inputs
//!
//! A zero-magnitude vector never produces NaN here: [`normalize`] guards the zero
//! vector explicitly and returns it unchanged, so downstream dot products evaluate
//! to 0 and angle queries resolve to the orthogonality convention (π/2).

use nalgebra::Vector3;

use crate::constants::{Radian, RAY_EQUALITY_TOL};
use crate::coordinates::{CartesianPoint, CartesianVector};

/// Compute the dot product of two vectors.
///
/// Arguments
/// ---------
/// * `vector1`: the first vector.
/// * `vector2`: the second vector.
///
/// Return
/// ------
/// * The scalar product `vector1 · vector2`.
pub fn dot(vector1: CartesianVector, vector2: CartesianVector) -> f64 {
    Vector3::from(vector1).dot(&Vector3::from(vector2))
}

/// Subtract two vectors component-wise.
///
/// Arguments
/// ---------
/// * `vector1`: the vector to subtract from (minuend).
/// * `vector2`: the vector being subtracted (subtrahend).
///
/// Return
/// ------
/// * The difference `vector1 − vector2`.
pub fn subtract(vector1: CartesianVector, vector2: CartesianVector) -> CartesianVector {
    (Vector3::from(vector1) - Vector3::from(vector2)).into()
}

/// Normalize a vector to unit length.
///
/// The zero vector is returned unchanged rather than propagating a NaN;
/// callers composing angle queries rely on this to fall back on the
/// orthogonality convention for degenerate geometry.
///
/// Arguments
/// ---------
/// * `vector`: the vector to normalize.
///
/// Return
/// ------
/// * The unit vector pointing in the same direction, or the zero vector.
pub fn normalize(vector: CartesianVector) -> CartesianVector {
    let v = Vector3::from(vector);
    let magnitude = v.norm();
    if magnitude > 0.0 {
        (v / magnitude).into()
    } else {
        vector
    }
}

/// Compute the Euclidean distance between two points, in the units they are provided in.
///
/// Symmetric in its arguments.
///
/// Arguments
/// ---------
/// * `point1`: the first point.
/// * `point2`: the second point.
///
/// Return
/// ------
/// * The Euclidean norm of `point1 − point2`.
pub fn distance(point1: CartesianPoint, point2: CartesianPoint) -> f64 {
    (Vector3::from(point1) - Vector3::from(point2)).norm()
}

/// Compute the angle between two rays, in radians.
///
/// Rays that are component-wise equal within [`RAY_EQUALITY_TOL`] return 0 exactly,
/// avoiding an unstable `acos` evaluation near parallel vectors. Otherwise the angle
/// is `acos` of the dot product of the normalized rays, with the cosine clamped into
/// [−1, 1] so rounding overshoot cannot leave the `acos` domain.
///
/// Arguments
/// ---------
/// * `ray1`: the first ray.
/// * `ray2`: the second ray.
///
/// Return
/// ------
/// * The angle between the rays in [0, π] radians.
pub fn angle(ray1: CartesianVector, ray2: CartesianVector) -> Radian {
    if (ray1.x - ray2.x).abs() <= RAY_EQUALITY_TOL
        && (ray1.y - ray2.y).abs() <= RAY_EQUALITY_TOL
        && (ray1.z - ray2.z).abs() <= RAY_EQUALITY_TOL
    {
        return 0.0;
    }

    let cos_angle = dot(normalize(ray1), normalize(ray2));
    cos_angle.clamp(-1.0, 1.0).acos()
}
