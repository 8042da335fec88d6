//! # Cartesian and image-space value types
//!
//! This module defines the two coordinate representations shared by the whole crate:
//!
//! - [`CartesianPoint`] / [`CartesianVector`] — an ordered triple (x, y, z) in a reference
//!   frame chosen by the caller (body-fixed or inertial, not tracked by the type).
//! - [`ImagePoint`] — a (sample, line, band) location in image space.
//!
//! Both are plain immutable value types with no identity beyond their components.
//! Computations go through [`nalgebra::Vector3`], the crate-wide algebra representation;
//! the `From` conversions in both directions keep the boundary with the math modules thin.

use nalgebra::Vector3;

/// A three-dimensional point in cartesian space relative to a known origin.
///
/// Whether the triple is a position or a direction is purely semantic;
/// see [`CartesianVector`]. Default-constructs to the origin (0, 0, 0).
///
/// Units
/// -----
/// The caller-supplied linear unit, carried unchanged through every operation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartesianPoint {
    /// The x-component of the point.
    pub x: f64,
    /// The y-component of the point.
    pub y: f64,
    /// The z-component of the point.
    pub z: f64,
}

/// A three-dimensional direction in cartesian space.
///
/// Shares its representation with [`CartesianPoint`]; the distinction is
/// position versus direction, not layout.
pub type CartesianVector = CartesianPoint;

impl CartesianPoint {
    /// Create a point from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CartesianPoint { x, y, z }
    }
}

impl From<Vector3<f64>> for CartesianPoint {
    fn from(v: Vector3<f64>) -> Self {
        CartesianPoint::new(v.x, v.y, v.z)
    }
}

impl From<CartesianPoint> for Vector3<f64> {
    fn from(p: CartesianPoint) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

/// A three-dimensional point in an image.
///
/// A sample is also known as a column or as the x-direction of an image.
/// A line is also known as a row or as the y-direction of an image.
/// A band is the spectral or temporal (z) direction of an image.
///
/// Default-constructs to (0, 0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImagePoint {
    /// The sample (i.e. column, x) component of an image.
    pub sample: f64,
    /// The line (i.e. row, y) component of an image.
    pub line: f64,
    /// The band (i.e. z) component of an image.
    pub band: f64,
}

impl ImagePoint {
    /// Create an image point from its three components.
    pub fn new(sample: f64, line: f64, band: f64) -> Self {
        ImagePoint { sample, line, band }
    }
}

impl From<Vector3<f64>> for ImagePoint {
    fn from(v: Vector3<f64>) -> Self {
        ImagePoint::new(v.x, v.y, v.z)
    }
}

impl From<ImagePoint> for Vector3<f64> {
    fn from(p: ImagePoint) -> Self {
        Vector3::new(p.sample, p.line, p.band)
    }
}
