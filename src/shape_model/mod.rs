//! # Body shape models
//!
//! This module provides the **surface geometry** side of the observation-geometry
//! pipeline: the closed set of body shape variants a [`Sensor`](crate::sensor::Sensor)
//! can own, and the name-based registry that resolves one at construction time.
//!
//! ## Public API
//!
//! ### [`ShapeModel`]
//!
//! Tagged-variant set of the supported surface descriptions. The variant set is
//! closed on purpose: a shape is resolved once, held for the lifetime of its owning
//! facade, and dispatched by `match` rather than open-ended subclassing.
//!
//! - `ShapeModel::BiAxialEllipsoid` – body of revolution with a major and minor axis
//!
//! You can resolve a [`ShapeModel`] from a registry name with:
//!
//! ```rust
//! use sightline::shape_model::ShapeModel;
//! let shape: ShapeModel = "ellipsoid".parse().unwrap();
//! ```
//!
//! An unrecognized name is a hard
//! [`UnknownShapeModel`](crate::sightline_errors::SightlineError::UnknownShapeModel)
//! error; nothing is silently substituted.
//!
//! ## Contract
//!
//! Shape queries are pure functions of their inputs: no interior mutability, no
//! caching, no observable effects between concurrent calls.

pub mod biaxial_ellipsoid;

use std::str::FromStr;

use smallvec::SmallVec;

use crate::constants::{DEFAULT_MAJOR_AXIS, DEFAULT_MINOR_AXIS};
use crate::coordinates::{CartesianPoint, CartesianVector};
use crate::sightline_errors::SightlineError;
use biaxial_ellipsoid::BiAxialEllipsoid;

/// Ray/surface intersection points, ordered near-to-far along the ray.
///
/// A convex body yields zero, one, or two points, so the container is
/// inline-optimized for two.
pub type IntersectionPoints = SmallVec<[CartesianPoint; 2]>;

/// The closed set of body surface descriptions a sensor facade can own.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeModel {
    /// Bi-axial ellipsoid surface (reference variant).
    BiAxialEllipsoid(BiAxialEllipsoid),
}

impl ShapeModel {
    /// Intersect a ray with the body surface.
    ///
    /// Arguments
    /// ---------
    /// * `direction`: direction of the ray.
    /// * `origin`: origin of the ray.
    ///
    /// Return
    /// ------
    /// * The intersection points ordered near-to-far along the ray from `origin`,
    ///   or a [`SightlineError::NotImplemented`] for variants whose intersection
    ///   geometry is not available.
    pub fn intersect(
        &self,
        direction: CartesianVector,
        origin: CartesianPoint,
    ) -> Result<IntersectionPoints, SightlineError> {
        match self {
            ShapeModel::BiAxialEllipsoid(ellipsoid) => ellipsoid.intersect(direction, origin),
        }
    }

    /// Outward unit surface normal at a surface point.
    ///
    /// Arguments
    /// ---------
    /// * `surface_point`: body-fixed point on the surface.
    ///
    /// Return
    /// ------
    /// * The outward unit normal at the point.
    pub fn surface_normal(&self, surface_point: CartesianPoint) -> CartesianVector {
        match self {
            ShapeModel::BiAxialEllipsoid(ellipsoid) => ellipsoid.surface_normal(surface_point),
        }
    }
}

impl FromStr for ShapeModel {
    type Err = SightlineError;

    /// Resolve a shape model from its registry name.
    ///
    /// Recognized names build the reference bi-axial ellipsoid with the default
    /// axis lengths ([`DEFAULT_MAJOR_AXIS`], [`DEFAULT_MINOR_AXIS`]). Unknown names
    /// fail with [`SightlineError::UnknownShapeModel`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ellipsoid" | "biaxial-ellipsoid" => Ok(ShapeModel::BiAxialEllipsoid(
                BiAxialEllipsoid::new(DEFAULT_MAJOR_AXIS, DEFAULT_MINOR_AXIS)?,
            )),
            _ => Err(SightlineError::UnknownShapeModel(s.to_string())),
        }
    }
}

impl TryFrom<&str> for ShapeModel {
    type Error = SightlineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod shape_model_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_resolve_by_name() {
        let shape: ShapeModel = "ellipsoid".parse().unwrap();
        let ShapeModel::BiAxialEllipsoid(ellipsoid) = &shape;
        assert_eq!(ellipsoid.major_axis(), DEFAULT_MAJOR_AXIS);
        assert_eq!(ellipsoid.minor_axis(), DEFAULT_MINOR_AXIS);

        assert!(ShapeModel::try_from("biaxial-ellipsoid").is_ok());
    }

    #[test]
    fn test_unknown_name_fails() {
        let result: Result<ShapeModel, _> = "icosahedron".parse();
        assert_eq!(
            result,
            Err(SightlineError::UnknownShapeModel("icosahedron".to_string()))
        );
    }

    #[test]
    fn test_dispatched_surface_normal() {
        let shape: ShapeModel = "ellipsoid".parse().unwrap();
        let normal = shape.surface_normal(CartesianPoint::new(0.0, 0.0, 123.0));
        assert_abs_diff_eq!(normal.z, 1.0, epsilon = 1e-12);
        assert_eq!(normal.x, 0.0);
        assert_eq!(normal.y, 0.0);
    }

    #[test]
    fn test_dispatched_intersect_surfaces_unimplemented() {
        let shape: ShapeModel = "ellipsoid".parse().unwrap();
        let result = shape.intersect(
            CartesianVector::new(1.0, 2.0, 3.0),
            CartesianPoint::new(3.0, 3.0, 3.0),
        );
        assert!(matches!(result, Err(SightlineError::NotImplemented(_))));
    }
}
