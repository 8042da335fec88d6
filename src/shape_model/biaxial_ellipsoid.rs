//! Bi-axial ellipsoid body shape.
//!
//! The reference surface variant: a body of revolution identified by a major and a
//! minor axis length. Ray intersection against the true ellipsoid is not implemented
//! yet and is surfaced as an explicit error rather than a fabricated point; the
//! surface normal uses the spherical approximation (exact only when both axes are
//! equal).

use ordered_float::NotNan;

use crate::constants::Meter;
use crate::coordinates::{CartesianPoint, CartesianVector};
use crate::shape_model::IntersectionPoints;
use crate::sightline_errors::SightlineError;
use crate::vector_math::normalize;

/// A bi-axial ellipsoid identified by its major and minor axis lengths, in meters.
///
/// Axis lengths are stored NaN-forbidden; construction fails if either input is NaN.
/// The shape carries no other state and every query is a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiAxialEllipsoid {
    /// Major axis of the ellipsoid, in meters.
    major_axis: NotNan<f64>,
    /// Minor axis of the ellipsoid, in meters.
    minor_axis: NotNan<f64>,
}

impl BiAxialEllipsoid {
    /// Construct a bi-axial ellipsoid from its axis lengths.
    ///
    /// Arguments
    /// ---------
    /// * `major_axis`: the major axis of the ellipsoid, in meters.
    /// * `minor_axis`: the minor axis of the ellipsoid, in meters.
    ///
    /// Return
    /// ------
    /// * The ellipsoid, or [`SightlineError::NanShapeParameter`] if an axis is NaN.
    pub fn new(major_axis: Meter, minor_axis: Meter) -> Result<Self, SightlineError> {
        Ok(BiAxialEllipsoid {
            major_axis: NotNan::new(major_axis)?,
            minor_axis: NotNan::new(minor_axis)?,
        })
    }

    /// Major axis of the ellipsoid, in meters.
    pub fn major_axis(&self) -> Meter {
        self.major_axis.into_inner()
    }

    /// Minor axis of the ellipsoid, in meters.
    pub fn minor_axis(&self) -> Meter {
        self.minor_axis.into_inner()
    }

    /// Intersect a ray with the ellipsoid surface.
    ///
    /// True ray/ellipsoid intersection is not implemented; the error is surfaced
    /// explicitly so incompleteness cannot masquerade as a valid geometric answer.
    ///
    /// Arguments
    /// ---------
    /// * `direction`: direction of the ray.
    /// * `origin`: origin of the ray.
    ///
    /// Return
    /// ------
    /// * On completion, up to two intersection points ordered near-to-far along the
    ///   ray; currently always [`SightlineError::NotImplemented`].
    pub fn intersect(
        &self,
        _direction: CartesianVector,
        _origin: CartesianPoint,
    ) -> Result<IntersectionPoints, SightlineError> {
        Err(SightlineError::NotImplemented(
            "ray/ellipsoid intersection for BiAxialEllipsoid",
        ))
    }

    /// Outward surface normal at a ground point.
    ///
    /// Spherical approximation: the unit vector from the body center to the point.
    /// Exact only for a true sphere, not a general ellipsoid.
    ///
    /// Arguments
    /// ---------
    /// * `ground_point`: body-fixed point on the surface.
    ///
    /// Return
    /// ------
    /// * The outward unit normal at the point.
    pub fn surface_normal(&self, ground_point: CartesianPoint) -> CartesianVector {
        normalize(ground_point)
    }
}

#[cfg(test)]
mod biaxial_ellipsoid_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_new_rejects_nan() {
        assert!(BiAxialEllipsoid::new(f64::NAN, 1000.0).is_err());
        assert!(BiAxialEllipsoid::new(1000.0, f64::NAN).is_err());
    }

    #[test]
    fn test_intersect_is_unimplemented() {
        let shape = BiAxialEllipsoid::new(1000.0, 1000.0).unwrap();
        let look_direction = CartesianVector::new(1.0, 2.0, 3.0);
        let origin = CartesianPoint::new(3.0, 3.0, 3.0);
        assert_eq!(
            shape.intersect(look_direction, origin),
            Err(SightlineError::NotImplemented(
                "ray/ellipsoid intersection for BiAxialEllipsoid"
            ))
        );
    }

    #[test]
    fn test_sphere_surface_normal() {
        let shape = BiAxialEllipsoid::new(1000.0, 1000.0).unwrap();
        let normal = shape.surface_normal(CartesianPoint::new(-2.0, -2.0, 2.0));
        let component = 1.0 / 3.0_f64.sqrt();
        assert_abs_diff_eq!(normal.x, -component, epsilon = 1e-12);
        assert_abs_diff_eq!(normal.y, -component, epsilon = 1e-12);
        assert_abs_diff_eq!(normal.z, component, epsilon = 1e-12);
    }
}
