//! # Rectangular ⇄ latitudinal coordinate conversion
//!
//! Conversions between rectangular cartesian coordinates and the latitudinal
//! (radius, declination, right ascension) representation, plus the derived
//! right-ascension/declination pair used by celestial-sphere queries.
//!
//! ## Range convention
//!
//! [`rect2lat`] leaves the right ascension exactly as `atan2` produces it, in
//! (−π, π]. Only the derived-pair layer ([`compute_ra_dec`]) and the facade
//! wrap negative values into the astronomical [0, 2π) range, through
//! [`wrap_right_ascension`]. This asymmetry is intentional layering: the base
//! conversion stays an exact inverse of [`lat2rect`], and the callers that
//! need an astronomical range pay for the wrap themselves.

use nalgebra::Vector3;

use crate::constants::{Radian, DPI};
use crate::coordinates::CartesianPoint;

/// A point in latitudinal coordinates: radius, declination, right ascension.
///
/// The radius is in the same linear unit as the rectangular coordinates it was
/// derived from; both angles are in radians. Declination lies in [−π/2, π/2].
/// The right ascension range depends on the producing layer (see the module
/// documentation).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatitudinalPoint {
    /// Distance from the frame origin, in the caller-supplied linear unit.
    pub radius: f64,
    /// Angle above/below the reference equatorial plane, in radians.
    pub declination: Radian,
    /// Angle of the projection onto the equatorial plane, in radians.
    pub right_ascension: Radian,
}

/// Convert rectangular coordinates to latitudinal (radius, declination, right ascension).
///
/// Rectangular cartesian coordinates are related to spherical coordinates by:
///
/// ```text
/// (1) X/R = cos(Declination)cos(RightAscension)
/// (2) Y/R = cos(Declination)sin(RightAscension)
/// (3) Z/R = sin(Declination)
/// ```
///
/// where `R = [X² + Y² + Z²]^(1/2)`. Dividing (2) by (1) gives
/// `RightAscension = atan2(Y, X)`, and declination follows directly as
/// `asin(Z/R)`.
///
/// The zero vector is mapped to the all-zero latitudinal point, which avoids a
/// division by zero in the declination term. The right ascension is returned
/// in (−π, π] and is **not** range-normalized here; see [`wrap_right_ascension`].
///
/// Arguments
/// ---------
/// * `rectangular_coords`: cartesian coordinates of the point or direction.
///
/// Return
/// ------
/// * The [`LatitudinalPoint`] of the input, angles in radians.
pub fn rect2lat(rectangular_coords: CartesianPoint) -> LatitudinalPoint {
    let coords = Vector3::from(rectangular_coords);

    // A zero maximum component means a zero vector (impossible if the norm > 0).
    if coords.amax() == 0.0 {
        return LatitudinalPoint::default();
    }

    let radius = coords.norm();
    LatitudinalPoint {
        radius,
        declination: (coords.z / radius).asin(),
        right_ascension: coords.y.atan2(coords.x),
    }
}

/// Convert latitudinal coordinates back to rectangular cartesian coordinates.
///
/// Exact inverse of [`rect2lat`] for non-degenerate inputs.
///
/// Arguments
/// ---------
/// * `latitudinal_coords`: radius plus declination/right ascension in radians.
///
/// Return
/// ------
/// * The cartesian coordinates of the point.
pub fn lat2rect(latitudinal_coords: LatitudinalPoint) -> CartesianPoint {
    let LatitudinalPoint {
        radius,
        declination,
        right_ascension,
    } = latitudinal_coords;

    CartesianPoint::new(
        radius * declination.cos() * right_ascension.cos(),
        radius * declination.cos() * right_ascension.sin(),
        radius * declination.sin(),
    )
}

/// Wrap a right ascension into the astronomical [0, 2π) range.
///
/// `atan2`-derived right ascensions live in (−π, π]; callers that need the
/// astronomical convention add 2π to negative values. This is deliberately
/// **not** done inside [`rect2lat`].
pub fn wrap_right_ascension(right_ascension: Radian) -> Radian {
    if right_ascension < 0.0 {
        right_ascension + DPI
    } else {
        right_ascension
    }
}

/// Extract the (right ascension, declination) pair of a direction.
///
/// Calls [`rect2lat`], reorders to (RA, Dec), and wraps the right ascension
/// into [0, 2π).
///
/// Arguments
/// ---------
/// * `coords`: the direction to project onto the celestial sphere.
///
/// Return
/// ------
/// * `(right_ascension, declination)` in radians, with RA in [0, 2π).
pub fn compute_ra_dec(coords: CartesianPoint) -> (Radian, Radian) {
    let latitudinal = rect2lat(coords);
    (
        wrap_right_ascension(latitudinal.right_ascension),
        latitudinal.declination,
    )
}

#[cfg(test)]
mod spherical_test {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::constants::{EPS, RADEG};

    #[test]
    fn test_rect2lat_unit_diagonal() {
        let latitudinal = rect2lat(CartesianPoint::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(latitudinal.radius, 1.7320508, epsilon = 1e-6);
        assert_abs_diff_eq!(latitudinal.declination, 35.2643896 * RADEG, epsilon = 1e-6);
        assert_abs_diff_eq!(latitudinal.right_ascension, 45.0 * RADEG, epsilon = 1e-6);
    }

    #[test]
    fn test_rect2lat_zero_vector() {
        assert_eq!(
            rect2lat(CartesianPoint::default()),
            LatitudinalPoint::default()
        );
    }

    #[test]
    fn test_rect2lat_keeps_negative_right_ascension() {
        // Third quadrant: atan2 stays in (−π, π], no wrap at this layer.
        let latitudinal = rect2lat(CartesianPoint::new(-1.0, -1.0, 0.0));
        assert_abs_diff_eq!(latitudinal.right_ascension, -3.0 * PI / 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lat2rect() {
        let cartesian = lat2rect(LatitudinalPoint {
            radius: 2.0,
            declination: PI / 6.0,
            right_ascension: PI / 3.0,
        });
        assert_abs_diff_eq!(cartesian.x, 2.0 * (PI / 6.0).cos() * (PI / 3.0).cos());
        assert_abs_diff_eq!(cartesian.y, 2.0 * (PI / 6.0).cos() * (PI / 3.0).sin());
        assert_abs_diff_eq!(cartesian.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let fixtures = [
            LatitudinalPoint {
                radius: 1.0,
                declination: 0.0,
                right_ascension: 0.0,
            },
            LatitudinalPoint {
                radius: 1.7320508,
                declination: 35.2643896 * RADEG,
                right_ascension: 45.0 * RADEG,
            },
            LatitudinalPoint {
                radius: 384_400.0,
                declination: -1.2,
                right_ascension: 2.9,
            },
            LatitudinalPoint {
                radius: 0.5,
                declination: 1.5,
                right_ascension: -3.0,
            },
        ];

        for expected in fixtures {
            let round_tripped = rect2lat(lat2rect(expected));
            assert_relative_eq!(round_tripped.radius, expected.radius, epsilon = EPS);
            assert_abs_diff_eq!(
                round_tripped.declination,
                expected.declination,
                epsilon = EPS
            );
            assert_abs_diff_eq!(
                round_tripped.right_ascension,
                expected.right_ascension,
                epsilon = EPS
            );
        }
    }

    #[test]
    fn test_compute_ra_dec_alpha_centauri() {
        // Heliocentric-xyz parsecs; truth values taken from SIMBAD.
        let (ra, dec) = compute_ra_dec(CartesianPoint::new(-0.495304, -0.414169, -1.15686));
        assert_abs_diff_eq!(ra / RADEG, 219.90205833, epsilon = 1e-4);
        assert_abs_diff_eq!(dec / RADEG, -60.83399269, epsilon = 1e-4);
    }

    #[test]
    fn test_wrap_right_ascension() {
        assert_eq!(wrap_right_ascension(0.0), 0.0);
        assert_eq!(wrap_right_ascension(1.5), 1.5);
        assert_abs_diff_eq!(wrap_right_ascension(-PI / 2.0), 3.0 * PI / 2.0, epsilon = 1e-12);
    }
}
