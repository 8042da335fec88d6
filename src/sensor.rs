//! # Sensor: the observation-geometry façade
//!
//! This module defines the [`Sensor`](crate::sensor::Sensor) struct, the central façade that wires together:
//!
//! 1. **A body shape model** ([`ShapeModel`](crate::shape_model::ShapeModel)) — surface intersection and normals.
//! 2. **An instrument sensor model** ([`SensorModel`](crate::sensor_model::SensorModel)) — image ⇄ ground mapping.
//! 3. **The angle-derivation layer** ([`angles`](crate::angles), [`spherical`](crate::spherical)) — the
//!    user-facing geometry queries composed from the two models.
//!
//! A `Sensor` owns exactly one shape model and one sensor model for its whole
//! lifetime. Both are resolved once at construction and never replaced, so every
//! query is a pure function of the owned models and the call's arguments, and
//! concurrent queries against a single instance are safe.
//!
//! ## Typical usage
//!
//! ```rust
//! use sightline::coordinates::CartesianVector;
//! use sightline::sensor::Sensor;
//!
//! // Resolve the models once from a registry name and a metadata payload.
//! let sensor = Sensor::new("calibration payload", "csm").unwrap();
//!
//! // Celestial-sphere queries are independent of the owned models.
//! let dec = sensor.declination(CartesianVector::new(1.0, 1.0, 1.0));
//! assert!(dec > 0.0);
//! ```
//!
//! ## Errors
//!
//! - Construction fails with a distinguishable `Unknown…Model` error for an
//!   unrecognized registry name; no default model is silently substituted.
//! - Queries that traverse an unimplemented model operation propagate its
//!   [`NotImplemented`](crate::sightline_errors::SightlineError::NotImplemented)
//!   error instead of masking it with a zero-valued answer.

use crate::angles;
use crate::constants::Radian;
use crate::coordinates::{CartesianPoint, CartesianVector, ImagePoint};
use crate::sensor_model::SensorModel;
use crate::shape_model::ShapeModel;
use crate::sightline_errors::SightlineError;
use crate::spherical::{rect2lat, wrap_right_ascension};

/// Registry name of the shape model paired with a sensor by default.
const DEFAULT_SHAPE_MODEL: &str = "ellipsoid";

/// Observation-geometry façade owning one shape model and one sensor model.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    shape_model: ShapeModel,
    sensor_model: SensorModel,
}

impl Sensor {
    /// Construct a new [`Sensor`] from a metadata payload and a sensor-model name.
    ///
    /// The sensor model is resolved through the name registry and handed the opaque
    /// metadata to derive its calibration from; the body shape is the default
    /// reference ellipsoid. Both are owned exclusively by the returned facade.
    ///
    /// Arguments
    /// ---------
    /// * `metadata`: opaque calibration payload for the concrete sensor model.
    /// * `model_name`: registry name of the sensor-model family (e.g. `"csm"`).
    ///
    /// Return
    /// ------
    /// * The facade, or an `Unknown…Model` error for an unrecognized name.
    ///
    /// See also
    /// --------
    /// * [`Sensor::from_models`] – Build from already-resolved model instances.
    pub fn new(metadata: &str, model_name: &str) -> Result<Self, SightlineError> {
        Ok(Sensor {
            shape_model: DEFAULT_SHAPE_MODEL.parse()?,
            sensor_model: SensorModel::from_name(model_name, metadata)?,
        })
    }

    /// Construct a [`Sensor`] directly from resolved model instances.
    ///
    /// Skips the name registry; useful when the caller already holds configured
    /// models (e.g. an ellipsoid with non-default axes).
    ///
    /// See also
    /// --------
    /// * [`Sensor::new`] – Resolve the models from a registry name.
    pub fn from_models(shape_model: ShapeModel, sensor_model: SensorModel) -> Self {
        Sensor {
            shape_model,
            sensor_model,
        }
    }

    /// The owned body shape model.
    pub fn shape_model(&self) -> &ShapeModel {
        &self.shape_model
    }

    /// The owned instrument sensor model.
    pub fn sensor_model(&self) -> &SensorModel {
        &self.sensor_model
    }

    /// Compute the declination, in radians, on the celestial sphere for a given
    /// look direction.
    ///
    /// Independent of the owned models.
    ///
    /// Arguments
    /// ---------
    /// * `vector`: the look direction to project onto the celestial sphere.
    ///
    /// Return
    /// ------
    /// * Declination in [−π/2, π/2] radians.
    pub fn declination(&self, vector: CartesianVector) -> Radian {
        rect2lat(vector).declination
    }

    /// Compute the right ascension, in radians, on the celestial sphere for a given
    /// look direction.
    ///
    /// Independent of the owned models. Unlike the raw conversion, the result is
    /// wrapped into the astronomical [0, 2π) range.
    ///
    /// Arguments
    /// ---------
    /// * `vector`: the look direction to project onto the celestial sphere.
    ///
    /// Return
    /// ------
    /// * Right ascension in [0, 2π) radians.
    pub fn right_ascension(&self, vector: CartesianVector) -> Radian {
        wrap_right_ascension(rect2lat(vector).right_ascension)
    }

    /// Compute the phase angle, in radians, at a body-fixed ground point.
    ///
    /// Maps the ground point back into image space to locate the sensor, recovers
    /// the illuminator position at that image point, and derives the angle with
    /// [`angles::phase_angle`].
    ///
    /// Arguments
    /// ---------
    /// * `ground_point`: body-fixed surface intersection point.
    ///
    /// Return
    /// ------
    /// * Phase angle in [0, π] radians, or the first model error encountered.
    pub fn phase_angle(&self, ground_point: CartesianPoint) -> Result<Radian, SightlineError> {
        let image_point = self.sensor_model.ground_to_image(ground_point)?;
        let sensor_position = self.sensor_model.sensor_position(image_point)?;
        let illuminator_position = self.illuminator_position(image_point)?;

        Ok(angles::phase_angle(
            sensor_position,
            illuminator_position,
            ground_point,
        ))
    }

    /// Compute the phase angle, in radians, at an image point.
    ///
    /// Maps the image point to its ground intersection and applies the same
    /// derivation as [`Sensor::phase_angle`].
    ///
    /// Arguments
    /// ---------
    /// * `image_point`: the image-space location to evaluate.
    ///
    /// Return
    /// ------
    /// * Phase angle in [0, π] radians, or the first model error encountered.
    pub fn phase_angle_from_image(
        &self,
        image_point: ImagePoint,
    ) -> Result<Radian, SightlineError> {
        let ground_point = self.sensor_model.image_to_ground(image_point)?;
        self.phase_angle(ground_point)
    }

    /// Compute the emission angle, in radians, at a body-fixed ground point.
    ///
    /// The sensor position comes from mapping the ground point into image space;
    /// the surface normal comes from the owned shape model. The angle itself is
    /// [`angles::emission_angle`].
    ///
    /// Arguments
    /// ---------
    /// * `ground_point`: body-fixed surface intersection point.
    ///
    /// Return
    /// ------
    /// * Emission angle in [0, π] radians, or the first model error encountered.
    pub fn emission_angle(&self, ground_point: CartesianPoint) -> Result<Radian, SightlineError> {
        let image_point = self.sensor_model.ground_to_image(ground_point)?;
        let sensor_position = self.sensor_model.sensor_position(image_point)?;
        let surface_normal = self.shape_model.surface_normal(ground_point);

        Ok(angles::emission_angle(
            sensor_position,
            ground_point,
            surface_normal,
        ))
    }

    /// Compute the emission angle, in radians, at an image point.
    ///
    /// Arguments
    /// ---------
    /// * `image_point`: the image-space location to evaluate.
    ///
    /// Return
    /// ------
    /// * Emission angle in [0, π] radians, or the first model error encountered.
    pub fn emission_angle_from_image(
        &self,
        image_point: ImagePoint,
    ) -> Result<Radian, SightlineError> {
        let ground_point = self.sensor_model.image_to_ground(image_point)?;
        let sensor_position = self.sensor_model.sensor_position(image_point)?;
        let surface_normal = self.shape_model.surface_normal(ground_point);

        Ok(angles::emission_angle(
            sensor_position,
            ground_point,
            surface_normal,
        ))
    }

    /// Compute the illuminator position, in body-fixed coordinates, for an image point.
    ///
    /// The illuminator position (center body to center illuminator) is the
    /// body-fixed ground coordinate (center body to ground point) minus the
    /// illumination direction (center illuminator to ground point).
    ///
    /// Arguments
    /// ---------
    /// * `image_point`: the image-space location to evaluate the illuminator at.
    ///
    /// Return
    /// ------
    /// * The illuminator position, or the first model error encountered.
    pub fn illuminator_position(
        &self,
        image_point: ImagePoint,
    ) -> Result<CartesianPoint, SightlineError> {
        let ground_point = self.sensor_model.image_to_ground(image_point)?;
        let illumination_direction = self.sensor_model.illumination_direction(ground_point)?;

        Ok(angles::illuminator_position(
            ground_point,
            illumination_direction,
        ))
    }
}
