//! # Instrument sensor models
//!
//! The **image-formation geometry** side of the observation-geometry pipeline: the
//! closed set of sensor-model variants a [`Sensor`](crate::sensor::Sensor) can own,
//! and the name-based registry that resolves one at construction time from an
//! opaque metadata payload.
//!
//! ## Public API
//!
//! ### [`SensorModel`]
//!
//! Tagged-variant set of the supported image/ground mappings, resolved once and
//! dispatched by `match`:
//!
//! - `SensorModel::Csm` – CSM-style adapter (reference variant)
//!
//! Resolution goes through [`SensorModel::from_name`], which pairs the registry
//! name with the metadata the concrete model derives its calibration from:
//!
//! ```rust
//! use sightline::sensor_model::SensorModel;
//! let sensor = SensorModel::from_name("csm", "calibration payload").unwrap();
//! ```
//!
//! An unrecognized name is a hard
//! [`UnknownSensorModel`](crate::sightline_errors::SightlineError::UnknownSensorModel)
//! error; nothing is silently substituted.
//!
//! ## Contract
//!
//! All six operations are pure functions of their single input. A model holds no
//! mutable state after construction, so concurrent queries against one instance
//! never observe each other.

pub mod csm;

use crate::constants::ImageTime;
use crate::coordinates::{CartesianPoint, CartesianVector, ImagePoint};
use crate::sightline_errors::SightlineError;
use csm::CsmSensorModel;

/// The closed set of image-formation geometries a sensor facade can own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorModel {
    /// CSM-style adapter (reference variant).
    Csm(CsmSensorModel),
}

impl SensorModel {
    /// Resolve a sensor model from its registry name and calibration metadata.
    ///
    /// Arguments
    /// ---------
    /// * `name`: registry name of the concrete model family (e.g. `"csm"`).
    /// * `metadata`: opaque calibration payload handed to the concrete model.
    ///
    /// Return
    /// ------
    /// * The resolved model, or [`SightlineError::UnknownSensorModel`] for an
    ///   unrecognized name.
    pub fn from_name(name: &str, metadata: &str) -> Result<Self, SightlineError> {
        match name {
            "csm" => Ok(SensorModel::Csm(CsmSensorModel::new(metadata))),
            _ => Err(SightlineError::UnknownSensorModel(name.to_string())),
        }
    }

    /// Map an image point to its ground intersection, in the body-fixed frame.
    pub fn image_to_ground(
        &self,
        image_point: ImagePoint,
    ) -> Result<CartesianPoint, SightlineError> {
        match self {
            SensorModel::Csm(csm) => csm.image_to_ground(image_point),
        }
    }

    /// Map a body-fixed ground point to its image-space location.
    pub fn ground_to_image(
        &self,
        ground_point: CartesianPoint,
    ) -> Result<ImagePoint, SightlineError> {
        match self {
            SensorModel::Csm(csm) => csm.ground_to_image(ground_point),
        }
    }

    /// Look vector from the sensor to a ground point.
    pub fn ground_to_look(
        &self,
        ground_point: CartesianPoint,
    ) -> Result<CartesianVector, SightlineError> {
        match self {
            SensorModel::Csm(csm) => csm.ground_to_look(ground_point),
        }
    }

    /// Acquisition time of an image point; unit and epoch are defined by the
    /// concrete model.
    pub fn image_time(&self, image_point: ImagePoint) -> Result<ImageTime, SightlineError> {
        match self {
            SensorModel::Csm(csm) => csm.image_time(image_point),
        }
    }

    /// Sensor position at an image point, in the body-fixed/inertial frame.
    pub fn sensor_position(
        &self,
        image_point: ImagePoint,
    ) -> Result<CartesianPoint, SightlineError> {
        match self {
            SensorModel::Csm(csm) => csm.sensor_position(image_point),
        }
    }

    /// Illuminator direction at a ground point: the vector from the illuminator to
    /// the point.
    pub fn illumination_direction(
        &self,
        ground_point: CartesianPoint,
    ) -> Result<CartesianVector, SightlineError> {
        match self {
            SensorModel::Csm(csm) => csm.illumination_direction(ground_point),
        }
    }
}

#[cfg(test)]
mod sensor_model_test {
    use super::*;

    #[test]
    fn test_resolve_by_name() {
        let sensor = SensorModel::from_name("csm", "payload").unwrap();
        let SensorModel::Csm(csm) = &sensor;
        assert_eq!(csm.metadata(), "payload");
    }

    #[test]
    fn test_unknown_name_fails() {
        assert_eq!(
            SensorModel::from_name("framing", ""),
            Err(SightlineError::UnknownSensorModel("framing".to_string()))
        );
    }

    #[test]
    fn test_dispatched_operations_surface_unimplemented() {
        let sensor = SensorModel::from_name("csm", "test").unwrap();

        assert!(matches!(
            sensor.ground_to_look(CartesianPoint::default()),
            Err(SightlineError::NotImplemented(_))
        ));
        assert!(matches!(
            sensor.image_time(ImagePoint::default()),
            Err(SightlineError::NotImplemented(_))
        ));
    }
}
