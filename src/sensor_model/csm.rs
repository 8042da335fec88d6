//! CSM-style sensor model adapter.
//!
//! Adapter over a Community Sensor Model style image-formation geometry. The
//! calibration payload arrives as an opaque metadata string and is stored unparsed;
//! a genuine projective camera/orbit model derived from it is not implemented yet,
//! so every mapping operation surfaces an explicit error instead of fabricating a
//! zero-valued answer.

use crate::constants::ImageTime;
use crate::coordinates::{CartesianPoint, CartesianVector, ImagePoint};
use crate::sightline_errors::SightlineError;

/// CSM-style sensor model holding its opaque calibration metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsmSensorModel {
    /// Opaque calibration payload; parsing it is a boundary concern, not ours.
    metadata: String,
}

impl CsmSensorModel {
    /// Construct a CSM-style sensor model from its calibration metadata.
    ///
    /// Arguments
    /// ---------
    /// * `metadata`: opaque calibration payload for the concrete instrument.
    pub fn new(metadata: &str) -> Self {
        CsmSensorModel {
            metadata: metadata.to_string(),
        }
    }

    /// The stored calibration metadata, unparsed.
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    pub fn image_to_ground(&self, _image_point: ImagePoint) -> Result<CartesianPoint, SightlineError> {
        Err(SightlineError::NotImplemented(
            "CSM image-to-ground mapping",
        ))
    }

    pub fn ground_to_image(&self, _ground_point: CartesianPoint) -> Result<ImagePoint, SightlineError> {
        Err(SightlineError::NotImplemented(
            "CSM ground-to-image mapping",
        ))
    }

    pub fn ground_to_look(&self, _ground_point: CartesianPoint) -> Result<CartesianVector, SightlineError> {
        Err(SightlineError::NotImplemented("CSM ground-to-look mapping"))
    }

    pub fn image_time(&self, _image_point: ImagePoint) -> Result<ImageTime, SightlineError> {
        Err(SightlineError::NotImplemented("CSM image acquisition time"))
    }

    pub fn sensor_position(&self, _image_point: ImagePoint) -> Result<CartesianPoint, SightlineError> {
        Err(SightlineError::NotImplemented("CSM sensor position"))
    }

    pub fn illumination_direction(
        &self,
        _ground_point: CartesianPoint,
    ) -> Result<CartesianVector, SightlineError> {
        Err(SightlineError::NotImplemented(
            "CSM illumination direction",
        ))
    }
}
