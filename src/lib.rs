pub mod angles;
pub mod constants;
pub mod coordinates;
pub mod sensor;
pub mod sensor_model;
pub mod shape_model;
pub mod sightline_errors;
pub mod spherical;
pub mod vector_math;
