use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SightlineError {
    #[error("Unknown shape model: {0}")]
    UnknownShapeModel(String),

    #[error("Unknown sensor model: {0}")]
    UnknownSensorModel(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("NaN encountered in shape parameter: {0}")]
    NanShapeParameter(#[from] ordered_float::FloatIsNan),
}
