use crate::transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Invalid frame geometry: {0}")]
    InvalidGeometry(String),

    #[error("Frame buffer is {actual} bytes, geometry requires {expected}")]
    FrameSizeMismatch { expected: usize, actual: usize },

    #[error("Frame rows ({rows}) not divisible by strip height ({strip_height})")]
    IndivisibleRows { rows: u32, strip_height: u32 },

    #[error("Geometry mismatch: streamer configured for {expected} bytes, frame carries {actual}")]
    GeometryMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    TransportError(#[from] TransportError),
}
