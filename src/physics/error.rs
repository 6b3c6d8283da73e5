use crate::physics::EngineState;
use crate::transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("Engine is not running (state: {0:?})")]
    NotRunning(EngineState),

    #[error("Invalid timestep: {0}")]
    InvalidTimestep(f64),

    #[error("Model configuration error: {0}")]
    ConfigError(String),

    #[error("Control link error: {0}")]
    LinkError(#[from] TransportError),
}
