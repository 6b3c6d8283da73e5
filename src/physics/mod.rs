pub mod error;
pub mod models;
pub mod traits;

pub use error::PhysicsError;
pub use models::{
    AltitudeHold, AltitudeHoldConfig, QuadPhysics, QuadPhysicsConfig, RemoteControl,
    RemoteControlConfig, MAX_DT,
};
pub use traits::{EngineState, PhysicsEngine};
