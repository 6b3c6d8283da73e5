mod altitude_hold;
mod quad;
mod remote;

pub use altitude_hold::{AltitudeHold, AltitudeHoldConfig};
pub use quad::{QuadPhysics, QuadPhysicsConfig, MAX_DT};
pub use remote::{RemoteControl, RemoteControlConfig, COMMAND_DATAGRAM_BYTES};
