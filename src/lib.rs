mod clock;
mod config;
mod manager;
mod motor;
mod orchestrator;
mod physics;
mod sensor;
mod transport;

pub use clock::SimulationClock;
pub use config::{BridgeConfig, ConfigError, ControlConfig, SensorConfig};
pub use manager::FlightManager;
pub use motor::{MotorCommands, MOTOR_COUNT, MOTOR_DIRECTIONS, PROP_DEGREES_PER_TICK};
pub use orchestrator::{NullEffects, TickOrchestrator, VehicleEffects};
pub use physics::{
    AltitudeHold, AltitudeHoldConfig, EngineState, PhysicsEngine, PhysicsError, QuadPhysics,
    QuadPhysicsConfig, RemoteControl, RemoteControlConfig, MAX_DT,
};
pub use sensor::{FrameGeometry, SensorFrame, SensorStreamer, ShortStripPolicy, StreamError};
pub use transport::{
    DatagramSink, FrameTransport, TransportEndpoint, TransportError, MAX_DATAGRAM_BYTES,
};
