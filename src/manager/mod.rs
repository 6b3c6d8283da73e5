use crate::config::ControlConfig;
use crate::motor::MotorCommands;
use crate::physics::{EngineState, PhysicsEngine, PhysicsError, QuadPhysics, RemoteControl};
use tracing::info;

/// The vehicle's control strategy, fixed once at startup.
///
/// The orchestrator only ever talks to this through [`PhysicsEngine`]; it
/// has no idea whether the vehicle flies on the on-board model or on motor
/// commands fed in by an external controller process.
pub enum FlightManager {
    LocalPhysics(QuadPhysics),
    RemoteControlled(RemoteControl),
}

impl FlightManager {
    /// Startup factory: select the concrete strategy from configuration.
    pub fn from_config(config: &ControlConfig) -> Result<Self, PhysicsError> {
        match config {
            ControlConfig::Local { physics } => {
                info!("flight manager: on-board physics");
                Ok(Self::LocalPhysics(QuadPhysics::new(*physics)?))
            }
            ControlConfig::Remote { control } => {
                info!(endpoint = ?control.bind, "flight manager: remote control");
                Ok(Self::RemoteControlled(RemoteControl::bind(control)?))
            }
        }
    }

    fn engine(&mut self) -> &mut dyn PhysicsEngine {
        match self {
            Self::LocalPhysics(engine) => engine,
            Self::RemoteControlled(engine) => engine,
        }
    }
}

impl PhysicsEngine for FlightManager {
    fn start(&mut self) {
        self.engine().start()
    }

    fn stop(&mut self) {
        self.engine().stop()
    }

    fn state(&self) -> EngineState {
        match self {
            Self::LocalPhysics(engine) => engine.state(),
            Self::RemoteControlled(engine) => engine.state(),
        }
    }

    fn update(&mut self, dt: f64) -> Result<MotorCommands, PhysicsError> {
        self.engine().update(dt)
    }
}
