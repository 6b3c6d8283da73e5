use crate::motor::{MotorCommands, MOTOR_COUNT};
use crate::physics::error::PhysicsError;
use crate::physics::models::altitude_hold::{AltitudeHold, AltitudeHoldConfig};
use crate::physics::traits::{EngineState, PhysicsEngine};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Longest timestep the integrator will accept. Render hitches can hand
/// us arbitrarily large `dt`; anything above this is clamped so the
/// integration stays bounded instead of diverging.
pub const MAX_DT: f64 = 0.05;

const GRAVITY: f64 = 9.81;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuadPhysicsConfig {
    /// Vehicle mass [kg].
    pub mass: f64,
    /// Combined thrust of all motors at full throttle [N].
    pub max_thrust: f64,
    pub altitude_hold: AltitudeHoldConfig,
}

impl Default for QuadPhysicsConfig {
    fn default() -> Self {
        Self {
            mass: 1.2,
            max_thrust: 30.0,
            altitude_hold: AltitudeHoldConfig::default(),
        }
    }
}

impl QuadPhysicsConfig {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.mass <= 0.0 || !self.mass.is_finite() {
            return Err(PhysicsError::ConfigError(format!(
                "mass must be positive and finite, got {}",
                self.mass
            )));
        }
        if self.max_thrust <= 0.0 || !self.max_thrust.is_finite() {
            return Err(PhysicsError::ConfigError(format!(
                "max thrust must be positive and finite, got {}",
                self.max_thrust
            )));
        }
        Ok(())
    }
}

/// On-board flight physics: a vertical-axis rigid body flown by the
/// altitude-hold controller, with collective output mixed equally across
/// the four motors.
///
/// Position and velocity are carried as full 3-vectors (z up) so lateral
/// dynamics can slot in without changing the state type; only the vertical
/// axis is currently driven.
pub struct QuadPhysics {
    config: QuadPhysicsConfig,
    controller: AltitudeHold,
    state: EngineState,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
}

impl QuadPhysics {
    pub fn new(config: QuadPhysicsConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            controller: AltitudeHold::new(config.altitude_hold),
            config,
            state: EngineState::Uninitialized,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
        })
    }

    pub fn altitude(&self) -> f64 {
        self.position.z
    }

    pub fn climb_rate(&self) -> f64 {
        self.velocity.z
    }

    /// Throttle that balances gravity, used as the operating point the
    /// controller corrects around.
    fn hover_throttle(&self) -> f64 {
        self.config.mass * GRAVITY / self.config.max_thrust
    }

    fn step(&mut self, dt: f64) -> MotorCommands {
        let throttle = (self.hover_throttle()
            + self.controller.update(self.position.z, self.velocity.z, dt))
        .clamp(0.0, 1.0);

        let thrust = throttle * self.config.max_thrust;
        let accel = thrust / self.config.mass - GRAVITY;

        self.velocity.z += accel * dt;
        self.position.z += self.velocity.z * dt;

        // Ground contact: no digging in, no downward velocity at rest
        if self.position.z < 0.0 {
            self.position.z = 0.0;
            self.velocity.z = self.velocity.z.max(0.0);
        }

        MotorCommands::from_raw([throttle; MOTOR_COUNT])
    }
}

impl PhysicsEngine for QuadPhysics {
    fn start(&mut self) {
        match self.state {
            EngineState::Uninitialized => {
                debug!("starting on-board physics");
                self.state = EngineState::Running;
            }
            EngineState::Running => warn!("start() called on a running engine, ignoring"),
            EngineState::Stopped => warn!("start() called on a stopped engine, ignoring"),
        }
    }

    fn stop(&mut self) {
        if self.state != EngineState::Stopped {
            debug!("stopping on-board physics");
        }
        self.state = EngineState::Stopped;
    }

    fn state(&self) -> EngineState {
        self.state
    }

    fn update(&mut self, dt: f64) -> Result<MotorCommands, PhysicsError> {
        if self.state != EngineState::Running {
            return Err(PhysicsError::NotRunning(self.state));
        }
        if dt <= 0.0 || !dt.is_finite() {
            return Err(PhysicsError::InvalidTimestep(dt));
        }
        Ok(self.step(dt.min(MAX_DT)))
    }
}
