use crate::motor::MotorCommands;
use crate::physics::error::PhysicsError;

/// Lifecycle of a physics engine.
///
/// `Uninitialized -> Running -> Stopped`, entered at construction,
/// `start()` and `stop()` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Running,
    Stopped,
}

/// Per-tick simulation stepper.
///
/// `update` is driven by the host render loop, so `dt` is variable and
/// non-uniform; implementations must stay numerically bounded across frame
/// hitches rather than diverge. All calls are synchronous and must not
/// block: any blocking setup (socket binds, name resolution) belongs in
/// the constructor, off the tick path.
pub trait PhysicsEngine {
    /// Transition to Running. A second `start` is a logged no-op.
    fn start(&mut self);

    /// Transition to Stopped. Idempotent, and safe to call even if
    /// `start` was never reached.
    fn stop(&mut self);

    fn state(&self) -> EngineState;

    /// Advance the vehicle by `dt` seconds and return the resulting motor
    /// command vector. Calling outside Running returns
    /// [`PhysicsError::NotRunning`]; it never panics.
    fn update(&mut self, dt: f64) -> Result<MotorCommands, PhysicsError>;
}
