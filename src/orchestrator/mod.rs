mod effects;

pub use effects::{NullEffects, VehicleEffects};

use crate::clock::SimulationClock;
use crate::physics::PhysicsEngine;
use crate::sensor::{SensorFrame, SensorStreamer};
use crate::transport::DatagramSink;
use tracing::{trace, warn};

/// On-screen lifetime hint for debug text, in seconds.
const DEBUG_TEXT_SECS: f32 = 5.0;

/// The single per-frame entry point the host engine drives.
///
/// Sequences physics, feedback effects and sensor streaming for one tick,
/// and enforces the two rules the host relies on: never block, and never
/// let a failure escape. Everything below this boundary is absorbed and
/// logged so the host's own per-frame bookkeeping always completes.
pub struct TickOrchestrator<M, E, S>
where
    M: PhysicsEngine,
    E: VehicleEffects,
    S: DatagramSink,
{
    manager: M,
    effects: E,
    streamer: Option<SensorStreamer<S>>,
    clock: SimulationClock,
    animation_decimation: u32,
    armed: bool,
}

impl<M, E, S> TickOrchestrator<M, E, S>
where
    M: PhysicsEngine,
    E: VehicleEffects,
    S: DatagramSink,
{
    pub fn new(
        manager: M,
        effects: E,
        streamer: Option<SensorStreamer<S>>,
        animation_decimation: u32,
    ) -> Self {
        Self {
            manager,
            effects,
            streamer,
            clock: SimulationClock::new(),
            animation_decimation,
            armed: false,
        }
    }

    /// Arm the simulation: start the flight manager and begin ticking.
    /// Until armed, `on_tick` is a deliberate no-op (the "no scenario
    /// selected" degraded mode).
    pub fn arm(&mut self) {
        if self.armed {
            return;
        }
        self.manager.start();
        self.armed = true;
    }

    /// Stop the flight manager. Idempotent, and safe before `arm`.
    pub fn disarm(&mut self) {
        self.manager.stop();
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// Advance one render frame of `dt` seconds, streaming `frame` if the
    /// sensor path is enabled. Never blocks, never panics past this
    /// boundary; all downstream failures are logged and the tick completes.
    pub fn on_tick(&mut self, dt: f64, frame: Option<&SensorFrame<'_>>) {
        if !self.armed {
            trace!("tick skipped: simulation not armed");
            return;
        }

        self.clock.advance(dt);

        if dt > 0.0 {
            self.effects
                .debug_text(&format!("Main thread FPS: {}", (1.0 / dt) as u32), DEBUG_TEXT_SECS);
        }

        match self.manager.update(dt) {
            Ok(commands) => {
                self.effects.audio_cue(commands.mean());
                if self.clock.every(self.animation_decimation) {
                    self.effects.animate_rotors(&commands.spin_rates());
                }
            }
            Err(e) => warn!(error = %e, "physics update failed"),
        }

        if let (Some(streamer), Some(frame)) = (self.streamer.as_mut(), frame) {
            if let Err(e) = streamer.push(frame) {
                warn!(error = %e, "sensor push failed");
            }
        }
    }
}
