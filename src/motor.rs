use serde::{Deserialize, Serialize};

/// Number of motors on the vehicle.
pub const MOTOR_COUNT: usize = 4;

/// Spin direction of each motor, in motor order. Alternating signs keep
/// net torque near zero on a quad-X airframe.
pub const MOTOR_DIRECTIONS: [f64; MOTOR_COUNT] = [1.0, -1.0, 1.0, -1.0];

/// Degrees of visual prop rotation per animation update at full throttle.
pub const PROP_DEGREES_PER_TICK: f64 = 240.0;

/// One tick's actuator outputs, normalized to [0, 1] per motor.
///
/// Produced exactly once per physics update and superseded on the next
/// tick; the values are the authoritative ground truth echoed back to the
/// host for animation and audio feedback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorCommands([f64; MOTOR_COUNT]);

impl MotorCommands {
    /// Build a command vector from raw controller output, clamping each
    /// entry into [0, 1]. Clamping here fixes the normalization boundary:
    /// everything downstream sees post-normalization values.
    pub fn from_raw(raw: [f64; MOTOR_COUNT]) -> Self {
        Self(raw.map(|v| v.clamp(0.0, 1.0)))
    }

    pub fn zero() -> Self {
        Self([0.0; MOTOR_COUNT])
    }

    pub fn values(&self) -> &[f64; MOTOR_COUNT] {
        &self.0
    }

    /// Aggregate scalar used for the audio pitch/volume cue.
    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / MOTOR_COUNT as f64
    }

    /// Per-motor visual spin rates for the animation collaborator:
    /// throttle scaled by spin direction and the per-update rotation
    /// constant. Animation-only; never feeds back into command values.
    pub fn spin_rates(&self) -> [f64; MOTOR_COUNT] {
        let mut rates = [0.0; MOTOR_COUNT];
        for (k, rate) in rates.iter_mut().enumerate() {
            *rate = self.0[k] * MOTOR_DIRECTIONS[k] * PROP_DEGREES_PER_TICK;
        }
        rates
    }
}
