use serde::{Deserialize, Serialize};

/// Gains for the altitude-hold loop: an outer position P term cascaded
/// into an inner velocity PI term, with the integral clamped to bound
/// windup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AltitudeHoldConfig {
    /// Altitude setpoint [m].
    pub target: f64,
    pub pos_p: f64,
    pub vel_p: f64,
    pub vel_i: f64,
    pub windup_max: f64,
}

impl Default for AltitudeHoldConfig {
    fn default() -> Self {
        Self {
            target: 10.0,
            pos_p: 0.2,
            vel_p: 1.0,
            vel_i: 0.1,
            windup_max: 10.0,
        }
    }
}

/// Cascaded altitude-hold controller.
#[derive(Debug)]
pub struct AltitudeHold {
    config: AltitudeHoldConfig,
    integral_error: f64,
}

impl AltitudeHold {
    pub fn new(config: AltitudeHoldConfig) -> Self {
        Self {
            config,
            integral_error: 0.0,
        }
    }

    /// Reset in-flight accumulators, keeping the gains.
    pub fn reset(&mut self) {
        self.integral_error = 0.0;
    }

    #[cfg(test)]
    pub(crate) fn integral_error(&self) -> f64 {
        self.integral_error
    }

    /// Control output for the current altitude and climb rate. Unbounded;
    /// the caller maps it into the actuator range.
    pub fn update(&mut self, altitude: f64, climb_rate: f64, dt: f64) -> f64 {
        let vel_target = (self.config.target - altitude) * self.config.pos_p;
        let vel_error = vel_target - climb_rate;

        self.integral_error = constrain_abs(
            self.integral_error + vel_error * dt,
            self.config.windup_max,
        );

        self.config.vel_p * vel_error + self.config.vel_i * self.integral_error
    }
}

fn constrain_abs(x: f64, limit: f64) -> f64 {
    x.clamp(-limit, limit)
}
