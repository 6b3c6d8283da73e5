use crate::motor::MOTOR_COUNT;

/// Host-side feedback collaborators: the render/audio layer the bridge
/// reports into. All methods are fire-and-forget from the core's point of
/// view; whatever the host does with them is out of scope.
pub trait VehicleEffects {
    /// Aggregate motor level for the propeller pitch/volume cue.
    fn audio_cue(&mut self, level: f64);

    /// Per-motor visual spin rates, forwarded on decimated ticks only.
    fn animate_rotors(&mut self, rates: &[f64; MOTOR_COUNT]);

    /// On-screen debug text with a display-duration hint.
    fn debug_text(&mut self, message: &str, seconds: f32);
}

/// Effects sink that discards everything, for headless operation.
#[derive(Debug, Default)]
pub struct NullEffects;

impl VehicleEffects for NullEffects {
    fn audio_cue(&mut self, _level: f64) {}

    fn animate_rotors(&mut self, _rates: &[f64; MOTOR_COUNT]) {}

    fn debug_text(&mut self, _message: &str, _seconds: f32) {}
}
