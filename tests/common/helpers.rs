use rotorsim::{
    DatagramSink, EngineState, MotorCommands, PhysicsEngine, PhysicsError, TransportError,
    MOTOR_COUNT,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared capture buffer for datagrams recorded by [`RecordingSink`].
pub type Captured = Rc<RefCell<Vec<Vec<u8>>>>;

/// Datagram sink that records every payload instead of touching a socket.
pub struct RecordingSink {
    captured: Captured,
}

impl RecordingSink {
    pub fn new() -> (Self, Captured) {
        let captured: Captured = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                captured: captured.clone(),
            },
            captured,
        )
    }
}

impl DatagramSink for RecordingSink {
    fn send_datagram(&mut self, buf: &[u8]) -> Result<(), TransportError> {
        self.captured.borrow_mut().push(buf.to_vec());
        Ok(())
    }
}

/// Effects sink that records every collaborator call.
#[derive(Default)]
pub struct RecordingEffects {
    pub audio_cues: Vec<f64>,
    pub animations: Vec<[f64; MOTOR_COUNT]>,
    pub debug_lines: Vec<String>,
}

impl rotorsim::VehicleEffects for RecordingEffects {
    fn audio_cue(&mut self, level: f64) {
        self.audio_cues.push(level);
    }

    fn animate_rotors(&mut self, rates: &[f64; MOTOR_COUNT]) {
        self.animations.push(*rates);
    }

    fn debug_text(&mut self, message: &str, _seconds: f32) {
        self.debug_lines.push(message.to_string());
    }
}

/// Physics engine that replays a scripted command sequence, cycling when
/// the script runs out. Fails every update if `failing` is set.
pub struct ScriptedEngine {
    script: Vec<MotorCommands>,
    cursor: usize,
    state: EngineState,
    pub failing: bool,
    pub updates: usize,
}

impl ScriptedEngine {
    pub fn new(script: Vec<MotorCommands>) -> Self {
        Self {
            script,
            cursor: 0,
            state: EngineState::Uninitialized,
            failing: false,
            updates: 0,
        }
    }

    pub fn constant(values: [f64; MOTOR_COUNT]) -> Self {
        Self::new(vec![MotorCommands::from_raw(values)])
    }
}

impl PhysicsEngine for ScriptedEngine {
    fn start(&mut self) {
        if self.state == EngineState::Uninitialized {
            self.state = EngineState::Running;
        }
    }

    fn stop(&mut self) {
        self.state = EngineState::Stopped;
    }

    fn state(&self) -> EngineState {
        self.state
    }

    fn update(&mut self, dt: f64) -> Result<MotorCommands, PhysicsError> {
        if self.state != EngineState::Running {
            return Err(PhysicsError::NotRunning(self.state));
        }
        if self.failing {
            return Err(PhysicsError::InvalidTimestep(dt));
        }
        self.updates += 1;
        let commands = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        Ok(commands)
    }
}

/// Deterministic frame payload: distinct byte per position, small period
/// so strip boundaries land mid-pattern.
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
