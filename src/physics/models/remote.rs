use crate::motor::{MotorCommands, MOTOR_COUNT};
use crate::physics::error::PhysicsError;
use crate::physics::traits::{EngineState, PhysicsEngine};
use crate::transport::{TransportEndpoint, TransportError};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};
use tracing::{debug, warn};

/// One motor-command datagram: MOTOR_COUNT little-endian f64 values.
pub const COMMAND_DATAGRAM_BYTES: usize = MOTOR_COUNT * 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteControlConfig {
    /// Local address the controller process sends motor commands to.
    pub bind: TransportEndpoint,
}

impl Default for RemoteControlConfig {
    fn default() -> Self {
        Self {
            bind: TransportEndpoint::new("0.0.0.0", 5001),
        }
    }
}

/// Vehicle control proxied to an external flight-control process.
///
/// The controller pushes motor-command datagrams at its own cadence over
/// the same transport family used for sensor streaming; `update` drains
/// whatever has arrived since the last tick without blocking and keeps the
/// most recent valid vector. No datagram pending is not an error, the last
/// commands simply carry over (all-zero until the first one lands).
/// Malformed datagrams are logged and dropped.
pub struct RemoteControl {
    socket: UdpSocket,
    state: EngineState,
    last: MotorCommands,
}

impl RemoteControl {
    /// Bind the command socket. Blocking work (bind, resolution) happens
    /// here, once, off the tick path.
    pub fn bind(config: &RemoteControlConfig) -> Result<Self, PhysicsError> {
        let socket = UdpSocket::bind((config.bind.host.as_str(), config.bind.port))
            .map_err(TransportError::SocketError)?;
        socket
            .set_nonblocking(true)
            .map_err(TransportError::SocketError)?;
        Ok(Self {
            socket,
            state: EngineState::Uninitialized,
            last: MotorCommands::zero(),
        })
    }

    /// Actual bound address, useful when configured with port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Drain pending datagrams, keeping the newest valid command vector.
    fn drain_commands(&mut self) {
        let mut buf = [0u8; COMMAND_DATAGRAM_BYTES * 2];
        loop {
            match self.socket.recv(&mut buf) {
                Ok(COMMAND_DATAGRAM_BYTES) => {
                    self.last = decode_commands(&buf[..COMMAND_DATAGRAM_BYTES]);
                }
                Ok(len) => {
                    warn!(len, "dropped malformed motor-command datagram");
                }
                Err(e) if e.kind() == ErrorKind::WouldBlock => break,
                Err(e) => {
                    warn!(error = %e, "command socket receive failed");
                    break;
                }
            }
        }
    }
}

fn decode_commands(buf: &[u8]) -> MotorCommands {
    let mut raw = [0.0; MOTOR_COUNT];
    for (k, value) in raw.iter_mut().enumerate() {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&buf[k * 8..(k + 1) * 8]);
        *value = f64::from_le_bytes(bytes);
    }
    MotorCommands::from_raw(raw)
}

impl PhysicsEngine for RemoteControl {
    fn start(&mut self) {
        match self.state {
            EngineState::Uninitialized => {
                debug!("starting remote control link");
                self.state = EngineState::Running;
            }
            _ => warn!(state = ?self.state, "start() ignored"),
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
        if dt <= 0.0 || !dt.is_finite() {
            return Err(PhysicsError::InvalidTimestep(dt));
        }
        self.drain_commands();
        Ok(self.last)
    }
}
