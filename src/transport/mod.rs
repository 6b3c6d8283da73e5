mod error;

pub use error::TransportError;

use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

/// Largest payload a single UDP datagram can carry (IPv4, after headers).
pub const MAX_DATAGRAM_BYTES: usize = 65_507;

/// An immutable (host, port) pair identifying one logical stream.
///
/// Name resolution happens once, at [`FrameTransport::bind`]; nothing on the
/// tick path ever touches DNS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportEndpoint {
    pub host: String,
    pub port: u16,
}

impl TransportEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    fn resolve(&self) -> Result<SocketAddr, TransportError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| TransportError::Unresolvable(format!("{}:{}", self.host, self.port)))
    }
}

/// Anything that can carry one datagram. The seam that lets the sensor
/// streamer run against a recording sink in tests.
pub trait DatagramSink {
    fn send_datagram(&mut self, buf: &[u8]) -> Result<(), TransportError>;
}

/// Fire-and-forget datagram sender bound to a single endpoint.
///
/// One socket per logical stream, opened once at startup. `send` is
/// best-effort: there is no retry, no acknowledgment and no delivery
/// signal. Callers on the tick path must treat a send failure as loss,
/// not as a fatal condition.
#[derive(Debug)]
pub struct FrameTransport {
    socket: UdpSocket,
    endpoint: TransportEndpoint,
}

impl FrameTransport {
    /// Open a UDP socket and associate it with `endpoint`.
    ///
    /// This is the only blocking call in the module; do it during setup,
    /// never from the tick callback.
    pub fn bind(endpoint: TransportEndpoint) -> Result<Self, TransportError> {
        let addr = endpoint.resolve()?;
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect(addr)?;
        socket.set_nonblocking(true)?;
        Ok(Self { socket, endpoint })
    }

    pub fn endpoint(&self) -> &TransportEndpoint {
        &self.endpoint
    }

    /// Send one datagram containing `buf`.
    ///
    /// Payloads over [`MAX_DATAGRAM_BYTES`] are rejected locally without
    /// touching the socket. A full OS send buffer (`WouldBlock`) surfaces
    /// as an error too; the datagram is simply lost, which is within the
    /// transport's contract.
    pub fn send(&self, buf: &[u8]) -> Result<(), TransportError> {
        if buf.len() > MAX_DATAGRAM_BYTES {
            return Err(TransportError::OversizedPayload {
                len: buf.len(),
                max: MAX_DATAGRAM_BYTES,
            });
        }
        let sent = self.socket.send(buf)?;
        if sent != buf.len() {
            return Err(TransportError::ShortSend {
                sent,
                expected: buf.len(),
            });
        }
        Ok(())
    }
}

impl DatagramSink for FrameTransport {
    fn send_datagram(&mut self, buf: &[u8]) -> Result<(), TransportError> {
        self.send(buf)
    }
}
