use super::error::StreamError;
use super::frame::{FrameGeometry, SensorFrame, ShortStripPolicy};
use crate::transport::DatagramSink;
use tracing::warn;

/// Fragments one frame per tick into fixed-height strips and pushes each
/// strip through the transport, synchronously and in row-major order.
///
/// There is no cross-tick buffering and no back-pressure: if the network
/// cannot keep up, strips are lost rather than queued, which bounds the
/// latency seen by the receiver.
pub struct SensorStreamer<S: DatagramSink> {
    sink: S,
    geometry: FrameGeometry,
    policy: ShortStripPolicy,
}

impl<S: DatagramSink> SensorStreamer<S> {
    pub fn new(sink: S, geometry: FrameGeometry, policy: ShortStripPolicy) -> Self {
        Self {
            sink,
            geometry,
            policy,
        }
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    /// Send `frame` as strips of `strip_height` rows, first row first.
    ///
    /// Returns the number of datagrams handed to the socket. A transport
    /// failure on one strip is logged and the remaining strips are still
    /// attempted; loss never aborts the push. The only errors returned are
    /// contract violations caught before any byte is sent.
    pub fn push(&mut self, frame: &SensorFrame<'_>) -> Result<usize, StreamError> {
        if frame.geometry() != &self.geometry {
            return Err(StreamError::GeometryMismatch {
                expected: self.geometry.frame_bytes(),
                actual: frame.geometry().frame_bytes(),
            });
        }
        if self.geometry.remainder_rows() != 0 && self.policy == ShortStripPolicy::Reject {
            return Err(StreamError::IndivisibleRows {
                rows: self.geometry.rows,
                strip_height: self.geometry.strip_height,
            });
        }

        let strip_bytes = self.geometry.strip_bytes();
        let bytes = frame.as_bytes();
        let mut sent = 0usize;

        for strip in bytes.chunks(strip_bytes) {
            let delivered = if strip.len() == strip_bytes {
                self.sink.send_datagram(strip)
            } else {
                match self.policy {
                    ShortStripPolicy::Truncate => self.sink.send_datagram(strip),
                    ShortStripPolicy::ZeroPad => {
                        let mut padded = vec![0u8; strip_bytes];
                        padded[..strip.len()].copy_from_slice(strip);
                        self.sink.send_datagram(&padded)
                    }
                    // Checked above
                    ShortStripPolicy::Reject => unreachable!(),
                }
            };
            match delivered {
                Ok(()) => sent += 1,
                Err(e) => warn!(error = %e, "dropped sensor strip"),
            }
        }

        Ok(sent)
    }
}
