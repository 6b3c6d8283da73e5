use super::error::StreamError;
use crate::transport::MAX_DATAGRAM_BYTES;
use serde::{Deserialize, Serialize};

/// Pixel-buffer layout shared out-of-band with the stream receiver.
///
/// The wire carries raw pixel bytes with no framing, so both ends must
/// agree on this geometry ahead of time. It is therefore part of the
/// configuration contract, not in-band metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameGeometry {
    pub rows: u32,
    pub cols: u32,
    pub bytes_per_pixel: u32,
    pub strip_height: u32,
}

impl FrameGeometry {
    pub fn new(
        rows: u32,
        cols: u32,
        bytes_per_pixel: u32,
        strip_height: u32,
    ) -> Result<Self, StreamError> {
        let geometry = Self {
            rows,
            cols,
            bytes_per_pixel,
            strip_height,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        if self.rows == 0 || self.cols == 0 || self.bytes_per_pixel == 0 {
            return Err(StreamError::InvalidGeometry(format!(
                "all dimensions must be nonzero, got {}x{}x{}",
                self.rows, self.cols, self.bytes_per_pixel
            )));
        }
        if self.strip_height == 0 {
            return Err(StreamError::InvalidGeometry(
                "strip height must be nonzero".to_string(),
            ));
        }
        if self.strip_bytes() > MAX_DATAGRAM_BYTES {
            return Err(StreamError::InvalidGeometry(format!(
                "strip of {} bytes exceeds datagram limit of {}",
                self.strip_bytes(),
                MAX_DATAGRAM_BYTES
            )));
        }
        Ok(())
    }

    /// Bytes in one full-height strip.
    pub fn strip_bytes(&self) -> usize {
        self.strip_height as usize * self.row_bytes()
    }

    /// Bytes in one pixel row.
    pub fn row_bytes(&self) -> usize {
        self.cols as usize * self.bytes_per_pixel as usize
    }

    /// Total bytes in one frame.
    pub fn frame_bytes(&self) -> usize {
        self.rows as usize * self.row_bytes()
    }

    /// Number of full-height strips in one frame.
    pub fn full_strips(&self) -> u32 {
        self.rows / self.strip_height
    }

    /// Rows left over after the last full-height strip.
    pub fn remainder_rows(&self) -> u32 {
        self.rows % self.strip_height
    }
}

impl Default for FrameGeometry {
    /// 480x640 RGBA with 20-row strips: 24 datagrams of 51,200 bytes.
    fn default() -> Self {
        Self {
            rows: 480,
            cols: 640,
            bytes_per_pixel: 4,
            strip_height: 20,
        }
    }
}

/// What to do with the final strip when the row count is not divisible by
/// the strip height. The receiver contract is out-of-band, so the policy
/// must be explicit configuration rather than an implicit assumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortStripPolicy {
    /// Send the short strip as-is (fewer bytes in the last datagram).
    #[default]
    Truncate,
    /// Zero-fill the short strip up to the full strip size.
    ZeroPad,
    /// Refuse to stream frames with indivisible row counts.
    Reject,
}

/// One tick's pixel buffer, borrowed for the duration of the push.
///
/// Borrowing rather than owning enforces the aliasing rule: the streamer
/// cannot retain the buffer past the synchronous call that produced it.
#[derive(Debug)]
pub struct SensorFrame<'a> {
    geometry: FrameGeometry,
    bytes: &'a [u8],
}

impl<'a> SensorFrame<'a> {
    pub fn new(geometry: FrameGeometry, bytes: &'a [u8]) -> Result<Self, StreamError> {
        if bytes.len() != geometry.frame_bytes() {
            return Err(StreamError::FrameSizeMismatch {
                expected: geometry.frame_bytes(),
                actual: bytes.len(),
            });
        }
        Ok(Self { geometry, bytes })
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }
}
