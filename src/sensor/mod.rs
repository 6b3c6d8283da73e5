mod error;
mod frame;
mod streamer;

pub use error::StreamError;
pub use frame::{FrameGeometry, SensorFrame, ShortStripPolicy};
pub use streamer::SensorStreamer;
