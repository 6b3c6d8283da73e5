mod error;

pub use error::ConfigError;

use crate::physics::{QuadPhysicsConfig, RemoteControlConfig};
use crate::sensor::{FrameGeometry, ShortStripPolicy};
use crate::transport::TransportEndpoint;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which control strategy flies the vehicle, chosen once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ControlConfig {
    /// Fly on the on-board physics model.
    Local { physics: QuadPhysicsConfig },
    /// Fly on motor commands from an external controller process.
    Remote { control: RemoteControlConfig },
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::Local {
            physics: QuadPhysicsConfig::default(),
        }
    }
}

/// Imagery stream settings: where strips go and how the frame is cut.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    pub endpoint: TransportEndpoint,
    #[serde(default)]
    pub geometry: FrameGeometry,
    #[serde(default)]
    pub short_strip: ShortStripPolicy,
}

impl Default for SensorConfig {
    /// Image stream to localhost:5002, the conventional imagery port.
    fn default() -> Self {
        Self {
            endpoint: TransportEndpoint::new("127.0.0.1", 5002),
            geometry: FrameGeometry::default(),
            short_strip: ShortStripPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub control: ControlConfig,
    /// Imagery streaming is optional; `None` disables the sensor path.
    #[serde(default)]
    pub sensor: Option<SensorConfig>,
    /// Forward per-motor animation values every K-th tick.
    #[serde(default = "default_animation_decimation")]
    pub animation_decimation: u32,
}

fn default_animation_decimation() -> u32 {
    2
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            control: ControlConfig::default(),
            sensor: Some(SensorConfig::default()),
            animation_decimation: default_animation_decimation(),
        }
    }
}

impl BridgeConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value.clone())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_decimation == 0 {
            return Err(ConfigError::ValidationError(
                "animation_decimation must be at least 1".to_string(),
            ));
        }
        if let Some(sensor) = &self.sensor {
            sensor
                .geometry
                .validate()
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }
        if let ControlConfig::Local { physics } = &self.control {
            physics
                .validate()
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }
        Ok(())
    }
}
