use std::env;
use std::time::{Duration, Instant};

use rotorsim::{
    BridgeConfig, FlightManager, FrameTransport, SensorFrame, SensorStreamer, TickOrchestrator,
    VehicleEffects, MOTOR_COUNT,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Host cadence for the headless loop.
const TICK_RATE_HZ: f64 = 60.0;

/// Feedback sink that reports into the log instead of a render engine.
#[derive(Default)]
struct LogEffects;

impl VehicleEffects for LogEffects {
    fn audio_cue(&mut self, level: f64) {
        debug!(level, "audio cue");
    }

    fn animate_rotors(&mut self, rates: &[f64; MOTOR_COUNT]) {
        debug!(?rates, "rotor animation");
    }

    fn debug_text(&mut self, message: &str, _seconds: f32) {
        debug!("{message}");
    }
}

/// Paint a synthetic test frame: a gradient that scrolls with the tick so
/// a receiver can see motion and spot dropped strips.
fn paint_frame(buf: &mut [u8], row_bytes: usize, tick: u64) {
    for (i, byte) in buf.iter_mut().enumerate() {
        let row = i / row_bytes;
        *byte = (row as u64 + tick) as u8;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading bridge config");
            BridgeConfig::from_yaml_file(&path)?
        }
        None => BridgeConfig::default(),
    };
    config.validate()?;

    let manager = FlightManager::from_config(&config.control)?;

    let streamer = match &config.sensor {
        Some(sensor) => {
            info!(endpoint = ?sensor.endpoint, "streaming imagery");
            let transport = FrameTransport::bind(sensor.endpoint.clone())?;
            Some(SensorStreamer::new(
                transport,
                sensor.geometry,
                sensor.short_strip,
            ))
        }
        None => None,
    };
    let geometry = config.sensor.as_ref().map(|s| s.geometry);

    let mut orchestrator = TickOrchestrator::new(
        manager,
        LogEffects,
        streamer,
        config.animation_decimation,
    );
    orchestrator.arm();

    let mut frame_buf = geometry.map(|g| vec![0u8; g.frame_bytes()]);
    let tick_period = Duration::from_secs_f64(1.0 / TICK_RATE_HZ);
    let mut last_tick = Instant::now();

    info!("bridge running at {TICK_RATE_HZ} Hz, ctrl-c to exit");
    loop {
        std::thread::sleep(tick_period.saturating_sub(last_tick.elapsed()));
        let now = Instant::now();
        let dt = (now - last_tick).as_secs_f64();
        last_tick = now;

        match (&mut frame_buf, geometry) {
            (Some(buf), Some(geometry)) => {
                paint_frame(buf, geometry.row_bytes(), orchestrator.clock().ticks());
                let frame = SensorFrame::new(geometry, buf)?;
                orchestrator.on_tick(dt, Some(&frame));
            }
            _ => orchestrator.on_tick(dt, None),
        }

        if let FlightManager::LocalPhysics(quad) = orchestrator.manager() {
            if orchestrator.clock().every(60) {
                info!(
                    "vehicle state: altitude {:.2} m, climb {:.2} m/s",
                    quad.altitude(),
                    quad.climb_rate()
                );
            }
        }
    }
}
