use chrono::{DateTime, Utc};

/// Monotonic tick counter plus a wall-clock sample, advanced once per
/// tick. Owned by the orchestrator so low-frequency side effects can be
/// derived without per-effect timers or hidden global counters.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    ticks: u64,
    elapsed: f64,
    started: DateTime<Utc>,
    now: DateTime<Utc>,
}

impl SimulationClock {
    pub fn new() -> Self {
        let started = Utc::now();
        Self {
            ticks: 0,
            elapsed: 0.0,
            started,
            now: started,
        }
    }

    /// Record one tick of `dt` simulated seconds. Samples the wall clock
    /// exactly once.
    pub fn advance(&mut self, dt: f64) {
        self.ticks += 1;
        self.elapsed += dt;
        self.now = Utc::now();
    }

    /// Ticks advanced so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated seconds accumulated across all ticks.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn started(&self) -> DateTime<Utc> {
        self.started
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Decimation predicate: true on every `k`-th tick, counted from the
    /// first `advance`. `k = 0` never fires.
    pub fn every(&self, k: u32) -> bool {
        k != 0 && self.ticks % k as u64 == 0
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}
