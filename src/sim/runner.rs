use std::time::Instant;

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::gnc::{Autopilot, Pilot};
use super::event::SessionEvent;
use super::score::Report;
use super::session::Session;
use super::snapshot::Snapshot;

// ---------------------------------------------------------------------------
// Frame clock: real elapsed time between frames, clamped
// ---------------------------------------------------------------------------

/// Measures wall-clock time between display frames and caps it so a stall
/// (window hidden, debugger pause) cannot turn into one huge tick.
#[derive(Debug, Clone)]
pub struct FrameClock {
    max_dt: f64,
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self { max_dt, last: None }
    }

    /// Seconds since the previous call, in [0, max_dt]. The first call
    /// after construction or [`FrameClock::reset`] returns 0.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = self.last.map_or(0.0, |last| now.duration_since(last).as_secs_f64());
        self.last = Some(now);
        dt.min(self.max_dt)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

// ---------------------------------------------------------------------------
// Headless driver
// ---------------------------------------------------------------------------

/// Everything a headless run produced.
#[derive(Debug, Clone)]
pub struct Run {
    /// Snapshot after every tick, starting with the initial one.
    pub trace: Vec<Snapshot>,
    pub events: Vec<SessionEvent>,
    pub report: Report,
}

/// Run a full session at a fixed frame interval with a custom pilot.
pub fn simulate_with(
    config: SimConfig,
    pilot: &mut dyn Pilot,
    frame_dt: f64,
) -> Result<Run, ConfigError> {
    if !(frame_dt > 0.0) {
        return Err(ConfigError::NonPositive { name: "frame_dt", value: frame_dt });
    }
    let mut session = Session::start(config)?;
    pilot.reset();
    log::info!("pilot {} flying at {:.1} Hz", pilot.name(), 1.0 / frame_dt);

    let ticks = (session.config().session_length / frame_dt.min(session.config().max_dt)) as usize + 2;
    let mut trace = Vec::with_capacity(ticks.min(200_000));
    let mut events = Vec::new();

    let mut snapshot = session.snapshot();
    trace.push(snapshot);

    loop {
        let controls = pilot.controls(&snapshot, frame_dt);
        let event = session.tick(&controls, frame_dt);
        snapshot = session.snapshot();
        trace.push(snapshot);

        match event {
            Some(SessionEvent::Ended(report)) => {
                events.push(SessionEvent::Ended(report.clone()));
                return Ok(Run { trace, events, report });
            }
            Some(e) => events.push(e),
            None => {}
        }
    }
}

/// Run a full session flown by the default [`Autopilot`].
pub fn simulate(config: SimConfig, frame_dt: f64) -> Result<Run, ConfigError> {
    let mut pilot = Autopilot::new();
    simulate_with(config, &mut pilot, frame_dt)
}
