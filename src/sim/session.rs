use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::dynamics::{self, AircraftState, ControlSet};
use crate::dynamics::state::normalize_heading;
use crate::error::ConfigError;
use crate::gnc::{DisplayState, FlightDirector};
use crate::mission::{generate_targets, TargetState};
use super::capture::CaptureMonitor;
use super::event::SessionEvent;
use super::score::{self, Report, SessionState};
use super::snapshot::{Phase, Snapshot};

// ---------------------------------------------------------------------------
// Session: owns every piece of simulation state and advances it per tick
// ---------------------------------------------------------------------------

/// One timed trainer session.
///
/// A tick runs: countdown -> dynamics -> flight director -> capture check
/// -> scoring. Once the countdown reaches zero the session is `Ended` and
/// every further tick is ignored until [`Session::restart`].
#[derive(Debug, Clone)]
pub struct Session {
    config: SimConfig,
    seed: u64,
    rng: ChaCha8Rng,
    director: FlightDirector,
    aircraft: AircraftState,
    targets: TargetState,
    display: DisplayState,
    state: SessionState,
    capture: CaptureMonitor,
    phase: Phase,
    captures: u32,
    elapsed: f64,
    report: Option<Report>,
}

impl Session {
    /// Validate `config` and begin a running session with fresh targets.
    pub fn start(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let aircraft = AircraftState::at(&config.initial);
        let mut session = Session {
            director: FlightDirector::new(config.director),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            aircraft,
            targets: TargetState::hold(&aircraft),
            display: DisplayState::from(&aircraft),
            state: SessionState::new(config.session_length),
            capture: CaptureMonitor::new(),
            phase: Phase::Running,
            captures: 0,
            elapsed: 0.0,
            report: None,
            config,
        };
        session.reinitialize();
        Ok(session)
    }

    /// Throw away all progress and start over. The RNG stream continues, so a
    /// restart gets different targets than the first run.
    pub fn restart(&mut self) {
        self.reinitialize();
    }

    fn reinitialize(&mut self) {
        self.aircraft = AircraftState::at(&self.config.initial);
        self.display = DisplayState::from(&self.aircraft);
        self.state = SessionState::new(self.config.session_length);
        self.capture.reset();
        self.phase = Phase::Running;
        self.captures = 0;
        self.elapsed = 0.0;
        self.report = None;
        self.targets = self.next_targets();

        log::info!(
            "session start: seed {} targets alt {:.0} ft hdg {:.0} spd {:.0} kt",
            self.seed,
            self.targets.altitude,
            self.targets.heading,
            self.targets.speed
        );
    }

    fn next_targets(&mut self) -> TargetState {
        generate_targets(&mut self.rng, &self.aircraft, &self.config.flight, &self.config.targets)
    }

    /// Advance one tick with the given held controls.
    ///
    /// Non-positive (or NaN) `dt` is skipped; `dt` above `max_dt` is clamped.
    pub fn tick(&mut self, controls: &ControlSet, dt: f64) -> Option<SessionEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        if !(dt > 0.0) {
            log::trace!("skipping tick with dt {}", dt);
            return None;
        }
        let dt = dt.min(self.config.max_dt);

        // --- Countdown ---
        self.state.time_remaining -= dt;
        self.elapsed += dt;
        if self.state.time_remaining <= 0.0 {
            return Some(SessionEvent::Ended(self.finish()));
        }

        // --- Dynamics ---
        self.aircraft = dynamics::step(&self.aircraft, controls, dt, &self.config.flight);

        // --- Flight director + display smoothing ---
        let guidance = self.director.update(&mut self.display, &self.aircraft, &self.targets);

        // --- Capture ---
        let event = if self.capture.check(&self.config.capture, &guidance, dt) {
            let previous = self.targets;
            self.targets = self.next_targets();
            self.captures += 1;
            log::debug!(
                "capture #{} at {:.2}s, next alt {:.0} hdg {:.0} spd {:.0}",
                self.captures,
                self.elapsed,
                self.targets.altitude,
                self.targets.heading,
                self.targets.speed
            );
            Some(SessionEvent::Captured { elapsed: self.elapsed, previous, next: self.targets })
        } else {
            None
        };

        // --- Scoring ---
        self.state.record(score::accuracy(&self.display.fd), dt);

        event
    }

    fn finish(&mut self) -> Report {
        self.phase = Phase::Ended;
        let report = Report {
            score: self.state.score,
            accuracy: self.state.final_accuracy(),
            rating: self.state.rating(),
            captures: self.captures,
            elapsed: self.elapsed,
            seed: self.seed,
        };
        log::info!(
            "session end: score {} accuracy {:.0}% rating {} captures {}",
            report.score,
            report.accuracy,
            report.rating,
            report.captures
        );
        self.report = Some(report.clone());
        report
    }

    /// Replace the selected targets, e.g. for a scripted drill. Values are
    /// brought into range and any hold in progress is dropped.
    pub fn set_targets(&mut self, targets: TargetState) {
        let flight = &self.config.flight;
        self.targets = TargetState {
            altitude: flight.altitude_range.clamp(targets.altitude),
            heading: normalize_heading(targets.heading),
            speed: flight.speed_range.clamp(targets.speed),
        };
        self.capture.reset();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            display: self.display,
            targets: self.targets,
            time_remaining: self.state.time_remaining,
            elapsed: self.elapsed,
            score: self.state.score,
            average_accuracy: self.state.average_accuracy().unwrap_or(100.0),
            stabilized: self.capture.stabilized(),
            captures: self.captures,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn aircraft(&self) -> &AircraftState {
        &self.aircraft
    }

    pub fn targets(&self) -> &TargetState {
        &self.targets
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn stabilized(&self) -> f64 {
        self.capture.stabilized()
    }

    pub fn captures(&self) -> u32 {
        self.captures
    }

    /// Final report, present once the session has ended.
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }
}
