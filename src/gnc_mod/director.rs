use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::dynamics::state::{heading_error, AircraftState};
use crate::mission::TargetState;
use super::display::{lerp, lerp_angle, DisplayState};

// ---------------------------------------------------------------------------
// Flight director: target-vs-actual error -> 2D command cue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorConfig {
    pub altitude_gain: f64,      // cue units per ft of altitude error
    pub heading_gain: f64,       // cue units per deg of heading error
    pub deflection_limit: f64,   // |cue| clamp on each axis
    pub fd_smoothing: f64,       // per-tick lerp factor for the cue
    pub attitude_smoothing: f64, // roll/pitch readouts
    pub tape_smoothing: f64,     // speed/altitude/heading readouts
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            altitude_gain: 0.2,
            heading_gain: 3.0,
            deflection_limit: 100.0,
            fd_smoothing: 0.15,
            attitude_smoothing: 0.15,
            tape_smoothing: 0.1,
        }
    }
}

/// Errors and the unsmoothed cue for a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guidance {
    pub altitude_error: f64, // target - actual, ft
    pub heading_error: f64,  // target - actual, deg, (-180, 180]
    pub speed_error: f64,    // target - actual, kt
    /// Raw cue: x = heading_error * heading_gain (positive steers right),
    /// y = -altitude_error * altitude_gain (negative commands a climb).
    pub command: Vector2<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct FlightDirector {
    pub config: DirectorConfig,
}

impl FlightDirector {
    pub fn new(config: DirectorConfig) -> Self {
        Self { config }
    }

    pub fn compute(&self, state: &AircraftState, target: &TargetState) -> Guidance {
        let altitude_error = target.altitude - state.altitude;
        let heading_error = heading_error(state.heading, target.heading);
        let speed_error = target.speed - state.airspeed;

        let command = Vector2::new(
            heading_error * self.config.heading_gain,
            -altitude_error * self.config.altitude_gain,
        );

        Guidance {
            altitude_error,
            heading_error,
            speed_error,
            command,
        }
    }

    /// Ease the displayed cue and instrument readouts one tick toward the
    /// current values. Factors are per tick, not per second.
    pub fn smooth(&self, display: &mut DisplayState, state: &AircraftState, guidance: &Guidance) {
        let c = &self.config;
        let limit = c.deflection_limit;

        let eased = display.fd + (guidance.command - display.fd) * c.fd_smoothing;
        display.fd = eased.map(|v| v.clamp(-limit, limit));

        display.roll = lerp(display.roll, state.roll, c.attitude_smoothing);
        display.pitch = lerp(display.pitch, state.pitch, c.attitude_smoothing);
        display.speed = lerp(display.speed, state.airspeed, c.tape_smoothing);
        display.altitude = lerp(display.altitude, state.altitude, c.tape_smoothing);
        display.heading = lerp_angle(display.heading, state.heading, c.tape_smoothing);
    }

    /// Compute the cue for this tick and fold it into the display.
    pub fn update(
        &self,
        display: &mut DisplayState,
        state: &AircraftState,
        target: &TargetState,
    ) -> Guidance {
        let guidance = self.compute(state, target);
        self.smooth(display, state, &guidance);
        guidance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_error_drives_horizontal_cue() {
        let fd = FlightDirector::default();
        let state = AircraftState { heading: 270.0, ..AircraftState::default() };
        let target = TargetState { heading: 280.0, ..TargetState::hold(&state) };

        let g = fd.compute(&state, &target);
        assert!((g.command.x - 30.0).abs() < 1e-12);
        assert_eq!(g.command.y, 0.0);

        let mut display = DisplayState::from(&state);
        fd.smooth(&mut display, &state, &g);
        assert!((display.fd.x - 4.5).abs() < 1e-12);
    }

    #[test]
    fn climb_target_gives_negative_vertical_cue() {
        let fd = FlightDirector::default();
        let state = AircraftState::default();
        let target = TargetState { altitude: state.altitude + 500.0, ..TargetState::hold(&state) };
        let g = fd.compute(&state, &target);
        assert!((g.altitude_error - 500.0).abs() < 1e-12);
        assert!((g.command.y + 100.0).abs() < 1e-12);
    }

    #[test]
    fn displayed_cue_is_clamped() {
        let fd = FlightDirector::default();
        let state = AircraftState::default();
        let target = TargetState { altitude: state.altitude - 5_000.0, ..TargetState::hold(&state) };
        let mut display = DisplayState::from(&state);
        for _ in 0..200 {
            fd.update(&mut display, &state, &target);
        }
        // raw cue is +1000, display saturates at the limit
        assert_eq!(display.fd.y, 100.0);
    }

    #[test]
    fn heading_readout_takes_short_path_through_north() {
        let fd = FlightDirector::default();
        let state = AircraftState { heading: 10.0, ..AircraftState::default() };
        let mut display = DisplayState { heading: 350.0, ..DisplayState::from(&state) };
        let g = fd.compute(&state, &TargetState::hold(&state));
        fd.smooth(&mut display, &state, &g);
        assert!((display.heading - 352.0).abs() < 1e-9);
    }
}
