use nalgebra::Vector2;

use crate::dynamics::state::{normalize_heading, AircraftState};

/// Smoothed values the instruments draw from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    pub roll: f64,
    pub pitch: f64,
    pub speed: f64,
    pub altitude: f64,
    pub heading: f64,
    /// Flight director cue, each axis in [-deflection_limit, deflection_limit].
    pub fd: Vector2<f64>,
}

impl From<&AircraftState> for DisplayState {
    fn from(s: &AircraftState) -> Self {
        Self {
            roll: s.roll,
            pitch: s.pitch,
            speed: s.airspeed,
            altitude: s.altitude,
            heading: s.heading,
            fd: Vector2::zeros(),
        }
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate between headings along the shorter arc; result in [0, 360).
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let mut d = b - a;
    if d > 180.0 {
        d -= 360.0;
    }
    if d < -180.0 {
        d += 360.0;
    }
    normalize_heading(a + d * t)
}
