use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Closed interval used for every bounded quantity (speed, altitude, offsets)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Wrap a heading into [0, 360).
pub fn normalize_heading(deg: f64) -> f64 {
    let h = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Signed shortest-path difference `to - from`, in (-180, 180].
pub fn heading_error(from: f64, to: f64) -> f64 {
    let mut e = to - from;
    if e > 180.0 {
        e -= 360.0;
    }
    if e <= -180.0 {
        e += 360.0;
    }
    e
}

// ---------------------------------------------------------------------------
// Aircraft state: attitude, attitude rates, speed, heading, altitude
// ---------------------------------------------------------------------------

/// Sign convention: positive roll banks right; negative pitch is nose up
/// (altitude rises while pitch < 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    pub roll: f64,           // deg, ±max_roll
    pub pitch: f64,          // deg, ±max_pitch
    pub roll_velocity: f64,  // deg/tick
    pub pitch_velocity: f64, // deg/tick
    pub airspeed: f64,       // kt
    pub heading: f64,        // deg, [0, 360)
    pub altitude: f64,       // ft
}

impl AircraftState {
    /// Wings level, zero rates, at the configured initial speed/heading/altitude.
    pub fn at(initial: &InitialConditions) -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            roll_velocity: 0.0,
            pitch_velocity: 0.0,
            airspeed: initial.airspeed,
            heading: normalize_heading(initial.heading),
            altitude: initial.altitude,
        }
    }
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::at(&InitialConditions::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    pub airspeed: f64,
    pub heading: f64,
    pub altitude: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            airspeed: 320.0,
            heading: 270.0,
            altitude: 25_000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Flight model tuning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub roll_acceleration: f64,  // deg/tick added per held tick
    pub pitch_acceleration: f64, // deg/tick added per held tick
    pub damping: f64,            // per-tick velocity retention
    pub max_roll_velocity: f64,
    pub max_pitch_velocity: f64,
    pub speed_rate: f64,         // kt per held tick
    pub max_roll: f64,           // deg
    pub max_pitch: f64,          // deg
    pub turn_rate: f64,          // deg/s of heading change per deg of bank
    pub climb_rate: f64,         // ft/s of altitude change per deg of pitch
    pub speed_range: Bounds,     // kt
    pub altitude_range: Bounds,  // ft
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            roll_acceleration: 0.04,
            pitch_acceleration: 0.03,
            damping: 0.97,
            max_roll_velocity: 1.2,
            max_pitch_velocity: 1.0,
            speed_rate: 0.8,
            max_roll: 60.0,
            max_pitch: 25.0,
            turn_rate: 0.3,
            climb_rate: 50.0,
            speed_range: Bounds::new(250.0, 400.0),
            altitude_range: Bounds::new(20_000.0, 32_000.0),
        }
    }
}
