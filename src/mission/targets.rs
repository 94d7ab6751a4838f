use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dynamics::state::{normalize_heading, AircraftState, Bounds, FlightConfig};

// ---------------------------------------------------------------------------
// Selected targets (what the flight director steers toward)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    pub altitude: f64, // ft, whole feet within altitude_range
    pub heading: f64,  // deg, [0, 360)
    pub speed: f64,    // kt, whole knots within speed_range
}

impl TargetState {
    /// Targets equal to the aircraft's current values (FD centered).
    pub fn hold(state: &AircraftState) -> Self {
        Self {
            altitude: state.altitude,
            heading: state.heading,
            speed: state.airspeed,
        }
    }
}

/// Magnitude bands for the random jump away from the current value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetBands {
    pub altitude: Bounds, // ft
    pub heading: Bounds,  // deg
    pub speed: Bounds,    // kt
}

impl Default for TargetBands {
    fn default() -> Self {
        Self {
            altitude: Bounds::new(2_000.0, 5_000.0),
            heading: Bounds::new(40.0, 90.0),
            speed: Bounds::new(30.0, 80.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Target generation
// ---------------------------------------------------------------------------

/// Random signed offset with magnitude drawn from `band`.
fn signed_offset<R: Rng + ?Sized>(rng: &mut R, band: &Bounds) -> f64 {
    let magnitude = if band.max > band.min {
        rng.gen_range(band.min..=band.max)
    } else {
        band.min
    };
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Jump `offset` away from `current`, reversing direction when the jump
/// would leave `range`, then clamp and round to a whole unit.
fn jump_within(current: f64, offset: f64, range: &Bounds) -> f64 {
    let mut candidate = current + offset;
    if candidate > range.max {
        candidate = current - offset.abs();
    }
    if candidate < range.min {
        candidate = current + offset.abs();
    }
    range.clamp(candidate).round()
}

/// Pick a fresh altitude/heading/speed triple far from the current state.
pub fn generate_targets<R: Rng + ?Sized>(
    rng: &mut R,
    current: &AircraftState,
    flight: &FlightConfig,
    bands: &TargetBands,
) -> TargetState {
    let alt_offset = signed_offset(rng, &bands.altitude);
    let altitude = jump_within(current.altitude, alt_offset, &flight.altitude_range);

    let hdg_offset = signed_offset(rng, &bands.heading);
    let heading = normalize_heading(current.heading + hdg_offset);

    let spd_offset = signed_offset(rng, &bands.speed);
    let speed = jump_within(current.airspeed, spd_offset, &flight.speed_range);

    TargetState { altitude, heading, speed }
}
