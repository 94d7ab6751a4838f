pub mod controls;
pub mod state;

pub use controls::{Control, ControlSet};
pub use state::{AircraftState, Bounds, FlightConfig, InitialConditions};

use state::normalize_heading;

// ---------------------------------------------------------------------------
// Flight dynamics integration (one tick)
// ---------------------------------------------------------------------------

/// Advance the aircraft by one tick.
///
/// Control inputs and speed changes are per-tick increments and ignore `dt`,
/// so the stick feels the same at any frame rate. Heading and altitude are
/// rates and integrate over `dt`.
///
/// Order:
///   1. Held roll/pitch controls accelerate the attitude rates
///   2. Damping, then clamp rates to their limits
///   3. Integrate attitude, clamp to ±max_roll / ±max_pitch
///   4. Speed up/down (both may apply in the same tick)
///   5. Heading += roll * turn_rate * dt, wrapped to [0, 360)
///   6. Altitude -= pitch * climb_rate * dt, clamped to range
pub fn step(state: &AircraftState, controls: &ControlSet, dt: f64, cfg: &FlightConfig) -> AircraftState {
    let mut roll_velocity = state.roll_velocity;
    let mut pitch_velocity = state.pitch_velocity;

    // --- Control inputs -> attitude rates ---
    if controls.is_held(Control::RollLeft) {
        roll_velocity -= cfg.roll_acceleration;
    }
    if controls.is_held(Control::RollRight) {
        roll_velocity += cfg.roll_acceleration;
    }
    if controls.is_held(Control::PitchUp) {
        pitch_velocity -= cfg.pitch_acceleration;
    }
    if controls.is_held(Control::PitchDown) {
        pitch_velocity += cfg.pitch_acceleration;
    }

    // --- Damping ---
    roll_velocity = (roll_velocity * cfg.damping).clamp(-cfg.max_roll_velocity, cfg.max_roll_velocity);
    pitch_velocity = (pitch_velocity * cfg.damping).clamp(-cfg.max_pitch_velocity, cfg.max_pitch_velocity);

    // --- Attitude ---
    let roll = (state.roll + roll_velocity).clamp(-cfg.max_roll, cfg.max_roll);
    let pitch = (state.pitch + pitch_velocity).clamp(-cfg.max_pitch, cfg.max_pitch);

    // --- Speed ---
    let mut airspeed = state.airspeed;
    if controls.is_held(Control::SpeedUp) {
        airspeed = (airspeed + cfg.speed_rate).min(cfg.speed_range.max);
    }
    if controls.is_held(Control::SpeedDown) {
        airspeed = (airspeed - cfg.speed_rate).max(cfg.speed_range.min);
    }

    // --- Heading & altitude ---
    let heading = normalize_heading(state.heading + roll * cfg.turn_rate * dt);
    let altitude = cfg.altitude_range.clamp(state.altitude - pitch * cfg.climb_rate * dt);

    AircraftState {
        roll,
        pitch,
        roll_velocity,
        pitch_velocity,
        airspeed,
        heading,
        altitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(controls: &[Control]) -> ControlSet {
        controls.iter().copied().collect()
    }

    #[test]
    fn roll_right_follows_recurrence() {
        let cfg = FlightConfig::default();
        let controls = held(&[Control::RollRight]);
        let mut s = AircraftState::default();

        let mut v = 0.0_f64;
        let mut roll = 0.0_f64;
        for _ in 0..2 {
            s = step(&s, &controls, 0.1, &cfg);
            v = ((v + 0.04) * 0.97).clamp(-1.2, 1.2);
            roll += v;
        }

        assert!((s.roll_velocity - v).abs() < 1e-12);
        assert!((s.roll - roll).abs() < 1e-12);
        assert!((s.roll_velocity - 0.076_436).abs() < 1e-9);
        assert!((s.roll - 0.115_236).abs() < 1e-9);
    }

    #[test]
    fn control_response_ignores_dt() {
        let cfg = FlightConfig::default();
        let controls = held(&[Control::PitchDown, Control::SpeedUp]);
        let s0 = AircraftState::default();
        let fast = step(&s0, &controls, 0.001, &cfg);
        let slow = step(&s0, &controls, 0.05, &cfg);
        assert_eq!(fast.pitch_velocity, slow.pitch_velocity);
        assert_eq!(fast.pitch, slow.pitch);
        assert_eq!(fast.airspeed, slow.airspeed);
        assert!(fast.altitude != slow.altitude);
    }

    #[test]
    fn rates_saturate_at_limits() {
        let cfg = FlightConfig::default();
        let controls = held(&[Control::RollLeft, Control::PitchDown]);
        let mut s = AircraftState::default();
        for _ in 0..500 {
            s = step(&s, &controls, 0.016, &cfg);
        }
        assert_eq!(s.roll_velocity, -cfg.max_roll_velocity);
        // pitch rate settles at 0.03 * 0.97 / 0.03 = 0.97, under its limit
        assert!((s.pitch_velocity - 0.97).abs() < 1e-6);
        assert!(s.pitch_velocity <= cfg.max_pitch_velocity);
        assert_eq!(s.roll, -cfg.max_roll);
        assert_eq!(s.pitch, cfg.max_pitch);
    }

    #[test]
    fn speed_keys_apply_independently() {
        let cfg = FlightConfig::default();
        let s0 = AircraftState::default();
        let both = step(&s0, &held(&[Control::SpeedUp, Control::SpeedDown]), 0.016, &cfg);
        assert!((both.airspeed - s0.airspeed).abs() < 1e-12);

        let mut s = s0;
        for _ in 0..1000 {
            s = step(&s, &held(&[Control::SpeedDown]), 0.016, &cfg);
        }
        assert_eq!(s.airspeed, cfg.speed_range.min);
    }

    #[test]
    fn banked_turn_wraps_heading() {
        let cfg = FlightConfig::default();
        let s0 = AircraftState { roll: 60.0, heading: 359.0, ..AircraftState::default() };
        let s1 = step(&s0, &ControlSet::none(), 0.05, &cfg);
        // 60 deg bank * 0.3 * 0.05 s = 0.9 deg
        assert!((s1.heading - 359.9).abs() < 1e-9);
        let s2 = step(&s1, &ControlSet::none(), 0.05, &cfg);
        assert!(s2.heading >= 0.0 && s2.heading < 360.0);
        assert!((s2.heading - 0.8).abs() < 1e-9);
    }

    #[test]
    fn nose_down_descends_and_clamps_at_floor() {
        let cfg = FlightConfig::default();
        let s0 = AircraftState { pitch: 10.0, altitude: 20_010.0, ..AircraftState::default() };
        let s1 = step(&s0, &ControlSet::none(), 0.05, &cfg);
        assert_eq!(s1.altitude, cfg.altitude_range.min);
    }
}
