use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dynamics::state::{Bounds, FlightConfig, InitialConditions};
use crate::error::ConfigError;
use crate::gnc::DirectorConfig;
use crate::mission::TargetBands;
use crate::sim::capture::CaptureConfig;

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub session_length: f64, // s
    pub max_dt: f64,         // s, per-tick clamp
    /// Fixed RNG seed; drawn from entropy when absent.
    pub seed: Option<u64>,
    pub flight: FlightConfig,
    pub director: DirectorConfig,
    pub capture: CaptureConfig,
    pub targets: TargetBands,
    pub initial: InitialConditions,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            session_length: 210.0, // 3.5 min
            max_dt: 0.05,
            seed: None,
            flight: FlightConfig::default(),
            director: DirectorConfig::default(),
            capture: CaptureConfig::default(),
            targets: TargetBands::default(),
            initial: InitialConditions::default(),
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn unit_interval(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitInterval { name, value })
    }
}

fn range(name: &'static str, b: &Bounds) -> Result<(), ConfigError> {
    finite(name, b.min)?;
    finite(name, b.max)?;
    if b.min < b.max {
        Ok(())
    } else {
        Err(ConfigError::DegenerateRange { name, min: b.min, max: b.max })
    }
}

/// Offset bands may collapse to a single value but must stay positive.
fn band(name: &'static str, b: &Bounds) -> Result<(), ConfigError> {
    positive(name, b.min)?;
    finite(name, b.max)?;
    if b.min <= b.max {
        Ok(())
    } else {
        Err(ConfigError::DegenerateRange { name, min: b.min, max: b.max })
    }
}

fn initial(name: &'static str, value: f64, b: &Bounds) -> Result<(), ConfigError> {
    if b.contains(value) {
        Ok(())
    } else {
        Err(ConfigError::InitialOutOfRange { name, value, min: b.min, max: b.max })
    }
}

impl SimConfig {
    /// Load a JSON config; missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Check every invariant a session relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("session_length", self.session_length)?;
        positive("max_dt", self.max_dt)?;

        let f = &self.flight;
        positive("roll_acceleration", f.roll_acceleration)?;
        positive("pitch_acceleration", f.pitch_acceleration)?;
        unit_interval("damping", f.damping)?;
        positive("max_roll_velocity", f.max_roll_velocity)?;
        positive("max_pitch_velocity", f.max_pitch_velocity)?;
        positive("speed_rate", f.speed_rate)?;
        positive("max_roll", f.max_roll)?;
        positive("max_pitch", f.max_pitch)?;
        positive("turn_rate", f.turn_rate)?;
        positive("climb_rate", f.climb_rate)?;
        range("speed", &f.speed_range)?;
        range("altitude", &f.altitude_range)?;

        let d = &self.director;
        positive("altitude_gain", d.altitude_gain)?;
        positive("heading_gain", d.heading_gain)?;
        positive("deflection_limit", d.deflection_limit)?;
        unit_interval("fd_smoothing", d.fd_smoothing)?;
        unit_interval("attitude_smoothing", d.attitude_smoothing)?;
        unit_interval("tape_smoothing", d.tape_smoothing)?;

        let c = &self.capture;
        positive("altitude_tolerance", c.altitude_tolerance)?;
        positive("heading_tolerance", c.heading_tolerance)?;
        positive("speed_tolerance", c.speed_tolerance)?;
        positive("hold_time", c.hold_time)?;

        band("altitude offset", &self.targets.altitude)?;
        band("heading offset", &self.targets.heading)?;
        band("speed offset", &self.targets.speed)?;

        initial("airspeed", self.initial.airspeed, &f.speed_range)?;
        initial("altitude", self.initial.altitude, &f.altitude_range)?;
        finite("initial heading", self.initial.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn degenerate_speed_range_rejected() {
        let mut config = SimConfig::default();
        config.flight.speed_range = Bounds::new(400.0, 400.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateRange { name: "speed", .. })
        ));
    }

    #[test]
    fn damping_must_be_a_fraction() {
        let mut config = SimConfig::default();
        config.flight.damping = 1.2;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfUnitInterval { .. })));
    }

    #[test]
    fn initial_altitude_must_be_in_range() {
        let mut config = SimConfig::default();
        config.initial.altitude = 35_000.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "initial altitude 35000 lies outside [20000, 32000]");
    }

    #[test]
    fn infinite_offset_band_rejected() {
        let mut config = SimConfig::default();
        config.targets.heading = Bounds::new(40.0, f64::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { name: "heading offset", .. })
        ));
        assert!(crate::sim::Session::start(config).is_err());
    }

    #[test]
    fn infinite_session_length_rejected() {
        let config = SimConfig { session_length: f64::INFINITY, ..SimConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite { name: "session_length", value: f64::INFINITY })
        );
    }

    #[test]
    fn infinite_altitude_range_rejected() {
        let mut config = SimConfig::default();
        config.flight.altitude_range = Bounds::new(f64::NEG_INFINITY, 32_000.0);
        assert!(matches!(config.validate(), Err(ConfigError::NonFinite { name: "altitude", .. })));
    }

    #[test]
    fn unreadable_or_malformed_file_is_an_error() {
        let dir = std::env::temp_dir();
        assert!(SimConfig::from_json_file(dir.join("fd-trainer-missing-config.json")).is_err());

        let path = dir.join(format!("fd-trainer-bad-config-{}.json", std::process::id()));
        std::fs::write(&path, "{ \"session_length\": ").unwrap();
        let result = SimConfig::from_json_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "session_length": 60, "seed": 42, "flight": { "damping": 0.9 } }"#)
                .unwrap();
        assert_eq!(config.session_length, 60.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.flight.damping, 0.9);
        assert_eq!(config.flight.max_roll, 60.0);
        assert_eq!(config.max_dt, 0.05);
    }
}
