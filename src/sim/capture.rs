use serde::{Deserialize, Serialize};

use crate::gnc::Guidance;

// ---------------------------------------------------------------------------
// Target capture: all three errors inside tolerance for a continuous hold
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub altitude_tolerance: f64, // ft
    pub heading_tolerance: f64,  // deg
    pub speed_tolerance: f64,    // kt
    pub hold_time: f64,          // s
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            altitude_tolerance: 200.0,
            heading_tolerance: 5.0,
            speed_tolerance: 10.0,
            hold_time: 1.5,
        }
    }
}

impl CaptureConfig {
    /// Strict inequality on every axis.
    pub fn within(&self, g: &Guidance) -> bool {
        g.altitude_error.abs() < self.altitude_tolerance
            && g.heading_error.abs() < self.heading_tolerance
            && g.speed_error.abs() < self.speed_tolerance
    }
}

/// Debounces capture: fires once per continuous hold of `hold_time`.
#[derive(Debug, Clone, Default)]
pub struct CaptureMonitor {
    stabilized: f64,
}

impl CaptureMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds the current hold has lasted (0 when outside tolerance).
    pub fn stabilized(&self) -> f64 {
        self.stabilized
    }

    pub fn reset(&mut self) {
        self.stabilized = 0.0;
    }

    /// Returns true on the tick the hold completes; the timer restarts at 0.
    pub fn check(&mut self, cfg: &CaptureConfig, guidance: &Guidance, dt: f64) -> bool {
        if !cfg.within(guidance) {
            self.stabilized = 0.0;
            return false;
        }
        self.stabilized += dt;
        if self.stabilized >= cfg.hold_time {
            self.stabilized = 0.0;
            true
        } else {
            false
        }
    }
}
