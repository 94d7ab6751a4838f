use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Sum of |cue| on both axes that counts as zero accuracy.
pub const FULL_DEFLECTION: f64 = 200.0;
/// Score points per second at 1% accuracy.
pub const POINTS_RATE: f64 = 10.0;

/// How centered the cue is, 0..=100.
pub fn accuracy(fd: &Vector2<f64>) -> f64 {
    let center_error = fd.lp_norm(1) / FULL_DEFLECTION;
    ((1.0 - center_error) * 100.0).max(0.0)
}

/// Whole points earned for holding `accuracy` over `dt` seconds.
pub fn points(accuracy: f64, dt: f64) -> u64 {
    // accuracy and dt are both non-negative here, the cast cannot wrap
    (accuracy * dt * POINTS_RATE).floor().max(0.0) as u64
}

// ---------------------------------------------------------------------------
// Session bookkeeping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub time_remaining: f64, // s
    pub score: u64,
    pub total_accuracy: f64,
    pub accuracy_samples: u64,
}

impl SessionState {
    pub fn new(session_length: f64) -> Self {
        Self {
            time_remaining: session_length,
            score: 0,
            total_accuracy: 0.0,
            accuracy_samples: 0,
        }
    }

    /// Fold one tick's accuracy into the running average and the score.
    pub fn record(&mut self, accuracy: f64, dt: f64) {
        self.total_accuracy += accuracy;
        self.accuracy_samples += 1;
        self.score += points(accuracy, dt);
    }

    /// Unrounded running average, `None` before the first sample.
    pub fn average_accuracy(&self) -> Option<f64> {
        if self.accuracy_samples == 0 {
            None
        } else {
            Some(self.total_accuracy / self.accuracy_samples as f64)
        }
    }

    /// End-of-session average: rounded percentage, 0 without samples.
    pub fn final_accuracy(&self) -> f64 {
        self.average_accuracy().map_or(0.0, f64::round)
    }

    pub fn rating(&self) -> Rating {
        Rating::from_accuracy(self.final_accuracy())
    }
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Rating {
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Rating {
    pub fn from_accuracy(avg: f64) -> Self {
        if avg >= 90.0 {
            Rating::APlus
        } else if avg >= 80.0 {
            Rating::A
        } else if avg >= 70.0 {
            Rating::B
        } else if avg >= 60.0 {
            Rating::C
        } else if avg >= 50.0 {
            Rating::D
        } else {
            Rating::F
        }
    }
}

/// Published once when the session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub score: u64,
    pub accuracy: f64, // rounded percentage
    pub rating: Rating,
    pub captures: u32,
    pub elapsed: f64, // s
    pub seed: u64,
}
