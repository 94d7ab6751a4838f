use crate::gnc::DisplayState;
use crate::mission::TargetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Phase {
    Running,
    Ended,
}

/// Read-only view published after every tick for the instruments and HUD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub display: DisplayState,
    pub targets: TargetState,
    pub time_remaining: f64,
    pub elapsed: f64,
    pub score: u64,
    /// Running average; 100 before the first sample.
    pub average_accuracy: f64,
    pub stabilized: f64,
    pub captures: u32,
}

impl Snapshot {
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Countdown as `m:ss`.
    pub fn clock(&self) -> String {
        format_clock(self.time_remaining)
    }
}

pub fn format_clock(seconds: f64) -> String {
    let s = seconds.max(0.0);
    let mins = (s / 60.0) as u64;
    let secs = (s % 60.0) as u64;
    format!("{}:{:02}", mins, secs)
}
