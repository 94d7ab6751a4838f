use crate::dynamics::{Control, ControlSet};
use crate::sim::Snapshot;
use super::controller::Pilot;
use super::pid::Pid;

// ---------------------------------------------------------------------------
// Autopilot: flies the flight director cue with discrete key presses
// ---------------------------------------------------------------------------

/// Cascaded loops: the FD cue sets a desired bank/pitch, a PID on each axis
/// turns the attitude error into a demand, and the demand becomes a key
/// press once it leaves the deadband.
#[derive(Debug, Clone)]
pub struct Autopilot {
    pub roll_pid: Pid,
    pub pitch_pid: Pid,
    pub bank_per_cue: f64,  // deg of bank per unit of horizontal cue
    pub pitch_per_cue: f64, // deg of pitch per unit of vertical cue
    pub max_bank: f64,
    pub max_pitch: f64,
    pub deadband: f64,
    pub speed_deadband: f64, // kt
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            // Derivative lead roughly matches the stopping distance of the
            // damped attitude rates at 60 Hz. The small roll integral trims
            // out the bank lost to damping while holding a turn.
            roll_pid: Pid::new(1.0, 0.05, 0.15).with_integral_limit(5.0),
            pitch_pid: Pid::new(1.0, 0.0, 0.2),
            bank_per_cue: 0.5,
            pitch_per_cue: 0.1,
            max_bank: 25.0,
            max_pitch: 8.0,
            deadband: 0.5,
            speed_deadband: 2.0,
        }
    }

    /// Compute held controls from the published snapshot.
    pub fn update(&mut self, snapshot: &Snapshot, dt: f64) -> ControlSet {
        let display = &snapshot.display;
        let mut controls = ControlSet::none();

        let desired_roll = (display.fd.x * self.bank_per_cue).clamp(-self.max_bank, self.max_bank);
        let roll_demand = self.roll_pid.update(desired_roll - display.roll, dt);
        if roll_demand > self.deadband {
            controls.press(Control::RollRight);
        } else if roll_demand < -self.deadband {
            controls.press(Control::RollLeft);
        }

        // Negative cue commands a climb, which is negative pitch
        let desired_pitch = (display.fd.y * self.pitch_per_cue).clamp(-self.max_pitch, self.max_pitch);
        let pitch_demand = self.pitch_pid.update(desired_pitch - display.pitch, dt);
        if pitch_demand > self.deadband {
            controls.press(Control::PitchDown);
        } else if pitch_demand < -self.deadband {
            controls.press(Control::PitchUp);
        }

        let speed_error = snapshot.targets.speed - display.speed;
        if speed_error > self.speed_deadband {
            controls.press(Control::SpeedUp);
        } else if speed_error < -self.speed_deadband {
            controls.press(Control::SpeedDown);
        }

        controls
    }

    pub fn reset(&mut self) {
        self.roll_pid.reset();
        self.pitch_pid.reset();
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Pilot for Autopilot {
    fn controls(&mut self, snapshot: &Snapshot, dt: f64) -> ControlSet {
        self.update(snapshot, dt)
    }

    fn reset(&mut self) {
        Autopilot::reset(self);
    }

    fn name(&self) -> &str {
        "Autopilot"
    }
}
