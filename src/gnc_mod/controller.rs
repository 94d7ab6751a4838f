use crate::dynamics::ControlSet;
use crate::sim::Snapshot;

/// Source of control inputs, polled once per tick.
///
/// A keyboard adapter, a scripted drill, or an autopilot implements this and
/// the tick driver samples it before integrating.
pub trait Pilot {
    /// Held controls for the coming tick, given the last published snapshot.
    fn controls(&mut self, snapshot: &Snapshot, dt: f64) -> ControlSet;

    /// Reset internal state (e.g., PID integrators) on session restart.
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Holds nothing; the aircraft flies straight and level on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePilot;

impl Pilot for IdlePilot {
    fn controls(&mut self, _snapshot: &Snapshot, _dt: f64) -> ControlSet {
        ControlSet::none()
    }

    fn name(&self) -> &str {
        "IdlePilot"
    }
}

/// Replays a fixed set of held controls every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldPilot(pub ControlSet);

impl Pilot for HoldPilot {
    fn controls(&mut self, _snapshot: &Snapshot, _dt: f64) -> ControlSet {
        self.0
    }

    fn name(&self) -> &str {
        "HoldPilot"
    }
}
