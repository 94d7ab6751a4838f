use crate::mission::TargetState;
use super::score::Report;

// ---------------------------------------------------------------------------
// Session events
// ---------------------------------------------------------------------------

/// Discrete events a tick can produce. At most one fires per tick: the
/// ending tick does no integration, so no capture can coincide with it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// All three targets were held for the full hold time; new targets issued.
    Captured { elapsed: f64, previous: TargetState, next: TargetState },
    /// The countdown reached zero.
    Ended(Report),
}

impl SessionEvent {
    pub fn is_end(&self) -> bool {
        matches!(self, SessionEvent::Ended(_))
    }
}
