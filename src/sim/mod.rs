pub mod capture;
pub mod event;
pub mod runner;
pub mod score;
pub mod session;
pub mod snapshot;

pub use capture::{CaptureConfig, CaptureMonitor};
pub use event::SessionEvent;
pub use runner::{simulate, simulate_with, FrameClock, Run};
pub use score::{Rating, Report, SessionState};
pub use session::Session;
pub use snapshot::{format_clock, Phase, Snapshot};
