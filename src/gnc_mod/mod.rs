pub mod autopilot;
pub mod controller;
pub mod director;
pub mod display;
pub mod pid;

pub use autopilot::Autopilot;
pub use controller::{HoldPilot, IdlePilot, Pilot};
pub use director::{DirectorConfig, FlightDirector, Guidance};
pub use display::{lerp, lerp_angle, DisplayState};
pub use pid::Pid;
