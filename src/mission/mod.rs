pub mod targets;

pub use targets::{generate_targets, TargetBands, TargetState};
