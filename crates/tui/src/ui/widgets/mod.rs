//! Widgets rendered by the stepper UI.

pub mod hints;
pub mod step_progress;

pub use hints::draw_hints;
