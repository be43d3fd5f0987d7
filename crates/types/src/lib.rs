//! Shared types for the stepper workspace.
//!
//! The step progress widget is configured through [`StepProgressSettings`],
//! which is deserialized from user configuration files and then resolved by
//! the TUI crate into concrete icons and colors.

pub mod step_progress;

pub use step_progress::{
    BarKind, CountsError, IconSettings, LayoutMetrics, Padding, StepCounts, StepProgressSettings, StepState, ColorSettings,
};
