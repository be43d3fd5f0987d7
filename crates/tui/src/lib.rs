//! # Stepper TUI Library
//!
//! A horizontal step progress indicator for ratatui, plus the interactive
//! demo that hosts it.
//!
//! The widget ([`StepProgress`]) measures itself for a given width, caches
//! the resulting [`StepLayout`], and draws completed, current and empty step
//! icons joined by filled or empty bars onto any [`Canvas`]. Rendering into a
//! ratatui buffer goes through the regular `Widget` trait.

mod ui;

use anyhow::Result;
use stepper_types::StepProgressSettings;

pub use ui::theme;
pub use ui::widgets::step_progress;
pub use ui::widgets::step_progress::{
    Bounds, BufferCanvas, Canvas, DrawOp, DrawOutcome, RecordingCanvas, StepIcon, StepLayout, StepProgress, StepProgressStyle,
    StyleError,
};

/// Runs the interactive demo until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be put into raw mode or drawn to, or when
/// the configured colors cannot be resolved.
pub async fn run(settings: StepProgressSettings) -> Result<()> {
    ui::runtime::run_app(settings).await
}
