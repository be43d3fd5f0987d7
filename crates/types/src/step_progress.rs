//! Configuration model and step bookkeeping for the step progress widget.
//!
//! Lengths are expressed in layout *units*. When the widget renders into a
//! terminal buffer a unit is one character cell; the recording canvas used by
//! headless callers treats a unit as a pixel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rendering state of a single step icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// The step has been completed.
    Completed,
    /// The step currently in progress.
    Current,
    /// A step that has not been reached yet.
    Empty,
}

/// Rendering state of a connecting bar between two step icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    Filled,
    Empty,
}

/// Raised when the step counts cannot produce a valid indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountsError {
    /// Fewer than two steps leaves nothing to connect.
    #[error("step count must be at least 2, got {step_count}")]
    TooFewSteps { step_count: u16 },
    /// Progress beyond the last step.
    #[error("progress count {progress_count} exceeds step count {step_count}")]
    ProgressOutOfRange { progress_count: u16, step_count: u16 },
}

/// Total number of steps paired with how many of them are complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCounts {
    pub step_count: u16,
    pub progress_count: u16,
}

impl StepCounts {
    pub const fn new(step_count: u16, progress_count: u16) -> Self {
        Self { step_count, progress_count }
    }

    /// Checks the invariant required for rendering:
    /// `step_count >= 2` and `progress_count <= step_count`.
    pub fn validate(&self) -> Result<(), CountsError> {
        if self.step_count < 2 {
            return Err(CountsError::TooFewSteps { step_count: self.step_count });
        }
        if self.progress_count > self.step_count {
            return Err(CountsError::ProgressOutOfRange {
                progress_count: self.progress_count,
                step_count: self.step_count,
            });
        }
        Ok(())
    }

    /// Number of bars connecting adjacent icons.
    pub const fn connecting_bar_count(&self) -> u16 {
        self.step_count.saturating_sub(1)
    }

    /// Whether the current-step indicator is shown.
    pub const fn has_current_step(&self) -> bool {
        self.progress_count < self.step_count
    }

    /// Number of icons rendered with the empty state.
    pub const fn empty_count(&self) -> u16 {
        self.step_count.saturating_sub(self.progress_count).saturating_sub(1)
    }

    /// State of the icon at `index`.
    pub fn state_of(&self, index: u16) -> StepState {
        match index.cmp(&self.progress_count) {
            std::cmp::Ordering::Less => StepState::Completed,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Empty,
        }
    }

    /// Kind of the bar that follows the icon at `index`.
    pub fn bar_after(&self, index: u16) -> BarKind {
        if index < self.progress_count { BarKind::Filled } else { BarKind::Empty }
    }
}

/// Insets applied around the icon row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl Padding {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn uniform(value: u16) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub const fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub const fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

/// Visual tuning values for bars.
///
/// `overlap_offset` extends every bar under its neighbouring icons so the
/// shapes join without a visible seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub min_bar_width: u16,
    pub filled_bar_thickness: u16,
    pub empty_bar_thickness: u16,
    pub overlap_offset: u16,
}

impl LayoutMetrics {
    /// Values tuned for a pixel canvas.
    pub const PIXEL: Self = Self {
        min_bar_width: 5,
        filled_bar_thickness: 8,
        empty_bar_thickness: 3,
        overlap_offset: 5,
    };

    /// Values tuned for character cells.
    pub const TERMINAL: Self = Self {
        min_bar_width: 2,
        filled_bar_thickness: 1,
        empty_bar_thickness: 1,
        overlap_offset: 0,
    };

    /// Looks up a named preset (`pixel` or `terminal`).
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pixel" | "px" => Some(Self::PIXEL),
            "terminal" | "cell" | "cells" => Some(Self::TERMINAL),
            _ => None,
        }
    }

    /// Bar thickness for the given kind.
    pub const fn thickness(&self, kind: BarKind) -> u16 {
        match kind {
            BarKind::Filled => self.filled_bar_thickness,
            BarKind::Empty => self.empty_bar_thickness,
        }
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::TERMINAL
    }
}

/// Icon names (or literal symbols) for each step state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    #[serde(alias = "progress", alias = "progressDrawable")]
    pub completed: Option<String>,
    #[serde(alias = "currentStepIndicator")]
    pub current: Option<String>,
    #[serde(alias = "emptyStateDrawable")]
    pub empty: Option<String>,
    /// Lower bound for every icon's intrinsic width.
    #[serde(alias = "minWidth")]
    pub min_width: u16,
}

/// Bar colors as user-facing strings (`"#50fa7b"`, `"green"`, `"34"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    #[serde(alias = "progressColor")]
    pub progress: Option<String>,
    #[serde(alias = "emptyStateColor", alias = "emptyColor")]
    pub empty: Option<String>,
}

/// Complete configuration surface of the step progress widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepProgressSettings {
    #[serde(alias = "stepCount")]
    pub step_count: u16,
    #[serde(alias = "progressCount")]
    pub progress_count: u16,
    pub icons: IconSettings,
    pub colors: ColorSettings,
    pub metrics: LayoutMetrics,
    pub padding: Padding,
    /// Canonical theme identifier used for fallback colors.
    pub theme: Option<String>,
}

impl StepProgressSettings {
    pub fn counts(&self) -> StepCounts {
        StepCounts::new(self.step_count, self.progress_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_single_step() {
        let error = StepCounts::new(1, 0).validate().unwrap_err();
        assert_eq!(error, CountsError::TooFewSteps { step_count: 1 });
    }

    #[test]
    fn validation_rejects_progress_past_last_step() {
        let error = StepCounts::new(3, 4).validate().unwrap_err();
        assert_eq!(
            error,
            CountsError::ProgressOutOfRange {
                progress_count: 4,
                step_count: 3
            }
        );
        assert!(StepCounts::new(3, 3).validate().is_ok());
    }

    #[test]
    fn states_follow_progress() {
        let counts = StepCounts::new(7, 2);
        let states: Vec<StepState> = (0..7).map(|index| counts.state_of(index)).collect();
        assert_eq!(states[..2], [StepState::Completed, StepState::Completed]);
        assert_eq!(states[2], StepState::Current);
        assert!(states[3..].iter().all(|state| *state == StepState::Empty));
        assert_eq!(counts.empty_count(), 4);
        assert_eq!(counts.bar_after(1), BarKind::Filled);
        assert_eq!(counts.bar_after(2), BarKind::Empty);
    }

    #[test]
    fn full_progress_has_no_current_or_empty_steps() {
        let counts = StepCounts::new(4, 4);
        assert!(!counts.has_current_step());
        assert_eq!(counts.empty_count(), 0);
    }

    #[test]
    fn settings_accept_attribute_style_names() {
        let yaml = r##"
stepCount: 5
progressCount: 1
icons:
  progressDrawable: check_circle
  minWidth: 3
colors:
  progressColor: "#50fa7b"
  emptyStateColor: gray
"##;
        let settings: StepProgressSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.counts(), StepCounts::new(5, 1));
        assert_eq!(settings.icons.completed.as_deref(), Some("check_circle"));
        assert_eq!(settings.icons.min_width, 3);
        assert_eq!(settings.colors.empty.as_deref(), Some("gray"));
        assert_eq!(settings.metrics, LayoutMetrics::TERMINAL);
    }

    #[test]
    fn partial_metrics_fall_back_to_terminal_defaults() {
        let settings: StepProgressSettings = serde_json::from_str(r#"{"metrics":{"overlap_offset":5}}"#).unwrap();
        assert_eq!(settings.metrics.overlap_offset, 5);
        assert_eq!(settings.metrics.min_bar_width, LayoutMetrics::TERMINAL.min_bar_width);
    }

    #[test]
    fn presets_resolve_by_name() {
        assert_eq!(LayoutMetrics::preset("PIXEL"), Some(LayoutMetrics::PIXEL));
        assert_eq!(LayoutMetrics::preset("cells"), Some(LayoutMetrics::TERMINAL));
        assert_eq!(LayoutMetrics::preset("inches"), None);
    }
}
