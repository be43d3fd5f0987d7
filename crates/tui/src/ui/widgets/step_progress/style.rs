//! Resolution of user-facing icon names and color strings into handles.
//!
//! Runs once when the widget is configured; rendering only reads the
//! resolved [`StepProgressStyle`].

use std::str::FromStr;

use ratatui::style::Color;
use stepper_types::{BarKind, StepProgressSettings, StepState};
use thiserror::Error;

use super::icons::{DEFAULT_COMPLETED_ICON, DEFAULT_CURRENT_ICON, DEFAULT_EMPTY_ICON, StepIcon, resolve_symbol};
use super::layout::IconWidths;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("invalid {field} color '{value}'")]
    InvalidColor { field: &'static str, value: String },
}

/// Icons and bar colors used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepProgressStyle {
    pub completed: StepIcon,
    pub current: StepIcon,
    pub empty: StepIcon,
    pub progress_color: Color,
    pub empty_color: Color,
}

impl StepProgressStyle {
    /// Resolves settings against `theme`; unset colors come from the theme.
    pub fn resolve(settings: &StepProgressSettings, theme: &dyn Theme) -> Result<Self, StyleError> {
        let progress_color = match settings.colors.progress.as_deref() {
            Some(value) => parse_color("progress", value)?,
            None => theme.step_progress_color(),
        };
        let empty_color = match settings.colors.empty.as_deref() {
            Some(value) => parse_color("empty", value)?,
            None => theme.step_empty_color(),
        };

        let icons = &settings.icons;
        let icon = |name: Option<&str>, fallback: &str, color: Color| {
            StepIcon::new(resolve_symbol(name.unwrap_or(fallback)), color, icons.min_width)
        };
        Ok(Self {
            completed: icon(icons.completed.as_deref(), DEFAULT_COMPLETED_ICON, progress_color),
            current: icon(icons.current.as_deref(), DEFAULT_CURRENT_ICON, progress_color),
            empty: icon(icons.empty.as_deref(), DEFAULT_EMPTY_ICON, empty_color),
            progress_color,
            empty_color,
        })
    }

    pub fn icon(&self, state: StepState) -> &StepIcon {
        match state {
            StepState::Completed => &self.completed,
            StepState::Current => &self.current,
            StepState::Empty => &self.empty,
        }
    }

    pub fn bar_color(&self, kind: BarKind) -> Color {
        match kind {
            BarKind::Filled => self.progress_color,
            BarKind::Empty => self.empty_color,
        }
    }

    pub fn icon_widths(&self) -> IconWidths {
        IconWidths {
            completed: i32::from(self.completed.intrinsic_width()),
            current: i32::from(self.current.intrinsic_width()),
            empty: i32::from(self.empty.intrinsic_width()),
        }
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, StyleError> {
    Color::from_str(value.trim()).map_err(|_| StyleError::InvalidColor {
        field,
        value: value.to_string(),
    })
}
