//! Built-in step icons.
//!
//! An icon is a glyph plus the color it is drawn in. Its intrinsic width is
//! the glyph's display width, raised to a configured minimum.

use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_COMPLETED_ICON: &str = "check_circle";
pub const DEFAULT_CURRENT_ICON: &str = "circle_stroke";
pub const DEFAULT_EMPTY_ICON: &str = "circle_stroke";

const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("check_circle", "✔"),
    ("check", "✓"),
    ("circle_filled", "●"),
    ("circle_stroke", "○"),
    ("circle_dot", "◉"),
    ("square", "■"),
    ("square_stroke", "□"),
    ("diamond", "◆"),
];

/// Looks up a built-in icon glyph by name.
pub fn builtin_symbol(name: &str) -> Option<&'static str> {
    BUILTIN_ICONS
        .iter()
        .find(|(icon_name, _)| icon_name.eq_ignore_ascii_case(name.trim()))
        .map(|(_, symbol)| *symbol)
}

/// Built-in glyph for `name`, or `name` itself used as a literal symbol.
pub fn resolve_symbol(name: &str) -> String {
    builtin_symbol(name).map(str::to_string).unwrap_or_else(|| name.to_string())
}

/// A resolved icon handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIcon {
    symbol: String,
    color: Color,
    min_width: u16,
}

impl StepIcon {
    pub fn new(symbol: impl Into<String>, color: Color, min_width: u16) -> Self {
        Self {
            symbol: symbol.into(),
            color,
            min_width,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.color)
    }

    /// Display width of the glyph in cells.
    pub fn symbol_width(&self) -> u16 {
        u16::try_from(self.symbol.width()).unwrap_or(u16::MAX)
    }

    /// Minimum width the icon asks for during measurement.
    pub fn intrinsic_width(&self) -> u16 {
        self.symbol_width().max(self.min_width).max(1)
    }
}
