//! Hints strip listing the demo's keyboard shortcuts.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

const HINTS: &[(&str, &str)] = &[
    ("←/→", " progress  "),
    ("+/-", " steps  "),
    ("t", " theme  "),
    ("q", " quit"),
];

/// Renders the hints strip.
pub fn draw_hints(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
    let mut spans = vec![Span::styled("Hints: ", theme.text_muted_style())];
    for (key, label) in HINTS {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*label, theme.text_muted_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
