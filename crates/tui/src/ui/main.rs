//! Top-level layout of the demo screen.
//!
//! ```text
//! ╭ Progress ───────────────╮
//! │ ✔━━━━○────○────○        │
//! ╰─────────────────────────╯
//! 1 of 4 steps complete · status
//!
//! Hints: ←/→ progress ...
//! ```

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::ui::app::{App, StatusKind};
use crate::ui::theme::{Theme, theme_helpers};
use crate::ui::widgets::draw_hints;

/// Block borders consume one cell on each side.
const BORDER_SIZE: u16 = 2;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let theme = app.theme.theme.as_ref();
    let area = frame.area();
    frame.render_widget(Block::default().style(theme_helpers::panel_style(theme)), area);

    let widget_height = app.widget.measure(area.width.saturating_sub(BORDER_SIZE)).max(1);
    let [panel_area, status_area, _, hints_area] = Layout::vertical([
        Constraint::Length(widget_height.saturating_add(BORDER_SIZE)),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let block = theme_helpers::block(theme, Some(" Progress "), true);
    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);
    frame.render_widget(&mut app.widget, inner);

    frame.render_widget(Paragraph::new(status_line(app, theme)), status_area);
    draw_hints(frame, hints_area, theme);
}

fn status_line<'a>(app: &'a App, theme: &dyn Theme) -> Line<'a> {
    let counts = app.widget.counts();
    let mut spans = match counts.validate() {
        Ok(()) => vec![Span::styled(
            format!("{} of {} steps complete", counts.progress_count, counts.step_count),
            theme.text_primary_style(),
        )],
        Err(error) => vec![Span::styled(format!("Nothing to draw: {error}"), theme.status_error())],
    };
    if let Some(status) = app.status.as_ref() {
        let style = match status.kind {
            StatusKind::Info => theme.status_success(),
            StatusKind::Warning => theme.status_warning(),
            StatusKind::Error => theme.status_error(),
        };
        spans.push(Span::styled(" · ", theme.text_muted_style()));
        spans.push(Span::styled(status.message.as_str(), style));
    }
    Line::from(spans)
}
