//! Horizontal step progress indicator.
//!
//! Draws `step_count` icons joined by `step_count - 1` bars. The first
//! `progress_count` icons are completed, the next one (if any) is the
//! current step and the rest are empty. Bars following a completed icon are
//! filled; the others are empty.
//!
//! Rendering is split like a classic view: [`StepProgress::measure`] computes
//! and caches a [`StepLayout`] for a given width, then [`StepProgress::draw`]
//! replays it onto any [`Canvas`]. Rendering through ratatui's [`Widget`]
//! does both.

pub mod canvas;
pub mod icons;
pub mod layout;
pub mod style;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use stepper_types::{CountsError, LayoutMetrics, Padding, StepCounts, StepProgressSettings};
use tracing::{debug, error};

pub use canvas::{BufferCanvas, Canvas, DrawOp, RecordingCanvas};
pub use icons::StepIcon;
pub use layout::{Bounds, IconWidths, StepLayout};
pub use style::{StepProgressStyle, StyleError};

use crate::ui::theme::Theme;

/// What a draw call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn { icons: u16, bars: u16 },
    /// Counts violate the rendering invariant; nothing was drawn.
    Skipped(CountsError),
    /// `draw` was called before `measure`.
    Unmeasured,
}

#[derive(Debug, Clone)]
pub struct StepProgress {
    counts: StepCounts,
    style: StepProgressStyle,
    metrics: LayoutMetrics,
    padding: Padding,
    layout: Option<StepLayout>,
}

impl StepProgress {
    pub fn new(counts: StepCounts, style: StepProgressStyle) -> Self {
        Self {
            counts,
            style,
            metrics: LayoutMetrics::default(),
            padding: Padding::ZERO,
            layout: None,
        }
    }

    /// Builds a widget from settings, resolving icons and colors against `theme`.
    pub fn from_settings(settings: &StepProgressSettings, theme: &dyn Theme) -> Result<Self, StyleError> {
        let style = StepProgressStyle::resolve(settings, theme)?;
        Ok(Self::new(settings.counts(), style)
            .with_metrics(settings.metrics)
            .with_padding(settings.padding))
    }

    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.set_metrics(metrics);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.set_padding(padding);
        self
    }

    pub fn counts(&self) -> StepCounts {
        self.counts
    }

    pub fn step_count(&self) -> u16 {
        self.counts.step_count
    }

    pub fn progress_count(&self) -> u16 {
        self.counts.progress_count
    }

    pub fn style(&self) -> &StepProgressStyle {
        &self.style
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Layout from the last measure pass, if still valid.
    pub fn layout(&self) -> Option<&StepLayout> {
        self.layout.as_ref()
    }

    pub fn set_step_count(&mut self, step_count: u16) {
        self.counts.step_count = step_count;
        self.layout = None;
    }

    pub fn set_progress_count(&mut self, progress_count: u16) {
        self.counts.progress_count = progress_count;
        self.layout = None;
    }

    pub fn set_style(&mut self, style: StepProgressStyle) {
        self.style = style;
        self.layout = None;
    }

    pub fn set_metrics(&mut self, metrics: LayoutMetrics) {
        self.metrics = metrics;
        self.layout = None;
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.layout = None;
    }

    /// Measures the widget for a view `view_width` units wide and caches the
    /// resulting layout. Returns the desired height.
    pub fn measure(&mut self, view_width: u16) -> u16 {
        let layout = StepLayout::measure(view_width, self.counts, self.style.icon_widths(), self.metrics, self.padding);
        debug!(
            view_width,
            icon_width = layout.icon_width,
            bar_width = layout.bar_width,
            desired_height = layout.desired_height,
            "measured step progress"
        );
        self.layout = Some(layout);
        u16::try_from(layout.desired_height).unwrap_or(u16::MAX)
    }

    /// Draws icons and bars from the cached layout.
    ///
    /// Invalid counts are logged and nothing is drawn.
    pub fn draw(&self, canvas: &mut dyn Canvas) -> DrawOutcome {
        if let Err(error) = self.counts.validate() {
            error!(
                step_count = self.counts.step_count,
                progress_count = self.counts.progress_count,
                %error,
                "step count or progress count not set properly; skipping draw"
            );
            return DrawOutcome::Skipped(error);
        }
        let Some(layout) = self.layout.as_ref() else {
            debug!("step progress drawn before measure; skipping");
            return DrawOutcome::Unmeasured;
        };

        let bar_count = self.counts.connecting_bar_count();
        for index in 0..self.counts.step_count {
            let state = self.counts.state_of(index);
            canvas.draw_icon(self.style.icon(state), state, layout.icon_bounds(index));
            if index < bar_count {
                let kind = self.counts.bar_after(index);
                canvas.draw_bar(kind, layout.bar_bounds(index, kind), self.style.bar_color(kind));
            }
        }
        DrawOutcome::Drawn {
            icons: self.counts.step_count,
            bars: bar_count,
        }
    }

    /// Measures for `view_width` and renders into an off-screen buffer of the
    /// desired height, returning each row as plain text.
    pub fn render_to_lines(&mut self, view_width: u16) -> Vec<String> {
        let height = self.measure(view_width).max(1);
        let area = Rect::new(0, 0, view_width, height);
        let mut buffer = Buffer::empty(area);
        Widget::render(&mut *self, area, &mut buffer);
        (area.top()..area.bottom())
            .map(|y| {
                let row: String = (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect();
                row.trim_end().to_string()
            })
            .collect()
    }
}

impl Widget for &mut StepProgress {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.measure(area.width);
        let mut canvas = BufferCanvas::new(buf, area);
        self.draw(&mut canvas);
    }
}
