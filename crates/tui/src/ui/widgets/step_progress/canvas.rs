//! Drawing surfaces for the step progress widget.
//!
//! The renderer never holds mutable paint state: every bar draw receives its
//! color explicitly, and icons carry their own.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use serde_json::{Value, json};
use stepper_types::{BarKind, StepState};

use super::{icons::StepIcon, layout::Bounds};

/// Line glyph used for bars in a character grid.
pub const FILLED_BAR_SYMBOL: &str = "━";
pub const EMPTY_BAR_SYMBOL: &str = "─";

/// Surface the renderer draws onto. Bounds are widget-local.
pub trait Canvas {
    fn draw_icon(&mut self, icon: &StepIcon, state: StepState, bounds: Bounds);
    fn draw_bar(&mut self, kind: BarKind, bounds: Bounds, color: Color);
}

/// Draws into a ratatui [`Buffer`], clipped to `area`.
pub struct BufferCanvas<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferCanvas<'a> {
    pub fn new(buffer: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buffer.area);
        Self { buffer, area }
    }

    /// Converts widget-local bounds to an absolute buffer rect, clipped to the area.
    fn clip(&self, bounds: Bounds) -> Option<Rect> {
        let local = Bounds::new(0, 0, i32::from(self.area.width), i32::from(self.area.height));
        let clipped = bounds.intersect(&local);
        if clipped.is_empty() {
            return None;
        }
        Some(Rect::new(
            self.area.x + clipped.left as u16,
            self.area.y + clipped.top as u16,
            clipped.width() as u16,
            clipped.height() as u16,
        ))
    }
}

impl Canvas for BufferCanvas<'_> {
    fn draw_icon(&mut self, icon: &StepIcon, _state: StepState, bounds: Bounds) {
        let Some(rect) = self.clip(bounds) else {
            return;
        };
        // Center the glyph in the icon square, left-aligned when it is wider.
        let symbol_width = icon.symbol_width().min(rect.width);
        let x = rect.x + (rect.width - symbol_width) / 2;
        let y = rect.y + rect.height.saturating_sub(1) / 2;
        let max_width = usize::from(rect.right() - x);
        self.buffer.set_stringn(x, y, icon.symbol(), max_width, icon.style());
    }

    fn draw_bar(&mut self, kind: BarKind, bounds: Bounds, color: Color) {
        let Some(rect) = self.clip(bounds) else {
            return;
        };
        let symbol = match kind {
            BarKind::Filled => FILLED_BAR_SYMBOL,
            BarKind::Empty => EMPTY_BAR_SYMBOL,
        };
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_symbol(symbol).set_fg(color);
                }
            }
        }
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Icon { state: StepState, symbol: String, bounds: Bounds },
    Bar { kind: BarKind, bounds: Bounds, color: Color },
}

impl DrawOp {
    pub fn to_json(&self) -> Value {
        match self {
            DrawOp::Icon { state, symbol, bounds } => json!({
                "op": "icon",
                "state": state,
                "symbol": symbol,
                "bounds": bounds,
            }),
            DrawOp::Bar { kind, bounds, color } => json!({
                "op": "bar",
                "kind": kind,
                "bounds": bounds,
                "color": color.to_string(),
            }),
        }
    }
}

/// Headless canvas that records every draw call in order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn icon_count(&self, state: StepState) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Icon { state: drawn, .. } if *drawn == state))
            .count()
    }

    pub fn bar_count(&self, kind: BarKind) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Bar { kind: drawn, .. } if *drawn == kind))
            .count()
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.ops.iter().map(DrawOp::to_json).collect())
    }
}

impl Canvas for RecordingCanvas {
    fn draw_icon(&mut self, icon: &StepIcon, state: StepState, bounds: Bounds) {
        self.ops.push(DrawOp::Icon {
            state,
            symbol: icon.symbol().to_string(),
            bounds,
        });
    }

    fn draw_bar(&mut self, kind: BarKind, bounds: Bounds, color: Color) {
        self.ops.push(DrawOp::Bar { kind, bounds, color });
    }
}
