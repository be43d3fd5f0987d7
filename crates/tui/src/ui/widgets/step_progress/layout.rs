//! Measurement of the icon row.
//!
//! Icons are square: once the per-icon width is known, the desired height is
//! that width plus the vertical padding. Bars keep at least
//! [`LayoutMetrics::min_bar_width`]; when the row does not fit, the icons
//! shrink by the deficit instead.

use serde::Serialize;
use stepper_types::{BarKind, LayoutMetrics, Padding, StepCounts};

/// Intrinsic minimum widths of the three icons, in units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IconWidths {
    pub completed: i32,
    pub current: i32,
    pub empty: i32,
}

impl IconWidths {
    pub const fn uniform(width: i32) -> Self {
        Self {
            completed: width,
            current: width,
            empty: width,
        }
    }
}

/// Rectangle in widget-local units. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Overlap of two rectangles; empty when they do not intersect.
    pub fn intersect(&self, other: &Bounds) -> Bounds {
        Bounds {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }
}

/// Result of a measure pass. Valid until the widget is resized or any of
/// its counts, icons, metrics or padding change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepLayout {
    pub counts: StepCounts,
    pub metrics: LayoutMetrics,
    pub padding: Padding,
    /// Width left for the row after horizontal padding.
    pub available_width: i32,
    /// Icon width the row asks for before any shrinking. Wider than the
    /// other fields since it can exceed any view width.
    pub required_icon_width: i64,
    /// Icon width actually granted to the row.
    pub total_icon_width: i32,
    pub icon_width: i32,
    pub bar_width: i32,
    pub desired_height: i32,
}

impl StepLayout {
    /// Runs the measure pass for a view of `view_width` units.
    pub fn measure(view_width: u16, counts: StepCounts, icons: IconWidths, metrics: LayoutMetrics, padding: Padding) -> Self {
        let available_width = (i32::from(view_width) - i32::from(padding.horizontal())).max(0);
        let mut layout = Self {
            counts,
            metrics,
            padding,
            available_width,
            required_icon_width: 0,
            total_icon_width: 0,
            icon_width: 0,
            bar_width: 0,
            desired_height: i32::from(padding.vertical()),
        };
        if counts.validate().is_err() {
            return layout;
        }

        // Products of u16 counts and widths; i64 holds them without overflow.
        let current = if counts.has_current_step() { i64::from(icons.current) } else { 0 };
        let required_icon_width = i64::from(icons.completed) * i64::from(counts.progress_count)
            + current
            + i64::from(icons.empty) * i64::from(counts.empty_count());
        let bar_count = i64::from(counts.connecting_bar_count());
        let expected_width = required_icon_width + i64::from(metrics.min_bar_width) * bar_count;
        let available = i64::from(available_width);

        // Never wider than the available width, so it narrows back to i32.
        let total_icon_width = if available < expected_width {
            (required_icon_width - (expected_width - available)).max(0)
        } else {
            required_icon_width
        };

        layout.required_icon_width = required_icon_width;
        layout.total_icon_width = narrow(total_icon_width);
        layout.icon_width = narrow(total_icon_width / i64::from(counts.step_count));
        layout.bar_width = narrow((available - total_icon_width) / bar_count);
        layout.desired_height = layout.icon_width + i32::from(padding.vertical());
        layout
    }

    /// Width actually covered by icons and bars, excluding overlap.
    pub fn row_width(&self) -> i32 {
        self.icon_width
            .saturating_mul(i32::from(self.counts.step_count))
            .saturating_add(self.bar_width.saturating_mul(i32::from(self.counts.connecting_bar_count())))
    }

    pub fn icon_bounds(&self, index: u16) -> Bounds {
        let left = i32::from(self.padding.left) + i32::from(index) * (self.icon_width + self.bar_width);
        let top = i32::from(self.padding.top);
        Bounds::new(left, top, left + self.icon_width, top + self.icon_width)
    }

    /// Bounds of the bar that follows the icon at `index`. Bars reach
    /// `overlap_offset` units under both neighbouring icons.
    pub fn bar_bounds(&self, index: u16, kind: BarKind) -> Bounds {
        let overlap = i32::from(self.metrics.overlap_offset);
        let icon = self.icon_bounds(index);
        let left = icon.right - overlap;
        let right = left + self.bar_width + 2 * overlap;
        let top = (icon.bottom + icon.top) / 2;
        Bounds::new(left, top, right, top + i32::from(self.metrics.thickness(kind)))
    }
}

fn narrow(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel_layout(view_width: u16, counts: StepCounts, padding: Padding) -> StepLayout {
        StepLayout::measure(view_width, counts, IconWidths::uniform(36), LayoutMetrics::PIXEL, padding)
    }

    #[test]
    fn spare_width_goes_to_bars() {
        let layout = pixel_layout(300, StepCounts::new(7, 2), Padding::ZERO);
        assert_eq!(layout.required_icon_width, 252);
        assert_eq!(layout.total_icon_width, 252);
        assert_eq!(layout.icon_width, 36);
        assert_eq!(layout.bar_width, 8);
        assert_eq!(layout.desired_height, 36);
    }

    #[test]
    fn icons_shrink_when_row_does_not_fit() {
        let layout = pixel_layout(200, StepCounts::new(7, 2), Padding::ZERO);
        assert_eq!(layout.total_icon_width, 170);
        assert_eq!(layout.icon_width, 24);
        assert_eq!(layout.bar_width, LayoutMetrics::PIXEL.min_bar_width as i32);
        assert_eq!(layout.row_width(), 198);
    }

    #[test]
    fn padding_reduces_available_width_and_adds_height() {
        let padding = Padding {
            left: 10,
            top: 4,
            right: 10,
            bottom: 6,
        };
        let layout = pixel_layout(220, StepCounts::new(7, 2), padding);
        assert_eq!(layout.available_width, 200);
        assert_eq!(layout.icon_width, 24);
        assert_eq!(layout.desired_height, 34);
    }

    #[test]
    fn full_progress_counts_only_completed_icons() {
        let icons = IconWidths {
            completed: 10,
            current: 20,
            empty: 30,
        };
        let layout = StepLayout::measure(500, StepCounts::new(3, 3), icons, LayoutMetrics::PIXEL, Padding::ZERO);
        assert_eq!(layout.required_icon_width, 30);

        let layout = StepLayout::measure(500, StepCounts::new(3, 1), icons, LayoutMetrics::PIXEL, Padding::ZERO);
        assert_eq!(layout.required_icon_width, 10 + 20 + 30);
    }

    #[test]
    fn row_never_exceeds_available_width() {
        for view_width in [0u16, 3, 17, 40, 80, 151, 300] {
            for step_count in 2u16..=9 {
                for progress_count in 0..=step_count {
                    let layout = pixel_layout(view_width, StepCounts::new(step_count, progress_count), Padding::uniform(2));
                    assert!(
                        layout.row_width() <= layout.available_width,
                        "width {view_width}, counts {step_count}/{progress_count}"
                    );
                    assert!(layout.icon_width >= 0);
                }
            }
        }
    }

    #[test]
    fn huge_counts_and_widths_do_not_overflow() {
        let layout = StepLayout::measure(
            80,
            StepCounts::new(60000, 50000),
            IconWidths::uniform(60000),
            LayoutMetrics::TERMINAL,
            Padding::ZERO,
        );
        assert_eq!(layout.required_icon_width, 60000 * 60000);
        assert_eq!(layout.total_icon_width, 0);
        assert!(layout.row_width() <= layout.available_width);

        let metrics = LayoutMetrics {
            min_bar_width: u16::MAX,
            ..LayoutMetrics::TERMINAL
        };
        let layout = StepLayout::measure(u16::MAX, StepCounts::new(40000, 0), IconWidths::uniform(i32::from(u16::MAX)), metrics, Padding::ZERO);
        assert_eq!(layout.icon_width, 0);
        assert_eq!(layout.bar_width, 1);
        assert!(layout.row_width() <= layout.available_width);
    }

    #[test]
    fn bars_keep_minimum_width_when_space_allows() {
        let min_bar = i32::from(LayoutMetrics::PIXEL.min_bar_width);
        for view_width in [60u16, 120, 250] {
            let layout = pixel_layout(view_width, StepCounts::new(5, 2), Padding::ZERO);
            assert!(layout.bar_width >= min_bar, "width {view_width}");
        }
    }

    #[test]
    fn invalid_counts_measure_to_padding_only() {
        let layout = pixel_layout(300, StepCounts::new(1, 0), Padding::uniform(3));
        assert_eq!(layout.icon_width, 0);
        assert_eq!(layout.desired_height, 6);
    }

    #[test]
    fn bar_geometry_overlaps_neighbouring_icons() {
        let padding = Padding {
            top: 4,
            ..Padding::ZERO
        };
        let layout = pixel_layout(200, StepCounts::new(7, 2), padding);
        let bar = layout.bar_bounds(0, BarKind::Filled);
        assert_eq!(bar, Bounds::new(19, 16, 34, 24));
        assert_eq!(layout.icon_bounds(1).left, 29);
        assert_eq!(layout.bar_bounds(3, BarKind::Empty).height(), 3);
    }
}
