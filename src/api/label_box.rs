//! Placement of axis value label boxes.
//!
//! Every value label box keeps its size and is only translated to stay within
//! its boundary. The near boundary wins when a box is larger than the space.

use crate::core::PixelRect;

use super::AxisMetrics;

/// Start of a span of `length` placed at `start`, shifted to lie within
/// `[near, far]`.
#[must_use]
pub fn clamp_span(start: f64, length: f64, near: f64, far: f64) -> f64 {
    if start < near {
        near
    } else if start + length > far {
        (far - length).max(near)
    } else {
        start
    }
}

/// Start of a span centred at `centre`, clamped like [`clamp_span`].
#[must_use]
pub fn clamp_centered_span(centre: f64, half_length: f64, near: f64, far: f64) -> f64 {
    clamp_span(centre - half_length, 2.0 * half_length, near, far)
}

/// Text box of an X axis value label centred at `x`, below `axis_y`.
#[must_use]
pub fn x_tick_text_box(axis: &AxisMetrics, x: f64, axis_y: f64) -> PixelRect {
    let top = axis_y + axis.tick_length_px + axis.x_label_gap_px;
    PixelRect::new(
        x - axis.label_half_width_px,
        top,
        x + axis.label_half_width_px,
        top + 2.0 * axis.label_half_height_px,
    )
}

/// Text box of a Y axis value label centred at `y`, right of `axis_x`.
#[must_use]
pub fn y_tick_text_box(axis: &AxisMetrics, y: f64, axis_x: f64) -> PixelRect {
    let left = axis_x + axis.tick_length_px + axis.y_label_gap_px;
    PixelRect::new(
        left,
        y - axis.label_half_height_px,
        left + 2.0 * axis.label_half_width_px,
        y + axis.label_half_height_px,
    )
}

/// Occluding box of a crosshair X label, kept within `[left, right]`.
#[must_use]
pub fn x_value_box(axis: &AxisMetrics, x: f64, axis_y: f64, left: f64, right: f64) -> PixelRect {
    let text = x_tick_text_box(axis, x, axis_y).inflate(axis.label_box_padding_px);
    let start = clamp_span(text.left, text.width(), left, right);
    PixelRect::new(start, text.top, start + text.width(), text.bottom)
}

/// Occluding box of a crosshair Y label, kept within `[top, bottom]`.
#[must_use]
pub fn y_value_box(axis: &AxisMetrics, y: f64, axis_x: f64, top: f64, bottom: f64) -> PixelRect {
    let text = y_tick_text_box(axis, y, axis_x).inflate(axis.label_box_padding_px);
    let start = clamp_span(text.top, text.height(), top, bottom);
    PixelRect::new(text.left, start, text.right, start + text.height())
}

/// Box anchored just right of and below `(x, y)`, translated back inside `bounds`.
#[must_use]
pub fn trailing_box(x: f64, y: f64, width: f64, height: f64, gap: f64, bounds: PixelRect) -> PixelRect {
    let left = clamp_span(x + gap, width, bounds.left, bounds.right);
    let top = clamp_span(y + gap, height, bounds.top, bounds.bottom);
    PixelRect::new(left, top, left + width, top + height)
}
