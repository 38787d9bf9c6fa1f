use crate::core::{DataPoint, PixelPoint, PixelRect, format_delta_label, format_label};
use crate::render::{DrawSurface, LinePrimitive, RectPrimitive};

use super::ChartState;
use super::label_box::{trailing_box, x_value_box, y_value_box};
use super::overlay_renderer::paint_value_label;

/// Average glyph advance relative to the font size, used to size the delta box.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Data-space view of the current drag selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionSummary {
    pub start: DataPoint,
    pub end: DataPoint,
    /// Absolute candle-offset and price distance between the anchors.
    pub delta: DataPoint,
    /// Whether the button is still held.
    pub active: bool,
}

/// Both selection anchors clamped into the main plot.
fn anchors(state: &ChartState) -> Option<(PixelPoint, PixelPoint)> {
    if !state.config.interaction.select_area_with_mouse {
        return None;
    }
    let main = state.layout.main;
    if main.is_empty() {
        return None;
    }
    let press = state.interaction.press_position()?;
    let end = state.interaction.selection_end()?;
    Some((main.clamp_point(press), main.clamp_point(end)))
}

#[must_use]
pub fn selection_summary(state: &ChartState) -> Option<SelectionSummary> {
    let (press, end) = anchors(state)?;
    let x = state.x_mapper();
    let price = state.price_mapper();
    let start = DataPoint::new(x.data_at(press.x), price.data_at(press.y));
    let end = DataPoint::new(x.data_at(end.x), price.data_at(end.y));
    Some(SelectionSummary {
        start,
        end,
        delta: DataPoint::new((end.x - start.x).abs(), (end.y - start.y).abs()),
        active: state.interaction.is_pressed(),
    })
}

/// Draws the drag selection: guides and labels for both anchors, the
/// translucent area and the delta readout next to the second anchor.
pub(super) fn paint(state: &ChartState, surface: &mut impl DrawSurface) {
    let (Some((press, end)), Some(summary)) = (anchors(state), selection_summary(state)) else {
        return;
    };
    let style = &state.style;
    let axis = &state.config.axis;

    for anchor in [press, end] {
        paint_anchor(state, surface, anchor);
    }

    surface.fill_rect(RectPrimitive::from_rect(
        PixelRect::new(
            press.x.min(end.x),
            press.y.min(end.y),
            press.x.max(end.x),
            press.y.max(end.y),
        ),
        style.selection_fill_color,
    ));

    let text = format_delta_label(
        summary.delta.x as f32,
        summary.delta.y as f32,
        axis.max_label_len,
    );
    let padding = axis.label_box_padding_px;
    let width = text.chars().count() as f64 * style.font_size_px * GLYPH_WIDTH_RATIO + 2.0 * padding;
    let height = 2.0 * (axis.label_half_height_px + padding);
    let rect = trailing_box(
        end.x,
        end.y,
        width,
        height,
        axis.y_label_gap_px,
        state.layout.main,
    );
    paint_value_label(state, surface, rect, text, style.selection_color);
}

fn paint_anchor(state: &ChartState, surface: &mut impl DrawSurface, anchor: PixelPoint) {
    let style = &state.style;
    let axis = &state.config.axis;
    let layout = &state.layout;
    let main = layout.main;

    surface.draw_line(
        LinePrimitive::new(
            anchor.x,
            main.top,
            anchor.x,
            main.bottom,
            style.guide_line_width,
            style.selection_color,
        )
        .with_stroke_style(style.guide_dash),
    );
    surface.draw_line(
        LinePrimitive::new(
            main.left,
            anchor.y,
            main.right,
            anchor.y,
            style.guide_line_width,
            style.selection_color,
        )
        .with_stroke_style(style.guide_dash),
    );

    let x_value = state.x_mapper().data_at(anchor.x);
    paint_value_label(
        state,
        surface,
        x_value_box(axis, anchor.x, layout.plot_bottom, main.left, main.right),
        format_label(x_value as f32, axis.max_label_len),
        style.selection_color,
    );
    let y_value = state.price_mapper().data_at(anchor.y);
    paint_value_label(
        state,
        surface,
        y_value_box(axis, anchor.y, main.right, main.top, main.bottom),
        format_label(y_value as f32, axis.max_label_len),
        style.selection_color,
    );
}
