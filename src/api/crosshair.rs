use chrono::NaiveDateTime;

use crate::core::{AxisMapper, Candle, PixelRect, format_label};
use crate::render::{Color, CursorShape, DrawSurface, LinePrimitive};

use super::label_box::{x_value_box, y_value_box};
use super::overlay_renderer::paint_value_label;
use super::{ChartState, HitRegion};

/// Candle under the pointer in the main plot or volume band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoveredCandle {
    /// Position counted back from the newest candle (`0` = newest).
    pub back_offset: usize,
    pub candle: Candle,
    pub datetime: Option<NaiveDateTime>,
}

struct CrosshairTarget {
    region: PixelRect,
    mapper: AxisMapper,
    pen: Color,
}

fn target(state: &ChartState) -> Option<CrosshairTarget> {
    if !state.config.interaction.show_labels_with_mouse || !state.interaction.is_entered() {
        return None;
    }
    let pointer = state.interaction.pointer()?;
    match state.layout.hit_test(pointer) {
        HitRegion::MainPlot => Some(CrosshairTarget {
            region: state.layout.main,
            mapper: state.price_mapper(),
            pen: state.style.crosshair_color,
        }),
        HitRegion::VolumePlot => Some(CrosshairTarget {
            region: state.layout.volume?,
            mapper: state.volume_mapper()?,
            pen: state.style.volume_crosshair_color,
        }),
        HitRegion::Scrollbar | HitRegion::Outside => None,
    }
}

/// Draws the pointer crosshair and requests the matching cursor glyph.
pub(super) fn paint(state: &ChartState, surface: &mut impl DrawSurface) {
    let (Some(target), Some(pointer)) = (target(state), state.interaction.pointer()) else {
        surface.set_cursor(CursorShape::Default);
        return;
    };
    surface.set_cursor(CursorShape::Crosshair);

    let axis = &state.config.axis;
    let style = &state.style;
    let layout = &state.layout;
    let main = layout.main;
    let point = target.region.clamp_point(pointer);

    surface.draw_line(
        LinePrimitive::new(point.x, main.top, point.x, layout.plot_bottom, style.guide_line_width, target.pen)
            .with_stroke_style(style.guide_dash),
    );
    surface.draw_line(
        LinePrimitive::new(
            target.region.left,
            point.y,
            target.region.right,
            point.y,
            style.guide_line_width,
            target.pen,
        )
        .with_stroke_style(style.guide_dash),
    );
    surface.draw_line(LinePrimitive::new(
        point.x,
        layout.plot_bottom,
        point.x,
        layout.plot_bottom + axis.tick_length_px,
        style.axis_line_width,
        target.pen,
    ));
    surface.draw_line(LinePrimitive::new(
        main.right,
        point.y,
        main.right + axis.tick_length_px,
        point.y,
        style.axis_line_width,
        target.pen,
    ));

    let x_value = state.x_mapper().data_at(point.x);
    paint_value_label(
        state,
        surface,
        x_value_box(axis, point.x, layout.plot_bottom, main.left, main.right),
        format_label(x_value as f32, axis.max_label_len),
        target.pen,
    );
    let y_value = target.mapper.data_at(point.y);
    paint_value_label(
        state,
        surface,
        y_value_box(axis, point.y, main.right, target.region.top, target.region.bottom),
        format_label(y_value as f32, axis.max_label_len),
        target.pen,
    );
}

/// Candle whose slot lies under the pointer, if any.
#[must_use]
pub fn hovered_candle(state: &ChartState) -> Option<HoveredCandle> {
    let pointer = state.interaction.pointer()?;
    if !matches!(
        state.layout.hit_test(pointer),
        HitRegion::MainPlot | HitRegion::VolumePlot
    ) {
        return None;
    }
    let viewport = state.viewport_state();
    let step = viewport.candle_step();
    let right = state.layout.main.right;
    let slot = ((right - pointer.x) / step).floor() as i64 - 1;
    let slot = usize::try_from(slot).ok().filter(|slot| *slot < viewport.visible_count)?;
    // The gap left of each body belongs to no candle.
    let body_left = right - (slot + 1) as f64 * step - f64::from(viewport.candle_width);
    if pointer.x < body_left {
        return None;
    }
    let back_offset = viewport.offset_from_end + slot;
    let candle = *state.series.from_end(back_offset)?;
    Some(HoveredCandle {
        back_offset,
        candle,
        datetime: candle.datetime(),
    })
}
