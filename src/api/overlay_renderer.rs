use smallvec::SmallVec;

use crate::core::{PixelRect, format_label};
use crate::render::{Color, DrawSurface, LinePrimitive, RectPrimitive, TextAlign, TextPrimitive};

use super::label_box::{x_tick_text_box, y_tick_text_box};
use super::{ChartState, crosshair, minimap, selection};

/// Interior tick positions: `count - 1` evenly spaced points strictly between
/// `start` and `end`.
#[must_use]
pub fn tick_positions(start: f64, end: f64, count: usize) -> SmallVec<[f64; 16]> {
    let step = (end - start) / count as f64;
    (1..count).map(|i| start + step * i as f64).collect()
}

/// Emits one full paint pass of the chart onto `surface`.
///
/// Later calls occlude earlier ones, so overlays come after the data.
pub fn paint_chart(state: &ChartState, surface: &mut impl DrawSurface) {
    surface.clear(state.style.background_color);
    paint_axes(state, surface);
    paint_ticks(state, surface);
    paint_volume_ticks(state, surface);
    paint_candles(state, surface);
    minimap::paint(state, surface);
    crosshair::paint(state, surface);
    selection::paint(state, surface);
}

fn paint_axes(state: &ChartState, surface: &mut impl DrawSurface) {
    let layout = &state.layout;
    let style = &state.style;
    let main = layout.main;

    surface.draw_line(LinePrimitive::new(
        main.left,
        layout.plot_bottom,
        main.right,
        layout.plot_bottom,
        style.axis_line_width,
        style.axis_color,
    ));
    surface.draw_line(LinePrimitive::new(
        main.right,
        main.top,
        main.right,
        layout.plot_bottom,
        style.axis_line_width,
        style.axis_color,
    ));
    if layout.volume.is_some() {
        surface.draw_line(LinePrimitive::new(
            main.left,
            main.bottom,
            main.right,
            main.bottom,
            style.axis_line_width,
            style.axis_color,
        ));
    }
}

fn paint_ticks(state: &ChartState, surface: &mut impl DrawSurface) {
    let axis = &state.config.axis;
    let layout = &state.layout;
    let main = layout.main;

    let x_mapper = state.x_mapper();
    for x in tick_positions(main.left, main.right, axis.x_tick_count) {
        let label = format_label(x_mapper.data_at(x) as f32, axis.max_label_len);
        paint_x_tick(state, surface, x, label);
    }

    let price_mapper = state.price_mapper();
    for y in tick_positions(main.top, main.bottom, axis.y_tick_count) {
        let label = format_label(price_mapper.data_at(y) as f32, axis.max_label_len);
        paint_y_tick(state, surface, y, label);
    }
}

fn paint_volume_ticks(state: &ChartState, surface: &mut impl DrawSurface) {
    let (Some(band), Some(mapper)) = (state.layout.volume, state.volume_mapper()) else {
        return;
    };
    let axis = &state.config.axis;
    for y in tick_positions(band.top, band.bottom, axis.volume_tick_count) {
        let label = format_label(mapper.data_at(y) as f32, axis.max_label_len);
        paint_y_tick(state, surface, y, label);
    }
}

fn paint_x_tick(state: &ChartState, surface: &mut impl DrawSurface, x: f64, label: String) {
    let axis = &state.config.axis;
    let style = &state.style;
    let axis_y = state.layout.plot_bottom;
    surface.draw_line(LinePrimitive::new(
        x,
        axis_y,
        x,
        axis_y + axis.tick_length_px,
        style.axis_line_width,
        style.axis_color,
    ));
    surface.draw_text(TextPrimitive::new(
        label,
        x_tick_text_box(axis, x, axis_y),
        TextAlign::Center,
        style.font_size_px,
        style.label_color,
    ));
}

fn paint_y_tick(state: &ChartState, surface: &mut impl DrawSurface, y: f64, label: String) {
    let axis = &state.config.axis;
    let style = &state.style;
    let axis_x = state.layout.main.right;
    surface.draw_line(LinePrimitive::new(
        axis_x,
        y,
        axis_x + axis.tick_length_px,
        y,
        style.axis_line_width,
        style.axis_color,
    ));
    surface.draw_text(TextPrimitive::new(
        label,
        y_tick_text_box(axis, y, axis_x),
        TextAlign::Left,
        style.font_size_px,
        style.label_color,
    ));
}

/// Candles and volume bars, newest at the right.
fn paint_candles(state: &ChartState, surface: &mut impl DrawSurface) {
    let viewport = state.viewport_state();
    if viewport.visible_count == 0 {
        return;
    }
    let style = &state.style;
    let main = state.layout.main;
    let price = state.price_mapper();
    let volume = state.volume_mapper().zip(state.layout.volume);
    let step = viewport.candle_step();
    let width = f64::from(viewport.candle_width);

    let window = state
        .series
        .window(viewport.visible_count, viewport.offset_from_end);
    for (i, candle) in window.iter().rev().enumerate() {
        let x_max = main.right - (i + 1) as f64 * step;
        let x_min = x_max - width;
        let centre = x_min + width / 2.0;
        let up = candle.is_up();

        surface.draw_line(LinePrimitive::new(
            centre,
            price.pixel_at(f64::from(candle.high)),
            centre,
            price.pixel_at(f64::from(candle.low)),
            1.0,
            style.candle_outline_color,
        ));

        let open_y = price.pixel_at(f64::from(candle.open));
        let close_y = price.pixel_at(f64::from(candle.close));
        let body = RectPrimitive::new(
            x_min,
            open_y.min(close_y),
            width,
            (open_y - close_y).abs().max(1.0),
            style.candle_color(up),
        );
        surface.fill_rect(body);
        surface.draw_rect(RectPrimitive {
            color: style.candle_outline_color,
            ..body
        });

        if let Some((mapper, band)) = volume {
            let top = mapper.pixel_at(f64::from(candle.volume)).clamp(band.top, band.bottom);
            surface.fill_rect(RectPrimitive::from_rect(
                PixelRect::new(x_min, top, x_max, band.bottom),
                style.volume_color(up),
            ));
        }
    }
}

/// Value label drawn over the axis: filled to hide ticks below, then outlined.
pub(super) fn paint_value_label(
    state: &ChartState,
    surface: &mut impl DrawSurface,
    rect: PixelRect,
    text: String,
    border: Color,
) {
    let style = &state.style;
    surface.fill_rect(RectPrimitive::from_rect(rect, style.label_box_fill_color));
    surface.draw_rect(RectPrimitive::from_rect(rect, border));
    surface.draw_text(TextPrimitive::new(
        text,
        rect,
        TextAlign::Center,
        style.font_size_px,
        style.label_color,
    ));
}
