use crate::core::{AxisMapper, DataRange, PixelRect, aggregate_for_strip};
use crate::render::{DrawSurface, LinePrimitive, RectPrimitive};

use super::ChartState;

/// Vertical inset of the merged candles inside the strip.
const STRIP_INSET_PX: f64 = 1.0;

/// Fraction of the series at strip pixel `x`, measured from the newest end
/// (right edge, `0.0`) to the oldest (left edge, `1.0`).
#[must_use]
pub fn strip_fraction(strip: PixelRect, x: f64) -> f64 {
    if strip.width() <= 0.0 {
        return 0.0;
    }
    ((strip.right - x) / strip.width()).clamp(0.0, 1.0)
}

/// Strip area covered by the candles currently shown in the main plot.
#[must_use]
pub fn window_indicator(state: &ChartState) -> Option<PixelRect> {
    if !state.is_scrollbar_active() {
        return None;
    }
    let strip = state.layout.scrollbar?;
    let viewport = state.viewport_state();
    let len = state.series.len() as f64;
    let near = viewport.offset_from_end as f64 / len;
    let far = (viewport.offset_from_end + viewport.visible_count) as f64 / len;
    Some(PixelRect::new(
        strip.right - far * strip.width(),
        strip.top,
        strip.right - near * strip.width(),
        strip.bottom,
    ))
}

/// Whole-series overview with the visible-window highlight.
pub(super) fn paint(state: &ChartState, surface: &mut impl DrawSurface) {
    let (Some(strip), Some(indicator)) = (state.layout.scrollbar, window_indicator(state)) else {
        return;
    };
    let style = &state.style;
    surface.fill_rect(RectPrimitive::from_rect(strip, style.scrollbar_background_color));

    let (Some(high), Some(low)) = (state.series.global_high(), state.series.global_low()) else {
        return;
    };
    let Some(aggregate) = aggregate_for_strip(state.series.candles(), strip.width()) else {
        return;
    };
    let range = DataRange::new(f64::from(low), f64::from(high)).widened(1e-3);
    let mapper = AxisMapper::vertical(strip.top + STRIP_INSET_PX, strip.bottom - STRIP_INSET_PX, range);
    let width = aggregate.candle_width;

    for (i, merged) in aggregate.candles.iter().enumerate() {
        let x_max = strip.right - i as f64 * width;
        // A partial oldest run can overhang the strip's left edge.
        let x_min = (x_max - width).max(strip.left);
        let centre = (x_min + x_max) / 2.0;
        let color = style.candle_color(merged.is_up());

        surface.draw_line(LinePrimitive::new(
            centre,
            mapper.pixel_at(f64::from(merged.high)),
            centre,
            mapper.pixel_at(f64::from(merged.low)),
            1.0,
            color,
        ));
        let open_y = mapper.pixel_at(f64::from(merged.open));
        let close_y = mapper.pixel_at(f64::from(merged.close));
        surface.draw_rect(RectPrimitive::new(
            x_min,
            open_y.min(close_y),
            x_max - x_min,
            (open_y - close_y).abs().max(1.0),
            color,
        ));
    }

    surface.fill_rect(RectPrimitive::from_rect(indicator, style.scrollbar_window_color));
    surface.draw_rect(RectPrimitive::from_rect(indicator, style.axis_color));
}

#[cfg(test)]
mod tests {
    use super::strip_fraction;
    use crate::core::PixelRect;

    #[test]
    fn fraction_runs_from_newest_edge() {
        let strip = PixelRect::new(0.0, 0.0, 200.0, 30.0);
        assert_eq!(strip_fraction(strip, 200.0), 0.0);
        assert_eq!(strip_fraction(strip, 0.0), 1.0);
        assert_eq!(strip_fraction(strip, 150.0), 0.25);
        assert_eq!(strip_fraction(strip, -40.0), 1.0);
    }
}
