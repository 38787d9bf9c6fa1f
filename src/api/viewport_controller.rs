use tracing::{debug, trace, warn};

use crate::core::{DataRange, Series};

use super::CandleMetrics;

/// Smallest spread given to a price range whose bounds coincide.
const MIN_PRICE_SPREAD: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Inclusive candle width bounds in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLimits {
    pub min: u32,
    pub max: u32,
}

impl ZoomLimits {
    /// Next width for one zoom step, snapped onto the bound it would overshoot.
    #[must_use]
    pub fn step(self, width: u32, direction: ZoomDirection) -> u32 {
        match direction {
            ZoomDirection::In => {
                let doubled = width.saturating_mul(2);
                if doubled >= self.max { self.max } else { doubled }
            }
            ZoomDirection::Out => {
                let halved = width / 2;
                if halved <= self.min { self.min } else { halved }
            }
        }
    }
}

/// Zoom level, visible window and data bounds of the main plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub candle_width: u32,
    pub candle_gap: u32,
    pub visible_count: usize,
    /// Candles between the newest one and the right end of the window.
    pub offset_from_end: usize,
    pub x_bounds: DataRange,
    pub y_bounds: DataRange,
    pub volume_bounds: DataRange,
}

impl ViewportState {
    #[must_use]
    pub fn new(candles: CandleMetrics) -> Self {
        Self {
            candle_width: candles.width_px,
            candle_gap: candles.gap_px,
            visible_count: 0,
            offset_from_end: 0,
            x_bounds: DataRange::new(-1.0, 0.0),
            y_bounds: DataRange::new(0.0, 1.0),
            volume_bounds: DataRange::new(0.0, 1.0),
        }
    }

    /// Horizontal pixels per candle slot, body plus gap.
    #[must_use]
    pub fn candle_step(&self) -> f64 {
        f64::from(self.candle_width) + f64::from(self.candle_gap)
    }
}

/// Owns the viewport state and recomputes it lazily.
///
/// Resize, zoom and scroll only mark the state dirty. The next
/// [`ViewportController::ensure_bounds`] call performs a single recompute, so
/// any number of events between two paints coalesce.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    state: ViewportState,
    limits: ZoomLimits,
    plot_width: f64,
    dirty: bool,
    recompute_count: u64,
}

impl ViewportController {
    #[must_use]
    pub fn new(candles: CandleMetrics) -> Self {
        Self {
            state: ViewportState::new(candles),
            limits: ZoomLimits {
                min: candles.min_width_px,
                max: candles.max_width_px,
            },
            plot_width: 0.0,
            dirty: true,
            recompute_count: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.plot_width
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of bounds recomputations performed so far.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Forces a recompute on the next paint, e.g. after new candles arrived.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn on_resize(&mut self, plot_width: f64) {
        let plot_width = if plot_width.is_finite() && plot_width > 0.0 {
            plot_width
        } else {
            warn!(plot_width, "non-positive plot width treated as empty");
            0.0
        };
        trace!(plot_width, "viewport resize");
        self.plot_width = plot_width;
        self.dirty = true;
    }

    /// Applies one zoom step. Returns whether the candle width changed.
    pub fn on_zoom_change(&mut self, direction: ZoomDirection) -> bool {
        let previous = self.state.candle_width;
        let next = self.limits.step(previous, direction);
        if next == previous {
            return false;
        }
        debug!(from = previous, to = next, ?direction, "zoom candle width");
        self.state.candle_width = next;
        self.dirty = true;
        true
    }

    /// Requests a window ending `offset_from_end` candles before the newest.
    ///
    /// The offset is clamped against the series on the next recompute.
    pub fn scroll_to(&mut self, offset_from_end: usize) {
        if offset_from_end == self.state.offset_from_end && !self.dirty {
            return;
        }
        trace!(offset_from_end, "viewport scroll");
        self.state.offset_from_end = offset_from_end;
        self.dirty = true;
    }

    /// Centres the window at `fraction` of the series, measured from the newest
    /// candle (`0.0`) towards the oldest (`1.0`).
    pub fn scroll_to_fraction(&mut self, fraction: f64, series_len: usize) {
        if !fraction.is_finite() {
            warn!(fraction, "ignoring non-finite scroll fraction");
            return;
        }
        let centre = fraction.clamp(0.0, 1.0) * series_len as f64;
        let half_window = self.state.visible_count as f64 / 2.0;
        let offset = (centre - half_window).round().max(0.0) as usize;
        self.scroll_to(offset);
    }

    /// Recomputes the visible window and its bounds if anything changed.
    ///
    /// Returns `true` when a recompute ran. An empty series leaves the state
    /// untouched and the controller dirty.
    pub fn ensure_bounds(&mut self, series: &Series) -> bool {
        if !self.dirty || series.is_empty() {
            return false;
        }
        self.recompute(series);
        self.dirty = false;
        self.recompute_count += 1;
        true
    }

    fn recompute(&mut self, series: &Series) {
        let step = self.state.candle_step();
        let fit = if self.plot_width > step {
            ((self.plot_width - step) / step).floor() as usize
        } else {
            0
        };
        let visible = fit.min(series.len());
        self.state.visible_count = visible;
        if visible == 0 {
            warn!(plot_width = self.plot_width, step, "no candle fits the plot, bounds kept");
            return;
        }

        let offset = self.state.offset_from_end.min(series.len() - visible);
        self.state.offset_from_end = offset;

        let window = series.window(visible, offset);
        let (mut low, mut high, mut max_volume) = (f32::INFINITY, f32::NEG_INFINITY, 0.0_f32);
        for candle in window {
            low = low.min(candle.low);
            high = high.max(candle.high);
            max_volume = max_volume.max(candle.volume);
        }

        let mut y_bounds = DataRange::new(f64::from(low), f64::from(high));
        if y_bounds.is_degenerate() {
            y_bounds = y_bounds.widened(MIN_PRICE_SPREAD);
            warn!(price = f64::from(low), "flat price window widened");
        }
        let volume_bounds = if max_volume > 0.0 {
            DataRange::new(0.0, f64::from(max_volume))
        } else {
            DataRange::new(0.0, 1.0)
        };

        self.state.x_bounds = DataRange::new(-((offset + visible) as f64), 0.0 - offset as f64);
        self.state.y_bounds = y_bounds;
        self.state.volume_bounds = volume_bounds;

        debug!(
            visible,
            offset,
            y_min = y_bounds.min,
            y_max = y_bounds.max,
            volume_max = volume_bounds.max,
            "viewport bounds recomputed"
        );
    }
}
