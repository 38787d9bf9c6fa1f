use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed pixel interval along one screen axis.
///
/// `min` is the pixel that maps to the data minimum. For the vertical axis
/// this is the *bottom* edge, so `min > max` there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Closed interval in data units (price, volume or candle index offset).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub min: f64,
    pub max: f64,
}

impl DataRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Builds a range usable by the mapper: finite bounds with a non-zero span.
    pub fn checked(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min == max {
            return Err(ChartError::InvalidData(
                "data range must be finite and non-zero".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.span().abs() > 0.0)
    }

    /// Widens a zero-span range symmetrically around its midpoint.
    ///
    /// The spread is 1% of the midpoint magnitude, never less than `min_spread`.
    #[must_use]
    pub fn widened(self, min_spread: f64) -> Self {
        if !self.is_degenerate() {
            return self;
        }
        let mid = self.min;
        let spread = (mid.abs() * 0.01).max(min_spread);
        Self::new(mid - spread, mid + spread)
    }
}

/// Maps a pixel coordinate to a data value.
///
/// At `pixel == pixels.min` the data minimum is returned as-is, which keeps
/// zero-width pixel ranges from producing NaN.
#[must_use]
pub fn to_data(pixels: AxisRange, data: DataRange, pixel: f64) -> f64 {
    if pixel == pixels.min {
        return data.min;
    }
    (data.max - data.min) * (pixel - pixels.min) / (pixels.max - pixels.min) + data.min
}

/// Maps a data value to a pixel coordinate. `data` must have a non-zero span.
#[must_use]
pub fn to_pixel(pixels: AxisRange, data: DataRange, value: f64) -> f64 {
    (value - data.min) / (data.max - data.min) * (pixels.max - pixels.min) + pixels.min
}

/// One axis: a pixel range bound to a data range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapper {
    pixels: AxisRange,
    data: DataRange,
}

impl AxisMapper {
    #[must_use]
    pub const fn new(pixels: AxisRange, data: DataRange) -> Self {
        Self { pixels, data }
    }

    /// Left-to-right axis: `left` maps to `data.min`.
    #[must_use]
    pub const fn horizontal(left: f64, right: f64, data: DataRange) -> Self {
        Self::new(AxisRange::new(left, right), data)
    }

    /// Bottom-to-top axis: `bottom` maps to `data.min`, `top` to `data.max`.
    #[must_use]
    pub const fn vertical(top: f64, bottom: f64, data: DataRange) -> Self {
        Self::new(AxisRange::new(bottom, top), data)
    }

    #[must_use]
    pub fn pixels(self) -> AxisRange {
        self.pixels
    }

    #[must_use]
    pub fn data(self) -> DataRange {
        self.data
    }

    #[must_use]
    pub fn data_at(self, pixel: f64) -> f64 {
        to_data(self.pixels, self.data, pixel)
    }

    #[must_use]
    pub fn pixel_at(self, value: f64) -> f64 {
        to_pixel(self.pixels, self.data, value)
    }
}
