use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Colours, pens and font used for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub background_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
    pub label_box_fill_color: Color,
    pub crosshair_color: Color,
    /// Crosshair pen while the pointer is over the volume band.
    pub volume_crosshair_color: Color,
    pub selection_color: Color,
    pub selection_fill_color: Color,
    pub up_color: Color,
    pub down_color: Color,
    pub candle_outline_color: Color,
    /// Alpha applied to the up/down colour of volume bars, in 0..=255 steps.
    pub volume_alpha: u8,
    pub scrollbar_background_color: Color,
    pub scrollbar_window_color: Color,
    pub axis_line_width: f64,
    pub guide_line_width: f64,
    pub guide_dash: LineStrokeStyle,
    pub font_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            label_color: Color::rgb(0.0, 0.0, 0.0),
            label_box_fill_color: Color::rgb(1.0, 1.0, 1.0),
            crosshair_color: Color::rgb(0.0, 0.0, 1.0),
            volume_crosshair_color: Color::rgb(0.6, 0.0, 0.6),
            selection_color: Color::rgb(0.5, 0.5, 0.5),
            selection_fill_color: Color::rgba(0.5, 0.5, 0.5, 0.25),
            up_color: Color::rgb(0.0, 0.6, 0.0),
            down_color: Color::rgb(0.8, 0.0, 0.0),
            candle_outline_color: Color::rgb(0.0, 0.0, 0.0),
            volume_alpha: 80,
            scrollbar_background_color: Color::rgb(0.94, 0.94, 0.94),
            scrollbar_window_color: Color::rgba(0.0, 0.0, 1.0, 0.2),
            axis_line_width: 1.0,
            guide_line_width: 1.0,
            guide_dash: LineStrokeStyle::Dashed { on: 4.0, off: 4.0 },
            font_size_px: 10.0,
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn volume_color(&self, up: bool) -> Color {
        let base = if up { self.up_color } else { self.down_color };
        base.with_alpha_u8(self.volume_alpha)
    }

    #[must_use]
    pub fn candle_color(&self, up: bool) -> Color {
        if up { self.up_color } else { self.down_color }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.background_color,
            self.axis_color,
            self.label_color,
            self.label_box_fill_color,
            self.crosshair_color,
            self.volume_crosshair_color,
            self.selection_color,
            self.selection_fill_color,
            self.up_color,
            self.down_color,
            self.candle_outline_color,
            self.scrollbar_background_color,
            self.scrollbar_window_color,
        ] {
            color.validate()?;
        }
        for (name, width) in [
            ("axis_line_width", self.axis_line_width),
            ("guide_line_width", self.guide_line_width),
            ("font_size_px", self.font_size_px),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}
