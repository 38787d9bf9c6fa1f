use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MAX_LABEL_LEN, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionOptions;
use crate::loader::DEFAULT_CHUNK_SIZE;

/// Pixel metrics of the axis area, ticks and value labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisMetrics {
    pub left_border_px: f64,
    pub top_border_px: f64,
    /// Width reserved right of the plot for Y labels.
    pub right_border_px: f64,
    /// Height reserved below the plot for X labels.
    pub bottom_border_px: f64,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub volume_tick_count: usize,
    pub tick_length_px: f64,
    /// Gap between an X tick mark and its label.
    pub x_label_gap_px: f64,
    /// Gap between a Y tick mark and its label.
    pub y_label_gap_px: f64,
    pub label_half_width_px: f64,
    pub label_half_height_px: f64,
    /// Extra margin of crosshair/selection label boxes around the text box.
    pub label_box_padding_px: f64,
    pub max_label_len: usize,
}

impl Default for AxisMetrics {
    fn default() -> Self {
        Self {
            left_border_px: 0.0,
            top_border_px: 0.0,
            right_border_px: 52.0,
            bottom_border_px: 20.0,
            x_tick_count: 10,
            y_tick_count: 10,
            volume_tick_count: 3,
            tick_length_px: 4.0,
            x_label_gap_px: 2.0,
            y_label_gap_px: 4.0,
            label_half_width_px: 20.0,
            label_half_height_px: 5.0,
            label_box_padding_px: 1.0,
            max_label_len: DEFAULT_MAX_LABEL_LEN,
        }
    }
}

/// Candle width and its zoom limits, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandleMetrics {
    pub width_px: u32,
    pub min_width_px: u32,
    pub max_width_px: u32,
    pub gap_px: u32,
}

impl Default for CandleMetrics {
    fn default() -> Self {
        Self {
            width_px: 15,
            min_width_px: 3,
            max_width_px: 50,
            gap_px: 2,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can keep chart setup in a
/// config file. Every field falls back to its default when missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub candles: CandleMetrics,
    #[serde(default)]
    pub axis: AxisMetrics,
    #[serde(default = "default_true")]
    pub show_volume: bool,
    #[serde(default = "default_volume_panel_height")]
    pub volume_panel_height_px: f64,
    #[serde(default = "default_true")]
    pub show_scrollbar: bool,
    #[serde(default = "default_scrollbar_height")]
    pub scrollbar_height_px: f64,
    #[serde(default)]
    pub interaction: InteractionOptions,
    #[serde(default = "default_chunk_size")]
    pub loader_chunk_size: usize,
}

impl ChartConfig {
    /// Creates a config with default metrics for a surface of `viewport` size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            candles: CandleMetrics::default(),
            axis: AxisMetrics::default(),
            show_volume: true,
            volume_panel_height_px: default_volume_panel_height(),
            show_scrollbar: true,
            scrollbar_height_px: default_scrollbar_height(),
            interaction: InteractionOptions::default(),
            loader_chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    #[must_use]
    pub fn with_candles(mut self, candles: CandleMetrics) -> Self {
        self.candles = candles;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisMetrics) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_volume_panel(mut self, enabled: bool) -> Self {
        self.show_volume = enabled;
        self
    }

    #[must_use]
    pub fn with_scrollbar(mut self, enabled: bool) -> Self {
        self.show_scrollbar = enabled;
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionOptions) -> Self {
        self.interaction = interaction;
        self
    }

    #[must_use]
    pub fn with_loader_chunk_size(mut self, chunk_size: usize) -> Self {
        self.loader_chunk_size = chunk_size;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let candles = self.candles;
        if candles.min_width_px == 0 || candles.min_width_px > candles.max_width_px {
            return Err(ChartError::InvalidConfig(
                "candle widths must satisfy 0 < min <= max".to_owned(),
            ));
        }
        if !(candles.min_width_px..=candles.max_width_px).contains(&candles.width_px) {
            return Err(ChartError::InvalidConfig(
                "candle width must lie within the zoom limits".to_owned(),
            ));
        }

        let axis = self.axis;
        for (name, value) in [
            ("left_border_px", axis.left_border_px),
            ("top_border_px", axis.top_border_px),
            ("right_border_px", axis.right_border_px),
            ("bottom_border_px", axis.bottom_border_px),
            ("tick_length_px", axis.tick_length_px),
            ("x_label_gap_px", axis.x_label_gap_px),
            ("y_label_gap_px", axis.y_label_gap_px),
            ("label_half_width_px", axis.label_half_width_px),
            ("label_half_height_px", axis.label_half_height_px),
            ("label_box_padding_px", axis.label_box_padding_px),
            ("volume_panel_height_px", self.volume_panel_height_px),
            ("scrollbar_height_px", self.scrollbar_height_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if axis.x_tick_count == 0 || axis.y_tick_count == 0 || axis.volume_tick_count == 0 {
            return Err(ChartError::InvalidConfig(
                "tick counts must be > 0".to_owned(),
            ));
        }
        if axis.max_label_len == 0 {
            return Err(ChartError::InvalidConfig(
                "max label length must be > 0".to_owned(),
            ));
        }
        if self.loader_chunk_size == 0 {
            return Err(ChartError::InvalidConfig(
                "loader chunk size must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(640, 480))
    }
}

fn default_true() -> bool {
    true
}

fn default_volume_panel_height() -> f64 {
    80.0
}

fn default_scrollbar_height() -> f64 {
    30.0
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
