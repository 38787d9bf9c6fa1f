mod chart_state;
mod crosshair;
mod data_controller;
mod engine;
mod engine_config;
mod input_router;
mod interaction_coordinator;
pub mod label_box;
mod layout;
mod minimap;
mod overlay_renderer;
mod render_style;
mod selection;
mod viewport_controller;

pub use chart_state::ChartState;
pub use crosshair::{HoveredCandle, hovered_candle};
pub use engine::ChartEngine;
pub use engine_config::{AxisMetrics, CandleMetrics, ChartConfig};
pub use input_router::{StateDelta, dispatch};
pub use layout::{ChartLayout, HitRegion};
pub use minimap::{strip_fraction, window_indicator};
pub use overlay_renderer::{paint_chart, tick_positions};
pub use render_style::ChartStyle;
pub use selection::{SelectionSummary, selection_summary};
pub use viewport_controller::{ViewportController, ViewportState, ZoomDirection, ZoomLimits};
