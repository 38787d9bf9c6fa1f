//! ohlcv-chart: candlestick chart core for one OHLCV series.
//!
//! The crate maps data space onto pixel space, keeps the zoomed viewport in
//! sync with the series, and emits every paint pass as primitive draw calls
//! (axes, candles, volume band, crosshair, drag selection, minimap strip).
//! Backends consume those calls through [`render::DrawSurface`] or a recorded
//! [`render::RenderFrame`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartEngine, ChartState, ChartStyle};
pub use error::{ChartError, ChartResult};
