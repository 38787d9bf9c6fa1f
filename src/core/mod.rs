pub mod aggregation;
pub mod axis;
pub mod candle;
pub mod label;
pub mod series;
pub mod types;

pub use aggregation::{MergedCandle, MinimapAggregate, aggregate_for_strip};
pub use axis::{AxisMapper, AxisRange, DataRange, to_data, to_pixel};
pub use candle::Candle;
pub use label::{DEFAULT_MAX_LABEL_LEN, format_delta_label, format_label};
pub use series::Series;
pub use types::{DataPoint, PixelPoint, PixelRect, Viewport};
