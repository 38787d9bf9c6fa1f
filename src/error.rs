use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A source record could not be turned into a candle.
    ///
    /// `line` is the 1-based line of the offending record in the source.
    #[error("parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot grow series storage by {requested} candles")]
    ResourceExhausted { requested: usize },

    #[error("render backend error: {0}")]
    Render(String),
}
