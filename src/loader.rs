//! Line-oriented CSV data provider.
//!
//! Each record carries exactly seven fields:
//! `date,time,open,high,low,close,volume`. Records are buffered in chunks and
//! appended to the series one chunk at a time.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::core::{Candle, Series};
use crate::error::{ChartError, ChartResult};

/// Number of fields every record must have.
pub const RECORD_FIELD_COUNT: usize = 7;

/// Records buffered before each bulk append unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Reads candle records into a [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesLoader {
    chunk_size: usize,
}

impl Default for SeriesLoader {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SeriesLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the append batch size. Zero is treated as one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    #[must_use]
    pub fn chunk_size(self) -> usize {
        self.chunk_size
    }

    /// Appends every record of `source` to `series` and returns how many were read.
    ///
    /// A malformed record aborts the load. Chunks appended before the failure
    /// stay in `series`; records buffered for the failing chunk are dropped.
    pub fn load_into<R: Read>(self, source: R, series: &mut Series) -> ChartResult<usize> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        let mut chunk = Vec::with_capacity(self.chunk_size);
        let mut loaded = 0_usize;
        let mut record = StringRecord::new();

        loop {
            match reader.read_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => return Err(map_csv_error(err)),
            }
            let line = record.position().map_or(0, csv::Position::line);
            chunk.push(parse_record(&record, line)?);

            if chunk.len() == self.chunk_size {
                series.append(&chunk)?;
                loaded += chunk.len();
                chunk.clear();
            }
        }
        if !chunk.is_empty() {
            series.append(&chunk)?;
            loaded += chunk.len();
        }

        debug!(loaded, total = series.len(), chunk_size = self.chunk_size, "loaded candles");
        Ok(loaded)
    }

    /// Opens `path` and loads it into a fresh series.
    pub fn load_path(self, path: impl AsRef<Path>) -> ChartResult<Series> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "reading candle file");
        let mut series = Series::new();
        self.load_into(file, &mut series)?;
        Ok(series)
    }
}

/// Loads a whole source with the default chunk size.
pub fn load_series<R: Read>(source: R) -> ChartResult<Series> {
    let mut series = Series::new();
    SeriesLoader::default().load_into(source, &mut series)?;
    Ok(series)
}

/// Opens and loads a CSV file with the default chunk size.
pub fn load_series_from_path(path: impl AsRef<Path>) -> ChartResult<Series> {
    SeriesLoader::default().load_path(path)
}

fn parse_record(record: &StringRecord, line: u64) -> ChartResult<Candle> {
    if record.len() != RECORD_FIELD_COUNT {
        return Err(ChartError::Parse {
            line,
            message: format!(
                "expected {RECORD_FIELD_COUNT} fields, found {}",
                record.len()
            ),
        });
    }

    let candle = Candle::new(
        parse_field(record, 0, "date", line)?,
        parse_field(record, 1, "time", line)?,
        parse_field(record, 2, "open", line)?,
        parse_field(record, 3, "high", line)?,
        parse_field(record, 4, "low", line)?,
        parse_field(record, 5, "close", line)?,
        parse_field(record, 6, "volume", line)?,
    );
    candle.validate().map_err(|err| ChartError::Parse {
        line,
        message: err.to_string(),
    })?;
    Ok(candle)
}

fn parse_field<T: FromStr>(
    record: &StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> ChartResult<T> {
    let raw = record.get(index).unwrap_or_default();
    raw.parse().map_err(|_| ChartError::Parse {
        line,
        message: format!("field `{name}` has invalid value `{raw}`"),
    })
}

fn map_csv_error(err: csv::Error) -> ChartError {
    let line = err.position().map_or(0, csv::Position::line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => ChartError::Io(io),
        _ => ChartError::Parse { line, message },
    }
}

#[cfg(test)]
mod tests {
    use super::{SeriesLoader, load_series};
    use crate::core::Series;
    use crate::error::ChartError;

    #[test]
    fn crlf_lines_and_blank_lines_are_accepted() {
        let source = "20240101,100000,1,2,0.5,1.5,10\r\n\r\n20240101,100100,1.5,3,1,2.5,12\r\n";
        let series = load_series(source.as_bytes()).expect("load");
        assert_eq!(series.len(), 2);
        assert_eq!(series.candles()[1].close, 2.5);
    }

    #[test]
    fn non_numeric_field_reports_line() {
        let source = "20240101,100000,1,2,0.5,1.5,10\n20240101,100100,x,3,1,2.5,12\n";
        let err = load_series(source.as_bytes()).expect_err("bad field");
        assert!(matches!(err, ChartError::Parse { line: 2, .. }));
    }

    #[test]
    fn zero_chunk_size_is_bumped_to_one() {
        let loader = SeriesLoader::new().with_chunk_size(0);
        assert_eq!(loader.chunk_size(), 1);

        let mut series = Series::new();
        let loaded = loader
            .load_into("1,1,1,1,1,1,1\n".as_bytes(), &mut series)
            .expect("load");
        assert_eq!(loaded, 1);
    }
}
