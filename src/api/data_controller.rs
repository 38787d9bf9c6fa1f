use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::Candle;
use crate::error::ChartResult;
use crate::loader::SeriesLoader;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Appends candles in order. They are picked up by the next paint.
    pub fn append_candles(&mut self, candles: &[Candle]) -> ChartResult<()> {
        for candle in candles {
            candle.validate()?;
        }
        self.state.series.append(candles)?;
        self.state.viewport.invalidate();
        debug!(
            appended = candles.len(),
            total = self.state.series.len(),
            "append candles"
        );
        Ok(())
    }

    /// Streams CSV records into the series using the configured chunk size.
    ///
    /// On error, candles from chunks completed before the bad record stay
    /// in the series.
    pub fn load_from_reader(&mut self, source: impl Read) -> ChartResult<usize> {
        let loader = self.loader();
        let result = loader.load_into(source, &mut self.state.series);
        self.state.viewport.invalidate();
        match &result {
            Ok(loaded) => debug!(loaded, total = self.state.series.len(), "series loaded"),
            Err(err) => warn!(
                error = %err,
                retained = self.state.series.len(),
                "series load aborted"
            ),
        }
        result
    }

    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> ChartResult<usize> {
        let file = std::fs::File::open(path.as_ref())?;
        self.load_from_reader(std::io::BufReader::new(file))
    }

    fn loader(&self) -> SeriesLoader {
        SeriesLoader::new().with_chunk_size(self.state.config.loader_chunk_size)
    }
}
