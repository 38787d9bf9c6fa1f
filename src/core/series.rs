use tracing::trace;

use crate::core::Candle;
use crate::error::{ChartError, ChartResult};

/// Append-only, oldest-first candle store with running extremes.
///
/// `global_high`/`global_low` are folded in at append time and never
/// recomputed, so they always describe every candle appended so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    candles: Vec<Candle>,
    global_high: Option<f32>,
    global_low: Option<f32>,
}

impl Series {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch of candles in order.
    ///
    /// Storage is reserved before anything is copied: on allocation failure
    /// the series is left untouched and `ResourceExhausted` is returned.
    pub fn append(&mut self, batch: &[Candle]) -> ChartResult<()> {
        if batch.is_empty() {
            return Ok(());
        }
        self.candles
            .try_reserve(batch.len())
            .map_err(|_| ChartError::ResourceExhausted {
                requested: batch.len(),
            })?;

        for candle in batch {
            self.global_high = Some(
                self.global_high
                    .map_or(candle.high, |high| high.max(candle.high)),
            );
            self.global_low = Some(self.global_low.map_or(candle.low, |low| low.min(candle.low)));
        }
        self.candles.extend_from_slice(batch);
        trace!(batch = batch.len(), total = self.candles.len(), "append candles");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    /// Candle `back_offset` positions before the newest one (`0` = newest).
    #[must_use]
    pub fn from_end(&self, back_offset: usize) -> Option<&Candle> {
        let index = self.candles.len().checked_sub(back_offset + 1)?;
        self.candles.get(index)
    }

    /// The `count` candles that end `offset_from_end` positions before the newest.
    ///
    /// Both arguments are clamped to the available data.
    #[must_use]
    pub fn window(&self, count: usize, offset_from_end: usize) -> &[Candle] {
        let end = self.candles.len().saturating_sub(offset_from_end);
        let start = end.saturating_sub(count);
        &self.candles[start..end]
    }

    #[must_use]
    pub fn global_high(&self) -> Option<f32> {
        self.global_high
    }

    #[must_use]
    pub fn global_low(&self) -> Option<f32> {
        self.global_low
    }
}
