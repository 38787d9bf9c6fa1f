#[cfg(feature = "parallel-aggregation")]
use rayon::prelude::*;

use crate::core::Candle;

/// Synthetic candle summarizing a run of consecutive source candles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedCandle {
    pub open: f32,
    pub high: f32,
    pub low: f32,
    pub close: f32,
    /// Number of source candles folded into this one.
    pub count: usize,
}

impl MergedCandle {
    /// Folds a non-empty, oldest-first run of candles.
    fn from_run(run: &[Candle]) -> Option<Self> {
        let first = run.first()?;
        let last = run.last()?;
        let (high, low) = run.iter().fold((first.high, first.low), |(high, low), candle| {
            (high.max(candle.high), low.min(candle.low))
        });
        Some(Self {
            open: first.open,
            high,
            low,
            close: last.close,
            count: run.len(),
        })
    }

    #[must_use]
    pub fn is_up(self) -> bool {
        self.close > self.open
    }
}

/// Whole-series overview sized for a strip of fixed pixel width.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapAggregate {
    /// Source candles per merged candle (`1` when every candle gets a pixel).
    pub merge_factor: usize,
    /// Horizontal pixels allotted to each merged candle.
    pub candle_width: f64,
    /// Merged candles, newest first.
    pub candles: Vec<MergedCandle>,
}

/// Aggregates `candles` so that every merged candle is at least one pixel wide.
///
/// Runs are cut from the newest candle backwards, so only the oldest run can
/// be shorter than `merge_factor`. Returns `None` for an empty series or a
/// strip without width.
#[must_use]
pub fn aggregate_for_strip(candles: &[Candle], strip_width: f64) -> Option<MinimapAggregate> {
    if candles.is_empty() || !strip_width.is_finite() || strip_width <= 0.0 {
        return None;
    }

    let len = candles.len() as f64;
    let scaled_width = strip_width / len;
    let merge_factor = if scaled_width < 1.0 {
        // Equivalent to ceil(1 / scaled_width), computed without the reciprocal
        // so integral ratios stay exact.
        (len / strip_width).ceil() as usize
    } else {
        1
    };
    let candle_width = strip_width * merge_factor as f64 / len;

    #[cfg(feature = "parallel-aggregation")]
    let merged: Vec<MergedCandle> = candles
        .par_rchunks(merge_factor)
        .filter_map(MergedCandle::from_run)
        .collect();

    #[cfg(not(feature = "parallel-aggregation"))]
    let merged: Vec<MergedCandle> = candles
        .rchunks(merge_factor)
        .filter_map(MergedCandle::from_run)
        .collect();

    Some(MinimapAggregate {
        merge_factor,
        candle_width,
        candles: merged,
    })
}

#[cfg(test)]
mod tests {
    use super::aggregate_for_strip;
    use crate::core::Candle;

    fn ramp(len: usize) -> Vec<Candle> {
        (0..len)
            .map(|i| {
                let base = i as f32;
                Candle::new(0, 0, base, base + 2.0, base - 1.0, base + 1.0, 1.0)
            })
            .collect()
    }

    #[test]
    fn wide_strip_keeps_every_candle() {
        let candles = ramp(50);
        let aggregate = aggregate_for_strip(&candles, 200.0).expect("aggregate");
        assert_eq!(aggregate.merge_factor, 1);
        assert_eq!(aggregate.candles.len(), 50);
        assert_eq!(aggregate.candle_width, 4.0);
    }

    #[test]
    fn merged_run_uses_chronological_open_and_close() {
        let candles = ramp(10);
        let aggregate = aggregate_for_strip(&candles, 5.0).expect("aggregate");
        assert_eq!(aggregate.merge_factor, 2);

        let newest = aggregate.candles[0];
        assert_eq!(newest.open, 8.0);
        assert_eq!(newest.close, 10.0);
        assert_eq!(newest.high, 11.0);
        assert_eq!(newest.low, 7.0);
        assert!(newest.is_up());
    }

    #[test]
    fn partial_run_is_the_oldest() {
        let candles = ramp(7);
        let aggregate = aggregate_for_strip(&candles, 2.0).expect("aggregate");
        assert_eq!(aggregate.merge_factor, 4);
        assert_eq!(aggregate.candles.len(), 2);
        assert_eq!(aggregate.candles[0].count, 4);
        assert_eq!(aggregate.candles[1].count, 3);
        assert_eq!(aggregate.candles[1].open, 0.0);
    }

    #[test]
    fn empty_inputs_produce_nothing() {
        assert!(aggregate_for_strip(&[], 100.0).is_none());
        assert!(aggregate_for_strip(&ramp(3), 0.0).is_none());
    }
}
