use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One OHLCV record for a fixed time bucket.
///
/// `date` is encoded as `YYYYMMDD` and `time` as `HHMMSS`, the layout used by
/// the exported CSV files this viewer reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: u64,
    pub time: u64,
    pub open: f32,
    pub high: f32,
    pub low: f32,
    pub close: f32,
    pub volume: f32,
}

impl Candle {
    #[must_use]
    pub const fn new(
        date: u64,
        time: u64,
        open: f32,
        high: f32,
        low: f32,
        close: f32,
        volume: f32,
    ) -> Self {
        Self {
            date,
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Checks the invariants every stored candle must hold:
    /// - all prices and the volume are finite
    /// - `low <= high`
    /// - volume is not negative
    pub fn validate(self) -> ChartResult<()> {
        if !self.open.is_finite()
            || !self.high.is_finite()
            || !self.low.is_finite()
            || !self.close.is_finite()
            || !self.volume.is_finite()
        {
            return Err(ChartError::InvalidData(
                "candle values must be finite".to_owned(),
            ));
        }
        if self.low > self.high {
            return Err(ChartError::InvalidData(
                "candle low must be <= high".to_owned(),
            ));
        }
        if self.volume < 0.0 {
            return Err(ChartError::InvalidData(
                "candle volume must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// `true` when the candle closed above its open.
    #[must_use]
    pub fn is_up(self) -> bool {
        self.close > self.open
    }

    /// Decodes `date`/`time` into a calendar timestamp.
    ///
    /// Returns `None` when either field does not describe a real date or time.
    #[must_use]
    pub fn datetime(self) -> Option<NaiveDateTime> {
        let year = i32::try_from(self.date / 10_000).ok()?;
        let month = u32::try_from(self.date / 100 % 100).ok()?;
        let day = u32::try_from(self.date % 100).ok()?;
        let hour = u32::try_from(self.time / 10_000).ok()?;
        let minute = u32::try_from(self.time / 100 % 100).ok()?;
        let second = u32::try_from(self.time % 100).ok()?;

        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(date.and_time(time))
    }
}
