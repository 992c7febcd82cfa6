//! Global reset window.
//!
//! The training "day" flips at a fixed UTC hour. Before the cutover the
//! current period is yesterday's date; at or after it, today's.

use core::fmt;

use chrono::{DateTime, NaiveDate, TimeDelta, Timelike, Utc};

/// Period key identifying one reset window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResetPeriod(pub NaiveDate);

impl fmt::Display for ResetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Computes period keys and reset countdowns for a cutover hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetClock {
    cutover_hour: u32,
}

impl ResetClock {
    const SECONDS_PER_DAY: i64 = 86_400;

    /// Hours past 23 are clamped to 23.
    pub const fn new(cutover_hour: u32) -> Self {
        let cutover_hour = if cutover_hour > 23 { 23 } else { cutover_hour };
        Self { cutover_hour }
    }

    pub const fn cutover_hour(&self) -> u32 {
        self.cutover_hour
    }

    /// The period `now` falls into.
    pub fn period_at(&self, now: DateTime<Utc>) -> ResetPeriod {
        let today = now.date_naive();
        if now.hour() < self.cutover_hour {
            ResetPeriod(today.pred_opt().unwrap_or(today))
        } else {
            ResetPeriod(today)
        }
    }

    /// The first cutover strictly after `now`.
    pub fn next_reset_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let elapsed_today = i64::from(now.num_seconds_from_midnight());
        let cutover = i64::from(self.cutover_hour) * 3600;
        let until = if elapsed_today >= cutover {
            Self::SECONDS_PER_DAY - elapsed_today + cutover
        } else {
            cutover - elapsed_today
        };

        let whole_second = now - TimeDelta::nanoseconds(i64::from(now.nanosecond() % 1_000_000_000));
        whole_second + TimeDelta::seconds(until)
    }

    /// Whole seconds until the next cutover.
    pub fn seconds_until_next_reset(&self, now: DateTime<Utc>) -> i64 {
        (self.next_reset_after(now) - now).num_seconds()
    }
}

impl Default for ResetClock {
    fn default() -> Self {
        Self::new(crate::config::RulesConfig::DEFAULT_RESET_HOUR_UTC)
    }
}
