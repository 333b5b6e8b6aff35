// ── Booking total calculator ──
//
// Converts a start/end time plus an hourly rate and a minimum-hours
// floor into a priced quote. Duration is true elapsed minutes / 60
// (the web client rounds to half hours; see DESIGN.md). The one
// hard validation is end > start -- the web client leans on the
// minimum-hours clamp to hide inverted ranges, which breaks down the
// moment the minimum is zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A wall-clock time of day, parsed from `"HH:MM"` 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::InvalidTime { value: s.to_owned() };
        let (hour, minute) = s.trim().split_once(':').ok_or_else(bad)?;
        let hour: u8 = hour.parse().map_err(|_| bad())?;
        let minute: u8 = minute.parse().map_err(|_| bad())?;
        if hour > 23 || minute > 59 {
            return Err(bad());
        }
        Ok(Self { hour, minute })
    }
}

/// A priced booking quote. Invariant: `total == subtotal + tax`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Billable hours after the minimum-hours clamp.
    pub hours: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Price a time span.
///
/// - Duration shorter than `min_hours` is clamped up silently (the
///   documented, if debatable, marketplace policy).
/// - `end <= start` is rejected with [`CoreError::InvalidTimeRange`].
pub fn quote(
    start: TimeOfDay,
    end: TimeOfDay,
    hourly_rate: f64,
    min_hours: f64,
    tax_rate: f64,
) -> Result<Quote, CoreError> {
    if end <= start {
        return Err(CoreError::InvalidTimeRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let elapsed = f64::from(end.minutes() - start.minutes()) / 60.0;
    let hours = elapsed.max(min_hours);

    let subtotal = hourly_rate * hours;
    let tax = subtotal * tax_rate;
    let total = subtotal + tax;

    Ok(Quote { hours, subtotal, tax, total })
}
