//! Minute-resolution wall-clock times for a single conference day.
//!
//! Booking rows and candidate slots all carry times as `HH:MM` strings at the
//! system boundary. Parsing is strict: a string that is not a valid clock
//! time is a [`SlotError::InvalidTime`], never passed through raw. Inside the
//! engine a [`TimeOfDay`] is just minutes since midnight, so comparisons and
//! interval arithmetic are plain integer operations.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// Minutes in a full day. The exclusive upper bound for instants, and the
/// inclusive upper bound for interval ends.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time on a 24-hour scale, minute resolution.
///
/// Arithmetic that would pass midnight fails rather than wrapping; bookings
/// never span a day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// End-of-day interval bound (displays as `24:00`). Not a parseable
    /// instant; only produced by interval arithmetic.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    /// Build from an hour/minute pair. Fails above 23:59.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(SlotError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Callers must pass at most [`MINUTES_PER_DAY`].
    pub(crate) const fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Add a duration in minutes. `None` if the result passes midnight.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        let total = self.0.checked_add(minutes)?;
        (total <= MINUTES_PER_DAY).then_some(Self(total))
    }

    /// 12-hour display form used for UI slot labels, e.g. `8:30 AM`.
    pub fn label_12h(self) -> String {
        let (hour, minute) = (self.0 / 60, self.0 % 60);
        let meridiem = if hour % 24 < 12 { "AM" } else { "PM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{display_hour}:{minute:02} {meridiem}")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Parse `HH:MM` or `HH:MM:SS` (seconds are dropped -- database rows
    /// carry them, the engine works at minute resolution). Unpadded hours
    /// ("9:30") are accepted; anything else is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map_err(|_| SlotError::InvalidTime(s.to_string()))?;
        Ok(Self((parsed.hour() * 60 + parsed.minute()) as u16))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
