use core::fmt;
use core::str::FromStr;
use std::time::Duration;

use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::time::{Date, TimeStamp, WeekDay};

#[macro_export]
macro_rules! date_time {
    ($year:literal : $month:literal : $day:literal $hour:literal : $minute:literal) => {
        $crate::time::DateTime::new(
            $crate::date!($year:$month:$day),
            $crate::time_stamp!($hour:$minute),
        )
    };
}

/// A calendar date combined with a time of day.
///
/// Instants compare chronologically and the difference between two of
/// them is exact to the second, so spans never accumulate drift.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: TimeStamp,
}

impl DateTime {
    #[must_use]
    pub const fn new(date: Date, time: TimeStamp) -> Self {
        Self { date, time }
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn time(&self) -> TimeStamp {
        self.time
    }

    #[must_use]
    pub const fn week_day(&self) -> WeekDay {
        self.date.week_day()
    }

    fn seconds_since_base_date(&self) -> u64 {
        self.date.days_since_base_date() as u64 * 86_400 + self.time.as_day_seconds() as u64
    }

    /// Returns the time that has passed since `earlier`.
    ///
    /// Like [`TimeStamp::elapsed`] this does not care about the order of
    /// the two instants.
    #[must_use]
    pub fn elapsed_since(&self, earlier: &Self) -> Duration {
        Duration::from_secs(
            self.seconds_since_base_date()
                .abs_diff(earlier.seconds_since_base_date()),
        )
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "\"{input}\" is not a valid instant. \
     Expected a date followed by a time, for example \
     \"2026-01-19 10:30\", \"19.01.2026 10:30:00\" or \"2026-01-19T10:30\""
)]
pub struct InvalidDateTime {
    input: String,
}

impl FromStr for DateTime {
    type Err = InvalidDateTime;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDateTime {
            input: string.to_string(),
        };

        let string = string.trim();
        let (date, time) = string
            .split_once('T')
            .or_else(|| string.split_once(' '))
            .ok_or_else(invalid)?;

        let date = date.trim().parse::<Date>().map_err(|_| invalid())?;
        let time = time.trim().parse::<TimeStamp>().map_err(|_| invalid())?;

        Ok(Self::new(date, time))
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
