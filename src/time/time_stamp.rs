use std::cmp;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::utils::StrExt;

#[macro_export]
macro_rules! time_stamp {
    ($hour:literal : $minute:literal) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);

        unsafe { $crate::time::TimeStamp::new_unchecked($hour, $minute, 0) }
    }};
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
    second: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Time is not valid: {hour:02}:{minute:02}:{second:02}")]
pub struct InvalidTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeStamp {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        Self::from_hms(hour, minute, 0)
    }

    #[must_use]
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(InvalidTime {
                hour,
                minute,
                second,
            });
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    // the maximum TimeStamp is 23:59:59, which would be
    // 23 * 3600 + 59 * 60 + 59 = 86399 seconds
    #[must_use]
    pub(super) const fn as_day_seconds(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    pub fn elapsed(&self, other: &Self) -> Duration {
        let seconds = cmp::max(self.as_day_seconds(), other.as_day_seconds())
            - cmp::min(self.as_day_seconds(), other.as_day_seconds());

        Duration::from_secs(seconds as u64)
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)?;

        // whole minutes stay in the short form
        if self.second != 0 {
            write!(f, ":{:02}", self.second)?;
        }

        Ok(())
    }
}

impl FromStr for TimeStamp {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.split_exact::<3>(":") {
            [Some(hour), Some(minute), None] => Ok(Self::new(hour.parse()?, minute.parse()?)?),
            [Some(hour), Some(minute), Some(second)] => Ok(Self::from_hms(
                hour.parse()?,
                minute.parse()?,
                second.parse()?,
            )?),
            _ => anyhow::bail!("expected \"HH:MM\" or \"HH:MM:SS\", got \"{}\"", string),
        }
    }
}
