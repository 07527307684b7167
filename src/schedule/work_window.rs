use std::time::Duration;

use derive_more::Display;
use thiserror::Error;

use crate::time::TimeStamp;

#[macro_export]
macro_rules! work_window {
    ($opens_hour:literal : $opens_minute:literal => $closes_hour:literal : $closes_minute:literal) => {{
        static_assertions::const_assert!($opens_hour < 24 && $opens_minute < 60);
        static_assertions::const_assert!($closes_hour < 24 && $closes_minute < 60);

        // the window must open before it closes
        static_assertions::const_assert!(
            $opens_hour * 60 + $opens_minute < $closes_hour * 60 + $closes_minute
        );

        unsafe {
            $crate::schedule::WorkWindow::new_unchecked(
                $crate::time::TimeStamp::new_unchecked($opens_hour, $opens_minute, 0),
                $crate::time::TimeStamp::new_unchecked($closes_hour, $closes_minute, 0),
            )
        }
    }};
}

/// The business hours of a single day.
///
/// Work starts at `opens` and stops at `closes`, so the window covers
/// the half-open range `opens..closes`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{opens} - {closes}")]
pub struct WorkWindow {
    opens: TimeStamp,
    closes: TimeStamp,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("work window must open before it closes: {opens} - {closes}")]
pub struct InvalidWorkWindow {
    opens: TimeStamp,
    closes: TimeStamp,
}

impl WorkWindow {
    pub fn new(opens: TimeStamp, closes: TimeStamp) -> Result<Self, InvalidWorkWindow> {
        if opens >= closes {
            return Err(InvalidWorkWindow { opens, closes });
        }

        Ok(Self { opens, closes })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(opens: TimeStamp, closes: TimeStamp) -> Self {
        Self { opens, closes }
    }

    #[must_use]
    pub const fn opens(&self) -> TimeStamp {
        self.opens
    }

    #[must_use]
    pub const fn closes(&self) -> TimeStamp {
        self.closes
    }

    /// How long the window stays open.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.closes.elapsed(&self.opens)
    }
}
