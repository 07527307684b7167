use std::time::Duration;

pub trait DurationExt {
    #[must_use]
    fn seconds(&self) -> u64;

    #[must_use]
    fn minutes(&self) -> u64 {
        self.seconds() / 60
    }

    #[must_use]
    fn hours(&self) -> u64 {
        self.minutes() / 60
    }

    /// The duration in hours, with the sub-hour part as a fraction.
    ///
    /// 45 minutes are `0.75` hours. Durations that are a whole number of
    /// quarter hours convert without rounding error.
    #[must_use]
    fn as_fractional_hours(&self) -> f64;
}

impl DurationExt for Duration {
    fn seconds(&self) -> u64 {
        self.as_secs()
    }

    fn as_fractional_hours(&self) -> f64 {
        self.as_secs_f64() / 3600.0
    }
}

mod month;
pub use month::*;
mod date;
pub use date::*;
mod date_time;
pub use date_time::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
mod time_stamp;
pub use time_stamp::*;
