use derive_more::Display;

use crate::schedule::WorkWindow;
use crate::time::{DurationExt, WeekDay};

/// The weekly business hours of one location.
///
/// The source data only ever distinguishes Friday from the other working
/// days, Saturday and Sunday are always free.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[display("Mon-Thu {weekdays}, Fri {friday}")]
pub struct WeekSchedule {
    weekdays: WorkWindow,
    friday: WorkWindow,
}

impl WeekSchedule {
    #[must_use]
    pub const fn new(weekdays: WorkWindow, friday: WorkWindow) -> Self {
        Self { weekdays, friday }
    }

    /// The same hours on every working day, Friday included.
    #[must_use]
    pub const fn uniform(window: WorkWindow) -> Self {
        Self::new(window, window)
    }

    #[must_use]
    pub const fn weekdays(&self) -> WorkWindow {
        self.weekdays
    }

    #[must_use]
    pub const fn friday(&self) -> WorkWindow {
        self.friday
    }

    /// The business hours on the given weekday or `None` on the weekend.
    #[must_use]
    pub const fn window_for(&self, week_day: WeekDay) -> Option<WorkWindow> {
        match week_day {
            WeekDay::Saturday | WeekDay::Sunday => None,
            WeekDay::Friday => Some(self.friday),
            _ => Some(self.weekdays),
        }
    }

    /// The working hours of one full week.
    #[must_use]
    pub fn hours_per_week(&self) -> f64 {
        (self.weekdays.duration() * 4 + self.friday.duration()).as_fractional_hours()
    }
}
