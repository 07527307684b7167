use derive_more::Display;

use crate::iter_const;
use crate::time::{Month, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Year(usize);

/// The number of days from start_month..end_month in the `year`.
const fn days_for_months(year: Year, start_month: Month, end_month: usize) -> usize {
    let mut result = 0;

    iter_const!(for month in start_month.as_usize(),..end_month => {
        result += year.number_of_days_in_month(Month::new(month));
    });

    result
}

impl Year {
    /// Choose the date 0000/01/01 as a base date, because it does not make sense to go past this date.
    const BASE_DATE: (Self, Month, usize, WeekDay) =
        (Self(0), Month::January, 1, WeekDay::Saturday);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        !self.is_common_year() && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// The number of days in the months up to and including `month`, indexed
    /// by `month.as_usize()`. Index `0` is `0`, so the days preceding `month`
    /// are at `month.as_usize() - 1`.
    pub(super) const fn cumulative_days(&self) -> [usize; 13] {
        let mut result = [0; 13];

        iter_const!(for month in 1,..result.len() => {
            result[month] = result[month - 1] + self.number_of_days_in_month(Month::new(month));
        });

        result
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (year_ref, month_ref, day_ref, week_day_ref) = Self::BASE_DATE;

        // days elapsed between Self::BASE_DATE and (self, month, day)
        let days = {
            let mut days = 0;

            days += days_for_months(*self, month_ref, month.as_usize());
            days += self.days_since(year_ref);
            days += day - day_ref;

            days
        };

        week_day_ref.add_const(days)
    }

    /// Returns the number of days that have passed since `other`.
    ///
    /// `(other + self.days_since(other)) == self`
    const fn days_since(&self, other: Self) -> usize {
        debug_assert!(self.as_usize() >= other.as_usize());

        let mut result = 0;
        iter_const!(for i in other.as_usize(),..self.as_usize() => {
            result += Year::new(i).days();
        });

        result
    }

    pub(super) const fn days_since_base_date(&self) -> usize {
        self.days_since(Self::BASE_DATE.0)
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
