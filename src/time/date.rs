use core::fmt;
use core::ops::{Add, AddAssign};
use core::str::FromStr;

use thiserror::Error;

use crate::time::{DateTime, Month, TimeStamp, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    #[must_use]
    const fn from_ordinal(year: Year, ordinal: u16) -> Self {
        if year.days() < ordinal as usize || ordinal == 0 {
            const_panic::concat_panic!(
                "Invalid ordinal `",
                ordinal,
                "` for year ",
                year.as_usize(),
                " with ",
                year.days(),
                " days."
            );
        }

        let cumulative_days = year.cumulative_days();

        // this is in O(1) as the number of months is bounded by 12
        let mut current_month = Month::January;
        while !current_month.is_eq(&Month::December)
            && cumulative_days[current_month.as_usize()] < ordinal as usize
        {
            current_month = current_month.next();
        }

        let day = ordinal as usize - cumulative_days[current_month.as_usize() - 1];

        Self {
            year,
            month: current_month,
            day,
        }
    }
}

impl Date {
    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    /// The instant at which this date starts.
    #[must_use]
    pub const fn midnight(self) -> DateTime {
        self.at(TimeStamp::MIDNIGHT)
    }

    /// Combines this date with a time of day.
    #[must_use]
    pub const fn at(self, time: TimeStamp) -> DateTime {
        DateTime::new(self, time)
    }

    #[must_use]
    const fn ordinal(&self) -> u16 {
        let mut result = 0;

        // -1 to get the index of the previous month
        // will not cause a panic, because the first month
        // (january) has the number 1
        result += self.year().cumulative_days()[self.month().as_usize() - 1] as u16;

        result + self.day() as u16
    }

    #[must_use]
    pub(super) const fn days_since_base_date(&self) -> usize {
        // the ordinal of the first day of the year is 1,
        // so it has to be subtracted
        self.year.days_since_base_date() + (self.ordinal() - 1) as usize
    }

    #[must_use]
    pub(super) const fn add_days(self, days: usize) -> Self {
        let mut ordinal = self.ordinal() as usize + days;
        let mut year = self.year();

        while ordinal > year.days() {
            ordinal -= year.days();
            year = year.next();
        }

        Self::from_ordinal(year, ordinal as u16)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not a valid date. Expected \"YYYY-MM-DD\" or \"DD.MM.YYYY\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl AddAssign<usize> for Date {
    fn add_assign(&mut self, days: usize) {
        *self = self.add_days(days);
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = if string.contains('.') {
            match string.split_exact::<3>(".") {
                [Some(day), Some(month), Some(year)] => (year, month, day),
                _ => {
                    return Err(InvalidDate::ParseDateError {
                        input: string.to_string(),
                    })
                }
            }
        } else {
            match string.split_exact::<3>("-") {
                [Some(year), Some(month), Some(day)] => (year, month, day),
                _ => {
                    return Err(InvalidDate::ParseDateError {
                        input: string.to_string(),
                    })
                }
            }
        };

        // a year has exactly four digits in both formats
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            });
        }

        let year = parse_or_err(year)?;
        let month =
            Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                input: string.to_string(),
            })?;
        let day = parse_or_err(day)?;

        Self::new(year, month, day)
    }
}
