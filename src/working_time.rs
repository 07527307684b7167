//! Accumulates the working time that passes between two instants.
//!
//! Only time inside a location's business hours counts. The span is
//! walked one calendar day at a time and each day contributes the
//! overlap between the span and that day's working window.

use log::trace;

use crate::schedule::{ScheduleDirectory, WorkWindow};
use crate::time::{DateTime, DurationExt, WeekDay};
use crate::{max, min};

/// Where the engine looks up business hours.
///
/// [`ScheduleDirectory`] is the implementation used in production, tests
/// substitute their own tables.
pub trait ScheduleSource {
    /// The working window of `location` on a day with the given weekday,
    /// or `None` when no work happens on such days.
    fn working_window(&self, location: &str, week_day: WeekDay) -> Option<WorkWindow>;
}

impl ScheduleSource for ScheduleDirectory {
    fn working_window(&self, location: &str, week_day: WeekDay) -> Option<WorkWindow> {
        ScheduleDirectory::working_window(self, location, week_day)
    }
}

/// Returns the number of working hours between `start` and `end` at
/// `location`, as a fraction for partial hours.
///
/// Spans where `start` is not before `end` count as zero, they never go
/// negative. Saturdays and Sundays contribute nothing, the rest depends
/// on the location's windows.
pub fn working_hours<S: ScheduleSource>(
    schedules: &S,
    start: DateTime,
    end: DateTime,
    location: &str,
) -> f64 {
    if start >= end {
        return 0.0;
    }

    let mut total = 0.0;
    let mut cursor = start;

    while cursor < end {
        let date = cursor.date();
        let week_day = cursor.week_day();

        match week_day {
            // jump over the weekend to the following monday
            WeekDay::Saturday => {
                cursor = (date + 2).midnight();
                continue;
            }
            WeekDay::Sunday => {
                cursor = (date + 1).midnight();
                continue;
            }
            _ => {}
        }

        if let Some(window) = schedules.working_window(location, week_day) {
            // clip the window to the span; on days that lie strictly
            // inside the span both clamps are the identity
            let opened = max!(cursor, date.at(window.opens()));
            let closed = min!(end, date.at(window.closes()));

            if opened < closed {
                let hours = closed.elapsed_since(&opened).as_fractional_hours();
                trace!("{}: counting {:.2} working hours", date, hours);
                total += hours;
            }
        }

        cursor = (date + 1).midnight();
    }

    total
}

/// The working hours between assignment and the start of work.
///
/// `None` when either instant is missing. A start before the assignment
/// clips to zero.
pub fn reaction_time<S: ScheduleSource>(
    schedules: &S,
    assigned: Option<DateTime>,
    started: Option<DateTime>,
    location: &str,
) -> Option<f64> {
    Some(working_hours(schedules, assigned?, started?, location))
}

/// The working hours between the start of work and its completion.
pub fn resolution_time<S: ScheduleSource>(
    schedules: &S,
    started: Option<DateTime>,
    finished: Option<DateTime>,
    location: &str,
) -> Option<f64> {
    Some(working_hours(schedules, started?, finished?, location))
}

/// The working hours between assignment and completion.
pub fn total_time<S: ScheduleSource>(
    schedules: &S,
    assigned: Option<DateTime>,
    finished: Option<DateTime>,
    location: &str,
) -> Option<f64> {
    Some(working_hours(schedules, assigned?, finished?, location))
}
