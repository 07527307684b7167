use working_time::schedule::{ScheduleDirectory, WeekSchedule, WorkWindow};
use working_time::time::WeekDay;
use working_time::{work_window, ScheduleSource};

/// A schedule table where nobody works on wednesdays.
///
/// The built-in schedules always have a window from monday to friday, so
/// this is the only way to exercise spans over weekdays without one.
#[allow(dead_code)]
pub struct ClosedOnWednesdays(pub WorkWindow);

impl ScheduleSource for ClosedOnWednesdays {
    fn working_window(&self, _location: &str, week_day: WeekDay) -> Option<WorkWindow> {
        match week_day {
            WeekDay::Wednesday | WeekDay::Saturday | WeekDay::Sunday => None,
            _ => Some(self.0),
        }
    }
}

/// A directory with keys that contain each other, to pin down which
/// entry wins a lookup by containment.
#[must_use]
#[allow(dead_code)]
pub fn overlapping_keys_directory() -> ScheduleDirectory {
    let mut directory = ScheduleDirectory::new(WeekSchedule::uniform(work_window!(09:00 => 18:00)));

    directory.insert("Восток", WeekSchedule::uniform(work_window!(08:00 => 17:00)));
    directory.insert("Восток-Сити", WeekSchedule::uniform(work_window!(10:00 => 19:00)));

    directory
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");
}
