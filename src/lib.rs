mod utils;

pub mod report;
pub mod schedule;
pub mod time;
pub mod working_time;

pub use crate::report::TicketReport;
pub use crate::schedule::{ScheduleDirectory, WeekSchedule, WorkWindow};
pub use crate::working_time::{
    reaction_time, resolution_time, total_time, working_hours, ScheduleSource,
};
