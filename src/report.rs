//! The per-ticket report with all three metrics.

use core::fmt;

use serde::Serialize;

use crate::time::DateTime;
use crate::working_time::{self, ScheduleSource};

/// Working-time metrics of a single ticket.
///
/// The three spans share the same location and clip the same way, a
/// metric is `None` whenever one of its two events is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketReport {
    location: String,
    assigned: Option<DateTime>,
    started: Option<DateTime>,
    finished: Option<DateTime>,
    reaction_hours: Option<f64>,
    resolution_hours: Option<f64>,
    total_hours: Option<f64>,
}

impl TicketReport {
    #[must_use]
    pub fn new<S: ScheduleSource>(
        schedules: &S,
        location: impl Into<String>,
        assigned: Option<DateTime>,
        started: Option<DateTime>,
        finished: Option<DateTime>,
    ) -> Self {
        let location = location.into();

        Self {
            reaction_hours: working_time::reaction_time(schedules, assigned, started, &location),
            resolution_hours: working_time::resolution_time(
                schedules, started, finished, &location,
            ),
            total_hours: working_time::total_time(schedules, assigned, finished, &location),
            location,
            assigned,
            started,
            finished,
        }
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn reaction_hours(&self) -> Option<f64> {
        self.reaction_hours
    }

    #[must_use]
    pub fn resolution_hours(&self) -> Option<f64> {
        self.resolution_hours
    }

    #[must_use]
    pub fn total_hours(&self) -> Option<f64> {
        self.total_hours
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn or_no_data<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "no data".to_string(),
    }
}

impl fmt::Display for TicketReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "location:   {}", self.location)?;
        writeln!(f, "assigned:   {}", or_no_data(&self.assigned))?;
        writeln!(f, "started:    {}", or_no_data(&self.started))?;
        writeln!(f, "finished:   {}", or_no_data(&self.finished))?;

        writeln!(
            f,
            "reaction:   {}",
            or_no_data(&self.reaction_hours.map(Hours))
        )?;
        writeln!(
            f,
            "resolution: {}",
            or_no_data(&self.resolution_hours.map(Hours))
        )?;
        writeln!(f, "total:      {}", or_no_data(&self.total_hours.map(Hours)))
    }
}

struct Hours(f64);

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} h", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date_time;
    use crate::schedule::ScheduleDirectory;

    #[test]
    fn test_full_report() {
        let schedules = ScheduleDirectory::builtin();
        let report = TicketReport::new(
            &schedules,
            "Москва",
            Some(date_time!(2026:01:19 10:30)),
            Some(date_time!(2026:01:19 11:30)),
            Some(date_time!(2026:01:19 15:00)),
        );

        assert_eq!(report.reaction_hours(), Some(1.0));
        assert_eq!(report.resolution_hours(), Some(3.5));
        assert_eq!(report.total_hours(), Some(4.5));

        let text = report.to_string();
        assert_eq!(
            text,
            "location:   Москва\n\
             assigned:   2026-01-19 10:30\n\
             started:    2026-01-19 11:30\n\
             finished:   2026-01-19 15:00\n\
             reaction:   1.00 h\n\
             resolution: 3.50 h\n\
             total:      4.50 h\n"
        );
    }

    #[test]
    fn test_missing_events() {
        let schedules = ScheduleDirectory::builtin();
        let report = TicketReport::new(
            &schedules,
            "Москва",
            Some(date_time!(2026:01:19 10:30)),
            None,
            Some(date_time!(2026:01:19 15:00)),
        );

        assert_eq!(report.reaction_hours(), None);
        assert_eq!(report.resolution_hours(), None);
        assert_eq!(report.total_hours(), Some(4.5));

        let text = report.to_string();
        assert!(text.contains("started:    no data"));
        assert!(text.contains("reaction:   no data"));
        assert!(text.contains("total:      4.50 h"));
    }

    #[test]
    fn test_json() {
        let schedules = ScheduleDirectory::builtin();
        let report = TicketReport::new(
            &schedules,
            "Москва",
            Some(date_time!(2026:01:19 10:30)),
            None,
            Some(date_time!(2026:01:19 15:00)),
        );

        let json = report.to_json().unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();

        assert_eq!(value["location"], "Москва");
        assert_eq!(value["assigned"], "2026-01-19 10:30");
        assert_eq!(value["started"], serde_json::Value::Null);
        assert_eq!(value["reaction_hours"], serde_json::Value::Null);
        assert_eq!(value["total_hours"], 4.5);
    }
}
