use indexmap::IndexMap;
use log::debug;

use crate::schedule::{WeekSchedule, WorkWindow};
use crate::time::WeekDay;
use crate::work_window;

/// All known locations and their weekly business hours.
///
/// Lookups are tolerant: names are matched case-insensitively, ignoring
/// surrounding whitespace and accepting partial names like a city without
/// its region suffix. Locations that stay unknown after that use the
/// default schedule.
#[derive(Debug, Clone)]
pub struct ScheduleDirectory {
    schedules: IndexMap<String, WeekSchedule>,
    default: WeekSchedule,
}

impl ScheduleDirectory {
    #[must_use]
    pub fn new(default: WeekSchedule) -> Self {
        Self {
            schedules: IndexMap::new(),
            default,
        }
    }

    /// The built-in schedule table.
    #[must_use]
    pub fn builtin() -> Self {
        let nine_to_six = WeekSchedule::new(
            work_window!(09:00 => 18:00),
            work_window!(09:00 => 16:45),
        );

        let mut directory = Self::new(nine_to_six);
        directory.insert("Москва", nine_to_six);
        directory.insert("Нижний Новгород", nine_to_six);
        directory.insert("Саров", nine_to_six);
        directory.insert(
            "Новоуральск",
            WeekSchedule::uniform(work_window!(06:00 => 15:00)),
        );
        directory.insert(
            "Краснокаменск",
            WeekSchedule::new(work_window!(03:00 => 12:00), work_window!(03:00 => 11:45)),
        );

        directory
    }

    /// Registers a location. The name is stored in its normalized form.
    ///
    /// Insertion order matters: when a lookup matches several locations by
    /// containment, the one registered first wins.
    pub fn insert(&mut self, location: impl Into<String>, schedule: WeekSchedule) {
        let location = location.into();
        self.schedules
            .insert(location.trim().to_lowercase(), schedule);
    }

    /// Resolves a raw location name to a registered key.
    ///
    /// The name is lowercased and trimmed, then matched exactly and after
    /// that by containment in both directions. Names that match nothing
    /// are returned in their normalized form.
    #[must_use]
    pub fn normalize(&self, location: &str) -> String {
        if location.is_empty() {
            return String::new();
        }

        let needle = location.trim().to_lowercase();
        if self.schedules.contains_key(needle.as_str()) {
            return needle;
        }

        for key in self.schedules.keys() {
            if key.contains(needle.as_str()) || needle.contains(key.as_str()) {
                debug!("location \"{}\" resolved to \"{}\"", location, key);
                return key.clone();
            }
        }

        needle
    }

    /// The weekly schedule of `location`, or the default schedule if the
    /// location is not registered.
    #[must_use]
    pub fn schedule_for(&self, location: &str) -> &WeekSchedule {
        let key = self.normalize(location);

        match self.schedules.get(key.as_str()) {
            Some(schedule) => schedule,
            None => {
                debug!("no schedule for \"{}\", falling back to the default", location);
                &self.default
            }
        }
    }

    /// The business hours of `location` on the given weekday, or `None`
    /// on days without any.
    #[must_use]
    pub fn working_window(&self, location: &str, week_day: WeekDay) -> Option<WorkWindow> {
        self.schedule_for(location).window_for(week_day)
    }

    #[must_use]
    pub fn default_schedule(&self) -> &WeekSchedule {
        &self.default
    }

    /// All registered locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = (&str, &WeekSchedule)> {
        self.schedules
            .iter()
            .map(|(location, schedule)| (location.as_str(), schedule))
    }
}
