//! Tests for the span walk itself: window clipping, weekend handling
//! and the arithmetic properties a working-hours count has to keep.

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;

use working_time::time::{TimeStamp, WeekDay};
use working_time::{date, date_time, work_window, working_hours, ScheduleDirectory};

mod common;

use common::ClosedOnWednesdays;

#[test]
fn test_counts_fractional_hours_inside_one_window() {
    // common::debug_setup();
    let schedules = ScheduleDirectory::builtin();

    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:19 10:30),
            date_time!(2026:01:19 15:00),
            "Москва"
        ),
        4.5
    );
}

#[test]
fn test_clips_to_the_window_edges() {
    let schedules = ScheduleDirectory::builtin();
    let full_monday = working_hours(
        &schedules,
        date_time!(2026:01:19 00:00),
        date_time!(2026:01:20 00:00),
        "Москва",
    );

    // the window is 09:00 - 18:00, everything around it is ignored
    assert_eq!(full_monday, 9.0);
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:19 07:00),
            date_time!(2026:01:19 20:00),
            "Москва"
        ),
        full_monday
    );
}

#[test]
fn test_skips_the_weekend() {
    let schedules = ScheduleDirectory::builtin();

    // friday 17:00 is past the 16:45 closing, so only monday 09:00 - 10:00 counts
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:16 17:00),
            date_time!(2026:01:19 10:00),
            "Москва"
        ),
        1.0
    );

    // friday evening to monday opening is entirely free time
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:16 17:00),
            date_time!(2026:01:19 09:00),
            "Москва"
        ),
        0.0
    );

    // a span that never leaves the weekend
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:17 08:00),
            date_time!(2026:01:18 22:00),
            "Москва"
        ),
        0.0
    );

    // saturday midnight to monday midnight
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:17 00:00),
            date_time!(2026:01:19 00:00),
            "Москва"
        ),
        0.0
    );
}

#[test]
fn test_friday_closes_earlier() {
    let schedules = ScheduleDirectory::builtin();

    // 2026-01-16 is a friday with a 09:00 - 16:45 window
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:16 09:00),
            date_time!(2026:01:16 18:00),
            "Москва"
        ),
        7.75
    );
}

#[test]
fn test_uniform_schedule_has_no_short_friday() {
    let schedules = ScheduleDirectory::builtin();

    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:16 00:00),
            date_time!(2026:01:16 23:00),
            "Новоуральск"
        ),
        9.0
    );
}

#[test]
fn test_early_shift_schedule() {
    let schedules = ScheduleDirectory::builtin();

    // the 03:00 - 12:00 window starts long before the default one
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:19 03:00),
            date_time!(2026:01:19 12:00),
            "Краснокаменск"
        ),
        9.0
    );
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:16 00:00),
            date_time!(2026:01:16 23:00),
            "Краснокаменск"
        ),
        8.75
    );
}

#[test]
fn test_unknown_location_uses_the_default_schedule() {
    let schedules = ScheduleDirectory::builtin();
    let start = date_time!(2026:01:15 08:13);
    let end = date_time!(2026:01:20 19:47);

    // the default schedule has the same hours as москва
    assert_eq!(
        working_hours(&schedules, start, end, "Атлантида"),
        working_hours(&schedules, start, end, "Москва")
    );
}

#[test]
fn test_a_full_week_is_constant() {
    let schedules = ScheduleDirectory::builtin();

    // 4 * 9h + 7h45m
    let hours_per_week = schedules.schedule_for("Москва").hours_per_week();
    assert_eq!(hours_per_week, 43.75);

    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:19 00:00),
            date_time!(2026:01:26 00:00),
            "Москва"
        ),
        hours_per_week
    );

    // 104 whole weeks, crossing two year boundaries
    let start = date!(2026:01:05);
    let end = start + 104 * 7;
    assert_eq!(start.week_day(), WeekDay::Monday);
    assert_eq!(end.week_day(), WeekDay::Monday);

    assert_eq!(
        working_hours(&schedules, start.midnight(), end.midnight(), "Москва"),
        104.0 * hours_per_week
    );

    // the two year-long halves sum to the whole
    let middle = start + 52 * 7;
    assert_eq!(
        working_hours(&schedules, start.midnight(), middle.midnight(), "Москва")
            + working_hours(&schedules, middle.midnight(), end.midnight(), "Москва"),
        104.0 * hours_per_week
    );
}

#[test]
fn test_never_decreases_as_the_span_grows() {
    let schedules = ScheduleDirectory::builtin();
    let start = date_time!(2026:01:16 12:00);

    let mut previous = 0.0;
    let mut date = date!(2026:01:14);
    while date <= date!(2026:01:26) {
        for hour in 0..24 {
            let end = date.at(TimeStamp::new(hour, 0).unwrap());
            let hours = working_hours(&schedules, start, end, "Москва");

            assert!(
                hours >= previous,
                "hours dropped from {} to {} at {}",
                previous,
                hours,
                end
            );
            previous = hours;
        }

        date += 1;
    }
}

#[test]
fn test_splitting_a_span_changes_nothing() {
    let schedules = ScheduleDirectory::builtin();
    let start = date_time!(2026:01:15 10:15);
    let end = date_time!(2026:01:22 14:45);
    let total = working_hours(&schedules, start, end, "Москва");

    // quarter-hour splits are exact in binary floating point
    let splits = [
        start,
        date_time!(2026:01:16 16:45),
        date_time!(2026:01:17 12:00),
        date_time!(2026:01:19 09:00),
        date_time!(2026:01:21 00:00),
        end,
    ];

    for split in splits {
        assert_eq!(
            working_hours(&schedules, start, split, "Москва")
                + working_hours(&schedules, split, end, "Москва"),
            total,
            "split at {}",
            split
        );
    }

    // an odd split only matches up to rounding
    let split = date_time!(2026:01:20 13:37);
    assert_relative_eq!(
        working_hours(&schedules, start, split, "Москва")
            + working_hours(&schedules, split, end, "Москва"),
        total,
        epsilon = 1e-9
    );
}

#[test]
fn test_spans_a_year_boundary() {
    let schedules = ScheduleDirectory::builtin();

    // 2026-12-31 is a thursday, 2027-01-01 a friday
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:12:31 16:00),
            date_time!(2027:01:01 11:00),
            "Москва"
        ),
        4.0
    );
}

#[test]
fn test_skips_days_without_a_window() {
    let schedules = ClosedOnWednesdays(work_window!(09:00 => 17:00));

    // monday to friday, the wednesday contributes nothing
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:19 09:00),
            date_time!(2026:01:23 17:00),
            "anywhere"
        ),
        4.0 * 8.0
    );

    // a span that lies entirely on the closed day
    assert_eq!(
        working_hours(
            &schedules,
            date_time!(2026:01:21 08:00),
            date_time!(2026:01:21 20:00),
            "anywhere"
        ),
        0.0
    );
}
