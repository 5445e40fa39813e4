//! Calendar week boundaries. Weeks run Sunday 00:00 through Saturday 23:59:59.999.
//!
//! Every function takes "now" explicitly; only the `current_*` wrappers read the clock.

use chrono::{Datelike, Days, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Sunday that opens the week containing `date`.
pub fn sunday_of(date: NaiveDate) -> NaiveDate {
    let days_back = date.weekday().num_days_from_sunday();
    date - Days::new(u64::from(days_back))
}

/// Midnight on the most recent Sunday, or today's midnight when `now` is a Sunday.
pub fn week_start(now: NaiveDateTime) -> NaiveDateTime {
    sunday_of(now.date()).and_time(NaiveTime::MIN)
}

/// Last millisecond of the Saturday closing the week of `now`.
pub fn week_end(now: NaiveDateTime) -> NaiveDateTime {
    week_start(now) + Duration::days(7) - Duration::milliseconds(1)
}

/// Weekly reports are prompted for on Sundays.
pub fn is_progress_day(now: NaiveDateTime) -> bool {
    now.weekday() == Weekday::Sun
}

pub fn current_week_start() -> NaiveDateTime {
    week_start(Local::now().naive_local())
}

pub fn current_week_end() -> NaiveDateTime {
    week_end(Local::now().naive_local())
}
