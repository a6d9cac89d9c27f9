//! Operating-hours evaluation.
//!
//! Schedule rows are located by weekday name, and every malformed
//! input shape (missing day, empty period, unparsable time) resolves
//! to "closed" rather than an error.

use chrono::{Datelike, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::model::{Day, DaySchedule, Period};

/// Accepted time-of-day formats, tried in order.
const TIME_FORMATS: &[&str] = &["%I:%M %p", "%H:%M"];

/// Whether a resource with this weekly `schedule` is open at `now`.
///
/// The open window is half-open: a resource closing at 17:00 is open
/// at 16:59 and closed at 17:00 exactly.
pub fn is_open_at(schedule: &[DaySchedule], now: NaiveDateTime) -> bool {
    let today = Day::from(now.weekday());
    let Some(entry) = schedule.iter().find(|s| s.day == today) else {
        return false;
    };
    let Some(period) = &entry.period else {
        return false;
    };
    let Some((open, close)) = open_window(period) else {
        return false;
    };
    let time = now.time();
    time >= open && time < close
}

/// Whether the resource is open at the local wall-clock time.
pub fn is_open_now(schedule: &[DaySchedule]) -> bool {
    is_open_at(schedule, chrono::Local::now().naive_local())
}

fn open_window(period: &Period) -> Option<(NaiveTime, NaiveTime)> {
    let open = parse_time(&period.open)?;
    let close = parse_time(&period.close)?;
    Some((open, close))
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(value, format) {
            return Some(time);
        }
    }
    debug!(value, "unparsable schedule time, treating as closed");
    None
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn monday_nine_to_five() -> Vec<DaySchedule> {
        vec![DaySchedule {
            day: Day::Monday,
            period: Some(Period {
                open: "09:00".into(),
                close: "17:00".into(),
            }),
        }]
    }

    fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        // 2026-08-24 is a Monday.
        NaiveDate::from_ymd_opt(2026, 8, 24)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn open_mid_window() {
        assert!(is_open_at(&monday_nine_to_five(), monday_at(10, 0)));
    }

    #[test]
    fn open_at_the_opening_minute() {
        assert!(is_open_at(&monday_nine_to_five(), monday_at(9, 0)));
    }

    #[test]
    fn closed_before_opening() {
        assert!(!is_open_at(&monday_nine_to_five(), monday_at(8, 59)));
    }

    #[test]
    fn close_boundary_is_exclusive() {
        assert!(is_open_at(&monday_nine_to_five(), monday_at(16, 59)));
        assert!(!is_open_at(&monday_nine_to_five(), monday_at(17, 0)));
    }

    #[test]
    fn other_weekdays_are_closed() {
        // 2026-08-25 is a Tuesday.
        let tuesday = NaiveDate::from_ymd_opt(2026, 8, 25)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert!(!is_open_at(&monday_nine_to_five(), tuesday));
    }

    #[test]
    fn empty_schedule_and_empty_period_are_closed() {
        assert!(!is_open_at(&[], monday_at(10, 0)));
        let closed = vec![DaySchedule {
            day: Day::Monday,
            period: None,
        }];
        assert!(!is_open_at(&closed, monday_at(10, 0)));
    }

    #[test]
    fn twelve_hour_labels_parse() {
        let schedule = vec![DaySchedule {
            day: Day::Monday,
            period: Some(Period {
                open: "9:00 AM".into(),
                close: "5:00 PM".into(),
            }),
        }];
        assert!(is_open_at(&schedule, monday_at(12, 0)));
        assert!(!is_open_at(&schedule, monday_at(17, 0)));
    }

    #[test]
    fn malformed_times_mean_closed() {
        let schedule = vec![DaySchedule {
            day: Day::Monday,
            period: Some(Period {
                open: "whenever".into(),
                close: "17:00".into(),
            }),
        }];
        assert!(!is_open_at(&schedule, monday_at(10, 0)));
    }
}
