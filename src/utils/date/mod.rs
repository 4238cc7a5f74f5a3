// Date utility functions

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// Format accepted for typed-in dates, matching what the date picker writes.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD`, ignoring surrounding whitespace.
pub fn parse_date_input(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT).ok()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// First local instant of `date`.
///
/// Ambiguous midnights resolve to the earlier instant. When midnight falls in
/// a DST gap, the first valid quarter hour after it is used.
pub fn local_start_of_day(date: NaiveDate) -> DateTime<Local> {
    start_of_day_in(&Local, date)
}

pub fn start_of_day_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => (1..=24 * 4)
            .find_map(|step| {
                tz.from_local_datetime(&(midnight + Duration::minutes(15 * step)))
                    .earliest()
            })
            .unwrap_or_else(|| tz.from_utc_datetime(&midnight)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDateTime, Timelike, Utc};
    use test_case::test_case;

    fn gap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 3, 10).unwrap()
    }

    fn utc_offset() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    /// UTC, except that 00:00-00:59 on `gap_day` never happens locally.
    #[derive(Debug, Clone, Copy)]
    struct MidnightGap;

    impl TimeZone for MidnightGap {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            MidnightGap
        }

        fn offset_from_local_date(&self, _: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(utc_offset())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            if local.date() == gap_day() && local.hour() < 1 {
                LocalResult::None
            } else {
                LocalResult::Single(utc_offset())
            }
        }

        fn offset_from_utc_date(&self, _: &NaiveDate) -> FixedOffset {
            utc_offset()
        }

        fn offset_from_utc_datetime(&self, _: &NaiveDateTime) -> FixedOffset {
            utc_offset()
        }
    }

    #[test_case("2099-01-01", Some((2099, 1, 1)) ; "iso date")]
    #[test_case("  2024-02-29\n", Some((2024, 2, 29)) ; "whitespace is trimmed")]
    #[test_case("", None ; "empty")]
    #[test_case("   ", None ; "blank")]
    #[test_case("2023-02-29", None ; "not a leap year")]
    #[test_case("2024-13-01", None ; "month out of range")]
    #[test_case("01/02/2024", None ; "slash format")]
    #[test_case("tomorrow", None ; "free text")]
    fn parses_date_input(text: &str, expected: Option<(i32, u32, u32)>) {
        let expected = expected.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        assert_eq!(parse_date_input(text), expected);
    }

    #[test]
    fn format_matches_parse() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(format_date_input(date), "2025-07-04");
        assert_eq!(parse_date_input(&format_date_input(date)), Some(date));
    }

    #[test]
    fn start_of_day_is_midnight_in_fixed_zone() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        let start = start_of_day_in(&tz, date);
        assert_eq!(start.date_naive(), date);
        assert_eq!(start.hour(), 0);
        assert_eq!(start.minute(), 0);
        assert_eq!(start.with_timezone(&Utc).hour(), 15);
    }

    #[test_case(2030, 3, 10, 1 ; "midnight in gap falls forward to first valid hour")]
    #[test_case(2030, 3, 11, 0 ; "day after gap starts at midnight")]
    fn start_of_day_skips_missing_midnight(year: i32, month: u32, day: u32, hour: u32) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let start = start_of_day_in(&MidnightGap, date);
        assert_eq!(start.date_naive(), date);
        assert_eq!(start.hour(), hour);
        assert_eq!(start.minute(), 0);
    }

    #[test]
    fn local_start_of_day_stays_on_requested_date() {
        let date = NaiveDate::from_ymd_opt(2030, 6, 15).unwrap();
        assert_eq!(local_start_of_day(date).date_naive(), date);
    }
}
