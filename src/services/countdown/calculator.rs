//! Time-remaining arithmetic.
//!
//! Pure floor decomposition of `target - now`. No clock is read here; the
//! caller samples the current instant so wall-clock jumps in either direction
//! are reflected as-is.

use chrono::{DateTime, TimeZone};

use crate::models::countdown::RemainingDuration;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time from `now` until `target`, or zero once `target` has passed.
pub fn compute<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> RemainingDuration {
    let diff = target
        .clone()
        .signed_duration_since(now.clone())
        .num_milliseconds();
    decompose_millis(diff)
}

/// Splits a millisecond difference into days, hours, minutes and seconds.
pub fn decompose_millis(diff: i64) -> RemainingDuration {
    if diff <= 0 {
        return RemainingDuration::ZERO;
    }

    let days = diff / MS_PER_DAY;
    let rem = diff % MS_PER_DAY;
    let hours = rem / MS_PER_HOUR;
    let rem = rem % MS_PER_HOUR;
    let minutes = rem / MS_PER_MINUTE;
    let rem = rem % MS_PER_MINUTE;
    let seconds = rem / MS_PER_SECOND;

    // Each unit is bounded by the modulus above it, so the narrowing is lossless.
    RemainingDuration {
        days: days as u64,
        hours: hours as u8,
        minutes: minutes as u8,
        seconds: seconds as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local, TimeZone};
    use pretty_assertions::assert_eq;

    #[test]
    fn one_minute_before_midnight() {
        let target = Local.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        let now = Local.with_ymd_and_hms(2098, 12, 31, 23, 59, 0).unwrap();

        assert_eq!(
            compute(&target, &now),
            RemainingDuration {
                days: 0,
                hours: 0,
                minutes: 1,
                seconds: 0,
            }
        );
    }

    #[test]
    fn mixed_units_use_remainders() {
        let now = Local.with_ymd_and_hms(2030, 3, 10, 12, 0, 0).unwrap();
        let target = now
            + Duration::days(3)
            + Duration::hours(5)
            + Duration::minutes(7)
            + Duration::seconds(9)
            + Duration::milliseconds(999);

        assert_eq!(
            compute(&target, &now),
            RemainingDuration {
                days: 3,
                hours: 5,
                minutes: 7,
                seconds: 9,
            }
        );
    }

    #[test]
    fn equal_instants_are_arrived() {
        let now = Local.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert!(compute(&now, &now).is_arrived());
    }

    #[test]
    fn past_target_clamps_to_zero() {
        let target = Local.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let now = Local.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        assert_eq!(compute(&target, &now), RemainingDuration::ZERO);
    }

    #[test]
    fn sub_second_difference_floors_to_zero_fields() {
        // Not yet arrived in wall-clock terms, but nothing left to display.
        assert_eq!(decompose_millis(999), RemainingDuration::ZERO);
        assert_eq!(decompose_millis(1_000).seconds, 1);
    }

    #[test]
    fn clock_moving_backwards_grows_the_remainder() {
        let target = Local.with_ymd_and_hms(2030, 1, 2, 0, 0, 0).unwrap();
        let later = Local.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap();
        let earlier = later - Duration::hours(2);

        assert_eq!(compute(&target, &later).hours, 12);
        assert_eq!(compute(&target, &earlier).hours, 14);
    }
}
