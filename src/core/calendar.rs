//! calendar.rs
//!
//! Self-contained proleptic Gregorian calendar arithmetic. No platform date
//! objects are involved, so results are the same everywhere.
//!
//! Dates are converted to a day count relative to 1970-01-01 with Howard
//! Hinnant's `days_from_civil` algorithm and back with `civil_from_days`:
//! <https://howardhinnant.github.io/date_algorithms.html>
//!
//! Out-of-range components roll over the same way a lenient date constructor
//! would: month 13 is January of the next year, February 29th of a common
//! year is March 1st. `is_valid_date` rejects anything outside the month
//! length first and then checks that the date survives the round trip.

use crate::domain::model::Weekday;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Years a birth date may carry. Four-digit years keep `YYYY-MM-DD` text
/// parseable and leave room for the oldest milestone.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// 1970-01-01 was a Thursday.
const EPOCH_WEEKDAY: i64 = 4;

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month, `None` for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Day count from 1970-01-01. Accepts out-of-range month and day values and
/// normalizes them.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    // 月份溢位先轉成年份
    let m0 = month - 1;
    let y = year + m0.div_euclid(12);
    let m = m0.rem_euclid(12) + 1;

    // March-based year so the leap day is the last day of the year
    let y = if m <= 2 { y - 1 } else { y };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = if m > 2 { m - 3 } else { m + 9 }; // [0, 11]
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32; // [1, 31]
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32; // [1, 12]
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// Day of the week for a date. The day is not clamped to the month length:
/// February 29th in a common year reports the weekday of March 1st.
pub fn weekday_of(year: i32, month: u32, day: u32) -> Weekday {
    let days = days_from_civil(year as i64, month as i64, day as i64);
    Weekday::from_index((days + EPOCH_WEEKDAY).rem_euclid(7) as u32)
}

/// Numeric form of [`weekday_of`], 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(year: i32, month: u32, day: u32) -> u32 {
    weekday_of(year, month, day).index()
}

pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    // 月份或日數明顯超出範圍時不必轉換
    match days_in_month(year, month) {
        Some(last) if (1..=last).contains(&day) => {}
        _ => return false,
    }
    let days = days_from_civil(year as i64, month as i64, day as i64);
    civil_from_days(days) == (year as i64, month, day)
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, 100th.
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

pub fn ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// "March 4th, 1998". Out-of-range components are normalized first.
pub fn format_date(year: i32, month: u32, day: u32) -> String {
    let (y, m, d) = civil_from_days(days_from_civil(year as i64, month as i64, day as i64));
    let name = month_name(m).unwrap_or("Unknown");
    format!("{} {}, {}", name, ordinal(d), y)
}
