use chrono::{
    Days,
    NaiveDate,
    NaiveDateTime
};

pub const ONE_DAY: Days = Days::new(1);

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Drops the time-of-day so that two timestamps on the same calendar day compare equal.
#[inline]
pub fn normalize(timestamp: NaiveDateTime) -> NaiveDate {
    timestamp.date()
}

/// `d + n` calendar days, saturating at the last representable date.
#[inline]
pub fn add_days(d: NaiveDate, n: u32) -> NaiveDate {
    d.checked_add_days(Days::new(n as u64)).unwrap_or(NaiveDate::MAX)
}

/// `d - n` calendar days, saturating at the first representable date.
#[inline]
pub fn sub_days(d: NaiveDate, n: u32) -> NaiveDate {
    d.checked_sub_days(Days::new(n as u64)).unwrap_or(NaiveDate::MIN)
}

/// Inclusive number of calendar days from `start` to `end`.
#[inline]
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}
