use std::collections::HashSet;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

/// Weekend days as a bitmask.
/// Each bit represents a day: Mon(0), Tue(1), ..., Sun(6)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WeekendMask(u8);

impl WeekendMask {
    pub fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    /// Saturday and Sunday.
    pub const fn saturday_sunday() -> Self {
        WeekendMask((1u8 << 5) | (1u8 << 6))
    }

    #[inline]
    pub fn is_weekend_day(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.is_weekend_day(d.weekday())
    }

    pub fn weekend_list(&self) -> Vec<Weekday> {
        let mut weekdays = Vec::with_capacity(7);
        for day in 0..7 {
            if (self.0 & (1u8 << day)) != 0 {
                if let Ok(weekday) = Weekday::try_from(day as u8) {
                    weekdays.push(weekday);
                }
            }
        }
        weekdays
    }

    /// A mask covering all seven days would make every day a non-work day.
    pub fn has_work_days(&self) -> bool {
        self.0 & 0b0111_1111 != 0b0111_1111
    }
}

impl Default for WeekendMask {
    fn default() -> Self {
        WeekendMask::saturday_sunday()
    }
}
