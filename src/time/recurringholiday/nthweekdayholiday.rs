use chrono::{
    NaiveDate,
    Weekday
};

use super::recurringholiday::{
    HolidayLabel,
    RecurringHoliday
};

/// The n-th given weekday of a month, e.g. the 4th Thursday of November.
#[derive(Clone)]
pub struct NthWeekdayHoliday {
    label: HolidayLabel,
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(label: HolidayLabel, month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { label, month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn label(&self) -> &HolidayLabel {
        &self.label
    }

    fn get_holiday_start(&self, year: i32) -> Vec<NaiveDate> {
        // a 5th weekday does not exist in every month
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
            .into_iter()
            .collect()
    }
}
