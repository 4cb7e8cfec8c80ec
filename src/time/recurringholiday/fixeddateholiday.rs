use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use super::recurringholiday::{
    HolidayLabel,
    RecurringHoliday
};
use super::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

/// Same month and day every year, optionally observed on a nearby weekday.
#[derive(Clone)]
pub struct FixedDateHoliday {
    label: HolidayLabel,
    month: u32,
    day: u32,
    weekend_adjustment_rules: WeekendAdjustmentRule
}

impl FixedDateHoliday {
    pub fn new(label: HolidayLabel,
               month: u32,
               day: u32,
               weekend_adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Option<FixedDateHoliday> {
        // 2000 is a leap year, so Feb 29 is accepted here and skipped in other years
        NaiveDate::from_ymd_opt(2000, month, day)?;
        Some(FixedDateHoliday {
            label,
            month,
            day,
            weekend_adjustment_rules: WeekendAdjustmentRule::new(weekend_adjustment_map)
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .map(|d| self.weekend_adjustment_rules.adjust(d))
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn label(&self) -> &HolidayLabel {
        &self.label
    }

    fn get_holiday_start(&self, year: i32) -> Vec<NaiveDate> {
        if self.weekend_adjustment_rules.is_unadjusted() {
            return self.observed_in(year).into_iter().collect();
        }

        // An observed date may cross the year boundary (Jan 1 on a Saturday
        // is observed on Dec 31 of the previous year), so look at the
        // neighbouring years too and keep what lands in `year`.
        let mut starts: Vec<NaiveDate> = (year - 1..=year + 1)
            .filter_map(|y| self.observed_in(y))
            .filter(|d| d.year() == year)
            .collect();
        starts.sort();
        starts.dedup();
        starts
    }
}
