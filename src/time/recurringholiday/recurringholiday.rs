use chrono::{Datelike, NaiveDate};

use crate::time::calendar::holidaysource::HolidayInterval;

/// Display name and length shared by every holiday rule.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HolidayLabel {
    name: String,
    duration_days: u32
}

impl HolidayLabel {
    /// Returns `None` for a zero-day holiday.
    pub fn new(name: String, duration_days: u32) -> Option<HolidayLabel> {
        if duration_days == 0 {
            None
        } else {
            Some(HolidayLabel { name, duration_days })
        }
    }

    pub fn single_day(name: String) -> HolidayLabel {
        HolidayLabel { name, duration_days: 1 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn interval(&self, start: NaiveDate) -> HolidayInterval {
        HolidayInterval::spanning(start, self.duration_days, self.name.clone())
    }
}

pub trait RecurringHoliday: Send + Sync {

    fn label(&self) -> &HolidayLabel;

    /// First day of every occurrence of the holiday that starts in `year`.
    fn get_holiday_start(&self, year: i32) -> Vec<NaiveDate>;

    fn get_holiday(&self, year: i32) -> Vec<HolidayInterval> {
        self.get_holiday_start(year)
            .into_iter()
            .map(|start| self.label().interval(start))
            .collect()
    }

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        // A multi-day holiday starting late in the previous year can still cover `d`.
        (d.year() - 1..=d.year())
            .flat_map(|year| self.get_holiday(year))
            .any(|interval| interval.contains(*d))
    }
}
