use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::recurringholiday::{
    HolidayLabel,
    RecurringHoliday
};

/// The last given weekday of a month, e.g. the last Monday of May.
#[derive(Clone)]
pub struct LastWeekdayHoliday {
    label: HolidayLabel,
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(label: HolidayLabel, month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { label, month, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn label(&self) -> &HolidayLabel {
        &self.label
    }

    fn get_holiday_start(&self, year: i32) -> Vec<NaiveDate> {
        let first_of_next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, self.month + 1, 1)
        };
        let Some(first_of_next_month) = first_of_next_month else {
            return Vec::new();
        };

        let days_back = (first_of_next_month.weekday().num_days_from_monday() as i32
                         - self.weekday.num_days_from_monday() as i32 + 7) % 7;
        // same weekday as the 1st of next month: go back a full week
        let days_back = if days_back == 0 { 7 } else { days_back as u64 };

        first_of_next_month.checked_sub_days(Days::new(days_back))
            .into_iter()
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memorial_day() {
        let h = LastWeekdayHoliday::new(
            HolidayLabel::single_day("Memorial Day".to_owned()), 5, Weekday::Mon
        ).unwrap();
        assert_eq!(h.get_holiday_start(2025), vec![NaiveDate::from_ymd_opt(2025, 5, 26).unwrap()]);
        assert_eq!(h.get_holiday_start(2026), vec![NaiveDate::from_ymd_opt(2026, 5, 25).unwrap()]);
    }

    #[test]
    fn december_rolls_into_next_year_lookup() {
        let h = LastWeekdayHoliday::new(
            HolidayLabel::single_day("Last Friday".to_owned()), 12, Weekday::Fri
        ).unwrap();
        assert_eq!(h.get_holiday_start(2025), vec![NaiveDate::from_ymd_opt(2025, 12, 26).unwrap()]);
    }
}
