use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate
};

use crate::time::calendar::holidaysource::{
    HolidayInterval,
    HolidaySource
};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// A holiday source made of yearly rules plus one-off dated holidays.
pub struct RuleBasedCalendar {
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
    additional_holidays: Vec<HolidayInterval>
}

impl RuleBasedCalendar {
    /// Creates a new RuleBasedCalendar.
    ///
    /// # Arguments
    /// * `recurring_holidays` - Yearly holiday rules
    /// * `additional_holidays` - One-time holidays (decrees, bridge days granted by law)
    pub fn new(
        recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
        additional_holidays: Vec<HolidayInterval>
    ) -> RuleBasedCalendar {
        RuleBasedCalendar {
            recurring_holidays,
            additional_holidays
        }
    }

    pub fn recurring_holidays(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.recurring_holidays
    }

    pub fn additional_holidays(&self) -> &[HolidayInterval] {
        &self.additional_holidays
    }

    pub fn holiday_starts(&self, year: i32) -> Vec<NaiveDate> {
        self.holidays_for_year(year).iter().map(|h| h.start()).collect()
    }
}

impl HolidaySource for RuleBasedCalendar {
    /// Holidays starting in `year`, sorted by start date.
    fn holidays_for_year(&self, year: i32) -> Vec<HolidayInterval> {
        let mut holidays: Vec<HolidayInterval> = self.recurring_holidays
            .iter()
            .flat_map(|r| r.get_holiday(year))
            .collect();

        holidays.extend(
            self.additional_holidays
                .iter()
                .filter(|h| h.start().year() == year)
                .cloned()
        );

        holidays.sort_by(|a, b| a.start().cmp(&b.start()).then_with(|| a.name().cmp(b.name())));
        holidays
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
    use crate::time::recurringholiday::recurringholiday::HolidayLabel;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn merges_rules_and_additional_holidays_sorted() {
        let christmas: Arc<dyn RecurringHoliday> = Arc::new(FixedDateHoliday::new(
            HolidayLabel::single_day("Christmas Day".to_owned()), 12, 25, &HashMap::new()
        ).unwrap());
        let calendar = RuleBasedCalendar::new(
            vec![christmas],
            vec![
                HolidayInterval::single_day(ymd(2025, 3, 10), "Decree".to_owned()),
                HolidayInterval::single_day(ymd(2026, 3, 10), "Other year".to_owned()),
            ]
        );
        assert_eq!(calendar.holiday_starts(2025), vec![ymd(2025, 3, 10), ymd(2025, 12, 25)]);
        assert!(calendar.is_holiday(ymd(2025, 12, 25)));
        assert!(!calendar.is_holiday(ymd(2025, 12, 26)));
    }
}
