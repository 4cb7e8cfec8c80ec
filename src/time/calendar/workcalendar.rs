use chrono::{
    NaiveDate,
    NaiveDateTime
};

use crate::time::calendar::holidayset::HolidaySet;
use crate::time::utility::normalize;
use crate::time::weekendmask::WeekendMask;

/// Answers "is this a non-work day?" for the planner.
#[derive(Clone, Debug)]
pub struct WorkCalendar {
    weekends: WeekendMask,
    holidays: HolidaySet
}

impl WorkCalendar {
    /// Saturday/Sunday weekends.
    pub fn new(holidays: HolidaySet) -> WorkCalendar {
        WorkCalendar {
            weekends: WeekendMask::default(),
            holidays
        }
    }

    /// Returns `None` when the mask leaves no work day in the week.
    pub fn with_weekends(weekends: WeekendMask, holidays: HolidaySet) -> Option<WorkCalendar> {
        if weekends.has_work_days() {
            Some(WorkCalendar { weekends, holidays })
        } else {
            None
        }
    }

    pub fn weekends(&self) -> WeekendMask {
        self.weekends
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    #[inline]
    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.contains(d)
    }

    /// Timestamps are compared by calendar day only.
    #[inline]
    pub fn is_holiday_at(&self, timestamp: NaiveDateTime) -> bool {
        self.is_holiday(normalize(timestamp))
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d)
    }

    #[inline]
    pub fn is_non_work_day(&self, d: NaiveDate) -> bool {
        self.is_weekend(d) || self.is_holiday(d)
    }

    #[inline]
    pub fn is_work_day(&self, d: NaiveDate) -> bool {
        !self.is_non_work_day(d)
    }

    pub fn holiday_name(&self, d: NaiveDate) -> Option<String> {
        self.holidays.name(d)
    }
}
