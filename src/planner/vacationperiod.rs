use chrono::NaiveDate;
use serde::Serialize;

use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::inclusive_day_count;

/// One placed block of vacation.
///
/// | field            | meaning                                              |
/// |------------------|------------------------------------------------------|
/// | `worked_start`   | first day charged against the budget                 |
/// | `worked_end`     | last day charged against the budget                  |
/// | `extended_start` | first day off, after absorbing adjoining non-work days |
/// | `extended_end`   | last day off, after absorbing adjoining non-work days  |
///
/// `extended_start <= worked_start <= worked_end <= extended_end` always holds.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct VacationPeriod {
    worked_start: NaiveDate,
    worked_end: NaiveDate,
    extended_start: NaiveDate,
    extended_end: NaiveDate,
    worked_day_count: u32
}

impl VacationPeriod {
    /// Returns `None` when the four dates are not nested. `worked_day_count`
    /// is the inclusive length of the worked range.
    pub fn new(worked_start: NaiveDate,
               worked_end: NaiveDate,
               extended_start: NaiveDate,
               extended_end: NaiveDate) -> Option<VacationPeriod> {
        if !(extended_start <= worked_start && worked_start <= worked_end && worked_end <= extended_end) {
            return None;
        }
        let worked_day_count = u32::try_from(inclusive_day_count(worked_start, worked_end)).ok()?;
        Some(VacationPeriod {
            worked_start,
            worked_end,
            extended_start,
            extended_end,
            worked_day_count
        })
    }

    pub fn worked_start(&self) -> NaiveDate {
        self.worked_start
    }

    pub fn worked_end(&self) -> NaiveDate {
        self.worked_end
    }

    pub fn extended_start(&self) -> NaiveDate {
        self.extended_start
    }

    pub fn extended_end(&self) -> NaiveDate {
        self.extended_end
    }

    pub fn worked_day_count(&self) -> u32 {
        self.worked_day_count
    }

    pub fn worked_range(&self) -> RangeOfDates {
        RangeOfDates::new(self.worked_start, self.worked_end)
    }

    pub fn extended_range(&self) -> RangeOfDates {
        RangeOfDates::new(self.extended_start, self.extended_end)
    }

    /// Consecutive days off, bridged non-work days included.
    pub fn total_days_off(&self) -> u32 {
        inclusive_day_count(self.extended_start, self.extended_end) as u32
    }

    /// Days off gained without spending budget.
    pub fn bridged_days(&self) -> u32 {
        self.total_days_off() - self.worked_day_count
    }
}
