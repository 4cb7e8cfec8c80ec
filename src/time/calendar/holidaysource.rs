use chrono::{
    Datelike,
    Days,
    NaiveDate
};
use serde::Serialize;

/// One named holiday covering `[start, end)`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct HolidayInterval {
    start: NaiveDate,
    end: NaiveDate,
    name: String
}

impl HolidayInterval {
    /// Returns `None` unless `end` is after `start`.
    pub fn new(start: NaiveDate, end: NaiveDate, name: String) -> Option<HolidayInterval> {
        if end > start {
            Some(HolidayInterval { start, end, name })
        } else {
            None
        }
    }

    pub fn single_day(date: NaiveDate, name: String) -> HolidayInterval {
        HolidayInterval::spanning(date, 1, name)
    }

    pub fn spanning(start: NaiveDate, n_days: u32, name: String) -> HolidayInterval {
        let end = start
            .checked_add_days(Days::new(n_days.max(1) as u64))
            .unwrap_or(NaiveDate::MAX);
        HolidayInterval { start, end, name }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start && d < self.end
    }

    /// Every day in `[start, end)`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d < self.end)
    }
}

/// Supplies the holidays of a country or region, one year at a time.
pub trait HolidaySource: Send + Sync {
    fn holidays_for_year(&self, year: i32) -> Vec<HolidayInterval>;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        (d.year() - 1..=d.year())
            .flat_map(|year| self.holidays_for_year(year))
            .any(|interval| interval.contains(d))
    }
}
