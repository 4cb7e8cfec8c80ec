use std::collections::BTreeMap;

use chrono::{
    Datelike,
    NaiveDate
};
use serde::Serialize;
use tracing::debug;

use crate::time::calendar::holidaysource::HolidaySource;
use crate::time::rangeofdates::RangeOfDates;

/// A single holiday day with its display name.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct HolidayDate {
    date: NaiveDate,
    name: String
}

impl HolidayDate {
    pub fn new(date: NaiveDate, name: String) -> HolidayDate {
        HolidayDate { date, name }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Flattened, per-day view of a holiday calendar over a search window.
///
/// Built once per evaluation and read-only afterwards. Several holidays
/// may fall on the same date; all of their names are kept.
#[derive(Clone, Default, Debug)]
pub struct HolidaySet {
    days: BTreeMap<NaiveDate, Vec<String>>
}

impl HolidaySet {
    pub fn new() -> HolidaySet {
        HolidaySet::default()
    }

    /// Expands every holiday interval of every year the window touches
    /// into one entry per day.
    pub fn from_source(source: &dyn HolidaySource, window: &RangeOfDates) -> HolidaySet {
        let mut holiday_set = HolidaySet::new();
        for year in window.start_date().year()..=window.end_date().year() {
            for interval in source.holidays_for_year(year) {
                for d in interval.days() {
                    holiday_set.insert(HolidayDate::new(d, interval.name().to_owned()));
                }
            }
        }
        debug!(
            start = %window.start_date(),
            end = %window.end_date(),
            n_days = holiday_set.len(),
            "built holiday set"
        );
        holiday_set
    }

    pub fn insert(&mut self, holiday: HolidayDate) {
        let names = self.days.entry(holiday.date).or_default();
        if !names.iter().any(|n| *n == holiday.name) {
            names.push(holiday.name);
        }
    }

    #[inline]
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.days.contains_key(&d)
    }

    /// Names of every holiday on `d`, joined with " / ".
    pub fn name(&self, d: NaiveDate) -> Option<String> {
        self.days.get(&d).map(|names| names.join(" / "))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All holiday days in date order.
    pub fn holidays(&self) -> Vec<HolidayDate> {
        self.days
            .iter()
            .map(|(d, names)| HolidayDate::new(*d, names.join(" / ")))
            .collect()
    }
}

impl FromIterator<HolidayDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = HolidayDate>>(iter: T) -> Self {
        let mut holiday_set = HolidaySet::new();
        for holiday in iter {
            holiday_set.insert(holiday);
        }
        holiday_set
    }
}
