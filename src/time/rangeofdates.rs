use chrono::{
    Days,
    NaiveDate
};
use serde::Serialize;

use crate::time::utility::{
    add_days,
    sub_days
};

/// Inclusive span of calendar days.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Widens the range by `days` on both ends.
    pub fn padded(&self, days: u32) -> RangeOfDates {
        RangeOfDates {
            start_date: sub_days(self.start_date, days),
            end_date: add_days(self.end_date, days)
        }
    }

    /// True when the two ranges share at least one day.
    pub fn intersects(&self, other: &RangeOfDates) -> bool {
        self.start_date <= other.end_date && self.end_date >= other.start_date
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates.start_date.checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }
}
