use std::collections::HashMap;

use chrono::{
    Datelike,
    Duration,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};


/// How a fixed-date holiday that lands on a weekend is observed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Observance shift per weekday, indexed by `Weekday::num_days_from_monday()`.
#[derive(Clone, Debug)]
pub struct WeekendAdjustmentRule {
    // None means the holiday is observed on its own date
    rule: [Option<i64>; 7]
}

impl WeekendAdjustmentRule {
    /// Builds the shift table. When consecutive weekdays are all listed,
    /// the shift keeps walking in the adjustment direction until it
    /// leaves the listed days (e.g. Sat -> next -> Sun -> next -> Mon is +2).
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule: [Option<i64>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let step = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut to_weekday = weekday;
            let mut shift_days = 0i64;
            // at most 7 steps; a map covering the whole week stops after a full turn
            while adjustment_map.contains_key(&to_weekday) && shift_days.abs() < 7 {
                to_weekday = step(&to_weekday);
                shift_days += adj as i64;
            }

            rule[weekday.num_days_from_monday() as usize] = Some(shift_days);
        }

        WeekendAdjustmentRule { rule }
    }

    pub fn unadjusted() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule { rule: [None; 7] }
    }

    pub fn is_unadjusted(&self) -> bool {
        self.rule.iter().all(|r| r.is_none())
    }

    /// Largest number of days an observed date can move from the nominal one.
    pub fn max_shift(&self) -> u32 {
        self.rule.iter()
            .flatten()
            .map(|shift| shift.unsigned_abs() as u32)
            .max()
            .unwrap_or(0)
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        let idx = d.weekday().num_days_from_monday() as usize;
        match self.rule[idx] {
            Some(shift) => d + Duration::days(shift),
            None => d,
        }
    }
}
