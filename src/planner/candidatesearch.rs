use std::cmp::Ordering;

use chrono::{
    Days,
    NaiveDate
};
use tracing::trace;

use crate::planner::boundaryextender::extend;
use crate::planner::overlapguard::overlaps;
use crate::planner::vacationperiod::VacationPeriod;
use crate::time::calendar::workcalendar::WorkCalendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::add_days;

/// A placement that survived the overlap check, with its ranking keys.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Candidate {
    period: VacationPeriod,
    total_days_off: u32,
    distance_days: i64
}

impl Candidate {
    pub fn period(&self) -> VacationPeriod {
        self.period
    }

    pub fn total_days_off(&self) -> u32 {
        self.total_days_off
    }

    pub fn distance_days(&self) -> i64 {
        self.distance_days
    }

    /// Most days off first, then closest to the search origin, then earliest.
    pub fn rank(&self, other: &Candidate) -> Ordering {
        other.total_days_off.cmp(&self.total_days_off)
            .then_with(|| self.distance_days.cmp(&other.distance_days))
            .then_with(|| self.period.worked_start().cmp(&other.period.worked_start()))
    }
}

/// Scans forward from an origin for the best slot of a given length.
pub struct CandidateSearch<'a> {
    calendar: &'a WorkCalendar,
    window_end: NaiveDate,
    min_gap_days: u32,
    horizon_days: u32
}

impl<'a> CandidateSearch<'a> {
    /// # Arguments
    /// * `calendar` - Work/non-work classification
    /// * `window_end` - No worked range may start after this date
    /// * `min_gap_days` - Clear days required around every placed period
    /// * `horizon_days` - How far past the origin start dates are tried
    pub fn new(calendar: &'a WorkCalendar,
               window_end: NaiveDate,
               min_gap_days: u32,
               horizon_days: u32) -> CandidateSearch<'a> {
        CandidateSearch {
            calendar,
            window_end,
            min_gap_days,
            horizon_days
        }
    }

    /// Last start date tried for a search beginning at `search_start`.
    pub fn last_start(&self, search_start: NaiveDate) -> NaiveDate {
        add_days(search_start, self.horizon_days).min(self.window_end)
    }

    /// Every non-overlapping placement of `worked_day_target` days whose
    /// worked range starts on a work day in the scanned span, in scan order.
    ///
    /// The worked range is a run of consecutive calendar days; weekends and
    /// holidays inside it still count towards the target. Starts whose run
    /// would end past `NaiveDate::MAX` are skipped.
    pub fn candidates(&self,
                      search_start: NaiveDate,
                      placed_periods: &[VacationPeriod],
                      worked_day_target: u32) -> Vec<Candidate> {
        if worked_day_target == 0 || search_start > self.window_end {
            return Vec::new();
        }

        let last_start = self.last_start(search_start);
        let mut candidates = Vec::new();

        for worked_start in search_start.iter_days().take_while(|d| *d <= last_start) {
            if !self.calendar.is_work_day(worked_start) {
                continue;
            }

            // a run past the last representable date cannot hold the target
            let Some(worked_end) = worked_start.checked_add_days(Days::new(u64::from(worked_day_target - 1))) else {
                continue;
            };
            let (extended_start, extended_end) = extend(worked_start, worked_end, self.calendar);

            let extended = RangeOfDates::new(extended_start, extended_end);
            if overlaps(&extended, placed_periods, self.min_gap_days) {
                continue;
            }

            let Some(period) = VacationPeriod::new(worked_start, worked_end, extended_start, extended_end) else {
                continue;
            };
            candidates.push(Candidate {
                period,
                total_days_off: period.total_days_off(),
                distance_days: (worked_start - search_start).num_days().abs()
            });
        }

        trace!(
            %search_start,
            %last_start,
            worked_day_target,
            n_candidates = candidates.len(),
            "scanned candidate start dates"
        );
        candidates
    }

    /// The top-ranked candidate, or `None` when nothing fits in the horizon.
    pub fn find_best_period(&self,
                            search_start: NaiveDate,
                            placed_periods: &[VacationPeriod],
                            worked_day_target: u32) -> Option<VacationPeriod> {
        let mut candidates = self.candidates(search_start, placed_periods, worked_day_target);
        candidates.sort_by(|a, b| a.rank(b));
        candidates.first().map(|c| c.period)
    }
}
