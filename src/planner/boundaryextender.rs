use chrono::NaiveDate;

use crate::time::calendar::workcalendar::WorkCalendar;

/// Earliest day reachable from `worked_start` by stepping back over
/// consecutive non-work days. Returns `worked_start` when the day before
/// it is a work day.
///
/// The walk stops at the first work day. It terminates because the
/// holiday set is finite and the weekend mask leaves at least one work day
/// per week; it also stops at the first representable date.
pub fn extend_backward(worked_start: NaiveDate, calendar: &WorkCalendar) -> NaiveDate {
    let mut extended_start = worked_start;
    while let Some(previous) = extended_start.pred_opt() {
        if !calendar.is_non_work_day(previous) {
            break;
        }
        extended_start = previous;
    }
    extended_start
}

/// Mirror of [`extend_backward`], walking forward from `worked_end`.
pub fn extend_forward(worked_end: NaiveDate, calendar: &WorkCalendar) -> NaiveDate {
    let mut extended_end = worked_end;
    while let Some(next) = extended_end.succ_opt() {
        if !calendar.is_non_work_day(next) {
            break;
        }
        extended_end = next;
    }
    extended_end
}

/// `(extended_start, extended_end)` for a worked range.
pub fn extend(worked_start: NaiveDate, worked_end: NaiveDate, calendar: &WorkCalendar) -> (NaiveDate, NaiveDate) {
    (extend_backward(worked_start, calendar), extend_forward(worked_end, calendar))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::holidayset::{HolidayDate, HolidaySet};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar_with(holidays: &[NaiveDate]) -> WorkCalendar {
        let set: HolidaySet = holidays
            .iter()
            .map(|d| HolidayDate::new(*d, "Holiday".to_owned()))
            .collect();
        WorkCalendar::new(set)
    }

    #[test]
    fn no_adjoining_non_work_days() {
        let c = calendar_with(&[]);
        // Tue 2025-03-11 .. Thu 2025-03-13
        assert_eq!(extend(ymd(2025, 3, 11), ymd(2025, 3, 13), &c), (ymd(2025, 3, 11), ymd(2025, 3, 13)));
    }

    #[test]
    fn absorbs_weekends_on_both_sides() {
        let c = calendar_with(&[]);
        // Mon 2025-03-10 .. Fri 2025-03-14
        assert_eq!(extend(ymd(2025, 3, 10), ymd(2025, 3, 14), &c), (ymd(2025, 3, 8), ymd(2025, 3, 16)));
    }

    #[test]
    fn bridges_holiday_and_weekend_in_one_pull() {
        // Fri 2025-03-07 holiday, Sat 8, Sun 9, start Mon 10
        let c = calendar_with(&[ymd(2025, 3, 7)]);
        assert_eq!(extend_backward(ymd(2025, 3, 10), &c), ymd(2025, 3, 7));
    }

    #[test]
    fn stops_at_first_work_day() {
        // Thu 2025-03-06 is a work day between a holiday on Wed 5 and the weekend
        let c = calendar_with(&[ymd(2025, 3, 5), ymd(2025, 3, 7)]);
        assert_eq!(extend_backward(ymd(2025, 3, 10), &c), ymd(2025, 3, 7));
        // forward from Tue 2025-03-04 stops before Thu 6
        assert_eq!(extend_forward(ymd(2025, 3, 4), &c), ymd(2025, 3, 5));
    }

    #[test]
    fn long_non_work_run_still_terminates() {
        let run: Vec<NaiveDate> = ymd(2025, 12, 20).iter_days().take(30).collect();
        let c = calendar_with(&run);
        assert_eq!(extend_forward(ymd(2025, 12, 19), &c), ymd(2026, 1, 18));
        // Mon 2026-01-19 is a work day
        assert!(c.is_work_day(ymd(2026, 1, 19)));
    }
}
