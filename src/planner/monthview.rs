use chrono::{
    Datelike,
    NaiveDate
};
use serde::Serialize;

use crate::planner::vacationperiod::VacationPeriod;
use crate::time::calendar::workcalendar::WorkCalendar;
use crate::time::utility::days_of_month;

/// How a single day of a month grid relates to a placed period.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub enum DayKind {
    /// Charged against the budget.
    Worked,
    /// Free day absorbed into the period by the boundary extension.
    Bridged,
    Holiday(String),
    Weekend,
    Regular
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct DayCell {
    date: NaiveDate,
    kind: DayKind
}

impl DayCell {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> &DayKind {
        &self.kind
    }
}

/// One month of a Sunday-first calendar grid around a vacation period.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct MonthView {
    year: i32,
    month: u32,
    leading_blanks: u32,
    days: Vec<DayCell>
}

impl MonthView {
    /// Returns `None` for an invalid month.
    pub fn new(year: i32, month: u32, period: &VacationPeriod, calendar: &WorkCalendar) -> Option<MonthView> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days = (1..=days_of_month(year, month))
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .map(|date| DayCell { date, kind: classify(date, period, calendar) })
            .collect();

        Some(MonthView {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Empty cells before the 1st in a grid whose weeks start on Sunday.
    pub fn leading_blanks(&self) -> u32 {
        self.leading_blanks
    }

    pub fn days(&self) -> &[DayCell] {
        &self.days
    }
}

fn classify(date: NaiveDate, period: &VacationPeriod, calendar: &WorkCalendar) -> DayKind {
    if period.worked_range().contain(date) {
        DayKind::Worked
    } else if period.extended_range().contain(date) {
        DayKind::Bridged
    } else if let Some(name) = calendar.holiday_name(date) {
        DayKind::Holiday(name)
    } else if calendar.is_weekend(date) {
        DayKind::Weekend
    } else {
        DayKind::Regular
    }
}

/// `(year, month)` of every month the extended range touches, in order.
pub fn months_spanned(period: &VacationPeriod) -> Vec<(i32, u32)> {
    let start = period.extended_start();
    let end = period.extended_end();
    let mut months = Vec::new();
    let (mut year, mut month) = (start.year(), start.month());
    while (year, month) <= (end.year(), end.month()) {
        months.push((year, month));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    months
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::holidayset::{HolidayDate, HolidaySet};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (VacationPeriod, WorkCalendar) {
        let holidays: HolidaySet = vec![
            HolidayDate::new(ymd(2025, 12, 25), "Christmas Day".to_owned()),
            HolidayDate::new(ymd(2026, 1, 1), "New Year's Day".to_owned()),
            HolidayDate::new(ymd(2026, 1, 2), "Bridge holiday".to_owned()),
        ].into_iter().collect();
        // worked Mon 2025-12-29 .. Wed 31, bridged through Sun 2026-01-04
        let period = VacationPeriod::new(ymd(2025, 12, 29), ymd(2025, 12, 31), ymd(2025, 12, 27), ymd(2026, 1, 4)).unwrap();
        (period, WorkCalendar::new(holidays))
    }

    #[test]
    fn classifies_each_day() {
        let (period, calendar) = setup();
        let view = MonthView::new(2025, 12, &period, &calendar).unwrap();
        // 2025-12-01 is a Monday
        assert_eq!(view.leading_blanks(), 1);
        assert_eq!(view.days().len(), 31);
        assert_eq!(view.days()[24].kind(), &DayKind::Holiday("Christmas Day".to_owned()));
        assert_eq!(view.days()[5].kind(), &DayKind::Weekend);
        assert_eq!(view.days()[1].kind(), &DayKind::Regular);
        assert_eq!(view.days()[26].kind(), &DayKind::Bridged);
        assert_eq!(view.days()[28].kind(), &DayKind::Worked);
    }

    #[test]
    fn holidays_inside_the_period_show_as_bridged() {
        let (period, calendar) = setup();
        let view = MonthView::new(2026, 1, &period, &calendar).unwrap();
        assert_eq!(view.days()[0].kind(), &DayKind::Bridged);
        assert_eq!(view.days()[4].kind(), &DayKind::Regular);
    }

    #[test]
    fn spans_year_boundary() {
        let (period, _) = setup();
        assert_eq!(months_spanned(&period), vec![(2025, 12), (2026, 1)]);
    }

    #[test]
    fn invalid_month() {
        let (period, calendar) = setup();
        assert!(MonthView::new(2025, 13, &period, &calendar).is_none());
    }
}
