use chrono::NaiveDate;

use vacationsplit::configuration::{Configuration, SearchSettings};
use vacationsplit::planner::allocationerror::AllocationError;
use vacationsplit::planner::periodallocator::allocate;
use vacationsplit::time::calendar::holidayset::{HolidayDate, HolidaySet};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn holidays(dates: &[NaiveDate]) -> HolidaySet {
    dates
        .iter()
        .map(|d| HolidayDate::new(*d, "Holiday".to_owned()))
        .collect()
}

#[test]
fn year_without_holidays_only_absorbs_weekends() {
    // Mon 2025-01-06 .. Mon 2026-01-05, split [16, 7, 7]
    let config = Configuration::new("XX", None, 30, 3, 14, 5, ymd(2025, 1, 6), ymd(2026, 1, 5));
    let periods = allocate(&config, &HolidaySet::new()).unwrap();

    let counts: Vec<u32> = periods.iter().map(|p| p.worked_day_count()).collect();
    assert_eq!(counts, vec![16, 7, 7]);

    // Mon 01-06 .. Tue 01-21, pulled back over the weekend before the window
    assert_eq!(periods[0].worked_start(), ymd(2025, 1, 6));
    assert_eq!(periods[0].worked_end(), ymd(2025, 1, 21));
    assert_eq!(periods[0].extended_start(), ymd(2025, 1, 4));
    assert_eq!(periods[0].extended_end(), ymd(2025, 1, 21));

    // origin Wed 05-21; first Monday run after it
    assert_eq!(periods[1].worked_start(), ymd(2025, 5, 26));
    assert_eq!(periods[1].worked_end(), ymd(2025, 6, 1));
    assert_eq!(periods[1].extended_start(), ymd(2025, 5, 24));
    assert_eq!(periods[1].extended_end(), ymd(2025, 6, 1));

    // origin Mon 09-29
    assert_eq!(periods[2].worked_start(), ymd(2025, 9, 29));
    assert_eq!(periods[2].extended_start(), ymd(2025, 9, 27));
    assert_eq!(periods[2].extended_end(), ymd(2025, 10, 5));

    for p in periods.iter() {
        assert!(p.bridged_days() <= 2);
    }
}

#[test]
fn holiday_before_the_weekend_is_bridged_in_one_pull() {
    // Fri 2025-03-07 holiday, then the weekend, then Mon 10
    let config = Configuration::new("XX", None, 5, 1, 5, 5, ymd(2025, 3, 10), ymd(2025, 12, 31));
    let periods = allocate(&config, &holidays(&[ymd(2025, 3, 7)])).unwrap();

    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].worked_start(), ymd(2025, 3, 10));
    assert_eq!(periods[0].extended_start(), ymd(2025, 3, 7));
    assert_eq!(periods[0].extended_end(), ymd(2025, 3, 16));
    assert_eq!(periods[0].total_days_off(), 10);
}

#[test]
fn holiday_monday_pulls_a_tuesday_start_back_to_saturday() {
    // Mon 2025-03-17 holiday; search from Tue 03-11
    let config = Configuration::new("XX", None, 5, 1, 5, 5, ymd(2025, 3, 11), ymd(2025, 12, 31));
    let periods = allocate(&config, &holidays(&[ymd(2025, 3, 17)])).unwrap();

    assert_eq!(periods[0].worked_start(), ymd(2025, 3, 18));
    assert_eq!(periods[0].extended_start(), ymd(2025, 3, 15));
    assert_eq!(periods[0].extended_end(), ymd(2025, 3, 23));
}

#[test]
fn infeasible_minimums_report_the_adjusted_period_count() {
    let config = Configuration::new("XX", None, 35, 3, 20, 10, ymd(2025, 1, 6), ymd(2026, 1, 5));
    let err = allocate(&config, &HolidaySet::new()).unwrap_err();
    assert_eq!(err, AllocationError::InfeasibleConstraints {
        requested_period_count: 3,
        minimum_days_required: 40,
        vacation_days: 35,
        feasible_period_count: 2
    });

    let adjusted = config.with_period_count(2);
    let periods = allocate(&adjusted, &HolidaySet::new()).unwrap();
    let counts: Vec<u32> = periods.iter().map(|p| p.worked_day_count()).collect();
    assert_eq!(counts, vec![23, 12]);
}

#[test]
fn narrow_window_fails_instead_of_returning_fewer_periods() {
    // Mon 2025-03-10 .. Thu 2025-03-20
    let config = Configuration::new("XX", None, 10, 2, 5, 5, ymd(2025, 3, 10), ymd(2025, 3, 20));
    let err = allocate(&config, &HolidaySet::new()).unwrap_err();
    assert_eq!(err, AllocationError::NoPlacementFound {
        period_index: 1,
        // extended end Sun 03-16 + 120 days
        search_start: ymd(2025, 7, 14),
        horizon_days: 120
    });
}

#[test]
fn short_horizon_with_no_spacing_exhausts_on_overlap() {
    let search = SearchSettings { min_gap_days: 3, horizon_days: 3, spacing_days: 0 };
    let config = Configuration::new("XX", None, 10, 2, 5, 5, ymd(2025, 3, 10), ymd(2025, 12, 31))
        .with_search(search);
    let err = allocate(&config, &HolidaySet::new()).unwrap_err();
    assert!(matches!(err, AllocationError::NoPlacementFound { period_index: 1, .. }));
}
