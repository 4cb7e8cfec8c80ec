use tracing::{
    debug,
    warn
};

use crate::configuration::Configuration;
use crate::planner::allocationerror::AllocationError;
use crate::planner::candidatesearch::CandidateSearch;
use crate::planner::vacationperiod::VacationPeriod;
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::calendar::holidaysource::HolidaySource;
use crate::time::calendar::workcalendar::WorkCalendar;
use crate::time::utility::add_days;

// ─────────────────────────────────────────────────────────────────────────────
// Budget split
// ─────────────────────────────────────────────────────────────────────────────

/// Fails with `InfeasibleConstraints` when the minimum lengths exceed the budget.
pub fn check_constraints(config: &Configuration) -> Result<(), AllocationError> {
    let minimum_days_required = config.minimum_days_required();
    if minimum_days_required > config.vacation_days as u64 {
        let feasible_period_count = config.feasible_period_count();
        warn!(
            requested = config.period_count,
            feasible = feasible_period_count,
            minimum_days_required,
            vacation_days = config.vacation_days,
            "period minimums exceed the vacation budget"
        );
        return Err(AllocationError::InfeasibleConstraints {
            requested_period_count: config.period_count,
            minimum_days_required: u32::try_from(minimum_days_required).unwrap_or(u32::MAX),
            vacation_days: config.vacation_days,
            feasible_period_count
        });
    }
    Ok(())
}

/// Days per period: the main period gets its minimum, every other period
/// gets the other minimum, then the remainder is dealt one day at a time
/// starting from the main period.
///
/// Call after `check_constraints`; the result always sums to the budget.
pub fn distribute_days(config: &Configuration) -> Vec<u32> {
    let n = config.period_count as usize;
    if n == 0 {
        return Vec::new();
    }

    let mut days_distribution = vec![config.other_periods_min_days; n];
    days_distribution[0] = config.main_period_min_days;

    let assigned: u64 = days_distribution.iter().map(|d| *d as u64).sum();
    let remainder = (config.vacation_days as u64).saturating_sub(assigned);

    // round-robin in closed form: every period gets `base`, the first `extra` one more
    let base = (remainder / n as u64) as u32;
    let extra = (remainder % n as u64) as usize;
    for (i, days) in days_distribution.iter_mut().enumerate() {
        *days += base + u32::from(i < extra);
    }
    days_distribution
}

// ─────────────────────────────────────────────────────────────────────────────
// Allocation
// ─────────────────────────────────────────────────────────────────────────────

/// Places every period of `config`, in order, against the given holidays.
///
/// The first search starts at the window start; each following one starts
/// `spacing_days` after the previous period's extended end. Either all
/// periods are placed or an error is returned; there is no partial result.
pub fn allocate(config: &Configuration, holidays: &HolidaySet) -> Result<Vec<VacationPeriod>, AllocationError> {
    config.validate()?;
    check_constraints(config)?;

    let calendar = WorkCalendar::with_weekends(config.weekend_mask(), holidays.clone())
        .ok_or_else(|| AllocationError::invalid_configuration("weekends must leave at least one work day"))?;
    let search = CandidateSearch::new(
        &calendar,
        config.end_date,
        config.search.min_gap_days,
        config.search.horizon_days
    );

    let days_distribution = distribute_days(config);
    let mut periods: Vec<VacationPeriod> = Vec::with_capacity(days_distribution.len());
    let mut search_start = config.start_date;

    for (period_index, &worked_day_target) in days_distribution.iter().enumerate() {
        let period = search
            .find_best_period(search_start, &periods, worked_day_target)
            .ok_or(AllocationError::NoPlacementFound {
                period_index,
                search_start,
                horizon_days: config.search.horizon_days
            })?;

        debug!(
            period_index,
            worked_start = %period.worked_start(),
            worked_end = %period.worked_end(),
            extended_start = %period.extended_start(),
            extended_end = %period.extended_end(),
            total_days_off = period.total_days_off(),
            "placed vacation period"
        );

        search_start = add_days(period.extended_end(), config.search.spacing_days);
        periods.push(period);
    }

    Ok(periods)
}

/// Expands the holidays of `source` over the configured window, then allocates.
pub fn allocate_with_source(config: &Configuration,
                            source: &dyn HolidaySource) -> Result<Vec<VacationPeriod>, AllocationError> {
    config.validate()?;
    let holidays = HolidaySet::from_source(source, &config.window());
    allocate(config, &holidays)
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config(vacation_days: u32, period_count: u32, main: u32, other: u32) -> Configuration {
        Configuration::new("BR", None, vacation_days, period_count, main, other, ymd(2025, 1, 6), ymd(2026, 1, 5))
    }

    #[test]
    fn remainder_goes_round_robin_from_the_main_period() {
        assert_eq!(distribute_days(&config(30, 3, 14, 5)), vec![16, 7, 7]);
        assert_eq!(distribute_days(&config(31, 3, 14, 5)), vec![17, 7, 7]);
        assert_eq!(distribute_days(&config(26, 3, 14, 5)), vec![15, 6, 5]);
        assert_eq!(distribute_days(&config(24, 3, 14, 5)), vec![14, 5, 5]);
        assert_eq!(distribute_days(&config(20, 1, 14, 5)), vec![20]);
    }

    #[test]
    fn distribution_conserves_the_budget() {
        for budget in 24..60 {
            let c = config(budget, 3, 14, 5);
            assert_eq!(distribute_days(&c).iter().sum::<u32>(), budget);
        }
    }

    #[test]
    fn infeasible_request_reports_adjusted_count() {
        let result = allocate(&config(35, 3, 20, 10), &HolidaySet::new());
        assert_eq!(result, Err(AllocationError::InfeasibleConstraints {
            requested_period_count: 3,
            minimum_days_required: 40,
            vacation_days: 35,
            feasible_period_count: 2
        }));
    }

    #[test]
    fn invalid_configuration_is_checked_first() {
        let mut c = config(35, 3, 20, 10);
        c.end_date = c.start_date;
        assert!(matches!(allocate(&c, &HolidaySet::new()), Err(AllocationError::InvalidConfiguration { .. })));
    }

    #[test]
    fn budget_beyond_the_date_range_is_not_placed() {
        let result = allocate(&config(200_000_000, 1, 14, 5), &HolidaySet::new());
        assert_eq!(result, Err(AllocationError::NoPlacementFound {
            period_index: 0,
            search_start: ymd(2025, 1, 6),
            horizon_days: 120
        }));
    }

    #[test]
    fn huge_period_count_is_rejected_before_distribution() {
        let c = config(u32::MAX, u32::MAX - 1, 1, 1);
        assert!(matches!(allocate(&c, &HolidaySet::new()), Err(AllocationError::InvalidConfiguration { .. })));
    }

    #[test]
    fn next_search_starts_after_spacing() {
        let c = config(10, 2, 5, 5);
        let periods = allocate(&c, &HolidaySet::new()).unwrap();
        assert_eq!(periods.len(), 2);
        // Mon 2025-01-06 .. Fri 10, extended Sat 4 .. Sun 12
        assert_eq!(periods[0].worked_start(), ymd(2025, 1, 6));
        assert_eq!(periods[0].extended_end(), ymd(2025, 1, 12));
        // next origin: Sun 2025-01-12 + 120 days = Mon 2025-05-12
        assert_eq!(periods[1].worked_start(), ymd(2025, 5, 12));
    }
}
