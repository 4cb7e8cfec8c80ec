use crate::planner::vacationperiod::VacationPeriod;
use crate::time::rangeofdates::RangeOfDates;

/// True when `candidate`, widened by `min_gap_days` on both ends, shares a
/// day with the extended range of any placed period. Placed periods are
/// not padded themselves, so the gap is enforced once.
pub fn overlaps(candidate: &RangeOfDates, placed_periods: &[VacationPeriod], min_gap_days: u32) -> bool {
    let padded = candidate.padded(min_gap_days);
    placed_periods
        .iter()
        .any(|placed| padded.intersects(&placed.extended_range()))
}
