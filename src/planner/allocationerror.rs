use chrono::NaiveDate;
use thiserror::Error;

/// Why an allocation produced no periods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The configuration cannot be evaluated at all.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        reason: String
    },

    /// The minimum lengths do not fit the budget. `feasible_period_count`
    /// is the largest period count that does; the caller re-runs with it.
    #[error(
        "{requested_period_count} periods need at least {minimum_days_required} days but the budget is \
         {vacation_days}; at most {feasible_period_count} periods fit"
    )]
    InfeasibleConstraints {
        requested_period_count: u32,
        minimum_days_required: u32,
        vacation_days: u32,
        feasible_period_count: u32
    },

    /// The search horizon ran out before a non-overlapping slot was found.
    /// `period_index` is zero-based.
    #[error(
        "cannot schedule period {} within the search window (searched {horizon_days} days from {search_start}); \
         widen the window or reduce the number of periods",
        .period_index + 1
    )]
    NoPlacementFound {
        period_index: usize,
        search_start: NaiveDate,
        horizon_days: u32
    }
}

impl AllocationError {
    pub fn invalid_configuration(reason: &str) -> AllocationError {
        AllocationError::InvalidConfiguration { reason: reason.to_owned() }
    }

    /// Only infeasible constraints can be fixed by adjusting the request.
    pub fn is_adjustment(&self) -> bool {
        matches!(self, AllocationError::InfeasibleConstraints { .. })
    }
}
