use std::collections::HashSet;
use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use chrono::{
    NaiveDate,
    Weekday
};
use serde::{
    Deserialize,
    Serialize
};

use crate::manager::managererror::ManagerError;
use crate::planner::allocationerror::AllocationError;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::weekendmask::WeekendMask;

pub const DEFAULT_MIN_GAP_DAYS: u32 = 3;
pub const DEFAULT_HORIZON_DAYS: u32 = 120;
pub const DEFAULT_SPACING_DAYS: u32 = 120;

fn default_min_gap_days() -> u32 {
    DEFAULT_MIN_GAP_DAYS
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

fn default_spacing_days() -> u32 {
    DEFAULT_SPACING_DAYS
}

/// Tuning of the candidate search.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSettings {
    /// Clear days required between the extended ranges of two periods.
    #[serde(default = "default_min_gap_days")]
    pub min_gap_days: u32,
    /// Number of days past the search origin tried as start dates.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Distance from one period's extended end to the next search origin.
    #[serde(default = "default_spacing_days")]
    pub spacing_days: u32
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            min_gap_days: DEFAULT_MIN_GAP_DAYS,
            horizon_days: DEFAULT_HORIZON_DAYS,
            spacing_days: DEFAULT_SPACING_DAYS
        }
    }
}

/// What the user asked for: where they work, how many days they have and
/// how they want them split.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    pub country_code: String,
    #[serde(default)]
    pub region_code: Option<String>,
    pub vacation_days: u32,
    pub period_count: u32,
    pub main_period_min_days: u32,
    pub other_periods_min_days: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub search: SearchSettings,
    /// Saturday and Sunday when absent.
    #[serde(default)]
    pub weekends: Option<HashSet<Weekday>>
}

impl Configuration {
    /// A configuration with default search settings and a Saturday/Sunday weekend.
    pub fn new(country_code: &str,
               region_code: Option<&str>,
               vacation_days: u32,
               period_count: u32,
               main_period_min_days: u32,
               other_periods_min_days: u32,
               start_date: NaiveDate,
               end_date: NaiveDate) -> Configuration {
        Configuration {
            country_code: country_code.to_owned(),
            region_code: region_code.map(|r| r.to_owned()),
            vacation_days,
            period_count,
            main_period_min_days,
            other_periods_min_days,
            start_date,
            end_date,
            search: SearchSettings::default(),
            weekends: None
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ManagerError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file(file_path: &Path) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn with_search(mut self, search: SearchSettings) -> Configuration {
        self.search = search;
        self
    }

    /// Same request with a different number of periods, e.g. the feasible
    /// count reported by `AllocationError::InfeasibleConstraints`.
    pub fn with_period_count(&self, period_count: u32) -> Configuration {
        Configuration {
            period_count,
            ..self.clone()
        }
    }

    pub fn window(&self) -> RangeOfDates {
        RangeOfDates::new(self.start_date, self.end_date)
    }

    pub fn weekend_mask(&self) -> WeekendMask {
        self.weekends
            .as_ref()
            .map(WeekendMask::new)
            .unwrap_or_default()
    }

    /// Checks that the request can be evaluated at all.
    pub fn validate(&self) -> Result<(), AllocationError> {
        if self.end_date <= self.start_date {
            return Err(AllocationError::invalid_configuration("end date must be after start date"));
        }
        if self.vacation_days == 0 {
            return Err(AllocationError::invalid_configuration("vacation days must be positive"));
        }
        if self.period_count == 0 {
            return Err(AllocationError::invalid_configuration("number of periods must be positive"));
        }
        if self.main_period_min_days == 0 {
            return Err(AllocationError::invalid_configuration("main period minimum must be positive"));
        }
        if self.other_periods_min_days == 0 {
            return Err(AllocationError::invalid_configuration("other periods minimum must be positive"));
        }
        if self.period_count > self.vacation_days {
            return Err(AllocationError::invalid_configuration("number of periods cannot exceed vacation days"));
        }
        if self.period_count as usize > self.window().len() {
            return Err(AllocationError::invalid_configuration("number of periods cannot exceed the days in the window"));
        }
        if !self.weekend_mask().has_work_days() {
            return Err(AllocationError::invalid_configuration("weekends must leave at least one work day"));
        }
        Ok(())
    }

    /// Main minimum plus the minimum of every other period.
    pub fn minimum_days_required(&self) -> u64 {
        self.main_period_min_days as u64
            + (self.period_count as u64).saturating_sub(1) * self.other_periods_min_days as u64
    }

    /// Largest period count whose minimums fit the budget; 0 when even the
    /// main period alone does not fit.
    pub fn feasible_period_count(&self) -> u32 {
        if self.main_period_min_days > self.vacation_days || self.other_periods_min_days == 0 {
            return 0;
        }
        (self.vacation_days - self.main_period_min_days) / self.other_periods_min_days + 1
    }
}
