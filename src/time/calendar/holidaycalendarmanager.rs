use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use tracing::debug;

use crate::manager::manager::{IManager, Manager};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaysource::{
    HolidayInterval,
    HolidaySource
};
use crate::time::calendar::jointcalendar::JointCalendar;
use crate::time::calendar::rulebasedcalendar::RuleBasedCalendar;
use crate::time::recurringholiday::recurringholiday::{
    HolidayLabel,
    RecurringHoliday
};
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustment;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};

// ─────────────────────────────────────────────────────────────────────────────
// Holiday rule parsing
// ─────────────────────────────────────────────────────────────────────────────

fn default_duration_days() -> u32 {
    1
}

#[derive(Deserialize)]
struct LabelJsonProp {
    name: String,
    #[serde(default = "default_duration_days")]
    duration_days: u32
}

fn label_from_json(json: &serde_json::Value) -> Result<HolidayLabel, ManagerError> {
    let json_prop: LabelJsonProp = parse_json_value(json.clone())?;
    HolidayLabel::new(json_prop.name.clone(), json_prop.duration_days)
        .ok_or_else(|| ManagerError::invalid_holiday_rule(&json_prop.name, "duration_days must be at least 1"))
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    easter_type: EasterType,
    shift_days: i32
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let label = label_from_json(&json)?;
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedHoliday::new(label, json_prop.easter_type, json_prop.shift_days)))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let label = label_from_json(&json)?;
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    let name = label.name().to_owned();
    let holiday = NthWeekdayHoliday::new(label, json_prop.month, json_prop.n, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_holiday_rule(&name, "month must be 1..=12 and n must be 1..=5"))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

fn last_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let label = label_from_json(&json)?;
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    let name = label.name().to_owned();
    let holiday = LastWeekdayHoliday::new(label, json_prop.month, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_holiday_rule(&name, "month must be 1..=12"))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    #[serde(default)]
    weekend_adjustment_map: HashMap<Weekday, WeekendAdjustment>
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let label = label_from_json(&json)?;
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let name = label.name().to_owned();
    let holiday = FixedDateHoliday::new(label, json_prop.month, json_prop.day, &json_prop.weekend_adjustment_map)
        .ok_or_else(|| ManagerError::invalid_holiday_rule(&name, "month/day is not a calendar date"))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(json),
        HolidayType::FixedDate     => fixed_date_holiday_from_json(json),
        HolidayType::LastWeekday   => last_weekday_from_json(json),
        HolidayType::NthWeekday    => nth_weekday_from_json(json)
    }
}

#[derive(Deserialize)]
struct AdditionalHolidayJsonProp {
    date: NaiveDate,
    name: String,
    #[serde(default = "default_duration_days")]
    duration_days: u32
}

#[derive(Deserialize)]
struct CalendarJsonProp {
    country: String,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    recurring_holidays: Vec<serde_json::Value>,
    #[serde(default)]
    additional_holidays: Vec<AdditionalHolidayJsonProp>
}

fn rule_based_calendar_from_json(json_prop: CalendarJsonProp) -> Result<RuleBasedCalendar, ManagerError> {
    let mut recurring_holidays: Vec<Arc<dyn RecurringHoliday>> = Vec::new();
    for recurring_holiday_json in json_prop.recurring_holidays.into_iter() {
        recurring_holidays.push(get_recurring_holiday_from_json(recurring_holiday_json)?);
    }

    let mut additional_holidays = Vec::new();
    for h in json_prop.additional_holidays.into_iter() {
        if h.duration_days == 0 {
            return Err(ManagerError::invalid_holiday_rule(&h.name, "duration_days must be at least 1"));
        }
        additional_holidays.push(HolidayInterval::spanning(h.date, h.duration_days, h.name));
    }

    Ok(RuleBasedCalendar::new(recurring_holidays, additional_holidays))
}

/// Registry key of a country (`BR`) or of one of its regions (`BR-SP`).
pub fn calendar_key(country: &str, region: Option<&str>) -> String {
    match region.filter(|r| !r.is_empty()) {
        Some(region) => format!("{}-{}", country.to_uppercase(), region.to_uppercase()),
        None => country.to_uppercase()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HolidayCalendarLoader
// ─────────────────────────────────────────────────────────────────────────────

/// Loads country and region calendars from JSON.
///
/// A regional calendar is stored as the union of its country's calendar
/// and its own rules, so it needs the country entry first. Entries may
/// come in any order: `insert_obj_from_json_vec` retries failed entries
/// until a full pass makes no progress.
pub struct HolidayCalendarLoader;

impl IManager<dyn HolidaySource> for HolidayCalendarLoader {

    fn insert_obj_from_json(
        &self,
        manager: &mut Manager<dyn HolidaySource>,
        json_value: serde_json::Value,
    ) -> Result<(), ManagerError> {
        let json_prop: CalendarJsonProp = parse_json_value(json_value)?;
        let country = json_prop.country.clone();
        let region = json_prop.region.clone();

        match region.as_deref().filter(|r| !r.is_empty()) {
            None => {
                let calendar = rule_based_calendar_from_json(json_prop)?;
                manager.insert(calendar_key(&country, None), Arc::new(calendar));
            },
            Some(region) => {
                // fails while the country is not loaded yet; retried by the caller
                let national = manager.get(&calendar_key(&country, None))?;
                let regional = rule_based_calendar_from_json(json_prop)?;
                let joint = JointCalendar::union(national, Arc::new(regional));
                manager.insert(calendar_key(&country, Some(region)), Arc::new(joint));
            }
        }
        Ok(())
    }

    fn insert_obj_from_json_vec(
        &self,
        manager: &mut Manager<dyn HolidaySource>,
        json_vec: &[serde_json::Value],
    ) -> Result<(), ManagerError> {
        let mut remain_indices: Vec<usize> = (0..json_vec.len()).collect();
        let mut result: Result<(), ManagerError> = Ok(());

        loop {
            let mut new_remain_indices: Vec<usize> = Vec::new();

            for &index in remain_indices.iter() {
                let attempt = self.insert_obj_from_json(manager, json_vec[index].clone());
                if let Err(error) = attempt {
                    new_remain_indices.push(index);
                    result = Err(error);
                }
            }

            if new_remain_indices.is_empty() {
                return Ok(());
            }
            if remain_indices == new_remain_indices {
                return result;
            }

            remain_indices = new_remain_indices;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HolidayCalendarManager
// ─────────────────────────────────────────────────────────────────────────────

/// Every loaded holiday calendar, looked up by country and optional region.
pub struct HolidayCalendarManager {
    manager: Manager<dyn HolidaySource>
}

impl HolidayCalendarManager {
    pub fn new() -> HolidayCalendarManager {
        HolidayCalendarManager { manager: Manager::new() }
    }

    pub fn from_file(file_path: &Path) -> Result<HolidayCalendarManager, ManagerError> {
        let mut calendars = HolidayCalendarManager::new();
        HolidayCalendarLoader.from_file(&mut calendars.manager, file_path)?;
        debug!(path = %file_path.display(), n_calendars = calendars.manager.len(), "loaded holiday calendars");
        Ok(calendars)
    }

    pub fn from_json_str(json: &str) -> Result<HolidayCalendarManager, ManagerError> {
        let mut calendars = HolidayCalendarManager::new();
        HolidayCalendarLoader.from_reader(&mut calendars.manager, json.as_bytes())?;
        Ok(calendars)
    }

    pub fn insert(&mut self, country: &str, region: Option<&str>, calendar: Arc<dyn HolidaySource>) {
        self.manager.insert(calendar_key(country, region), calendar);
    }

    /// The regional calendar when a region is given, the national one otherwise.
    pub fn calendar(&self, country: &str, region: Option<&str>) -> Result<Arc<dyn HolidaySource>, ManagerError> {
        self.manager.get(&calendar_key(country, region))
    }

    /// Country codes with a national calendar.
    pub fn countries(&self) -> Vec<String> {
        self.manager
            .names()
            .into_iter()
            .filter(|name| !name.contains('-'))
            .collect()
    }

    /// Region codes loaded for `country`.
    pub fn regions(&self, country: &str) -> Vec<String> {
        let prefix = format!("{}-", country.to_uppercase());
        self.manager
            .names()
            .into_iter()
            .filter_map(|name| name.strip_prefix(&prefix).map(|r| r.to_owned()))
            .collect()
    }
}

impl Default for HolidayCalendarManager {
    fn default() -> Self {
        HolidayCalendarManager::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // region listed before its country on purpose
    const CALENDARS: &str = r#"[
        {
            "country": "BR",
            "region": "SP",
            "recurring_holidays": [
                {"holiday_type": "FixedDate", "name": "Constitutionalist Revolution", "month": 7, "day": 9}
            ]
        },
        {
            "country": "BR",
            "recurring_holidays": [
                {"holiday_type": "FixedDate", "name": "Tiradentes", "month": 4, "day": 21},
                {"holiday_type": "EasterRelated", "name": "Carnival", "duration_days": 2, "easter_type": "Western", "shift_days": -48}
            ],
            "additional_holidays": [
                {"date": "2025-06-20", "name": "Decree bridge"}
            ]
        },
        {
            "country": "US",
            "recurring_holidays": [
                {"holiday_type": "NthWeekday", "name": "Thanksgiving Day", "month": 11, "n": 4, "weekday": "Thu"},
                {"holiday_type": "LastWeekday", "name": "Memorial Day", "month": 5, "weekday": "Mon"},
                {"holiday_type": "FixedDate", "name": "Independence Day", "month": 7, "day": 4,
                 "weekend_adjustment_map": {"Sat": "PreviousWeekday", "Sun": "NextWeekday"}}
            ]
        }
    ]"#;

    #[test]
    fn loads_countries_and_regions_in_any_order() {
        let calendars = HolidayCalendarManager::from_json_str(CALENDARS).unwrap();
        assert_eq!(calendars.countries(), vec!["BR", "US"]);
        assert_eq!(calendars.regions("br"), vec!["SP"]);
        assert!(calendars.regions("US").is_empty());
    }

    #[test]
    fn regional_calendar_includes_national_holidays() {
        let calendars = HolidayCalendarManager::from_json_str(CALENDARS).unwrap();
        let sp = calendars.calendar("BR", Some("SP")).unwrap();
        assert!(sp.is_holiday(ymd(2025, 7, 9)));
        assert!(sp.is_holiday(ymd(2025, 4, 21)));
        assert!(sp.is_holiday(ymd(2025, 6, 20)));
        // Carnival 2025: Easter 04-20, minus 48 days = 03-03 and 03-04
        assert!(sp.is_holiday(ymd(2025, 3, 4)));

        let br = calendars.calendar("BR", None).unwrap();
        assert!(!br.is_holiday(ymd(2025, 7, 9)));
        let also_br = calendars.calendar("BR", Some("")).unwrap();
        assert!(!also_br.is_holiday(ymd(2025, 7, 9)));
    }

    #[test]
    fn observed_independence_day() {
        let calendars = HolidayCalendarManager::from_json_str(CALENDARS).unwrap();
        let us = calendars.calendar("US", None).unwrap();
        assert!(us.is_holiday(ymd(2026, 7, 3)));
        assert!(!us.is_holiday(ymd(2026, 7, 4)));
    }

    #[test]
    fn unknown_region_is_reported() {
        let calendars = HolidayCalendarManager::from_json_str(CALENDARS).unwrap();
        let result = calendars.calendar("BR", Some("RJ"));
        assert!(matches!(result, Err(ManagerError::NameNotFoundError(key)) if key == "BR-RJ"));
    }

    #[test]
    fn region_without_country_fails_to_load() {
        let json = r#"[{"country": "AR", "region": "BA", "recurring_holidays": []}]"#;
        assert!(matches!(
            HolidayCalendarManager::from_json_str(json),
            Err(ManagerError::NameNotFoundError(key)) if key == "AR"
        ));
    }

    #[test]
    fn invalid_rule_is_rejected() {
        let json = r#"[{"country": "XX", "recurring_holidays": [
            {"holiday_type": "FixedDate", "name": "Bad", "month": 2, "day": 31}
        ]}]"#;
        assert!(matches!(
            HolidayCalendarManager::from_json_str(json),
            Err(ManagerError::InvalidHolidayRule { .. })
        ));
    }
}
