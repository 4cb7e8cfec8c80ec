use chrono::{
    Duration,
    NaiveDate
};
use serde::{Deserialize, Serialize};

use super::recurringholiday::{
    HolidayLabel,
    RecurringHoliday
};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

/// A holiday placed a fixed number of days from Easter Sunday
/// (Carnival at -48, Good Friday at -2, Corpus Christi at +60).
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    label: HolidayLabel,
    easter_type: EasterType,
    shift_days: i32
}

/// Gregorian date of Easter Sunday, or `None` outside 1583..=4099.
pub fn easter_sunday(easter_type: EasterType, year: i32) -> Option<NaiveDate> {
    if !(1583..=4099).contains(&year) {
        return None;
    }

    let g = year % 19;

    let p = match easter_type {
        EasterType::Orthodox => {
            let i = (19 * g + 15) % 30;
            let j = (year + year / 4 + i) % 7;
            // julian-to-gregorian offset
            let e = if year <= 1600 {
                10
            } else {
                10 + year / 100 - 16 - (year / 100 - 16) / 4
            };
            (i - j + e) as u32
        },
        EasterType::Western => {
            let c = year / 100;
            let c_div_4 = c / 4;
            let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let h_div_28 = h / 28;
            let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
            (i - j) as u32
        }
    };

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month, day)
}

impl EasterRelatedHoliday {
    pub fn new(label: HolidayLabel, easter_type: EasterType, shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            label,
            easter_type,
            shift_days
        }
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn label(&self) -> &HolidayLabel {
        &self.label
    }

    fn get_holiday_start(&self, year: i32) -> Vec<NaiveDate> {
        easter_sunday(self.easter_type, year)
            .and_then(|easter| easter.checked_add_signed(Duration::days(self.shift_days as i64)))
            .into_iter()
            .collect()
    }
}
