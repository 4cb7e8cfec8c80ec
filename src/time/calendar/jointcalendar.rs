use std::sync::Arc;

use crate::time::calendar::holidaysource::{
    HolidayInterval,
    HolidaySource
};

/// National holidays plus the holidays of one region (state, province).
///
/// A date is a holiday if it is a holiday in EITHER calendar. Intervals
/// with the same start and name (a national holiday repeated in the
/// regional file) are reported once.
pub struct JointCalendar {
    national: Arc<dyn HolidaySource>,
    regional: Arc<dyn HolidaySource>
}

impl JointCalendar {
    pub fn union(national: Arc<dyn HolidaySource>, regional: Arc<dyn HolidaySource>) -> JointCalendar {
        JointCalendar { national, regional }
    }

    pub fn national(&self) -> &Arc<dyn HolidaySource> {
        &self.national
    }

    pub fn regional(&self) -> &Arc<dyn HolidaySource> {
        &self.regional
    }
}

impl HolidaySource for JointCalendar {
    fn holidays_for_year(&self, year: i32) -> Vec<HolidayInterval> {
        let mut holidays = self.national.holidays_for_year(year);
        holidays.extend(self.regional.holidays_for_year(year));
        holidays.sort_by(|a, b| a.start().cmp(&b.start()).then_with(|| a.name().cmp(b.name())));
        holidays.dedup_by(|a, b| a.start() == b.start() && a.name() == b.name());
        holidays
    }
}
