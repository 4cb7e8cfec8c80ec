pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod planner {
    pub mod allocationerror;
    pub mod vacationperiod;
    pub mod boundaryextender;
    pub mod overlapguard;
    pub mod candidatesearch;
    pub mod periodallocator;
    pub mod monthview;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod weekendmask;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidaysource;
        pub mod rulebasedcalendar;
        pub mod jointcalendar;
        pub mod holidaycalendarmanager;
        pub mod holidayset;
        pub mod workcalendar;
    }
}
