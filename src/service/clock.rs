use chrono::{Local, NaiveDateTime};

/// Source of "now" for quiz window checks. Quiz times are naive local datetimes.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Server wall clock in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
