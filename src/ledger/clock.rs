use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;

/// Date format used for transaction dates supplied by the ledger.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static PROCESS_START_DATE: Lazy<NaiveDate> = Lazy::new(|| SystemClock.today());

/// Clock abstracts access to the current date so ledgers stay deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local date.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Date captured once per process, on the first call (normally from `crate::init`).
pub fn process_start_date() -> NaiveDate {
    *PROCESS_START_DATE
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
