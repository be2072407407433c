#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use finance_tracker::{
    config::DefaultDatePolicy,
    ledger::{Clock, Ledger},
};
use tempfile::TempDir;

/// Clock pinned to a single day.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

/// Temporary directory plus the ledger path inside it. Keep the guard alive for the test.
pub fn ledger_path() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("transactions.json");
    (temp, path)
}

pub fn open_fixed(path: &Path) -> Ledger {
    Ledger::with_clock(
        path,
        DefaultDatePolicy::CallTime,
        Box::new(FixedClock(fixed_day())),
    )
    .expect("open ledger")
}

/// Adds the four-entry salary/groceries/freelance/dining scenario.
pub fn add_scenario(ledger: &mut Ledger) {
    ledger
        .add_transaction(1000.0, "Salary", "income", None)
        .expect("add salary");
    ledger
        .add_transaction(50.0, "Groceries", "expense", None)
        .expect("add groceries");
    ledger
        .add_transaction(200.0, "Freelance", "income", None)
        .expect("add freelance");
    ledger
        .add_transaction(30.0, "Dining Out", "expense", None)
        .expect("add dining");
}
