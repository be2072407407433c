mod common;

use assert_fs::prelude::*;
use common::{add_scenario, open_fixed};
use finance_tracker::{errors::LedgerError, ledger::Ledger};
use predicates::prelude::*;

#[test]
fn file_is_pretty_printed_with_two_space_indent() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("transactions.json");
    let mut ledger = open_fixed(file.path());
    ledger
        .add_transaction(1000.0, "Salary", "income", None)
        .unwrap();
    ledger
        .add_transaction(12.5, "Lunch", "expense", Some("2024-03-16"))
        .unwrap();

    file.assert(
        r#"[
  {
    "amount": 1000.0,
    "category": "Salary",
    "transaction_type": "income",
    "date": "2024-03-15"
  },
  {
    "amount": 12.5,
    "category": "Lunch",
    "transaction_type": "expense",
    "date": "2024-03-16"
  }
]"#,
    );
    temp.close().unwrap();
}

#[test]
fn every_add_rewrites_the_whole_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("transactions.json");
    let mut ledger = open_fixed(file.path());
    add_scenario(&mut ledger);

    file.assert(predicate::path::exists());
    file.assert(predicate::str::contains("\"Dining Out\""));
    let on_disk: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
    assert_eq!(on_disk.len(), 4);
    for entry in &on_disk {
        let keys: Vec<_> = entry.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
    }
}

#[test]
fn loads_files_written_by_other_tools() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("transactions.json");
    file.write_str(
        r#"[{"amount": 20, "category": "Gift", "transaction_type": "income", "date": "2023-12-25", "memo": "aunt"},
            {"amount": 4.5, "category": "Snacks", "transaction_type": "expense", "date": "2023-12-26"}]"#,
    )
    .unwrap();

    let ledger = Ledger::open(file.path()).unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.calculate_balance(), 15.5);
}

#[test]
fn explicit_save_matches_add_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("transactions.json");
    let mut ledger = open_fixed(file.path());
    add_scenario(&mut ledger);
    let after_add = std::fs::read_to_string(file.path()).unwrap();

    ledger.save().unwrap();
    file.assert(after_add);
}

#[test]
fn infinite_amount_is_rejected_and_file_stays_loadable() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("transactions.json");
    let mut ledger = open_fixed(file.path());
    add_scenario(&mut ledger);

    let err = ledger
        .add_transaction(f64::INFINITY, "Lottery", "income", Some("2024-01-01"))
        .expect_err("infinite amounts cannot be written as JSON");
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
    assert_eq!(ledger.len(), 5, "in-memory append is kept");
    file.assert(predicate::str::contains("null").not());

    let reopened = Ledger::open(file.path()).expect("file written before the failure still loads");
    assert_eq!(reopened.len(), 4);
    assert_eq!(reopened.calculate_balance(), 1120.0);
}
