use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::DefaultDatePolicy,
    errors::LedgerError,
    ledger::{format::format_amount, Ledger, SystemClock},
};

use super::output;

/// Scratch ledger used by the binary's self-test run.
pub const SCRATCH_FILE: &str = "test_transactions.json";

/// Removes the scratch ledger when dropped, whether the run succeeded or not.
struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "scratch ledger removed"),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "scratch ledger was never written")
            }
            Err(err) => tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to remove scratch ledger"
            ),
        }
    }
}

/// Runs the fixed self-test sequence against `path`, writing the report to `out`.
///
/// Any failure inside the sequence is reported on `out` rather than returned, and the
/// scratch file is removed afterwards in every case.
pub fn run<W: Write>(path: &Path, default_date: DefaultDatePolicy, out: &mut W) {
    let _scratch = ScratchFile::new(path);
    if let Err(err) = exercise(path, default_date, out) {
        tracing::error!(error = %err, "self-test aborted");
        // The output stream itself may be what failed.
        let _ = writeln!(out, "{}", output::error(format!("An error occurred: {err}")));
    }
}

fn exercise<W: Write>(
    path: &Path,
    default_date: DefaultDatePolicy,
    out: &mut W,
) -> Result<(), LedgerError> {
    let mut ledger = Ledger::with_clock(path, default_date, Box::new(SystemClock))?;

    writeln!(out, "{}", output::section("Test Case 1: Adding transactions"))?;
    ledger.add_transaction(1000.0, "Salary", "income", None)?;
    ledger.add_transaction(50.0, "Groceries", "expense", None)?;
    ledger.add_transaction(200.0, "Freelance", "income", None)?;
    ledger.add_transaction(30.0, "Dining Out", "expense", None)?;

    writeln!(out, "\n{}", output::section("Test Case 2: Viewing all transactions"))?;
    ledger.write_transactions(out, None)?;

    writeln!(
        out,
        "\n{}",
        output::section("Test Case 3: Viewing transactions for 'Groceries'")
    )?;
    ledger.write_transactions(out, Some("Groceries"))?;

    writeln!(
        out,
        "\n{}",
        output::section("Test Case 4: Calculating and displaying balance")
    )?;
    let balance = ledger.calculate_balance();
    writeln!(out, "Current Balance: ${}", format_amount(balance))?;

    writeln!(
        out,
        "\n{}",
        output::section("Test Case 5: Generating and printing a summary report")
    )?;
    ledger.write_summary_report(out)?;

    writeln!(out, "\n{}", output::section("Test Case 6: Saving data to file"))?;
    ledger.save()?;

    writeln!(out, "\n{}", output::section("Test Case 7: Loading data from file"))?;
    let reloaded = Ledger::open(path)?;
    reloaded.write_transactions(out, None)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::clock::{format_date, process_start_date};
    use tempfile::tempdir;

    #[test]
    fn run_reports_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SCRATCH_FILE);
        let mut out = Vec::new();
        run(&path, DefaultDatePolicy::default(), &mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Current Balance: $1120.0"));
        assert!(!text.contains("An error occurred"));
        assert!(!path.exists());
    }

    #[test]
    fn process_start_policy_dates_every_entry_alike() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SCRATCH_FILE);
        let mut out = Vec::new();
        run(&path, DefaultDatePolicy::ProcessStart, &mut out);
        let text = String::from_utf8(out).unwrap();
        let expected = format_date(process_start_date());
        assert!(text.contains(&format!("{expected} - Dining Out (expense): $30.0")));
        assert!(!path.exists());
    }

    #[test]
    fn run_reports_errors_and_still_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SCRATCH_FILE);
        fs::write(&path, "this is not json").unwrap();
        let mut out = Vec::new();
        run(&path, DefaultDatePolicy::default(), &mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("An error occurred: Serialization error"));
        assert!(!path.exists());
    }
}
