use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::{DefaultDatePolicy, TrackerConfig},
    errors::LedgerError,
    utils::persistence::{load_transactions, save_transactions},
};

use super::{
    clock::{format_date, process_start_date, Clock, SystemClock},
    format::transaction_line,
    summary::{balance_of, SummaryReport},
    Transaction,
};

/// File name used when no explicit ledger path is configured.
pub const DEFAULT_DATA_FILE: &str = "transactions.json";

/// In-memory transaction list mirrored to a JSON file.
///
/// Every mutation rewrites the whole file; queries only read memory.
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
    default_date: DefaultDatePolicy,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Opens the ledger stored at `path`, starting empty when the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        Self::with_clock(path, DefaultDatePolicy::default(), Box::new(SystemClock))
    }

    pub fn open_default() -> Result<Self, LedgerError> {
        Self::open(DEFAULT_DATA_FILE)
    }

    pub fn from_config(config: &TrackerConfig) -> Result<Self, LedgerError> {
        Self::with_clock(
            config.data_file.clone(),
            config.default_date,
            Box::new(SystemClock),
        )
    }

    pub fn with_clock(
        path: impl Into<PathBuf>,
        default_date: DefaultDatePolicy,
        clock: Box<dyn Clock>,
    ) -> Result<Self, LedgerError> {
        let path = path.into();
        let transactions = load_transactions(&path)?;
        tracing::debug!(
            path = %path.display(),
            count = transactions.len(),
            ?default_date,
            "ledger opened"
        );
        Ok(Self {
            path,
            transactions,
            default_date,
            clock,
        })
    }

    /// Appends a transaction and rewrites the ledger file.
    ///
    /// If the write fails the transaction stays in memory and the error is returned.
    pub fn add_transaction(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        transaction_type: impl Into<String>,
        date: Option<&str>,
    ) -> Result<(), LedgerError> {
        let date = match date {
            Some(date) => date.to_string(),
            None => self.default_date(),
        };
        let txn = Transaction::new(amount, category, transaction_type, date);
        tracing::debug!(
            amount = txn.amount,
            category = %txn.category,
            transaction_type = %txn.transaction_type,
            date = %txn.date,
            "adding transaction"
        );
        self.transactions.push(txn);
        self.save()
    }

    /// Rewrites the ledger file with the current in-memory transactions.
    pub fn save(&self) -> Result<(), LedgerError> {
        save_transactions(&self.transactions, &self.path)
    }

    /// Transactions whose category matches `category` exactly, in insertion order.
    /// `None` or an empty filter selects everything.
    pub fn transactions_in(&self, category: Option<&str>) -> Vec<&Transaction> {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => self
                .transactions
                .iter()
                .filter(|txn| txn.in_category(category))
                .collect(),
            None => self.transactions.iter().collect(),
        }
    }

    pub fn write_transactions<W: Write + ?Sized>(
        &self,
        out: &mut W,
        category: Option<&str>,
    ) -> Result<(), LedgerError> {
        for txn in self.transactions_in(category) {
            writeln!(out, "{}", transaction_line(txn))?;
        }
        Ok(())
    }

    /// Prints one line per matching transaction to stdout.
    pub fn view_transactions(&self, category: Option<&str>) -> Result<(), LedgerError> {
        let stdout = io::stdout();
        self.write_transactions(&mut stdout.lock(), category)
    }

    pub fn calculate_balance(&self) -> f64 {
        balance_of(&self.transactions)
    }

    pub fn summary(&self) -> SummaryReport {
        SummaryReport::from_transactions(&self.transactions)
    }

    pub fn write_summary_report<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), LedgerError> {
        write!(out, "{}", self.summary())?;
        Ok(())
    }

    pub fn generate_summary_report(&self) -> Result<(), LedgerError> {
        let stdout = io::stdout();
        self.write_summary_report(&mut stdout.lock())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn default_date(&self) -> String {
        let date = match self.default_date {
            DefaultDatePolicy::CallTime => self.clock.today(),
            DefaultDatePolicy::ProcessStart => process_start_date(),
        };
        format_date(date)
    }
}
