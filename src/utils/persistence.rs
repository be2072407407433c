use std::{
    fs::{self, File},
    io::{BufWriter, ErrorKind, Write},
    path::Path,
};

use crate::{errors::LedgerError, ledger::Transaction};

/// Reads the full transaction array stored at `path`.
///
/// A missing file is an empty ledger; every other failure is returned to the caller.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, LedgerError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no ledger file yet, starting empty");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };
    let transactions: Vec<Transaction> = serde_json::from_str(&data)?;
    tracing::debug!(path = %path.display(), count = transactions.len(), "loaded ledger");
    Ok(transactions)
}

/// Overwrites `path` with the pretty-printed transaction array.
///
/// The file is truncated and rewritten in place, so a failure mid-write can leave it
/// partially written. The handle is closed on every return path.
///
/// JSON has no encoding for infinities or NaN, so such amounts are rejected before the
/// file is touched and the previous contents stay loadable.
pub fn save_transactions(transactions: &[Transaction], path: &Path) -> Result<(), LedgerError> {
    if let Some((index, txn)) = transactions
        .iter()
        .enumerate()
        .find(|(_, txn)| !txn.amount.is_finite())
    {
        return Err(LedgerError::InvalidAmount(format!(
            "transaction {} ({}) has non-finite amount {}",
            index, txn.category, txn.amount
        )));
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, transactions)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), count = transactions.len(), "saved ledger");
    Ok(())
}
