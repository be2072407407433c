use std::fmt;

use super::{format::format_amount, Transaction, TransactionKind};

/// Income, expense, and balance totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryReport {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

impl SummaryReport {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            total_income: total_of(transactions, TransactionKind::Income),
            total_expenses: total_of(transactions, TransactionKind::Expense),
            balance: balance_of(transactions),
        }
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Total Income: ${}", format_amount(self.total_income)),
            format!("Total Expenses: ${}", format_amount(self.total_expenses)),
            format!("Balance: ${}", format_amount(self.balance)),
        ]
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Sum of `amount` over transactions of the given kind.
pub fn total_of(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind() == kind)
        .fold(0.0, |acc, txn| acc + txn.amount)
}

/// Income minus expenses. Other kinds contribute nothing.
pub fn balance_of(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .fold(0.0, |acc, txn| acc + txn.signed_amount())
}
