use serde::{Deserialize, Serialize};

pub const INCOME: &str = "income";
pub const EXPENSE: &str = "expense";

/// A single recorded money movement.
///
/// Fields are stored exactly as supplied; nothing is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub category: String,
    pub transaction_type: String,
    pub date: String,
}

impl Transaction {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        transaction_type: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            transaction_type: transaction_type.into(),
            date: date.into(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        TransactionKind::classify(&self.transaction_type)
    }

    /// Contribution of this transaction to the running balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind() {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
            TransactionKind::Other => 0.0,
        }
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

/// Classification of the free-form `transaction_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
    /// Any other label. Excluded from every total.
    Other,
}

impl TransactionKind {
    /// Exact, case-sensitive match against `"income"` and `"expense"`.
    pub fn classify(label: &str) -> Self {
        match label {
            INCOME => TransactionKind::Income,
            EXPENSE => TransactionKind::Expense,
            _ => TransactionKind::Other,
        }
    }
}
