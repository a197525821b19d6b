use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// One calendar day: its fixed allocation, the balance left on it, and the
/// transactions booked against it (newest first).
///
/// `budget` is set at construction and never altered by spending; only
/// `remaining` moves, and it is kept inside `[0, budget]` after every
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: u32,
    pub budget: f64,
    pub remaining: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl DayRecord {
    pub fn new(date: u32, budget: f64) -> Self {
        Self {
            date,
            budget,
            remaining: budget,
            transactions: Vec::new(),
        }
    }

    /// Stores a transaction at the front so the newest entry lists first.
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    /// Total amount spent on this day.
    pub fn spent(&self) -> f64 {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }

    /// Index of the first transaction whose category matches, ignoring case.
    pub fn find_by_category(&self, category: &str) -> Option<usize> {
        self.transactions
            .iter()
            .position(|txn| txn.matches_category(category))
    }

    /// Pulls `remaining` back into `[0, budget]`.
    pub fn clamp_remaining(&mut self) {
        self.remaining = self.remaining.clamp(0.0, self.budget);
    }
}
