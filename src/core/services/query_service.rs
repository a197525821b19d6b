//! Read-only lookups over a ledger.

use crate::errors::{LedgerError, Result};
use crate::ledger::{DayRecord, Ledger, Transaction};

/// One category match: the day it landed on and the amount spent.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryHit {
    pub date: u32,
    pub amount: f64,
}

/// Outcome of comparing the month's remaining funds to an alert threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertStatus {
    pub below_threshold: bool,
    pub total_remaining: f64,
    pub threshold_value: f64,
}

pub struct QueryService;

impl QueryService {
    /// Day records with `start <= date <= end`, in date order.
    pub fn filter_by_date_range(ledger: &Ledger, start: u32, end: u32) -> Result<Vec<&DayRecord>> {
        if start > end {
            return Err(LedgerError::InvalidRange { start, end });
        }
        Ok(ledger
            .days
            .iter()
            .filter(|day| day.date >= start && day.date <= end)
            .collect())
    }

    /// Every spend recorded under `category`, matched case-insensitively,
    /// in ledger date order.
    pub fn search_by_category(ledger: &Ledger, category: &str) -> Vec<CategoryHit> {
        let mut hits = Vec::new();
        for day in &ledger.days {
            for txn in &day.transactions {
                if txn.matches_category(category) {
                    hits.push(CategoryHit {
                        date: day.date,
                        amount: txn.amount,
                    });
                }
            }
        }
        hits
    }

    /// Compares total remaining funds against a percentage of the monthly
    /// budget. Pure computation; nothing is mutated.
    pub fn check_alert(ledger: &Ledger, threshold_percent: f64) -> AlertStatus {
        let total_remaining = ledger.total_remaining();
        let threshold_value = ledger.monthly_budget * threshold_percent / 100.0;
        AlertStatus {
            below_threshold: total_remaining < threshold_value,
            total_remaining,
            threshold_value,
        }
    }

    pub fn remaining_for_day(ledger: &Ledger, date: u32) -> Result<f64> {
        ledger
            .day(date)
            .map(|day| day.remaining)
            .ok_or(LedgerError::InvalidDate(date))
    }

    /// The day's transactions, newest first.
    pub fn transactions_for_day(ledger: &Ledger, date: u32) -> Result<&[Transaction]> {
        ledger
            .day(date)
            .map(|day| day.transactions.as_slice())
            .ok_or(LedgerError::InvalidDate(date))
    }
}
