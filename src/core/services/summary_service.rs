//! Category aggregation over a ledger snapshot.

use std::collections::HashMap;

use crate::ledger::Ledger;

/// Spending accumulated under one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub percent_of_budget: f64,
}

/// Per-category totals in first-seen order.
///
/// Keys are case-sensitive; the casing of the first transaction seen for a
/// label is the one displayed.
#[derive(Debug, Clone, Default)]
pub struct CategorySummary {
    pub entries: Vec<CategoryTotal>,
}

impl CategorySummary {
    pub fn total_for(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Month-level roll-up of budget versus spending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTotals {
    pub total_budget: f64,
    pub total_spent: f64,
    pub savings: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Accumulates spending by exact category label across every day.
    pub fn summarize(ledger: &Ledger) -> CategorySummary {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<CategoryTotal> = Vec::new();
        for day in &ledger.days {
            for txn in &day.transactions {
                match index.get(&txn.category) {
                    Some(&at) => entries[at].total += txn.amount,
                    None => {
                        index.insert(txn.category.clone(), entries.len());
                        entries.push(CategoryTotal {
                            category: txn.category.clone(),
                            total: txn.amount,
                            percent_of_budget: 0.0,
                        });
                    }
                }
            }
        }
        for entry in &mut entries {
            entry.percent_of_budget = Self::percent_of_monthly_budget(ledger, entry.total);
        }
        CategorySummary { entries }
    }

    /// Share of the monthly budget a spend represents, zero when unbudgeted.
    pub fn percent_of_monthly_budget(ledger: &Ledger, total: f64) -> f64 {
        if ledger.monthly_budget <= 0.0 {
            0.0
        } else {
            total / ledger.monthly_budget * 100.0
        }
    }

    pub fn month_totals(ledger: &Ledger) -> MonthTotals {
        let total_budget = ledger.total_budget();
        let total_spent = ledger.total_spent();
        MonthTotals {
            total_budget,
            total_spent,
            savings: total_budget - total_spent,
        }
    }
}
