use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

use super::day::DayRecord;

/// A full month of day records, keyed by date.
///
/// Dates are contiguous `1..=days_in_month` with no gaps or duplicates. The
/// ledger exclusively owns its days, and each day its transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub monthly_budget: f64,
    pub days: Vec<DayRecord>,
}

impl Ledger {
    /// Splits `monthly_budget` evenly across `days_in_month` day records.
    pub fn new(monthly_budget: f64, days_in_month: u32) -> Result<Self> {
        if days_in_month == 0 {
            return Err(LedgerError::InvalidConfig(
                "days in month must be at least 1".into(),
            ));
        }
        if monthly_budget <= 0.0 {
            return Err(LedgerError::InvalidConfig(
                "monthly budget must be positive".into(),
            ));
        }
        let per_day = monthly_budget / days_in_month as f64;
        let days = (1..=days_in_month)
            .map(|date| DayRecord::new(date, per_day))
            .collect();
        Ok(Self {
            monthly_budget,
            days,
        })
    }

    /// Rebuilds a ledger from already-shaped day records (persistence path);
    /// the monthly budget is recovered as the sum of day allocations.
    pub(crate) fn from_days(days: Vec<DayRecord>) -> Self {
        let monthly_budget = days.iter().map(|day| day.budget).sum();
        Self {
            monthly_budget,
            days,
        }
    }

    pub fn days_in_month(&self) -> u32 {
        self.days.len() as u32
    }

    /// Linear lookup by date; a miss is a normal, reportable condition.
    pub fn day(&self, date: u32) -> Option<&DayRecord> {
        self.days.iter().find(|day| day.date == date)
    }

    pub fn day_mut(&mut self, date: u32) -> Option<&mut DayRecord> {
        self.days.iter_mut().find(|day| day.date == date)
    }

    /// Days with a date strictly greater than `date`, in date order.
    pub fn days_after(&self, date: u32) -> impl Iterator<Item = &DayRecord> {
        self.days.iter().filter(move |day| day.date > date)
    }

    pub fn total_remaining(&self) -> f64 {
        self.days.iter().map(|day| day.remaining).sum()
    }

    pub fn total_budget(&self) -> f64 {
        self.days.iter().map(|day| day.budget).sum()
    }

    pub fn total_spent(&self) -> f64 {
        self.days.iter().map(|day| day.spent()).sum()
    }

    /// Spreads an overspend across the days after `origin_date`.
    ///
    /// Each later day gives up an equal share of the deficit, floored at
    /// zero; whatever a day cannot absorb is dropped rather than passed
    /// along, and with no later days the deficit is absorbed silently.
    /// Original allocations (`budget`) stay untouched.
    pub fn spread_deficit(&mut self, origin_date: u32, deficit: f64) {
        if deficit <= 0.0 {
            return;
        }
        let future_days = self.days_after(origin_date).count();
        if future_days == 0 {
            return;
        }
        let share = deficit / future_days as f64;
        for day in self.days.iter_mut().filter(|day| day.date > origin_date) {
            day.remaining = (day.remaining - share).max(0.0);
        }
        tracing::debug!(
            "spread deficit of {:.2} over {} later days",
            deficit,
            future_days
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_ledger() -> Ledger {
        Ledger::new(100.0, 5).unwrap()
    }

    #[test]
    fn lookup_misses_outside_the_month() {
        let ledger = uniform_ledger();
        assert!(ledger.day(0).is_none());
        assert!(ledger.day(6).is_none());
        assert_eq!(ledger.day(3).unwrap().date, 3);
    }

    #[test]
    fn days_after_excludes_the_origin() {
        let ledger = uniform_ledger();
        let dates: Vec<u32> = ledger.days_after(3).map(|day| day.date).collect();
        assert_eq!(dates, vec![4, 5]);
    }

    #[test]
    fn spread_floors_each_day_at_zero() {
        let mut ledger = uniform_ledger();
        ledger.day_mut(4).unwrap().remaining = 2.0;
        ledger.spread_deficit(3, 20.0);
        assert_eq!(ledger.day(4).unwrap().remaining, 0.0);
        assert_eq!(ledger.day(5).unwrap().remaining, 10.0);
        // the share day 4 could not absorb is not pushed onto day 5
        assert_eq!(ledger.day(3).unwrap().remaining, 20.0);
    }

    #[test]
    fn spread_with_no_later_days_changes_nothing() {
        let mut ledger = uniform_ledger();
        ledger.spread_deficit(5, 50.0);
        assert_eq!(ledger.total_remaining(), 100.0);
    }

    #[test]
    fn spread_never_touches_budgets() {
        let mut ledger = uniform_ledger();
        ledger.spread_deficit(1, 40.0);
        assert!(ledger.days.iter().all(|day| day.budget == 20.0));
    }
}
