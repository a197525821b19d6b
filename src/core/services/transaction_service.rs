//! Mutation operations that keep day balances consistent.

use tracing::info;

use crate::errors::{LedgerError, Result};
use crate::ledger::{Ledger, Transaction};

/// Validated add/edit/delete helpers for day transactions.
pub struct TransactionService;

impl TransactionService {
    /// Records a spend against `date`, pushing any overspend onto later days.
    pub fn add(ledger: &mut Ledger, date: u32, amount: f64, category: &str) -> Result<()> {
        let day = ledger
            .day_mut(date)
            .ok_or(LedgerError::InvalidDate(date))?;
        let transaction = Transaction::new(amount, category);
        let amount = transaction.amount;
        day.record(transaction);
        let difference = day.remaining - amount;
        if difference >= 0.0 {
            day.remaining = difference;
        } else {
            day.remaining = 0.0;
            info!("day {} overspent by {:.2}", date, -difference);
            ledger.spread_deficit(date, -difference);
        }
        Ok(())
    }

    /// Rewrites the first transaction in `match_category` on `date`.
    ///
    /// The old amount is refunded, the new one charged, and the balance
    /// clamped back into the day's allocation. Edits never spread a deficit;
    /// only [`add`](Self::add) does.
    pub fn edit(
        ledger: &mut Ledger,
        date: u32,
        match_category: &str,
        new_amount: f64,
        new_category: &str,
    ) -> Result<()> {
        let day = ledger
            .day_mut(date)
            .ok_or(LedgerError::InvalidDate(date))?;
        let idx = day
            .find_by_category(match_category)
            .ok_or_else(|| LedgerError::TransactionNotFound {
                date,
                category: match_category.to_string(),
            })?;
        let old_amount = day.transactions[idx].amount;
        day.remaining += old_amount;
        day.transactions[idx] = Transaction::new(new_amount, new_category);
        day.remaining -= new_amount;
        day.clamp_remaining();
        Ok(())
    }

    /// Drops the first transaction in `match_category` on `date`, refunding
    /// its amount up to the day's allocation. Deficit already spread onto
    /// later days is not restored.
    pub fn remove(ledger: &mut Ledger, date: u32, match_category: &str) -> Result<Transaction> {
        let day = ledger
            .day_mut(date)
            .ok_or(LedgerError::InvalidDate(date))?;
        let idx = day
            .find_by_category(match_category)
            .ok_or_else(|| LedgerError::TransactionNotFound {
                date,
                category: match_category.to_string(),
            })?;
        let removed = day.transactions.remove(idx);
        day.remaining = (day.remaining + removed.amount).min(day.budget);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_day_ledger() -> Ledger {
        Ledger::new(100.0, 5).unwrap()
    }

    #[test]
    fn add_within_budget_reduces_remaining() {
        let mut ledger = five_day_ledger();
        TransactionService::add(&mut ledger, 2, 12.5, "Groceries").unwrap();
        assert_eq!(ledger.day(2).unwrap().remaining, 7.5);
        assert_eq!(ledger.day(3).unwrap().remaining, 20.0);
    }

    #[test]
    fn add_fails_for_unknown_date() {
        let mut ledger = five_day_ledger();
        let err = TransactionService::add(&mut ledger, 9, 5.0, "Coffee")
            .expect_err("day 9 does not exist");
        assert!(matches!(err, LedgerError::InvalidDate(9)));
    }

    #[test]
    fn overspend_zeroes_the_day_and_spreads_the_rest() {
        let mut ledger = five_day_ledger();
        TransactionService::add(&mut ledger, 2, 70.0, "Rent").unwrap();
        assert_eq!(ledger.day(2).unwrap().remaining, 0.0);
        let share = 50.0 / 3.0;
        for date in 3..=5 {
            let remaining = ledger.day(date).unwrap().remaining;
            assert!((remaining - (20.0 - share)).abs() < 1e-9);
        }
        assert_eq!(ledger.day(1).unwrap().remaining, 20.0);
    }

    #[test]
    fn edit_refunds_then_recharges_without_spreading() {
        let mut ledger = five_day_ledger();
        TransactionService::add(&mut ledger, 1, 5.0, "Coffee").unwrap();
        TransactionService::edit(&mut ledger, 1, "coffee", 90.0, "Rent").unwrap();
        let day = ledger.day(1).unwrap();
        assert_eq!(day.remaining, 0.0);
        assert_eq!(day.transactions[0].category, "Rent");
        assert_eq!(day.transactions[0].amount, 90.0);
        // later days untouched: edits never redistribute
        assert!(ledger.days_after(1).all(|d| d.remaining == 20.0));
    }

    #[test]
    fn edit_clamps_refund_to_the_allocation() {
        let mut ledger = five_day_ledger();
        TransactionService::add(&mut ledger, 1, 30.0, "Rent").unwrap();
        TransactionService::edit(&mut ledger, 1, "Rent", 2.0, "Rent").unwrap();
        // refund of 30 on a zeroed day would leave 28; the 20 allocation wins
        assert_eq!(ledger.day(1).unwrap().remaining, 20.0);
    }

    #[test]
    fn edit_misses_report_transaction_not_found() {
        let mut ledger = five_day_ledger();
        let err = TransactionService::edit(&mut ledger, 1, "Rent", 1.0, "Rent")
            .expect_err("nothing to edit");
        assert!(matches!(
            err,
            LedgerError::TransactionNotFound { date: 1, .. }
        ));
    }

    #[test]
    fn remove_refunds_clamped_and_keeps_redistribution() {
        let mut ledger = five_day_ledger();
        TransactionService::add(&mut ledger, 2, 70.0, "Rent").unwrap();
        let removed = TransactionService::remove(&mut ledger, 2, "rent").unwrap();
        assert_eq!(removed.amount, 70.0);
        // refund is capped at the day's allocation
        assert_eq!(ledger.day(2).unwrap().remaining, 20.0);
        // the deficit already pushed onto later days stays pushed
        let share = 50.0 / 3.0;
        assert!((ledger.day(3).unwrap().remaining - (20.0 - share)).abs() < 1e-9);
    }

    #[test]
    fn first_match_wins_when_categories_repeat() {
        let mut ledger = five_day_ledger();
        TransactionService::add(&mut ledger, 1, 3.0, "Food").unwrap();
        TransactionService::add(&mut ledger, 1, 4.0, "food").unwrap();
        // newest entry lists first, so it is the one matched
        let removed = TransactionService::remove(&mut ledger, 1, "FOOD").unwrap();
        assert_eq!(removed.amount, 4.0);
        assert_eq!(ledger.day(1).unwrap().transactions.len(), 1);
    }
}
