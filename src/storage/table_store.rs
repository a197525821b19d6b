//! CSV-table persistence: a day table and a transaction table joined by the
//! `date` column.
//!
//! Transactions carry no identifier in the persisted form; `(date, category)`
//! is the de-facto matching key throughout the system.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Utc;
use csv::{ReaderBuilder, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::utils::ensure_dir;
use crate::errors::{LedgerError, Result};
use crate::ledger::{DayRecord, Ledger, Transaction};

use super::StorageBackend;

const DAY_TABLE: &str = "days.csv";
const TRANSACTION_TABLE: &str = "transactions.csv";
const ARCHIVE_DIR: &str = "archive";
const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";

/// One row of the persisted day table.
#[derive(Debug, Serialize, Deserialize)]
struct DayRow {
    date: u32,
    budget: f64,
    remaining: f64,
}

/// One row of the persisted transaction table, and of the flat export.
#[derive(Debug, Serialize, Deserialize)]
struct TransactionRow {
    date: u32,
    amount: f64,
    category: String,
}

/// Stores a ledger as two correlated CSV tables under a base directory.
pub struct TableStore {
    root: PathBuf,
}

impl TableStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn day_table_path(&self) -> PathBuf {
        self.root.join(DAY_TABLE)
    }

    pub fn transaction_table_path(&self) -> PathBuf {
        self.root.join(TRANSACTION_TABLE)
    }

    fn archive_dir(&self) -> PathBuf {
        self.root.join(ARCHIVE_DIR)
    }
}

impl StorageBackend for TableStore {
    fn save(&self, ledger: &Ledger) -> Result<()> {
        let day_rows: Vec<DayRow> = ledger
            .days
            .iter()
            .map(|day| DayRow {
                date: day.date,
                budget: round2(day.budget),
                remaining: round2(day.remaining),
            })
            .collect();
        let txn_rows: Vec<TransactionRow> = ledger
            .days
            .iter()
            .flat_map(|day| {
                day.transactions.iter().map(move |txn| TransactionRow {
                    date: day.date,
                    amount: round2(txn.amount),
                    category: txn.category.clone(),
                })
            })
            .collect();
        write_table(&self.day_table_path(), &day_rows)?;
        write_table(&self.transaction_table_path(), &txn_rows)?;
        info!(
            "saved {} day rows and {} transaction rows",
            day_rows.len(),
            txn_rows.len()
        );
        Ok(())
    }

    fn load(&self) -> Result<Ledger> {
        let day_path = self.day_table_path();
        let day_rows: Vec<DayRow> = read_rows(&day_path)?;
        let days_in_month = day_rows.iter().map(|row| row.date).max().unwrap_or(0);
        if days_in_month == 0 {
            return Err(LedgerError::Storage(format!(
                "day table `{}` holds no usable rows",
                day_path.display()
            )));
        }
        // the max date observed fixes the month length; a date missing from
        // the table materializes as a zero-budget day to keep 1..=N contiguous
        let mut days: Vec<DayRecord> = (1..=days_in_month)
            .map(|date| DayRecord::new(date, 0.0))
            .collect();
        for row in day_rows {
            if row.date == 0 {
                warn!("skipping day row with date 0 in `{}`", day_path.display());
                continue;
            }
            if row.budget < 0.0 {
                warn!(
                    "skipping day row with negative budget for day {} in `{}`",
                    row.date,
                    day_path.display()
                );
                continue;
            }
            // duplicate dates: the last row wins
            let day = &mut days[(row.date - 1) as usize];
            day.budget = row.budget;
            day.remaining = row.remaining.clamp(0.0, row.budget);
        }
        let txn_path = self.transaction_table_path();
        let txn_rows: Vec<TransactionRow> = read_rows(&txn_path)?;
        for row in txn_rows {
            match days.iter_mut().find(|day| day.date == row.date) {
                Some(day) => day
                    .transactions
                    .push(Transaction::new(row.amount, row.category)),
                None => warn!(
                    "skipping transaction row for unknown day {} in `{}`",
                    row.date,
                    txn_path.display()
                ),
            }
        }
        let ledger = Ledger::from_days(days);
        info!(
            "loaded {} days and {} transactions",
            ledger.days_in_month(),
            ledger.days.iter().map(|day| day.transactions.len()).sum::<usize>()
        );
        Ok(ledger)
    }

    fn archive(&self) -> Result<Vec<PathBuf>> {
        let dir = self.archive_dir();
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(ARCHIVE_TIMESTAMP_FORMAT).to_string();
        let mut archived = Vec::new();
        for table in [DAY_TABLE, TRANSACTION_TABLE] {
            let live = self.root.join(table);
            if !live.exists() {
                continue;
            }
            let stem = table.trim_end_matches(".csv");
            let target = dir.join(format!("{}_{}.csv", stem, timestamp));
            fs::rename(&live, &target)?;
            archived.push(target);
        }
        if !archived.is_empty() {
            info!("archived {} table(s) to `{}`", archived.len(), dir.display());
        }
        Ok(archived)
    }

    fn export_csv(&self, ledger: &Ledger, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_dir(parent)?;
            }
        }
        let mut writer = WriterBuilder::new().from_path(path)?;
        for day in &ledger.days {
            // stored newest-first; the report reads in insertion order
            for txn in day.transactions.iter().rev() {
                writer.serialize(TransactionRow {
                    date: day.date,
                    amount: round2(txn.amount),
                    category: txn.category.clone(),
                })?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

fn write_table<R: Serialize>(path: &Path, rows: &[R]) -> Result<()> {
    let tmp = tmp_path(path);
    let mut writer = WriterBuilder::new().from_path(&tmp)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    drop(writer);
    fs::rename(&tmp, path)?;
    Ok(())
}

fn read_rows<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|err| {
            LedgerError::Storage(format!("cannot open `{}`: {}", path.display(), err))
        })?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<R>() {
        match record {
            Ok(row) => rows.push(row),
            Err(err) => warn!("skipping malformed row in `{}`: {}", path.display(), err),
        }
    }
    Ok(rows)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
