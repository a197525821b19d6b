use std::fs;

use tempfile::TempDir;

use dayledger::core::services::TransactionService;
use dayledger::errors::LedgerError;
use dayledger::ledger::Ledger;
use dayledger::storage::{StorageBackend, TableStore};

fn store_with_temp_dir() -> (TableStore, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let store = TableStore::new(temp.path()).expect("table store");
    (store, temp)
}

fn assert_cents(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {expected} within a cent, got {actual}"
    );
}

#[test]
fn round_trip_reproduces_the_ledger() {
    let (store, _guard) = store_with_temp_dir();
    let mut ledger = Ledger::new(100.0, 5).unwrap();
    TransactionService::add(&mut ledger, 1, 4.5, "Coffee").unwrap();
    TransactionService::add(&mut ledger, 2, 70.0, "Rent").unwrap();
    TransactionService::add(&mut ledger, 2, 3.0, "Snacks").unwrap();

    store.save(&ledger).expect("save ledger");
    let loaded = store.load().expect("load ledger");

    assert_eq!(loaded.days_in_month(), 5);
    assert_cents(loaded.monthly_budget, 100.0);
    for (before, after) in ledger.days.iter().zip(&loaded.days) {
        assert_eq!(before.date, after.date);
        assert_cents(after.budget, before.budget);
        assert_cents(after.remaining, before.remaining);
        assert_eq!(before.transactions.len(), after.transactions.len());
    }
    let day2 = loaded.day(2).unwrap();
    let categories: Vec<&str> = day2
        .transactions
        .iter()
        .map(|txn| txn.category.as_str())
        .collect();
    assert!(categories.contains(&"Rent"));
    assert!(categories.contains(&"Snacks"));
}

#[test]
fn transaction_rows_for_unknown_days_are_skipped() {
    let (store, _guard) = store_with_temp_dir();
    fs::write(
        store.day_table_path(),
        "date,budget,remaining\n1,20.00,20.00\n2,20.00,15.00\n",
    )
    .unwrap();
    fs::write(
        store.transaction_table_path(),
        "date,amount,category\n2,5.00,Food\n9,3.00,Ghost\n",
    )
    .unwrap();

    let loaded = store.load().expect("load tolerates the stray row");
    assert_eq!(loaded.days_in_month(), 2);
    assert_eq!(loaded.day(2).unwrap().transactions.len(), 1);
    assert_eq!(
        loaded
            .days
            .iter()
            .map(|day| day.transactions.len())
            .sum::<usize>(),
        1
    );
}

#[test]
fn malformed_rows_are_skipped_without_aborting() {
    let (store, _guard) = store_with_temp_dir();
    fs::write(
        store.day_table_path(),
        "date,budget,remaining\n1,20.00,20.00\nnot,a,number\n3,20.00,10.00\n",
    )
    .unwrap();
    fs::write(
        store.transaction_table_path(),
        "date,amount,category\n1,oops,Food\n3,2.50,Tea\n",
    )
    .unwrap();

    let loaded = store.load().expect("load tolerates malformed rows");
    assert_eq!(loaded.days_in_month(), 3);
    assert_eq!(loaded.day(1).unwrap().transactions.len(), 0);
    assert_eq!(loaded.day(3).unwrap().transactions.len(), 1);
}

#[test]
fn max_date_observed_fixes_the_month_length() {
    let (store, _guard) = store_with_temp_dir();
    fs::write(
        store.day_table_path(),
        "date,budget,remaining\n3,20.00,20.00\n1,20.00,20.00\n",
    )
    .unwrap();
    fs::write(store.transaction_table_path(), "date,amount,category\n").unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.days_in_month(), 3);
    // the date absent from the table materializes as a zero-budget day
    let day2 = loaded.day(2).unwrap();
    assert_eq!(day2.budget, 0.0);
    assert_eq!(day2.remaining, 0.0);
}

#[test]
fn duplicate_day_rows_last_wins() {
    let (store, _guard) = store_with_temp_dir();
    fs::write(
        store.day_table_path(),
        "date,budget,remaining\n1,20.00,20.00\n1,25.00,12.00\n",
    )
    .unwrap();
    fs::write(store.transaction_table_path(), "date,amount,category\n").unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.day(1).unwrap().budget, 25.0);
    assert_eq!(loaded.day(1).unwrap().remaining, 12.0);
}

#[test]
fn loading_without_tables_surfaces_a_storage_error() {
    let (store, _guard) = store_with_temp_dir();
    let err = store.load().expect_err("nothing was saved");
    assert!(matches!(err, LedgerError::Storage(_)));
}

#[test]
fn archive_moves_the_live_tables_aside() {
    let (store, guard) = store_with_temp_dir();
    let ledger = Ledger::new(100.0, 5).unwrap();
    store.save(&ledger).unwrap();

    let archived = store.archive().expect("archive tables");
    assert_eq!(archived.len(), 2);
    assert!(!store.day_table_path().exists());
    assert!(!store.transaction_table_path().exists());
    for path in &archived {
        assert!(path.exists());
        assert!(path.starts_with(guard.path().join("archive")));
    }
}

#[test]
fn archive_with_nothing_saved_is_a_no_op() {
    let (store, _guard) = store_with_temp_dir();
    let archived = store.archive().expect("archive succeeds");
    assert!(archived.is_empty());
}

#[test]
fn export_writes_the_flat_report_in_insertion_order() {
    let (store, guard) = store_with_temp_dir();
    let mut ledger = Ledger::new(100.0, 5).unwrap();
    TransactionService::add(&mut ledger, 1, 3.0, "Coffee").unwrap();
    TransactionService::add(&mut ledger, 1, 9.0, "Lunch").unwrap();
    TransactionService::add(&mut ledger, 4, 2.0, "Bus").unwrap();

    let report = guard.path().join("report.csv");
    store.export_csv(&ledger, &report).expect("export report");

    let contents = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "date,amount,category");
    // day order first, then the order transactions were added within a day
    assert_eq!(lines[1], "1,3.0,Coffee");
    assert_eq!(lines[2], "1,9.0,Lunch");
    assert_eq!(lines[3], "4,2.0,Bus");
}
