//! Menu command handlers mapping shell choices onto core operations.

use std::path::PathBuf;

use crate::core::services::{QueryService, SummaryService, TransactionService};
use crate::storage::StorageBackend;

use super::shell::{authorize, create_ledger, LoopControl, ShellContext};
use super::{chart, io as cli_io, output, CliError};

type CommandResult = Result<LoopControl, CliError>;

pub(crate) fn add_transaction(context: &mut ShellContext) -> CommandResult {
    let date = cli_io::prompt_date(
        &context.theme,
        "Date",
        context.ledger.days_in_month(),
    )?;
    let amount = cli_io::prompt_amount(&context.theme, "Amount")?;
    let category = cli_io::prompt_text(&context.theme, "Category")?;
    TransactionService::add(&mut context.ledger, date, amount, &category)?;
    let remaining = QueryService::remaining_for_day(&context.ledger, date)?;
    output::success(format!(
        "Recorded {:.2} on day {} ({:.2} left)",
        amount, date, remaining
    ));
    Ok(LoopControl::Continue)
}

pub(crate) fn edit_transaction(context: &mut ShellContext) -> CommandResult {
    let date = cli_io::prompt_date(
        &context.theme,
        "Date",
        context.ledger.days_in_month(),
    )?;
    let match_category = cli_io::prompt_text(&context.theme, "Category to edit")?;
    let new_amount = cli_io::prompt_amount(&context.theme, "New amount")?;
    let new_category = cli_io::prompt_text(&context.theme, "New category")?;
    TransactionService::edit(
        &mut context.ledger,
        date,
        &match_category,
        new_amount,
        &new_category,
    )?;
    output::success(format!("Updated first `{}` entry on day {}", match_category, date));
    Ok(LoopControl::Continue)
}

pub(crate) fn delete_transaction(context: &mut ShellContext) -> CommandResult {
    let date = cli_io::prompt_date(
        &context.theme,
        "Date",
        context.ledger.days_in_month(),
    )?;
    let category = cli_io::prompt_text(&context.theme, "Category to delete")?;
    let removed = TransactionService::remove(&mut context.ledger, date, &category)?;
    output::success(format!(
        "Removed {:.2} ({}) from day {}",
        removed.amount, removed.category, date
    ));
    Ok(LoopControl::Continue)
}

pub(crate) fn show_remaining(context: &mut ShellContext) -> CommandResult {
    let date = cli_io::prompt_date(
        &context.theme,
        "Date",
        context.ledger.days_in_month(),
    )?;
    let remaining = QueryService::remaining_for_day(&context.ledger, date)?;
    output::info(format!("Remaining budget for day {}: {:.2}", date, remaining));
    Ok(LoopControl::Continue)
}

pub(crate) fn show_day_transactions(context: &mut ShellContext) -> CommandResult {
    let date = cli_io::prompt_date(
        &context.theme,
        "Date",
        context.ledger.days_in_month(),
    )?;
    let transactions = QueryService::transactions_for_day(&context.ledger, date)?;
    output::section(format!("Transactions for day {}", date));
    if transactions.is_empty() {
        output::info("No transactions recorded.");
    }
    for txn in transactions {
        output::info(format!("  {:.2} spent on {}", txn.amount, txn.category));
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn show_month_summary(context: &mut ShellContext) -> CommandResult {
    let totals = SummaryService::month_totals(&context.ledger);
    output::section("Monthly summary");
    output::info(format!("Total budget: {:.2}", totals.total_budget));
    output::info(format!("Total spent:  {:.2}", totals.total_spent));
    output::info(format!("Savings:      {:.2}", totals.savings));
    Ok(LoopControl::Continue)
}

pub(crate) fn show_category_summary(context: &mut ShellContext) -> CommandResult {
    let summary = SummaryService::summarize(&context.ledger);
    output::section("Spending by category");
    if summary.is_empty() {
        output::info("No transactions recorded.");
        return Ok(LoopControl::Continue);
    }
    for entry in &summary.entries {
        output::info(format!(
            "{:<20} {:>10.2}  {:>5.1}%  {}",
            entry.category,
            entry.total,
            entry.percent_of_budget,
            chart::percent_bar(entry.percent_of_budget, chart::BAR_WIDTH)
        ));
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn query_range(context: &mut ShellContext) -> CommandResult {
    let start = cli_io::prompt_date(
        &context.theme,
        "Start date",
        context.ledger.days_in_month(),
    )?;
    let end = cli_io::prompt_date(
        &context.theme,
        "End date",
        context.ledger.days_in_month(),
    )?;
    let days = QueryService::filter_by_date_range(&context.ledger, start, end)?;
    output::section(format!("Days {} to {}", start, end));
    for day in days {
        output::info(format!(
            "Day {:>2}: budget {:.2}, remaining {:.2}",
            day.date, day.budget, day.remaining
        ));
        for txn in &day.transactions {
            output::info(format!("    {:.2} spent on {}", txn.amount, txn.category));
        }
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn query_category(context: &mut ShellContext) -> CommandResult {
    let category = cli_io::prompt_text(&context.theme, "Category")?;
    let hits = QueryService::search_by_category(&context.ledger, &category);
    if hits.is_empty() {
        output::info(format!("No transactions found for `{}`.", category));
        return Ok(LoopControl::Continue);
    }
    output::section(format!("Transactions in `{}`", category));
    for hit in hits {
        output::info(format!("Day {:>2}: {:.2}", hit.date, hit.amount));
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn check_alert(context: &mut ShellContext) -> CommandResult {
    let threshold = cli_io::prompt_percent(
        &context.theme,
        "Alert threshold (% of monthly budget)",
        context.config.alert_threshold_percent,
    )?;
    let status = QueryService::check_alert(&context.ledger, threshold);
    if status.below_threshold {
        output::warning(format!(
            "Remaining {:.2} is below the {:.2} threshold!",
            status.total_remaining, status.threshold_value
        ));
    } else {
        output::success(format!(
            "Remaining {:.2} is above the {:.2} threshold.",
            status.total_remaining, status.threshold_value
        ));
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn save_tables(context: &mut ShellContext) -> CommandResult {
    if !authorize(context)? {
        return Ok(LoopControl::Continue);
    }
    context.store.save(&context.ledger)?;
    output::success("Ledger saved.");
    Ok(LoopControl::Continue)
}

pub(crate) fn load_tables(context: &mut ShellContext) -> CommandResult {
    if !authorize(context)? {
        return Ok(LoopControl::Continue);
    }
    context.ledger = context.store.load()?;
    output::success(format!(
        "Loaded ledger with {} days ({:.2} remaining).",
        context.ledger.days_in_month(),
        context.ledger.total_remaining()
    ));
    Ok(LoopControl::Continue)
}

pub(crate) fn archive_and_reset(context: &mut ShellContext) -> CommandResult {
    if !authorize(context)? {
        return Ok(LoopControl::Continue);
    }
    if !cli_io::confirm_action(
        &context.theme,
        "Archive the saved tables and start a fresh month?",
        false,
    )? {
        return Ok(LoopControl::Continue);
    }
    let archived = context.store.archive()?;
    if archived.is_empty() {
        output::info("No saved tables to archive.");
    } else {
        for path in &archived {
            output::info(format!("Archived {}", path.display()));
        }
    }
    context.ledger = create_ledger(&context.theme)?;
    output::success("Fresh ledger created.");
    Ok(LoopControl::Continue)
}

pub(crate) fn export_report(context: &mut ShellContext) -> CommandResult {
    let raw = cli_io::prompt_text(&context.theme, "Report file path")?;
    let path = PathBuf::from(raw);
    context.store.export_csv(&context.ledger, &path)?;
    output::success(format!("Report written to {}", path.display()));
    Ok(LoopControl::Continue)
}

pub(crate) fn exit_shell(context: &mut ShellContext) -> CommandResult {
    // implicit save on normal exit; failures are reported, not fatal
    if let Err(err) = context.store.save(&context.ledger) {
        output::warning(format!("Could not save before exit: {}", err));
    }
    output::info("Goodbye.");
    Ok(LoopControl::Exit)
}
