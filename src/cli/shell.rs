//! Interactive menu loop and the password gate for privileged operations.

use dialoguer::theme::ColorfulTheme;

use crate::config::{Config, ConfigManager};
use crate::core::utils::tables_dir;
use crate::ledger::Ledger;
use crate::storage::TableStore;

use super::{commands, io as cli_io, output, CliError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Everything a menu command needs: the live ledger, settings, and storage.
pub struct ShellContext {
    pub ledger: Ledger,
    pub config: Config,
    pub store: TableStore,
    pub theme: ColorfulTheme,
}

const MENU: &[&str] = &[
    "Add a transaction",
    "Edit a transaction",
    "Delete a transaction",
    "View remaining budget for a day",
    "View transactions for a day",
    "View monthly summary",
    "View category summary",
    "Query days by date range",
    "Search transactions by category",
    "Check budget alert",
    "Save ledger",
    "Load ledger",
    "Archive and reset",
    "Export transaction report",
    "Exit",
];

/// Runs the interactive shell until the user exits.
pub fn run_cli() -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    let config = ConfigManager::new()?.load()?;
    let store = TableStore::new(tables_dir())?;

    output::section("Day Ledger");
    let ledger = create_ledger(&theme)?;
    let mut context = ShellContext {
        ledger,
        config,
        store,
        theme,
    };

    loop {
        let choice = cli_io::select(&context.theme, "Choose an action", MENU)?;
        let outcome = match choice {
            0 => commands::add_transaction(&mut context),
            1 => commands::edit_transaction(&mut context),
            2 => commands::delete_transaction(&mut context),
            3 => commands::show_remaining(&mut context),
            4 => commands::show_day_transactions(&mut context),
            5 => commands::show_month_summary(&mut context),
            6 => commands::show_category_summary(&mut context),
            7 => commands::query_range(&mut context),
            8 => commands::query_category(&mut context),
            9 => commands::check_alert(&mut context),
            10 => commands::save_tables(&mut context),
            11 => commands::load_tables(&mut context),
            12 => commands::archive_and_reset(&mut context),
            13 => commands::export_report(&mut context),
            _ => commands::exit_shell(&mut context),
        };
        match outcome {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            // ledger failures are reportable, never fatal to the shell
            Err(CliError::Ledger(err)) => output::error(err),
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Prompts for the month parameters until a valid ledger is built.
pub(crate) fn create_ledger(theme: &ColorfulTheme) -> Result<Ledger, CliError> {
    loop {
        let monthly_budget = cli_io::prompt_positive_amount(theme, "Monthly budget")?;
        let days_in_month = cli_io::prompt_count(theme, "Days in the month")?;
        match Ledger::new(monthly_budget, days_in_month) {
            Ok(ledger) => return Ok(ledger),
            Err(err) => output::error(err),
        }
    }
}

/// Compares a prompted password against the configured one. Operations stay
/// ungated while no password is configured.
pub(crate) fn authorize(context: &ShellContext) -> Result<bool, CliError> {
    let Some(expected) = context.config.password.as_deref() else {
        return Ok(true);
    };
    let entered = cli_io::prompt_password(&context.theme, "Password")?;
    if entered == expected {
        Ok(true)
    } else {
        output::error("Incorrect password.");
        Ok(false)
    }
}
