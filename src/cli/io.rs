use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use super::CliError;

/// Prompt for free-form text input.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?)
}

/// Prompt for a non-negative amount.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CliError> {
    Ok(Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &f64| {
            if *value >= 0.0 {
                Ok(())
            } else {
                Err("amount must not be negative")
            }
        })
        .interact_text()?)
}

/// Prompt for a strictly positive amount.
pub fn prompt_positive_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CliError> {
    Ok(Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &f64| {
            if *value > 0.0 {
                Ok(())
            } else {
                Err("amount must be positive")
            }
        })
        .interact_text()?)
}

/// Prompt for a day-of-month index.
pub fn prompt_date(theme: &ColorfulTheme, prompt: &str, days_in_month: u32) -> Result<u32, CliError> {
    Ok(Input::<u32>::with_theme(theme)
        .with_prompt(format!("{} (1-{})", prompt, days_in_month))
        .interact_text()?)
}

/// Prompt for a positive integer count.
pub fn prompt_count(theme: &ColorfulTheme, prompt: &str) -> Result<u32, CliError> {
    Ok(Input::<u32>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &u32| {
            if *value > 0 {
                Ok(())
            } else {
                Err("must be at least 1")
            }
        })
        .interact_text()?)
}

/// Prompt for a percentage, pre-filled with a default.
pub fn prompt_percent(theme: &ColorfulTheme, prompt: &str, default: f64) -> Result<f64, CliError> {
    Ok(Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .validate_with(|value: &f64| {
            if (0.0..=100.0).contains(value) {
                Ok(())
            } else {
                Err("percentage must be between 0 and 100")
            }
        })
        .interact_text()?)
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool, CliError> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a password without echoing it.
pub fn prompt_password(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Ok(Password::with_theme(theme).with_prompt(prompt).interact()?)
}

/// Present a list of choices and return the selected index.
pub fn select(theme: &ColorfulTheme, prompt: &str, items: &[&str]) -> Result<usize, CliError> {
    Ok(Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}
