use crate::error::CliError;
use chrono::NaiveDate;
use risk_register::domain::Rating;
use std::fmt::Display;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn confirm(prompt: &str, default: bool) -> Result<bool, CliError> {
    cliclack::confirm(prompt)
        .initial_value(default)
        .interact()
        .map_err(CliError::from_prompt)
}

/// Free-text field, pre-filled with its current value. May be left empty.
pub fn text(prompt: &str, current: &str, placeholder: &str) -> Result<String, CliError> {
    let mut input = cliclack::input(prompt).placeholder(placeholder).required(false);
    if !current.is_empty() {
        input = input.default_input(current);
    }
    input.interact::<String>().map_err(CliError::from_prompt)
}

/// Calendar date as `YYYY-MM-DD`. With `optional`, an empty answer is kept.
pub fn date(prompt: &str, current: &str, optional: bool) -> Result<String, CliError> {
    let mut input = cliclack::input(format!("{prompt} (YYYY-MM-DD)"))
        .placeholder("2026-03-31")
        .required(!optional)
        .validate(move |value: &String| validate_date(value, optional));
    if !current.is_empty() {
        input = input.default_input(current);
    }
    input.interact::<String>().map_err(CliError::from_prompt)
}

pub fn validate_date(value: &str, optional: bool) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return if optional {
            Ok(())
        } else {
            Err("A date is required".to_string())
        };
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| format!("'{value}' is not a date like 2026-03-31"))
}

/// Picks one value of a closed set, starting on `current`.
pub fn choice<T>(prompt: &str, options: &[T], current: T) -> Result<T, CliError>
where
    T: Clone + Eq + Display,
{
    let mut select = cliclack::select(prompt.to_string());
    for option in options {
        select = select.item(option.clone(), option.to_string(), "");
    }
    select
        .initial_value(current)
        .interact()
        .map_err(CliError::from_prompt)
}

/// 1–5 rating with its scale label ("3 - Possible").
pub fn rating(
    prompt: &str,
    current: Rating,
    label: fn(Rating) -> &'static str,
) -> Result<Rating, CliError> {
    let mut select = cliclack::select(format!("{prompt} (1–5)"));
    for value in Rating::ALL {
        select = select.item(value, format!("{} - {}", value, label(value)), "");
    }
    select
        .initial_value(current)
        .interact()
        .map_err(CliError::from_prompt)
}
