//! Command-line front end over the engines and the JSON store.

pub mod table;
pub mod views;

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::{ConfigError, ConfigManager};
use crate::core::services::{EntryService, ReportService, ServiceError, SummaryService};
use crate::core::{utils::app_data_dir, FilterSet, RawFilters};
use crate::domain::{EntryDraft, EntryKind, EntryStatus, YearMonth};
use crate::errors::LedgerError;
use crate::format::LocaleFormatter;
use crate::utils::build_info;

pub const USAGE: &str = "Usage: fincontrol_cli <command>\n\
Commands:\n  \
list [YYYY-MM] [filters]\n  \
stats [YYYY-MM] [filters]\n  \
report [YEAR] [--json]\n  \
add <YYYY-MM-DD> <income|expense> <paid|pending> <category> <amount> [description...]\n  \
edit <id> <YYYY-MM-DD> <income|expense> <paid|pending> <category> <amount> [description...]\n  \
remove <id>\n  \
version\n\
Filters:\n  \
--type <income|expense>  --status <paid|pending>  --category <name>\n  \
--min <amount>  --max <amount>  --search <text>";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Executes one command and returns the text to print.
pub fn run<I>(args: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = args
        .next()
        .ok_or_else(|| CliError::Usage("missing command".into()))?;
    let rest: Vec<String> = args.collect();

    if command == "version" {
        return Ok(build_info::current().summary());
    }

    let manager = ConfigManager::with_base_dir(app_data_dir())?;
    let config = manager.load()?;
    let store = config.open_store(manager.base_dir())?;
    let service = EntryService::new(&store);
    let fmt = LocaleFormatter::for_locale(&config.locale, &config.currency);

    match command.as_str() {
        "list" => {
            let (month, filters) = parse_month_and_filters(&rest)?;
            let entries = service.list()?;
            let view = SummaryService::filtered_with_stats(&entries, month, &filters);
            Ok(views::render_monthly_view(&view, &fmt, &month.to_string()))
        }
        "stats" => {
            let (month, filters) = parse_month_and_filters(&rest)?;
            let entries = service.list()?;
            let view = SummaryService::filtered_with_stats(&entries, month, &filters);
            Ok(serde_json::to_string_pretty(&view.stats)?)
        }
        "report" => {
            let (year, as_json) = parse_report_args(&rest)?;
            let entries = service.list()?;
            let matrix = ReportService::annual_matrix(&entries, year);
            if as_json {
                Ok(serde_json::to_string_pretty(&matrix)?)
            } else {
                Ok(views::render_annual_matrix(&matrix, &fmt))
            }
        }
        "add" => {
            let draft = parse_draft(&rest)?;
            let stored = service.record(draft)?;
            Ok(format!("Recorded entry {}", stored.id))
        }
        "edit" => {
            let (id, fields) = rest
                .split_first()
                .ok_or_else(|| CliError::Usage("edit needs an entry id".into()))?;
            let entry = parse_draft(fields)?.into_entry_with_id(id.as_str());
            let stored = service.replace(entry)?;
            Ok(format!("Updated entry {}", stored.id))
        }
        "remove" => {
            let id = rest
                .first()
                .ok_or_else(|| CliError::Usage("remove needs an entry id".into()))?;
            service.delete(id)?;
            Ok(format!("Removed entry {id}"))
        }
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}

fn parse_month_and_filters(args: &[String]) -> Result<(YearMonth, FilterSet), CliError> {
    let (month, flags) = match args.split_first() {
        Some((first, rest)) if !first.starts_with("--") => {
            (first.parse::<YearMonth>().map_err(CliError::Usage)?, rest)
        }
        _ => (YearMonth::current(), args),
    };

    let mut raw = RawFilters::default();
    let mut flags = flags.iter();
    while let Some(flag) = flags.next() {
        let value = flags
            .next()
            .ok_or_else(|| CliError::Usage(format!("`{flag}` needs a value")))?
            .clone();
        match flag.as_str() {
            "--type" => raw.kind = value,
            "--status" => raw.status = value,
            "--category" => raw.category = value,
            "--min" => raw.min_amount = value,
            "--max" => raw.max_amount = value,
            "--search" => raw.search = value,
            other => return Err(CliError::Usage(format!("unknown filter `{other}`"))),
        }
    }
    Ok((month, FilterSet::from(&raw)))
}

fn parse_report_args(args: &[String]) -> Result<(i32, bool), CliError> {
    let mut year = None;
    let mut as_json = false;
    for arg in args {
        match arg.as_str() {
            "--json" => as_json = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown report flag `{flag}`")));
            }
            value if year.is_none() => {
                let parsed = value
                    .parse::<i32>()
                    .map_err(|_| CliError::Usage(format!("`{value}` is not a year")))?;
                year = Some(parsed);
            }
            extra => return Err(CliError::Usage(format!("unexpected argument `{extra}`"))),
        }
    }
    Ok((year.unwrap_or_else(|| YearMonth::current().year()), as_json))
}

fn parse_draft(args: &[String]) -> Result<EntryDraft, CliError> {
    let [date, kind, status, category, amount, description @ ..] = args else {
        return Err(CliError::Usage(
            "add needs a date, type, status, category and amount".into(),
        ));
    };
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| CliError::Usage(format!("`{date}` is not a YYYY-MM-DD date")))?;
    let kind = EntryKind::parse(kind)
        .ok_or_else(|| CliError::Usage(format!("`{kind}` is not income or expense")))?;
    let status = EntryStatus::parse(status)
        .ok_or_else(|| CliError::Usage(format!("`{status}` is not paid or pending")))?;
    let amount: f64 = amount
        .parse()
        .map_err(|_| CliError::Usage(format!("`{amount}` is not an amount")))?;
    Ok(EntryDraft::new(date, kind, category.as_str(), amount, status)
        .with_description(description.join(" ")))
}
