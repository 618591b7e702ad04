use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use crate::config::PredictorSettings;
use crate::core::services::{GoalService, PredictionService};
use crate::currency::{FixedRateTable, RateProvider, UnitRates};
use crate::domain::{CheckGoalRequest, MonthDate, PredictionRequest, PredictionResult};
use crate::errors::PredictionError;
use crate::example;
use crate::store::{JsonFileStore, PredictionStore, StoreError};

use super::output::{self, OutputPreferences};
use super::table::{Table, TableColumn};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

const VALUEFUL_FLAGS: &[&str] = &[
    "--id",
    "--store",
    "--rates",
    "--month",
    "--year",
    "--months",
    "--budget",
    "--balance-at-least",
    "--income-at-least",
    "--expense-at-most",
];
const SWITCH_FLAGS: &[&str] = &["--plain", "--quiet"];

struct ParsedArgs {
    positionals: Vec<String>,
    values: HashMap<String, String>,
    switches: HashSet<String>,
}

impl ParsedArgs {
    fn value(&self, flag: &str) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }

    fn parsed_value<T: std::str::FromStr>(&self, flag: &str) -> Result<Option<T>, CliError> {
        match self.value(flag) {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| CliError::Usage(format!("invalid value for {flag}: {raw}"))),
        }
    }
}

fn parse_args(args: &[String]) -> Result<ParsedArgs, CliError> {
    let mut parsed = ParsedArgs {
        positionals: Vec::new(),
        values: HashMap::new(),
        switches: HashSet::new(),
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if SWITCH_FLAGS.contains(&arg.as_str()) {
            parsed.switches.insert(arg.clone());
        } else if VALUEFUL_FLAGS.contains(&arg.as_str()) {
            let value = iter
                .next()
                .ok_or_else(|| CliError::Usage(format!("{arg} requires a value")))?;
            parsed.values.insert(arg.clone(), value.clone());
        } else if arg.starts_with("--") {
            return Err(CliError::Usage(format!("unknown flag: {arg}")));
        } else {
            parsed.positionals.push(arg.clone());
        }
    }
    Ok(parsed)
}

pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    run_with_args(&args)
}

fn run_with_args(args: &[String]) -> Result<(), CliError> {
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => {
            print_help();
            return Ok(());
        }
    };

    let parsed = parse_args(rest)?;
    output::set_preferences(OutputPreferences {
        quiet_mode: parsed.switches.contains("--quiet"),
        plain_mode: parsed.switches.contains("--plain"),
    });

    match command {
        "predict" => cmd_predict(&parsed),
        "show" => cmd_show(&parsed),
        "check-goal" => cmd_check_goal(&parsed),
        "example" => cmd_example(&parsed),
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command: {other}"))),
    }
}

fn open_store(parsed: &ParsedArgs) -> Result<JsonFileStore, CliError> {
    match parsed.value("--store") {
        Some(dir) => Ok(JsonFileStore::open(PathBuf::from(dir))?),
        None => Ok(JsonFileStore::open_default()?),
    }
}

fn load_rates(parsed: &ParsedArgs) -> Result<Box<dyn RateProvider>, CliError> {
    match parsed.value("--rates") {
        Some(path) => {
            let data = fs::read_to_string(path)?;
            let table: FixedRateTable = serde_json::from_str(&data)?;
            if table.is_empty() {
                output::warning("rates file contains no rates; foreign amounts convert at parity");
            }
            Ok(Box::new(table))
        }
        None => Ok(Box::new(UnitRates)),
    }
}

fn parse_id(raw: &str) -> Result<Uuid, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid prediction id: {raw}")))
}

fn cmd_predict(parsed: &ParsedArgs) -> Result<(), CliError> {
    let Some(file) = parsed.positionals.first() else {
        return Err(CliError::Usage(
            "usage: predict <request.json> [--id <uuid>] [--store <dir>] [--rates <file>]".into(),
        ));
    };
    let put_id = match parsed.value("--id") {
        Some(raw) => Some(parse_id(raw)?),
        None => None,
    };

    let data = fs::read_to_string(file)?;
    let request: PredictionRequest = serde_json::from_str(&data)?;

    let settings = PredictorSettings::load_or_default();
    let mut store = open_store(parsed)?;
    let rates = load_rates(parsed)?;

    let result = PredictionService::run(&mut store, rates.as_ref(), &settings, &request, put_id)?;
    print_result(&result);
    Ok(())
}

fn cmd_show(parsed: &ParsedArgs) -> Result<(), CliError> {
    let Some(raw_id) = parsed.positionals.first() else {
        return Err(CliError::Usage("usage: show <id> [--store <dir>]".into()));
    };
    let id = parse_id(raw_id)?;

    let store = open_store(parsed)?;
    match store.get(id)? {
        Some(result) => {
            print_result(&result);
            Ok(())
        }
        None => Err(CliError::Usage(format!("no stored prediction for {id}"))),
    }
}

fn cmd_check_goal(parsed: &ParsedArgs) -> Result<(), CliError> {
    let Some(raw_id) = parsed.positionals.first() else {
        return Err(CliError::Usage(
            "usage: check-goal <id> --month <1-12> --year <year> [--balance-at-least X] \
             [--income-at-least X] [--expense-at-most X] [--store <dir>]"
                .into(),
        ));
    };
    let month = parsed
        .parsed_value::<u32>("--month")?
        .ok_or_else(|| CliError::Usage("--month is required".into()))?;
    let year = parsed
        .parsed_value::<i32>("--year")?
        .ok_or_else(|| CliError::Usage("--year is required".into()))?;

    let request = CheckGoalRequest {
        prediction_id: parse_id(raw_id)?,
        month: MonthDate::new(month, year),
        balance_higher_or_equal: parsed.parsed_value("--balance-at-least")?,
        income_higher_or_equal: parsed.parsed_value("--income-at-least")?,
        expense_lower_or_equal: parsed.parsed_value("--expense-at-most")?,
    };

    let store = open_store(parsed)?;
    let met = GoalService::check(&store, &request)?;
    println!("{met}");
    Ok(())
}

fn cmd_example(parsed: &ParsedArgs) -> Result<(), CliError> {
    let settings = PredictorSettings::load_or_default();
    if !settings.enable_example_data {
        return Err(CliError::Usage("example data is disabled in settings".into()));
    }

    let months = parsed
        .parsed_value::<u32>("--months")?
        .unwrap_or(settings.default_example_months);
    let budget = parsed
        .parsed_value::<f64>("--budget")?
        .unwrap_or(settings.default_initial_budget);

    let request = example::example_request(MonthDate::current(), months, budget);
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn print_result(result: &PredictionResult) {
    output::section("Months");
    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Income"),
        TableColumn::right("Expense"),
        TableColumn::right("Balance"),
        TableColumn::right("Budget"),
    ]);
    for month in &result.months {
        table.push_row(vec![
            month.month_date.label(),
            format!("{:.2}", month.income),
            format!("{:.2}", month.expense),
            format!("{:.2}", month.balance),
            format!("{:.2}", month.budget_after),
        ]);
    }
    output::info(table.render());

    let summary = &result.summary;
    output::section("Summary");
    output::info(format!("Starting balance: {:.2}", summary.starting_balance));
    output::info(format!("Ending balance:   {:.2}", summary.ending_balance));
    output::info(format!("Total income:     {:.2}", summary.total_income));
    output::info(format!("Total expenses:   {:.2}", summary.total_expenses));
    output::info(format!(
        "Lowest balance:   {:.2} in {}",
        summary.lowest_balance,
        summary.lowest_balance_date.label()
    ));
    output::info(format!(
        "Highest balance:  {:.2} in {}",
        summary.highest_balance,
        summary.highest_balance_date.label()
    ));

    output::success(format!("Prediction id: {}", result.id));
}

fn print_help() {
    println!("budget_predictor_cli <command> [options]");
    println!();
    println!("Commands:");
    println!("  predict <request.json> [--id <uuid>] [--store <dir>] [--rates <file>]");
    println!("  show <id> [--store <dir>]");
    println!("  check-goal <id> --month <1-12> --year <year> [--balance-at-least X]");
    println!("             [--income-at-least X] [--expense-at-most X] [--store <dir>]");
    println!("  example [--months N] [--budget X]");
    println!("  help");
    println!();
    println!("Global flags: --plain (no colors), --quiet (suppress tables)");
}
