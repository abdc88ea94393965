use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use tracing_subscriber::EnvFilter;

use workout_journal::config::{self, Config};
use workout_journal::{parse_workout_log, Metric, TimeSeries, WorkoutLog};

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse a plain-text workout journal", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Log per-session parse details
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print session, exercise and set totals
    Summary {
        #[arg(value_hint = ValueHint::FilePath)]
        journal: Option<PathBuf>,
    },
    /// Print the parsed sessions as JSON
    Json {
        #[arg(value_hint = ValueHint::FilePath)]
        journal: Option<PathBuf>,
    },
    /// Print a date/value series as TSV
    Series {
        #[arg(value_hint = ValueHint::FilePath)]
        journal: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Metric::Weight)]
        metric: Metric,

        /// Leading sessions to leave out (defaults to `series_skip` from config)
        #[arg(long)]
        skip: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    let config = match &cli.config {
        Some(path) => config::load_config_from_file(&path.to_string_lossy())?,
        None => Config::default(),
    };

    match cli.command {
        Command::Summary { journal } => {
            let log = load_journal(journal, &config)?;
            print_summary(&log);
        }
        Command::Json { journal } => {
            let log = load_journal(journal, &config)?;
            let json = serde_json::to_string_pretty(&log.sessions).context("JSON serialization failed")?;
            println!("{json}");
        }
        Command::Series { journal, metric, skip } => {
            let log = load_journal(journal, &config)?;
            let series = TimeSeries::from_log(&log, metric).skip_leading(skip.unwrap_or(config.series_skip));
            print!("{}", series.to_tsv());
        }
    }
    Ok(())
}

fn load_journal(journal: Option<PathBuf>, config: &Config) -> Result<WorkoutLog> {
    let path = journal.unwrap_or_else(|| config.journal_path.clone());
    let contents = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let log = parse_workout_log(&contents, &config.layout)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(log)
}

fn print_summary(log: &WorkoutLog) {
    println!("Sessions: {}", log.sessions.len());
    if let (Some(first), Some(last)) = (log.dates().into_iter().min(), log.dates().into_iter().max()) {
        println!("Date range: {first} to {last}");
    }
    for metric in [Metric::Weight, Metric::BodyFat] {
        let series = TimeSeries::from_log(log, metric);
        let recorded = series.present().count();
        match series.value_range() {
            Some((lo, hi)) => println!("{}: {recorded} readings, {lo} to {hi}", series.label()),
            None => println!("{}: no readings", series.label()),
        }
    }
    println!("Exercises: {}", log.exercise_count());
    println!("Sets: {}", log.set_count());
}
