use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use mfrec::cli::OutputFormat;
use mfrec::core::log::init_logging;
use mfrec::core::profile::{
    AGE_RANGE, DEFAULT_AGE, DEFAULT_HORIZON_YEARS, DEFAULT_INCOME, HORIZON_RANGE,
    INVESTMENT_GOAL_CHOICES, MIN_INCOME, RISK_TOLERANCE_CHOICES, UserProfile,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration and a sample fund catalog
    Setup {
        /// Directory to write into instead of the platform config directory
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Recommend funds for an investment profile
    Recommend {
        /// Risk tolerance
        #[arg(long, value_parser = RISK_TOLERANCE_CHOICES)]
        risk: String,

        /// Investment goal
        #[arg(long, value_parser = INVESTMENT_GOAL_CHOICES)]
        goal: String,

        /// Age in years
        #[arg(long, default_value_t = DEFAULT_AGE, value_parser = clap::value_parser!(u8).range(i64::from(*AGE_RANGE.start())..=i64::from(*AGE_RANGE.end())))]
        age: u8,

        /// Annual income in rupees
        #[arg(long, default_value_t = DEFAULT_INCOME, value_parser = clap::value_parser!(u64).range(MIN_INCOME..))]
        income: u64,

        /// Investment horizon in years
        #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS, value_parser = clap::value_parser!(u8).range(i64::from(*HORIZON_RANGE.start())..=i64::from(*HORIZON_RANGE.end())))]
        horizon: u8,

        /// Number of funds to recommend (defaults to the configured value)
        #[arg(long, value_parser = parse_top_n)]
        top_n: Option<usize>,

        /// Fund catalog file (.csv or .json), overriding the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Display the fund catalog
    Catalog {
        /// Fund catalog file (.csv or .json), overriding the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn parse_top_n(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl From<Commands> for mfrec::AppCommand {
    fn from(cmd: Commands) -> mfrec::AppCommand {
        match cmd {
            Commands::Recommend {
                risk,
                goal,
                age,
                income,
                horizon,
                top_n,
                catalog,
                format,
            } => mfrec::AppCommand::Recommend {
                profile: UserProfile {
                    age,
                    income,
                    risk_tolerance: risk,
                    investment_horizon_years: horizon,
                    investment_goal: goal,
                },
                top_n,
                catalog,
                format,
            },
            Commands::Catalog { catalog } => mfrec::AppCommand::Catalog { catalog },
            Commands::Setup { .. } => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup { path }) => setup(path),
        Some(cmd) => mfrec::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup(path: Option<PathBuf>) -> Result<()> {
    let config_path = match path {
        Some(dir) => mfrec::cli::setup::setup_in_dir(dir)?,
        None => mfrec::cli::setup::setup()?,
    };
    println!("Created configuration at {}", config_path.display());
    Ok(())
}
