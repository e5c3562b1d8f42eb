//! Command Line Interface for the trade-scenario resolver.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use scenario_domain::value_objects::price_point::PricePoint;
use scenario_domain::value_objects::scenario_request::ScenarioRequest;
use scenario_domain::value_objects::scenario_result::ScenarioResult;
use scenario_domain::{Direction, Mode};
use scenario_resolver::config::SearchConfig;
use scenario_resolver::search::resolve_with;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scenario-cli")]
#[command(about = "Trade-scenario resolver CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    Long,
    Short,
}

impl From<DirectionArg> for Direction {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Long => Direction::Long,
            DirectionArg::Short => Direction::Short,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Profit,
    Loss,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Profit => Mode::Profit,
            ModeArg::Loss => Mode::Loss,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a trade scenario from a recorded price series
    Resolve {
        /// Path to a JSON file with an ascending [{ timestamp, price }] series
        #[arg(short, long)]
        series: PathBuf,

        /// Position direction
        #[arg(short, long, value_enum)]
        direction: DirectionArg,

        /// Outcome to construct
        #[arg(short, long, value_enum)]
        mode: ModeArg,

        /// Target result magnitude in percentage points
        #[arg(short, long)]
        target: Decimal,

        /// Principal the scenario settles against
        #[arg(short, long)]
        principal: Decimal,

        /// Tolerance window around the target, in percentage points
        #[arg(long, default_value = "0.5")]
        tolerance: Decimal,

        /// Leverage ceiling for the sweep and the fallback
        #[arg(long, default_value_t = 100)]
        max_leverage: u32,

        /// Preview only: the caller must not persist this result
        #[arg(long, default_value_t = false)]
        preview: bool,

        /// Print the raw JSON record instead of the summary table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            series,
            direction,
            mode,
            target,
            principal,
            tolerance,
            max_leverage,
            preview,
            json,
        } => {
            let raw = fs::read_to_string(&series)
                .with_context(|| format!("reading series file {}", series.display()))?;
            let points: Vec<PricePoint> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing series file {}", series.display()))?;

            let request =
                ScenarioRequest::new(direction.into(), mode.into(), target, principal);
            let config = SearchConfig::default()
                .with_tolerance(tolerance)
                .with_max_leverage(max_leverage);

            let result = resolve_with(&points, &request, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_summary(&result, preview);
            }
        }
    }

    Ok(())
}

fn print_summary(result: &ScenarioResult, preview: bool) {
    let banner = if preview {
        "Scenario preview (not persisted)"
    } else {
        "Resolved scenario"
    };
    println!("{banner}");
    println!("{:<26} {} {}", "position", result.direction, result.mode);
    println!("{:<26} {} -> {}", "entry/exit price", result.entry_price, result.exit_price);
    println!("{:<26} {}x", "leverage", result.leverage);
    println!("{:<26} {}%", "natural movement", result.natural_movement_percent);
    println!("{:<26} {}%", "result", result.result_percent);
    println!("{:<26} {}", "profit amount", result.profit_amount);
    println!("{:<26} {}", "final balance", result.final_balance);
    println!(
        "{:<26} {} .. {} ({} points)",
        "price window", result.window_start, result.window_end, result.points_considered
    );
}
