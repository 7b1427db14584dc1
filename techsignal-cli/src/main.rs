//! techsignal CLI: technical analysis reports for one or more symbols.
//!
//! Commands:
//! - `analyze`: fetch each symbol, compute indicators, print the composite signal
//! - `periods`: list the lookback buckets and how many bars each holds

mod logging;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use techsignal_core::present::render_tables;
use techsignal_core::{
    AnalysisError, AnalysisReport, AppConfig, DataSource, LookbackPeriod, TechnicalAnalyzer,
};
use tracing::{debug, info};

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "techsignal.toml";

#[derive(Parser)]
#[command(
    name = "techsignal",
    about = "techsignal: technical indicators and composite signals for daily price history"
)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full tabular report.
    Table,
    /// Short multi-line summary.
    Summary,
    /// JSON array of reports.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze symbols and print their reports.
    Analyze {
        /// Symbols to analyze (e.g., SPY QQQ AAPL). Defaults to the config watchlist.
        symbols: Vec<String>,

        /// Lookback bucket: 1mo, 3mo, 6mo, 1y, 2y. Defaults to the config value.
        #[arg(long)]
        period: Option<LookbackPeriod>,

        /// Data source: yahoo, csv, synthetic. Defaults to the config value.
        #[arg(long)]
        source: Option<DataSource>,

        /// Directory of <SYMBOL>.csv files for the csv source.
        #[arg(long)]
        csv_dir: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Path to a TOML config file. Defaults to ./techsignal.toml when present.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List lookback buckets.
    Periods,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            symbols,
            period,
            source,
            csv_dir,
            format,
            config,
        } => run_analyze(symbols, period, source, csv_dir, format, config.as_deref()),
        Commands::Periods => {
            print_periods();
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                debug!(path = DEFAULT_CONFIG_FILE, "using config from working directory");
                AppConfig::from_file(default)
                    .with_context(|| format!("loading config {DEFAULT_CONFIG_FILE}"))
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

/// Command-line symbols win over the watchlist; both are upper-cased and de-duplicated.
fn resolve_symbols(args: Vec<String>, config: &AppConfig) -> Vec<String> {
    if args.is_empty() {
        return config.watchlist.normalized();
    }
    let mut symbols: Vec<String> = Vec::with_capacity(args.len());
    for symbol in args {
        let symbol = symbol.trim().to_ascii_uppercase();
        if !symbol.is_empty() && !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    symbols
}

fn run_analyze(
    symbols: Vec<String>,
    period: Option<LookbackPeriod>,
    source: Option<DataSource>,
    csv_dir: Option<PathBuf>,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(dir) = csv_dir {
        config.data.csv_dir = dir;
    }

    let symbols = resolve_symbols(symbols, &config);
    if symbols.is_empty() {
        bail!("no symbols given and the config watchlist is empty");
    }

    let period = period.unwrap_or(config.data.period);
    let source = source.unwrap_or(config.data.source);
    let provider = config
        .data
        .provider(source)
        .with_context(|| format!("setting up {source} provider"))?;
    let analyzer = TechnicalAnalyzer::new(config.indicators.clone())
        .context("invalid [indicators] settings")?;

    info!(count = symbols.len(), %period, %source, "analyzing symbols");

    let results: Vec<(String, Result<AnalysisReport, AnalysisError>)> = symbols
        .par_iter()
        .map(|symbol| {
            let result = analyzer.analyze_symbol(provider.as_ref(), symbol, period);
            (symbol.clone(), result)
        })
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for (symbol, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failures += 1;
                eprintln!("Error for {symbol}: {e}");
            }
        }
    }

    print_reports(&reports, format)?;

    if failures > 0 {
        eprintln!(
            "\n{failures}/{} symbols failed",
            reports.len() + failures
        );
        std::process::exit(1);
    }

    Ok(())
}

fn print_reports(reports: &[AnalysisReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(reports).context("serializing reports to JSON")?;
            println!("{json}");
        }
        OutputFormat::Summary => {
            let blocks: Vec<String> = reports.iter().map(AnalysisReport::summary_text).collect();
            println!("{}", blocks.join("\n\n"));
        }
        OutputFormat::Table => {
            let blocks: Vec<String> = reports.iter().map(render_tables).collect();
            println!("{}", blocks.join("\n\n\n"));
        }
    }
    Ok(())
}

fn print_periods() {
    println!("{:<8}{:>8}{:>10}", "Period", "Bars", "Days");
    for period in LookbackPeriod::ALL {
        println!(
            "{:<8}{:>8}{:>10}",
            period.as_str(),
            period.trading_days(),
            period.calendar_days()
        );
    }
}
