//! owm-icons CLI
//!
//! Command-line access to the OpenWeatherMap condition catalog and icon fetcher.

#![allow(clippy::print_stdout)]

mod config;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use domain::{ConditionCategory, ConditionEntry, IconMapping, TimeOfDay};
use integration_weather::{HttpIconFetcher, IconFetcher};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CliConfig;

/// owm-icons CLI
#[derive(Parser)]
#[command(name = "owm-icons")]
#[command(author, version, about = "OpenWeatherMap condition codes and icons", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "OWM_ICONS_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a condition code
    ///
    /// Example: owm-icons lookup 800
    Lookup {
        /// Condition code returned by the weather API
        id: u16,

        /// Icon variant to print
        #[arg(short, long, default_value = "day")]
        time: TimeOfDay,
    },

    /// Show the day/night icons for a coarse condition label
    ///
    /// Example: owm-icons icons "clear sky"
    Icons {
        /// Lowercase label, e.g. "broken clouds"
        label: String,
    },

    /// List condition codes
    List {
        /// Only list one category (thunderstorm, drizzle, rain, snow,
        /// atmosphere, clouds, extreme, additional)
        #[arg(short, long)]
        category: Option<ConditionCategory>,
    },

    /// Download an icon unless it is already present
    ///
    /// Example: owm-icons fetch 01d.png --dest ./icons
    Fetch {
        /// Icon filename, e.g. 01d.png
        icon: String,

        /// Destination directory (defaults to the configured icon_dir)
        #[arg(short, long)]
        dest: Option<PathBuf>,
    },

    /// Download every day/night icon of the catalog
    Prefetch {
        /// Destination directory (defaults to the configured icon_dir)
        #[arg(short, long)]
        dest: Option<PathBuf>,
    },
}

/// Map verbosity flag count to log filter
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// One-line description of a condition entry
fn format_entry(entry: &ConditionEntry, time: TimeOfDay) -> String {
    let category = entry
        .category()
        .map_or_else(|| "unknown".to_string(), |c| c.to_string());
    let icon = entry.icon_for(time).unwrap_or("-");
    format!("{:>4}  {:<32} {:<10} {icon}", entry.id, entry.meaning, category)
}

/// One-line description of an icon mapping
fn format_mapping(mapping: &IconMapping) -> String {
    format!(
        "{}: day {} / night {}",
        mapping.condition, mapping.day_icon, mapping.night_icon
    )
}

/// Entries to list, optionally restricted to one category
fn listed_entries(category: Option<ConditionCategory>) -> Vec<&'static ConditionEntry> {
    match category {
        Some(category) => category.table().iter().collect(),
        None => domain::conditions().collect(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Lookup { id, time } => {
            let Some(entry) = domain::lookup(id) else {
                bail!("Condition {id} not found");
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(entry)?);
            } else {
                println!("{}", format_entry(entry, time));
            }
        },

        Commands::Icons { label } => {
            let Some(mapping) = domain::lookup_icons_by_condition(&label) else {
                bail!("No icons for condition {label:?}");
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(mapping)?);
            } else {
                println!("{}", format_mapping(mapping));
            }
        },

        Commands::List { category } => {
            let entries = listed_entries(category);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!("{}", format_entry(entry, TimeOfDay::Day));
                }
            }
        },

        Commands::Fetch { icon, dest } => {
            let dest = dest.unwrap_or_else(|| config.icon_dir.clone());
            let fetcher = HttpIconFetcher::new(config.fetcher)?;

            match fetcher.retrieve_icon(&dest, &icon).await {
                Ok(bytes) => {
                    println!("⬇️  {icon}: {bytes} bytes written to {}", dest.display());
                },
                Err(e) if e.is_already_exists() => {
                    println!("✅ {icon} already present in {}", dest.display());
                },
                Err(e) => return Err(e).with_context(|| format!("Failed to fetch {icon}")),
            }
        },

        Commands::Prefetch { dest } => {
            let dest = dest.unwrap_or_else(|| config.icon_dir.clone());
            let fetcher = HttpIconFetcher::new(config.fetcher)?;

            let report = fetcher.prefetch_all(&dest).await;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "📦 {} downloaded ({} bytes), {} already present, {} failed",
                    report.downloaded.len(),
                    report.total_bytes(),
                    report.skipped.len(),
                    report.failed.len()
                );
                for (icon, error) in &report.failed {
                    println!("❌ {icon}: {error}");
                }
            }

            if !report.is_success() {
                bail!("{} icon(s) failed to download", report.failed.len());
            }
        },
    }

    Ok(())
}
