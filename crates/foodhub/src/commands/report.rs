use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use foodhub_core::{build_report, OrderFilter, ReportSettings};
use tracing::{debug, info};

use super::InputArgs;
use crate::render::render_report;

const DEFAULT_CONFIG_FILE: &str = "foodhub.toml";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Keep only these cuisine types (repeatable).
    #[arg(long = "cuisine")]
    cuisines: Vec<String>,

    /// Keep only these days of the week (repeatable).
    #[arg(long = "day")]
    days: Vec<String>,

    /// Cost threshold in dollars: 20, 30, 40 or 50.
    #[arg(long)]
    cost_threshold: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Report settings file. Defaults to ./foodhub.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn handle_report_command(args: ReportArgs) -> Result<()> {
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(threshold) = args.cost_threshold {
        settings.cost_threshold = threshold;
    }

    let loaded = args.input.load()?;
    let filter = OrderFilter::new(args.cuisines, args.days);
    let report = build_report(&loaded, &filter, &settings).context("failed to build report")?;
    info!(run_id = %report.metadata.run_id, "report ready");

    match args.format {
        OutputFormat::Table => println!("{}", render_report(&report)),
        OutputFormat::Json => println!(
            "{}",
            report.to_json_pretty().context("failed to serialize report")?
        ),
    }
    Ok(())
}

fn load_settings(explicit: Option<&Path>) -> Result<ReportSettings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                debug!("no config file found, using default report settings");
                return Ok(ReportSettings::default());
            }
            default
        }
    };

    info!(path = %path.display(), "loading report settings");
    ReportSettings::load(&path)
        .with_context(|| format!("failed to load settings from {}", path.display()))
}
