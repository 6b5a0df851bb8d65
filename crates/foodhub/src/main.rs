// crates/foodhub/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

use commands::describe::{handle_describe_command, DescribeArgs};
use commands::options::{handle_options_command, OptionsArgs};
use commands::report::{handle_report_command, ReportArgs};

/// Order analysis reports for the FoodHub NYC dataset
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the full order analysis report.
    Report(ReportArgs),
    /// List the cuisine and day values available as filters.
    Options(OptionsArgs),
    /// Print summary statistics for every numeric column.
    Describe(DescribeArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Report(args) => handle_report_command(args),
        Command::Options(args) => handle_options_command(args),
        Command::Describe(args) => handle_describe_command(args),
    }
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
