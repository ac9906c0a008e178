//! `groupsum` command-line interface.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;

/// Count distinct-value solutions of partitioned sum equations
#[derive(Parser, Debug)]
#[command(name = "groupsum", author, version, about, long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count the solutions of one equation system
    Count(CountArgs),
    /// Count every scenario of a polygon-puzzle sweep
    Sweep(SweepArgs),
    /// Print the effective sweep configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct CountArgs {
    /// Target sum per equation, comma-separated
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    targets: Vec<i64>,

    /// Variable count per equation, comma-separated
    #[arg(short, long, value_delimiter = ',', required = true)]
    sizes: Vec<usize>,

    /// Distinct candidate values, comma-separated
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pool: Vec<i64>,

    /// Also list the solutions
    #[arg(short, long)]
    list: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// Sweep configuration file (TOML, or YAML by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Worker threads (0 counts scenarios on the main thread)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Sweep configuration file to load instead of the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "groupsum.toml";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    groupsum::console::init_with_level(level);

    if let Err(e) = run(cli.command) {
        eprintln!("{} {e}", "Error:".bright_red().bold());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Count(args) => commands::count(&args),
        Command::Sweep(args) => commands::sweep(&args),
        Command::Config(args) => commands::config(&args),
    }
}
