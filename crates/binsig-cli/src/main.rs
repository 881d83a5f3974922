//! binsig CLI - Command-line interface for run-length encoded binary signals.

mod commands;

use std::path::PathBuf;

use binsig_config::{InputFormat, OutputFormat, settings_path};
use clap::{Parser, Subcommand, ValueEnum};
use commands::common::Context;

/// Input formats for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliInputFormat {
    /// `0`/`1` string, e.g. 10011100
    Bits,
    /// Level/duration pair, e.g. "1 5" or 1:5
    Number,
    /// Integer levels, e.g. 1,1,0,0,1
    Levels,
}

impl From<CliInputFormat> for InputFormat {
    fn from(f: CliInputFormat) -> Self {
        match f {
            CliInputFormat::Bits => InputFormat::Bits,
            CliInputFormat::Number => InputFormat::Number,
            CliInputFormat::Levels => InputFormat::Levels,
        }
    }
}

/// Output formats for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliOutputFormat {
    /// Canonical bit string
    Bits,
    /// Waveform chart
    Chart,
    /// One "<level> <duration>" line per interval
    Intervals,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Bits => OutputFormat::Bits,
            CliOutputFormat::Chart => OutputFormat::Chart,
            CliOutputFormat::Intervals => OutputFormat::Intervals,
        }
    }
}

#[derive(Parser)]
#[command(name = "binsig")]
#[command(author, version, about = "Binary signal editor", long_about = None)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Format of SIGNAL arguments (overrides settings)
    #[arg(long, short = 'f', global = true, value_enum)]
    input_format: Option<CliInputFormat>,

    /// Output format, repeatable (overrides settings)
    #[arg(long, short = 'o', global = true, value_enum)]
    output: Vec<CliOutputFormat>,

    /// Log edit operations to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a signal
    Show(commands::edit::ShowArgs),

    /// Repeat a signal N times
    Repeat(commands::edit::RepeatArgs),

    /// Concatenate signals
    Append(commands::edit::AppendArgs),

    /// Insert a signal at a time offset
    Insert(commands::edit::InsertArgs),

    /// Remove a time window
    Remove(commands::edit::RemoveArgs),

    /// Flip every level
    Invert(commands::edit::InvertArgs),

    /// Print the level at a time offset
    Level(commands::level::LevelArgs),

    /// List factory and user patterns
    Patterns(commands::patterns::PatternsArgs),

    /// Manage the settings file
    Config(commands::config::ConfigArgs),
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
    tracing_log::LogTracer::init().ok();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings_path = cli.config.unwrap_or_else(settings_path);
    let input: Option<InputFormat> = cli.input_format.map(Into::into);
    let output: Vec<OutputFormat> = cli.output.into_iter().map(Into::into).collect();

    // parsed on demand: `config init` and `config path` must work on a broken file
    let load = || Context::new(settings_path.clone(), input, output.clone());

    match cli.command {
        Commands::Show(args) => commands::edit::show(&load()?, args),
        Commands::Repeat(args) => commands::edit::repeat(&load()?, args),
        Commands::Append(args) => commands::edit::append(&load()?, args),
        Commands::Insert(args) => commands::edit::insert(&load()?, args),
        Commands::Remove(args) => commands::edit::remove(&load()?, args),
        Commands::Invert(args) => commands::edit::invert(&load()?, args),
        Commands::Level(args) => commands::level::run(&load()?, args),
        Commands::Patterns(args) => commands::patterns::run(&load()?, args),
        Commands::Config(args) => commands::config::run(&settings_path, load, args),
    }
}
