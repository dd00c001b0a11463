use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use u_wbs::catalog::BuiltinCatalog;
use u_wbs::validation::validate_task_catalog;
use u_wbs::{EngineConfig, EventFacts, Synthesizer};

/// Synthesizes an event work breakdown from a JSON facts file.
#[derive(Debug, Parser)]
#[command(name = "u-wbs", version, about = "Event work-breakdown synthesis")]
struct Cli {
    /// Event facts JSON file, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Configuration TOML file (defaults to ./u-wbs.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Historical corpus JSON file
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Pin today's date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Pretty-print the plan
    #[arg(long)]
    pretty: bool,

    /// Validate the built-in catalog and exit
    #[arg(long)]
    check_catalog: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("u-wbs error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if cli.check_catalog {
        return check_catalog();
    }

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load_from(path),
        None => EngineConfig::load(),
    }
    .context("failed to load configuration")?;
    if let Some(corpus) = cli.corpus {
        config.corpus_path = Some(corpus);
    }

    let text = read_input(&cli.input)?;
    let facts: EventFacts =
        serde_json::from_str(&text).context("input is not a valid event facts document")?;

    let mut synthesizer = Synthesizer::from_config(config);
    if let Some(today) = cli.today {
        synthesizer = synthesizer.with_today(today);
    }
    let plan = synthesizer.synthesize(&facts);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&plan)
    } else {
        serde_json::to_string(&plan)
    }
    .context("failed to serialize plan")?;
    println!("{json}");

    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read facts from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read facts from '{input}'"))
}

fn check_catalog() -> anyhow::Result<()> {
    match validate_task_catalog(&BuiltinCatalog) {
        Ok(()) => {
            println!("catalog ok");
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("{:?}: {}", error.kind, error.message);
            }
            anyhow::bail!("catalog has {} defect(s)", errors.len())
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("UWBS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
