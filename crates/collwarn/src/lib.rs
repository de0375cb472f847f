//! Collision Warning Command Line
//!
//! Evaluates a single `(scenario, sequence)` run below a data root and
//! prints its severity levels.

use anyhow::{bail, Context, Result};
use collision_warning::{CollisionWarningModule, Scenario, WarningConfig};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "usage: collwarn <data-root> <scenario> <sequence> [--config <file>] [--json]";

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub root: PathBuf,
    pub scenario: Scenario,
    pub sequence: u32,
    pub config: Option<PathBuf>,
    /// Print the full analysis instead of one level per line
    pub json: bool,
}

impl RunArgs {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional = Vec::new();
        let mut config = None;
        let mut json = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().context("--config needs a file argument")?;
                    config = Some(PathBuf::from(path));
                }
                "--json" => json = true,
                flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
                _ => positional.push(arg),
            }
        }

        let [root, scenario, sequence] = <[String; 3]>::try_from(positional)
            .map_err(|_| anyhow::anyhow!("expected three arguments\n{}", USAGE))?;

        Ok(Self {
            root: PathBuf::from(root),
            scenario: scenario.parse()?,
            sequence: sequence
                .parse()
                .with_context(|| format!("invalid sequence number '{}'", sequence))?,
            config,
            json,
        })
    }
}

/// Evaluate the run and render the output
pub fn run(args: &RunArgs) -> Result<String> {
    let config = match &args.config {
        Some(path) => WarningConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => WarningConfig::default(),
    };
    let module = CollisionWarningModule::new(config)?;

    let analysis = module
        .evaluate_run(&args.root, args.scenario, args.sequence)
        .with_context(|| format!("evaluating {} sequence {:02}", args.scenario, args.sequence))?;

    if let Some(distance) = analysis.warning_onset_distance() {
        info!("First warning at {:.1} m", distance);
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&analysis)? + "\n");
    }
    Ok(analysis
        .severities
        .iter()
        .map(|level| format!("{}\n", level))
        .collect())
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
