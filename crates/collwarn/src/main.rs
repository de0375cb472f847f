//! Collision Warning Evaluation - Main Entry Point

use collwarn::{init_logging, run, RunArgs};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== collwarn v{} ===", env!("CARGO_PKG_VERSION"));
    let args = RunArgs::parse(std::env::args().skip(1))?;
    print!("{}", run(&args)?);

    Ok(())
}
