use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use game_utility::{run, Dataset, DemoConfig, DemoKind};

#[derive(Parser, Debug)]
#[command(name = "game-utility")]
#[command(about = "Map, filter and sort demonstrations over game data", long_about = None)]
struct Args {
    /// JSON dataset with optional `players`, `entities`, `inventory` and `coordinates` lists
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON configuration file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Demonstration to run; repeat to run several (default: all)
    #[arg(long, value_enum)]
    demo: Vec<DemoKind>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let dataset = match &args.data {
        Some(path) => Dataset::load(path)?,
        None => Dataset::sample(),
    };

    let selection = if args.demo.is_empty() {
        DemoKind::ALL.to_vec()
    } else {
        args.demo
    };

    let stdout = std::io::stdout();
    run(&dataset, &config, &selection, &mut stdout.lock())?;
    Ok(())
}
