use anyhow::Result;
use clap::Parser;

use popdash::cli::{Cli, execute};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    execute(&cli, &mut stdout.lock())
}
