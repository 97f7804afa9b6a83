use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands {
    automod::dir!(pub "src/commands");
}
mod util;

#[derive(Parser)]
#[command(name = "formschema", about = "Field tree and schema document utilities")]
struct Cli {
    /// Path to a formschema.toml (default: searched upward from the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON field tree as a schema document
    Encode(commands::encode::Args),
    /// Decode a schema document into a JSON field tree
    Decode(commands::decode::Args),
    /// Import `name: type;` declarations as a schema document
    Import(commands::import::Args),
    /// Normalize a hand-edited schema document through an editing session
    Sync(commands::sync::Args),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = util::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode(args) => commands::encode::run(args, &config),
        Commands::Decode(args) => commands::decode::run(args, &config),
        Commands::Import(args) => commands::import::run(args, &config),
        Commands::Sync(args) => commands::sync::run(args, &config),
    }
}
