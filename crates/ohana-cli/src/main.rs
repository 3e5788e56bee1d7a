mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "ohana-cli")]
#[command(about = "Search a location directory corpus from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search and print the matching locations as JSON
    Search(SearchArgs),
    /// Load and validate a corpus file
    CheckCorpus {
        /// Path to the YAML corpus file
        #[arg(long, env = "OHANA_CORPUS_PATH", default_value = "./config/locations.yaml")]
        corpus: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search(args)) => search::run_search(&args).await?,
        Some(Commands::CheckCorpus { corpus }) => {
            let file = ohana_core::load_corpus(&corpus)?;
            println!("ok: {} locations in {}", file.locations.len(), corpus.display());
        }
        None => println!("ohana-cli: use `search` or `check-corpus` (see --help)"),
    }

    Ok(())
}
