use std::path::PathBuf;

use clap::{Parser, Subcommand};
use process::models::{SearchArgs, ShowArgs, SuggestArgs};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find recipes for your ingredients and preferences
    Search(SearchArgs),

    /// Suggest common ingredients matching partial input
    Suggest(SuggestArgs),

    /// Show a recipe in full
    Show(ShowArgs),

    /// Write the built-in recipes to a bank file
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Search(search) => process::search(search).await,
        Command::Suggest(suggest) => {
            process::suggestions(suggest);
            Ok(())
        }
        Command::Show(show) => process::show(show),
        Command::Export { path } => process::export(path),
    }
}
