mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chdist")]
#[command(about = "Find registered companies and how far they are from you")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the company registry and annotate each hit with its distance
    Search {
        /// Company name substrings to search for, one search each
        #[arg(required = true)]
        names: Vec<String>,
        /// Free-text location filter (overrides CHDIST_LOCATION_FILTER)
        #[arg(long)]
        location: Option<String>,
        /// Order each report nearest first instead of registry order
        #[arg(long)]
        nearest_first: bool,
        /// Skip records whose postcode fails to geocode instead of aborting
        #[arg(long)]
        keep_going: bool,
    },
    /// Print the resolved configuration with secrets redacted
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = chdist_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            names,
            location,
            nearest_first,
            keep_going,
        } => {
            let options = search::SearchOptions {
                location: location.or_else(|| config.location_filter.clone()),
                nearest_first,
                keep_going,
            };
            search::run_search(&config, &names, &options).await?;
        }
        Commands::Config => println!("{config:#?}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
