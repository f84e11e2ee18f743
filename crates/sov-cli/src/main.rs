mod render;
mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Keywords searched when none are given on the command line.
const DEFAULT_KEYWORDS: &[&str] = &[
    "smart fan",
    "smart ceiling fan",
    "IoT ceiling fan",
    "Atomberg smart fan",
];

#[derive(Debug, Parser)]
#[command(name = "sov-cli")]
#[command(about = "Brand share-of-voice from web search results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search keywords, compute share of voice, and print recommendations
    Run {
        /// Keyword to search (repeatable). Defaults to the built-in fan keywords.
        #[arg(long = "keyword", short = 'k')]
        keywords: Vec<String>,

        /// Brand to track (repeatable). Overrides the brands file.
        #[arg(long = "brand", short = 'b')]
        brands: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List the brands in the configured roster
    Brands {
        #[arg(long, env = "SOV_BRANDS_PATH", default_value = "./config/brands.yaml")]
        path: PathBuf,
    },
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            keywords,
            brands,
            format,
        } => {
            let config = sov_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            let keywords = if keywords.is_empty() {
                DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect()
            } else {
                keywords
            };
            run::run_sov(&config, &keywords, &brands, format).await?;
        }
        Commands::Brands { path } => {
            init_tracing("info")?;
            let roster = sov_core::load_brands(&path)?;
            println!("{} brands in {}", roster.len(), path.display());
            for name in roster.iter() {
                println!("  {name}");
            }
        }
    }

    Ok(())
}
