use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use openbiolink_causal::config::Config;
use openbiolink_causal::constants::DEFAULT_CONFIG_PATH;
use openbiolink_causal::ingestion::{fetch_and_extract, ReqwestHttp};
use openbiolink_causal::logging;
use openbiolink_causal::mapper::{filter_and_map, MapSummary};
use openbiolink_causal::vocabulary::Vocabulary;

#[derive(Parser)]
#[command(name = "openbiolink_causal")]
#[command(about = "Builds a signed causal relation table from the OpenBioLink high-quality edges")]
#[command(version = "0.1.0")]
struct Cli {
    /// Optional TOML file overriding the built-in URL, paths and vocabulary
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the OpenBioLink archive and unpack it
    Fetch {
        /// Archive URL
        #[arg(long)]
        url: Option<String>,
        /// Directory to unpack into
        #[arg(long)]
        dest: Option<PathBuf>,
    },
    /// Filter an edge file to causal types and write the signed relation table
    Map {
        /// Tab-separated OpenBioLink edge file
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output table
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Fetch, then map the extracted edge file
    Run {
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        dest: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn fetch(url: &str, dest: &Path) -> Result<()> {
    let http = ReqwestHttp::new().context("Failed to build HTTP client")?;
    let summary = fetch_and_extract(&http, url, dest)
        .with_context(|| format!("Failed to fetch archive from {url}"))?;
    println!(
        "📦 Extracted {} files ({} bytes) into {}",
        summary.files,
        summary.uncompressed_bytes,
        dest.display()
    );
    Ok(())
}

fn map(input: &Path, output: &Path, vocab: &Vocabulary) -> Result<MapSummary> {
    let summary = filter_and_map(input, output, vocab)
        .with_context(|| format!("Failed to map edges from {}", input.display()))?;
    println!("\n📊 Mapping results:");
    println!("   Edges read: {}", summary.filter.total);
    println!("   Causal edges written: {}", summary.written);
    println!("   Blacklisted dropped: {}", summary.filter.blacklisted);
    println!(
        "   Unrecognized dropped: {}",
        summary.filter.unrecognized_rows()
    );
    if summary.unmapped > 0 {
        println!("   ⚠️  Written without polarity: {}", summary.unmapped);
    }
    println!("   Output file: {}", output.display());
    Ok(summary)
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    match cli.command {
        Commands::Fetch { url, dest } => {
            let url = url.unwrap_or_else(|| config.source.url.clone());
            let dest = dest.unwrap_or_else(|| config.paths.extract_dir.clone());
            fetch(&url, &dest)?;
        }
        Commands::Map { input, output } => {
            let vocab = config.vocabulary()?;
            let input = input.unwrap_or_else(|| config.edges_path());
            let output = output.unwrap_or_else(|| config.paths.output.clone());
            map(&input, &output, &vocab)?;
        }
        Commands::Run { url, dest, output } => {
            // Validate the vocabulary before spending time on the download
            let vocab = config.vocabulary()?;
            let url = url.unwrap_or_else(|| config.source.url.clone());
            let dest = dest.unwrap_or_else(|| config.paths.extract_dir.clone());
            let output = output.unwrap_or_else(|| config.paths.output.clone());

            println!("📥 Step 1: Fetching {url}");
            fetch(&url, &dest)?;

            println!("\n🔨 Step 2: Mapping edges");
            map(&dest.join(&config.paths.edges), &output, &vocab)?;
            info!("Pipeline finished");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("Run failed: {e:#}");
        return Err(e);
    }
    Ok(())
}
