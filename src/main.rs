use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cfpimport::models::RepoId;
use cfpimport::{Config, GitHubClient, ImportConfig, ImportPipeline};

#[derive(Parser, Debug)]
#[command(name = "cfpimport")]
#[command(version = "0.1.0")]
#[command(about = "Import CFP review scores into GitHub issue comments")]
struct Args {
    /// Path to the CFP review spreadsheet (.xlsx)
    #[arg(short, long)]
    file: PathBuf,

    /// Target repository as owner/name
    #[arg(short, long)]
    repo: String,

    /// GitHub login that posts the comments; issues it already commented on
    /// are skipped
    #[arg(short, long)]
    commenter: String,

    /// Maximum simultaneous comment requests
    #[arg(long, default_value = "10")]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "5")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("cfpimport=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;
    let repo: RepoId = args.repo.parse()?;

    let import_config = ImportConfig {
        commenter: args.commenter,
        spreadsheet: args.file,
        repo,
        concurrency_limit: args.concurrency,
        timeout_secs: args.timeout,
    };

    // Initialize the client and run the import
    let github = GitHubClient::new(&config.github_token, import_config.timeout_secs)?;
    let pipeline = ImportPipeline::new(github, import_config);

    let report = pipeline.run().await?;

    tracing::info!(
        "Import complete: {} matched, {} added, {} skipped",
        report.matched,
        report.added,
        report.skipped
    );

    Ok(())
}
