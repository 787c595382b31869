mod config;

use anyhow::{Result, bail};
use clap::Parser;
use docs_sync::{FileFilter, SyncError, SyncOptions, SyncOutcome, SyncReport};
use docs_sync_github::{GitHubDocsClient, GitHubDocsConfig};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "docs-sync", version)]
#[command(about = "Sync markdown documentation from a GitHub repository")]
struct Cli {
    /// Overwrite files that already exist locally
    #[arg(short, long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    println!("Syncing documentation from {}...", config.repo_url());
    if config.has_token() {
        println!("Using GitHub authentication");
    }
    println!();

    let client = GitHubDocsClient::new(GitHubDocsConfig {
        owner: config.owner.clone(),
        repo: config.repo.clone(),
        branch: config.branch.clone(),
        token: config.token.clone(),
        api_base_url: None,
    });
    let filter = FileFilter::new(config.extensions.iter().cloned());
    let options = SyncOptions {
        target_dir: config.target_dir.clone(),
        remote_path: config.docs_path.clone(),
        force: cli.force,
    };

    let report = match docs_sync::sync(&client, &filter, &options).await {
        Ok(report) => report,
        Err(err) => {
            if let SyncError::List(inner) = &err
                && inner.is_not_found()
            {
                eprintln!("error: {inner}");
                for hint in not_found_hints(&config) {
                    eprintln!("  - {hint}");
                }
                std::process::exit(1);
            }
            return Err(err.into());
        }
    };

    for item in &report.feedback {
        if item.is_info() {
            println!("{item}");
        } else {
            eprintln!("{item}");
        }
    }

    print_summary(&report, &config);

    if report.has_errors() {
        bail!("{} file(s) failed to download", report.errors());
    }
    Ok(())
}

/// Remediation steps for a 404 from the listing endpoint.
fn not_found_hints(config: &Config) -> Vec<String> {
    vec![
        format!("verify the repository exists: {}", config.repo_url()),
        format!(
            "make sure '{}' has been pushed to the '{}' branch",
            config.docs_path, config.branch
        ),
        "if the repository is private, set GITHUB_TOKEN".to_owned(),
    ]
}

fn print_summary(report: &SyncReport, config: &Config) {
    println!();
    println!("Summary:");
    println!("  downloaded: {}", report.downloaded);
    if report.skipped > 0 {
        println!("  skipped:    {}", report.skipped);
    }
    if report.has_errors() {
        println!("  errors:     {}", report.errors());
        for failure in &report.failures {
            println!("    {}: {}", failure.file_name, failure.message);
        }
    }
    println!();

    match report.outcome() {
        SyncOutcome::Success => println!("Sync complete."),
        SyncOutcome::HasErrors => println!("Sync completed with errors."),
        SyncOutcome::NoChanges => println!("Nothing to sync."),
    }
    println!("Files are in ./{}", config.target_dir.display());
}
