use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use raidwatch::config::Config;
use raidwatch::gateway::DataApiClient;
use raidwatch::models::RaidTarget;
use raidwatch::output::terminal;
use raidwatch::verify::RaidVerifier;

/// Raidwatch: raid engagement verification for X/Twitter communities.
///
/// Checks whether a list of accounts actually engaged with a target post
/// (retweet, quote, or reply) and produces a verification report.
#[derive(Parser)]
#[command(name = "raidwatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a single raider against a target post
    Verify {
        /// The raider's username (without @)
        username: String,

        /// URL of the post to check (e.g. https://x.com/user/status/123...)
        target_post_url: String,
    },

    /// Verify a batch of raiders from a JSON file
    Batch {
        /// JSON file: [{"username": "...", "target_post_url": "..."}, ...]
        file: String,

        /// Seconds to wait between raiders (overrides RAID_RATE_LIMIT_DELAY)
        #[arg(long)]
        delay: Option<u64>,
    },

    /// Run a batch and print the aggregated daily report
    Report {
        /// JSON file: [{"username": "...", "target_post_url": "..."}, ...]
        file: String,

        /// Seconds to wait between raiders (overrides RAID_RATE_LIMIT_DELAY)
        #[arg(long)]
        delay: Option<u64>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("raidwatch=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    config.require_api()?;
    let gateway = DataApiClient::new(&config.api_url, &config.api_key)?;

    match cli.command {
        Commands::Verify {
            username,
            target_post_url,
        } => {
            let verifier = RaidVerifier::from_config(&gateway, &config);
            let verification = verifier
                .verify_raider_activity(&username, &target_post_url)
                .await;
            terminal::display_verification(&username, &target_post_url, &verification);
        }

        Commands::Batch { file, delay } => {
            if let Some(secs) = delay {
                config.rate_limit_delay = std::time::Duration::from_secs(secs);
            }
            let raiders = load_raiders(&file)?;
            println!(
                "Verifying {} raiders ({}s between requests)...",
                raiders.len(),
                config.rate_limit_delay.as_secs()
            );

            let verifier = RaidVerifier::from_config(&gateway, &config);
            let records = verifier.batch_verify_raiders(&raiders).await;
            for record in &records {
                terminal::display_verification(
                    &record.username,
                    &record.target_post_url,
                    &record.verification,
                );
            }
        }

        Commands::Report { file, delay, json } => {
            if let Some(secs) = delay {
                config.rate_limit_delay = std::time::Duration::from_secs(secs);
            }
            let raiders = load_raiders(&file)?;
            println!(
                "Generating report for {} raiders ({}s between requests)...",
                raiders.len(),
                config.rate_limit_delay.as_secs()
            );

            let verifier = RaidVerifier::from_config(&gateway, &config);
            let report = verifier.generate_daily_report(&raiders).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }
    }

    Ok(())
}

/// Load the raider list from a JSON file.
fn load_raiders(path: &str) -> Result<Vec<RaidTarget>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read raider list from {path}"))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse raider list in {path}"))
}
