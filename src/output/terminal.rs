// Colored terminal output for verification results and daily reports.
//
// This module handles all terminal-specific formatting: colors, tables,
// summary lines. The main.rs display paths delegate here.

use colored::Colorize;

use crate::models::{Interactions, Report, Verification, VerificationRecord};

/// Display a full daily report: summary header, rates, per-raider rows.
pub fn display_report(report: &Report) {
    println!(
        "\n{}",
        format!(
            "=== Raid Report {} ({} raiders) ===",
            report.date, report.total_raiders
        )
        .bold()
    );
    println!();

    println!(
        "  Verified accounts: {:>4}  ({:.1}%)",
        report.verified_accounts, report.verification_rate
    );
    println!(
        "  Active raiders:    {:>4}  ({:.1}%)",
        report.active_raiders, report.activity_rate
    );
    println!();

    if report.detailed_results.is_empty() {
        println!("  No raiders in this batch.");
        return;
    }

    // Header
    println!(
        "  {:<24} {:<10}  {:<8}  {:<20}",
        "Username".dimmed(),
        "Result".dimmed(),
        "Account".dimmed(),
        "Last activity".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for record in &report.detailed_results {
        display_record_row(record);
    }
    println!();
}

/// Display one raider's record as a table row.
fn display_record_row(record: &VerificationRecord) {
    match &record.verification {
        Verification::Verified(interactions) => {
            let account = if interactions.profile_verified {
                "verified".green()
            } else {
                "-".normal()
            };
            println!(
                "  @{:<23} {:<10}  {:<8}  {:<20}",
                record.username,
                category_label(interactions),
                account,
                interactions.last_activity.as_deref().unwrap_or("-"),
            );
        }
        Verification::Failed { error } => {
            println!(
                "  @{:<23} {}",
                record.username,
                format!("error: {error}").red()
            );
        }
    }
}

/// Display a single raider's verification in detail.
pub fn display_verification(username: &str, target_post_url: &str, verification: &Verification) {
    println!(
        "\n{}",
        format!("=== Verification for @{username} ===").bold()
    );
    println!(
        "  Target: {}",
        super::truncate_chars(target_post_url, 60).dimmed()
    );

    match verification {
        Verification::Verified(interactions) => {
            println!("  Interaction: {}", category_label(interactions));
            println!(
                "  Account verified: {}",
                yes_no(interactions.profile_verified)
            );
            if let Some(last) = &interactions.last_activity {
                println!("  Last activity: {last}");
            }
            // The API can't observe likes for arbitrary viewers.
            println!("  Likes: {}", "unknown (not observable via API)".dimmed());
        }
        Verification::Failed { error } => {
            println!("  {}", error.red());
        }
    }
    println!();
}

/// Human label for the interaction category, colored by outcome.
fn category_label(interactions: &Interactions) -> colored::ColoredString {
    if interactions.retweeted {
        "retweeted".green()
    } else if interactions.replied {
        "replied".green()
    } else if interactions.quoted {
        "quoted".green()
    } else {
        "none".yellow()
    }
}

fn yes_no(value: bool) -> colored::ColoredString {
    if value {
        "yes".green()
    } else {
        "no".normal()
    }
}
