// Batch coordinator — drives profile fetch, timeline fetch, and
// classification across a list of raiders under the external rate limit.
//
// Strictly sequential by design: the remote API penalizes bursts, so we
// trade latency for request-budget safety. One raider at a time, a fixed
// pause between raiders, results in input order.

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::gateway::ApiGateway;
use crate::models::{RaidTarget, Report, Verification, VerificationRecord};
use crate::twitter::{profiles, timeline};
use crate::verify::classify;
use crate::verify::pacing::Pacer;

/// Recorded when a raider's profile cannot be fetched. Kept stable —
/// downstream tooling matches on it.
const PROFILE_ERROR: &str = "Could not fetch raider profile";

/// The verification coordinator.
///
/// Holds the gateway and pacing configuration explicitly — one instance
/// per run, no process-wide state. Each raider's verification is
/// independent; nothing is shared across them but the pacer.
pub struct RaidVerifier<'a> {
    gateway: &'a dyn ApiGateway,
    pacer: Pacer,
    timeline_depth: usize,
}

impl<'a> RaidVerifier<'a> {
    /// Create a coordinator with an explicit inter-raider delay and
    /// timeline depth.
    pub fn new(gateway: &'a dyn ApiGateway, rate_limit_delay: Duration, timeline_depth: usize) -> Self {
        Self {
            gateway,
            pacer: Pacer::fixed(rate_limit_delay),
            timeline_depth,
        }
    }

    /// Create a coordinator from loaded configuration.
    pub fn from_config(gateway: &'a dyn ApiGateway, config: &Config) -> Self {
        Self::new(gateway, config.rate_limit_delay, config.timeline_depth)
    }

    /// Verify whether one raider interacted with a target post.
    ///
    /// A failed profile fetch short-circuits the whole verification —
    /// without a user id there is no timeline to scan — and yields the
    /// explicit failure variant instead of an Interactions value. A failed
    /// or empty timeline fetch is *not* a failure: it classifies as "no
    /// evidence of activity found".
    pub async fn verify_raider_activity(
        &self,
        username: &str,
        target_post_url: &str,
    ) -> Verification {
        let target_id = classify::target_post_id(target_post_url);

        let profile = match profiles::fetch_profile(self.gateway, username).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(username = username, error = %e, "Profile fetch failed, skipping raider");
                return Verification::Failed {
                    error: PROFILE_ERROR.to_string(),
                };
            }
        };

        let activities =
            timeline::fetch_activities(self.gateway, &profile.user_id, self.timeline_depth).await;

        Verification::Verified(classify::classify(target_id, &activities, &profile))
    }

    /// Verify a batch of raiders, pacing between them.
    ///
    /// Raiders are processed strictly in input order, one at a time.
    /// After completing each raider except the last, the coordinator
    /// sleeps the full fixed delay — time spent fetching never shortens
    /// the pause. N raiders, N-1 pauses, no trailing pause. Per-raider
    /// failures are recorded, never fatal.
    pub async fn batch_verify_raiders(&self, raiders: &[RaidTarget]) -> Vec<VerificationRecord> {
        let mut results = Vec::with_capacity(raiders.len());

        let pb = ProgressBar::new(raiders.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Verifying [{bar:30}] {pos}/{len} ({eta})")
                .unwrap(),
        );

        for (i, raider) in raiders.iter().enumerate() {
            info!(
                raider = raider.username,
                position = i + 1,
                total = raiders.len(),
                "Verifying raider"
            );

            let verification = self
                .verify_raider_activity(&raider.username, &raider.target_post_url)
                .await;

            results.push(VerificationRecord {
                username: raider.username.clone(),
                target_post_url: raider.target_post_url.clone(),
                verification,
                timestamp: chrono::Utc::now().to_rfc3339(),
            });

            pb.inc(1);

            if i + 1 < raiders.len() {
                self.pacer.pause().await;
            }
        }
        pb.finish_and_clear();

        results
    }

    /// Run a batch and aggregate the outcome into a daily report.
    ///
    /// Failed verifications count as neither verified nor active. An empty
    /// raider list yields a well-formed zero-rate report, not an error.
    pub async fn generate_daily_report(&self, raiders: &[RaidTarget]) -> Report {
        let detailed_results = self.batch_verify_raiders(raiders).await;

        let total_raiders = detailed_results.len();
        let verified_accounts = detailed_results
            .iter()
            .filter(|r| r.verification.is_profile_verified())
            .count();
        let active_raiders = detailed_results
            .iter()
            .filter(|r| r.verification.is_active())
            .count();

        let rate = |count: usize| {
            if total_raiders > 0 {
                count as f64 / total_raiders as f64 * 100.0
            } else {
                0.0
            }
        };

        Report {
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            total_raiders,
            verified_accounts,
            active_raiders,
            verification_rate: rate(verified_accounts),
            activity_rate: rate(active_raiders),
            detailed_results,
        }
    }
}
