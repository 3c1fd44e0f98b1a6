// Data models — the value objects that flow through the pipeline.
//
// Every type here is created by a single fetch/classify step, owned by the
// caller, and never mutated after construction. Field names mirror the
// platform's JSON so serialized reports stay tool-compatible.

use serde::{Deserialize, Serialize};

/// Identity snapshot of one account at fetch time.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub username: String,
    /// Platform-assigned opaque id. Always present on a constructed
    /// Profile — a response without one is a fetch failure, because the
    /// timeline lookup is keyed on it.
    pub user_id: String,
    pub verified: bool,
    pub is_blue_verified: bool,
    pub followers_count: u64,
    pub following_count: u64,
    pub tweet_count: u64,
    pub account_created: Option<String>,
    pub profile_image: Option<String>,
    /// When this snapshot was taken (RFC 3339).
    pub last_checked: String,
}

/// One timeline entry — a post authored, retweeted, replied, or quoted
/// by the account.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub activity_id: Option<String>,
    pub text: String,
    pub created_at: Option<String>,
    pub retweet_count: u64,
    pub favorite_count: u64,
    pub reply_count: u64,
    pub quote_count: u64,
    pub is_retweet: bool,
    pub is_reply: bool,
}

/// Classification result for one raider against one target post.
///
/// At most one of `retweeted`/`quoted`/`replied` is true — the first
/// matching timeline entry decides the category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Interactions {
    pub retweeted: bool,
    pub quoted: bool,
    pub replied: bool,
    /// Always false: the platform API cannot report like-interactions for
    /// arbitrary viewers. Report consumers should read this as "unknown",
    /// not as a verified non-like.
    pub liked: bool,
    /// `verified || is_blue_verified` from the profile.
    pub profile_verified: bool,
    /// `created_at` of the matching timeline entry, if any.
    pub last_activity: Option<String>,
}

/// Outcome of one raider's verification: either a classification, or an
/// explicit failure when the profile could not be fetched.
///
/// Serialized untagged, so a failure is exactly `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Verification {
    Verified(Interactions),
    Failed { error: String },
}

impl Verification {
    /// The interactions, if verification produced any.
    pub fn interactions(&self) -> Option<&Interactions> {
        match self {
            Verification::Verified(i) => Some(i),
            Verification::Failed { .. } => None,
        }
    }

    /// Whether the raider engaged with the target at all
    /// (retweet, quote, or reply). Failed verifications count as inactive.
    pub fn is_active(&self) -> bool {
        self.interactions()
            .map(|i| i.retweeted || i.quoted || i.replied)
            .unwrap_or(false)
    }

    /// Whether the raider's account is platform-verified.
    /// Failed verifications count as unverified.
    pub fn is_profile_verified(&self) -> bool {
        self.interactions()
            .map(|i| i.profile_verified)
            .unwrap_or(false)
    }
}

/// One (username, target post) pair to verify. Batches load these from a
/// JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaidTarget {
    pub username: String,
    pub target_post_url: String,
}

/// Outcome for one raider. Produced exactly once per raider per batch run;
/// immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationRecord {
    pub username: String,
    pub target_post_url: String,
    pub verification: Verification,
    /// When this record was produced (RFC 3339).
    pub timestamp: String,
}

/// Aggregate over a batch run.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Report date (YYYY-MM-DD).
    pub date: String,
    pub total_raiders: usize,
    /// Raiders whose account is platform-verified.
    pub verified_accounts: usize,
    /// Raiders with any retweet/quote/reply on the target.
    pub active_raiders: usize,
    /// Percentage of verified accounts (0.0 when the batch is empty).
    pub verification_rate: f64,
    /// Percentage of active raiders (0.0 when the batch is empty).
    pub activity_rate: f64,
    /// Per-raider records, in input order.
    pub detailed_results: Vec<VerificationRecord>,
}
