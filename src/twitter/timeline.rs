// Timeline fetching — recent activity for one account.
//
// The timeline response is a list of rendering instructions, not a flat
// list of posts. Only `TimelineAddEntries` instructions contribute, and
// within them only entries whose id starts with `tweet-` (the rest are
// cursors and gap markers). Entries without extractable tweet data are
// skipped silently — a partial page is better than no page.
//
// Order is preserved as returned (most-recent-first, per the platform's
// convention). Classification takes the first match, so order matters.

use serde_json::Value;
use tracing::{debug, warn};

use crate::gateway::{ApiGateway, ENDPOINT_USER_TWEETS};
use crate::models::Activity;

/// Fetch an account's recent timeline entries.
///
/// Never errors: any gateway failure or unexpected response shape yields
/// an empty vec. Callers cannot distinguish "no activity" from "fetch
/// failed" — the warn log is the only trace of the latter.
pub async fn fetch_activities(
    gateway: &dyn ApiGateway,
    user_id: &str,
    count: usize,
) -> Vec<Activity> {
    let count_str = count.to_string();
    let response = match gateway
        .invoke(
            ENDPOINT_USER_TWEETS,
            &[("user", user_id), ("count", &count_str)],
        )
        .await
    {
        Ok(value) => value,
        Err(e) => {
            warn!(user_id = user_id, error = %e, "Timeline request failed");
            return Vec::new();
        }
    };

    let activities = extract_timeline_entries(&response);

    debug!(
        user_id = user_id,
        count = activities.len(),
        "Fetched timeline entries"
    );

    activities
}

/// Walk a timeline response and pull out the actual posts.
///
/// Also used by search, whose results carry the same instruction-list
/// shape when the gateway returns one.
pub fn extract_timeline_entries(response: &Value) -> Vec<Activity> {
    let mut activities = Vec::new();

    let instructions = match response
        .pointer("/result/timeline/instructions")
        .and_then(Value::as_array)
    {
        Some(list) => list,
        None => return activities,
    };

    for instruction in instructions {
        if instruction.get("type").and_then(Value::as_str) != Some("TimelineAddEntries") {
            continue;
        }

        let entries = instruction
            .get("entries")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for entry in entries {
            // Cursor and gap entries share the list with posts; only
            // `tweet-` ids denote an actual post.
            let entry_id = entry.get("entryId").and_then(Value::as_str).unwrap_or("");
            if !entry_id.starts_with("tweet-") {
                continue;
            }

            let tweet = match entry.pointer("/content/itemContent/tweet_results/result") {
                Some(t) => t,
                None => continue,
            };

            let legacy = match tweet.get("legacy") {
                Some(l) => l,
                None => continue,
            };

            activities.push(Activity {
                activity_id: legacy
                    .get("id_str")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                text: legacy
                    .get("full_text")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
                created_at: legacy
                    .get("created_at")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                retweet_count: counter(legacy, "retweet_count"),
                favorite_count: counter(legacy, "favorite_count"),
                reply_count: counter(legacy, "reply_count"),
                quote_count: counter(legacy, "quote_count"),
                // Retweets carry the wrapped original; replies carry the
                // id of the post they answer. An empty wrapper object or
                // empty id string marks neither.
                is_retweet: legacy
                    .get("retweeted_status_result")
                    .map(truthy)
                    .unwrap_or(false),
                is_reply: legacy
                    .get("in_reply_to_status_id_str")
                    .map(truthy)
                    .unwrap_or(false),
            });
        }
    }

    activities
}

fn counter(legacy: &Value, field: &str) -> u64 {
    legacy.get(field).and_then(Value::as_u64).unwrap_or(0)
}

/// Whether a JSON value carries content: null, `false`, `0`, `""`, `[]`,
/// and `{}` all count as absent.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
