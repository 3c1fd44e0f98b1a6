// Free-text post search.
//
// Not part of the verification flow (which reads each raider's own
// timeline), but useful for spot-checking what a raid looks like from the
// outside. Same graceful-empty contract as the timeline fetcher.

use tracing::{debug, warn};

use crate::gateway::{ApiGateway, ENDPOINT_SEARCH};
use crate::models::Activity;
use crate::twitter::timeline::extract_timeline_entries;

/// Search recent posts matching a free-text query.
///
/// Returns an empty vec on any gateway failure or when the response
/// carries no recognizable timeline structure.
pub async fn search_posts(gateway: &dyn ApiGateway, query: &str) -> Vec<Activity> {
    let response = match gateway.invoke(ENDPOINT_SEARCH, &[("q", query)]).await {
        Ok(value) => value,
        Err(e) => {
            warn!(query = query, error = %e, "Search request failed");
            return Vec::new();
        }
    };

    let activities = extract_timeline_entries(&response);

    debug!(query = query, count = activities.len(), "Search results");

    activities
}
