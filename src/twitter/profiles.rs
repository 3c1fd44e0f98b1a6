// Profile fetching — username to identity snapshot.
//
// The profile response nests the interesting fields several levels deep
// (`result.data.user.result`). Missing-but-expected leaf fields get
// documented defaults (0 for counters, false for verification flags) and
// never hard-fail; a missing user id does fail, because every downstream
// timeline lookup is keyed on it.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ProfileFetchError;
use crate::gateway::{ApiGateway, ENDPOINT_USER_PROFILE};
use crate::models::Profile;

/// Fetch a raider's profile by username.
///
/// Gateway/transport errors, null responses, and responses without the
/// expected nesting all come back as `ProfileFetchError` — non-fatal to a
/// batch, the coordinator records the failure and continues.
pub async fn fetch_profile(
    gateway: &dyn ApiGateway,
    username: &str,
) -> Result<Profile, ProfileFetchError> {
    let response = match gateway
        .invoke(ENDPOINT_USER_PROFILE, &[("username", username)])
        .await
    {
        Ok(value) => value,
        Err(e) => {
            warn!(username = username, error = %e, "Profile request failed");
            return Err(ProfileFetchError::NotFound(username.to_string()));
        }
    };

    if response.is_null() {
        return Err(ProfileFetchError::NotFound(username.to_string()));
    }

    // The user payload lives at result.data.user.result.
    let user = response
        .pointer("/result/data/user/result")
        .ok_or_else(|| ProfileFetchError::MalformedResponse(username.to_string()))?;

    let user_id = user
        .get("rest_id")
        .and_then(Value::as_str)
        .ok_or_else(|| ProfileFetchError::NotFound(username.to_string()))?
        .to_string();

    let legacy = user.get("legacy");

    let profile = Profile {
        username: username.to_string(),
        user_id,
        verified: user
            .pointer("/verification/verified")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        is_blue_verified: user
            .get("is_blue_verified")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        followers_count: count_field(legacy, "followers_count"),
        following_count: count_field(legacy, "friends_count"),
        tweet_count: count_field(legacy, "statuses_count"),
        account_created: user
            .pointer("/core/created_at")
            .and_then(Value::as_str)
            .map(str::to_string),
        profile_image: user
            .pointer("/avatar/image_url")
            .and_then(Value::as_str)
            .map(str::to_string),
        last_checked: chrono::Utc::now().to_rfc3339(),
    };

    debug!(
        username = username,
        user_id = profile.user_id,
        followers = profile.followers_count,
        "Fetched profile"
    );

    Ok(profile)
}

/// Extract a non-negative counter from the legacy block, defaulting to 0
/// when the block or field is missing.
fn count_field(legacy: Option<&Value>, field: &str) -> u64 {
    legacy
        .and_then(|l| l.get(field))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}
