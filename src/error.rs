// Typed errors for the fetch boundary.
//
// Fetch failures are values, not exceptions: the profile fetcher returns
// a ProfileFetchError that the coordinator pattern-matches on, and the
// timeline fetcher degrades to an empty list instead of erroring at all.
// Transport-level failures from the gateway never cross this boundary.

use thiserror::Error;

/// Why a raider's profile could not be fetched.
///
/// Either variant is terminal for that raider's verification (the timeline
/// fetch needs the profile's `user_id`), but never fatal to a batch — the
/// coordinator records the failure and moves on.
#[derive(Debug, Error)]
pub enum ProfileFetchError {
    /// The API returned nothing for this username (null/empty response,
    /// or a response without a user id).
    #[error("no profile found for @{0}")]
    NotFound(String),

    /// The API returned something, but not in the expected shape.
    #[error("malformed profile response for @{0}")]
    MalformedResponse(String),
}
