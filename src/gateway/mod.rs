// External data API boundary — the opaque `invoke` primitive and its
// HTTP implementation.

pub mod client;
pub mod traits;

pub use client::DataApiClient;
pub use traits::ApiGateway;

/// Profile lookup by username. Query: `username`.
pub const ENDPOINT_USER_PROFILE: &str = "Twitter/get_user_profile_by_username";

/// Recent timeline by user id. Query: `user`, `count`.
pub const ENDPOINT_USER_TWEETS: &str = "Twitter/get_user_tweets";

/// Free-text post search. Query: `q`.
pub const ENDPOINT_SEARCH: &str = "Twitter/search_twitter";
