// Platform fetchers — normalize raw data API responses into Profile and
// Activity records. Each fetcher owns the defensive extraction for its
// endpoint; gateway errors never escape this module.

pub mod profiles;
pub mod search;
pub mod timeline;
