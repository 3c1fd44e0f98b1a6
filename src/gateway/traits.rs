// API gateway trait — the swap-ready abstraction over the platform API.
//
// Everything the pipeline knows about the external data API is this one
// call. The default implementation goes over HTTP (DataApiClient); tests
// substitute canned JSON fixtures.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A single call into the external social-platform data API.
///
/// `endpoint` selects the operation (see the constants in `gateway`);
/// `params` are query key-value pairs. The returned structure is opaque
/// JSON — callers own the defensive extraction, and must treat an `Err`
/// the same as a null/malformed response (graceful degradation, never
/// propagation past the fetcher boundary).
#[async_trait]
pub trait ApiGateway: Send + Sync {
    async fn invoke(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value>;
}
