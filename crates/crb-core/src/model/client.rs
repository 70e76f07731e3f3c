use async_trait::async_trait;

use super::types::{CompletionError, CompletionRequest};

/// Completion backend port.
///
/// Implementations own their transport details (HTTP payloads, auth); the
/// relay owns the request shape, the wall-clock bound, and the mapping of
/// failures to user-facing text. An `Ok` with an empty string means the
/// upstream call succeeded but generated no content.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        req: CompletionRequest,
    ) -> std::result::Result<String, CompletionError>;
}
