//! Backend HTTP client

mod backend;

pub use backend::BackendClient;

use crate::error::MemdashResult;
use crate::memory::{ForgetAck, ForgetRequest, MemoryDocument};
use async_trait::async_trait;

/// Seam over the two backend endpoints.
///
/// `BackendClient` is the production implementation; the CLI command loop
/// is tested against a mock of this trait.
#[async_trait]
pub trait MemoryBackend: Send + Sync {
    /// Fetch the current memory document.
    async fn fetch_memory(&self) -> MemdashResult<MemoryDocument>;

    /// Forget a single item. Callers re-fetch after a successful forget;
    /// this method never re-fetches on its own.
    async fn forget(&self, request: &ForgetRequest) -> MemdashResult<ForgetAck>;
}
