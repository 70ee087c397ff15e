//! CLI command implementations

pub mod config;
pub mod dashboard;
pub mod forget;
pub mod show;

use crate::console::CliConsole;
use memdash_core::client::MemoryBackend;
use memdash_core::error::MemdashResult;
use memdash_core::memory::MemoryDocument;

/// Message shown whenever the memory document cannot be loaded.
pub const OFFLINE_MESSAGE: &str = "Unable to load memory. Backend may be offline.";

/// Fetch the memory document with a spinner on the console.
pub(crate) async fn fetch_document(
    console: &CliConsole,
    backend: &dyn MemoryBackend,
) -> MemdashResult<MemoryDocument> {
    let spinner = console.loading("Loading memory…");
    let result = backend.fetch_memory().await;
    spinner.finish_and_clear();
    result
}
