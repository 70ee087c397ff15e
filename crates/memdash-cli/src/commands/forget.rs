//! Forget command implementation

use super::{fetch_document, OFFLINE_MESSAGE};
use crate::args::CategoryArg;
use crate::console::CliConsole;
use memdash_core::client::MemoryBackend;
use memdash_core::error::{MemdashError, MemdashResult};
use memdash_core::memory::{ForgetCategory, ForgetRequest};
use memdash_core::render::render_document;

/// Forget one item, then re-fetch and render the updated dashboard.
pub async fn execute(
    backend: &dyn MemoryBackend,
    category: CategoryArg,
    key: Option<String>,
    index: Option<usize>,
    yes: bool,
    verbose: bool,
) -> MemdashResult<()> {
    let console = CliConsole::new(verbose);
    let request = build_request(category.into(), key, index)?;

    if !yes {
        let confirmed = console.confirm(&format!("Forget {}?", request.describe()))?;
        if !confirmed {
            console.info("Aborted, nothing forgotten");
            return Ok(());
        }
    }

    backend.forget(&request).await?;
    console.success(&format!("Forgot {}", request.describe()));

    // Show the post-deletion snapshot
    let document = match fetch_document(&console, backend).await {
        Ok(document) => document,
        Err(e) => {
            console.error(OFFLINE_MESSAGE);
            return Err(e);
        }
    };
    console.print_dashboard(&render_document(&document));
    Ok(())
}

/// Pair the category with its selector, rejecting mismatches before any
/// request is sent.
fn build_request(
    category: ForgetCategory,
    key: Option<String>,
    index: Option<usize>,
) -> MemdashResult<ForgetRequest> {
    match (category.is_keyed(), key, index) {
        (true, Some(key), None) => Ok(ForgetRequest::key(category, key)),
        (true, None, _) => Err(MemdashError::invalid_input(format!(
            "{} entries are addressed by key; pass --key <name>",
            category
        ))),
        (true, Some(_), Some(_)) => Err(MemdashError::invalid_input(
            "Pass either --key or --index, not both",
        )),
        (false, None, Some(index)) => Ok(ForgetRequest::note_index(index)),
        (false, _, None) => Err(MemdashError::invalid_input(
            "Notes are addressed by position; pass --index <n>",
        )),
        (false, Some(_), Some(_)) => Err(MemdashError::invalid_input(
            "Notes are addressed by position; pass --index <n> without --key",
        )),
    }
}
