//! One-shot dashboard rendering

use super::{fetch_document, OFFLINE_MESSAGE};
use crate::console::CliConsole;
use memdash_core::client::MemoryBackend;
use memdash_core::error::MemdashResult;
use memdash_core::render::render_document;

/// Fetch the memory document once and render it.
pub async fn execute(backend: &dyn MemoryBackend, json: bool, verbose: bool) -> MemdashResult<()> {
    let console = CliConsole::new(verbose);

    let document = match fetch_document(&console, backend).await {
        Ok(document) => document,
        Err(e) => {
            console.error(OFFLINE_MESSAGE);
            console.info(&format!("Cause: {e}"));
            return Err(e);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    console.print_dashboard(&render_document(&document));
    console.info(&format!("{} items total", document.item_count()));
    Ok(())
}
