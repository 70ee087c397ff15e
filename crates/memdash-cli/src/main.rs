//! memdash CLI application
//!
//! Terminal dashboard for an assistant memory backend.
//!
//! # CLI overview
//!
//! - `memdash`                        # Interactive dashboard (default)
//! - `memdash show`                   # Fetch and render once
//! - `memdash show --json`            # Print the document as JSON
//! - `memdash forget profile --key name`
//! - `memdash forget notes --index 2`
//! - `memdash config init|show|validate`
//!
//! The backend owns the memory document; every view here is a fresh
//! snapshot of `GET /memory`, and every forget is a `POST /forget`
//! followed by a re-fetch.

mod args;
mod commands;
mod console;
mod router;

use clap::Parser;
use memdash_core::error::MemdashResult;

#[tokio::main]
async fn main() -> MemdashResult<()> {
    let cli = args::Cli::parse();
    router::route(cli).await
}
