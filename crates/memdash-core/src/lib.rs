//! Memdash Core Library
//!
//! This crate provides the non-interactive half of the memdash dashboard:
//! the memory document wire types, the backend HTTP client, configuration
//! loading, and the document-to-rows rendering used by the CLI.

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod render;

// Re-export commonly used types
pub use client::{BackendClient, MemoryBackend};
pub use config::{BackendConfig, Config, LoggingConfig};
pub use error::{MemdashError, MemdashResult};
pub use memory::{ForgetAck, ForgetCategory, ForgetRequest, MemoryDocument, Note};
pub use render::{render_document, SectionView};
