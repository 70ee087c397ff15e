//! Memory document wire types
//!
//! The memory document is owned entirely by the backend; the types here are
//! a tolerant snapshot of its JSON shape plus the body of the forget
//! operation.

mod document;
mod forget;

pub use document::{MemoryDocument, Note};
pub use forget::{ForgetAck, ForgetCategory, ForgetRequest};
