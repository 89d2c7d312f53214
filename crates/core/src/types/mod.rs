//! Shared types for the chat service.
//!
//! This module contains the request/response values for the three chat
//! operations and the error taxonomy used across the crate.

pub mod errors;
pub mod requests;
pub mod responses;

// Re-export common types
pub use errors::{ChatError, ChatResult, ErrorCode};
pub use requests::*;
pub use responses::*;

/// Identifier type shared by chats and messages. Always non-negative once
/// it has passed through the normalizer.
pub type ChatId = i64;
