//! # Based-Chat Core Crate
//!
//! This crate provides the transport-agnostic core of the based-chat stub
//! service: the request/response contract for the three chat operations,
//! the validating service handler, and identifier synthesis.
//!
//! ## Architecture
//!
//! - **Types**: request/response values and the error taxonomy
//! - **Services**: the validating [`ChatService`] handler
//! - **Idgen**: raw id sources and the sign normalizer
//!
//! The service is a stub: nothing is stored, ids are synthesized from an
//! injected random source, and every call is independent of every other.

pub mod idgen;
pub mod services;
pub mod types;

// Re-export main types for convenience
pub use idgen::{normalize, IdSource, ThreadRngIdSource};
pub use services::ChatService;
pub use types::{
    ChatError, ChatId, ChatRequest, ChatResponse, ChatResult, CreateChatRequest,
    CreateChatResponse, DeleteChatRequest, DeleteChatResponse, ErrorCode, SendMessageRequest,
    SendMessageResponse,
};
