//! Service layer for the chat operations.

pub mod chat_service;

// Re-export the service
pub use chat_service::ChatService;
