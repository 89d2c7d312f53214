//! Response types for the chat service.

use serde::{Deserialize, Serialize};

use super::ChatId;

/// Response to a successful chat creation. `id` is always non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatResponse {
    pub id: ChatId,
}

/// Response to a successful message send. `id` is a synthesized
/// acknowledgment id, non-negative and unrelated to the chat id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub id: ChatId,
}

/// Empty confirmation of a chat deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteChatResponse {}

/// Response variants matching [`super::requests::ChatRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ChatResponse {
    CreateChat(CreateChatResponse),
    SendMessage(SendMessageResponse),
    DeleteChat(DeleteChatResponse),
}
