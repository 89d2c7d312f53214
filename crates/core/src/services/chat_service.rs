//! Chat service implementing the request validation contract.

use crate::idgen::{normalize, IdSource, ThreadRngIdSource};
use crate::types::{
    ChatError, ChatRequest, ChatResponse, ChatResult, CreateChatRequest, CreateChatResponse,
    DeleteChatRequest, DeleteChatResponse, SendMessageRequest, SendMessageResponse,
};

/// Minimum number of participants required to create a chat.
const MIN_CHAT_USERS: usize = 2;

/// Stateless handler for the three chat operations.
///
/// Each call validates its request against the contract and either mints a
/// fresh identifier from the injected source or fails with a [`ChatError`].
/// Nothing is stored between calls; concurrent invocations are independent.
pub struct ChatService<S: IdSource = ThreadRngIdSource> {
    ids: S,
}

impl ChatService<ThreadRngIdSource> {
    /// Create a service backed by the thread-local rng.
    pub fn new() -> Self {
        Self::with_source(ThreadRngIdSource)
    }
}

impl Default for ChatService<ThreadRngIdSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdSource> ChatService<S> {
    /// Create a service over an explicit id source.
    pub fn with_source(ids: S) -> Self {
        Self { ids }
    }

    /// Create a new chat for the given usernames and return its synthesized
    /// id. Fails with `not enough users` when fewer than two usernames are
    /// supplied. Usernames themselves are not validated.
    pub fn create_chat(&self, request: &CreateChatRequest) -> ChatResult<CreateChatResponse> {
        if request.usernames.len() < MIN_CHAT_USERS {
            return Err(ChatError::NotEnoughUsers);
        }

        Ok(CreateChatResponse { id: self.mint_id() })
    }

    /// Accept a message for a chat and return a synthesized acknowledgment
    /// id. Predicates run in order: non-negative chat id, non-empty sender,
    /// non-empty message; the first failure wins.
    pub fn send_message(&self, request: &SendMessageRequest) -> ChatResult<SendMessageResponse> {
        if request.chat_id < 0 {
            return Err(ChatError::InvalidId);
        }

        if request.sender.is_empty() {
            return Err(ChatError::EmptySender);
        }

        if request.message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        Ok(SendMessageResponse { id: self.mint_id() })
    }

    /// Delete a chat by id. Any non-negative id succeeds; the stub keeps no
    /// record of created chats, so there is no existence check.
    pub fn delete_chat(&self, request: &DeleteChatRequest) -> ChatResult<DeleteChatResponse> {
        if request.id < 0 {
            return Err(ChatError::InvalidId);
        }

        Ok(DeleteChatResponse {})
    }

    /// Dispatch a tagged request to its operation.
    pub fn handle(&self, request: &ChatRequest) -> ChatResult<ChatResponse> {
        match request {
            ChatRequest::CreateChat(req) => self.create_chat(req).map(ChatResponse::CreateChat),
            ChatRequest::SendMessage(req) => self.send_message(req).map(ChatResponse::SendMessage),
            ChatRequest::DeleteChat(req) => self.delete_chat(req).map(ChatResponse::DeleteChat),
        }
    }

    fn mint_id(&self) -> i64 {
        normalize(self.ids.next_raw())
    }
}
