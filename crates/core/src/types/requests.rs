//! Request types for the chat service.

use serde::{Deserialize, Serialize};

use super::ChatId;

/// Request to create a new chat for the given participants.
///
/// Usernames are taken as-is: they are not deduplicated and empty strings
/// are accepted. Only the participant count is validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatRequest {
    pub usernames: Vec<String>,
}

/// Request to send a message into a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub chat_id: ChatId,
    pub sender: String,
    pub message: String,
}

/// Request to delete a chat by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteChatRequest {
    pub id: ChatId,
}

/// Closed set of chat operations, tagged for single-point dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ChatRequest {
    CreateChat(CreateChatRequest),
    SendMessage(SendMessageRequest),
    DeleteChat(DeleteChatRequest),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_is_tagged_by_operation() {
        let request = ChatRequest::DeleteChat(DeleteChatRequest { id: 7 });

        let value = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(value["op"], "delete_chat");
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn send_message_request_round_trips_field_names() {
        let json = r#"{"op":"send_message","chat_id":3,"sender":"a","message":"hi"}"#;

        let parsed: ChatRequest = serde_json::from_str(json).expect("parse request");
        match parsed {
            ChatRequest::SendMessage(req) => {
                assert_eq!(req.chat_id, 3);
                assert_eq!(req.sender, "a");
                assert_eq!(req.message, "hi");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
