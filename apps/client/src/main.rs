//! Demo client for the based-chat service.
//!
//! Connects to a running server, creates a chat with a few fake users,
//! sends one fake message, and deletes the chat again.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{distributions::Alphanumeric, Rng};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

const PHRASE_WORDS: &[&str] = &[
    "the", "quick", "silver", "chat", "protocol", "wire", "hums", "quietly", "over", "midnight",
    "sockets", "carrying", "stateless", "greetings", "between", "ephemeral", "sessions",
];

#[derive(Parser)]
#[command(name = "basedchat-client")]
#[command(about = "Demo client exercising the based-chat API")]
struct Cli {
    #[arg(long, default_value = "http://localhost:50052")]
    api_url: String,

    /// Number of fake participants for the demo chat.
    #[arg(long, default_value_t = 5)]
    users: usize,
}

#[derive(Debug, Serialize)]
struct CreateChatRequest {
    usernames: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CreateChatResponse {
    id: i64,
}

#[derive(Debug, Serialize)]
struct SendMessageBody {
    sender: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    id: i64,
}

/// Error body returned by the server on rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    message: String,
}

/// Render a failure body for the console, falling back to the raw text
/// when it is not the server's error shape.
fn describe_error(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => format!("{} ({})", err.message, err.error),
        Err(_) => body.to_string(),
    }
}

struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build http client")?;

        Ok(Self { client, base_url })
    }

    async fn create_chat(&self, usernames: Vec<String>) -> Result<i64> {
        let response = self
            .client
            .post(format!("{}/api/chats", self.base_url))
            .json(&CreateChatRequest { usernames })
            .send()
            .await
            .context("failed to create chat")?;

        if response.status() != StatusCode::OK {
            let error = describe_error(&response.text().await.unwrap_or_default());
            anyhow::bail!("failed to create chat: {error}");
        }

        let created: CreateChatResponse = response
            .json()
            .await
            .context("failed to parse create chat response")?;

        Ok(created.id)
    }

    async fn send_message(&self, chat_id: i64, sender: String, message: String) -> Result<i64> {
        let response = self
            .client
            .post(format!("{}/api/chats/{chat_id}/messages", self.base_url))
            .json(&SendMessageBody { sender, message })
            .send()
            .await
            .context("failed to send message")?;

        if response.status() != StatusCode::OK {
            let error = describe_error(&response.text().await.unwrap_or_default());
            anyhow::bail!("failed to send message: {error}");
        }

        let sent: SendMessageResponse = response
            .json()
            .await
            .context("failed to parse send message response")?;

        Ok(sent.id)
    }

    async fn delete_chat(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/api/chats/{id}", self.base_url))
            .send()
            .await
            .context("failed to delete chat")?;

        if response.status() != StatusCode::NO_CONTENT {
            let error = describe_error(&response.text().await.unwrap_or_default());
            anyhow::bail!("failed to delete chat: {error}");
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let api_client = ApiClient::new(cli.api_url)?;

    println!("based-chat demo client");
    println!("======================");

    let usernames: Vec<String> = (0..cli.users).map(|_| fake_username()).collect();
    println!("Creating chat for {} users", usernames.len());

    let chat_id = api_client.create_chat(usernames).await?;
    println!("Chat created: {chat_id}");

    let message_id = api_client
        .send_message(chat_id, fake_username(), fake_phrase())
        .await?;
    println!("Message accepted: {message_id}");

    api_client.delete_chat(chat_id).await?;
    println!("Chat deleted: {chat_id}");

    Ok(())
}

fn fake_username() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    format!("user_{}", suffix.to_lowercase())
}

fn fake_phrase() -> String {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(3..=6);

    (0..count)
        .map(|_| PHRASE_WORDS[rng.gen_range(0..PHRASE_WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_username_has_prefix_and_suffix() {
        let name = fake_username();
        assert!(name.starts_with("user_"));
        assert_eq!(name.len(), "user_".len() + 8);
    }

    #[test]
    fn describe_error_unwraps_server_error_shape() {
        let body = r#"{"error":"INVALID_ARGUMENT","message":"not enough users"}"#;
        assert_eq!(
            describe_error(body),
            "not enough users (INVALID_ARGUMENT)"
        );
    }

    #[test]
    fn describe_error_passes_through_unknown_bodies() {
        assert_eq!(describe_error("connection reset"), "connection reset");
        assert_eq!(describe_error(""), "");
    }

    #[test]
    fn fake_phrase_is_never_empty() {
        for _ in 0..16 {
            let phrase = fake_phrase();
            assert!(!phrase.is_empty());
            assert!(phrase.split_whitespace().count() >= 3);
        }
    }
}
