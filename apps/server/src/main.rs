use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use basedchat_config::load as load_config;
use basedchat_core::{
    ChatError, ChatService, CreateChatRequest, CreateChatResponse, DeleteChatRequest,
    SendMessageRequest, SendMessageResponse, ThreadRngIdSource,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(env_filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("starting based-chat server");

    let config = load_config().context("failed to load configuration")?;

    let state = AppState {
        chat_service: Arc::new(ChatService::new()),
    };

    let app = build_router(state);

    let address = format!("{}:{}", config.http.address, config.http.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server error")?;

    info!("server shut down");
    Ok(())
}

#[derive(Clone)]
struct AppState {
    chat_service: Arc<ChatService<ThreadRngIdSource>>,
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/chats", post(create_chat))
        .route("/api/chats/:chat_id/messages", post(send_message))
        .route("/api/chats/:chat_id", delete(delete_chat))
        .with_state(state)
        .layer(cors)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Body of a send-message call; the chat id comes from the path.
#[derive(Debug, Deserialize)]
struct SendMessageBody {
    sender: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.code.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ChatError> for ApiError {
    fn from(value: ChatError) -> Self {
        error!(error = %value, "request rejected");
        Self {
            status: StatusCode::BAD_REQUEST,
            code: value.code().as_str(),
            message: value.to_string(),
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn create_chat(
    State(state): State<AppState>,
    Json(payload): Json<CreateChatRequest>,
) -> Result<Json<CreateChatResponse>, ApiError> {
    let users = payload.usernames.len();
    let response = state.chat_service.create_chat(&payload)?;
    info!(id = response.id, users, "chat created");
    Ok(Json(response))
}

async fn send_message(
    Path(chat_id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<SendMessageBody>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let request = SendMessageRequest {
        chat_id,
        sender: payload.sender,
        message: payload.message,
    };

    let response = state.chat_service.send_message(&request)?;
    info!(chat_id, message_id = response.id, "message accepted");
    Ok(Json(response))
}

async fn delete_chat(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.chat_service.delete_chat(&DeleteChatRequest { id })?;
    info!(id, "chat deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn shutdown_signal() -> impl std::future::Future<Output = ()> {
    async {
        if let Err(error) = signal::ctrl_c().await {
            error!(?error, "failed to listen for shutdown signal");
        }
        info!("shutdown signal received");
    }
}
