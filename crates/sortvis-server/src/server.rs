//! Axum web server with WebSocket frame streaming.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use sortvis_engine::{
    Algorithm, ChannelRenderer, Element, Frame, Intent, PlaybackEngine, PlaybackStatus, Session,
    SessionHandle,
};
use tokio::sync::broadcast;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::Result;

/// Shared application state.
struct AppState {
    session: SessionHandle,
    frames: ChannelRenderer,
}

/// Visualization server.
pub struct SortvisServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl SortvisServer {
    /// Spawn a playback session and wrap it in a server.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: ServerConfig) -> Self {
        let frames = ChannelRenderer::new(config.frame_buffer);
        let engine = PlaybackEngine::new(config.engine.clone(), frames.clone());
        let session = Session::spawn(engine);
        Self {
            config,
            state: Arc::new(AppState { session, frames }),
        }
    }

    /// Handle to the shared playback session.
    pub fn session(&self) -> &SessionHandle {
        &self.state.session
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler))
            // API routes
            .route("/api/status", get(status_handler))
            .route("/api/algorithms", get(algorithms_handler))
            .route("/api/array", post(generate_handler))
            .route("/api/array/load", post(load_handler))
            .route("/api/size", post(size_handler))
            .route("/api/algorithm", post(algorithm_handler))
            .route("/api/start", post(start_handler))
            .route("/api/pause", post(pause_handler))
            .route("/api/reset", post(reset_handler))
            .route("/api/speed", post(speed_handler))
            .route("/api/seek", post(seek_handler))
            .route("/api/step", post(step_handler))
            // WebSocket for frames
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind the configured address and serve until the listener fails.
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;
        info!(addr = %self.config.addr, "sortvis server listening");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Serve the single-page frontend.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

type ApiResult = Result<Json<PlaybackStatus>>;

async fn apply(state: &AppState, intent: Intent) -> ApiResult {
    Ok(Json(state.session.send(intent).await?))
}

async fn status_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    Ok(Json(state.session.status().await?))
}

async fn algorithms_handler() -> Json<Vec<Algorithm>> {
    Json(Algorithm::ALL.to_vec())
}

#[derive(Deserialize)]
struct SizeRequest {
    size: usize,
}

async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SizeRequest>,
) -> ApiResult {
    apply(&state, Intent::GenerateArray { size: req.size }).await
}

#[derive(Deserialize)]
struct LoadRequest {
    values: Vec<Element>,
}

async fn load_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoadRequest>,
) -> ApiResult {
    apply(&state, Intent::LoadArray { values: req.values }).await
}

#[derive(Deserialize)]
struct ValueRequest<T> {
    value: T,
}

async fn size_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValueRequest<usize>>,
) -> ApiResult {
    apply(&state, Intent::ChangeSize { size: req.value }).await
}

#[derive(Deserialize)]
struct AlgorithmRequest {
    name: String,
}

async fn algorithm_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AlgorithmRequest>,
) -> ApiResult {
    apply(&state, Intent::ChangeAlgorithm { name: req.name }).await
}

async fn start_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    apply(&state, Intent::Start).await
}

async fn pause_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    apply(&state, Intent::TogglePause).await
}

async fn reset_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    apply(&state, Intent::Reset).await
}

async fn speed_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValueRequest<u8>>,
) -> ApiResult {
    apply(&state, Intent::ChangeSpeed { value: req.value }).await
}

#[derive(Deserialize)]
struct SeekRequest {
    step: usize,
}

async fn seek_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeekRequest>,
) -> ApiResult {
    apply(&state, Intent::Seek { step: req.step }).await
}

async fn step_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    apply(&state, Intent::StepForward).await
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Messages pushed to WebSocket clients.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsMessage {
    Frame(Frame),
    Status(PlaybackStatus),
    Error { message: String },
}

impl WsMessage {
    fn to_message(&self) -> Option<Message> {
        match serde_json::to_string(self) {
            Ok(json) => Some(Message::Text(json.into())),
            Err(e) => {
                warn!("failed to encode websocket message: {}", e);
                None
            }
        }
    }
}

async fn handle_ws(socket: WebSocket, state: Arc<AppState>) {
    info!("websocket client connected");
    let mut frames = state.frames.subscribe();
    let (mut sink, mut stream) = socket.split();

    // Initial status so the client can draw controls before the first frame
    let initial = match state.session.status().await {
        Ok(status) => WsMessage::Status(status),
        Err(e) => WsMessage::Error {
            message: e.to_string(),
        },
    };
    if let Some(msg) = initial.to_message() {
        if sink.send(msg).await.is_err() {
            return;
        }
    }

    loop {
        let outgoing = tokio::select! {
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<Intent>(&text) {
                    Ok(intent) => {
                        debug!(?intent, "websocket intent");
                        match state.session.send(intent).await {
                            Ok(status) => WsMessage::Status(status),
                            Err(e) => WsMessage::Error { message: e.to_string() },
                        }
                    }
                    Err(e) => WsMessage::Error { message: format!("invalid intent: {e}") },
                },
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    warn!("websocket error: {}", e);
                    break;
                }
            },
            frame = frames.recv() => match frame {
                Ok(frame) => WsMessage::Frame(frame),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "websocket client lagging, frames dropped");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
        };

        if let Some(msg) = outgoing.to_message() {
            if sink.send(msg).await.is_err() {
                break;
            }
        }
    }
    info!("websocket client disconnected");
}
