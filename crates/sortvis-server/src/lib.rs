//! Sortvis Web Control Surface
//!
//! Serves a playback session over HTTP and streams rendered frames over a
//! WebSocket.
//!
//! # Architecture
//!
//! - **REST API**: One route per intent, each answering with the playback status
//! - **WebSocket**: Pushes every rendered frame and accepts intents as tagged JSON
//! - **Session**: A single engine task shared by every client
//!
//! # Usage
//!
//! ```ignore
//! let server = SortvisServer::new(ServerConfig::default());
//! server.serve().await?;
//! ```

mod config;
mod error;
mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use server::SortvisServer;
