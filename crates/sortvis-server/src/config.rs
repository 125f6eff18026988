//! Server configuration.

use std::net::SocketAddr;

use sortvis_engine::EngineConfig;

use crate::error::{Error, Result};

/// Configuration for the web control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Frames buffered per WebSocket subscriber before it starts lagging.
    pub frame_buffer: usize,
    /// Playback engine settings.
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            frame_buffer: 256,
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// Reads `SORTVIS_ADDR` and `SORTVIS_FRAME_BUFFER`; engine settings come
    /// from [`EngineConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let addr = match std::env::var("SORTVIS_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("SORTVIS_ADDR={raw:?}: {e}")))?,
            Err(_) => defaults.addr,
        };

        let frame_buffer = match std::env::var("SORTVIS_FRAME_BUFFER") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("SORTVIS_FRAME_BUFFER={raw:?}: {e}")))?,
            Err(_) => defaults.frame_buffer,
        };

        Ok(Self {
            addr,
            frame_buffer,
            engine: EngineConfig::from_env()?,
        })
    }
}
