//! Async session driver.
//!
//! One task owns the [`PlaybackEngine`] and is the only place ticks fire, so
//! an intent is always fully applied before the next advance runs.

use std::future;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::intent::Intent;
use crate::playback::{PlaybackEngine, PlaybackStatus, Tick};
use crate::render::Renderer;

const COMMAND_BUFFER: usize = 64;

enum Command {
    Apply {
        intent: Intent,
        reply: oneshot::Sender<Result<PlaybackStatus>>,
    },
    Status {
        reply: oneshot::Sender<PlaybackStatus>,
    },
}

/// Handle for sending intents to a running session. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Apply { intent, .. } => f.debug_tuple("Apply").field(intent).finish(),
            Command::Status { .. } => f.write_str("Status"),
        }
    }
}

impl SessionHandle {
    /// Apply an intent and return the resulting status.
    pub async fn send(&self, intent: Intent) -> Result<PlaybackStatus> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command::Apply { intent, reply })
            .await
            .map_err(|_| Error::SessionClosed)?;
        rx.await.map_err(|_| Error::SessionClosed)?
    }

    /// Current status.
    pub async fn status(&self) -> Result<PlaybackStatus> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command::Status { reply })
            .await
            .map_err(|_| Error::SessionClosed)?;
        rx.await.map_err(|_| Error::SessionClosed)
    }

    /// Whether the session task has stopped.
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }
}

/// A playback engine running on its own task.
pub struct Session<R> {
    engine: PlaybackEngine<R>,
    commands: mpsc::Receiver<Command>,
    pending: Option<(Tick, Instant)>,
}

impl<R> Session<R>
where
    R: Renderer + Send + 'static,
{
    /// Move `engine` onto a new task and return a handle to it.
    ///
    /// The task stops once every handle has been dropped.
    pub fn spawn(engine: PlaybackEngine<R>) -> SessionHandle {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let session = Self {
            engine,
            commands: rx,
            pending: None,
        };
        tokio::spawn(session.run());
        SessionHandle { commands: tx }
    }

    async fn run(mut self) {
        info!("playback session started");
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                tick = wait_for(self.pending) => {
                    self.pending = None;
                    let next = self.engine.advance(tick);
                    self.schedule(next);
                }
            }
        }
        info!("playback session stopped");
    }

    fn handle(&mut self, command: Command) {
        debug!(?command, "session command");
        match command {
            Command::Apply { intent, reply } => {
                let result = self.engine.apply(intent);
                let result = match result {
                    Ok(tick) => {
                        self.schedule(tick);
                        Ok(PlaybackStatus::from(&self.engine))
                    }
                    Err(e) => {
                        self.schedule(None);
                        Err(e)
                    }
                };
                let _ = reply.send(result);
            }
            Command::Status { reply } => {
                let _ = reply.send(PlaybackStatus::from(&self.engine));
            }
        }
    }

    /// Track a newly issued tick, or drop ours if the engine cancelled it.
    fn schedule(&mut self, tick: Option<Tick>) {
        if let Some(tick) = tick {
            self.pending = Some((tick, Instant::now() + tick.delay()));
        } else if !self.engine.has_pending() {
            self.pending = None;
        }
    }
}

async fn wait_for(pending: Option<(Tick, Instant)>) -> Tick {
    match pending {
        Some((tick, deadline)) => {
            sleep_until(deadline).await;
            tick
        }
        None => future::pending().await,
    }
}
