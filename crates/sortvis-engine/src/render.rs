//! Renderer collaborators.
//!
//! The engine hands each fully resolved frame to a [`Renderer`]; drawing is
//! somebody else's job.

use serde::{Deserialize, Serialize};
use sortvis_trace::Element;
use tokio::sync::broadcast;

use crate::highlight::HighlightConfig;

/// Draws an array snapshot with a highlight configuration.
pub trait Renderer {
    /// Draw one frame. `highlight` is resolved and only references valid
    /// positions of `snapshot`.
    fn render(&mut self, snapshot: &[Element], highlight: &HighlightConfig);
}

impl<F> Renderer for F
where
    F: FnMut(&[Element], &HighlightConfig),
{
    fn render(&mut self, snapshot: &[Element], highlight: &HighlightConfig) {
        self(snapshot, highlight)
    }
}

/// One rendered frame as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub array: Vec<Element>,
    pub highlight: HighlightConfig,
}

impl Frame {
    pub fn new(snapshot: &[Element], highlight: &HighlightConfig) -> Self {
        Self {
            array: snapshot.to_vec(),
            highlight: highlight.clone(),
        }
    }
}

/// Keeps every frame it is asked to render.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    frames: Vec<Frame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames so far, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Most recent frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Remove and return every recorded frame.
    pub fn take(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }
}

impl Renderer for FrameRecorder {
    fn render(&mut self, snapshot: &[Element], highlight: &HighlightConfig) {
        self.frames.push(Frame::new(snapshot, highlight));
    }
}

/// Broadcasts frames to any number of subscribers.
///
/// Frames rendered while nobody is subscribed are dropped.
#[derive(Debug, Clone)]
pub struct ChannelRenderer {
    tx: broadcast::Sender<Frame>,
}

impl ChannelRenderer {
    /// Create a renderer whose subscribers buffer up to `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Receive every frame rendered from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Frame> {
        self.tx.subscribe()
    }
}

impl Renderer for ChannelRenderer {
    fn render(&mut self, snapshot: &[Element], highlight: &HighlightConfig) {
        if self.tx.send(Frame::new(snapshot, highlight)).is_err() {
            tracing::trace!("frame dropped: no subscribers");
        }
    }
}
