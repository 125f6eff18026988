//! Playback engine: the state machine that replays a trace on a timer.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use sortvis_trace::{Algorithm, Element};
use tracing::{debug, info, trace, warn};

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::highlight::HighlightConfig;
use crate::render::Renderer;
use crate::source::{ArraySource, RandomArraySource};
use crate::state::{AnimationState, Interpreted};

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No run in progress; the plain array is shown
    Idle,
    /// Advancing on a timer
    Playing,
    /// Holding position; marks are preserved
    Paused,
    /// Every step has been replayed
    Finished,
}

/// A scheduled advance.
///
/// At most one tick is pending at a time. Pausing or resetting cancels it,
/// after which [`PlaybackEngine::advance`] ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
    delay: Duration,
}

impl Tick {
    /// How long to wait before delivering this tick.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Replays sort traces and renders each step.
pub struct PlaybackEngine<R> {
    config: EngineConfig,
    renderer: R,
    source: Box<dyn ArraySource + Send>,
    array: Vec<Element>,
    algorithm: Option<Algorithm>,
    speed: u8,
    state: PlaybackState,
    animation: AnimationState,
    pending: Option<u64>,
    generation: u64,
}

impl<R: Renderer> PlaybackEngine<R> {
    /// Create an engine with a random array source built from `config`.
    pub fn new(config: EngineConfig, renderer: R) -> Self {
        let source = match config.seed {
            Some(seed) => RandomArraySource::seeded(seed, config.max_value),
            None => RandomArraySource::new(config.max_value),
        };
        Self::with_source(config, renderer, source)
    }

    /// Create an engine drawing arrays from `source`.
    ///
    /// Generates an array of `config.default_size` and renders it plain.
    pub fn with_source(
        config: EngineConfig,
        renderer: R,
        source: impl ArraySource + Send + 'static,
    ) -> Self {
        let mut engine = Self {
            algorithm: Some(config.algorithm),
            speed: config.speed.default_speed,
            renderer,
            source: Box::new(source),
            array: Vec::new(),
            state: PlaybackState::Idle,
            animation: AnimationState::default(),
            pending: None,
            generation: 0,
            config,
        };
        engine.array = engine.source.generate(engine.config.default_size);
        engine.render_plain();
        engine
    }

    /// The current (unsorted) array.
    pub fn array(&self) -> &[Element] {
        &self.array
    }

    /// The selected algorithm, if any.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Get the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current speed control value.
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Delay the next scheduled tick would use.
    pub fn step_delay(&self) -> Duration {
        self.config.speed.step_delay(self.speed)
    }

    /// Index of the next step to interpret.
    pub fn current_step(&self) -> usize {
        self.animation.pointer()
    }

    /// Number of steps in the loaded trace.
    pub fn total_steps(&self) -> usize {
        self.animation.total_steps()
    }

    /// Animation state (trace, pointer, marks).
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Whether an advance is scheduled.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Calculate progress as a fraction (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        let total = self.total_steps();
        if total == 0 {
            0.0
        } else {
            self.current_step() as f64 / total as f64
        }
    }

    /// Replace the array with a fresh one of `size` elements and go idle.
    pub fn generate_array(&mut self, size: usize) -> Result<()> {
        if size == 0 || size > self.config.max_size {
            return Err(Error::InvalidSize {
                size,
                max: self.config.max_size,
            });
        }
        self.enter_idle();
        self.array = self.source.generate(size);
        info!(size, "generated array");
        self.render_plain();
        Ok(())
    }

    /// Size control changed: same as generating a new array.
    pub fn change_size(&mut self, size: usize) -> Result<()> {
        self.generate_array(size)
    }

    /// Replace the array with caller-supplied values and go idle.
    ///
    /// An empty array is accepted; more than `max_size` values is not.
    pub fn load_array(&mut self, values: Vec<Element>) -> Result<()> {
        if values.len() > self.config.max_size {
            return Err(Error::InvalidSize {
                size: values.len(),
                max: self.config.max_size,
            });
        }
        self.enter_idle();
        self.array = values;
        info!(size = self.array.len(), "loaded array");
        self.render_plain();
        Ok(())
    }

    /// Select an algorithm by name and go idle.
    ///
    /// An unknown name leaves no algorithm selected, so `start` fails until
    /// a valid one is chosen.
    pub fn change_algorithm(&mut self, name: &str) -> Result<()> {
        self.enter_idle();
        let result = name.parse::<Algorithm>();
        self.algorithm = result.as_ref().ok().copied();
        self.render_plain();
        match result {
            Ok(algorithm) => {
                info!(%algorithm, "algorithm selected");
                Ok(())
            }
            Err(e) => {
                warn!(name, "unknown algorithm");
                Err(e.into())
            }
        }
    }

    /// Build a trace for the current array and start playing it.
    ///
    /// No-op while a run is playing or paused, and when the trace is empty.
    /// Returns the first tick to deliver.
    pub fn start(&mut self) -> Result<Option<Tick>> {
        if matches!(self.state, PlaybackState::Playing | PlaybackState::Paused) {
            debug!(state = ?self.state, "start ignored: run in progress");
            return Ok(None);
        }
        let algorithm = self.algorithm.ok_or(Error::NoAlgorithm)?;

        self.enter_idle();
        let trace = algorithm.generate(&self.array);
        if trace.is_empty() {
            debug!(%algorithm, "start ignored: empty trace");
            return Ok(None);
        }

        info!(%algorithm, steps = trace.len(), "playback started");
        self.animation.load(trace);
        self.state = PlaybackState::Playing;
        Ok(Some(self.schedule()))
    }

    /// Pause a playing run, keeping its position and marks.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.cancel();
            self.state = PlaybackState::Paused;
            debug!(step = self.current_step(), "paused");
        }
    }

    /// Resume a paused run at the current speed.
    pub fn resume(&mut self) -> Option<Tick> {
        if self.state != PlaybackState::Paused {
            return None;
        }
        self.state = PlaybackState::Playing;
        debug!(step = self.current_step(), "resumed");
        Some(self.schedule())
    }

    /// Pause if playing, resume if paused, otherwise nothing.
    pub fn toggle_pause(&mut self) -> Option<Tick> {
        match self.state {
            PlaybackState::Playing => {
                self.pause();
                None
            }
            PlaybackState::Paused => self.resume(),
            _ => None,
        }
    }

    /// Abandon any run and show the plain array.
    pub fn reset(&mut self) {
        self.enter_idle();
        self.render_plain();
    }

    /// Set the speed control value; the next scheduled tick picks it up.
    pub fn change_speed(&mut self, value: u8) {
        self.speed = self.config.speed.clamp(value);
        debug!(speed = self.speed, delay = ?self.step_delay(), "speed changed");
    }

    /// Deliver a scheduled tick.
    ///
    /// Cancelled or superseded ticks are ignored. Otherwise the step at the
    /// pointer is interpreted and rendered and the next tick is returned;
    /// once the trace is exhausted the run finishes.
    pub fn advance(&mut self, tick: Tick) -> Option<Tick> {
        if self.pending != Some(tick.generation) {
            trace!(generation = tick.generation, "stale tick ignored");
            return None;
        }
        self.pending = None;

        if self.state != PlaybackState::Playing {
            return None;
        }

        match self.animation.advance() {
            Some(frame) => {
                self.render(&frame);
                Some(self.schedule())
            }
            None => {
                self.finish();
                None
            }
        }
    }

    /// Jump to `target` (number of steps interpreted) and hold there.
    ///
    /// Marks are rebuilt by replaying the trace up to `target`, so the frame
    /// matches what uninterrupted playback would have shown.
    pub fn seek(&mut self, target: usize) -> Result<()> {
        if self.animation.trace().is_none() {
            return Err(Error::NoTrace);
        }
        self.cancel();

        let total = self.total_steps();
        if target >= total {
            self.finish();
            return Ok(());
        }

        self.state = PlaybackState::Paused;
        match self.animation.rewind_to(target) {
            Some(frame) => self.render(&frame),
            None => self.render_plain(),
        }
        debug!(step = target, total, "seeked");
        Ok(())
    }

    /// Interpret exactly one step while paused.
    pub fn step_forward(&mut self) -> Result<()> {
        if self.animation.trace().is_none() {
            return Err(Error::NoTrace);
        }
        if self.state != PlaybackState::Paused {
            return Ok(());
        }
        match self.animation.advance() {
            Some(frame) => self.render(&frame),
            None => self.finish(),
        }
        Ok(())
    }

    fn schedule(&mut self) -> Tick {
        self.generation += 1;
        self.pending = Some(self.generation);
        Tick {
            generation: self.generation,
            delay: self.step_delay(),
        }
    }

    fn cancel(&mut self) {
        if let Some(generation) = self.pending.take() {
            trace!(generation, "pending tick cancelled");
        }
    }

    fn enter_idle(&mut self) {
        self.cancel();
        self.animation.reset();
        self.state = PlaybackState::Idle;
    }

    fn finish(&mut self) {
        self.cancel();
        self.state = PlaybackState::Finished;
        if let Some(frame) = self.animation.finish() {
            self.render(&frame);
        }
        info!(steps = self.total_steps(), "playback finished");
    }

    fn render(&mut self, frame: &Interpreted) {
        self.renderer.render(&frame.snapshot, &frame.highlight);
    }

    fn render_plain(&mut self) {
        self.renderer.render(&self.array, &HighlightConfig::new());
    }
}

/// Playback status for sending to the control surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub state: PlaybackState,
    pub current_step: usize,
    pub total_steps: usize,
    pub progress: f64,
    pub algorithm: Option<Algorithm>,
    pub speed: u8,
    pub delay_ms: u64,
    pub array_len: usize,
}

impl<R: Renderer> From<&PlaybackEngine<R>> for PlaybackStatus {
    fn from(engine: &PlaybackEngine<R>) -> Self {
        Self {
            state: engine.state,
            current_step: engine.current_step(),
            total_steps: engine.total_steps(),
            progress: engine.progress(),
            algorithm: engine.algorithm,
            speed: engine.speed,
            delay_ms: engine.step_delay().as_millis() as u64,
            array_len: engine.array.len(),
        }
    }
}
