//! Sortvis Playback Engine
//!
//! Replays sort traces one step at a time and tells a renderer what to draw.
//!
//! # Architecture
//!
//! - **PlaybackEngine**: Idle/Playing/Paused/Finished state machine driven by intents
//! - **Highlight**: Turns each step into a resolved category-to-indices map
//! - **Tick**: Single pending advance; pausing or resetting cancels it
//! - **Session**: Tokio task that owns an engine and fires its ticks
//!
//! # Usage
//!
//! ```
//! use sortvis_engine::{EngineConfig, FrameRecorder, PlaybackEngine, PlaybackState};
//!
//! let mut engine = PlaybackEngine::new(EngineConfig::default(), FrameRecorder::new());
//! engine.load_array(vec![3, 1, 2]).unwrap();
//!
//! let mut tick = engine.start().unwrap();
//! while let Some(t) = tick {
//!     // A real driver waits t.delay() first.
//!     tick = engine.advance(t);
//! }
//! assert_eq!(engine.state(), PlaybackState::Finished);
//! ```

mod config;
mod error;
mod highlight;
mod intent;
mod playback;
mod render;
mod session;
mod source;
mod state;

pub use config::{EngineConfig, SpeedConfig};
pub use error::{Error, Result};
pub use highlight::{interpret, Category, HighlightConfig, Marks};
pub use intent::Intent;
pub use playback::{PlaybackEngine, PlaybackState, PlaybackStatus, Tick};
pub use render::{ChannelRenderer, Frame, FrameRecorder, Renderer};
pub use session::{Session, SessionHandle};
pub use source::{ArraySource, RandomArraySource};
pub use state::{AnimationState, Interpreted};

pub use sortvis_trace::{Algorithm, Element};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(values: Vec<Element>, algorithm: Algorithm, pause_every: Option<usize>) -> Vec<Frame> {
        let config = EngineConfig::default().with_seed(0).with_algorithm(algorithm);
        let mut engine = PlaybackEngine::new(config, FrameRecorder::new());
        engine.load_array(values).unwrap();
        engine.renderer_mut().take();

        let mut tick = engine.start().unwrap();
        let mut steps = 0;
        while let Some(t) = tick {
            tick = engine.advance(t);
            steps += 1;
            if let (Some(every), Some(_)) = (pause_every, tick) {
                if steps % every == 0 {
                    engine.toggle_pause();
                    tick = engine.toggle_pause();
                }
            }
        }
        engine.renderer_mut().take()
    }

    fn algorithm() -> impl Strategy<Value = Algorithm> {
        prop::sample::select(Algorithm::ALL.to_vec())
    }

    #[test]
    fn closure_renderer_drives_engine() {
        let mut count = 0;
        {
            let renderer = |_: &[Element], _: &HighlightConfig| count += 1;
            let mut engine = PlaybackEngine::new(EngineConfig::default().with_seed(2), renderer);
            engine.load_array(vec![2, 1]).unwrap();
            let mut tick = engine.start().unwrap();
            while let Some(t) = tick {
                tick = engine.advance(t);
            }
        }
        assert!(count > 2);
    }

    #[test]
    fn fixed_source_is_used() {
        let source = |size: usize| (1..=size as Element).rev().collect::<Vec<_>>();
        let config = EngineConfig::default().with_default_size(4);
        let mut engine = PlaybackEngine::with_source(config, FrameRecorder::new(), source);
        assert_eq!(engine.array(), &[4, 3, 2, 1]);

        engine.generate_array(3).unwrap();
        assert_eq!(engine.array(), &[3, 2, 1]);
    }

    proptest! {
        #[test]
        fn pausing_never_changes_frames(
            values in prop::collection::vec(1u32..100, 0..24),
            algorithm in algorithm(),
            every in 1usize..5,
        ) {
            let straight = run(values.clone(), algorithm, None);
            let paused = run(values, algorithm, Some(every));
            prop_assert_eq!(paused, straight);
        }

        #[test]
        fn frames_reference_valid_positions(
            values in prop::collection::vec(1u32..100, 1..24),
            algorithm in algorithm(),
        ) {
            for frame in run(values.clone(), algorithm, None) {
                prop_assert_eq!(frame.array.len(), values.len());
                for (_, indices) in frame.highlight.iter() {
                    prop_assert!(indices.iter().all(|&i| i < values.len()));
                }
            }
        }

        #[test]
        fn last_frame_is_sorted_and_fully_marked(
            values in prop::collection::vec(1u32..100, 1..24),
            algorithm in algorithm(),
        ) {
            let frames = run(values.clone(), algorithm, None);
            let last = frames.last().unwrap();

            let mut expected = values;
            expected.sort();
            prop_assert_eq!(&last.array, &expected);
            prop_assert_eq!(&last.highlight, &HighlightConfig::all_sorted(expected.len()));
        }
    }
}
