//! User intents as data.

use serde::{Deserialize, Serialize};
use sortvis_trace::Element;

use crate::error::Result;
use crate::playback::{PlaybackEngine, Tick};
use crate::render::Renderer;

/// A control-surface request, as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    GenerateArray { size: usize },
    ChangeSize { size: usize },
    LoadArray { values: Vec<Element> },
    ChangeAlgorithm { name: String },
    Start,
    TogglePause,
    Reset,
    ChangeSpeed { value: u8 },
    /// Jump to a step of the current trace and pause there
    Seek { step: usize },
    /// Interpret one step while paused
    StepForward,
}

impl<R: Renderer> PlaybackEngine<R> {
    /// Apply an intent, returning the tick to schedule if one was created.
    pub fn apply(&mut self, intent: Intent) -> Result<Option<Tick>> {
        match intent {
            Intent::GenerateArray { size } => self.generate_array(size).map(|_| None),
            Intent::ChangeSize { size } => self.change_size(size).map(|_| None),
            Intent::LoadArray { values } => self.load_array(values).map(|_| None),
            Intent::ChangeAlgorithm { name } => self.change_algorithm(&name).map(|_| None),
            Intent::Start => self.start(),
            Intent::TogglePause => Ok(self.toggle_pause()),
            Intent::Reset => {
                self.reset();
                Ok(None)
            }
            Intent::ChangeSpeed { value } => {
                self.change_speed(value);
                Ok(None)
            }
            Intent::Seek { step } => self.seek(step).map(|_| None),
            Intent::StepForward => self.step_forward().map(|_| None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::error::Error;
    use crate::playback::PlaybackState;
    use crate::render::FrameRecorder;

    fn engine() -> PlaybackEngine<FrameRecorder> {
        PlaybackEngine::new(EngineConfig::default().with_seed(9), FrameRecorder::new())
    }

    #[test]
    fn intents_deserialize_from_tagged_json() {
        let intent: Intent = serde_json::from_str(r#"{"type":"change_algorithm","name":"quick"}"#).unwrap();
        assert_eq!(intent, Intent::ChangeAlgorithm { name: "quick".into() });

        let intent: Intent = serde_json::from_str(r#"{"type":"toggle_pause"}"#).unwrap();
        assert_eq!(intent, Intent::TogglePause);

        let json = serde_json::to_string(&Intent::LoadArray { values: vec![3, 1] }).unwrap();
        assert_eq!(json, r#"{"type":"load_array","values":[3,1]}"#);
    }

    #[test]
    fn apply_drives_the_engine() {
        let mut engine = engine();
        engine.apply(Intent::LoadArray { values: vec![2, 1] }).unwrap();
        engine.apply(Intent::ChangeSpeed { value: 10 }).unwrap();

        let tick = engine.apply(Intent::Start).unwrap().unwrap();
        assert_eq!(engine.state(), PlaybackState::Playing);

        assert_eq!(engine.apply(Intent::TogglePause), Ok(None));
        assert_eq!(engine.state(), PlaybackState::Paused);
        assert_eq!(engine.advance(tick), None);

        assert!(engine.apply(Intent::TogglePause).unwrap().is_some());
        engine.apply(Intent::Reset).unwrap();
        assert_eq!(engine.state(), PlaybackState::Idle);
    }

    #[test]
    fn apply_reports_errors() {
        let mut engine = engine();
        assert_eq!(
            engine.apply(Intent::GenerateArray { size: 0 }),
            Err(Error::InvalidSize { size: 0, max: 200 })
        );
        assert!(matches!(
            engine.apply(Intent::ChangeAlgorithm { name: "shell".into() }),
            Err(Error::UnknownAlgorithm(_))
        ));
        assert_eq!(engine.apply(Intent::Start), Err(Error::NoAlgorithm));
        assert_eq!(engine.apply(Intent::StepForward), Err(Error::NoTrace));
        assert_eq!(
            engine.apply(Intent::LoadArray { values: vec![1; 201] }),
            Err(Error::InvalidSize { size: 201, max: 200 })
        );
    }
}
