// Shared fakes for host-side scene tests.

#![allow(dead_code)]
use birthday_core::{SceneError, SceneHooks, SceneResult};

/// Counts every UI transition the controller requests.
#[derive(Default)]
pub struct RecordingHooks {
    pub final_scene: usize,
    pub effects_hidden: usize,
    pub media_started: usize,
    pub mic_denied: Vec<SceneError>,
    pub mic_hidden: usize,
    pub fail_media: bool,
}

impl SceneHooks for RecordingHooks {
    fn show_final_scene(&mut self) {
        self.final_scene += 1;
    }

    fn hide_effects(&mut self) {
        self.effects_hidden += 1;
    }

    fn start_media(&mut self) -> SceneResult<()> {
        self.media_started += 1;
        if self.fail_media {
            return Err(SceneError::MediaPlayback("NotAllowedError".into()));
        }
        Ok(())
    }

    fn show_mic_denied(&mut self, error: &SceneError) {
        self.mic_denied.push(error.clone());
    }

    fn hide_mic_status(&mut self) {
        self.mic_hidden += 1;
    }
}
