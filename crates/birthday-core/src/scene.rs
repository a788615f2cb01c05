//! Scene lifecycle: ignite after the candle fades in, extinguish on breath or
//! tap, then hand over to the final greeting.

use rand::Rng;
use smallvec::SmallVec;

use crate::config::SceneConfig;
use crate::error::{SceneError, SceneResult};
use crate::signal::{CandleAnchor, SceneSignal};
use crate::system::ParticleSystem;

/// UI collaborator driven by the controller.
pub trait SceneHooks {
    /// Hide the candle scene and reveal the greeting.
    fn show_final_scene(&mut self);
    /// Hide the effects surface entirely.
    fn hide_effects(&mut self);
    /// Start background music and video.
    fn start_media(&mut self) -> SceneResult<()>;
    fn show_mic_denied(&mut self, error: &SceneError);
    fn hide_mic_status(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    Ignited,
    Extinguished,
    FinalScene,
}

pub type SceneEvents = SmallVec<[SceneEvent; 2]>;

pub struct SceneController {
    started_ms: f64,
    ignite_delay_ms: f64,
    final_delay_ms: f64,
    smoke_burst: usize,
    ignited: bool,
    final_due_ms: Option<f64>,
    final_shown: bool,
}

impl SceneController {
    pub fn new(config: &SceneConfig, started_ms: f64) -> Self {
        Self {
            started_ms,
            ignite_delay_ms: config.ignite_delay_ms,
            final_delay_ms: config.final_scene_delay_ms,
            smoke_burst: config.smoke_burst,
            ignited: false,
            final_due_ms: None,
            final_shown: false,
        }
    }

    pub fn is_ignited(&self) -> bool {
        self.ignited
    }

    pub fn final_shown(&self) -> bool {
        self.final_shown
    }

    /// Puts the candle out. Returns `false` when it was already out.
    pub fn extinguish<R: Rng + ?Sized>(
        &mut self,
        signal: &mut SceneSignal,
        system: &mut ParticleSystem,
        anchor: CandleAnchor,
        now_ms: f64,
        hooks: &mut dyn SceneHooks,
        rng: &mut R,
    ) -> bool {
        if signal.is_extinguished {
            return false;
        }
        signal.is_extinguished = true;
        signal.is_listening = false;
        signal.flame_intensity = 0.0;
        signal.blow_intensity = 0.0;
        hooks.hide_mic_status();
        system.emit_smoke(anchor.smoke_origin(), self.smoke_burst, rng);
        self.final_due_ms = Some(now_ms + self.final_delay_ms);
        log::info!("[scene] extinguished at {:.0}ms", now_ms - self.started_ms);
        true
    }

    /// Fires whichever timed transitions are due at `now_ms`.
    pub fn poll(
        &mut self,
        signal: &mut SceneSignal,
        system: &mut ParticleSystem,
        now_ms: f64,
        hooks: &mut dyn SceneHooks,
    ) -> SceneEvents {
        let mut events = SceneEvents::new();

        if !self.ignited
            && !signal.is_extinguished
            && now_ms - self.started_ms >= self.ignite_delay_ms
        {
            self.ignited = true;
            signal.flame_intensity = 1.0;
            log::info!("[scene] candle lit");
            events.push(SceneEvent::Ignited);
        }

        if let Some(due) = self.final_due_ms {
            if !self.final_shown && now_ms >= due {
                self.final_shown = true;
                hooks.show_final_scene();
                hooks.hide_effects();
                system.set_enabled(false);
                if let Err(e) = hooks.start_media() {
                    log::warn!("[scene] {}", e);
                }
                log::info!("[scene] final greeting shown");
                events.push(SceneEvent::FinalScene);
            }
        }

        events
    }
}
