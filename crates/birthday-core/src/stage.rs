//! Everything the effects and breath loops share, bundled behind one owner.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::breath::{BreathDetector, BreathTick};
use crate::config::SceneConfig;
use crate::error::{SceneError, SceneResult};
use crate::scene::{SceneController, SceneEvent, SceneEvents, SceneHooks};
use crate::scheduler::Continuation;
use crate::signal::{CandleAnchor, SceneSignal};
use crate::surface::Surface;
use crate::system::{FrameStats, ParticleSystem};

pub struct Stage {
    pub signal: SceneSignal,
    pub system: ParticleSystem,
    pub controller: SceneController,
    pub breath: BreathDetector,
    config: SceneConfig,
    rng: StdRng,
}

impl Stage {
    pub fn new(config: SceneConfig, started_ms: f64) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            signal: SceneSignal::new(),
            system: ParticleSystem::new(&config),
            controller: SceneController::new(&config, started_ms),
            breath: BreathDetector::new(&config),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn is_listening(&self) -> bool {
        self.signal.is_listening
    }

    pub fn is_extinguished(&self) -> bool {
        self.signal.is_extinguished
    }

    /// Effects loop body: timed transitions, then one particle frame. The
    /// transitions fired are returned even when drawing fails.
    pub fn effects_frame(
        &mut self,
        surface: &mut dyn Surface,
        anchor: CandleAnchor,
        now_ms: f64,
        hooks: &mut dyn SceneHooks,
    ) -> (SceneResult<FrameStats>, SceneEvents) {
        let events = self
            .controller
            .poll(&mut self.signal, &mut self.system, now_ms, hooks);
        let stats = self
            .system
            .step(surface, &self.signal, anchor, &mut self.rng);
        (stats, events)
    }

    /// Breath loop body. Returns `Stop` once the candle is out.
    pub fn breath_frame(
        &mut self,
        bins: &[u8],
        anchor: CandleAnchor,
        now_ms: f64,
        hooks: &mut dyn SceneHooks,
    ) -> (Continuation, SceneEvents) {
        let mut events = SceneEvents::new();
        match self.breath.sample(bins, &mut self.signal) {
            BreathTick::Continue => (Continuation::Continue, events),
            BreathTick::Stop => (Continuation::Stop, events),
            BreathTick::Extinguish => {
                if self.extinguish(anchor, now_ms, hooks) {
                    events.push(SceneEvent::Extinguished);
                }
                // The next sample observes the extinguished signal and stops.
                (Continuation::Continue, events)
            }
        }
    }

    /// Tap fallback and breath trigger. Idempotent.
    pub fn extinguish(
        &mut self,
        anchor: CandleAnchor,
        now_ms: f64,
        hooks: &mut dyn SceneHooks,
    ) -> bool {
        self.controller.extinguish(
            &mut self.signal,
            &mut self.system,
            anchor,
            now_ms,
            hooks,
            &mut self.rng,
        )
    }

    pub fn on_listening(&mut self) {
        self.breath.on_listening(&mut self.signal);
    }

    /// Records the refusal and asks the UI to explain the tap fallback.
    pub fn on_permission_denied(
        &mut self,
        reason: impl Into<String>,
        hooks: &mut dyn SceneHooks,
    ) -> SceneError {
        let err = self.breath.on_permission_denied(reason);
        hooks.show_mic_denied(&err);
        err
    }
}
