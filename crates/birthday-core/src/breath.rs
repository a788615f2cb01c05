//! Microphone breath detection.
//!
//! The front-end feeds byte frequency bins from an analyser once per frame;
//! the detector turns their mean into a blow intensity and bleeds the flame
//! intensity down while the user blows. Silence lets the flame recover.

use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::signal::SceneSignal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreathState {
    Idle,
    Listening,
    Extinguished,
    Denied,
}

/// What the sampling loop should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreathTick {
    Continue,
    /// Flame fell below the extinguish level; the caller must extinguish.
    Extinguish,
    /// Scene is already out; do not reschedule.
    Stop,
}

pub struct BreathDetector {
    state: BreathState,
    threshold: f32,
    normalizer: f32,
    quench_rate: f32,
    extinguish_below: f32,
    blow_decay: f32,
    recovery: f32,
}

impl BreathDetector {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            state: BreathState::Idle,
            threshold: config.blow_threshold,
            normalizer: config.blow_normalizer,
            quench_rate: config.quench_rate,
            extinguish_below: config.extinguish_below,
            blow_decay: config.blow_decay,
            recovery: config.flame_recovery,
        }
    }

    pub fn state(&self) -> BreathState {
        self.state
    }

    /// Microphone granted and analyser wired.
    pub fn on_listening(&mut self, signal: &mut SceneSignal) {
        if self.state != BreathState::Idle {
            return;
        }
        self.state = BreathState::Listening;
        signal.is_listening = true;
        log::info!("[breath] listening");
    }

    /// Microphone refused. The scene continues in tap-to-extinguish mode; the
    /// returned error is for the UI to display.
    pub fn on_permission_denied(&mut self, reason: impl Into<String>) -> SceneError {
        let reason = reason.into();
        if self.state == BreathState::Idle {
            self.state = BreathState::Denied;
        }
        log::warn!("[breath] microphone denied: {}", reason);
        SceneError::MicPermissionDenied(reason)
    }

    /// Processes one analyser frame.
    pub fn sample(&mut self, bins: &[u8], signal: &mut SceneSignal) -> BreathTick {
        if signal.is_extinguished {
            self.state = BreathState::Extinguished;
            return BreathTick::Stop;
        }
        if self.state != BreathState::Listening {
            return BreathTick::Stop;
        }

        let avg = mean(bins);
        if avg > self.threshold {
            signal.blow_intensity = (avg - self.threshold) / self.normalizer;
            signal.flame_intensity =
                (signal.flame_intensity - self.quench_rate * signal.blow_intensity).max(0.0);
            if signal.flame_intensity < self.extinguish_below {
                return BreathTick::Extinguish;
            }
        } else {
            signal.blow_intensity = (signal.blow_intensity - self.blow_decay).max(0.0);
            if signal.flame_intensity < 1.0 && signal.blow_intensity == 0.0 {
                signal.flame_intensity = (signal.flame_intensity + self.recovery).min(1.0);
            }
        }
        BreathTick::Continue
    }
}

/// Mean bin magnitude; an empty frame reads as silence.
pub fn mean(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32
}
