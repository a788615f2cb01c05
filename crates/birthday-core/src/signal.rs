//! Shared intensity signals read by the particle components.
//!
//! Only the breath detector and the scene controller write these fields;
//! particles receive a shared reference each tick.

use glam::Vec2;

use crate::constants::{FALLBACK_ANCHOR_HEIGHT_FRACTION, FLAME_ORIGIN_OFFSET_Y, SMOKE_ORIGIN_OFFSET_Y};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneSignal {
    /// Breath strength above the threshold, in threshold-sized units. 0 when
    /// silent, unbounded above (a saturated analyser reads 16).
    pub blow_intensity: f32,
    /// How lit the candle is, 0..=1.
    pub flame_intensity: f32,
    pub is_extinguished: bool,
    pub is_listening: bool,
}

impl SceneSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the flame should keep emitting particles.
    #[inline]
    pub fn flame_active(&self, min_intensity: f32) -> bool {
        !self.is_extinguished && self.flame_intensity > min_intensity
    }
}

/// On-screen anchor of the candle element, as reported by layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleAnchor {
    pub center_x: f32,
    pub top: f32,
}

impl CandleAnchor {
    pub fn new(center_x: f32, top: f32) -> Self {
        Self { center_x, top }
    }

    /// Used when the candle element cannot be measured.
    pub fn fallback(surface_size: Vec2) -> Self {
        Self {
            center_x: surface_size.x * 0.5,
            top: surface_size.y * FALLBACK_ANCHOR_HEIGHT_FRACTION,
        }
    }

    #[inline]
    pub fn flame_origin(&self) -> Vec2 {
        Vec2::new(self.center_x, self.top + FLAME_ORIGIN_OFFSET_Y)
    }

    #[inline]
    pub fn smoke_origin(&self) -> Vec2 {
        Vec2::new(self.center_x, self.top + SMOKE_ORIGIN_OFFSET_Y)
    }
}
