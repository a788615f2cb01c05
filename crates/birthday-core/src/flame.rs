//! Candle flame particles.
//!
//! Each particle is a small radial glow that rises from the wick, shrinks and
//! fades. Breath input adds turbulence; a hard blow tears particles upward and
//! burns them out early.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::error::SceneResult;
use crate::random::{between, in_range};
use crate::signal::{CandleAnchor, SceneSignal};
use crate::surface::{Color, Fill, RadialGradient, Rgba, Surface};

#[derive(Clone, Debug)]
pub struct FlameParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub decay: f32,
    pub size: f32,
}

impl FlameParticle {
    pub fn spawn<R: Rng + ?Sized>(anchor: CandleAnchor, rng: &mut R) -> Self {
        let origin = anchor.flame_origin();
        Self {
            position: Vec2::new(origin.x + between(rng, -FLAME_JITTER_X, FLAME_JITTER_X), origin.y),
            velocity: Vec2::new(in_range(rng, FLAME_VX_RANGE), in_range(rng, FLAME_VY_RANGE)),
            life: 1.0,
            decay: in_range(rng, FLAME_DECAY_RANGE),
            size: in_range(rng, FLAME_SIZE_RANGE),
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, signal: &SceneSignal, rng: &mut R) {
        let blow = signal.blow_intensity;
        if blow > 0.0 {
            self.velocity.x += (rng.gen::<f32>() - 0.5) * blow * FLAME_TURBULENCE;
            self.position.x += (rng.gen::<f32>() - 0.5) * blow * FLAME_POSITION_JITTER;
            if blow > FLAME_HARD_BLOW {
                self.velocity.y -= blow;
                self.life -= FLAME_HARD_BLOW_DECAY;
            }
        }
        self.position += self.velocity;
        self.life -= self.decay;
        self.size *= FLAME_SHRINK;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Effective opacity under the current signal.
    pub fn alpha(&self, signal: &SceneSignal) -> f32 {
        let mut alpha = self.life * signal.flame_intensity;
        if signal.blow_intensity > FLAME_HARD_BLOW {
            alpha *= 0.5;
        }
        alpha
    }

    pub fn render(&self, surface: &mut dyn Surface, signal: &SceneSignal) -> SceneResult<()> {
        let alpha = self.alpha(signal);
        if alpha <= 0.0 {
            return Ok(());
        }
        let gradient = RadialGradient {
            center: self.position,
            radius: self.size,
            stops: vec![
                (0.0, Color::Rgba(Rgba::from_rgb(FLAME_CORE_RGB, alpha))),
                (
                    FLAME_INNER_STOP,
                    Color::Rgba(Rgba::from_rgb(FLAME_INNER_RGB, alpha * FLAME_INNER_ALPHA)),
                ),
                (1.0, Color::Rgba(Rgba::from_rgb(FLAME_OUTER_RGB, 0.0))),
            ],
        };
        surface.fill_circle(self.position, self.size, &Fill::Radial(gradient))
    }
}
