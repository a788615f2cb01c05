//! Per-frame orchestration of every effects-surface particle collection.

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

use crate::config::SceneConfig;
use crate::error::SceneResult;
use crate::firework::{Firework, Flight};
use crate::flame::FlameParticle;
use crate::random::chance;
use crate::signal::{CandleAnchor, SceneSignal};
use crate::smoke::{smoke_burst, SmokePuff};
use crate::spark::{create_burst, Spark};
use crate::surface::{BlendMode, Color, Rgba, Surface};

/// Live collection sizes after a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub flames: usize,
    pub smoke: usize,
    pub fireworks: usize,
    pub sparks: usize,
    /// Rockets that exploded this frame.
    pub bursts: usize,
}

pub struct ParticleSystem {
    flames: Vec<FlameParticle>,
    smoke: Vec<SmokePuff>,
    fireworks: Vec<Firework>,
    sparks: Vec<Spark>,
    spawn_per_frame: usize,
    spawn_min_intensity: f32,
    launch_chance: f32,
    fade_alpha: f32,
    enabled: bool,
}

impl ParticleSystem {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            flames: Vec::new(),
            smoke: Vec::new(),
            fireworks: Vec::new(),
            sparks: Vec::new(),
            spawn_per_frame: config.flame_spawn_per_frame,
            spawn_min_intensity: config.flame_spawn_min_intensity,
            launch_chance: config.firework_launch_chance,
            fade_alpha: config.trail_fade_alpha,
            enabled: true,
        }
    }

    pub fn flames(&self) -> &[FlameParticle] {
        &self.flames
    }

    pub fn smoke(&self) -> &[SmokePuff] {
        &self.smoke
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled system keeps its particles but neither steps nor draws.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn emit_smoke<R: Rng + ?Sized>(&mut self, origin: Vec2, count: usize, rng: &mut R) {
        self.add_smoke(smoke_burst(origin, count, rng));
    }

    pub fn add_smoke(&mut self, puffs: impl IntoIterator<Item = SmokePuff>) {
        self.smoke.extend(puffs);
    }

    pub fn add_firework(&mut self, firework: Firework) {
        self.fireworks.push(firework);
    }

    pub fn add_sparks(&mut self, sparks: impl IntoIterator<Item = Spark>) {
        self.sparks.extend(sparks);
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            flames: self.flames.len(),
            smoke: self.smoke.len(),
            fireworks: self.fireworks.len(),
            sparks: self.sparks.len(),
            bursts: 0,
        }
    }

    /// Advances and draws one frame.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        surface: &mut dyn Surface,
        signal: &SceneSignal,
        anchor: CandleAnchor,
        rng: &mut R,
    ) -> SceneResult<FrameStats> {
        if !self.enabled {
            return Ok(self.stats());
        }

        // Fade previous frame so rocket and spark strokes leave short trails.
        surface.set_blend(BlendMode::DestinationOut)?;
        surface.fill_rect(Color::Rgba(Rgba::new(0, 0, 0, self.fade_alpha)))?;

        surface.set_blend(BlendMode::SourceOver)?;
        self.step_flames(surface, signal, anchor, rng)?;

        self.smoke.retain_mut(|p| {
            p.update();
            p.is_alive()
        });
        for p in &self.smoke {
            p.render(surface)?;
        }

        surface.set_blend(BlendMode::Lighter)?;
        if chance(rng, self.launch_chance) {
            self.fireworks.push(Firework::random(surface.size(), rng));
        }

        let mut bursts: SmallVec<[(Vec2, f32); 4]> = SmallVec::new();
        self.fireworks.retain_mut(|fw| match fw.update() {
            Flight::Ascending => true,
            Flight::Exploded { at, hue } => {
                bursts.push((at, hue));
                false
            }
        });
        // Queued bursts join the sparks before anything below can fail.
        for &(at, hue) in &bursts {
            self.sparks.extend(create_burst(at, hue, rng));
        }
        for fw in &self.fireworks {
            fw.render(surface)?;
        }

        self.sparks.retain_mut(|s| {
            s.update();
            s.is_alive()
        });
        for s in &self.sparks {
            s.render(surface)?;
        }

        let stats = FrameStats {
            bursts: bursts.len(),
            ..self.stats()
        };
        log::trace!("[effects] {:?}", stats);
        Ok(stats)
    }

    fn step_flames<R: Rng + ?Sized>(
        &mut self,
        surface: &mut dyn Surface,
        signal: &SceneSignal,
        anchor: CandleAnchor,
        rng: &mut R,
    ) -> SceneResult<()> {
        if signal.is_extinguished {
            self.flames.clear();
            return Ok(());
        }
        if signal.flame_active(self.spawn_min_intensity) {
            for _ in 0..self.spawn_per_frame {
                self.flames.push(FlameParticle::spawn(anchor, rng));
            }
        }
        self.flames.retain_mut(|p| {
            p.update(signal, rng);
            p.is_alive()
        });
        for p in &self.flames {
            p.render(surface, signal)?;
        }
        Ok(())
    }
}
