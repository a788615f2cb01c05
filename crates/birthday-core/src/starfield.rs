//! Twinkling background stars, drawn on their own surface and loop.

use glam::Vec2;
use rand::Rng;

use crate::constants::{STAR_MAX_SIZE, STAR_MAX_TWINKLE_SPEED, STAR_OPACITY_JITTER};
use crate::error::SceneResult;
use crate::random::{between, jitter};
use crate::surface::{Color, Fill, Rgba, Surface};

#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub twinkle_speed: f32,
}

pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(count: usize, size: Vec2, rng: &mut R) -> Self {
        let mut field = Self {
            stars: Vec::with_capacity(count),
        };
        field.stars.resize_with(count, || random_star(size, rng));
        field
    }

    /// Re-scatters every star over a surface of `size`.
    pub fn scatter<R: Rng + ?Sized>(&mut self, size: Vec2, rng: &mut R) {
        for s in &mut self.stars {
            *s = random_star(size, rng);
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Clears the background, draws every star, then twinkles them.
    pub fn frame<R: Rng + ?Sized>(
        &mut self,
        surface: &mut dyn Surface,
        rng: &mut R,
    ) -> SceneResult<()> {
        surface.clear()?;
        for s in &self.stars {
            let fill = Fill::Solid(Color::Rgba(Rgba::new(255, 255, 255, s.opacity)));
            surface.fill_circle(s.position, s.size, &fill)?;
        }
        self.twinkle(rng);
        Ok(())
    }

    pub fn twinkle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for s in &mut self.stars {
            s.opacity = (s.opacity + jitter(rng, STAR_OPACITY_JITTER)).clamp(0.0, 1.0);
        }
    }
}

fn random_star<R: Rng + ?Sized>(size: Vec2, rng: &mut R) -> Star {
    Star {
        position: Vec2::new(between(rng, 0.0, size.x), between(rng, 0.0, size.y)),
        size: between(rng, 0.0, STAR_MAX_SIZE),
        opacity: rng.gen::<f32>(),
        twinkle_speed: between(rng, 0.0, STAR_MAX_TWINKLE_SPEED),
    }
}
