//! Explosion sparks with drag, gravity and a linear fade.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::error::SceneResult;
use crate::random::{between, in_range};
use crate::surface::{Color, Hsla, Surface};
use crate::trail::Trail;

/// Burst profile, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExplosionType {
    Normal,
    Large,
    Fast,
}

/// Motion ranges shared by every spark of one burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstProfile {
    pub count: usize,
    pub speed: (f32, f32),
    pub decay: (f32, f32),
    pub friction: f32,
}

impl ExplosionType {
    /// Weighted draw: 30% large, 20% fast, 50% normal.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_draw(rng.gen::<f32>())
    }

    /// Maps a uniform draw in `[0, 1)` to a profile.
    pub fn from_draw(r: f32) -> Self {
        if r > BURST_LARGE_ABOVE {
            ExplosionType::Large
        } else if r < BURST_FAST_BELOW {
            ExplosionType::Fast
        } else {
            ExplosionType::Normal
        }
    }

    pub const fn profile(self) -> BurstProfile {
        match self {
            ExplosionType::Large => BurstProfile {
                count: 120,
                speed: (2.0, 15.0),
                decay: (0.01, 0.02),
                friction: 0.94,
            },
            ExplosionType::Fast => BurstProfile {
                count: 40,
                speed: (5.0, 12.0),
                decay: (0.03, 0.06),
                friction: 0.92,
            },
            ExplosionType::Normal => BurstProfile {
                count: 50,
                speed: (1.0, 8.0),
                decay: (0.015, 0.03),
                friction: 0.95,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct Spark {
    pub position: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub friction: f32,
    pub gravity: f32,
    pub hue: f32,
    pub brightness: f32,
    pub alpha: f32,
    pub decay: f32,
    pub explosion_type: ExplosionType,
    trail: Trail<SPARK_TRAIL_LEN>,
}

impl Spark {
    pub fn new<R: Rng + ?Sized>(origin: Vec2, hue: f32, kind: ExplosionType, rng: &mut R) -> Self {
        let profile = kind.profile();
        Self {
            position: origin,
            angle: between(rng, 0.0, std::f32::consts::TAU),
            speed: in_range(rng, profile.speed),
            friction: profile.friction,
            gravity: SPARK_GRAVITY,
            hue: between(rng, hue - SPARK_HUE_JITTER, hue + SPARK_HUE_JITTER),
            brightness: in_range(rng, SPARK_BRIGHTNESS_RANGE),
            alpha: 1.0,
            decay: in_range(rng, profile.decay),
            explosion_type: kind,
            trail: Trail::filled(origin),
        }
    }

    pub fn update(&mut self) {
        self.trail.push(self.position);
        self.speed *= self.friction;
        self.position.x += self.angle.cos() * self.speed;
        self.position.y += self.angle.sin() * self.speed + self.gravity;
        self.alpha -= self.decay;
    }

    /// A spark is retired once another step would take it to zero or below.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > self.decay
    }

    pub fn trail(&self) -> &Trail<SPARK_TRAIL_LEN> {
        &self.trail
    }

    pub fn render(&self, surface: &mut dyn Surface) -> SceneResult<()> {
        let from = self.trail.tail().unwrap_or(self.position);
        let color = Hsla {
            hue: self.hue,
            saturation: 100.0,
            lightness: self.brightness,
            alpha: self.alpha,
        };
        surface.stroke_line(from, self.position, Color::Hsla(color))
    }
}

/// Spawns one burst at `origin`, choosing the explosion type at random.
pub fn create_burst<R: Rng + ?Sized>(origin: Vec2, hue: f32, rng: &mut R) -> Vec<Spark> {
    let kind = ExplosionType::pick(rng);
    burst_of(kind, origin, hue, rng)
}

/// Spawns one burst of a fixed type.
pub fn burst_of<R: Rng + ?Sized>(
    kind: ExplosionType,
    origin: Vec2,
    hue: f32,
    rng: &mut R,
) -> Vec<Spark> {
    (0..kind.profile().count)
        .map(|_| Spark::new(origin, hue, kind, rng))
        .collect()
}
