//! Rockets: launched from bottom-center, accelerating toward a target point.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::error::SceneResult;
use crate::random::{between, in_range};
use crate::surface::{Color, Hsla, Surface};
use crate::trail::Trail;

/// Result of advancing a rocket by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flight {
    Ascending,
    /// Reached its target; burst at `at` with the rocket's hue.
    Exploded { at: Vec2, hue: f32 },
}

#[derive(Clone, Debug)]
pub struct Firework {
    pub position: Vec2,
    pub start: Vec2,
    pub target: Vec2,
    pub angle: f32,
    pub distance_to_target: f32,
    pub distance_traveled: f32,
    pub speed: f32,
    pub acceleration: f32,
    pub hue: f32,
    pub brightness: f32,
    trail: Trail<FIREWORK_TRAIL_LEN>,
}

impl Firework {
    /// Rocket aimed at `target`, launched from the bottom-center of `surface_size`.
    pub fn launch<R: Rng + ?Sized>(surface_size: Vec2, target: Vec2, rng: &mut R) -> Self {
        let start = Vec2::new(surface_size.x * 0.5, surface_size.y);
        let delta = target - start;
        Self {
            position: start,
            start,
            target,
            angle: delta.y.atan2(delta.x),
            distance_to_target: delta.length(),
            distance_traveled: 0.0,
            speed: in_range(rng, FIREWORK_SPEED_RANGE),
            acceleration: FIREWORK_ACCELERATION,
            hue: between(rng, 0.0, 360.0),
            brightness: in_range(rng, FIREWORK_BRIGHTNESS_RANGE),
            trail: Trail::filled(start),
        }
    }

    /// Rocket aimed anywhere across the width and within the upper half.
    pub fn random<R: Rng + ?Sized>(surface_size: Vec2, rng: &mut R) -> Self {
        let target = Vec2::new(
            between(rng, 0.0, surface_size.x),
            between(rng, 0.0, surface_size.y * 0.5),
        );
        Self::launch(surface_size, target, rng)
    }

    pub fn update(&mut self) -> Flight {
        self.trail.push(self.position);
        self.speed *= self.acceleration;
        let velocity = Vec2::new(self.angle.cos(), self.angle.sin()) * self.speed;
        self.position += velocity;
        self.distance_traveled = self.position.distance(self.start);
        if self.distance_traveled >= self.distance_to_target {
            Flight::Exploded {
                at: self.target,
                hue: self.hue,
            }
        } else {
            Flight::Ascending
        }
    }

    pub fn trail(&self) -> &Trail<FIREWORK_TRAIL_LEN> {
        &self.trail
    }

    pub fn render(&self, surface: &mut dyn Surface) -> SceneResult<()> {
        let from = self.trail.tail().unwrap_or(self.position);
        let color = Hsla {
            hue: self.hue,
            saturation: 100.0,
            lightness: self.brightness,
            alpha: 1.0,
        };
        surface.stroke_line(from, self.position, Color::Hsla(color))
    }
}
