use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::error::SceneResult;
use crate::random::{in_range, jitter};
use crate::surface::{Color, Fill, Rgba, Surface};

/// A gray puff released when the candle goes out. Rises, slows, swells and fades.
#[derive(Clone, Debug)]
pub struct SmokePuff {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub life: f32,
    pub decay: f32,
    pub gray: u8,
}

impl SmokePuff {
    pub fn spawn<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        let (lo, hi) = SMOKE_GRAY_RANGE;
        Self {
            position: origin,
            velocity: Vec2::new(jitter(rng, SMOKE_VX_SPREAD), in_range(rng, SMOKE_VY_RANGE)),
            size: in_range(rng, SMOKE_SIZE_RANGE),
            life: 1.0,
            decay: in_range(rng, SMOKE_DECAY_RANGE),
            gray: rng.gen_range(lo..hi),
        }
    }

    pub fn update(&mut self) {
        self.position += self.velocity;
        self.velocity.y *= SMOKE_RISE_DAMPING;
        self.size *= SMOKE_GROWTH;
        self.life -= self.decay;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    pub fn render(&self, surface: &mut dyn Surface) -> SceneResult<()> {
        if self.life <= 0.0 {
            return Ok(());
        }
        let color = Rgba::new(self.gray, self.gray, self.gray, self.life * SMOKE_MAX_ALPHA);
        surface.fill_circle(self.position, self.size, &Fill::Solid(Color::Rgba(color)))
    }
}

/// A full extinguish burst of `count` puffs at `origin`.
pub fn smoke_burst<R: Rng + ?Sized>(origin: Vec2, count: usize, rng: &mut R) -> Vec<SmokePuff> {
    (0..count).map(|_| SmokePuff::spawn(origin, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn puffs_rise_swell_and_fade() {
        let mut rng = StdRng::seed_from_u64(9);
        for mut puff in smoke_burst(Vec2::new(50.0, 50.0), 50, &mut rng) {
            assert!((150..230).contains(&puff.gray));
            assert!(puff.velocity.x.abs() <= 3.0);
            assert!(puff.velocity.y <= -3.0 && puff.velocity.y >= -7.0);
            let (size, life, vy) = (puff.size, puff.life, puff.velocity.y);
            puff.update();
            assert!(puff.position.y < 50.0);
            assert!(puff.size > size);
            assert!(puff.life < life);
            assert!((puff.velocity.y - vy * SMOKE_RISE_DAMPING).abs() < 1e-5);
        }
    }
}
