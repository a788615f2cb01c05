//! Uniform random helpers shared by every particle kind.

use rand::Rng;

/// Uniform value between `a` and `b`. Unlike `gen_range` the bounds may be
/// given in either order (e.g. `between(rng, -1.0, -3.0)`), and equal bounds
/// return that bound.
#[inline]
pub fn between<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    a + rng.gen::<f32>() * (b - a)
}

/// Same as [`between`] for a `(a, b)` pair from the constants table.
#[inline]
pub fn in_range<R: Rng + ?Sized>(rng: &mut R, range: (f32, f32)) -> f32 {
    between(rng, range.0, range.1)
}

/// Symmetric jitter in `[-spread, spread)`.
#[inline]
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, spread: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * spread
}

/// `true` with probability `p`.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    rng.gen::<f32>() < p
}
