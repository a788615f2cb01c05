// Shared tuning constants for the birthday scene. Front-ends override the
// adjustable subset through `SceneConfig`; the rest are physics shape.

// Starfield
pub const STAR_COUNT: usize = 200;
pub const STAR_MAX_SIZE: f32 = 2.0;
pub const STAR_MAX_TWINKLE_SPEED: f32 = 0.05;
pub const STAR_OPACITY_JITTER: f32 = 0.05; // max +/- opacity change per frame

// Candle anchor offsets (pixels below the candle element's top edge)
pub const FLAME_ORIGIN_OFFSET_Y: f32 = 25.0;
pub const SMOKE_ORIGIN_OFFSET_Y: f32 = 10.0;
pub const FALLBACK_ANCHOR_HEIGHT_FRACTION: f32 = 0.6;

// Flame particles
pub const FLAME_JITTER_X: f32 = 5.0;
pub const FLAME_VX_RANGE: (f32, f32) = (-0.5, 0.5);
pub const FLAME_VY_RANGE: (f32, f32) = (-1.0, -3.0);
pub const FLAME_DECAY_RANGE: (f32, f32) = (0.01, 0.03);
pub const FLAME_SIZE_RANGE: (f32, f32) = (10.0, 20.0);
pub const FLAME_SHRINK: f32 = 0.96;
pub const FLAME_TURBULENCE: f32 = 5.0; // velocity kick per unit blow
pub const FLAME_POSITION_JITTER: f32 = 8.0; // positional kick per unit blow
pub const FLAME_HARD_BLOW: f32 = 0.5;
pub const FLAME_HARD_BLOW_DECAY: f32 = 0.05;
pub const FLAME_SPAWN_PER_FRAME: usize = 3;
pub const FLAME_SPAWN_MIN_INTENSITY: f32 = 0.1;

// Flame palette (pale core -> bright yellow -> transparent orange-red)
pub const FLAME_CORE_RGB: [u8; 3] = [255, 255, 220];
pub const FLAME_INNER_RGB: [u8; 3] = [255, 200, 50];
pub const FLAME_OUTER_RGB: [u8; 3] = [255, 80, 0];
pub const FLAME_INNER_STOP: f32 = 0.4;
pub const FLAME_INNER_ALPHA: f32 = 0.8;

// Smoke
pub const SMOKE_BURST: usize = 50;
pub const SMOKE_VX_SPREAD: f32 = 3.0;
pub const SMOKE_VY_RANGE: (f32, f32) = (-3.0, -7.0);
pub const SMOKE_SIZE_RANGE: (f32, f32) = (15.0, 40.0);
pub const SMOKE_DECAY_RANGE: (f32, f32) = (0.015, 0.035);
pub const SMOKE_GRAY_RANGE: (u8, u8) = (150, 230);
pub const SMOKE_RISE_DAMPING: f32 = 0.98;
pub const SMOKE_GROWTH: f32 = 1.04;
pub const SMOKE_MAX_ALPHA: f32 = 0.6;

// Fireworks
pub const FIREWORK_LAUNCH_CHANCE: f32 = 0.05;
pub const FIREWORK_SPEED_RANGE: (f32, f32) = (2.0, 4.0);
pub const FIREWORK_ACCELERATION: f32 = 1.05;
pub const FIREWORK_BRIGHTNESS_RANGE: (f32, f32) = (50.0, 70.0);
pub const FIREWORK_TRAIL_LEN: usize = 3;

// Sparks
pub const SPARK_TRAIL_LEN: usize = 5;
pub const SPARK_GRAVITY: f32 = 1.0;
pub const SPARK_HUE_JITTER: f32 = 20.0;
pub const SPARK_BRIGHTNESS_RANGE: (f32, f32) = (50.0, 80.0);
pub const BURST_LARGE_ABOVE: f32 = 0.7; // draw > this -> large (30%)
pub const BURST_FAST_BELOW: f32 = 0.2; // draw < this -> fast (20%)

// Compositing
pub const TRAIL_FADE_ALPHA: f32 = 0.5;

// Breath detection
pub const FFT_SIZE: u32 = 256;
pub const BLOW_THRESHOLD: f32 = 15.0;
pub const BLOW_NORMALIZER: f32 = 15.0;
pub const QUENCH_RATE: f32 = 0.03; // flame lost per unit blow per tick
pub const EXTINGUISH_BELOW: f32 = 0.2;
pub const BLOW_DECAY: f32 = 0.1;
pub const FLAME_RECOVERY: f32 = 0.02;

// Scene timing (milliseconds)
pub const IGNITE_DELAY_MS: f64 = 2000.0;
pub const FINAL_SCENE_DELAY_MS: f64 = 800.0;
