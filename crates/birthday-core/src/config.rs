use crate::constants::*;

/// Adjustable scene parameters. `Default` reproduces the stock greeting.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub star_count: usize,
    pub blow_threshold: f32,
    pub blow_normalizer: f32,
    pub quench_rate: f32,
    pub extinguish_below: f32,
    pub blow_decay: f32,
    pub flame_recovery: f32,
    pub flame_spawn_per_frame: usize,
    pub flame_spawn_min_intensity: f32,
    pub smoke_burst: usize,
    pub firework_launch_chance: f32,
    pub trail_fade_alpha: f32,
    pub ignite_delay_ms: f64,
    pub final_scene_delay_ms: f64,
    pub fft_size: u32,
    /// Fixed seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            blow_threshold: BLOW_THRESHOLD,
            blow_normalizer: BLOW_NORMALIZER,
            quench_rate: QUENCH_RATE,
            extinguish_below: EXTINGUISH_BELOW,
            blow_decay: BLOW_DECAY,
            flame_recovery: FLAME_RECOVERY,
            flame_spawn_per_frame: FLAME_SPAWN_PER_FRAME,
            flame_spawn_min_intensity: FLAME_SPAWN_MIN_INTENSITY,
            smoke_burst: SMOKE_BURST,
            firework_launch_chance: FIREWORK_LAUNCH_CHANCE,
            trail_fade_alpha: TRAIL_FADE_ALPHA,
            ignite_delay_ms: IGNITE_DELAY_MS,
            final_scene_delay_ms: FINAL_SCENE_DELAY_MS,
            fft_size: FFT_SIZE,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of frequency bins the analyser yields (half the FFT size).
    pub fn frequency_bins(&self) -> usize {
        (self.fft_size / 2) as usize
    }
}
