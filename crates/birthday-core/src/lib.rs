//! Simulation core for the cosmic birthday greeting.
//!
//! Nothing here touches a browser API: drawing goes through [`Surface`],
//! frame pacing through [`Scheduler`], and microphone input arrives as plain
//! byte frequency bins. The web and native front-ends supply those pieces.

pub mod breath;
pub mod config;
pub mod constants;
pub mod error;
pub mod firework;
pub mod flame;
pub mod random;
pub mod scene;
pub mod scheduler;
pub mod signal;
pub mod smoke;
pub mod spark;
pub mod stage;
pub mod starfield;
pub mod surface;
pub mod system;
pub mod trail;

pub use breath::{BreathDetector, BreathState, BreathTick};
pub use config::SceneConfig;
pub use error::{SceneError, SceneResult};
pub use firework::{Firework, Flight};
pub use flame::FlameParticle;
pub use scene::{SceneController, SceneEvent, SceneEvents, SceneHooks};
pub use scheduler::{supervise, Continuation, FrameTask, ManualScheduler, Scheduler};
pub use signal::{CandleAnchor, SceneSignal};
pub use smoke::SmokePuff;
pub use spark::{create_burst, BurstProfile, ExplosionType, Spark};
pub use stage::Stage;
pub use starfield::{Star, Starfield};
pub use surface::{BlendMode, Color, DrawCommand, Fill, Hsla, RadialGradient, Recorder, Rgba, Surface};
pub use system::{FrameStats, ParticleSystem};
