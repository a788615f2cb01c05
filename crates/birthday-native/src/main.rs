//! Headless runner: steps the whole birthday scene without a browser.
//!
//! All three loops run on a `ManualScheduler` at 60 fps against recording
//! surfaces, with a scripted microphone level standing in for breath.

use std::cell::RefCell;
use std::rc::Rc;

use birthday_core::{
    CandleAnchor, Continuation, ManualScheduler, Recorder, SceneConfig, SceneError,
    SceneHooks, SceneResult, Scheduler, Stage, Starfield,
};
use clap::Parser;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "birthday-native", about = "Step the birthday scene headlessly")]
struct Args {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: usize,
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    #[arg(long, default_value_t = 720.0)]
    height: f32,
    /// RNG seed for a reproducible run.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Frame at which the scripted breath starts; omit to simulate a denied microphone.
    #[arg(long)]
    blow_from: Option<usize>,
    /// Mean analyser level (0-255) while blowing.
    #[arg(long, default_value_t = 40)]
    blow_level: u8,
    /// Frame at which to simulate a tap on the candle.
    #[arg(long)]
    tap_at: Option<usize>,
}

/// Logs every UI transition instead of touching a DOM.
#[derive(Default)]
struct LogHooks {
    final_shown: bool,
}

impl SceneHooks for LogHooks {
    fn show_final_scene(&mut self) {
        self.final_shown = true;
        log::info!("[ui] final scene");
    }

    fn hide_effects(&mut self) {
        log::info!("[ui] effects surface hidden");
    }

    fn start_media(&mut self) -> SceneResult<()> {
        Err(SceneError::MediaPlayback("no media backend in headless mode".into()))
    }

    fn show_mic_denied(&mut self, error: &SceneError) {
        log::warn!("[ui] {}", error);
    }

    fn hide_mic_status(&mut self) {
        log::info!("[ui] mic status hidden");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    anyhow::ensure!(
        args.width > 0.0 && args.height > 0.0,
        "surface size must be positive"
    );

    let config = SceneConfig::default().with_seed(args.seed);
    let bins = config.frequency_bins();
    let size = Vec2::new(args.width, args.height);
    let anchor = CandleAnchor::new(size.x * 0.5, size.y * 0.55);

    let stage = Rc::new(RefCell::new(Stage::new(config, 0.0)));
    let hooks = Rc::new(RefCell::new(LogHooks::default()));
    let frame_no = Rc::new(RefCell::new(0usize));
    let mut scheduler = ManualScheduler::new();

    let mut star_rng = StdRng::seed_from_u64(args.seed ^ 0x5EED);
    let mut stars = Starfield::new(stage.borrow().config().star_count, size, &mut star_rng);
    let mut bg = Recorder::new(size.x, size.y);
    scheduler.schedule(
        "stars",
        Box::new(move |_now: f64| -> SceneResult<Continuation> {
            bg.take();
            stars.frame(&mut bg, &mut star_rng)?;
            Ok(Continuation::Continue)
        }),
    );

    let mut fx = Recorder::new(size.x, size.y);
    {
        let stage = stage.clone();
        let hooks = hooks.clone();
        let frame_no = frame_no.clone();
        let tap_at = args.tap_at;
        scheduler.schedule(
            "effects",
            Box::new(move |now: f64| -> SceneResult<Continuation> {
                let frame = *frame_no.borrow();
                let mut stage = stage.borrow_mut();
                let mut hooks = hooks.borrow_mut();
                if tap_at == Some(frame) {
                    log::info!("[input] candle tapped");
                    stage.extinguish(anchor, now, &mut *hooks);
                }
                fx.take();
                let (stats, events) = stage.effects_frame(&mut fx, anchor, now, &mut *hooks);
                for ev in events {
                    log::info!("[effects] {:?} at frame {}", ev, frame);
                }
                let stats = stats?;
                if frame % 60 == 0 {
                    log::info!(
                        "[frame {:>4}] flame={:.2} blow={:.2} flames={} smoke={} rockets={} sparks={}",
                        frame,
                        stage.signal.flame_intensity,
                        stage.signal.blow_intensity,
                        stats.flames,
                        stats.smoke,
                        stats.fireworks,
                        stats.sparks
                    );
                }
                Ok(Continuation::Continue)
            }),
        );
    }

    match args.blow_from {
        Some(blow_from) => {
            stage.borrow_mut().on_listening();
            let stage = stage.clone();
            let hooks = hooks.clone();
            let frame_no = frame_no.clone();
            let level = args.blow_level;
            let mut spectrum = vec![0u8; bins];
            scheduler.schedule(
                "breath",
                Box::new(move |now: f64| -> SceneResult<Continuation> {
                    let frame = *frame_no.borrow();
                    spectrum.fill(if frame >= blow_from { level } else { 0 });
                    let mut stage = stage.borrow_mut();
                    let (next, events) =
                        stage.breath_frame(&spectrum, anchor, now, &mut *hooks.borrow_mut());
                    for ev in events {
                        log::info!("[breath] {:?} at frame {}", ev, frame);
                    }
                    Ok(next)
                }),
            );
        }
        None => {
            let _ = stage
                .borrow_mut()
                .on_permission_denied("no microphone in headless mode", &mut *hooks.borrow_mut());
        }
    }

    for frame in 0..args.frames {
        *frame_no.borrow_mut() = frame;
        scheduler.run_frame(frame as f64 * FRAME_MS);
    }

    let stage = stage.borrow();
    log::info!(
        "done: frames={} extinguished={} final_shown={} breath_loop_alive={} effect_errors={}",
        scheduler.frames(),
        stage.is_extinguished(),
        hooks.borrow().final_shown,
        scheduler.is_scheduled("breath"),
        scheduler.failures("effects"),
    );
    if args.blow_from.is_some() && !stage.is_extinguished() {
        log::warn!(
            "breath at level {} never put the candle out (threshold {})",
            args.blow_level,
            stage.config().blow_threshold
        );
    }
    Ok(())
}
