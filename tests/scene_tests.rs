// Host-side tests for the scene lifecycle: ignition, extinguish, final greeting.

mod common;

use birthday_core::{
    CandleAnchor, ParticleSystem, Recorder, SceneConfig, SceneController, SceneEvent,
    SceneSignal, Stage,
};
use common::RecordingHooks;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn parts() -> (SceneController, SceneSignal, ParticleSystem, RecordingHooks) {
    let config = SceneConfig::default();
    (
        SceneController::new(&config, 100.0),
        SceneSignal::default(),
        ParticleSystem::new(&config),
        RecordingHooks::default(),
    )
}

#[test]
fn candle_lights_two_seconds_after_start() {
    let (mut c, mut s, mut sys, mut hooks) = parts();
    assert!(c.poll(&mut s, &mut sys, 2099.0, &mut hooks).is_empty());
    assert_eq!(s.flame_intensity, 0.0);

    let events = c.poll(&mut s, &mut sys, 2100.0, &mut hooks);
    assert_eq!(events.as_slice(), &[SceneEvent::Ignited]);
    assert_eq!(s.flame_intensity, 1.0);
    assert!(c.is_ignited());

    s.flame_intensity = 0.4;
    assert!(c.poll(&mut s, &mut sys, 5000.0, &mut hooks).is_empty());
    assert_eq!(s.flame_intensity, 0.4, "ignition must fire once");
}

#[test]
fn early_tap_keeps_candle_dark() {
    let (mut c, mut s, mut sys, mut hooks) = parts();
    let mut rng = StdRng::seed_from_u64(1);
    let anchor = CandleAnchor::new(0.0, 0.0);
    assert!(c.extinguish(&mut s, &mut sys, anchor, 500.0, &mut hooks, &mut rng));
    let events = c.poll(&mut s, &mut sys, 2200.0, &mut hooks);
    assert!(!events.contains(&SceneEvent::Ignited));
    assert_eq!(s.flame_intensity, 0.0);
}

#[test]
fn extinguish_is_idempotent() {
    let (mut c, mut s, mut sys, mut hooks) = parts();
    let mut rng = StdRng::seed_from_u64(2);
    let anchor = CandleAnchor::new(320.0, 240.0);
    s.flame_intensity = 1.0;
    s.blow_intensity = 0.7;
    s.is_listening = true;

    assert!(c.extinguish(&mut s, &mut sys, anchor, 3000.0, &mut hooks, &mut rng));
    assert!(!c.extinguish(&mut s, &mut sys, anchor, 3001.0, &mut hooks, &mut rng));
    assert!(!c.extinguish(&mut s, &mut sys, anchor, 3500.0, &mut hooks, &mut rng));

    assert!(s.is_extinguished);
    assert!(!s.is_listening);
    assert_eq!(s.flame_intensity, 0.0);
    assert_eq!(s.blow_intensity, 0.0);
    assert_eq!(sys.smoke().len(), 50);
    assert!(sys.smoke().iter().all(|p| p.position == anchor.smoke_origin()));
    assert_eq!(hooks.mic_hidden, 1);
}

#[test]
fn final_scene_follows_extinguish_once() {
    let (mut c, mut s, mut sys, mut hooks) = parts();
    let mut rng = StdRng::seed_from_u64(3);
    c.extinguish(&mut s, &mut sys, CandleAnchor::new(0.0, 0.0), 4000.0, &mut hooks, &mut rng);

    assert!(c.poll(&mut s, &mut sys, 4799.0, &mut hooks).is_empty());
    assert!(sys.is_enabled());

    let events = c.poll(&mut s, &mut sys, 4800.0, &mut hooks);
    assert_eq!(events.as_slice(), &[SceneEvent::FinalScene]);
    assert!(c.final_shown());
    assert!(!sys.is_enabled());
    assert_eq!(hooks.final_scene, 1);
    assert_eq!(hooks.effects_hidden, 1);
    assert_eq!(hooks.media_started, 1);

    for t in [4900.0, 6000.0, 60_000.0] {
        assert!(c.poll(&mut s, &mut sys, t, &mut hooks).is_empty());
    }
    assert_eq!(hooks.final_scene, 1);
    assert_eq!(hooks.media_started, 1);
}

#[test]
fn blocked_media_does_not_abort_final_scene() {
    let (mut c, mut s, mut sys, mut hooks) = parts();
    hooks.fail_media = true;
    let mut rng = StdRng::seed_from_u64(4);
    c.extinguish(&mut s, &mut sys, CandleAnchor::new(0.0, 0.0), 0.0, &mut hooks, &mut rng);
    let events = c.poll(&mut s, &mut sys, 1000.0, &mut hooks);
    assert_eq!(events.as_slice(), &[SceneEvent::FinalScene]);
    assert_eq!(hooks.final_scene, 1);
    assert_eq!(hooks.effects_hidden, 1);
    assert!(!sys.is_enabled());
}

#[test]
fn effects_stop_drawing_after_final_scene() {
    let mut stage = Stage::new(SceneConfig::default().with_seed(9), 0.0);
    let mut hooks = RecordingHooks::default();
    let anchor = CandleAnchor::new(200.0, 300.0);
    let mut fx = Recorder::new(400.0, 600.0);

    let (stats, events) = stage.effects_frame(&mut fx, anchor, 2500.0, &mut hooks);
    stats.unwrap();
    assert_eq!(events.as_slice(), &[SceneEvent::Ignited]);
    assert!(!fx.take().is_empty());

    assert!(stage.extinguish(anchor, 3000.0, &mut hooks));
    let (stats, events) = stage.effects_frame(&mut fx, anchor, 3016.0, &mut hooks);
    stats.unwrap();
    assert!(events.is_empty());
    assert!(fx.circles() > 0, "smoke should be drawn before the final scene");
    fx.take();

    let (stats, events) = stage.effects_frame(&mut fx, anchor, 3800.0, &mut hooks);
    stats.unwrap();
    assert_eq!(events.as_slice(), &[SceneEvent::FinalScene]);
    assert_eq!(hooks.final_scene, 1);
    assert!(fx.take().is_empty());
    let (stats, events) = stage.effects_frame(&mut fx, anchor, 3816.0, &mut hooks);
    stats.unwrap();
    assert!(events.is_empty());
    assert!(fx.commands.is_empty());
}

#[test]
fn transitions_are_reported_even_when_drawing_fails() {
    let mut stage = Stage::new(SceneConfig::default().with_seed(12), 0.0);
    let mut hooks = RecordingHooks::default();
    let mut fx = Recorder::new(400.0, 600.0).fail_after(0);
    let anchor = CandleAnchor::new(0.0, 0.0);
    let (stats, events) = stage.effects_frame(&mut fx, anchor, 2000.0, &mut hooks);
    assert!(stats.is_err());
    assert_eq!(events.as_slice(), &[SceneEvent::Ignited]);
    assert_eq!(stage.signal.flame_intensity, 1.0);
}
