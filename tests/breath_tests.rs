// Host-side tests for the breath detection control loop.

mod common;

use birthday_core::{
    BreathDetector, BreathState, BreathTick, CandleAnchor, Continuation, SceneConfig, SceneEvent,
    SceneSignal, Stage,
};
use common::RecordingHooks;

const BINS: usize = 128;

fn listening() -> (BreathDetector, SceneSignal) {
    let mut detector = BreathDetector::new(&SceneConfig::default());
    let mut signal = SceneSignal::default();
    detector.on_listening(&mut signal);
    (detector, signal)
}

#[test]
fn silence_regrows_flame_to_exactly_one() {
    let (mut d, mut s) = listening();
    s.flame_intensity = 0.3;
    let silent = [0u8; BINS];
    let mut prev = s.flame_intensity;
    for _ in 0..200 {
        assert_eq!(d.sample(&silent, &mut s), BreathTick::Continue);
        assert!(s.flame_intensity <= 1.0, "drifted to {}", s.flame_intensity);
        if prev < 1.0 {
            let expected = (prev + 0.02).min(1.0);
            assert!((s.flame_intensity - expected).abs() < 1e-6);
        }
        prev = s.flame_intensity;
    }
    assert_eq!(s.flame_intensity, 1.0);
}

#[test]
fn quiet_room_below_threshold_counts_as_silence() {
    let (mut d, mut s) = listening();
    s.flame_intensity = 0.5;
    d.sample(&[15u8; BINS], &mut s);
    assert_eq!(s.blow_intensity, 0.0);
    assert!((s.flame_intensity - 0.52).abs() < 1e-6);
}

#[test]
fn blowing_quenches_proportionally() {
    let (mut d, mut s) = listening();
    s.flame_intensity = 1.0;
    // avg 30 -> blow (30 - 15) / 15 = 1.0 -> flame loses 0.03 per tick
    assert_eq!(d.sample(&[30u8; BINS], &mut s), BreathTick::Continue);
    assert!((s.blow_intensity - 1.0).abs() < 1e-6);
    assert!((s.flame_intensity - 0.97).abs() < 1e-6);
}

#[test]
fn saturated_analyser_blows_past_one() {
    let (mut d, mut s) = listening();
    s.flame_intensity = 1.0;
    // (255 - 15) / 15
    assert_eq!(d.sample(&[255u8; BINS], &mut s), BreathTick::Continue);
    assert!((s.blow_intensity - 16.0).abs() < 1e-5);
    assert!((s.flame_intensity - 0.52).abs() < 1e-5);
    assert_eq!(d.sample(&[255u8; BINS], &mut s), BreathTick::Extinguish);
}

#[test]
fn blow_decays_before_flame_recovers() {
    let (mut d, mut s) = listening();
    s.flame_intensity = 0.8;
    d.sample(&[24u8; BINS], &mut s); // blow 0.6
    let after_blow = s.flame_intensity;
    let silent = [0u8; BINS];
    let mut ticks = 0;
    while s.blow_intensity > 0.0 {
        d.sample(&silent, &mut s);
        ticks += 1;
        if s.blow_intensity > 0.0 {
            assert_eq!(s.flame_intensity, after_blow, "recovered while still blowing");
        }
        assert!(ticks < 20);
    }
    assert!(ticks >= 6);
}

#[test]
fn sustained_blow_extinguishes_exactly_once() {
    let mut stage = Stage::new(SceneConfig::default().with_seed(5), 0.0);
    let mut hooks = RecordingHooks::default();
    stage.on_listening();
    stage.signal.flame_intensity = 1.0;
    let anchor = CandleAnchor::new(200.0, 300.0);
    let loud = [45u8; BINS]; // avg well above threshold + 15

    let mut extinguished = 0;
    let mut stopped_at = None;
    for tick in 0..500 {
        let (next, events) = stage.breath_frame(&loud, anchor, tick as f64 * 16.0, &mut hooks);
        extinguished += events
            .iter()
            .filter(|e| **e == SceneEvent::Extinguished)
            .count();
        if next == Continuation::Stop {
            stopped_at = Some(tick);
            break;
        }
    }
    assert_eq!(extinguished, 1);
    assert!(stopped_at.is_some(), "sampling loop never stopped");
    assert!(stage.is_extinguished());
    assert_eq!(stage.signal.flame_intensity, 0.0);
    assert_eq!(stage.system.smoke().len(), 50);
    assert_eq!(stage.breath.state(), BreathState::Extinguished);
    assert_eq!(hooks.mic_hidden, 1);
}

#[test]
fn rapid_blow_release_cycling_never_exceeds_ceiling() {
    let (mut d, mut s) = listening();
    s.flame_intensity = 0.99;
    let patterns: [&[u8]; 4] = [&[16u8; BINS], &[0u8; BINS], &[0u8; BINS], &[17u8; BINS]];
    for i in 0..5000 {
        let bins = patterns[i % patterns.len()];
        if d.sample(bins, &mut s) == BreathTick::Extinguish {
            break;
        }
        assert!(s.flame_intensity <= 1.0);
        assert!(s.flame_intensity >= 0.0);
        assert!(s.blow_intensity >= 0.0);
    }
}

#[test]
fn sampling_stops_once_scene_is_out() {
    let (mut d, mut s) = listening();
    s.is_extinguished = true;
    assert_eq!(d.sample(&[0u8; BINS], &mut s), BreathTick::Stop);
    assert_eq!(d.state(), BreathState::Extinguished);
}

#[test]
fn denied_microphone_reports_to_ui_and_keeps_tap_mode() {
    let mut stage = Stage::new(SceneConfig::default().with_seed(1), 0.0);
    let mut hooks = RecordingHooks::default();
    stage.on_permission_denied("NotAllowedError", &mut hooks);
    assert_eq!(hooks.mic_denied.len(), 1);
    assert!(!stage.is_listening());
    assert!(stage.extinguish(CandleAnchor::new(0.0, 0.0), 10.0, &mut hooks));
    assert!(stage.is_extinguished());
}
