// Host-side tests for rockets, bursts and sparks.

use birthday_core::spark::burst_of;
use birthday_core::{create_burst, ExplosionType, Firework, Flight};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn rocket_launches_from_bottom_center() {
    let mut r = rng(1);
    let fw = Firework::launch(Vec2::new(800.0, 600.0), Vec2::new(100.0, 50.0), &mut r);
    assert_eq!(fw.start, Vec2::new(400.0, 600.0));
    assert!((fw.distance_to_target - Vec2::new(-300.0, -550.0).length()).abs() < 1e-3);
    assert!(fw.speed >= 2.0 && fw.speed <= 4.0);
    assert!(fw.brightness >= 50.0 && fw.brightness <= 70.0);
    assert!(fw.hue >= 0.0 && fw.hue < 360.0);
    assert_eq!(fw.trail().tail(), Some(fw.start));
}

#[test]
fn random_targets_stay_in_upper_half() {
    let mut r = rng(2);
    let size = Vec2::new(1024.0, 768.0);
    for _ in 0..500 {
        let fw = Firework::random(size, &mut r);
        assert!(fw.target.x >= 0.0 && fw.target.x <= size.x);
        assert!(fw.target.y >= 0.0 && fw.target.y <= size.y * 0.5);
    }
}

#[test]
fn rocket_explodes_within_bounded_frames() {
    let mut r = rng(3);
    // Worst case: slowest start speed, farthest target on a large surface.
    let size = Vec2::new(4000.0, 4000.0);
    for target in [Vec2::new(0.0, 0.0), Vec2::new(4000.0, 0.0), Vec2::new(2000.0, 3999.0)] {
        let mut fw = Firework::launch(size, target, &mut r);
        fw.speed = 2.0;
        // 2 * 1.05^n summed covers the ~5700px diagonal in about 101 frames
        let mut frames = 0;
        let mut exploded = None;
        while frames < 150 {
            frames += 1;
            if let Flight::Exploded { at, hue } = fw.update() {
                exploded = Some((at, hue));
                break;
            }
        }
        let (at, hue) = exploded.expect("rocket never exploded");
        assert_eq!(at, target);
        assert_eq!(hue, fw.hue);
    }
}

#[test]
fn rocket_accelerates_and_keeps_three_point_trail() {
    let mut r = rng(4);
    let mut fw = Firework::launch(Vec2::new(800.0, 600.0), Vec2::new(400.0, 0.0), &mut r);
    let mut prev_speed = fw.speed;
    let mut prev_pos = fw.position;
    for _ in 0..5 {
        assert_eq!(fw.update(), Flight::Ascending);
        assert!((fw.speed - prev_speed * 1.05).abs() < 1e-4);
        assert_eq!(fw.trail().points()[0], prev_pos);
        assert!(fw.position.y < prev_pos.y, "rocket must climb");
        prev_speed = fw.speed;
        prev_pos = fw.position;
    }
    assert_eq!(fw.trail().points().len(), 3);
}

#[test]
fn explosion_type_weights() {
    assert_eq!(ExplosionType::from_draw(0.0), ExplosionType::Fast);
    assert_eq!(ExplosionType::from_draw(0.19), ExplosionType::Fast);
    assert_eq!(ExplosionType::from_draw(0.2), ExplosionType::Normal);
    assert_eq!(ExplosionType::from_draw(0.7), ExplosionType::Normal);
    assert_eq!(ExplosionType::from_draw(0.71), ExplosionType::Large);

    let mut r = rng(5);
    let mut counts = [0usize; 3];
    for _ in 0..10_000 {
        match ExplosionType::pick(&mut r) {
            ExplosionType::Normal => counts[0] += 1,
            ExplosionType::Large => counts[1] += 1,
            ExplosionType::Fast => counts[2] += 1,
        }
    }
    assert!((4500..5500).contains(&counts[0]), "normal {}", counts[0]);
    assert!((2500..3500).contains(&counts[1]), "large {}", counts[1]);
    assert!((1500..2500).contains(&counts[2]), "fast {}", counts[2]);
}

#[test]
fn bursts_match_their_profile() {
    let mut r = rng(6);
    let origin = Vec2::new(300.0, 200.0);
    for kind in [ExplosionType::Normal, ExplosionType::Large, ExplosionType::Fast] {
        let profile = kind.profile();
        let sparks = burst_of(kind, origin, 120.0, &mut r);
        assert_eq!(sparks.len(), profile.count);
        for s in &sparks {
            assert_eq!(s.explosion_type, kind);
            assert!(s.speed >= profile.speed.0 && s.speed <= profile.speed.1);
            assert!(s.decay >= profile.decay.0 && s.decay <= profile.decay.1);
            assert_eq!(s.friction, profile.friction);
            assert!(s.hue >= 100.0 && s.hue <= 140.0);
            assert!(s.brightness >= 50.0 && s.brightness <= 80.0);
            assert!(s.angle >= 0.0 && s.angle <= std::f32::consts::TAU);
            assert_eq!(s.alpha, 1.0);
            assert!(s.trail().points().iter().all(|p| *p == origin));
        }
    }
}

#[test]
fn random_burst_has_a_category_count() {
    let mut r = rng(7);
    for _ in 0..200 {
        let sparks = create_burst(Vec2::ZERO, 0.0, &mut r);
        assert!(matches!(sparks.len(), 120 | 40 | 50));
        let kind = sparks[0].explosion_type;
        assert_eq!(sparks.len(), kind.profile().count);
        assert!(sparks.iter().all(|s| s.explosion_type == kind));
    }
}

#[test]
fn spark_fades_monotonically_and_retires_before_zero() {
    let mut r = rng(8);
    for mut s in burst_of(ExplosionType::Fast, Vec2::ZERO, 200.0, &mut r) {
        let mut prev_alpha = s.alpha;
        let mut prev_speed = s.speed;
        let mut steps = 0;
        while s.is_alive() {
            let y_before = s.position.y;
            let vy_from_angle = s.angle.sin() * s.speed * s.friction;
            s.update();
            assert!(s.alpha < prev_alpha);
            assert!(s.speed < prev_speed);
            assert!((s.position.y - (y_before + vy_from_angle + 1.0)).abs() < 1e-3);
            prev_alpha = s.alpha;
            prev_speed = s.speed;
            steps += 1;
            assert!(steps < 1000);
        }
        assert!(s.alpha <= s.decay);
        assert!(s.alpha > -s.decay);
    }
}
