use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use splash_shooter::entities::GameState;
use splash_shooter::input::*;
use splash_shooter::spawner::*;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// ── Spawner ───────────────────────────────────────────────────────────────────

#[test]
fn first_enemy_arrives_after_one_period() {
    let mut s = GameState::new(800.0, 600.0);
    let mut rng = seeded_rng();
    let mut spawner = Spawner::start(3);

    assert!(!spawner.poll(&mut s, &mut rng));
    assert!(!spawner.poll(&mut s, &mut rng));
    assert!(s.enemies.is_empty());
    assert!(spawner.poll(&mut s, &mut rng));
    assert_eq!(s.enemies.len(), 1);
}

#[test]
fn one_enemy_per_period() {
    let mut s = GameState::new(800.0, 600.0);
    let mut rng = seeded_rng();
    let mut spawner = Spawner::start(60);
    for _ in 0..600 {
        spawner.poll(&mut s, &mut rng);
    }
    assert_eq!(s.enemies.len(), 10);
    assert_eq!(spawner.spawned(), 10);
}

#[test]
fn zero_period_spawns_every_tick() {
    let mut s = GameState::new(800.0, 600.0);
    let mut rng = seeded_rng();
    let mut spawner = Spawner::start(0);
    assert_eq!(spawner.period(), 1);
    for _ in 0..4 {
        assert!(spawner.poll(&mut s, &mut rng));
    }
    assert_eq!(s.enemies.len(), 4);
}

#[test]
fn enemies_start_on_left_or_top_edge() {
    let (w, h) = (800.0, 600.0);
    let mut rng = seeded_rng();
    let mut left = 0;
    let mut top = 0;
    for _ in 0..500 {
        let e = random_enemy(w, h, Vec2::new(400.0, 300.0), &mut rng);
        assert!(e.radius >= ENEMY_MIN_RADIUS && e.radius < ENEMY_MAX_RADIUS);
        if e.pos.x == -e.radius {
            assert!((0.0..h).contains(&e.pos.y));
            left += 1;
        } else {
            assert_eq!(e.pos.y, -e.radius);
            assert!((0.0..w).contains(&e.pos.x));
            top += 1;
        }
        assert!(e.shrink.is_none());
    }
    // both sides come up with a fair coin
    assert!(left > 150 && top > 150, "left={} top={}", left, top);
}

#[test]
fn enemies_head_for_the_centre_at_unit_speed() {
    let target = Vec2::new(400.0, 300.0);
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let e = random_enemy(800.0, 600.0, target, &mut rng);
        assert!((e.velocity.length() - ENEMY_SPEED).abs() < 1e-5);
        let wanted = (target - e.pos).normalize();
        assert!(e.velocity.normalize().dot(wanted) > 0.9999);
    }
}

#[test]
fn enemy_colours_are_mid_saturation() {
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let c = random_enemy(800.0, 600.0, Vec2::ZERO, &mut rng).color;
        // hsl(h, 50%, 50%) keeps channels inside [64, 191]
        for ch in [c.r, c.g, c.b] {
            assert!((63..=192).contains(&ch), "{:?}", c);
        }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[test]
fn click_fires_from_centre_toward_pointer() {
    let mut s = GameState::new(800.0, 600.0);
    fire_projectile(&mut s, Vec2::new(500.0, 300.0));

    assert_eq!(s.projectiles.len(), 1);
    let p = &s.projectiles[0];
    assert_eq!(p.pos, Vec2::new(400.0, 300.0));
    assert_eq!(p.radius, PROJECTILE_RADIUS);
    assert_eq!(p.color, PROJECTILE_COLOR);
    assert!((p.velocity - Vec2::new(PROJECTILE_SPEED, 0.0)).length() < 1e-5);
}

#[test]
fn click_speed_is_independent_of_distance() {
    let origin = Vec2::new(400.0, 300.0);
    for pointer in [
        Vec2::new(401.0, 301.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(-5000.0, 12000.0),
    ] {
        let p = projectile_towards(origin, pointer);
        assert!((p.velocity.length() - PROJECTILE_SPEED).abs() < 1e-4);
        assert!(p.velocity.normalize().dot((pointer - origin).normalize()) > 0.9999);
    }
}

#[test]
fn click_on_centre_fires_along_x() {
    let origin = Vec2::new(400.0, 300.0);
    let p = projectile_towards(origin, origin);
    assert_eq!(p.velocity, Vec2::new(PROJECTILE_SPEED, 0.0));
}
