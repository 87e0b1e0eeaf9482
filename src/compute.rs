//! Per-frame simulation.
//!
//! `tick` advances every entity in `GameState` by one frame, resolves hits and player
//! collisions, and compacts the collections. Drawing happens through the injected
//! `Presenter` and all randomness through the injected RNG, so tests can drive it with
//! a recording presenter and a seeded RNG.

use glam::Vec2;
use rand::Rng;

use crate::color::Rgb;
use crate::entities::{GameState, Splash};
use crate::geometry::{circle_off_screen, circles_touch};
use crate::presenter::Presenter;

// ── Scoring rules ─────────────────────────────────────────────────────────────

/// Radius taken off an enemy by a non-lethal hit.
pub const SHRINK_STEP: f32 = 10.0;
/// A hit shrinks the enemy only if the remaining radius would stay above this.
pub const MIN_SURVIVING_RADIUS: f32 = 5.0;
pub const SHRINK_SCORE: u32 = 100;
pub const KILL_SCORE: u32 = 250;

/// Splash particles per unit of enemy radius.
const SPLASH_PER_RADIUS: f32 = 2.0;
const SPLASH_MAX_RADIUS: f32 = 2.0;
const SPLASH_MAX_SPEED: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// An enemy reached the player. The loop must stop.
    GameOver { final_score: u32 },
}

/// What a projectile did to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    Shrink,
    Kill,
}

impl HitKind {
    /// Classify a hit on an enemy of the given radius.
    pub fn for_radius(radius: f32) -> Self {
        if radius - SHRINK_STEP > MIN_SURVIVING_RADIUS {
            HitKind::Shrink
        } else {
            HitKind::Kill
        }
    }

    pub fn score(self) -> u32 {
        match self {
            HitKind::Shrink => SHRINK_SCORE,
            HitKind::Kill => KILL_SCORE,
        }
    }
}

/// Number of splash particles thrown off by a hit on an enemy of `radius`.
pub fn splash_count(radius: f32) -> usize {
    (radius.max(0.0) * SPLASH_PER_RADIUS).floor() as usize
}

/// Burst of splash particles at a hit point.
pub fn splash_burst(
    at: Vec2,
    enemy_radius: f32,
    color: Rgb,
    rng: &mut impl Rng,
) -> Vec<Splash> {
    (0..splash_count(enemy_radius))
        .map(|_| {
            let radius = rng.gen::<f32>() * SPLASH_MAX_RADIUS;
            let vx = (rng.gen::<f32>() - 0.5) * (rng.gen::<f32>() * SPLASH_MAX_SPEED);
            let vy = (rng.gen::<f32>() - 0.5) * (rng.gen::<f32>() * SPLASH_MAX_SPEED);
            Splash::new(at, radius, color, Vec2::new(vx, vy))
        })
        .collect()
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order is fixed: trail fade, player, splashes, projectiles, then enemies (each
/// checked against the player and then against every projectile not yet spent on a hit). Removals are
/// only marked during traversal and applied once at the end, so no element is skipped
/// or removed twice. `shrink_ticks` is the duration of the radius tween started by a
/// non-lethal hit.
pub fn tick<P: Presenter>(
    state: &mut GameState,
    out: &mut P,
    rng: &mut impl Rng,
    shrink_ticks: u32,
) -> TickOutcome {
    state.frame += 1;
    let score_before = state.score;

    // ── 1. Fade previous frame into a trail ─────────────────────────────────
    out.clear_with_trail(state.width, state.height);

    // ── 2. Player ───────────────────────────────────────────────────────────
    state.player.render(out);

    // ── 3. Splashes ─────────────────────────────────────────────────────────
    let mut dead_splashes = vec![false; state.splashes.len()];
    for (i, splash) in state.splashes.iter_mut().enumerate() {
        if splash.is_faded() {
            dead_splashes[i] = true;
        } else {
            splash.update(out);
        }
    }

    // ── 4. Projectiles ──────────────────────────────────────────────────────
    let (width, height) = (state.width, state.height);
    // Off-screen shots are culled after the tick but can still hit this tick
    let mut off_screen = vec![false; state.projectiles.len()];
    for (i, projectile) in state.projectiles.iter_mut().enumerate() {
        projectile.update(out);
        if circle_off_screen(projectile.pos, projectile.radius, width, height) {
            off_screen[i] = true;
        }
    }
    let mut consumed = vec![false; state.projectiles.len()];

    // ── 5. Enemies ──────────────────────────────────────────────────────────
    let mut dead_enemies = vec![false; state.enemies.len()];
    let mut bursts: Vec<Splash> = Vec::new();
    let mut player_hit = false;

    for (ei, enemy) in state.enemies.iter_mut().enumerate() {
        enemy.update(out);

        // 5b. Enemy reached the player: nothing else runs this tick
        if circles_touch(
            state.player.pos,
            state.player.radius,
            enemy.pos,
            enemy.radius,
        ) {
            player_hit = true;
            break;
        }

        // 5c. Projectiles against this enemy
        for (pi, projectile) in state.projectiles.iter().enumerate() {
            if consumed[pi] {
                continue;
            }
            if !circles_touch(projectile.pos, projectile.radius, enemy.pos, enemy.radius) {
                continue;
            }

            bursts.extend(splash_burst(projectile.pos, enemy.radius, enemy.color, rng));

            let hit = HitKind::for_radius(enemy.radius);
            state.score += hit.score();
            consumed[pi] = true;

            match hit {
                HitKind::Shrink => {
                    enemy.shrink_to(enemy.radius - SHRINK_STEP, shrink_ticks);
                }
                HitKind::Kill => {
                    log::debug!("Enemy killed (r={:.1})", enemy.radius);
                    dead_enemies[ei] = true;
                    break;
                }
            }
        }
    }

    let dead_projectiles: Vec<bool> = off_screen
        .iter()
        .zip(&consumed)
        .map(|(&gone, &spent)| gone || spent)
        .collect();

    state.splashes.extend(bursts);
    compact(&mut state.splashes, &dead_splashes);
    compact(&mut state.projectiles, &dead_projectiles);
    compact(&mut state.enemies, &dead_enemies);

    if state.score != score_before {
        out.display_score(state.score);
    }

    if player_hit {
        log::info!("Game over at frame {} with score {}", state.frame, state.score);
        return TickOutcome::GameOver {
            final_score: state.score,
        };
    }

    TickOutcome::Continue
}

/// Drop every element whose `dead` flag is set, keeping order. Elements appended
/// after the flags were taken (index beyond `dead`) are kept.
fn compact<T>(items: &mut Vec<T>, dead: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !dead.get(index).copied().unwrap_or(false);
        index += 1;
        keep
    });
}
