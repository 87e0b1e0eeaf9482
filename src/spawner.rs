//! Periodic enemy spawner.
//!
//! A `Spawner` only exists while a game is running: the session creates it on entry
//! to the running phase and drops it on exit, so a restart can never leave a second
//! spawner behind.

use glam::Vec2;
use rand::Rng;

use crate::color::Rgb;
use crate::entities::{Enemy, GameState};
use crate::geometry::{angle_to, heading};

pub const ENEMY_MIN_RADIUS: f32 = 4.0;
pub const ENEMY_MAX_RADIUS: f32 = 30.0;
/// Units per tick.
pub const ENEMY_SPEED: f32 = 1.0;

#[derive(Debug)]
pub struct Spawner {
    period: u32,
    countdown: u32,
    spawned: u64,
}

impl Spawner {
    /// Arm a spawner firing every `period_ticks` ticks (at least one). The first enemy
    /// arrives one full period after start.
    pub fn start(period_ticks: u32) -> Self {
        let period = period_ticks.max(1);
        log::debug!("Spawner started (every {} ticks)", period);
        Self {
            period,
            countdown: period,
            spawned: 0,
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// Enemies produced since start.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Count down one tick; when the period elapses, append one enemy to `state`.
    /// Returns whether an enemy was spawned.
    pub fn poll(&mut self, state: &mut GameState, rng: &mut impl Rng) -> bool {
        self.countdown -= 1;
        if self.countdown > 0 {
            return false;
        }
        self.countdown = self.period;
        self.spawned += 1;

        let enemy = random_enemy(state.width, state.height, state.center(), rng);
        log::trace!(
            "Spawned enemy r={:.1} at ({:.1}, {:.1})",
            enemy.radius,
            enemy.pos.x,
            enemy.pos.y
        );
        state.enemies.push(enemy);
        true
    }
}

impl Drop for Spawner {
    fn drop(&mut self) {
        log::debug!("Spawner stopped after {} enemies", self.spawned);
    }
}

/// Roll a new enemy on the left or top edge of a `width` x `height` surface, heading
/// for `target` at `ENEMY_SPEED`.
pub fn random_enemy(width: f32, height: f32, target: Vec2, rng: &mut impl Rng) -> Enemy {
    let radius = rng.gen_range(ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS);

    let pos = if rng.gen_bool(0.5) {
        Vec2::new(-radius, rng.gen::<f32>() * height)
    } else {
        Vec2::new(rng.gen::<f32>() * width, -radius)
    };

    let color = Rgb::from_hsl(rng.gen::<f32>() * 360.0, 0.5, 0.5);
    let velocity = heading(angle_to(pos, target), ENEMY_SPEED);

    Enemy::new(pos, radius, color, velocity)
}
