//! All game entity types: plain data plus their per-tick draw/move step.
//!
//! No entity holds a reference to another; `GameState` owns every collection and the
//! simulation tick in `compute` orchestrates them.

use glam::Vec2;

use crate::color::Rgb;
use crate::presenter::Presenter;
use crate::tween::RadiusTween;

pub const PLAYER_RADIUS: f32 = 10.0;
pub const PLAYER_COLOR: Rgb = Rgb::hex(0xfafafa);

/// Per-tick velocity multiplier for splash particles.
pub const SPLASH_DAMPING: f32 = 0.99;
/// Alpha lost by a splash particle each tick.
pub const SPLASH_FADE: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Before the first start
    Idle,
    Running,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            color: PLAYER_COLOR,
        }
    }

    pub fn render<P: Presenter>(&self, out: &mut P) {
        out.render_circle(self.pos, self.radius, self.color, 1.0);
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub velocity: Vec2,
}

impl Projectile {
    pub fn render<P: Presenter>(&self, out: &mut P) {
        out.render_circle(self.pos, self.radius, self.color, 1.0);
    }

    pub fn update<P: Presenter>(&mut self, out: &mut P) {
        self.render(out);
        self.pos += self.velocity;
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Fixed at spawn; enemies are never re-aimed.
    pub velocity: Vec2,
    /// Active shrink animation after a non-lethal hit.
    pub shrink: Option<RadiusTween>,
}

impl Enemy {
    pub fn new(pos: Vec2, radius: f32, color: Rgb, velocity: Vec2) -> Self {
        Self {
            pos,
            radius: radius.max(0.0),
            color,
            velocity,
            shrink: None,
        }
    }

    pub fn render<P: Presenter>(&self, out: &mut P) {
        out.render_circle(self.pos, self.radius, self.color, 1.0);
    }

    pub fn update<P: Presenter>(&mut self, out: &mut P) {
        self.render(out);
        if let Some(tween) = self.shrink.as_mut() {
            self.radius = tween.advance();
            if tween.is_finished() {
                self.shrink = None;
            }
        }
        self.pos += self.velocity;
    }

    /// Begin shrinking from the current radius to `target` over `duration_ticks`.
    /// Replaces any shrink already in flight.
    pub fn shrink_to(&mut self, target: f32, duration_ticks: u32) {
        self.shrink = Some(RadiusTween::new(self.radius, target, duration_ticks));
    }
}

// ── Splash particles ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Splash {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub velocity: Vec2,
    /// 1.0 at birth; the particle is discarded once this reaches zero.
    pub alpha: f32,
}

impl Splash {
    pub fn new(pos: Vec2, radius: f32, color: Rgb, velocity: Vec2) -> Self {
        Self {
            pos,
            radius: radius.max(0.0),
            color,
            velocity,
            alpha: 1.0,
        }
    }

    pub fn render<P: Presenter>(&self, out: &mut P) {
        out.render_circle(self.pos, self.radius, self.color, self.alpha.max(0.0));
    }

    pub fn update<P: Presenter>(&mut self, out: &mut P) {
        self.render(out);
        self.velocity *= SPLASH_DAMPING;
        self.pos += self.velocity;
        self.alpha -= SPLASH_FADE;
    }

    pub fn is_faded(&self) -> bool {
        self.alpha <= 0.0
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the simulation mutates. Owned by the session and lent by reference to
/// the spawner, the input handler and the tick.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub splashes: Vec<Splash>,
    pub score: u32,
    pub frame: u64,
    /// Surface size in world units.
    pub width: f32,
    pub height: f32,
}

impl GameState {
    pub fn new(width: f32, height: f32) -> Self {
        let center = Vec2::new(width / 2.0, height / 2.0);
        Self {
            player: Player::new(center),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            splashes: Vec::new(),
            score: 0,
            frame: 0,
            width,
            height,
        }
    }

    /// Screen centre: where the player stands, projectiles start and enemies aim.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Back to creation-time defaults, keeping the surface size.
    pub fn reset(&mut self) {
        *self = Self::new(self.width, self.height);
    }
}
