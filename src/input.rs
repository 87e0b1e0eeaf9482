//! Pointer input → projectiles.

use glam::Vec2;

use crate::color::Rgb;
use crate::entities::{GameState, Projectile};
use crate::geometry::{angle_to, heading};

pub const PROJECTILE_RADIUS: f32 = 5.0;
pub const PROJECTILE_SPEED: f32 = 5.0;
pub const PROJECTILE_COLOR: Rgb = Rgb::hex(0xfafafa);

/// Projectile leaving `origin` toward `pointer`. A pointer exactly on the origin fires
/// along +x.
pub fn projectile_towards(origin: Vec2, pointer: Vec2) -> Projectile {
    Projectile {
        pos: origin,
        radius: PROJECTILE_RADIUS,
        color: PROJECTILE_COLOR,
        velocity: heading(angle_to(origin, pointer), PROJECTILE_SPEED),
    }
}

/// Fire from the screen centre toward `pointer`. Any coordinate is accepted; shots
/// aimed off-screen simply leave and get culled.
pub fn fire_projectile(state: &mut GameState, pointer: Vec2) {
    let projectile = projectile_towards(state.center(), pointer);
    state.projectiles.push(projectile);
}
