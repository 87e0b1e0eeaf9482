//! Angle and distance helpers on top of `glam::Vec2`.

use glam::Vec2;

/// Circles count as touching once the gap between their edges drops below this.
pub const TOUCH_MARGIN: f32 = 1.0;

/// Angle (radians) of the ray from `from` to `to`.
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Velocity of magnitude `speed` along `angle`.
#[inline]
pub fn heading(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * speed
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// `dist - ra - rb < 1`: the contact test shared by hits and player collisions.
#[inline]
pub fn circles_touch(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) - ra - rb < TOUCH_MARGIN
}

/// True when the circle lies entirely outside `[0, width] x [0, height]` on some side.
pub fn circle_off_screen(center: Vec2, radius: f32, width: f32, height: f32) -> bool {
    center.x + radius < 0.0
        || center.x - radius > width
        || center.y + radius < 0.0
        || center.y - radius > height
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn angle_to_cardinal_directions() {
        let o = Vec2::ZERO;
        assert!((angle_to(o, Vec2::new(1.0, 0.0))).abs() < 1e-6);
        assert!((angle_to(o, Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((angle_to(o, Vec2::new(-1.0, 0.0)).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn heading_has_requested_speed() {
        let v = heading(0.7, 5.0);
        assert!((v.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn touch_uses_strict_margin() {
        // gap of exactly 1 is not a touch
        assert!(!circles_touch(Vec2::ZERO, 5.0, Vec2::new(16.0, 0.0), 10.0));
        assert!(circles_touch(Vec2::ZERO, 5.0, Vec2::new(15.9, 0.0), 10.0));
    }

    #[test]
    fn off_screen_requires_full_exit() {
        assert!(!circle_off_screen(Vec2::new(-4.0, 10.0), 5.0, 100.0, 100.0));
        assert!(circle_off_screen(Vec2::new(-6.0, 10.0), 5.0, 100.0, 100.0));
        assert!(circle_off_screen(Vec2::new(50.0, 106.0), 5.0, 100.0, 100.0));
        assert!(!circle_off_screen(Vec2::new(105.0, 50.0), 5.0, 100.0, 100.0));
    }
}
