//! Radius interpolation for enemies that were hit but survived.
//!
//! The tween is owned by the enemy and stepped by the simulation tick, so there is no
//! animation engine running alongside the loop.

#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTween {
    from: f32,
    to: f32,
    duration: u32,
    elapsed: u32,
}

impl RadiusTween {
    /// Target radius is clamped at zero; duration is at least one tick.
    pub fn new(from: f32, to: f32, duration_ticks: u32) -> Self {
        Self {
            from,
            to: to.max(0.0),
            duration: duration_ticks.max(1),
            elapsed: 0,
        }
    }

    /// Advance one tick and return the radius for this tick.
    pub fn advance(&mut self) -> f32 {
        self.elapsed = (self.elapsed + 1).min(self.duration);
        self.value()
    }

    /// Current radius (quadratic ease-out).
    pub fn value(&self) -> f32 {
        let t = self.elapsed as f32 / self.duration as f32;
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        (self.from + (self.to - self.from) * eased).max(0.0)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
