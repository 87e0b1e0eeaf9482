//! Presentation boundary.
//!
//! The simulation never touches a screen directly. Entities draw through a
//! `Presenter`, and the session reports score and game-over changes to it. The binary
//! supplies a terminal implementation; `RecordingPresenter` captures calls headlessly.

use glam::Vec2;

use crate::color::Rgb;

pub trait Presenter {
    /// Paint a translucent overlay over the whole surface so old frames fade into trails.
    fn clear_with_trail(&mut self, width: f32, height: f32);
    /// Draw a filled circle in world coordinates.
    fn render_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
    fn display_score(&mut self, score: u32);
    fn show_game_over(&mut self, final_score: u32);
    fn hide_game_over(&mut self);
}

/// One call made against a `RecordingPresenter`.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    ClearWithTrail { width: f32, height: f32 },
    Circle { center: Vec2, radius: f32, color: Rgb, alpha: f32 },
    Score(u32),
    GameOver(u32),
    HideGameOver,
}

/// Headless presenter that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<DrawCall>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
    }

    /// Most recent score pushed to the display, if any.
    pub fn last_score(&self) -> Option<u32> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::Score(s) => Some(*s),
            _ => None,
        })
    }

    /// Final score of the most recent game-over overlay, if any.
    pub fn game_over_score(&self) -> Option<u32> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::GameOver(s) => Some(*s),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn clear_with_trail(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::ClearWithTrail { width, height });
    }

    fn render_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn display_score(&mut self, score: u32) {
        self.calls.push(DrawCall::Score(score));
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.calls.push(DrawCall::GameOver(final_score));
    }

    fn hide_game_over(&mut self) {
        self.calls.push(DrawCall::HideGameOver);
    }
}
