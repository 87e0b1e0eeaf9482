//! Terminal surface. All terminal I/O lives here.
//!
//! The play area is a framebuffer of half-block pixels (two per character cell,
//! stacked vertically with `▀`). The simulation draws into it through `Presenter`;
//! `flush` then writes the whole frame plus the HUD row and any overlay.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;
use splash_shooter::color::{blend, Rgb};
use splash_shooter::presenter::Presenter;
use splash_shooter::GameConfig;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_BG: Color = Color::Black;
const C_HUD_SCORE: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_MODAL_BORDER: Color = Color::White;
const C_MODAL_SCORE: Color = Color::Yellow;

/// Rows reserved above the play area.
const HUD_ROWS: u16 = 1;

pub struct TerminalPresenter {
    cols: u16,
    rows: u16,
    /// World units per half-block pixel.
    scale: f32,
    trail_alpha: f32,
    px_w: usize,
    px_h: usize,
    pixels: Vec<[f32; 3]>,
    score: u32,
    /// `Some(score)` while the start / game-over modal is visible.
    modal: Option<u32>,
}

impl TerminalPresenter {
    pub fn new(cols: u16, rows: u16, config: &GameConfig) -> Self {
        let px_w = cols as usize;
        let px_h = rows.saturating_sub(HUD_ROWS) as usize * 2;
        Self {
            cols,
            rows,
            scale: config.pixel_scale,
            trail_alpha: config.trail_alpha,
            px_w,
            px_h,
            pixels: vec![[0.0; 3]; px_w * px_h],
            score: 0,
            modal: None,
        }
    }

    /// Play-area size in world units.
    pub fn world_size(&self) -> (f32, f32) {
        (self.px_w as f32 * self.scale, self.px_h as f32 * self.scale)
    }

    /// World position under a terminal cell, or `None` on the HUD row.
    pub fn cell_to_world(&self, col: u16, row: u16) -> Option<Vec2> {
        let row = row.checked_sub(HUD_ROWS)?;
        Some(Vec2::new(
            (col as f32 + 0.5) * self.scale,
            (row as f32 * 2.0 + 1.0) * self.scale,
        ))
    }

    fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [f32; 3] {
        &mut self.pixels[y * self.px_w + x]
    }

    /// Write one complete frame.
    pub fn flush<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        self.draw_play_area(out)?;
        self.draw_hud(out)?;
        if let Some(score) = self.modal {
            self.draw_modal(out, score)?;
        }

        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }

    // ── Play area ─────────────────────────────────────────────────────────────

    fn draw_play_area<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for cell_row in 0..self.px_h / 2 {
            out.queue(cursor::MoveTo(0, HUD_ROWS + cell_row as u16))?;
            let mut last: Option<(Rgb, Rgb)> = None;
            for col in 0..self.px_w {
                let top = Rgb::from_unit(self.pixels[cell_row * 2 * self.px_w + col]);
                let bottom = Rgb::from_unit(self.pixels[(cell_row * 2 + 1) * self.px_w + col]);
                if last != Some((top, bottom)) {
                    out.queue(style::SetForegroundColor(to_term(top)))?;
                    out.queue(style::SetBackgroundColor(to_term(bottom)))?;
                    last = Some((top, bottom));
                }
                out.queue(Print('▀'))?;
            }
        }
        Ok(())
    }

    // ── HUD (row 0) ───────────────────────────────────────────────────────────

    fn draw_hud<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(style::SetBackgroundColor(C_HUD_BG))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;

        out.queue(cursor::MoveTo(1, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(format!("Score: {}", self.score)))?;

        let hint = "CLICK : Fire   Q : Quit";
        let hx = self.cols.saturating_sub(hint.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(hx, 0))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(hint))?;
        Ok(())
    }

    // ── Start / game-over modal ───────────────────────────────────────────────

    fn draw_modal<W: Write>(&self, out: &mut W, score: u32) -> std::io::Result<()> {
        let score_line = format!("{} Points", score);
        let lines: &[(&str, Color)] = &[
            ("╔══════════════════════╗", C_MODAL_BORDER),
            ("║    SPLASH SHOOTER    ║", C_MODAL_BORDER),
            ("╚══════════════════════╝", C_MODAL_BORDER),
            (&score_line, C_MODAL_SCORE),
            ("ENTER - Start Game   Q - Quit", C_MODAL_BORDER),
        ];

        let cx = self.cols / 2;
        let start_row = (self.rows / 2).saturating_sub(lines.len() as u16 / 2);

        out.queue(style::SetBackgroundColor(Color::Black))?;
        for (i, (msg, color)) in lines.iter().enumerate() {
            let row = start_row + i as u16;
            let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(*color))?;
            out.queue(Print(*msg))?;
        }
        Ok(())
    }
}

impl Presenter for TerminalPresenter {
    fn clear_with_trail(&mut self, _width: f32, _height: f32) {
        let keep = 1.0 - self.trail_alpha;
        for px in &mut self.pixels {
            px[0] *= keep;
            px[1] *= keep;
            px[2] *= keep;
        }
    }

    fn render_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        if self.px_w == 0 || self.px_h == 0 || alpha <= 0.0 {
            return;
        }
        let src = color.to_unit();
        let radius = radius.max(0.0);

        let x0 = ((center.x - radius) / self.scale).floor().max(0.0) as usize;
        let y0 = ((center.y - radius) / self.scale).floor().max(0.0) as usize;
        let x1 = (((center.x + radius) / self.scale).ceil().max(0.0) as usize).min(self.px_w);
        let y1 = (((center.y + radius) / self.scale).ceil().max(0.0) as usize).min(self.px_h);

        let mut covered = false;
        for y in y0..y1 {
            for x in x0..x1 {
                let pc = Vec2::new((x as f32 + 0.5) * self.scale, (y as f32 + 0.5) * self.scale);
                if pc.distance(center) <= radius {
                    let px = self.pixel_mut(x, y);
                    *px = blend(*px, src, alpha);
                    covered = true;
                }
            }
        }

        // Circles smaller than a pixel still light the pixel under their centre
        if !covered && center.x >= 0.0 && center.y >= 0.0 {
            let x = (center.x / self.scale) as usize;
            let y = (center.y / self.scale) as usize;
            if x < self.px_w && y < self.px_h {
                let px = self.pixel_mut(x, y);
                *px = blend(*px, src, alpha);
            }
        }
    }

    fn display_score(&mut self, score: u32) {
        self.score = score;
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.modal = Some(final_score);
    }

    fn hide_game_over(&mut self) {
        self.modal = None;
    }
}

fn to_term(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}
