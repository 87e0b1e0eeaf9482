//! Game session: Idle → Running → GameOver → (restart) → Running.
//!
//! The session owns the `GameState` and, while running, the `Spawner`. Entering the
//! running phase creates the spawner; any exit drops it.

use glam::Vec2;
use rand::Rng;

use crate::compute::{tick, TickOutcome};
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus};
use crate::input::fire_projectile;
use crate::presenter::Presenter;
use crate::spawner::Spawner;

#[derive(Debug)]
enum Phase {
    Idle,
    Running { spawner: Spawner },
    GameOver { final_score: u32 },
}

#[derive(Debug)]
pub struct Game {
    state: GameState,
    phase: Phase,
    spawn_period: u32,
    shrink_ticks: u32,
}

impl Game {
    /// New idle session on a `width` x `height` surface (world units).
    pub fn new(width: f32, height: f32, config: &GameConfig) -> Self {
        Self {
            state: GameState::new(width, height),
            phase: Phase::Idle,
            spawn_period: config.spawn_period_ticks(),
            shrink_ticks: config.shrink_ticks(),
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::Idle => GameStatus::Idle,
            Phase::Running { .. } => GameStatus::Running,
            Phase::GameOver { .. } => GameStatus::GameOver,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for callers that stage scenarios (tests, demos).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn final_score(&self) -> Option<u32> {
        match self.phase {
            Phase::GameOver { final_score } => Some(final_score),
            _ => None,
        }
    }

    /// Enemies produced by the current spawner, if one is running.
    pub fn spawned_this_run(&self) -> Option<u64> {
        match &self.phase {
            Phase::Running { spawner } => Some(spawner.spawned()),
            _ => None,
        }
    }

    /// The start button. Resets all state and begins running. Ignored while a game
    /// is already running; returns whether a new run started.
    pub fn start<P: Presenter>(&mut self, out: &mut P) -> bool {
        if let Phase::Running { .. } = self.phase {
            log::debug!("Start ignored: game already running");
            return false;
        }

        let restart = matches!(self.phase, Phase::GameOver { .. });
        // Drop the old phase before arming the new spawner
        self.phase = Phase::Idle;
        self.state.reset();
        out.display_score(self.state.score);
        out.hide_game_over();
        self.phase = Phase::Running {
            spawner: Spawner::start(self.spawn_period),
        };

        if restart {
            log::info!("Game restarted");
        } else {
            log::info!("Game started");
        }
        true
    }

    /// Pointer press at `pos` (world units). Only fires while running; returns whether
    /// a projectile was queued.
    pub fn pointer_down(&mut self, pos: Vec2) -> bool {
        if let Phase::Running { .. } = self.phase {
            fire_projectile(&mut self.state, pos);
            true
        } else {
            log::trace!("Pointer at ({:.1}, {:.1}) ignored outside a run", pos.x, pos.y);
            false
        }
    }

    /// Run one frame: poll the spawner, then tick the simulation. Does nothing unless
    /// running. On player collision the spawner is dropped and the game-over overlay
    /// is shown.
    pub fn frame<P: Presenter>(&mut self, out: &mut P, rng: &mut impl Rng) -> GameStatus {
        let Phase::Running { spawner } = &mut self.phase else {
            return self.status();
        };

        spawner.poll(&mut self.state, rng);

        if let TickOutcome::GameOver { final_score } =
            tick(&mut self.state, out, rng, self.shrink_ticks)
        {
            self.phase = Phase::GameOver { final_score };
            out.show_game_over(final_score);
        }

        self.status()
    }
}
