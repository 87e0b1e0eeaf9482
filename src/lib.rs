//! Splash Shooter - fend off enemies closing in on the centre of the screen.
//!
//! Core modules:
//! - `entities`: pure game data (player, projectiles, enemies, splashes, state)
//! - `compute`: the per-frame simulation tick
//! - `session`: Idle / Running / GameOver state machine and spawner ownership
//! - `spawner`, `input`: the two producers that append to the entity collections
//! - `presenter`: the rendering boundary the simulation draws through

pub mod color;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod presenter;
pub mod session;
pub mod spawner;
pub mod tween;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use session::Game;
