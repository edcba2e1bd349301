//! Core game state and logic.

pub mod collision;
pub mod config;
pub mod constants;
pub mod entities;
pub mod session;
pub mod spawner;

pub use collision::collides;
pub use config::{ConfigError, RunnerConfig};
pub use entities::{Bounded, Bounds, Obstacle, Player};
pub use session::{GameSession, TickOutcome};
pub use spawner::{maybe_spawn, spawn_gap};
