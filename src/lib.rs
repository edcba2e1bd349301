//! Endless Runner - terminal side-scroller.
//!
//! The library exposes the game model and terminal rendering so the binary
//! stays a thin event loop and the integration tests can drive everything.

pub mod build_info;
pub mod core;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use crate::core::config::{ConfigError, RunnerConfig};
pub use crate::core::constants::*;
pub use crate::core::session::{GameSession, TickOutcome};
