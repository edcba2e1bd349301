//! Gameplay tunables.
//!
//! `RunnerConfig::default()` mirrors the constants module. The session only
//! ever sees a validated config; anything out of range is a startup error.
//! The shipped defaults always pass, so `validate()` only bites when someone
//! retunes the constants or builds a config by hand (tests do both).

use super::constants::*;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Reasons a config is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tick interval must be at least 1ms")]
    ZeroTickInterval,
    #[error("obstacle height range {min}..={max} is empty or non-positive")]
    ObstacleHeightRange { min: i32, max: i32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i32 },
    #[error("jump velocity must point upward (negative), got {0}")]
    JumpVelocity(i32),
    #[error("minimum spawn gap {min} exceeds base spawn gap {base}")]
    SpawnGap { min: i32, base: i32 },
    #[error("spawn gap score divisor must be non-zero")]
    ZeroScoreDivisor,
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub tick_interval_ms: u64,
    pub gravity: i32,
    pub jump_velocity: i32,
    pub run_speed: i32,
    pub obstacle_speed: i32,
    pub obstacle_min_height: i32,
    pub obstacle_max_height: i32,
    pub base_spawn_gap: i32,
    pub min_spawn_gap: i32,
    pub spawn_gap_score_divisor: u64,
    pub cloud_count: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            run_speed: PLAYER_RUN_SPEED,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            base_spawn_gap: BASE_SPAWN_GAP,
            min_spawn_gap: MIN_SPAWN_GAP,
            spawn_gap_score_divisor: SPAWN_GAP_SCORE_DIVISOR,
            cloud_count: CLOUD_COUNT,
        }
    }
}

impl RunnerConfig {
    /// Check every tunable, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.obstacle_min_height <= 0 || self.obstacle_min_height > self.obstacle_max_height {
            return Err(ConfigError::ObstacleHeightRange {
                min: self.obstacle_min_height,
                max: self.obstacle_max_height,
            });
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("run speed", self.run_speed),
            ("obstacle speed", self.obstacle_speed),
            ("minimum spawn gap", self.min_spawn_gap),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.jump_velocity >= 0 {
            return Err(ConfigError::JumpVelocity(self.jump_velocity));
        }
        if self.min_spawn_gap > self.base_spawn_gap {
            return Err(ConfigError::SpawnGap {
                min: self.min_spawn_gap,
                base: self.base_spawn_gap,
            });
        }
        if self.spawn_gap_score_divisor == 0 {
            return Err(ConfigError::ZeroScoreDivisor);
        }
        Ok(())
    }

    pub fn obstacle_heights(&self) -> RangeInclusive<i32> {
        self.obstacle_min_height..=self.obstacle_max_height
    }
}
