//! Game session: the single owner of all mutable game state, and the fixed
//! timestep loop that advances it.

use super::collision::first_collision;
use super::config::{ConfigError, RunnerConfig};
use super::constants::{MAX_FRAME_MS, PLAY_WIDTH};
use super::entities::{Obstacle, Player};
use super::spawner::{advance_obstacles, maybe_spawn, spawn_gap};
use log::{debug, info};
use rand::Rng;

/// What a single call to [`GameSession::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Entities moved; keep going.
    Advanced,
    /// Entities moved and the player hit an obstacle. The session is now over.
    Collided,
    /// Session was already over; nothing changed, just redraw.
    Halted,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub player: Player,
    /// Spawn order, oldest (leftmost) first.
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub game_over: bool,
    /// Ground scroll, in `(-PLAY_WIDTH, 0]`.
    pub background_offset: i32,
    accumulated_time_ms: u64,
    config: RunnerConfig,
}

impl GameSession {
    /// Start a session with a validated config.
    pub fn new(config: RunnerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            player: Player::new(),
            obstacles: Vec::new(),
            score: 0,
            game_over: false,
            background_offset: 0,
            accumulated_time_ms: 0,
            config,
        })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Current spawn gap for this session's score.
    pub fn spawn_gap(&self) -> i32 {
        spawn_gap(self.score, &self.config)
    }

    /// One fixed step: player, obstacles, collision, score, background.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Halted;
        }

        self.player.update(&self.config);

        if maybe_spawn(&mut self.obstacles, self.score, &self.config, rng) {
            debug!(
                "spawned obstacle (height {}) at score {}",
                self.obstacles.last().map_or(0, |o| o.height),
                self.score
            );
        }
        advance_obstacles(&mut self.obstacles, &self.config);

        let hit = first_collision(&self.player, &self.obstacles);
        if let Some(index) = hit {
            self.game_over = true;
            info!(
                "game over at score {} (obstacle {} at x={})",
                self.score + 1,
                index,
                self.obstacles[index].x
            );
        }

        // The colliding tick still counts toward the score.
        self.score += 1;

        self.background_offset -= 1;
        if self.background_offset <= -PLAY_WIDTH {
            self.background_offset = 0;
        }

        if hit.is_some() {
            TickOutcome::Collided
        } else {
            TickOutcome::Advanced
        }
    }

    /// Feed `dt_ms` of wall-clock time into the fixed-step loop.
    ///
    /// Runs as many whole ticks as have accumulated; leftover time carries to
    /// the next call. `dt_ms` is clamped to `MAX_FRAME_MS`. Returns true if
    /// any tick ran.
    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        if self.game_over {
            return false;
        }

        self.accumulated_time_ms += dt_ms.min(MAX_FRAME_MS);
        let step = self.config.tick_interval_ms;
        let mut changed = false;

        while self.accumulated_time_ms >= step {
            self.accumulated_time_ms -= step;
            changed = true;
            if self.tick(rng) == TickOutcome::Collided {
                self.accumulated_time_ms = 0;
                break;
            }
        }

        changed
    }

    /// Jump input. Ignored once the session is over.
    pub fn jump(&mut self) {
        if self.game_over {
            return;
        }
        self.player.jump(&self.config);
    }

    /// Fresh player, no obstacles, zero score, ticking resumes.
    pub fn reset(&mut self) {
        info!("reset after score {}", self.score);
        self.player = Player::new();
        self.obstacles.clear();
        self.score = 0;
        self.game_over = false;
        self.background_offset = 0;
        self.accumulated_time_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{GROUND_TOP, PLAYER_START_X};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_session() -> GameSession {
        GameSession::new(RunnerConfig::default()).expect("default config is valid")
    }

    #[test]
    fn test_new_session_defaults() {
        let session = new_session();
        assert_eq!(session.score, 0);
        assert!(!session.game_over);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.player, Player::new());
        assert_eq!(session.background_offset, 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RunnerConfig {
            obstacle_min_height: 0,
            ..Default::default()
        };
        assert!(GameSession::new(config).is_err());
    }

    #[test]
    fn test_first_tick_spawns_and_scrolls() {
        let mut session = new_session();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        assert_eq!(session.tick(&mut rng), TickOutcome::Advanced);

        assert_eq!(session.score, 1);
        assert_eq!(session.obstacles.len(), 1);
        // Spawned at the right edge, then scrolled in the same tick
        assert_eq!(session.obstacles[0].x, PLAY_WIDTH - 2);
        assert_eq!(session.player.x, PLAYER_START_X + 1);
        assert_eq!(session.background_offset, -1);
    }

    #[test]
    fn test_background_offset_wraps() {
        let mut session = new_session();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        session.background_offset = -(PLAY_WIDTH - 1);
        // Keep the obstacle lane clear so nothing ends the run
        session.player.y = 0;

        session.tick(&mut rng);
        assert_eq!(session.background_offset, 0);
    }

    #[test]
    fn test_collision_sets_game_over_and_counts_tick() {
        let mut session = new_session();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        session.obstacles.push(Obstacle::new(60, GROUND_TOP, 30));
        // Newest obstacle sits inside the spawn gap, so nothing new appears
        session.obstacles.push(Obstacle::new(700, GROUND_TOP, 30));

        assert_eq!(session.tick(&mut rng), TickOutcome::Collided);
        assert!(session.game_over);
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_halted_session_is_frozen() {
        let mut session = new_session();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        session.game_over = true;
        session.obstacles.push(Obstacle::new(300, GROUND_TOP, 30));
        let before = session.clone();

        assert_eq!(session.tick(&mut rng), TickOutcome::Halted);
        assert!(!session.advance(500, &mut rng));
        session.jump();

        assert_eq!(session.score, before.score);
        assert_eq!(session.player, before.player);
        assert_eq!(session.obstacles, before.obstacles);
    }

    #[test]
    fn test_advance_runs_whole_ticks_only() {
        let mut session = new_session();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        assert!(!session.advance(29, &mut rng));
        assert_eq!(session.score, 0);

        assert!(session.advance(1, &mut rng));
        assert_eq!(session.score, 1);

        assert!(session.advance(60, &mut rng));
        assert_eq!(session.score, 3);
    }

    #[test]
    fn test_advance_clamps_long_frames() {
        let mut session = new_session();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        session.advance(10_000, &mut rng);
        // 100ms cap → 3 ticks, 10ms carried over
        assert_eq!(session.score, 3);
        session.advance(20, &mut rng);
        assert_eq!(session.score, 4);
    }

    #[test]
    fn test_collision_stops_catch_up_ticks() {
        let mut session = new_session();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        session.obstacles.push(Obstacle::new(60, GROUND_TOP, 30));
        session.obstacles.push(Obstacle::new(700, GROUND_TOP, 30));

        // Three ticks are owed, but the first one ends the run
        assert!(session.advance(100, &mut rng));
        assert!(session.game_over);
        assert_eq!(session.score, 1);

        assert!(!session.advance(100, &mut rng));
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_reset_discards_pending_time() {
        let mut session = new_session();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        assert!(!session.advance(20, &mut rng));
        session.reset();

        // The 20ms from before the reset must not count toward the next tick
        assert!(!session.advance(10, &mut rng));
        assert_eq!(session.score, 0);
        assert!(session.advance(20, &mut rng));
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = new_session();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..40 {
            session.tick(&mut rng);
        }
        session.game_over = true;

        session.reset();

        assert_eq!(session.score, 0);
        assert!(!session.game_over);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.player, Player::new());
        assert_eq!(session.tick(&mut rng), TickOutcome::Advanced);
        assert_eq!(session.score, 1);
    }
}
