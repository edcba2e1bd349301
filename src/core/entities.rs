//! Player and obstacle data.
//!
//! Positions are in logical play-area units with y growing downward. Both
//! entities sit with their top edge on the ground line while grounded.

use super::config::RunnerConfig;
use super::constants::*;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Anything the collision checker can test.
pub trait Bounded {
    fn bounds(&self) -> Bounds;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub velocity: i32,
    pub jumping: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub const WIDTH: i32 = PLAYER_WIDTH;
    pub const HEIGHT: i32 = PLAYER_HEIGHT;

    /// A grounded player at the start position.
    pub fn new() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            velocity: 0,
            jumping: false,
        }
    }

    /// One tick of player physics.
    ///
    /// Vertical motion only happens mid-jump: velocity is applied first, then
    /// gravity. Landing on the ground or hitting the ceiling both end the
    /// jump. The player also drifts forward every tick.
    pub fn update(&mut self, config: &RunnerConfig) {
        if self.jumping {
            self.y += self.velocity;
            self.velocity += config.gravity;
            if self.y >= GROUND_TOP {
                self.y = GROUND_TOP;
                self.jumping = false;
            }
            // Ceiling: no bounce, the jump simply ends here.
            if self.y < 0 {
                self.y = 0;
                self.jumping = false;
            }
        }

        self.x = (self.x + config.run_speed).clamp(0, PLAY_WIDTH - Self::WIDTH);
    }

    /// Start a jump unless one is already in progress.
    pub fn jump(&mut self, config: &RunnerConfig) {
        if self.jumping {
            return;
        }
        self.velocity = config.jump_velocity;
        self.jumping = true;
    }

    pub fn is_grounded(&self) -> bool {
        !self.jumping && self.y == GROUND_TOP
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, Self::WIDTH, Self::HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub height: i32,
}

impl Obstacle {
    pub const WIDTH: i32 = OBSTACLE_WIDTH;

    pub fn new(x: i32, y: i32, height: i32) -> Self {
        Self { x, y, height }
    }

    /// Scroll left by `speed` units.
    pub fn update(&mut self, speed: i32) {
        self.x -= speed;
    }

    /// Whether the right edge has passed the left edge of the play area.
    pub fn is_off_screen(&self) -> bool {
        self.x + Self::WIDTH < 0
    }
}

impl Bounded for Obstacle {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, Self::WIDTH, self.height)
    }
}
