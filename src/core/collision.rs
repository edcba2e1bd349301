//! Player vs. obstacle collision.

use super::entities::{Bounded, Obstacle, Player};

/// True if the player overlaps any obstacle. Stops at the first hit.
pub fn collides(player: &Player, obstacles: &[Obstacle]) -> bool {
    first_collision(player, obstacles).is_some()
}

/// Index of the first obstacle (in spawn order) overlapping the player.
pub fn first_collision(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let bounds = player.bounds();
    obstacles
        .iter()
        .position(|obstacle| bounds.intersects(&obstacle.bounds()))
}
