//! Obstacle spawning and culling.

use super::config::RunnerConfig;
use super::constants::{GROUND_TOP, PLAY_WIDTH};
use super::entities::Obstacle;
use rand::Rng;

/// Minimum horizontal distance between consecutive obstacles at `score`.
///
/// Shrinks by one unit every `spawn_gap_score_divisor` points and never
/// drops below `min_spawn_gap`.
pub fn spawn_gap(score: u64, config: &RunnerConfig) -> i32 {
    let shrink = i64::try_from(score / config.spawn_gap_score_divisor).unwrap_or(i64::MAX);
    let gap = (config.base_spawn_gap as i64).saturating_sub(shrink);
    gap.max(config.min_spawn_gap as i64) as i32
}

/// Append a new obstacle at the right edge if the newest one has moved far
/// enough in. Returns true when an obstacle was spawned.
pub fn maybe_spawn<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    score: u64,
    config: &RunnerConfig,
    rng: &mut R,
) -> bool {
    let gap = spawn_gap(score, config);
    let has_room = obstacles
        .last()
        .map_or(true, |newest| newest.x < PLAY_WIDTH - gap);

    if !has_room {
        return false;
    }

    let height = rng.gen_range(config.obstacle_heights());
    obstacles.push(Obstacle::new(PLAY_WIDTH, GROUND_TOP, height));
    true
}

/// Scroll every obstacle left, then drop those fully past the left edge.
/// Returns the number removed.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, config: &RunnerConfig) -> usize {
    for obstacle in obstacles.iter_mut() {
        obstacle.update(config.obstacle_speed);
    }

    let before = obstacles.len();
    obstacles.retain(|o| !o.is_off_screen());
    before - obstacles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_gap_formula() {
        let config = RunnerConfig::default();
        assert_eq!(spawn_gap(0, &config), 200);
        assert_eq!(spawn_gap(9, &config), 200);
        assert_eq!(spawn_gap(10, &config), 199);
        assert_eq!(spawn_gap(1000, &config), 100);
        assert_eq!(spawn_gap(1500, &config), 50);
        assert_eq!(spawn_gap(1509, &config), 50);
        assert_eq!(spawn_gap(u64::MAX, &config), 50);
    }

    #[test]
    fn test_spawn_gap_is_non_increasing() {
        let config = RunnerConfig::default();
        let mut previous = spawn_gap(0, &config);
        for score in 1..3000 {
            let gap = spawn_gap(score, &config);
            assert!(gap <= previous, "gap grew at score {}", score);
            assert!(gap >= 50);
            assert_eq!(gap, (200 - (score / 10) as i32).max(50));
            previous = gap;
        }
    }

    #[test]
    fn test_spawns_into_empty_collection() {
        let config = RunnerConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut obstacles = Vec::new();

        assert!(maybe_spawn(&mut obstacles, 0, &config, &mut rng));
        assert_eq!(obstacles.len(), 1);
        let obstacle = obstacles[0];
        assert_eq!(obstacle.x, PLAY_WIDTH);
        assert_eq!(obstacle.y, GROUND_TOP);
        assert!((20..=49).contains(&obstacle.height));
    }

    #[test]
    fn test_waits_for_gap() {
        let config = RunnerConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut obstacles = vec![Obstacle::new(600, GROUND_TOP, 30)];

        // 600 is not strictly left of 800 - 200
        assert!(!maybe_spawn(&mut obstacles, 0, &config, &mut rng));
        assert_eq!(obstacles.len(), 1);

        obstacles[0].x = 599;
        assert!(maybe_spawn(&mut obstacles, 0, &config, &mut rng));
        assert_eq!(obstacles.len(), 2);
    }

    #[test]
    fn test_higher_score_spawns_sooner() {
        let config = RunnerConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut obstacles = vec![Obstacle::new(700, GROUND_TOP, 30)];

        assert!(!maybe_spawn(&mut obstacles, 0, &config, &mut rng));
        // gap is 50 from score 1500 on, so 700 < 750 qualifies
        assert!(maybe_spawn(&mut obstacles, 1500, &config, &mut rng));
    }

    #[test]
    fn test_heights_stay_in_range() {
        let config = RunnerConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..500 {
            let mut obstacles = Vec::new();
            maybe_spawn(&mut obstacles, 0, &config, &mut rng);
            assert!(config.obstacle_heights().contains(&obstacles[0].height));
        }
    }

    #[test]
    fn test_advance_culls_only_fully_hidden() {
        let config = RunnerConfig::default();
        let mut obstacles = vec![
            Obstacle::new(-23, GROUND_TOP, 30),
            Obstacle::new(-13, GROUND_TOP, 30),
            Obstacle::new(400, GROUND_TOP, 30),
        ];

        let removed = advance_obstacles(&mut obstacles, &config);

        // -25 (right edge -5) goes, -15 (right edge 5) stays
        assert_eq!(removed, 1);
        let xs: Vec<i32> = obstacles.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![-15, 398]);
    }
}
