// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 30;
/// Longest stretch of wall-clock time a single frame may feed the tick accumulator.
pub const MAX_FRAME_MS: u64 = 100;

// Play area (logical units, y grows downward)
pub const PLAY_WIDTH: i32 = 800;
pub const PLAY_HEIGHT: i32 = 400;
pub const GROUND_HEIGHT: i32 = 50;
pub const GROUND_TOP: i32 = PLAY_HEIGHT - GROUND_HEIGHT;

// Player
pub const PLAYER_WIDTH: i32 = 40;
pub const PLAYER_HEIGHT: i32 = 30;
pub const PLAYER_START_X: i32 = 50;
pub const PLAYER_START_Y: i32 = GROUND_TOP;
pub const PLAYER_RUN_SPEED: i32 = 1;
pub const JUMP_VELOCITY: i32 = -15;
pub const GRAVITY: i32 = 1;

// Obstacles
pub const OBSTACLE_WIDTH: i32 = 20;
pub const OBSTACLE_MIN_HEIGHT: i32 = 20;
pub const OBSTACLE_MAX_HEIGHT: i32 = 49;
pub const OBSTACLE_SPEED: i32 = 2;

// Spawn gap: max(BASE - score / DIVISOR, MIN)
pub const BASE_SPAWN_GAP: i32 = 200;
pub const MIN_SPAWN_GAP: i32 = 50;
pub const SPAWN_GAP_SCORE_DIVISOR: u64 = 10;

// Decorations
pub const CLOUD_COUNT: usize = 5;
pub const CLOUD_WIDTH: i32 = 60;
pub const CLOUD_HEIGHT: i32 = 30;
/// Clouds are placed with their top edge above this line.
pub const CLOUD_BAND_HEIGHT: i32 = PLAY_HEIGHT - 100;
pub const SPINES_PER_OBSTACLE: usize = 10;

// HUD and overlay anchors
pub const SCORE_TEXT_X: i32 = 10;
pub const SCORE_TEXT_Y: i32 = 30;
pub const GAME_OVER_TEXT_X: i32 = PLAY_WIDTH / 2 - 100;
pub const GAME_OVER_TEXT_Y: i32 = PLAY_HEIGHT / 2 - 20;
pub const RETRY_BUTTON_X: i32 = PLAY_WIDTH / 2 - 50;
pub const RETRY_BUTTON_Y: i32 = PLAY_HEIGHT / 2 + 50;
pub const RETRY_BUTTON_WIDTH: i32 = 100;
pub const RETRY_BUTTON_HEIGHT: i32 = 30;

// Logging
pub const LOG_FILE_NAME: &str = "endless-runner.log";
