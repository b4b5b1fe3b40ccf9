// Screen
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 50.0;

// Frame timing
pub const TARGET_FPS: u32 = 60;

// Player physics (per frame, not scaled by elapsed time)
pub const GRAVITY: f64 = 0.6;
pub const JUMP_VELOCITY: f64 = -10.0;
pub const PLAYER_WIDTH: f64 = 50.0;
pub const PLAYER_HEIGHT: f64 = 50.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 100.0;
pub const OBSTACLE_GAP: f64 = 150.0;
pub const OBSTACLE_SPEED: f64 = -4.0; // px per frame
pub const SPAWN_INTERVAL_MS: u64 = 1500;
pub const GAP_OFFSET_MIN: u32 = 50;
pub const GAP_OFFSET_MAX: u32 = 350;

// Palette
pub const BACKGROUND_COLOR: (u8, u8, u8) = (100, 200, 255);
pub const GROUND_COLOR: (u8, u8, u8) = (218, 95, 7);
pub const PLAYER_COLOR: (u8, u8, u8) = (255, 255, 0);
pub const OBSTACLE_COLOR: (u8, u8, u8) = (0, 200, 0);
pub const FONT_COLOR: (u8, u8, u8) = (255, 255, 255);
pub const FONT_SIZE: u16 = 40;

// Text
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const SCORE_TEXT_TOP: f64 = 10.0;

// Logging
pub const LOG_FILE_NAME: &str = "skyward.log";
