//! Brick Breaker - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: SDL2 frame drawing (background, entities, HUD, overlays)
//! - `platform`: SDL2 bootstrap, asset loading and input sampling
//! - `settings`: Runtime configuration (asset paths, window options)

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{GamePhase, GameState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Logical play area (also the window size)
    pub const PLAY_WIDTH: f32 = 700.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    pub const WINDOW_TITLE: &str = "Brick Breaker!";

    /// Frame budget target
    pub const TARGET_FPS: u32 = 60;

    /// Paddle defaults - fixed height, one quarter of the play width
    pub const PADDLE_WIDTH: f32 = PLAY_WIDTH / 4.0;
    pub const PADDLE_HEIGHT: f32 = 6.0;
    pub const PADDLE_Y: f32 = PLAY_HEIGHT - PADDLE_HEIGHT - 8.0;
    /// Horizontal paddle movement per frame while a key is held
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball is an axis-aligned square
    pub const BALL_SIZE: f32 = 16.0;
    /// Ball speed in pixels per frame (post-paddle-bounce magnitude)
    pub const BALL_SPEED: f32 = 8.0;

    /// Brick grid dimensions (77 cells, fixed for the process lifetime)
    pub const GRID_COLS: usize = 11;
    pub const GRID_ROWS: usize = 7;
    pub const BRICK_COUNT: usize = GRID_COLS * GRID_ROWS;

    pub const BRICK_SPACING: f32 = 10.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Integer division: (700 - 11*10) / 11 = 53
    pub const BRICK_WIDTH: f32 = ((700 - 11 * 10) / 11) as f32;
    /// Positional nudge applied to the ball when it destroys a brick
    pub const BRICK_NUDGE: f32 = 20.0;

    /// Deliberately 3.14, not `std::f32::consts::PI`; the bounce angles
    /// are tuned against this approximation.
    pub const PI_APPROX: f32 = 3.14;
    /// Maximum deflection from vertical off the paddle (75 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * PI_APPROX / 12.0;

    pub const FONT_SIZE: u16 = 24;
    pub const STARTING_LIVES: i32 = 3;
}
