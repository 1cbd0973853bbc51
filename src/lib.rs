//! Breakout - a paddle, a bouncing ball and a field of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Window clearing, entity drawing and HUD text
//! - `platform`: Keyboard polling, quit handling and the frame clock
//! - `settings`: Optional runtime settings

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Speeds are in pixels per tick; the simulation runs at a fixed 60 Hz.
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame time fed to the clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield / window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;
    pub const WINDOW_TITLE: &str = "BREAKOUT";

    pub const STARTING_LIVES: u8 = 3;

    /// Ball defaults (drawn as an ellipse inside a square box)
    pub const BALL_SIZE: Vec2 = Vec2::new(20.0, 20.0);
    pub const BALL_START: Vec2 = Vec2::new(200.0, 550.0);
    pub const BALL_START_VEL: Vec2 = Vec2::new(7.0, 7.0);
    /// Where the ball is parked after crossing the bottom edge
    pub const MISS_RECOVERY_Y: f32 = 760.0;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(120.0, 15.0);
    pub const PADDLE_START: Vec2 = Vec2::new(400.0, 765.0);
    /// Speed set while a direction key is held
    pub const PADDLE_SPEED: f32 = 20.0;
    /// Linear speed decay per tick
    pub const PADDLE_FRICTION: f32 = 0.8;

    /// Brick defaults
    pub const BRICK_SIZE: Vec2 = Vec2::new(60.0, 30.0);
    pub const BRICK_MIN_HITS: u8 = 1;
    pub const BRICK_MAX_HITS: u8 = 4;

    /// Brick field candidate grid (end exclusive)
    pub const FIELD_X_RANGE: std::ops::Range<u32> = 100..700;
    pub const FIELD_COL_STEP: usize = 61;
    pub const FIELD_Y_RANGE: std::ops::Range<u32> = 100..500;
    pub const FIELD_ROW_STEP: usize = 31;

    /// HUD text
    pub const HUD_FONT_SIZE: u16 = 25;
    pub const HUD_MARGIN: f32 = 10.0;
}
