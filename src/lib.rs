//! Brick Breaker - a single-screen ball and paddle arcade engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, progression)
//! - `driver`: Frame driver state machine around the simulation
//! - `renderer`: Drawing-surface abstraction and scene drawing
//! - `input`: Input and teardown handles shared with collaborators
//! - `config`: Bootstrap data and data-driven tuning

pub mod audio;
pub mod autopilot;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod scene;
pub mod sim;

pub use config::{ArenaBootstrap, GameConfig, Palette, TargetSpec};
pub use driver::{DriverState, FrameDriver, FrameOutcome, FrameReport};
pub use error::ConfigError;
pub use input::{Controls, InputHandle, PaddleDirection, TeardownHandle};
pub use scene::RenderScene;
pub use sim::{GameEvent, GamePhase, GameState, Outcome};

/// Game configuration constants
pub mod consts {
    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch vector at session start and after a level advance
    pub const LAUNCH_VELOCITY: [f32; 2] = [3.0, -3.0];
    /// Velocity the ball carries after a life is lost
    pub const RESPAWN_VELOCITY: [f32; 2] = [-3.0, -3.0];
    /// Ball rests this far above the floor when served
    pub const SERVE_HEIGHT: f32 = 50.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between the paddle's collision band and the floor
    pub const PADDLE_FLOOR_GAP: f32 = 20.0;
    /// Paddle rectangle is drawn this far above the floor
    pub const PADDLE_DRAW_OFFSET: f32 = 30.0;
    /// Units per tick while a direction key is held
    pub const PADDLE_KEY_SPEED: f32 = 7.0;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
    pub const LEVEL_COUNT: u32 = 2;

    /// Target hit test inflation: offset = ball radius / divisor
    pub const HIT_TOLERANCE_DIVISOR: f32 = 1.125;
    /// Difficulty ramp: both velocity magnitudes grow by this step...
    pub const SPEED_RAMP_STEP: f32 = 0.5;
    /// ...every time the score reaches a multiple of this interval
    pub const SPEED_RAMP_INTERVAL: u64 = 3;

    /// Brick corner rounding when drawn
    pub const BRICK_CORNER_RADIUS: f32 = 10.0;
    /// Overlay panel size
    pub const OVERLAY_WIDTH: f32 = 200.0;
    pub const OVERLAY_HEIGHT: f32 = 100.0;
    /// HUD baseline distance from the floor
    pub const HUD_BASELINE: f32 = 15.0;
}

/// Triangular number `n * (n + 1) / 2`
#[inline]
pub fn triangular(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// Increase a component's magnitude by `step`, keeping its sign
#[inline]
pub fn grow_magnitude(value: f32, step: f32) -> f32 {
    (value.abs() + step).copysign(value)
}
