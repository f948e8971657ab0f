//! Bootstrap error taxonomy
//!
//! The simulation itself is total once a session starts; everything that can go
//! wrong is caught while validating the bootstrap data.

/// Configuration errors raised before a session is allowed to start
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Arena width or height is zero, negative or not finite
    #[error("arena bounds must be positive, got {width}x{height}")]
    NonPositiveBounds { width: f32, height: f32 },

    /// No targets were supplied
    #[error("target list is empty")]
    NoTargets,

    /// A target rectangle cannot be collided with sensibly
    #[error("target {index} has degenerate geometry {width}x{height}")]
    DegenerateTarget { index: usize, width: f32, height: f32 },

    /// Session would start with no lives
    #[error("starting lives must be at least 1")]
    NoLives,

    /// Session would have no level to play
    #[error("level count must be at least 1")]
    NoLevels,

    /// Paddle does not fit between the side walls
    #[error("paddle width {paddle_width} does not fit arena width {arena_width}")]
    PaddleTooWide { paddle_width: f32, arena_width: f32 },

    /// Arena is too short to hold the paddle band and the serve position
    #[error("arena height {height} leaves no room above the paddle band")]
    ArenaTooShort { height: f32 },

    /// A numeric tuning parameter is out of range
    #[error("invalid value {value} for `{name}`")]
    InvalidParameter { name: &'static str, value: f32 },

    /// Palette entry is not a `#rrggbb` color
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    /// Bootstrap JSON could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Bootstrap file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
