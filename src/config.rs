//! Bootstrap data and game tuning
//!
//! Everything a collaborator hands the engine before the first tick. Loaded from
//! JSON or built in code, then validated once; a session never starts from
//! degenerate data.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::audio::SoundBank;
use crate::consts::*;
use crate::error::ConfigError;

/// An sRGB color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ConfigError::InvalidColor(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Colors used when drawing a scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Intact brick fill
    pub brick: Color,
    /// Brick that has taken hits but is not yet destroyed
    pub brick_damaged: Color,
    /// Ball, paddle and HUD text
    pub ink: Color,
    /// Brick label text
    pub label: Color,
    /// Overlay panel fill
    pub overlay: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            brick: Color::rgb(0xa9, 0xcc, 0xea),
            brick_damaged: Color::rgb(0x96, 0xc9, 0xdc),
            ink: Color::rgb(0x30, 0x66, 0x7a),
            label: Color::rgb(0x00, 0x00, 0x00),
            overlay: Color::rgb(0xa9, 0xcc, 0xea),
        }
    }
}

/// Gameplay configuration and tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the paddle collision band and the floor
    pub paddle_floor_gap: f32,
    /// Paddle rectangle sits this far above the floor when drawn
    pub paddle_draw_offset: f32,
    /// Units per tick while a direction is held
    pub paddle_key_speed: f32,
    /// Ball serve position distance from the floor
    pub serve_height: f32,
    pub starting_lives: u32,
    pub level_count: u32,
    /// Target hit test inflation is `ball_radius / hit_tolerance_divisor`
    pub hit_tolerance_divisor: f32,
    pub speed_ramp_step: f32,
    pub speed_ramp_interval: u64,
    pub launch_velocity: Vec2,
    pub respawn_velocity: Vec2,
    pub palette: Palette,
    pub sounds: SoundBank,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_floor_gap: PADDLE_FLOOR_GAP,
            paddle_draw_offset: PADDLE_DRAW_OFFSET,
            paddle_key_speed: PADDLE_KEY_SPEED,
            serve_height: SERVE_HEIGHT,
            starting_lives: STARTING_LIVES,
            level_count: LEVEL_COUNT,
            hit_tolerance_divisor: HIT_TOLERANCE_DIVISOR,
            speed_ramp_step: SPEED_RAMP_STEP,
            speed_ramp_interval: SPEED_RAMP_INTERVAL,
            launch_velocity: Vec2::from_array(LAUNCH_VELOCITY),
            respawn_velocity: Vec2::from_array(RESPAWN_VELOCITY),
            palette: Palette::default(),
            sounds: SoundBank::default(),
        }
    }
}

impl GameConfig {
    /// Validate against the arena bounds the config will be used with
    pub fn validate(&self, width: f32, height: f32) -> Result<(), ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.level_count == 0 {
            return Err(ConfigError::NoLevels);
        }

        require_positive("ball_radius", self.ball_radius)?;
        require_positive("paddle_width", self.paddle_width)?;
        require_positive("paddle_height", self.paddle_height)?;
        require_positive("paddle_key_speed", self.paddle_key_speed)?;
        require_positive("hit_tolerance_divisor", self.hit_tolerance_divisor)?;
        require_non_negative("paddle_floor_gap", self.paddle_floor_gap)?;
        require_non_negative("paddle_draw_offset", self.paddle_draw_offset)?;
        require_non_negative("serve_height", self.serve_height)?;
        require_non_negative("speed_ramp_step", self.speed_ramp_step)?;
        if self.speed_ramp_interval == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "speed_ramp_interval",
                value: 0.0,
            });
        }
        require_nonzero("launch_velocity.x", self.launch_velocity.x)?;
        require_nonzero("launch_velocity.y", self.launch_velocity.y)?;
        require_nonzero("respawn_velocity.x", self.respawn_velocity.x)?;
        require_nonzero("respawn_velocity.y", self.respawn_velocity.y)?;

        if self.paddle_width > width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                arena_width: width,
            });
        }
        if 2.0 * self.ball_radius >= width {
            return Err(ConfigError::InvalidParameter {
                name: "ball_radius",
                value: self.ball_radius,
            });
        }

        let floor_threshold =
            height - self.ball_radius - (self.paddle_height + self.paddle_floor_gap);
        if floor_threshold <= self.ball_radius {
            return Err(ConfigError::ArenaTooShort { height });
        }
        let serve_y = height - self.serve_height;
        if serve_y <= self.ball_radius || serve_y > floor_threshold {
            return Err(ConfigError::InvalidParameter {
                name: "serve_height",
                value: self.serve_height,
            });
        }

        if !(0.0..=1.0).contains(&self.sounds.volume) {
            return Err(ConfigError::InvalidParameter {
                name: "sounds.volume",
                value: self.sounds.volume,
            });
        }

        Ok(())
    }
}

/// A target rectangle as located by the markup collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, alias = "text")]
    pub label: String,
}

impl TargetSpec {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
        }
    }
}

/// Everything needed to start a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaBootstrap {
    pub width: f32,
    pub height: f32,
    pub targets: Vec<TargetSpec>,
    #[serde(default)]
    pub config: GameConfig,
}

impl ArenaBootstrap {
    /// Bootstrap with the default configuration
    pub fn new(width: f32, height: f32, targets: Vec<TargetSpec>) -> Self {
        Self {
            width,
            height,
            targets,
            config: GameConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse a bootstrap from JSON (missing config fields take their defaults)
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a bootstrap JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Fail fast on anything the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds_ok = |v: f32| v.is_finite() && v > 0.0;
        if !bounds_ok(self.width) || !bounds_ok(self.height) {
            return Err(ConfigError::NonPositiveBounds {
                width: self.width,
                height: self.height,
            });
        }
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        for (index, t) in self.targets.iter().enumerate() {
            let well_formed = t.x.is_finite()
                && t.y.is_finite()
                && t.width.is_finite()
                && t.height.is_finite()
                && t.width > 0.0
                && t.height > 0.0;
            if !well_formed {
                return Err(ConfigError::DegenerateTarget {
                    index,
                    width: t.width,
                    height: t.height,
                });
            }
        }
        self.config.validate(self.width, self.height)
    }
}

fn require_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

fn require_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

fn require_nonzero(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value != 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of_targets(n: usize) -> Vec<TargetSpec> {
        (0..n)
            .map(|i| TargetSpec::new(20.0 + i as f32 * 80.0, 20.0, 70.0, 24.0, format!("t{i}")))
            .collect()
    }

    #[test]
    fn test_default_bootstrap_is_valid() {
        let bootstrap = ArenaBootstrap::new(480.0, 400.0, row_of_targets(5));
        assert!(bootstrap.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_targets() {
        let bootstrap = ArenaBootstrap::new(480.0, 400.0, Vec::new());
        assert!(matches!(bootstrap.validate(), Err(ConfigError::NoTargets)));
    }

    #[test]
    fn test_rejects_non_positive_bounds() {
        let bootstrap = ArenaBootstrap::new(0.0, 400.0, row_of_targets(1));
        assert!(matches!(
            bootstrap.validate(),
            Err(ConfigError::NonPositiveBounds { .. })
        ));
        let bootstrap = ArenaBootstrap::new(480.0, f32::NAN, row_of_targets(1));
        assert!(matches!(
            bootstrap.validate(),
            Err(ConfigError::NonPositiveBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_target() {
        let mut targets = row_of_targets(3);
        targets[2].height = 0.0;
        let bootstrap = ArenaBootstrap::new(480.0, 400.0, targets);
        assert!(matches!(
            bootstrap.validate(),
            Err(ConfigError::DegenerateTarget { index: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_lives_and_levels() {
        let config = GameConfig {
            starting_lives: 0,
            ..Default::default()
        };
        let bootstrap = ArenaBootstrap::new(480.0, 400.0, row_of_targets(1)).with_config(config);
        assert!(matches!(bootstrap.validate(), Err(ConfigError::NoLives)));

        let config = GameConfig {
            level_count: 0,
            ..Default::default()
        };
        let bootstrap = ArenaBootstrap::new(480.0, 400.0, row_of_targets(1)).with_config(config);
        assert!(matches!(bootstrap.validate(), Err(ConfigError::NoLevels)));
    }

    #[test]
    fn test_rejects_paddle_wider_than_arena() {
        let bootstrap = ArenaBootstrap::new(60.0, 400.0, row_of_targets(1));
        assert!(matches!(
            bootstrap.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_velocity_component() {
        let config = GameConfig {
            launch_velocity: Vec2::new(3.0, 0.0),
            ..Default::default()
        };
        let bootstrap = ArenaBootstrap::new(480.0, 400.0, row_of_targets(1)).with_config(config);
        assert!(matches!(
            bootstrap.validate(),
            Err(ConfigError::InvalidParameter {
                name: "launch_velocity.y",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_short_arena() {
        let bootstrap = ArenaBootstrap::new(480.0, 45.0, row_of_targets(1));
        assert!(matches!(
            bootstrap.validate(),
            Err(ConfigError::ArenaTooShort { .. })
        ));
    }

    #[test]
    fn test_json_uses_defaults_and_text_alias() {
        let json = r##"{
            "width": 480,
            "height": 400,
            "targets": [{ "x": 10, "y": 10, "width": 60, "height": 20, "text": "Docs" }],
            "config": { "starting_lives": 5, "palette": { "brick": "#ff0000" } }
        }"##;
        let bootstrap = ArenaBootstrap::from_json_str(json).unwrap();
        assert_eq!(bootstrap.targets[0].label, "Docs");
        assert_eq!(bootstrap.config.starting_lives, 5);
        assert_eq!(bootstrap.config.ball_radius, BALL_RADIUS);
        assert_eq!(bootstrap.config.palette.brick, Color::rgb(255, 0, 0));
        assert_eq!(bootstrap.config.palette.ink, Palette::default().ink);
        assert!(bootstrap.validate().is_ok());
    }

    #[test]
    fn test_json_rejects_bad_color() {
        let json = r#"{
            "width": 480, "height": 400,
            "targets": [{ "x": 10, "y": 10, "width": 60, "height": 20 }],
            "config": { "palette": { "ink": "blue" } }
        }"#;
        assert!(matches!(
            ArenaBootstrap::from_json_str(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_color_hex_round_trip() {
        let color = Color::from_hex("#30667a").unwrap();
        assert_eq!(color, Color::rgb(0x30, 0x66, 0x7a));
        assert_eq!(color.to_string(), "#30667a");
        assert!(Color::from_hex("#3066").is_err());
        assert!(Color::from_hex("#zz667a").is_err());
        // Sign prefixes parse as radix digits, hex strings must not allow them
        assert!(Color::from_hex("#+f+f+f").is_err());
    }

    #[test]
    fn test_bootstrap_json_round_trip_keeps_palette() {
        let config = GameConfig {
            palette: Palette {
                brick: Color::rgb(0x12, 0xab, 0xef),
                ..Default::default()
            },
            ..Default::default()
        };
        let bootstrap = ArenaBootstrap::new(480.0, 400.0, row_of_targets(2)).with_config(config);

        let json = serde_json::to_string(&bootstrap).unwrap();
        assert!(json.contains(r##""brick":"#12abef""##));

        let parsed = ArenaBootstrap::from_json_str(&json).unwrap();
        assert_eq!(parsed.config.palette, bootstrap.config.palette);
        assert_eq!(parsed.targets, bootstrap.targets);
        assert!(parsed.validate().is_ok());
    }
}
