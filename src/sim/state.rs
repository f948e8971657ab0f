//! Game state and core simulation types
//!
//! A `GameState` is one self-contained session; nothing here is global, so any
//! number of sessions can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::progression::Progress;
use super::rect::Rect;
use crate::config::{ArenaBootstrap, GameConfig};
use crate::error::ConfigError;

/// How a session ended on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Level won, paused until the advance signal arrives
    LevelCleared,
    /// Torn down from outside
    Cleared,
    /// Run ended
    Terminal(Outcome),
}

impl GamePhase {
    /// No tick will ever change the session again
    pub fn is_absorbing(&self) -> bool {
        matches!(self, GamePhase::Cleared | GamePhase::Terminal(_))
    }
}

/// Feedback events for sound and UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball struck a target; `destroyed` once it reached the level's hit count
    TargetHit { index: usize, destroyed: bool },
    PaddleBounce,
    LifeLost { lives_left: u32 },
    /// A non-final level was won
    LevelCleared { level: u32 },
    GameWon,
    GameOver,
}

/// Fixed arena geometry for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_floor_gap: f32,
    pub paddle_draw_offset: f32,
    pub serve_height: f32,
}

impl Arena {
    pub fn from_config(width: f32, height: f32, config: &GameConfig) -> Self {
        Self {
            width,
            height,
            ball_radius: config.ball_radius,
            paddle_width: config.paddle_width,
            paddle_height: config.paddle_height,
            paddle_floor_gap: config.paddle_floor_gap,
            paddle_draw_offset: config.paddle_draw_offset,
            serve_height: config.serve_height,
        }
    }

    /// A ball whose next y passes this is in the paddle band
    pub fn floor_threshold(&self) -> f32 {
        self.height - self.ball_radius - (self.paddle_height + self.paddle_floor_gap)
    }

    /// Where the ball is placed on serve
    pub fn serve_position(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - self.serve_height)
    }

    /// Paddle left edge when centered
    pub fn centered_paddle_x(&self) -> f32 {
        (self.width - self.paddle_width) / 2.0
    }

    /// Keep the paddle between the side walls
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.width - self.paddle_width)
    }

    /// Top edge of the drawn paddle
    pub fn paddle_top(&self) -> f32 {
        self.height - self.paddle_height - self.paddle_draw_offset
    }
}

/// Numeric tuning applied by the resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub paddle_key_speed: f32,
    pub hit_tolerance_divisor: f32,
    pub speed_ramp_step: f32,
    pub speed_ramp_interval: u64,
    pub launch_velocity: Vec2,
    pub respawn_velocity: Vec2,
}

impl Tuning {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            paddle_key_speed: config.paddle_key_speed,
            hit_tolerance_divisor: config.hit_tolerance_divisor,
            speed_ramp_step: config.speed_ramp_step,
            speed_ramp_interval: config.speed_ramp_interval,
            launch_velocity: config.launch_velocity,
            respawn_velocity: config.respawn_velocity,
        }
    }

    /// How far target rectangles are grown for the hit test
    pub fn hit_offset(&self, ball_radius: f32) -> f32 {
        ball_radius / self.hit_tolerance_divisor
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Grow both velocity magnitudes by `step`, keeping direction signs
    pub fn ramp_speed(&mut self, step: f32) {
        self.vel.x = crate::grow_magnitude(self.vel.x, step);
        self.vel.y = crate::grow_magnitude(self.vel.y, step);
    }
}

/// Horizontal paddle direction from key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleDirection {
    Left,
    Right,
    #[default]
    None,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle as drawn
    pub fn rect(&self, arena: &Arena) -> Rect {
        Rect::new(self.x, arena.paddle_top(), self.width, self.height)
    }

    /// Horizontal midpoint
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Strictly inside the paddle's horizontal span
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }

    /// Move by one key step in the held direction
    pub fn steer(&mut self, direction: PaddleDirection, speed: f32, arena: &Arena) {
        let delta = match direction {
            PaddleDirection::Left => -speed,
            PaddleDirection::Right => speed,
            PaddleDirection::None => return,
        };
        self.x = arena.clamp_paddle_x(self.x + delta);
    }

    /// Center the paddle under an absolute pointer position
    pub fn follow_pointer(&mut self, pointer_x: f32, arena: &Arena) {
        if pointer_x.is_finite() {
            self.x = arena.clamp_paddle_x(pointer_x - self.width / 2.0);
        }
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub rect: Rect,
    pub label: String,
    /// Hits taken during the current level
    pub hits: u32,
}

impl Target {
    /// Still collidable at this level's hit requirement
    #[inline]
    pub fn is_eligible(&self, required_hits: u32) -> bool {
        self.hits < required_hits
    }

    #[inline]
    pub fn is_destroyed(&self, required_hits: u32) -> bool {
        !self.is_eligible(required_hits)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub tuning: Tuning,
    pub ball: Ball,
    pub paddle: Paddle,
    /// In bootstrap order; destroyed targets stay in place
    pub targets: Vec<Target>,
    pub progress: Progress,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Validate the bootstrap and build a session ready to play level 1
    pub fn new(bootstrap: &ArenaBootstrap) -> Result<Self, ConfigError> {
        bootstrap.validate()?;
        let config = &bootstrap.config;
        let arena = Arena::from_config(bootstrap.width, bootstrap.height, config);
        let tuning = Tuning::from_config(config);

        let targets = bootstrap
            .targets
            .iter()
            .map(|spec| Target {
                rect: Rect::new(spec.x, spec.y, spec.width, spec.height),
                label: spec.label.clone(),
                hits: 0,
            })
            .collect();

        Ok(Self {
            ball: Ball {
                pos: arena.serve_position(),
                vel: tuning.launch_velocity,
                radius: config.ball_radius,
            },
            paddle: Paddle {
                x: arena.centered_paddle_x(),
                width: config.paddle_width,
                height: config.paddle_height,
            },
            arena,
            tuning,
            targets,
            progress: Progress::new(config.starting_lives, config.level_count),
            time_ticks: 0,
        })
    }

    /// Put the ball back at the serve position and re-center the paddle
    pub fn serve(&mut self, velocity: Vec2) {
        self.ball.pos = self.arena.serve_position();
        self.ball.vel = velocity;
        self.paddle.x = self.arena.centered_paddle_x();
    }

    /// Make every target whole again for a new level
    pub fn reset_targets(&mut self) {
        for target in &mut self.targets {
            target.hits = 0;
        }
    }

    /// Targets still standing at the current level
    pub fn remaining_targets(&self) -> usize {
        let required = self.progress.required_hits();
        self.targets
            .iter()
            .filter(|t| t.is_eligible(required))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TargetSpec;

    fn bootstrap() -> ArenaBootstrap {
        ArenaBootstrap::new(
            480.0,
            400.0,
            vec![
                TargetSpec::new(20.0, 20.0, 60.0, 20.0, "Home"),
                TargetSpec::new(100.0, 20.0, 60.0, 20.0, "Docs"),
            ],
        )
    }

    #[test]
    fn test_new_state_is_served() {
        let state = GameState::new(&bootstrap()).unwrap();
        assert_eq!(state.ball.pos, Vec2::new(240.0, 350.0));
        assert_eq!(state.ball.vel, Vec2::new(3.0, -3.0));
        assert_eq!(state.paddle.x, (480.0 - 75.0) / 2.0);
        assert_eq!(state.progress.phase, GamePhase::Playing);
        assert_eq!(state.remaining_targets(), 2);
        assert_eq!(state.targets[1].label, "Docs");
    }

    #[test]
    fn test_new_state_rejects_invalid_bootstrap() {
        let mut bootstrap = bootstrap();
        bootstrap.targets.clear();
        assert!(matches!(
            GameState::new(&bootstrap),
            Err(ConfigError::NoTargets)
        ));
    }

    #[test]
    fn test_arena_geometry() {
        let state = GameState::new(&bootstrap()).unwrap();
        assert_eq!(state.arena.floor_threshold(), 400.0 - 10.0 - 30.0);
        assert_eq!(state.arena.paddle_top(), 360.0);
        assert_eq!(state.arena.clamp_paddle_x(-5.0), 0.0);
        assert_eq!(state.arena.clamp_paddle_x(1000.0), 405.0);
        assert!((state.tuning.hit_offset(10.0) - 8.888_889).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_steer_clamps() {
        let mut state = GameState::new(&bootstrap()).unwrap();
        state.paddle.x = 3.0;
        let arena = state.arena.clone();
        state.paddle.steer(PaddleDirection::Left, 7.0, &arena);
        assert_eq!(state.paddle.x, 0.0);
        state.paddle.x = 400.0;
        state.paddle.steer(PaddleDirection::Right, 7.0, &arena);
        assert_eq!(state.paddle.x, 405.0);
        state.paddle.steer(PaddleDirection::None, 7.0, &arena);
        assert_eq!(state.paddle.x, 405.0);
    }

    #[test]
    fn test_paddle_follows_pointer_centered() {
        let mut state = GameState::new(&bootstrap()).unwrap();
        let arena = state.arena.clone();
        state.paddle.follow_pointer(200.0, &arena);
        assert_eq!(state.paddle.x, 162.5);
        state.paddle.follow_pointer(10.0, &arena);
        assert_eq!(state.paddle.x, 0.0);
        state.paddle.follow_pointer(f32::NAN, &arena);
        assert_eq!(state.paddle.x, 0.0);
    }

    #[test]
    fn test_paddle_span_excludes_edges() {
        let mut state = GameState::new(&bootstrap()).unwrap();
        state.paddle.x = 40.0;
        assert!(state.paddle.spans(70.0));
        assert!(!state.paddle.spans(40.0));
        assert!(!state.paddle.spans(115.0));
        assert!(!state.paddle.spans(200.0));
    }

    #[test]
    fn test_ramp_speed_keeps_signs() {
        let mut ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::new(-3.0, 3.0),
            radius: 10.0,
        };
        ball.ramp_speed(0.5);
        assert_eq!(ball.vel, Vec2::new(-3.5, 3.5));
    }
}
