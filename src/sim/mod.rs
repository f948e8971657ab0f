//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one Euler step per tick
//! - Stable iteration order (targets in bootstrap order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod progression;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{FloorContact, resolve_targets, resolve_walls_and_paddle};
pub use progression::{LifeLoss, Progress, ProgressSnapshot};
pub use rect::Rect;
pub use state::{
    Arena, Ball, GameEvent, GamePhase, GameState, Outcome, Paddle, PaddleDirection, Target, Tuning,
};
pub use tick::{PaddleSignal, TickInput, tick};
