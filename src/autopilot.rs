//! Demo player
//!
//! Predicts where the ball will reach the paddle band and points the paddle
//! there, swaying around the catch point over time so rallies vary.

use crate::sim::GameState;

/// Ticks to look ahead before giving up on a prediction
const MAX_LOOKAHEAD: u32 = 4000;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Sway amplitude as a fraction of half the paddle width
    pub sway: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { sway: 0.6 }
    }
}

impl Autopilot {
    /// Pointer x to feed `InputHandle::point_at` this frame
    pub fn aim(&self, state: &GameState) -> f32 {
        let catch_x = predict_catch_x(state);

        let t = state.time_ticks as f32 * 0.01;
        let wobble = t.sin() * 0.3 + (t * 0.7).sin() * 0.15;
        catch_x + wobble * self.sway * state.paddle.width / 2.0
    }
}

/// Ball x on the tick it enters the paddle band, ignoring targets
///
/// Replays the wall and ceiling rules step by step so the answer matches the
/// resolver exactly.
fn predict_catch_x(state: &GameState) -> f32 {
    let arena = &state.arena;
    let r = state.ball.radius;
    let threshold = arena.floor_threshold();
    let mut pos = state.ball.pos;
    let mut vel = state.ball.vel;

    for _ in 0..MAX_LOOKAHEAD {
        let next = pos + vel;
        if next.x > arena.width - r || next.x < r {
            vel.x = -vel.x;
        }
        if next.y < r {
            vel.y = -vel.y;
        } else if next.y > threshold {
            return pos.x;
        }
        pos += vel;
    }
    pos.x
}
