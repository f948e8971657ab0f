//! Collision detection and response
//!
//! Every check reads the ball's pre-motion position against its current
//! velocity. Targets are resolved first, then walls and the paddle, and sign
//! flips from both passes compound within a tick.

use super::motion::next_position;
use super::state::{GameEvent, GameState};

/// What the ball met in the paddle band this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorContact {
    /// Ball is not entering the paddle band
    Clear,
    /// Paddle caught the ball
    Catch,
    /// Ball passed outside the paddle's span
    Miss,
}

/// Resolve ball/target collisions
///
/// Every eligible target is tested, even though the ball can usually overlap
/// only one brick at a time.
pub fn resolve_targets(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let required = state.progress.required_hits();
    let offset = state.tuning.hit_offset(state.ball.radius);
    let pos = state.ball.pos;

    for (index, target) in state.targets.iter_mut().enumerate() {
        if !target.is_eligible(required) || !target.rect.contains_inflated(pos, offset) {
            continue;
        }

        state.ball.vel.y = -state.ball.vel.y;
        target.hits += 1;
        if state.progress.record_hit(state.tuning.speed_ramp_interval) {
            state.ball.ramp_speed(state.tuning.speed_ramp_step);
            log::debug!(
                "Speed ramp at score {}: velocity {:?}",
                state.progress.score(),
                state.ball.vel
            );
        }

        events.push(GameEvent::TargetHit {
            index,
            destroyed: target.is_destroyed(required),
        });
    }
}

/// Resolve side walls, ceiling and the paddle band
///
/// A miss is only reported; the caller owns the life-loss bookkeeping.
pub fn resolve_walls_and_paddle(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
) -> FloorContact {
    let arena = &state.arena;
    let ball = &mut state.ball;
    let r = ball.radius;

    let next = next_position(ball.pos, ball.vel);
    if next.x > arena.width - r || next.x < r {
        ball.vel.x = -ball.vel.x;
    }

    let next_y = ball.pos.y + ball.vel.y;
    if next_y < r {
        ball.vel.y = -ball.vel.y;
        return FloorContact::Clear;
    }
    if next_y <= arena.floor_threshold() {
        return FloorContact::Clear;
    }

    let paddle = &state.paddle;
    if !paddle.spans(ball.pos.x) {
        return FloorContact::Miss;
    }

    // Striking the half opposite to travel sends the ball back the way it came
    let mid = paddle.mid_x();
    let moving_left_hit_right = ball.vel.x < 0.0 && ball.pos.x > mid;
    let moving_right_hit_left = ball.vel.x > 0.0 && ball.pos.x < mid;
    if moving_left_hit_right || moving_right_hit_left {
        ball.vel.x = -ball.vel.x;
    }
    ball.vel.y = -ball.vel.y;
    log::debug!("Paddle bounce at x={:.1}, velocity {:?}", ball.pos.x, ball.vel);
    events.push(GameEvent::PaddleBounce);
    FloorContact::Catch
}
