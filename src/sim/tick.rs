//! Fixed-rate simulation tick
//!
//! Core step that advances a session deterministically: resolve collisions,
//! apply paddle input, integrate motion.

use super::collision::{self, FloorContact};
use super::motion;
use super::state::{GameEvent, GamePhase, GameState, PaddleDirection};

/// Latest paddle control signal
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PaddleSignal {
    /// No input received yet
    #[default]
    Hold,
    /// Key state
    Direction(PaddleDirection),
    /// Absolute pointer x in arena coordinates
    Pointer(f32),
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub paddle: PaddleSignal,
    /// Advance past a cleared level (one-shot)
    pub advance_level: bool,
}

/// Advance the game state by one tick, returning the events it produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.progress.phase {
        GamePhase::Cleared | GamePhase::Terminal(_) => return events,
        GamePhase::LevelCleared => {
            if input.advance_level {
                advance_level(state);
            }
            return events;
        }
        GamePhase::Playing => {
            if input.advance_level {
                log::warn!("Advance requested while level {} is in play", state.progress.level);
            }
        }
    }

    state.time_ticks += 1;

    collision::resolve_targets(state, &mut events);
    if state.progress.is_level_won(state.targets.len()) {
        let event = state.progress.finish_level();
        log::info!(
            "Level {} cleared at score {}",
            state.progress.level,
            state.progress.score
        );
        events.push(event);
        return events;
    }

    if collision::resolve_walls_and_paddle(state, &mut events) == FloorContact::Miss {
        lose_life(state, &mut events);
        return events;
    }

    apply_paddle_signal(state, input.paddle);
    motion::integrate(&mut state.ball);

    events
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let loss = state.progress.lose_life();
    state.ball.vel = state.tuning.respawn_velocity;
    events.push(GameEvent::LifeLost {
        lives_left: loss.lives_left,
    });

    if loss.game_over {
        log::info!("Game over at score {}", state.progress.score);
        events.push(GameEvent::GameOver);
    } else {
        log::debug!("Life lost, {} left", loss.lives_left);
        state.serve(state.tuning.respawn_velocity);
    }
}

fn advance_level(state: &mut GameState) {
    if state.progress.advance_level() {
        state.reset_targets();
        let launch = state.tuning.launch_velocity;
        state.serve(launch);
        log::info!("Level {} started", state.progress.level);
    }
}

fn apply_paddle_signal(state: &mut GameState, signal: PaddleSignal) {
    let arena = &state.arena;
    match signal {
        PaddleSignal::Hold => {}
        PaddleSignal::Direction(direction) => {
            state
                .paddle
                .steer(direction, state.tuning.paddle_key_speed, arena)
        }
        PaddleSignal::Pointer(x) => state.paddle.follow_pointer(x, arena),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArenaBootstrap, GameConfig, TargetSpec};
    use crate::sim::Outcome;
    use glam::Vec2;
    use proptest::prelude::*;

    fn five_targets() -> Vec<TargetSpec> {
        (0..5)
            .map(|i| TargetSpec::new(20.0 + i as f32 * 90.0, 20.0, 80.0, 24.0, format!("link {i}")))
            .collect()
    }

    fn new_state(level_count: u32) -> GameState {
        let config = GameConfig {
            level_count,
            ..Default::default()
        };
        GameState::new(&ArenaBootstrap::new(480.0, 400.0, five_targets()).with_config(config))
            .unwrap()
    }

    /// Place the ball on a target so the next tick hits it
    fn aim_at_target(state: &mut GameState, index: usize) {
        state.ball.pos = state.targets[index].rect.center();
        state.ball.vel = Vec2::new(3.0, -3.0);
    }

    #[test]
    fn test_tick_moves_ball() {
        let mut state = new_state(1);
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(243.0, 347.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_life_loss_boundary() {
        let mut state = new_state(1);
        state.paddle.x = 40.0;
        state.ball.pos = Vec2::new(200.0, state.arena.floor_threshold());
        state.ball.vel = Vec2::new(3.0, 3.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::LifeLost { lives_left: 2 }]);
        assert_eq!(state.progress.lives(), 2);
        assert_eq!(state.ball.vel, Vec2::new(-3.0, -3.0));
        assert_eq!(state.ball.pos, state.arena.serve_position());
        assert_eq!(state.progress.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_paddle_catch_boundary() {
        let mut state = new_state(1);
        state.paddle.x = 40.0;
        state.ball.pos = Vec2::new(70.0, state.arena.floor_threshold());
        state.ball.vel = Vec2::new(-3.0, 3.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::PaddleBounce]);
        assert_eq!(state.progress.lives(), 3);
        assert_eq!(state.ball.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_last_life_ends_run() {
        let mut state = new_state(1);
        state.progress.lives = 1;
        state.paddle.x = 40.0;
        state.ball.pos = Vec2::new(200.0, state.arena.floor_threshold());
        state.ball.vel = Vec2::new(3.0, 3.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(
            events,
            vec![GameEvent::LifeLost { lives_left: 0 }, GameEvent::GameOver]
        );
        assert_eq!(state.progress.phase(), GamePhase::Terminal(Outcome::Loss));
    }

    #[test]
    fn test_single_level_win_at_target_count() {
        let mut state = new_state(1);
        for i in 0..5 {
            aim_at_target(&mut state, i);
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.progress.score(), 5);
        assert_eq!(state.progress.phase(), GamePhase::Terminal(Outcome::Win));
    }

    #[test]
    fn test_level_advance_and_cumulative_win() {
        let mut state = new_state(2);
        let mut last_events = Vec::new();
        for i in 0..5 {
            aim_at_target(&mut state, i);
            last_events = tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.progress.phase(), GamePhase::LevelCleared);
        assert!(last_events.contains(&GameEvent::LevelCleared { level: 1 }));

        // Paused: ticks without the advance signal change nothing
        let paused_pos = state.ball.pos;
        assert!(tick(&mut state, &TickInput::default()).is_empty());
        assert_eq!(state.ball.pos, paused_pos);

        let advance = TickInput {
            advance_level: true,
            ..Default::default()
        };
        tick(&mut state, &advance);
        assert_eq!(state.progress.level(), 2);
        assert_eq!(state.progress.score(), 5);
        assert_eq!(state.progress.phase(), GamePhase::Playing);
        assert!(state.targets.iter().all(|t| t.hits == 0));
        assert_eq!(state.ball.pos, state.arena.serve_position());
        assert_eq!(state.ball.vel, Vec2::new(3.0, -3.0));

        // Level 2: two hits per target, won at 5 + 10
        for i in 0..5 {
            aim_at_target(&mut state, i);
            let events = tick(&mut state, &TickInput::default());
            assert_eq!(
                events,
                vec![GameEvent::TargetHit {
                    index: i,
                    destroyed: false
                }]
            );
        }
        assert_eq!(state.progress.phase(), GamePhase::Playing);
        for i in 0..5 {
            aim_at_target(&mut state, i);
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.progress.score(), 15);
        assert_eq!(state.progress.phase(), GamePhase::Terminal(Outcome::Win));
    }

    #[test]
    fn test_terminal_state_absorbs_ticks() {
        let mut state = new_state(1);
        state.progress.phase = GamePhase::Terminal(Outcome::Loss);
        let before = state.clone();

        let input = TickInput {
            paddle: PaddleSignal::Pointer(10.0),
            advance_level: true,
        };
        for _ in 0..10 {
            assert!(tick(&mut state, &input).is_empty());
        }
        assert_eq!(state.ball.pos, before.ball.pos);
        assert_eq!(state.paddle.x, before.paddle.x);
        assert_eq!(state.progress.score(), before.progress.score());
        assert_eq!(state.progress.lives(), before.progress.lives());
    }

    #[test]
    fn test_direction_signal_moves_paddle() {
        let mut state = new_state(1);
        let start = state.paddle.x;
        let input = TickInput {
            paddle: PaddleSignal::Direction(PaddleDirection::Right),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.x, start + 7.0);
    }

    #[test]
    fn test_speed_is_monotonic_within_level() {
        let mut state = new_state(1);
        let mut last = state.ball.vel.abs();
        for i in 0..5 {
            aim_at_target(&mut state, i);
            state.ball.vel = state.ball.vel.signum() * last;
            tick(&mut state, &TickInput::default());
            let now = state.ball.vel.abs();
            assert!(now.x >= last.x && now.y >= last.y);
            last = now;
        }
        // One ramp at score 3
        assert_eq!(last, Vec2::new(3.5, 3.5));
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            signals in prop::collection::vec(
                prop_oneof![
                    Just(PaddleSignal::Direction(PaddleDirection::Left)),
                    Just(PaddleSignal::Direction(PaddleDirection::Right)),
                    Just(PaddleSignal::Direction(PaddleDirection::None)),
                    (-500.0f32..1000.0).prop_map(PaddleSignal::Pointer),
                ],
                1..200,
            )
        ) {
            let mut state = new_state(1);
            let max_x = state.arena.width - state.paddle.width;
            for signal in signals {
                let input = TickInput { paddle: signal, ..Default::default() };
                tick(&mut state, &input);
                prop_assert!(state.paddle.x >= 0.0 && state.paddle.x <= max_x);
            }
        }

        #[test]
        fn prop_terminal_absorbs(outcome_win in any::<bool>(), ticks in 1usize..50) {
            let mut state = new_state(1);
            let outcome = if outcome_win { Outcome::Win } else { Outcome::Loss };
            state.progress.phase = GamePhase::Terminal(outcome);
            let pos = state.ball.pos;
            for _ in 0..ticks {
                tick(&mut state, &TickInput::default());
            }
            prop_assert_eq!(state.ball.pos, pos);
            prop_assert_eq!(state.progress.phase(), GamePhase::Terminal(outcome));
        }
    }
}
