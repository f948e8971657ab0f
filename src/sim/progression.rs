//! Score, lives and level bookkeeping
//!
//! No geometry lives here: the resolver reports what happened and this module
//! decides what it means for the run.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, Outcome};
use crate::triangular;

/// Read-only view of the run for HUDs and collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub level_count: u32,
    pub phase: GamePhase,
}

/// Result of losing a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeLoss {
    pub lives_left: u32,
    pub game_over: bool,
}

/// Run progression state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub(crate) score: u64,
    pub(crate) lives: u32,
    /// 1-based
    pub(crate) level: u32,
    pub(crate) level_count: u32,
    pub(crate) phase: GamePhase,
}

impl Progress {
    pub fn new(starting_lives: u32, level_count: u32) -> Self {
        Self {
            score: 0,
            lives: starting_lives,
            level: 1,
            level_count,
            phase: GamePhase::Playing,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_count(&self) -> u32 {
        self.level_count
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            score: self.score,
            lives: self.lives,
            level: self.level,
            level_count: self.level_count,
            phase: self.phase,
        }
    }

    /// Hits a target must take before it is destroyed at this level
    #[inline]
    pub fn required_hits(&self) -> u32 {
        self.level
    }

    /// Cumulative score at which the current level is won
    ///
    /// Every earlier level contributed `targets * level` hits, so the total is
    /// `targets * (1 + 2 + ... + level)`.
    pub fn level_target_score(&self, target_count: usize) -> u64 {
        target_count as u64 * triangular(u64::from(self.level))
    }

    /// Count a target hit; returns true when the speed ramp is due
    pub fn record_hit(&mut self, ramp_interval: u64) -> bool {
        self.score += 1;
        ramp_interval > 0 && self.score.is_multiple_of(ramp_interval)
    }

    pub fn is_level_won(&self, target_count: usize) -> bool {
        self.phase == GamePhase::Playing && self.score == self.level_target_score(target_count)
    }

    /// Close out a won level: pause on non-final levels, finish the run on the last
    pub fn finish_level(&mut self) -> GameEvent {
        if self.level < self.level_count {
            self.phase = GamePhase::LevelCleared;
            GameEvent::LevelCleared { level: self.level }
        } else {
            self.phase = GamePhase::Terminal(Outcome::Win);
            GameEvent::GameWon
        }
    }

    /// Move past a cleared level; false if no level was waiting
    pub fn advance_level(&mut self) -> bool {
        if self.phase != GamePhase::LevelCleared {
            return false;
        }
        self.level += 1;
        self.phase = GamePhase::Playing;
        true
    }

    pub fn lose_life(&mut self) -> LifeLoss {
        self.lives = self.lives.saturating_sub(1);
        let game_over = self.lives == 0;
        if game_over {
            self.phase = GamePhase::Terminal(Outcome::Loss);
        }
        LifeLoss {
            lives_left: self.lives,
            game_over,
        }
    }

    /// Latch the externally requested teardown; false if already cleared
    pub fn clear(&mut self) -> bool {
        if self.phase == GamePhase::Cleared {
            return false;
        }
        self.phase = GamePhase::Cleared;
        true
    }
}
