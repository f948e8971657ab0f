//! Render scene: what a frame shows, independent of how it is drawn
//!
//! Captured from a `GameState` once per frame and handed to a `Surface` by
//! `renderer::draw_scene`. Serializable so collaborators can ship it elsewhere.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Outcome, Rect, Target};

/// How a brick should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetState {
    Intact,
    /// Hit at least once but still standing (levels above 1)
    Damaged,
    /// Not drawn and not collidable until the next level
    Destroyed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub rect: Rect,
    pub label: String,
    pub state: TargetState,
    pub hits: u32,
}

impl TargetView {
    fn capture(target: &Target, required_hits: u32) -> Self {
        let state = if target.is_destroyed(required_hits) {
            TargetState::Destroyed
        } else if target.hits > 0 {
            TargetState::Damaged
        } else {
            TargetState::Intact
        };
        Self {
            rect: target.rect,
            label: target.label.clone(),
            state,
            hits: target.hits,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state != TargetState::Destroyed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub center: Vec2,
    pub radius: f32,
}

/// Centered message panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    LevelCleared { level: u32 },
    Won,
    Lost,
}

impl Overlay {
    pub fn text(&self) -> String {
        match self {
            Overlay::LevelCleared { level } => format!("Level {level} Cleared"),
            Overlay::Won => "You Win".to_string(),
            Overlay::Lost => "Game Over".to_string(),
        }
    }

    /// Terminal overlays are drawn instead of the arena, not on top of it
    pub fn replaces_arena(&self) -> bool {
        matches!(self, Overlay::Won | Overlay::Lost)
    }

    fn for_phase(phase: GamePhase, level: u32) -> Option<Self> {
        match phase {
            GamePhase::LevelCleared => Some(Overlay::LevelCleared { level }),
            GamePhase::Terminal(Outcome::Win) => Some(Overlay::Won),
            GamePhase::Terminal(Outcome::Loss) => Some(Overlay::Lost),
            GamePhase::Playing | GamePhase::Cleared => None,
        }
    }
}

/// Everything one frame draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderScene {
    pub width: f32,
    pub height: f32,
    /// In bootstrap order, destroyed targets included
    pub targets: Vec<TargetView>,
    pub ball: BallView,
    pub paddle: Rect,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub level_count: u32,
    pub overlay: Option<Overlay>,
}

impl RenderScene {
    pub fn capture(state: &GameState) -> Self {
        let progress = &state.progress;
        let required = progress.required_hits();
        Self {
            width: state.arena.width,
            height: state.arena.height,
            targets: state
                .targets
                .iter()
                .map(|t| TargetView::capture(t, required))
                .collect(),
            ball: BallView {
                center: state.ball.pos,
                radius: state.ball.radius,
            },
            paddle: state.paddle.rect(&state.arena),
            score: progress.score(),
            lives: progress.lives(),
            level: progress.level(),
            level_count: progress.level_count(),
            overlay: Overlay::for_phase(progress.phase(), progress.level()),
        }
    }

    pub fn visible_targets(&self) -> impl Iterator<Item = &TargetView> {
        self.targets.iter().filter(|t| t.is_visible())
    }
}
