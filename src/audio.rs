//! Sound cues for game events
//!
//! The engine never plays audio. Collaborators subscribe to [`GameEvent`]s and
//! look up which asset to play here.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect kinds the engine can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits a brick
    Brick,
    /// Ball bounces off the paddle
    Paddle,
    /// Life lost, game continues
    LoseLife,
    /// Last life lost
    GameOver,
    /// Level or game won
    Win,
}

impl SoundEffect {
    /// Effect for an event, if the event has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::TargetHit { .. } => Some(SoundEffect::Brick),
            GameEvent::PaddleBounce => Some(SoundEffect::Paddle),
            // The final life lost is voiced by GameOver instead
            GameEvent::LifeLost { lives_left: 0 } => None,
            GameEvent::LifeLost { .. } => Some(SoundEffect::LoseLife),
            GameEvent::GameOver => Some(SoundEffect::GameOver),
            GameEvent::LevelCleared { .. } | GameEvent::GameWon => Some(SoundEffect::Win),
        }
    }
}

/// Asset names for each effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundBank {
    pub win: String,
    pub brick: String,
    pub paddle: String,
    pub lose_life: String,
    pub game_over: String,
    /// Playback volume (0.0 - 1.0)
    pub volume: f32,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self {
            win: "sounds/win.mp3".to_string(),
            brick: "sounds/brick.mp3".to_string(),
            paddle: "sounds/paddle.mp3".to_string(),
            lose_life: "sounds/loselife.mp3".to_string(),
            game_over: "sounds/gameover.mp3".to_string(),
            volume: 0.75,
        }
    }
}

impl SoundBank {
    /// Asset for an effect
    pub fn asset(&self, effect: SoundEffect) -> &str {
        match effect {
            SoundEffect::Brick => &self.brick,
            SoundEffect::Paddle => &self.paddle,
            SoundEffect::LoseLife => &self.lose_life,
            SoundEffect::GameOver => &self.game_over,
            SoundEffect::Win => &self.win,
        }
    }

    /// Asset to play for an event, if any
    pub fn cue(&self, event: &GameEvent) -> Option<&str> {
        SoundEffect::for_event(event).map(|effect| self.asset(effect))
    }
}
