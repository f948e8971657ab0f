//! Frame driver
//!
//! Owns one session and turns each display refresh into a simulation step:
//! draw, resolve, integrate, report. The scheduler is external; the caller
//! keeps calling `frame` until it reports `Stop`.

use crate::config::{ArenaBootstrap, Palette};
use crate::error::ConfigError;
use crate::input::{Controls, SignalReader};
use crate::renderer::{Surface, draw_scene};
use crate::scene::RenderScene;
use crate::sim::{GameEvent, GamePhase, GameState, ProgressSnapshot, tick};

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No session yet
    Idle,
    Running,
    /// Torn down from outside
    Cleared,
    /// Session ended on its own and showed its final overlay
    Terminal,
}

/// Whether the scheduler should call `frame` again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

/// What one frame did
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub outcome: FrameOutcome,
    pub events: Vec<GameEvent>,
    /// Scene drawn this frame, if any
    pub scene: Option<RenderScene>,
}

impl FrameReport {
    fn stop(scene: Option<RenderScene>) -> Self {
        Self {
            outcome: FrameOutcome::Stop,
            events: Vec::new(),
            scene,
        }
    }
}

type Subscriber = Box<dyn FnMut(&GameEvent)>;

pub struct FrameDriver {
    state: DriverState,
    session: Option<GameState>,
    reader: Option<SignalReader>,
    palette: Palette,
    subscribers: Vec<Subscriber>,
    frame_count: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
            session: None,
            reader: None,
            palette: Palette::default(),
            subscribers: Vec::new(),
            frame_count: 0,
        }
    }

    /// Validate the bootstrap and begin a session
    ///
    /// Starting again replaces the current session; handles from the old one
    /// stop working. On error the driver is left untouched.
    pub fn start(&mut self, bootstrap: &ArenaBootstrap) -> Result<Controls, ConfigError> {
        let session = GameState::new(bootstrap)?;

        if let Some(old) = self.reader.take() {
            old.close();
            log::info!("Replacing running session");
        }

        let (reader, controls) = SignalReader::new();
        log::info!(
            "Session started: {}x{} arena, {} targets, {} levels",
            bootstrap.width,
            bootstrap.height,
            session.targets.len(),
            session.progress.level_count()
        );
        self.palette = bootstrap.config.palette.clone();
        self.session = Some(session);
        self.reader = Some(reader);
        self.state = DriverState::Running;
        self.frame_count = 0;
        Ok(controls)
    }

    /// Receive every event the session produces
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn session(&self) -> Option<&GameState> {
        self.session.as_ref()
    }

    pub fn snapshot(&self) -> Option<ProgressSnapshot> {
        self.session.as_ref().map(|s| s.progress.snapshot())
    }

    /// Frames run since the session started
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one frame against `surface`
    pub fn frame(&mut self, surface: &mut impl Surface) -> FrameReport {
        if !matches!(self.state, DriverState::Running | DriverState::Terminal) {
            return FrameReport::stop(None);
        }
        let (Some(session), Some(reader)) = (self.session.as_mut(), self.reader.as_ref()) else {
            return FrameReport::stop(None);
        };

        // Teardown is honored after a terminal stop too, to clear the overlay
        if reader.teardown_requested() {
            session.progress.clear();
            surface.clear();
            reader.close();
            self.subscribers.clear();
            self.state = DriverState::Cleared;
            log::info!("Session torn down after {} frames", self.frame_count);
            return FrameReport::stop(None);
        }
        if self.state == DriverState::Terminal {
            return FrameReport::stop(None);
        }
        self.frame_count += 1;

        let scene = RenderScene::capture(session);
        draw_scene(&scene, &self.palette, surface);

        if let GamePhase::Terminal(outcome) = session.progress.phase() {
            reader.detach();
            self.state = DriverState::Terminal;
            log::info!(
                "Session ended ({outcome:?}) with score {}",
                session.progress.score()
            );
            return FrameReport::stop(Some(scene));
        }

        let input = reader.take_input();
        let events = tick(session, &input);
        for event in &events {
            for subscriber in &mut self.subscribers {
                subscriber(event);
            }
        }

        FrameReport {
            outcome: FrameOutcome::Continue,
            events,
            scene: Some(scene),
        }
    }
}
