//! Input and teardown handles
//!
//! Collaborators write signals the moment they arrive; the frame driver reads
//! the latest values at the start of the next frame. Handles can never touch
//! session state directly.

use std::cell::Cell;
use std::rc::Rc;

use crate::sim::{PaddleSignal, TickInput};

pub use crate::sim::PaddleDirection;

/// Shared signal cells between the handles and the driver
#[derive(Debug, Default)]
struct Signals {
    paddle: Cell<PaddleSignal>,
    advance: Cell<bool>,
    teardown: Cell<bool>,
    /// Session no longer takes play input (ended or closed)
    detached: Cell<bool>,
    /// Session torn down or replaced; nothing is accepted any more
    closed: Cell<bool>,
}

/// Paddle and level-advance signals
///
/// Every write returns false once the session this handle belongs to has
/// ended or been replaced.
#[derive(Debug, Clone)]
pub struct InputHandle {
    signals: Rc<Signals>,
}

impl InputHandle {
    /// Key state: move the paddle each tick while a direction is held
    pub fn set_direction(&self, direction: PaddleDirection) -> bool {
        self.write(|s| s.paddle.set(PaddleSignal::Direction(direction)))
    }

    /// Pointer x in arena coordinates; the paddle centers under it
    pub fn point_at(&self, x: f32) -> bool {
        self.write(|s| s.paddle.set(PaddleSignal::Pointer(x)))
    }

    /// Continue past a cleared level
    pub fn request_advance_level(&self) -> bool {
        self.write(|s| s.advance.set(true))
    }

    pub fn is_attached(&self) -> bool {
        !self.signals.detached.get()
    }

    fn write(&self, f: impl FnOnce(&Signals)) -> bool {
        if !self.is_attached() {
            return false;
        }
        f(&self.signals);
        true
    }
}

/// Ends a session from outside
#[derive(Debug, Clone)]
pub struct TeardownHandle {
    signals: Rc<Signals>,
}

impl TeardownHandle {
    /// Request teardown; false if already requested, torn down or replaced
    ///
    /// Still accepted after the session ended on its own, so the final
    /// overlay can be cleared away.
    pub fn teardown(&self) -> bool {
        if self.signals.closed.get() || self.signals.teardown.get() {
            return false;
        }
        self.signals.teardown.set(true);
        log::debug!("Teardown requested");
        true
    }

    pub fn is_requested(&self) -> bool {
        self.signals.teardown.get()
    }
}

/// Handles returned when a session starts
#[derive(Debug, Clone)]
pub struct Controls {
    pub input: InputHandle,
    pub teardown: TeardownHandle,
}

/// Driver side of the signal cells
#[derive(Debug)]
pub(crate) struct SignalReader {
    signals: Rc<Signals>,
}

impl SignalReader {
    pub(crate) fn new() -> (Self, Controls) {
        let signals = Rc::new(Signals::default());
        let controls = Controls {
            input: InputHandle {
                signals: Rc::clone(&signals),
            },
            teardown: TeardownHandle {
                signals: Rc::clone(&signals),
            },
        };
        (Self { signals }, controls)
    }

    pub(crate) fn teardown_requested(&self) -> bool {
        self.signals.teardown.get()
    }

    /// Latest paddle signal plus the pending advance request, which is consumed
    pub(crate) fn take_input(&self) -> TickInput {
        TickInput {
            paddle: self.signals.paddle.get(),
            advance_level: self.signals.advance.replace(false),
        }
    }

    /// Stop accepting play input; teardown stays live
    pub(crate) fn detach(&self) {
        self.signals.detached.set(true);
    }

    /// Disconnect every handle from this session
    pub(crate) fn close(&self) {
        self.signals.detached.set(true);
        self.signals.closed.set(true);
    }
}
