//! Gameplay notifications for host UIs
//!
//! The simulation reports what happened each tick; a sink decides how to
//! present it. Sinks never reach back into the session.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A discrete gameplay moment
///
/// Serialized internally-tagged (`{"kind": "level_up", "level": 2}`) so web
/// hosts can switch on `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A run began (initial start or restart)
    Started,
    /// A ball landed in the basket
    Caught,
    /// A ball fell past the bottom edge
    Missed,
    /// The run reached a new difficulty level
    LevelUp { level: u32 },
    /// Lives ran out; final totals attached
    GameOver { score: u32, level: u32 },
}

/// Receives gameplay events as they happen, in tick order
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// Discards everything - the default sink
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Forwards events to the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started => log::info!("run started"),
            GameEvent::Caught => log::info!("ball caught"),
            GameEvent::Missed => log::info!("ball missed"),
            GameEvent::LevelUp { level } => log::info!("level up -> {}", level),
            GameEvent::GameOver { score, level } => {
                log::info!("game over: score {} at level {}", score, level)
            }
        }
    }
}

/// Clone-handle buffer: the session holds one handle as its sink while the
/// host keeps another and drains it after each frame.
#[derive(Debug, Default, Clone)]
pub struct EventBuffer {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything buffered so far, oldest first
    pub fn drain(&self) -> Vec<GameEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for EventBuffer {
    fn notify(&mut self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}
