//! Browser host adapter
//!
//! A thin wasm-bindgen wrapper around `Session` for a JS render loop: the
//! page owns requestAnimationFrame and the DOM, this module owns the
//! simulation. Data crosses the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::events::EventBuffer;
use crate::session::{Session, TickToken};
use crate::sim::{Direction, Playfield};
use crate::tuning::Tuning;

/// Module init: panics and log lines go to the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("error initializing log");
}

#[wasm_bindgen]
pub struct WebSession {
    inner: Session,
    events: EventBuffer,
    token: Option<TickToken>,
}

#[wasm_bindgen]
impl WebSession {
    /// `seed` is typically `Date.now()`
    #[wasm_bindgen(constructor)]
    pub fn new(width_px: f32, height_px: f32, seed: f64) -> WebSession {
        let events = EventBuffer::new();
        let mut inner = Session::new(Playfield::new(width_px, height_px), seed as u64);
        inner.set_sink(Box::new(events.clone()));
        WebSession {
            inner,
            events,
            token: None,
        }
    }

    /// Apply a JSON tuning override (see `Tuning`); bad JSON is logged and
    /// ignored
    pub fn set_tuning_json(&mut self, json: &str) {
        match Tuning::from_json(json) {
            Ok(tuning) => self.inner.set_tuning(tuning),
            Err(e) => log::warn!("ignoring bad tuning JSON: {}", e),
        }
    }

    /// Start or restart a run
    pub fn start(&mut self) {
        self.token = Some(self.inner.start());
    }

    /// Stop the clock; animation frames already queued become no-ops
    pub fn stop(&mut self) {
        self.inner.stop();
        self.token = None;
    }

    pub fn steer_left(&mut self) {
        self.inner.steer(Direction::Left);
    }

    pub fn steer_right(&mut self) {
        self.inner.steer(Direction::Right);
    }

    /// Drive the simulation from requestAnimationFrame. Returns false once
    /// the page should stop scheduling frames.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        match self.token {
            Some(token) => self.inner.on_frame(token, now_ms),
            None => false,
        }
    }

    /// Track a layout resize
    pub fn resize(&mut self, width_px: f32, height_px: f32) {
        self.inner.set_playfield(Playfield::new(width_px, height_px));
    }

    /// Current frame as a `Snapshot` in JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.inner.snapshot()).unwrap_or_else(|_| "{}".into())
    }

    /// Everything that happened since the last drain, as a JSON array
    pub fn drain_events_json(&mut self) -> String {
        serde_json::to_string(&self.events.drain()).unwrap_or_else(|_| "[]".into())
    }
}
