//! Catchfall - an arcade catch-the-falling-ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, catching, progression)
//! - `session`: Orchestration - fixed-timestep clock, cancellation, input, snapshots
//! - `events`: Gameplay notifications for host UIs
//! - `tuning`: Data-driven game balance
//! - `web`: Browser host adapter (wasm32 only)

pub mod events;
pub mod session;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use events::{EventSink, GameEvent};
pub use session::{Session, Snapshot, TickToken};
pub use tuning::Tuning;

/// Game timing constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const TICK_MS: f32 = 1000.0 / 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;
    /// Frame deltas above this are clamped (tab was backgrounded)
    pub const MAX_FRAME_DELTA_MS: f32 = 250.0;
}

/// Convert a percentage coordinate to pixels within an extent
#[inline]
pub fn pct_to_px(pct: f32, extent_px: f32) -> f32 {
    pct / 100.0 * extent_px
}

/// Convert a pixel coordinate to a percentage of an extent
#[inline]
pub fn px_to_pct(px: f32, extent_px: f32) -> f32 {
    px / extent_px * 100.0
}
