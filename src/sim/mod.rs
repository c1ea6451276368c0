//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded RNG only
//! - Stable iteration order (balls kept in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod progress;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Outcome, Resolution, classify, resolve};
pub use progress::TickDelta;
pub use spawn::maybe_spawn;
pub use state::{Ball, BallColor, Basket, Direction, GameState, GameStatus, Playfield};
pub use tick::tick;
