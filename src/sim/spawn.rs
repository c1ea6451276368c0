//! Ball spawning - difficulty-scaled cadence with randomized attributes

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::{Ball, BallColor, GameState};
use crate::tuning::Tuning;

/// Spawn a ball if the cadence timer has come due.
///
/// The caller accumulates elapsed time on `state.spawn_elapsed_ms`; at most
/// one ball spawns per call. Horizontal position is uniform within the side
/// margins, speed scales with level plus uniform jitter, tint is a uniform
/// palette pick. Returns the new ball's id.
pub fn maybe_spawn<R: Rng>(state: &mut GameState, tuning: &Tuning, rng: &mut R) -> Option<u32> {
    if state.spawn_elapsed_ms < tuning.spawn_interval_ms(state.level) {
        return None;
    }
    state.spawn_elapsed_ms = 0.0;

    let margin = tuning.spawn_margin_pct.clamp(0.0, 50.0);
    let x = rng.random_range(margin..=100.0 - margin);
    let jitter = if tuning.fall_speed_jitter > 0.0 {
        rng.random_range(0.0..tuning.fall_speed_jitter)
    } else {
        0.0
    };
    let speed = tuning.fall_speed_base_at(state.level) + jitter;
    let color = BallColor::PALETTE.choose(rng).copied().unwrap_or(BallColor::Red);

    let id = state.next_ball_id();
    state.balls.push(Ball::new(
        id,
        Vec2::new(x, tuning.spawn_start_y_pct),
        speed,
        color,
    ));
    log::debug!("spawned ball {} at x={:.1} speed={:.2}", id, x, speed);
    Some(id)
}
