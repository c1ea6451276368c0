//! Fixed timestep simulation tick
//!
//! One tick runs the pipeline in fixed order: spawn, fall, catch resolution,
//! progression. Events go back to the caller instead of being handled here.

use rand::Rng;

use super::state::{GameState, GameStatus, Playfield};
use super::{collision, progress, spawn};
use crate::events::GameEvent;
use crate::tuning::Tuning;

/// Advance the game state by one fixed timestep of `dt_ms`.
///
/// Only Active states tick, and an unusable playfield turns the whole tick
/// into a no-op (the spawn timer does not accumulate either). Returned events
/// are in occurrence order; `GameOver` is always last when present.
pub fn tick<R: Rng>(
    state: &mut GameState,
    playfield: Playfield,
    tuning: &Tuning,
    rng: &mut R,
    dt_ms: f32,
) -> Vec<GameEvent> {
    if state.status != GameStatus::Active || !playfield.is_usable() {
        return Vec::new();
    }

    state.time_ticks += 1;

    // At most one new ball per tick, then every live ball advances -
    // including the one that just spawned
    state.spawn_elapsed_ms += dt_ms;
    spawn::maybe_spawn(state, tuning, rng);
    for ball in &mut state.balls {
        ball.fall(playfield);
    }

    // Partition the advanced set against the basket; survivors go straight
    // back into the state
    let balls = std::mem::take(&mut state.balls);
    let resolution = collision::resolve(balls, &state.basket, playfield, tuning);
    state.balls = resolution.falling;

    let caught = resolution.caught.len() as u32;
    let missed = resolution.missed.len() as u32;
    let delta = progress::evaluate(state.score, state.lives, state.level, caught, missed, tuning);

    let mut events = Vec::new();
    for _ in 0..caught {
        events.push(GameEvent::Caught);
    }
    for _ in 0..missed {
        events.push(GameEvent::Missed);
    }
    if delta.leveled_up {
        events.push(GameEvent::LevelUp { level: delta.level });
    }
    if delta.game_over {
        events.push(GameEvent::GameOver {
            score: delta.score,
            level: delta.level,
        });
    }

    // One atomic write for the whole tick
    progress::apply(state, delta);

    events
}
