//! Score, lives, and level progression
//!
//! Each tick's catches and misses reduce to a `TickDelta` computed as a pure
//! function of the pre-tick counters, then written back in one place. Score,
//! lives, and level never change anywhere else.

use super::state::{GameState, GameStatus};
use crate::tuning::Tuning;

/// Post-tick counters plus the transitions they triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickDelta {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Whether a level-up fired this tick
    pub leveled_up: bool,
    /// Whether lives ran out this tick
    pub game_over: bool,
}

/// Compute the post-tick counters from the pre-tick counters.
///
/// Level-up rule: fires when the tick gained score and the new total has
/// reached `level * threshold`, reading `level` before the increment. The
/// level climbs at most one step per tick no matter how far the score
/// overshoots, and each step pays one bonus life. The bonus life lands before
/// the game-over check, so a tick that drops the last life but levels up
/// stays alive.
pub fn evaluate(
    score: u32,
    lives: u32,
    level: u32,
    caught: u32,
    missed: u32,
    tuning: &Tuning,
) -> TickDelta {
    let new_score = score + caught * tuning.catch_reward;
    let mut new_lives = lives.saturating_sub(missed);

    let leveled_up = new_score > score && new_score >= level * tuning.level_up_threshold;
    let new_level = if leveled_up { level + 1 } else { level };
    if leveled_up {
        new_lives += 1;
    }

    TickDelta {
        score: new_score,
        lives: new_lives,
        level: new_level,
        leveled_up,
        game_over: new_lives == 0,
    }
}

/// Write one tick's delta back as a single update, including the Over
/// transition when lives ran out.
pub fn apply(state: &mut GameState, delta: TickDelta) {
    state.score = delta.score;
    state.lives = delta.lives;
    state.level = delta.level;
    if delta.game_over {
        state.status = GameStatus::Over;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_catch_adds_fixed_reward() {
        let delta = evaluate(0, 3, 1, 2, 0, &Tuning::default());
        assert_eq!(delta.score, 20);
        assert_eq!(delta.lives, 3);
        assert_eq!(delta.level, 1);
        assert!(!delta.leveled_up);
        assert!(!delta.game_over);
    }

    #[test]
    fn test_each_miss_costs_one_life() {
        let delta = evaluate(50, 3, 1, 0, 2, &Tuning::default());
        assert_eq!(delta.lives, 1);
        assert_eq!(delta.score, 50);
        assert!(!delta.game_over);
    }

    #[test]
    fn test_lives_never_go_negative() {
        let delta = evaluate(0, 1, 1, 0, 3, &Tuning::default());
        assert_eq!(delta.lives, 0);
        assert!(delta.game_over);
    }

    #[test]
    fn test_level_up_at_threshold_pays_bonus_life() {
        // 90 + one catch = 100 = 1 * threshold
        let delta = evaluate(90, 3, 1, 1, 0, &Tuning::default());
        assert_eq!(delta.score, 100);
        assert_eq!(delta.level, 2);
        assert_eq!(delta.lives, 4);
        assert!(delta.leveled_up);
    }

    #[test]
    fn test_threshold_reads_level_before_increment() {
        // At level 2 the bar is 200, not 100
        let delta = evaluate(150, 3, 2, 1, 0, &Tuning::default());
        assert_eq!(delta.score, 160);
        assert_eq!(delta.level, 2);
        assert!(!delta.leveled_up);

        let delta = evaluate(190, 3, 2, 1, 0, &Tuning::default());
        assert_eq!(delta.score, 200);
        assert_eq!(delta.level, 3);
        assert!(delta.leveled_up);
    }

    #[test]
    fn test_overshoot_climbs_a_single_level() {
        // 30 catches land all at once: score jumps 0 -> 300, past both the
        // level-1 and level-2 bars. The level still climbs exactly one step
        // and pays exactly one bonus life.
        let delta = evaluate(0, 3, 1, 30, 0, &Tuning::default());
        assert_eq!(delta.score, 300);
        assert_eq!(delta.level, 2);
        assert_eq!(delta.lives, 4);
    }

    #[test]
    fn test_no_level_up_without_score_gain() {
        // Score already past the bar, but this tick gained nothing
        let delta = evaluate(300, 3, 2, 0, 1, &Tuning::default());
        assert_eq!(delta.level, 2);
        assert_eq!(delta.lives, 2);
        assert!(!delta.leveled_up);
    }

    #[test]
    fn test_bonus_life_outruns_game_over() {
        // Last life lost and level-up earned on the same tick
        let delta = evaluate(90, 1, 1, 1, 1, &Tuning::default());
        assert_eq!(delta.lives, 1);
        assert!(delta.leveled_up);
        assert!(!delta.game_over);
    }

    #[test]
    fn test_game_over_on_last_miss() {
        let delta = evaluate(50, 1, 1, 0, 1, &Tuning::default());
        assert_eq!(delta.lives, 0);
        assert!(delta.game_over);
    }

    #[test]
    fn test_apply_writes_counters_and_over_transition() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, &tuning);
        state.reset(&tuning);
        state.score = 40;

        let delta = evaluate(state.score, state.lives, state.level, 1, 3, &tuning);
        apply(&mut state, delta);

        assert_eq!(state.score, 50);
        assert_eq!(state.lives, 0);
        assert_eq!(state.status, GameStatus::Over);
    }

    proptest! {
        #[test]
        fn test_counter_arithmetic_holds(
            score in 0u32..100_000,
            lives in 0u32..100,
            level in 1u32..200,
            caught in 0u32..500,
            missed in 0u32..500,
        ) {
            let tuning = Tuning::default();
            let delta = evaluate(score, lives, level, caught, missed, &tuning);
            let bonus = u32::from(delta.leveled_up);
            prop_assert_eq!(delta.score, score + caught * tuning.catch_reward);
            prop_assert_eq!(delta.lives, lives.saturating_sub(missed) + bonus);
            prop_assert_eq!(delta.level, level + bonus);
            prop_assert_eq!(delta.game_over, delta.lives == 0);
            // Score never decreases, level never decreases
            prop_assert!(delta.score >= score);
            prop_assert!(delta.level >= level);
        }
    }
}
