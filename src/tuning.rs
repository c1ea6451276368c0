//! Data-driven game balance
//!
//! Every gameplay number lives here so difficulty can be rebalanced without
//! touching simulation code. `Tuning::default()` carries the shipped values;
//! hosts may override individual fields via `Tuning::from_json`.

use serde::{Deserialize, Serialize};

/// Gameplay balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scoring ===
    /// Points awarded per caught ball
    pub catch_reward: u32,
    /// Score per level needed to advance (level N ends at N * threshold)
    pub level_up_threshold: u32,
    /// Lives at the start of a run
    pub starting_lives: u32,

    // === Spawn cadence ===
    /// Milliseconds between spawns at level 1
    pub spawn_interval_max_ms: f32,
    /// Cadence floor - spawning never gets faster than this
    pub spawn_interval_min_ms: f32,
    /// Interval reduction per level above 1
    pub spawn_interval_step_ms: f32,
    /// Keep spawn centers this far (percent) from the side edges
    pub spawn_margin_pct: f32,
    /// Vertical spawn position (percent; negative is above the visible field)
    pub spawn_start_y_pct: f32,

    // === Fall speed ===
    /// Pixels per tick at level 1, before jitter
    pub base_fall_speed: f32,
    /// Speed added per level above 1
    pub fall_speed_per_level: f32,
    /// Uniform random extra speed in [0, jitter)
    pub fall_speed_jitter: f32,

    // === Geometry (pixels, zoom-independent) ===
    /// Ball diameter
    pub ball_size_px: f32,
    /// Basket width
    pub basket_width_px: f32,
    /// Basket height (depth of the catch band)
    pub basket_height_px: f32,

    // === Input ===
    /// Basket movement per intent (percent of playfield width)
    pub basket_step_pct: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            catch_reward: 10,
            level_up_threshold: 100,
            starting_lives: 3,
            spawn_interval_max_ms: 2000.0,
            spawn_interval_min_ms: 500.0,
            spawn_interval_step_ms: 150.0,
            spawn_margin_pct: 5.0,
            spawn_start_y_pct: -8.0,
            base_fall_speed: 2.0,
            fall_speed_per_level: 0.4,
            fall_speed_jitter: 1.2,
            ball_size_px: 30.0,
            basket_width_px: 120.0,
            basket_height_px: 30.0,
            basket_step_pct: 5.0,
        }
    }
}

impl Tuning {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Spawn interval for a level, clamped to the cadence floor
    pub fn spawn_interval_ms(&self, level: u32) -> f32 {
        let reduced = self.spawn_interval_max_ms
            - level.saturating_sub(1) as f32 * self.spawn_interval_step_ms;
        reduced.max(self.spawn_interval_min_ms)
    }

    /// Fall speed floor for a level, before jitter
    pub fn fall_speed_base_at(&self, level: u32) -> f32 {
        self.base_fall_speed + level.saturating_sub(1) as f32 * self.fall_speed_per_level
    }
}
