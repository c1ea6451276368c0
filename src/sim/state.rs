//! Game state and core simulation types
//!
//! Everything the simulation reads and mutates per tick lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::px_to_pct;
use crate::tuning::Tuning;

/// Current status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// No run yet - waiting for the first start command
    Idle,
    /// Active gameplay
    Active,
    /// Run ended (lives exhausted)
    Over,
}

/// Ball tint - a rendering hint only, never read by simulation logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl BallColor {
    /// Spawn palette, picked from uniformly
    pub const PALETTE: [BallColor; 5] = [
        BallColor::Red,
        BallColor::Blue,
        BallColor::Green,
        BallColor::Yellow,
        BallColor::Purple,
    ];

    /// Lowercase name for host-side CSS mapping
    pub fn as_str(&self) -> &'static str {
        match self {
            BallColor::Red => "red",
            BallColor::Blue => "blue",
            BallColor::Green => "green",
            BallColor::Yellow => "yellow",
            BallColor::Purple => "purple",
        }
    }
}

/// A falling ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    /// Center position in playfield percent: x 0-100 across, y 0 at the top
    /// and 100 at the bottom. y may be negative (above the visible field) or
    /// past 100 (below it) while the ball is still live.
    pub pos: Vec2,
    /// Fall speed in pixels per tick; fixed at spawn, never mutated afterward
    pub speed: f32,
    /// Rendering tint
    pub color: BallColor,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, speed: f32, color: BallColor) -> Self {
        Self {
            id,
            pos,
            speed,
            color,
        }
    }

    /// Advance one tick of constant-velocity fall.
    ///
    /// Speed is in pixels per tick so the on-screen rate is identical on any
    /// playfield height; the percent step is rescaled to match.
    pub fn fall(&mut self, playfield: Playfield) {
        self.pos.y += px_to_pct(self.speed, playfield.height_px);
    }
}

/// Direction of a steering intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// The player's basket, anchored to the bottom edge of the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    /// Horizontal center in playfield percent
    pub x: f32,
    /// Width in pixels (zoom-independent)
    pub width_px: f32,
    /// Height in pixels - the depth of the catch band
    pub height_px: f32,
}

impl Basket {
    /// Fresh basket centered mid-field
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: 50.0,
            width_px: tuning.basket_width_px,
            height_px: tuning.basket_height_px,
        }
    }

    /// Half width as a percent of the current playfield width
    pub fn half_width_pct(&self, playfield: Playfield) -> f32 {
        px_to_pct(self.width_px, playfield.width_px) / 2.0
    }

    /// Apply one steering intent, clamped so the basket never exits the field
    pub fn shift(&mut self, dir: Direction, step_pct: f32, playfield: Playfield) {
        if !playfield.is_usable() {
            return;
        }
        let half = self.half_width_pct(playfield);
        if half >= 50.0 {
            // Basket spans the whole field; only the center fits
            self.x = 50.0;
            return;
        }
        let dx = match dir {
            Direction::Left => -step_pct,
            Direction::Right => step_pct,
        };
        self.x = (self.x + dx).clamp(half, 100.0 - half);
    }
}

/// Host-supplied playfield dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width_px: f32,
    pub height_px: f32,
}

impl Playfield {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// False when a dimension is zero or negative (collapsed layout, hidden
    /// tab). Ticks against an unusable playfield are no-ops.
    pub fn is_usable(&self) -> bool {
        self.width_px > 0.0 && self.height_px > 0.0
    }
}

/// Complete simulation state for one run (serializable for debug dumps)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed, logged at start for reproduction
    pub seed: u64,
    /// Current status
    pub status: GameStatus,
    /// Score - a fixed reward per caught ball, never decreases mid-run
    pub score: u32,
    /// Remaining lives
    pub lives: u32,
    /// Difficulty level, starts at 1 and only climbs
    pub level: u32,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Milliseconds elapsed since the last spawn
    pub spawn_elapsed_ms: f32,
    /// Live falling balls (sorted by id - spawn order)
    pub balls: Vec<Ball>,
    /// Player basket
    pub basket: Basket,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh state, Idle until the first start command
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            status: GameStatus::Idle,
            score: 0,
            lives: tuning.starting_lives,
            level: 1,
            time_ticks: 0,
            spawn_elapsed_ms: 0.0,
            balls: Vec::new(),
            basket: Basket::new(tuning),
            next_id: 1,
        }
    }

    /// Reset for a (re)start: counters zeroed, field cleared, basket
    /// recentered, status Active. Initial start and restart are symmetric.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.status = GameStatus::Active;
        self.score = 0;
        self.lives = tuning.starting_lives;
        self.level = 1;
        self.time_ticks = 0;
        self.spawn_elapsed_ms = 0.0;
        self.balls.clear();
        self.basket = Basket::new(tuning);
        self.next_id = 1;
    }

    /// Allocate a new entity ID
    pub fn next_ball_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
