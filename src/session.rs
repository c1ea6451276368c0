//! Session orchestration - the clock, input, and lifecycle around the sim
//!
//! A `Session` owns one game's worth of state plus the fixed-timestep clock
//! that drives it. Host frames only tick while the scheduler is running and
//! only with the token from the current run, so a stale callback firing
//! after a stop or restart can never touch state. Tokens cannot be forged:
//! the only way to get one is `Session::start`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DELTA_MS, MAX_TICKS_PER_FRAME, TICK_MS};
use crate::events::{EventSink, GameEvent, NullSink};
use crate::sim::{self, BallColor, Direction, GameState, GameStatus, Playfield};
use crate::tuning::Tuning;

/// Scheduler lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulerState {
    /// No run started yet
    Created,
    /// Frames are welcome
    Running,
    /// Torn down; frames are rejected until the next start
    Stopped,
}

/// Ticket pairing a host frame callback with the run that scheduled it.
/// Deliberately opaque and non-deserializable: the only source is `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    generation: u64,
}

/// Cancellable tick gate.
///
/// Every start bumps the generation and hands out a fresh token; stop flips
/// the state and bumps again, so tokens from earlier runs can never match.
/// Stopping twice is a no-op.
#[derive(Debug)]
struct SchedulerHandle {
    state: SchedulerState,
    generation: u64,
}

impl SchedulerHandle {
    fn new() -> Self {
        Self {
            state: SchedulerState::Created,
            generation: 0,
        }
    }

    fn start(&mut self) -> TickToken {
        self.generation += 1;
        self.state = SchedulerState::Running;
        TickToken {
            generation: self.generation,
        }
    }

    fn stop(&mut self) {
        if self.state == SchedulerState::Running {
            self.generation += 1;
        }
        self.state = SchedulerState::Stopped;
    }

    fn accepts(&self, token: TickToken) -> bool {
        self.state == SchedulerState::Running && token.generation == self.generation
    }
}

/// Render view of one ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub id: u32,
    /// Center in playfield percent
    pub x: f32,
    pub y: f32,
    pub color: BallColor,
}

/// Read-only view of one frame - everything a renderer needs to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Basket center in playfield percent
    pub basket_x: f32,
    pub balls: Vec<BallView>,
}

/// One playable game: state, tuning, randomness, clock, and event wiring
pub struct Session {
    state: GameState,
    playfield: Playfield,
    tuning: Tuning,
    rng: Pcg32,
    scheduler: SchedulerHandle,
    sink: Box<dyn EventSink>,
    /// Fixed-step accumulator in milliseconds
    accumulator: f32,
    /// Timestamp of the previous accepted frame
    last_time_ms: Option<f64>,
}

impl Session {
    /// New idle session. The seed drives every spawn decision and is logged
    /// at start so interesting runs can be reproduced.
    pub fn new(playfield: Playfield, seed: u64) -> Self {
        let tuning = Tuning::default();
        Self {
            state: GameState::new(seed, &tuning),
            playfield,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            scheduler: SchedulerHandle::new(),
            sink: Box::new(NullSink),
            accumulator: 0.0,
            last_time_ms: None,
        }
    }

    /// Replace the event sink (normally wired up before the first start)
    pub fn set_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = sink;
    }

    /// Replace the balance parameters. Per-tick values (cadence, speeds,
    /// rewards, ball size) apply from the next tick; basket dimensions are
    /// copied into the run at start, so new dims land on the next start.
    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.tuning = tuning;
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Track a host-side resize
    pub fn set_playfield(&mut self, playfield: Playfield) {
        self.playfield = playfield;
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Direct read access for hosts that draw without the snapshot layer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Start a run. Initial start and restart are the same operation: all
    /// state resets, tokens from any previous run stop matching, and the
    /// returned token must accompany every frame of this run.
    pub fn start(&mut self) -> TickToken {
        self.state.reset(&self.tuning);
        self.accumulator = 0.0;
        self.last_time_ms = None;
        let token = self.scheduler.start();
        log::info!("run started (seed {})", self.state.seed);
        self.sink.notify(GameEvent::Started);
        token
    }

    /// Tear down the clock. The run keeps its state, but no frame ticks
    /// again until the next start. Safe to call more than once.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Apply one steering intent immediately. Ignored unless a run is active.
    pub fn steer(&mut self, dir: Direction) {
        if self.state.status != GameStatus::Active {
            return;
        }
        self.state
            .basket
            .shift(dir, self.tuning.basket_step_pct, self.playfield);
    }

    /// Advance the clock to `now_ms`, running as many fixed ticks as the
    /// elapsed time covers (capped per frame). Returns false once the
    /// session no longer wants frames: the token is stale, the scheduler is
    /// stopped, or this very frame ended the run.
    pub fn on_frame(&mut self, token: TickToken, now_ms: f64) -> bool {
        if !self.scheduler.accepts(token) {
            return false;
        }

        let dt_ms = match self.last_time_ms {
            // Host clocks are supposed to be monotonic; a warp in either
            // direction gets clamped instead of trusted
            Some(last) => ((now_ms - last) as f32).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => TICK_MS,
        };
        self.last_time_ms = Some(now_ms);
        self.accumulator += dt_ms;

        let mut ticks = 0u32;
        while self.accumulator >= TICK_MS && ticks < MAX_TICKS_PER_FRAME {
            let events = sim::tick(
                &mut self.state,
                self.playfield,
                &self.tuning,
                &mut self.rng,
                TICK_MS,
            );
            self.accumulator -= TICK_MS;
            ticks += 1;

            let ended = events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }));
            for event in events {
                self.sink.notify(event);
            }
            if ended {
                // Kill the clock before any later frame can fire
                self.scheduler.stop();
                log::info!(
                    "run over: score {} level {} after {} ticks",
                    self.state.score,
                    self.state.level,
                    self.state.time_ticks
                );
                return false;
            }
        }
        true
    }

    /// Read-only view of the current frame for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.state.status,
            score: self.state.score,
            lives: self.state.lives,
            level: self.state.level,
            basket_x: self.state.basket.x,
            balls: self
                .state
                .balls
                .iter()
                .map(|b| BallView {
                    id: b.id,
                    x: b.pos.x,
                    y: b.pos.y,
                    color: b.color,
                })
                .collect(),
        }
    }
}
