//! Native headless demo
//!
//! Plays a capped run with a simple autopilot over synthetic 60 Hz
//! timestamps, logging events along the way. Doubles as an end-to-end smoke
//! run of the public API without a browser.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use catchfall::Session;
    use catchfall::consts::TICK_MS;
    use catchfall::events::LogSink;
    use catchfall::sim::Playfield;

    env_logger::init();
    log::info!("Catchfall (native demo) starting...");

    let seed: u64 = rand::random();
    let mut session = Session::new(Playfield::new(1000.0, 500.0), seed);
    session.set_sink(Box::new(LogSink));

    // Two minutes of simulated play, or less if the autopilot runs dry
    let max_frames = 7200u32;
    let token = session.start();
    let mut frame = 0u32;
    while frame < max_frames && session.on_frame(token, f64::from(frame) * f64::from(TICK_MS)) {
        autopilot(&mut session);
        frame += 1;
    }
    session.stop();

    let end = session.snapshot();
    println!(
        "Finished after {} frames: score {} at level {} with {} lives left ({:?})",
        frame, end.score, end.level, end.lives, end.status
    );
}

/// Steer toward the lowest live ball, one intent per frame
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(session: &mut catchfall::Session) {
    use catchfall::sim::Direction;

    let state = session.state();
    let target = state
        .balls
        .iter()
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|b| b.pos.x);

    if let Some(x) = target {
        let step = session.tuning().basket_step_pct;
        let basket_x = session.state().basket.x;
        if x < basket_x - step / 2.0 {
            session.steer(Direction::Left);
        } else if x > basket_x + step / 2.0 {
            session.steer(Direction::Right);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point lives in the library's `web` module; this only
    // satisfies the compiler for the bin target
}
