//! Flappy Chicken entry point
//!
//! Headless native driver: runs one autopilot session on a simulated clock
//! and logs snapshots. Usage: `flappy-chicken [seed] [tuning.json]`.

use std::rc::Rc;

use flappy_chicken::sim::{GameEvent, GamePhase, Viewport};
use flappy_chicken::{Autopilot, GameSession, ManualClock, Tuning, rank_title};

/// Demo length in ticks (one minute of play at 50 Hz)
const DEMO_TICKS: u64 = 3_000;
/// Log a snapshot this often
const SNAPSHOT_EVERY: u64 = 250;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Chicken (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x0F1A_BB1E);
    let tuning = match args.next() {
        Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default tuning");
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let clock = Rc::new(ManualClock::new(0));
    let mut session = GameSession::new(tuning, Viewport::new(800.0, 600.0), seed, Rc::clone(&clock));
    let mut pilot = Autopilot::default();
    let frame = session.tick_interval();

    for frame_index in 0..DEMO_TICKS {
        session.poll_input(&mut pilot);
        clock.advance(frame.as_millis() as u64);

        for event in session.update(frame) {
            match event {
                GameEvent::Scored { score } => log::info!("Passed pipe #{score}"),
                GameEvent::PowerUpCollected { kind } => log::info!("Picked up {kind:?}"),
                GameEvent::PowerUpExpired { kind } => log::info!("{kind:?} wore off"),
                _ => {}
            }
        }

        if frame_index % SNAPSHOT_EVERY == 0 {
            match serde_json::to_string(&session.snapshot()) {
                Ok(json) => log::debug!("{json}"),
                Err(e) => log::warn!("Snapshot serialization failed: {e}"),
            }
        }

        if session.state().phase == GamePhase::Over {
            break;
        }
    }

    let score = session.state().score;
    session.stop();
    println!(
        "Seed {}: score {score} after {} ticks - {}",
        session.seed(),
        session.state().time_ticks,
        rank_title(score)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The headless driver is native only
}
