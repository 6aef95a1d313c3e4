//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Hazards are
//! always checked against post-movement positions.

use rand::Rng;

use super::collision::{bird_hits_pipe, bird_reaches_gap};
use super::spawn::{initial_pipes, refill_pipes};
use super::state::{
    ActivePowerUp, CrashCause, GameEvent, GamePhase, GameState, Pipe, PowerUpKind,
};
use crate::tuning::Tuning;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump before integrating (click/tap/space)
    pub jump: bool,
    /// Injected clock reading used for timed effects
    pub now_ms: u64,
}

/// Start the run on the first jump, then flap. Ignored once the run is over.
pub fn apply_jump<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) -> bool {
    match state.phase {
        GamePhase::Over => return false,
        GamePhase::NotStarted => {
            state.pipes = initial_pipes(rng, &state.viewport, &state.tuning);
            state.phase = GamePhase::Running;
            events.push(GameEvent::Started);
            log::info!("Run started");
        }
        GamePhase::Running => {}
    }

    state.bird.flap(state.tuning.jump_strength);
    events.push(GameEvent::Flapped);
    true
}

/// Whether a not-yet-scored pipe's trailing edge has reached the scoring
/// line. With a fixed line this first holds on the tick whose move crossed
/// it, i.e. inside a one-tick window `(line - speed, line]`. The `scored`
/// flag keeps a resize that moves the line from counting a pipe twice.
pub fn crossed_scoring_line(pipe: &Pipe, line: f32, tuning: &Tuning) -> bool {
    !pipe.scored && pipe.trailing_edge(tuning) <= line
}

/// Advance the game state by one fixed timestep
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.jump {
        apply_jump(state, rng, &mut events);
    }

    // Timed effects run on the clock, not the tick count
    if let Some(power_up) = state.power_up {
        if !power_up.is_active(input.now_ms) {
            state.power_up = None;
            events.push(GameEvent::PowerUpExpired {
                kind: power_up.kind,
            });
            log::debug!("Power-up {:?} expired", power_up.kind);
        }
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;
    let tuning = state.tuning;
    let viewport = state.viewport;

    // Explicit Euler, fixed step
    state.bird.y += state.bird.velocity;
    state.bird.velocity += tuning.gravity;
    state.bird.tilt();

    for pipe in &mut state.pipes {
        pipe.x -= tuning.pipe_speed;
    }
    state.pipes.retain(|p| p.x > -tuning.pipe_width);
    refill_pipes(rng, &mut state.pipes, &viewport, &tuning);

    // Leaving the play area ends the run regardless of power-ups
    let floor = viewport.height - tuning.bird_height;
    if state.bird.y < 0.0 || state.bird.y > floor {
        crash(state, CrashCause::Boundary, &mut events);
        return events;
    }

    let line = viewport.scoring_line();
    for pipe in state.pipes.iter_mut() {
        if crossed_scoring_line(pipe, line, &tuning) {
            pipe.scored = true;
            state.score += 1;
            events.push(GameEvent::Scored { score: state.score });
            log::debug!("Score: {}", state.score);
        }
    }

    // Decided against the power-up held before this tick's pickup
    let bird = state.bird_bounds();
    let hit = !state.is_powered_up(input.now_ms)
        && state.pipes.iter().any(|p| bird_hits_pipe(p, &bird, &tuning));

    // Pickup runs even on a crashing tick; it consumes the pipe's power-up
    // and restarts the timer
    let mut collected = false;
    for pipe in state.pipes.iter_mut().filter(|p| p.has_power_up) {
        if bird_reaches_gap(pipe, &bird, &tuning) {
            pipe.has_power_up = false;
            collected = true;
        }
    }
    if collected {
        let kind = PowerUpKind::Invincibility;
        state.power_up = Some(ActivePowerUp {
            kind,
            started_at_ms: input.now_ms,
            duration_ms: tuning.power_up_duration_ms,
        });
        events.push(GameEvent::PowerUpCollected { kind });
        log::debug!("Power-up {:?} collected at {}ms", kind, input.now_ms);
    }

    if hit {
        crash(state, CrashCause::Pipe, &mut events);
    }
    events
}

fn crash(state: &mut GameState, cause: CrashCause, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::Over;
    events.push(GameEvent::Crashed { cause });
    log::info!(
        "Game over ({:?}) after {} ticks, score {}",
        cause,
        state.time_ticks,
        state.score
    );
}
