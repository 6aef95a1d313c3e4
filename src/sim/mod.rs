//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG and clock readings only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, bird_hits_pipe, bird_reaches_gap, pipe_overlaps_bird};
pub use spawn::{generate_pipe, initial_pipes, refill_pipes};
pub use state::{
    ActivePowerUp, Bird, CrashCause, GameEvent, GamePhase, GameState, Pipe, PowerUpKind, Viewport,
};
pub use tick::{TickInput, apply_jump, crossed_scoring_line, tick};
