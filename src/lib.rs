//! Flappy Chicken - a side-scrolling one-button arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Game session lifecycle driven by an injected clock and input
//! - `tuning`: Data-driven game balance
//! - `snapshot`: Read-only view handed to a presentation layer

pub mod clock;
pub mod input;
pub mod session;
pub mod sim;
pub mod snapshot;
pub mod theme;
pub mod titles;
pub mod tuning;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{Autopilot, Command, InputSource, ScriptedInput};
pub use session::GameSession;
pub use snapshot::{PaletteView, Snapshot};
pub use theme::Theme;
pub use titles::rank_title;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation interval (50 Hz)
    pub const TICK_INTERVAL_MS: u64 = 20;
    /// Maximum ticks per update call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward acceleration per tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Velocity set by a jump (negative is up)
    pub const JUMP_STRENGTH: f32 = -10.0;

    /// Bird box
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_SPEED: f32 = 3.0;
    pub const PIPE_SPACING: f32 = 300.0;
    /// Shortest pipe body above or below a gap
    pub const MIN_PIPE_HEIGHT: f32 = 50.0;
    /// Pipes kept ahead of the play area
    pub const TARGET_PIPE_COUNT: usize = 3;

    /// Chance a new pipe carries a power-up
    pub const POWER_UP_CHANCE: f64 = 0.1;
    /// Invincibility lifetime (wall clock)
    pub const POWER_UP_DURATION_MS: u64 = 5_000;

    /// Cosmetic rotation (degrees)
    pub const JUMP_TILT: f32 = -45.0;
    pub const ROTATION_STEP: f32 = 4.0;
    pub const MAX_TILT: f32 = 90.0;
}
