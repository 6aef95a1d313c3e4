//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here. Nothing survives a restart.

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    Over,
}

/// Play area size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "viewport must be positive");
        Self { width, height }
    }

    /// Horizontal position pipes are scored against (and the bird is centred on)
    pub fn scoring_line(&self) -> f32 {
        self.width / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// The player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top edge (screen coordinates, grows downward)
    pub y: f32,
    /// Pixels per tick (negative is up)
    pub velocity: f32,
    /// Cosmetic tilt in degrees
    pub rotation: f32,
}

impl Bird {
    pub fn new(y: f32) -> Self {
        Self {
            y,
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    /// Bounding box; the bird is horizontally centred on the scoring line
    pub fn bounds(&self, viewport: &Viewport, tuning: &Tuning) -> Aabb {
        let left = viewport.scoring_line() - tuning.bird_width / 2.0;
        Aabb::from_min_size(left, self.y, tuning.bird_width, tuning.bird_height)
    }

    /// Tilt toward the ground while falling
    pub fn tilt(&mut self) {
        self.rotation = (self.rotation + ROTATION_STEP).min(MAX_TILT);
    }

    /// Upward impulse
    pub fn flap(&mut self, jump_strength: f32) {
        self.velocity = jump_strength;
        self.rotation = JUMP_TILT;
    }
}

/// A pipe pair with an opening between the upper and lower body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Top of the gap (height of the upper body)
    pub gap_y: f32,
    /// Whether a power-up floats in the gap
    pub has_power_up: bool,
    /// Already counted toward the score
    #[serde(default)]
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_y: f32, has_power_up: bool) -> Self {
        Self {
            x,
            gap_y,
            has_power_up,
            scored: false,
        }
    }

    /// Right edge, the one that crosses the scoring line
    pub fn trailing_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_y + tuning.pipe_gap
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Pipe bodies are harmless
    Invincibility,
}

/// A collected power-up, timed against the injected clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub started_at_ms: u64,
    pub duration_ms: u64,
}

impl ActivePowerUp {
    pub fn expires_at_ms(&self) -> u64 {
        self.started_at_ms.saturating_add(self.duration_ms)
    }

    pub fn is_active(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at_ms()
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at_ms().saturating_sub(now_ms)
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Left the top or bottom of the play area
    Boundary,
    /// Hit a pipe body
    Pipe,
}

/// Things that happened during a tick (for audio/UI hooks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped,
    Scored { score: u32 },
    PowerUpCollected { kind: PowerUpKind },
    PowerUpExpired { kind: PowerUpKind },
    Crashed { cause: CrashCause },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub bird: Bird,
    /// Ordered by `x`, oldest first
    pub pipes: Vec<Pipe>,
    pub power_up: Option<ActivePowerUp>,
    pub score: u32,
    /// Ticks simulated since the run started
    pub time_ticks: u64,
    pub viewport: Viewport,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh, not-yet-started game
    pub fn new(viewport: Viewport, tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            bird: Bird::new(viewport.height / 2.0),
            pipes: Vec::new(),
            power_up: None,
            score: 0,
            time_ticks: 0,
            viewport,
            tuning,
        }
    }

    /// Whether pipe collisions are currently suppressed
    pub fn is_powered_up(&self, now_ms: u64) -> bool {
        self.power_up.is_some_and(|p| p.is_active(now_ms))
    }

    pub fn bird_bounds(&self) -> Aabb {
        self.bird.bounds(&self.viewport, &self.tuning)
    }

    /// Drop back to the start screen. Only valid once the run is over.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::Over {
            log::warn!("Ignoring restart while {:?}", self.phase);
            return false;
        }
        *self = Self::new(self.viewport, self.tuning);
        log::info!("Game reset");
        true
    }

    /// Apply a new play area size. Placed pipes keep their positions.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.phase == GamePhase::NotStarted {
            self.bird.y = viewport.height / 2.0;
        }
    }
}
