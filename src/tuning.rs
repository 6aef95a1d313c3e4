//! Data-driven game balance
//!
//! Every physics constant the simulation reads lives here so a tuning file
//! can rebalance the game without a rebuild. Missing fields fall back to
//! the compile-time defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed tick interval in milliseconds
    pub tick_interval_ms: u64,
    /// Velocity added every tick
    pub gravity: f32,
    /// Velocity set by a jump
    pub jump_strength: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub pipe_width: f32,
    /// Vertical size of the opening in each pipe
    pub pipe_gap: f32,
    /// Horizontal distance a pipe travels per tick
    pub pipe_speed: f32,
    /// Distance between consecutive pipes
    pub pipe_spacing: f32,
    pub min_pipe_height: f32,
    /// Probability that a new pipe carries a power-up (0-1)
    pub power_up_chance: f64,
    pub power_up_duration_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_spacing: PIPE_SPACING,
            min_pipe_height: MIN_PIPE_HEIGHT,
            power_up_chance: POWER_UP_CHANCE,
            power_up_duration_ms: POWER_UP_DURATION_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        if self.tick_interval_ms == 0 {
            return Err(TuningError::Invalid {
                field: "tick_interval_ms",
                reason: "must be non-zero",
            });
        }
        if !self.gravity.is_finite() || !self.jump_strength.is_finite() {
            return Err(TuningError::Invalid {
                field: "gravity",
                reason: "gravity and jump_strength must be finite",
            });
        }
        positive("bird_width", self.bird_width)?;
        positive("bird_height", self.bird_height)?;
        positive("pipe_width", self.pipe_width)?;
        positive("pipe_gap", self.pipe_gap)?;
        positive("pipe_speed", self.pipe_speed)?;
        positive("pipe_spacing", self.pipe_spacing)?;
        if !self.min_pipe_height.is_finite() || self.min_pipe_height < 0.0 {
            return Err(TuningError::Invalid {
                field: "min_pipe_height",
                reason: "must be zero or positive",
            });
        }
        if self.pipe_gap < self.bird_height {
            return Err(TuningError::Invalid {
                field: "pipe_gap",
                reason: "must be at least the bird height",
            });
        }
        if !(0.0..=1.0).contains(&self.power_up_chance) {
            return Err(TuningError::Invalid {
                field: "power_up_chance",
                reason: "must be within 0..=1",
            });
        }
        Ok(())
    }

    /// Highest gap top a pipe may get in a viewport of the given height
    pub fn max_gap_y(&self, viewport_height: f32) -> f32 {
        viewport_height - self.pipe_gap - self.min_pipe_height
    }
}
