//! Collision detection for axis-aligned boxes
//!
//! Everything in the play area is a rectangle: the bird, and each pipe's
//! upper and lower body. A pipe is harmless while the bird's vertical span
//! sits entirely inside its gap.

use glam::Vec2;

use super::state::Pipe;
use crate::tuning::Tuning;

/// Axis-aligned bounding box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_min_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        let min = Vec2::new(x, y);
        Self {
            min,
            max: min + Vec2::new(width, height),
        }
    }

    /// Strict horizontal overlap; touching edges do not count
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        left < self.max.x && right > self.min.x
    }

    /// Whether the vertical span fits inside `[top, bottom]`
    pub fn within_y(&self, top: f32, bottom: f32) -> bool {
        self.min.y >= top && self.max.y <= bottom
    }
}

/// Whether the pipe spans any column the bird occupies
pub fn pipe_overlaps_bird(pipe: &Pipe, bird: &Aabb, tuning: &Tuning) -> bool {
    bird.overlaps_x(pipe.x, pipe.trailing_edge(tuning))
}

/// Whether the bird touches the pipe's upper or lower body
pub fn bird_hits_pipe(pipe: &Pipe, bird: &Aabb, tuning: &Tuning) -> bool {
    pipe_overlaps_bird(pipe, bird, tuning) && !bird.within_y(pipe.gap_y, pipe.gap_bottom(tuning))
}

/// Whether the bird's reference point (its top edge) is inside the pipe's
/// gap while the bird is alongside it. Used for power-up pickup.
pub fn bird_reaches_gap(pipe: &Pipe, bird: &Aabb, tuning: &Tuning) -> bool {
    pipe_overlaps_bird(pipe, bird, tuning)
        && bird.min.y > pipe.gap_y
        && bird.min.y < pipe.gap_bottom(tuning)
}
