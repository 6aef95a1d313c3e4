//! Read-only view of a session for the presentation layer

use serde::Serialize;

use crate::sim::{GamePhase, GameState, Viewport};
use crate::theme::Theme;
use crate::titles::rank_title;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirdView {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees
    pub rotation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    pub gap_y: f32,
    pub gap_height: f32,
    pub has_power_up: bool,
}

/// Colours and glyph for the selected theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteView {
    pub name: &'static str,
    pub bird: &'static str,
    pub background: &'static str,
    pub pipe_color: &'static str,
}

impl From<Theme> for PaletteView {
    fn from(theme: Theme) -> Self {
        Self {
            name: theme.as_str(),
            bird: theme.bird(),
            background: theme.background(),
            pipe_color: theme.pipe_color(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub title: &'static str,
    pub bird: BirdView,
    pub pipes: Vec<PipeView>,
    pub powered_up: bool,
    pub power_up_remaining_ms: u64,
    pub theme: Theme,
    pub palette: PaletteView,
    pub viewport: Viewport,
    pub tick: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState, theme: Theme, now_ms: u64) -> Self {
        let tuning = &state.tuning;
        let bounds = state.bird_bounds();
        let powered_up = state.is_powered_up(now_ms);

        Self {
            phase: state.phase,
            score: state.score,
            title: rank_title(state.score),
            bird: BirdView {
                x: bounds.min.x,
                y: state.bird.y,
                width: tuning.bird_width,
                height: tuning.bird_height,
                rotation: state.bird.rotation,
            },
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    width: tuning.pipe_width,
                    gap_y: p.gap_y,
                    gap_height: tuning.pipe_gap,
                    has_power_up: p.has_power_up,
                })
                .collect(),
            powered_up,
            power_up_remaining_ms: state
                .power_up
                .filter(|_| powered_up)
                .map(|p| p.remaining_ms(now_ms))
                .unwrap_or(0),
            theme,
            palette: theme.into(),
            viewport: state.viewport,
            tick: state.time_ticks,
        }
    }

    /// Next pipe the bird has to fly through, if any
    pub fn next_gap(&self) -> Option<&PipeView> {
        self.pipes.iter().find(|p| p.x + p.width > self.bird.x)
    }
}
