//! Input sources
//!
//! A session is fed [`Command`]s by whatever drives it: a platform event
//! layer, a recorded script, or the built-in autopilot.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::sim::GamePhase;
use crate::snapshot::Snapshot;

/// Player and environment inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Start the run, or flap while running
    Jump,
    /// Back to the start screen after a game over
    Restart,
    /// Cosmetic theme by name
    SetTheme(String),
    /// Play area resized
    Resize { width: f32, height: f32 },
}

/// Anything that produces commands once per driver frame
pub trait InputSource {
    fn poll(&mut self, snapshot: &Snapshot) -> Vec<Command>;
}

/// Commands keyed by the frame (poll count) they fire on
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frame: u64,
    script: VecDeque<(u64, Command)>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = (u64, Command)>) -> Self {
        let mut script: Vec<_> = script.into_iter().collect();
        script.sort_by_key(|(frame, _)| *frame);
        Self {
            frame: 0,
            script: script.into(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _snapshot: &Snapshot) -> Vec<Command> {
        let mut due = Vec::new();
        while let Some((frame, _)) = self.script.front() {
            if *frame > self.frame {
                break;
            }
            if let Some((_, command)) = self.script.pop_front() {
                due.push(command);
            }
        }
        self.frame += 1;
        due
    }
}

/// Idle/demo mode: flaps whenever the bird sinks below a line inside the
/// next gap
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Target line as a fraction of the gap height, measured from its top
    pub aim: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { aim: 0.7 }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &Snapshot) -> Vec<Command> {
        match snapshot.phase {
            GamePhase::NotStarted => vec![Command::Jump],
            GamePhase::Over => Vec::new(),
            GamePhase::Running => {
                let bird = &snapshot.bird;
                let target = match snapshot.next_gap() {
                    Some(pipe) => pipe.gap_y + pipe.gap_height * self.aim,
                    None => snapshot.viewport.height / 2.0,
                };
                if bird.y + bird.height > target {
                    vec![Command::Jump]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Viewport};
    use crate::theme::Theme;
    use crate::tuning::Tuning;

    fn snapshot() -> Snapshot {
        let state = GameState::new(Viewport::default(), Tuning::default());
        Snapshot::capture(&state, Theme::default(), 0)
    }

    #[test]
    fn test_scripted_fires_in_order() {
        let mut input = ScriptedInput::new([
            (2, Command::Restart),
            (0, Command::Jump),
            (2, Command::SetTheme("Space".into())),
        ]);
        let snap = snapshot();
        assert_eq!(input.poll(&snap), vec![Command::Jump]);
        assert!(input.poll(&snap).is_empty());
        assert_eq!(
            input.poll(&snap),
            vec![Command::Restart, Command::SetTheme("Space".into())]
        );
        assert!(input.is_exhausted());
    }

    #[test]
    fn test_autopilot_starts_game() {
        let mut pilot = Autopilot::default();
        assert_eq!(pilot.poll(&snapshot()), vec![Command::Jump]);
    }

    #[test]
    fn test_autopilot_flaps_below_target() {
        let mut state = GameState::new(Viewport::new(800.0, 600.0), Tuning::default());
        state.phase = crate::sim::GamePhase::Running;
        state.pipes = vec![crate::sim::Pipe::new(500.0, 100.0, false)];
        let mut pilot = Autopilot::default();

        // Target line at 100 + 200 * 0.7 = 240
        state.bird.y = 250.0;
        let snap = Snapshot::capture(&state, Theme::default(), 0);
        assert_eq!(pilot.poll(&snap), vec![Command::Jump]);

        state.bird.y = 150.0;
        let snap = Snapshot::capture(&state, Theme::default(), 0);
        assert!(pilot.poll(&snap).is_empty());

        state.phase = crate::sim::GamePhase::Over;
        let snap = Snapshot::capture(&state, Theme::default(), 0);
        assert!(pilot.poll(&snap).is_empty());
    }
}
