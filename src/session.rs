//! Game session
//!
//! Owns one game's state, its random source, the injected clock and the
//! selected theme. The fixed-step loop is armed when a run starts, disarmed
//! when it ends, and shut down for good by [`GameSession::stop`].

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::clock::Clock;
use crate::consts::MAX_SUBSTEPS;
use crate::input::{Command, InputSource};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, Viewport, apply_jump, tick};
use crate::snapshot::Snapshot;
use crate::theme::Theme;
use crate::tuning::Tuning;

/// Whether the fixed-step loop is producing ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for a run to start
    Idle,
    /// A run is in progress
    Ticking,
    /// Torn down; all further input is ignored
    Stopped,
}

#[derive(Debug)]
pub struct GameSession<C: Clock> {
    state: GameState,
    rng: Pcg32,
    seed: u64,
    clock: C,
    theme: Theme,
    loop_state: LoopState,
    /// Wall time not yet consumed by whole ticks
    accumulator: Duration,
    /// Events raised by inputs between ticks, drained by the next tick
    pending: Vec<GameEvent>,
}

impl<C: Clock> GameSession<C> {
    pub fn new(tuning: Tuning, viewport: Viewport, seed: u64, clock: C) -> Self {
        log::info!(
            "New session (seed {seed}, viewport {}x{})",
            viewport.width,
            viewport.height
        );
        Self {
            state: GameState::new(viewport, tuning),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            clock,
            theme: Theme::default(),
            loop_state: LoopState::Idle,
            accumulator: Duration::ZERO,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.state.tuning.tick_interval_ms)
    }

    /// Current read-only view
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.theme, self.clock.now_ms())
    }

    /// Start on the first call, flap afterwards. Takes effect immediately.
    pub fn jump(&mut self) -> bool {
        if self.loop_state == LoopState::Stopped {
            return false;
        }
        let applied = apply_jump(&mut self.state, &mut self.rng, &mut self.pending);
        if applied && self.loop_state == LoopState::Idle {
            self.loop_state = LoopState::Ticking;
            self.accumulator = Duration::ZERO;
        }
        applied
    }

    /// Reset to the start screen after a game over
    pub fn restart(&mut self) -> bool {
        if self.loop_state == LoopState::Stopped {
            return false;
        }
        let reset = self.state.restart();
        if reset {
            self.loop_state = LoopState::Idle;
            self.accumulator = Duration::ZERO;
            self.pending.clear();
        }
        reset
    }

    pub fn set_theme(&mut self, name: &str) -> bool {
        match Theme::from_name(name) {
            Some(theme) => {
                self.theme = theme;
                log::info!("Theme set to {}", theme.as_str());
                true
            }
            None => {
                log::warn!("Unknown theme {name:?}");
                false
            }
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(Viewport::new(width, height));
    }

    /// Apply one input command
    pub fn apply(&mut self, command: &Command) -> bool {
        match command {
            Command::Jump => self.jump(),
            Command::Restart => self.restart(),
            Command::SetTheme(name) => self.set_theme(name),
            Command::Resize { width, height } => {
                self.resize(*width, *height);
                true
            }
        }
    }

    /// Poll an input source once and apply what it produced
    pub fn poll_input<I: InputSource + ?Sized>(&mut self, input: &mut I) {
        let snapshot = self.snapshot();
        for command in input.poll(&snapshot) {
            self.apply(&command);
        }
    }

    /// Run exactly one tick if the loop is armed
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending);
        if self.loop_state != LoopState::Ticking {
            return events;
        }

        let input = TickInput {
            jump: false,
            now_ms: self.clock.now_ms(),
        };
        events.extend(tick(&mut self.state, &input, &mut self.rng));

        if self.state.phase == GamePhase::Over {
            self.loop_state = LoopState::Idle;
            self.accumulator = Duration::ZERO;
        }
        events
    }

    /// Feed elapsed wall time and run as many whole ticks as it covers,
    /// capped to avoid a spiral of death after a long stall
    pub fn update(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        if self.loop_state != LoopState::Ticking {
            return std::mem::take(&mut self.pending);
        }

        let interval = self.tick_interval();
        self.accumulator += elapsed;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= interval && substeps < MAX_SUBSTEPS {
            self.accumulator -= interval;
            substeps += 1;
            events.extend(self.step());
            if self.loop_state != LoopState::Ticking {
                break;
            }
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= interval {
            log::debug!("Dropping {:?} of backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        // Inputs applied mid-frame surface even when no tick ran
        events.extend(std::mem::take(&mut self.pending));
        events
    }

    /// Tear the session down; no more ticks or inputs
    pub fn stop(&mut self) {
        if self.loop_state != LoopState::Stopped {
            log::info!("Session stopped (score {})", self.state.score);
            self.loop_state = LoopState::Stopped;
            self.accumulator = Duration::ZERO;
            self.pending.clear();
        }
    }
}
