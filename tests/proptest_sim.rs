//! Property tests for the simulation tick.
//!
//! These tests use `proptest` to generate random jump schedules, seeds and
//! starting positions, and verify that the tick's invariants hold after
//! every step.

use flappy_chicken::sim::{
    ActivePowerUp, GamePhase, GameState, Pipe, PowerUpKind, TickInput, Viewport, apply_jump, tick,
};
use flappy_chicken::Tuning;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

const EPSILON: f32 = 1e-3;

fn running(seed: u64) -> (GameState, Pcg32) {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new(Viewport::new(800.0, 600.0), Tuning::default());
    let mut events = Vec::new();
    apply_jump(&mut state, &mut rng, &mut events);
    (state, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tick_invariants_hold(
        seed in any::<u64>(),
        jumps in prop::collection::vec(any::<bool>(), 1..400),
    ) {
        let (mut state, mut rng) = running(seed);
        let mut overs = 0;

        for (i, jump) in jumps.into_iter().enumerate() {
            if state.phase != GamePhase::Running {
                break;
            }
            if jump {
                let mut events = Vec::new();
                apply_jump(&mut state, &mut rng, &mut events);
            }

            let velocity_before = state.bird.velocity;
            let score_before = state.score;
            let input = TickInput { jump: false, now_ms: i as u64 * 20 };
            tick(&mut state, &input, &mut rng);

            prop_assert!((state.bird.velocity - (velocity_before + state.tuning.gravity)).abs() < EPSILON);
            prop_assert!(state.score >= score_before);
            prop_assert!(state.score - score_before <= 1);
            prop_assert!(state.pipes.len() >= 3);
            prop_assert!(state.pipes.windows(2).all(|w| w[0].x < w[1].x));
            prop_assert!(state.bird.rotation <= 90.0);
            if state.phase == GamePhase::Over {
                overs += 1;
            }
        }
        prop_assert!(overs <= 1);
    }

    #[test]
    fn power_up_blocks_pipe_crashes(
        bird_y in 0.0f32..560.0,
        gap_y in 50.0f32..350.0,
        pipe_x in 305.0f32..420.0,
    ) {
        let (mut state, mut rng) = running(1);
        state.bird.y = bird_y;
        state.bird.velocity = 0.0;
        state.pipes = vec![Pipe::new(pipe_x, gap_y, false)];
        state.power_up = Some(ActivePowerUp {
            kind: PowerUpKind::Invincibility,
            started_at_ms: 0,
            duration_ms: 5_000,
        });

        tick(&mut state, &TickInput { jump: false, now_ms: 10 }, &mut rng);
        prop_assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn boundary_exit_always_ends_run(
        below in prop::bool::ANY,
        overshoot in 0.5f32..100.0,
        powered in prop::bool::ANY,
    ) {
        let (mut state, mut rng) = running(2);
        state.bird.velocity = 0.0;
        state.bird.y = if below { 570.0 + overshoot } else { -overshoot };
        if powered {
            state.power_up = Some(ActivePowerUp {
                kind: PowerUpKind::Invincibility,
                started_at_ms: 0,
                duration_ms: 5_000,
            });
        }

        tick(&mut state, &TickInput { jump: false, now_ms: 0 }, &mut rng);
        prop_assert_eq!(state.phase, GamePhase::Over);
    }
}
