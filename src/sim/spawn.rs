//! Pipe generation
//!
//! The random source is always passed in so runs are reproducible from a seed.

use rand::Rng;

use super::state::{Pipe, Viewport};
use crate::consts::TARGET_PIPE_COUNT;
use crate::tuning::Tuning;

/// Generate a pipe at `x` with a random gap and an occasional power-up
pub fn generate_pipe<R: Rng>(
    rng: &mut R,
    x: f32,
    viewport: &Viewport,
    tuning: &Tuning,
) -> Pipe {
    let min = tuning.min_pipe_height;
    let max = tuning.max_gap_y(viewport.height);
    // Viewport too short for the full range: pin the gap to the top margin
    let gap_y = if max > min {
        rng.random_range(min..=max)
    } else {
        min
    };
    let has_power_up = rng.random_bool(tuning.power_up_chance);

    Pipe::new(x, gap_y, has_power_up)
}

/// The opening set of pipes, starting at the viewport's right edge
pub fn initial_pipes<R: Rng>(rng: &mut R, viewport: &Viewport, tuning: &Tuning) -> Vec<Pipe> {
    (0..TARGET_PIPE_COUNT)
        .map(|i| generate_pipe(rng, viewport.width + i as f32 * tuning.pipe_spacing, viewport, tuning))
        .collect()
}

/// Top the sequence back up to the target count, each new pipe one spacing
/// beyond the last. An empty sequence restarts at the viewport's right edge.
pub fn refill_pipes<R: Rng>(
    rng: &mut R,
    pipes: &mut Vec<Pipe>,
    viewport: &Viewport,
    tuning: &Tuning,
) -> usize {
    let mut added = 0;
    while pipes.len() < TARGET_PIPE_COUNT {
        let x = pipes
            .last()
            .map(|p| p.x + tuning.pipe_spacing)
            .unwrap_or(viewport.width);
        pipes.push(generate_pipe(rng, x, viewport, tuning));
        added += 1;
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_gap_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let viewport = Viewport::new(800.0, 600.0);
        let tuning = Tuning::default();
        for _ in 0..1_000 {
            let pipe = generate_pipe(&mut rng, 0.0, &viewport, &tuning);
            assert!(pipe.gap_y >= 50.0 && pipe.gap_y <= 350.0, "gap_y {}", pipe.gap_y);
        }
    }

    #[test]
    fn test_power_up_frequency() {
        let mut rng = Pcg32::seed_from_u64(42);
        let viewport = Viewport::default();
        let tuning = Tuning::default();
        let count = (0..10_000)
            .filter(|_| generate_pipe(&mut rng, 0.0, &viewport, &tuning).has_power_up)
            .count();
        // 10% chance; generous bounds keep this stable across seeds
        assert!((700..1_300).contains(&count), "power-ups: {count}");
    }

    #[test]
    fn test_power_up_chance_extremes() {
        let mut rng = Pcg32::seed_from_u64(1);
        let viewport = Viewport::default();
        let never = Tuning {
            power_up_chance: 0.0,
            ..Tuning::default()
        };
        let always = Tuning {
            power_up_chance: 1.0,
            ..Tuning::default()
        };
        assert!(!generate_pipe(&mut rng, 0.0, &viewport, &never).has_power_up);
        assert!(generate_pipe(&mut rng, 0.0, &viewport, &always).has_power_up);
    }

    #[test]
    fn test_tiny_viewport_pins_gap() {
        let mut rng = Pcg32::seed_from_u64(3);
        let viewport = Viewport::new(800.0, 250.0);
        let pipe = generate_pipe(&mut rng, 0.0, &viewport, &Tuning::default());
        assert_eq!(pipe.gap_y, 50.0);
    }

    #[test]
    fn test_initial_pipes_spacing() {
        let mut rng = Pcg32::seed_from_u64(9);
        let viewport = Viewport::new(800.0, 600.0);
        let pipes = initial_pipes(&mut rng, &viewport, &Tuning::default());
        let xs: Vec<f32> = pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![800.0, 1100.0, 1400.0]);
    }

    #[test]
    fn test_refill_from_empty_anchors_on_viewport() {
        let mut rng = Pcg32::seed_from_u64(9);
        let viewport = Viewport::new(640.0, 480.0);
        let mut pipes = Vec::new();
        let added = refill_pipes(&mut rng, &mut pipes, &viewport, &Tuning::default());
        assert_eq!(added, 3);
        assert_eq!(pipes[0].x, 640.0);
        assert_eq!(pipes[2].x, 1240.0);
    }

    #[test]
    fn test_refill_appends_after_last() {
        let mut rng = Pcg32::seed_from_u64(9);
        let viewport = Viewport::default();
        let tuning = Tuning::default();
        let mut pipes = vec![
            generate_pipe(&mut rng, 100.0, &viewport, &tuning),
            generate_pipe(&mut rng, 400.0, &viewport, &tuning),
        ];
        assert_eq!(refill_pipes(&mut rng, &mut pipes, &viewport, &tuning), 1);
        assert_eq!(pipes[2].x, 700.0);
        assert_eq!(refill_pipes(&mut rng, &mut pipes, &viewport, &tuning), 0);
    }
}
