//! Oscillator
//!
//! Moves the active box back and forth along the oscillation axis,
//! reversing whenever a bound is crossed. Pure state transition, called
//! once per tick while the game is playing.

use crate::game::config::GameConfig;
use crate::game::state::{Block, Direction};

/// Advance the active box by one step and return the direction for the
/// next tick.
///
/// The reversal check runs on the post-move position, so the box never
/// ends a tick more than one step beyond a bound.
pub fn advance(block: &mut Block, direction: Direction, config: &GameConfig) -> Direction {
    block.z += config.step * direction.signum();

    if block.z > config.bound {
        Direction::Negative
    } else if block.z < -config.bound {
        Direction::Positive
    } else {
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn block_at(z: f32) -> Block {
        Block {
            level: 1,
            z,
            extent: 5.0,
        }
    }

    #[test]
    fn moves_by_one_step() {
        let config = GameConfig::default();
        let mut block = block_at(0.0);

        let dir = advance(&mut block, Direction::Positive, &config);
        assert_eq!(block.z, 0.1);
        assert_eq!(dir, Direction::Positive);

        let dir = advance(&mut block, Direction::Negative, &config);
        assert_eq!(block.z, 0.0);
        assert_eq!(dir, Direction::Negative);
    }

    #[test]
    fn flips_exactly_when_bound_crossed() {
        let config = GameConfig::default();

        // One step short of the bound: lands exactly on it, no flip yet.
        let mut block = block_at(config.bound - config.step);
        let dir = advance(&mut block, Direction::Positive, &config);
        assert_eq!(dir, Direction::Positive);

        // Next step crosses it and reverses.
        let dir = advance(&mut block, dir, &config);
        assert!(block.z > config.bound);
        assert_eq!(dir, Direction::Negative);
    }

    #[test]
    fn flips_at_negative_bound() {
        let config = GameConfig::default();
        let mut block = block_at(-config.bound - 0.05);
        let dir = advance(&mut block, Direction::Negative, &config);
        assert_eq!(dir, Direction::Positive);
    }

    proptest! {
        // Position never exceeds the bound by more than one step, no
        // matter how long the sweep runs.
        #[test]
        fn sweep_stays_within_one_step_of_bounds(
            start in -7.0f32..7.0,
            ticks in 1usize..2000,
        ) {
            let config = GameConfig::default();
            let mut block = block_at(start);
            let mut direction = Direction::Positive;

            for _ in 0..ticks {
                direction = advance(&mut block, direction, &config);
                prop_assert!(block.z.abs() <= config.bound + config.step + 1e-4);
            }
        }

        // The sweep keeps covering the full range: within one full period
        // it touches both halves of the arena.
        #[test]
        fn sweep_visits_both_sides(start in -6.9f32..6.9) {
            let config = GameConfig::default();
            let mut block = block_at(start);
            let mut direction = Direction::Positive;
            let period = (4.0 * config.bound / config.step) as usize + 4;

            let mut seen_positive = false;
            let mut seen_negative = false;
            for _ in 0..period {
                direction = advance(&mut block, direction, &config);
                seen_positive |= block.z > config.bound / 2.0;
                seen_negative |= block.z < -config.bound / 2.0;
            }
            prop_assert!(seen_positive && seen_negative);
        }
    }
}
