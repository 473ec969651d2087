//! Seeded random choices made by the collapse loop

use crate::spatial::Position;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Weighted random selection over integer weights
    ///
    /// Draws uniformly from `1..=total` and returns the first index whose cumulative
    /// weight reaches the draw, so zero-weight entries are never chosen. Returns
    /// `None` when the weights sum to zero, which the caller treats as a contradiction.
    pub fn weighted_choice(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
        if total == 0 {
            return None;
        }

        let draw = self.rng.random_range(1..=total);
        let mut cumulative = 0_u64;
        for (index, &weight) in weights.iter().enumerate() {
            cumulative += u64::from(weight);
            if cumulative >= draw {
                return Some(index);
            }
        }
        None
    }

    /// Uniform choice among candidate cells
    pub fn choose_position(&mut self, candidates: &[Position]) -> Option<Position> {
        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..candidates.len());
        candidates.get(index).copied()
    }
}

/// Selection weights for a cell: the catalog weight of each possible tile, zero otherwise
pub fn cell_weights(possible: impl Iterator<Item = usize>, weights: &[u32]) -> Vec<u32> {
    let mut cell = vec![0; weights.len()];
    for tile in possible {
        if let (Some(slot), Some(&weight)) = (cell.get_mut(tile), weights.get(tile)) {
            *slot = weight;
        }
    }
    cell
}
