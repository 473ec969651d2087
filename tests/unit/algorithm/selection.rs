//! Tests for seeded weighted choice and tie-break selection

#[cfg(test)]
mod tests {
    use tilecollapse::algorithm::bitset::TileBitset;
    use tilecollapse::algorithm::selection::{RandomSelector, cell_weights};

    // Tests the same seed reproduces the same sequence of choices
    // Verified by seeding from entropy instead of the given seed
    #[test]
    fn test_deterministic_for_seed() {
        let weights = [3, 1, 4, 1, 5];
        let mut first = RandomSelector::new(7);
        let mut second = RandomSelector::new(7);
        let a: Vec<_> = (0..50).map(|_| first.weighted_choice(&weights)).collect();
        let b: Vec<_> = (0..50).map(|_| second.weighted_choice(&weights)).collect();
        assert_eq!(a, b);
    }

    // Tests zero-weight entries are never chosen and a zero total yields nothing
    // Verified by drawing from 0..total so a zero prefix can match
    #[test]
    fn test_zero_weights() {
        let mut selector = RandomSelector::new(1);
        for _ in 0..200 {
            assert_eq!(selector.weighted_choice(&[0, 5, 0]), Some(1));
        }
        assert_eq!(selector.weighted_choice(&[0, 0]), None);
        assert_eq!(selector.weighted_choice(&[]), None);
    }

    // Tests choices follow the weights over many draws
    // Verified by returning a uniform index
    #[test]
    fn test_weighted_frequencies() {
        let mut selector = RandomSelector::new(42);
        let draws = 20_000;
        let mut counts = [0_usize; 2];
        for _ in 0..draws {
            if let Some(slot) = selector
                .weighted_choice(&[1, 3])
                .and_then(|index| counts.get_mut(index))
            {
                *slot += 1;
            }
        }
        let share = counts[1] as f64 / draws as f64;
        assert!((share - 0.75).abs() < 0.02, "share of heavy tile was {share}");
    }

    // Tests uniform position choice stays within the candidates
    // Verified by indexing past the candidate list
    #[test]
    fn test_choose_position() {
        let mut selector = RandomSelector::new(3);
        assert_eq!(selector.choose_position(&[]), None);

        let candidates = [[0, 1], [2, 3], [4, 5]];
        let mut seen = [false; 3];
        for _ in 0..100 {
            let chosen = selector.choose_position(&candidates).unwrap();
            let index = candidates.iter().position(|&c| c == chosen).unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    // Tests cell weights keep only the still-possible tiles
    // Verified by copying the full catalog weights
    #[test]
    fn test_cell_weights() {
        let mut possible = TileBitset::new(4);
        possible.insert(1);
        possible.insert(3);
        assert_eq!(cell_weights(possible.iter(), &[5, 6, 7, 8]), vec![0, 6, 0, 8]);
        assert_eq!(cell_weights([9].into_iter(), &[1, 1]), vec![0, 0]);
    }
}
