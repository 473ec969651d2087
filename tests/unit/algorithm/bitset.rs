//! Tests for `TileBitset` operations used as cell superpositions

#[cfg(test)]
mod tests {
    use tilecollapse::algorithm::bitset::TileBitset;

    // Verifies new TileBitset is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_bitset() {
        let bitset = TileBitset::new(10);
        assert_eq!(bitset.count(), 0);
        assert!(bitset.is_empty());
        assert_eq!(bitset.capacity(), 10);
    }

    // Tests insertion, removal and containment checking
    // Verified by removing the bit-clearing logic from remove
    #[test]
    fn test_insert_remove_contains() {
        let mut bitset = TileBitset::new(10);
        bitset.insert(5);
        assert!(bitset.contains(5));
        assert!(!bitset.contains(3));

        assert!(bitset.remove(5));
        assert!(!bitset.remove(5));
        assert!(bitset.is_empty());
    }

    // Tests out-of-range indices are ignored rather than panicking
    // Verified by dropping the bounds check in insert
    #[test]
    fn test_out_of_range_ignored() {
        let mut bitset = TileBitset::new(3);
        bitset.insert(3);
        bitset.insert(100);
        assert!(bitset.is_empty());
        assert!(!bitset.contains(100));
        assert!(!bitset.remove(100));
    }

    // Tests intersection keeps only shared tiles
    // Verified by changing intersection operation to union operation
    #[test]
    fn test_intersection() {
        let mut set1 = TileBitset::new(10);
        set1.insert(1);
        set1.insert(3);
        set1.insert(5);

        let mut set2 = TileBitset::new(10);
        set2.insert(3);
        set2.insert(5);
        set2.insert(7);

        assert_eq!(set1.intersection(&set2).to_vec(), vec![3, 5]);
        assert!(set1.intersection(&set2).is_subset(&set1));
        assert!(!set1.is_subset(&set2));
    }

    // Tests union accumulates tiles from both sets
    // Verified by replacing the or-assignment with and-assignment
    #[test]
    fn test_union() {
        let mut set1 = TileBitset::single(6, 0);
        let set2 = TileBitset::single(6, 4);
        set1.union_with(&set2);
        assert_eq!(set1.to_vec(), vec![0, 4]);
    }

    // Tests sole reports a tile only for singleton sets
    // Verified by returning the first tile regardless of count
    #[test]
    fn test_sole() {
        assert_eq!(TileBitset::single(4, 2).sole(), Some(2));
        assert_eq!(TileBitset::all(4).sole(), None);
        assert_eq!(TileBitset::new(4).sole(), None);
    }

    // Tests creation of bitset with all bits set
    // Verified by initializing all bits to 0 instead of 1
    #[test]
    fn test_all_bits_set() {
        let bitset = TileBitset::all(5);
        for i in 0..5 {
            assert!(bitset.contains(i));
        }
        assert_eq!(bitset.count(), 5);
        assert_eq!(bitset.to_string(), "TileBitset(5 tiles: [0, 1, 2, 3, 4])");
    }
}
