//! Tests for the tile model bundle

#[cfg(test)]
mod tests {
    use ndarray::{Array2, arr2};
    use tilecollapse::analysis::TileModel;

    // Tests the model exposes the catalog weights and derived rules together
    // Verified by building rules from an empty catalog
    #[test]
    fn test_from_example() {
        let example = arr2(&[[1, 1, 2], [1, 2, 2]]);
        let model = TileModel::from_example(&example).unwrap();

        assert_eq!(model.tile_count(), 2);
        assert_eq!(model.weights(), &[3, 3]);
        assert_eq!(model.catalog().values(), &[1, 2]);
        assert!(!model.rules().is_empty());
    }

    // Tests a zero-column example fails fast
    // Verified by removing the catalog validation
    #[test]
    fn test_rejects_empty_example() {
        let example: Array2<i32> = Array2::zeros((3, 0));
        assert!(TileModel::from_example(&example).is_err());
    }
}
