//! Tests for the tile codec and image file I/O

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use ndarray::arr2;
    use tempfile::TempDir;
    use tilecollapse::AlgorithmError;
    use tilecollapse::io::image::{decode_tiles, encode_tiles, load_rgba, save_rgba};

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const CLEAR: [u8; 4] = [255, 0, 0, 0];

    // 3x2 tiles of 2x2 pixels: red, green, red / green, clear, red
    fn sample() -> RgbaImage {
        let layout = [[RED, GREEN, RED], [GREEN, CLEAR, RED]];
        RgbaImage::from_fn(6, 4, |x, y| {
            let row = layout.get((y / 2) as usize).copied().unwrap_or([RED; 3]);
            Rgba(row.get((x / 2) as usize).copied().unwrap_or(RED))
        })
    }

    // Tests ids follow first appearance and equal blocks share an id
    // Verified by hashing only the colour channels
    #[test]
    fn test_encode_ids() {
        let sheet = encode_tiles(&sample(), 2, 2).unwrap();
        assert_eq!(sheet.grid, arr2(&[[0, 1, 0], [1, 2, 0]]));
        assert_eq!(sheet.blocks.len(), 3);
        assert_eq!(sheet.blocks[2], vec![CLEAR; 4]);
        assert_eq!((sheet.tile_width, sheet.tile_height), (2, 2));
    }

    // Tests decoding the encoded grid reproduces the image
    // Verified by transposing block offsets when painting
    #[test]
    fn test_decode_reproduces_image() {
        let image = sample();
        let sheet = encode_tiles(&image, 2, 2).unwrap();
        assert_eq!(sheet.decode(&sheet.grid).unwrap(), image);

        let grid = arr2(&[[2, 2], [0, 1], [1, 0]]);
        let painted = sheet.decode(&grid).unwrap();
        assert_eq!(painted.dimensions(), (4, 6));
        assert_eq!(painted.get_pixel(3, 5).0, RED);
        assert_eq!(painted.get_pixel(0, 0).0, CLEAR);
    }

    // Tests pixels outside whole tiles are ignored
    // Verified by rounding tile counts up
    #[test]
    fn test_partial_tiles_ignored() {
        let sheet = encode_tiles(&sample(), 4, 3).unwrap();
        assert_eq!(sheet.grid.dim(), (1, 1));

        assert!(matches!(
            encode_tiles(&sample(), 8, 2),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
        assert!(matches!(
            encode_tiles(&sample(), 0, 2),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
    }

    // Tests decoding rejects unknown ids and malformed blocks
    // Verified by skipping blocks that are missing
    #[test]
    fn test_decode_errors() {
        let blocks = vec![vec![RED; 4]];
        assert!(matches!(
            decode_tiles(&arr2(&[[0, 1]]), &blocks, 2, 2),
            Err(AlgorithmError::InvalidTileIndex {
                index: 1,
                max_tiles: 1
            })
        ));
        assert!(matches!(
            decode_tiles(&arr2(&[[0]]), &blocks, 3, 2),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
    }

    // Tests images survive a save and load through nested directories
    // Verified by skipping parent directory creation
    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deep").join("tiles.png");
        save_rgba(&sample(), &path).unwrap();
        assert_eq!(load_rgba(&path).unwrap(), sample());

        assert!(matches!(
            load_rgba(&temp_dir.path().join("missing.png")),
            Err(AlgorithmError::ImageLoad { .. })
        ));
    }
}
