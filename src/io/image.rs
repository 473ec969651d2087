//! Tile codec between RGBA images and grids of tile ids
//!
//! An image is cut into non-overlapping `tile_width` x `tile_height` blocks in
//! row-major order. Blocks with bit-identical pixels share an id; ids are handed out
//! in order of first appearance. Decoding paints each id's block back in place.

use crate::io::error::{AlgorithmError, Result, require_positive};
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;
use std::collections::HashMap;
use std::path::Path;

/// Pixels of one tile, row-major, one `[r, g, b, a]` entry per pixel
pub type PixelBlock = Vec<[u8; 4]>;

/// An image encoded as a grid of tile ids plus the pixel block behind each id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSheet {
    /// Tile id of every block, `(rows, cols)` in blocks
    pub grid: Array2<usize>,
    /// Pixel data indexed by tile id
    pub blocks: Vec<PixelBlock>,
    /// Width of one block in pixels
    pub tile_width: u32,
    /// Height of one block in pixels
    pub tile_height: u32,
}

impl TileSheet {
    /// Paint a grid of ids using this sheet's blocks
    ///
    /// # Errors
    ///
    /// Returns an error if the grid references an id with no block
    pub fn decode(&self, grid: &Array2<usize>) -> Result<RgbaImage> {
        decode_tiles(grid, &self.blocks, self.tile_width, self.tile_height)
    }
}

/// Split an image into tiles and assign ids by exact pixel equality
///
/// Only whole tiles are used: trailing pixels that do not fill a complete block on
/// the right or bottom edge are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - A tile dimension is zero
/// - The image is smaller than one tile
pub fn encode_tiles(image: &RgbaImage, tile_width: u32, tile_height: u32) -> Result<TileSheet> {
    require_positive("tile_width", tile_width as usize)?;
    require_positive("tile_height", tile_height as usize)?;

    let cols = image.width() / tile_width;
    let rows = image.height() / tile_height;
    if rows == 0 || cols == 0 {
        return Err(AlgorithmError::InvalidSourceData {
            reason: format!(
                "image of {}x{} pixels holds no whole {tile_width}x{tile_height} tile",
                image.width(),
                image.height()
            ),
        });
    }

    let mut grid = Array2::zeros((rows as usize, cols as usize));
    let mut blocks: Vec<PixelBlock> = Vec::new();
    let mut ids: HashMap<PixelBlock, usize> = HashMap::new();

    for row in 0..rows {
        for col in 0..cols {
            let block = read_block(
                image,
                col * tile_width,
                row * tile_height,
                tile_width,
                tile_height,
            );
            let id = if let Some(&id) = ids.get(&block) {
                id
            } else {
                let id = blocks.len();
                ids.insert(block.clone(), id);
                blocks.push(block);
                id
            };
            if let Some(cell) = grid.get_mut([row as usize, col as usize]) {
                *cell = id;
            }
        }
    }

    Ok(TileSheet {
        grid,
        blocks,
        tile_width,
        tile_height,
    })
}

/// Paint every grid cell with its block
///
/// The image measures `cols * tile_width` by `rows * tile_height` pixels.
///
/// # Errors
///
/// Returns an error if:
/// - A grid id has no block in `blocks`
/// - A block does not hold exactly `tile_width * tile_height` pixels
pub fn decode_tiles(
    grid: &Array2<usize>,
    blocks: &[PixelBlock],
    tile_width: u32,
    tile_height: u32,
) -> Result<RgbaImage> {
    require_positive("tile_width", tile_width as usize)?;
    require_positive("tile_height", tile_height as usize)?;

    let expected_len = (tile_width as usize) * (tile_height as usize);
    let (rows, cols) = grid.dim();
    let mut image: RgbaImage =
        ImageBuffer::new(cols as u32 * tile_width, rows as u32 * tile_height);

    for ((row, col), &id) in grid.indexed_iter() {
        let block = blocks.get(id).ok_or(AlgorithmError::InvalidTileIndex {
            index: id,
            max_tiles: blocks.len(),
        })?;
        if block.len() != expected_len {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!(
                    "tile {id} holds {} pixels, expected {expected_len}",
                    block.len()
                ),
            });
        }

        let origin_x = col as u32 * tile_width;
        let origin_y = row as u32 * tile_height;
        for (offset, &pixel) in block.iter().enumerate() {
            let x = origin_x + (offset as u32 % tile_width);
            let y = origin_y + (offset as u32 / tile_width);
            if x < image.width() && y < image.height() {
                image.put_pixel(x, y, Rgba(pixel));
            }
        }
    }

    Ok(image)
}

fn read_block(image: &RgbaImage, x0: u32, y0: u32, width: u32, height: u32) -> PixelBlock {
    let mut block = Vec::with_capacity((width as usize) * (height as usize));
    for y in y0..y0 + height {
        for x in x0..x0 + width {
            let pixel = image.get_pixel_checked(x, y).map_or([0, 0, 0, 0], |p| p.0);
            block.push(pixel);
        }
    }
    block
}

/// Load an image from disk as RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| AlgorithmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Save an image, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_rgba(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
