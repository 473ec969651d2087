//! Per-cell superposition state of the output grid
//!
//! Each cell carries the set of tiles still possible there and a cached entropy.
//! The cache is maintained so that a cell's entropy is `0.0` exactly when one tile
//! remains, and strictly positive while two or more remain.

use crate::algorithm::bitset::TileBitset;
use crate::math::probability::weighted_entropy;
use crate::spatial::Position;
use crate::spatial::grid::positions;
use ndarray::Array2;

/// Result of narrowing one cell against a support set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Narrowing {
    /// Every possible tile was supported, nothing changed
    Unchanged,
    /// Some tiles were removed and the entropy was refreshed
    Narrowed,
    /// No possible tile was supported; the cell is now empty
    Contradicted,
}

/// Superposition grid for one solve attempt
///
/// Dimensions are fixed at construction. A fresh wave is built for every restart
/// rather than repairing a contradicted one.
#[derive(Debug, Clone)]
pub struct Wave {
    cells: Array2<TileBitset>,
    entropies: Array2<f64>,
}

impl Wave {
    /// Create a fully superposed wave of `height` rows and `width` columns
    ///
    /// Every cell starts with all tiles possible. The starting entropy is the same
    /// for every cell, so it is computed once and broadcast.
    pub fn initialize(width: usize, height: usize, weights: &[u32]) -> Self {
        let tile_count = weights.len();
        let start_entropy = weighted_entropy(weights.iter().copied()).unwrap_or(0.0);

        Self {
            cells: Array2::from_elem((height, width), TileBitset::all(tile_count)),
            entropies: Array2::from_elem((height, width), start_entropy),
        }
    }

    /// Grid dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Tiles still possible at `position`
    pub fn possible(&self, position: Position) -> Option<&TileBitset> {
        self.cells.get(position)
    }

    /// Cached entropy at `position`
    pub fn entropy(&self, position: Position) -> Option<f64> {
        self.entropies.get(position).copied()
    }

    /// Read-only view of every cell's superposition
    pub const fn cells(&self) -> &Array2<TileBitset> {
        &self.cells
    }

    /// Read-only view of the entropy cache
    pub const fn entropies(&self) -> &Array2<f64> {
        &self.entropies
    }

    /// Entropy of the tiles currently possible at `position`
    ///
    /// Returns `None` when the cell is out of bounds or has no possible tile left.
    pub fn entropy_of(&self, position: Position, weights: &[u32]) -> Option<f64> {
        let cell = self.cells.get(position)?;
        weighted_entropy(cell.iter().map(|tile| weights.get(tile).copied().unwrap_or(0)))
    }

    /// True when no cell has positive entropy
    pub fn is_fully_collapsed(&self) -> bool {
        self.entropies.iter().all(|&entropy| entropy <= 0.0)
    }

    /// Number of cells holding exactly one tile
    pub fn collapsed_count(&self) -> usize {
        self.entropies.iter().filter(|&&entropy| entropy <= 0.0).count()
    }

    /// First uncollapsed cell with the smallest entropy, in row-major scan order
    pub fn lowest_entropy_cell(&self) -> Option<Position> {
        let mut lowest: Option<(Position, f64)> = None;
        for position in positions(self.dimensions()) {
            let entropy = self.entropy(position).unwrap_or(0.0);
            if entropy > 0.0 && lowest.is_none_or(|(_, best)| entropy < best) {
                lowest = Some((position, entropy));
            }
        }
        lowest.map(|(position, _)| position)
    }

    /// Every uncollapsed cell sharing the smallest entropy, in row-major order
    pub fn lowest_entropy_cells(&self) -> Vec<Position> {
        let Some(first) = self.lowest_entropy_cell() else {
            return Vec::new();
        };
        let target = self.entropy(first).map(f64::to_bits);
        positions(self.dimensions())
            .filter(|&position| self.entropy(position).map(f64::to_bits) == target)
            .collect()
    }

    /// Force `position` to hold exactly `tile`, with entropy zero
    pub fn collapse(&mut self, position: Position, tile: usize) {
        if let Some(cell) = self.cells.get_mut(position) {
            *cell = TileBitset::single(cell.capacity(), tile);
        }
        if let Some(entropy) = self.entropies.get_mut(position) {
            *entropy = 0.0;
        }
    }

    /// Remove from `position` every tile not contained in `support`
    ///
    /// Refreshes the cached entropy when anything is removed. An emptied cell is
    /// reported as [`Narrowing::Contradicted`] and its entropy is left at zero.
    pub fn narrow(
        &mut self,
        position: Position,
        support: &TileBitset,
        weights: &[u32],
    ) -> Narrowing {
        let Some(cell) = self.cells.get_mut(position) else {
            return Narrowing::Unchanged;
        };
        if cell.is_subset(support) {
            return Narrowing::Unchanged;
        }
        cell.intersect_with(support);
        let emptied = cell.is_empty();

        let entropy = self.entropy_of(position, weights);
        if let Some(cached) = self.entropies.get_mut(position) {
            *cached = entropy.unwrap_or(0.0);
        }

        if emptied || entropy.is_none() {
            Narrowing::Contradicted
        } else {
            Narrowing::Narrowed
        }
    }

    /// Tile index held by every cell, or `None` while any cell is not collapsed
    pub fn collapsed_indices(&self) -> Option<Array2<usize>> {
        let (rows, cols) = self.dimensions();
        let indices: Option<Vec<usize>> = self.cells.iter().map(TileBitset::sole).collect();
        Array2::from_shape_vec((rows, cols), indices?).ok()
    }
}
