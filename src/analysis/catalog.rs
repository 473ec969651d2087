//! Tile catalog extraction from an example grid
//!
//! Every distinct value in the example becomes one tile. Tiles are numbered in
//! row-major first-seen order and weighted by how often they occur, which is the
//! weight later used for entropy and for the random collapse choice.

use crate::io::error::{AlgorithmError, Result};
use ndarray::Array2;
use std::collections::HashMap;
use std::hash::Hash;

/// Distinct tile values of an example with their occurrence counts
///
/// `values[i]` is the tile with index `i`, and `weights[i]` is how many cells of the
/// example hold it. The catalog is immutable once extracted.
#[derive(Debug, Clone)]
pub struct TileCatalog<T> {
    values: Vec<T>,
    weights: Vec<u32>,
    index_of: HashMap<T, usize>,
}

impl<T> TileCatalog<T>
where
    T: Clone + Eq + Hash,
{
    /// Scan the example once, collecting distinct values and their counts
    ///
    /// # Errors
    ///
    /// Returns an error if the example has zero rows or zero columns
    pub fn extract(example: &Array2<T>) -> Result<Self> {
        let (rows, cols) = example.dim();
        if rows == 0 || cols == 0 {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!("example grid must not be empty (got {rows}x{cols})"),
            });
        }

        let mut values = Vec::new();
        let mut weights: Vec<u32> = Vec::new();
        let mut index_of: HashMap<T, usize> = HashMap::new();

        // ndarray iterates a standard-layout array in logical row-major order
        for value in example {
            if let Some(&index) = index_of.get(value) {
                if let Some(weight) = weights.get_mut(index) {
                    *weight = weight.saturating_add(1);
                }
            } else {
                index_of.insert(value.clone(), values.len());
                values.push(value.clone());
                weights.push(1);
            }
        }

        Ok(Self {
            values,
            weights,
            index_of,
        })
    }

    /// Index of a tile value, if it occurs in the example
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.index_of.get(value).copied()
    }
}

impl<T> TileCatalog<T> {
    /// Number of distinct tiles
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the catalog has no tiles (never true for an extracted catalog)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Tile values in index order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Occurrence counts, parallel to [`TileCatalog::values`]
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Value of the tile at `index`
    pub fn value(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Weight of the tile at `index`, zero when out of range
    pub fn weight(&self, index: usize) -> u32 {
        self.weights.get(index).copied().unwrap_or(0)
    }
}
