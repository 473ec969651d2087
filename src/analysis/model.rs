//! Tile model built once per solve: catalog plus adjacency rules

use crate::analysis::adjacency::AdjacencyRules;
use crate::analysis::catalog::TileCatalog;
use crate::io::error::Result;
use ndarray::Array2;
use std::hash::Hash;

/// Everything the solver learns from the example grid
///
/// Derived once and shared read-only by every restart of a solve.
#[derive(Debug, Clone)]
pub struct TileModel<T> {
    catalog: TileCatalog<T>,
    rules: AdjacencyRules,
}

impl<T> TileModel<T>
where
    T: Clone + Eq + Hash,
{
    /// Extract tiles and derive adjacency rules from an example grid
    ///
    /// # Errors
    ///
    /// Returns an error if the example grid has a zero dimension
    pub fn from_example(example: &Array2<T>) -> Result<Self> {
        let catalog = TileCatalog::extract(example)?;
        let rules = AdjacencyRules::derive(example, &catalog)?;
        Ok(Self { catalog, rules })
    }
}

impl<T> TileModel<T> {
    /// Distinct tiles and their weights
    pub const fn catalog(&self) -> &TileCatalog<T> {
        &self.catalog
    }

    /// Observed adjacency rules
    pub const fn rules(&self) -> &AdjacencyRules {
        &self.rules
    }

    /// Tile weights in index order
    pub fn weights(&self) -> &[u32] {
        self.catalog.weights()
    }

    /// Number of distinct tiles
    pub fn tile_count(&self) -> usize {
        self.catalog.len()
    }
}
