//! Analysis of the example grid into a tile model

/// Directed adjacency rules between tiles
pub mod adjacency;
/// Distinct tiles and their occurrence weights
pub mod catalog;
/// Catalog and rules bundled for the solver
pub mod model;

pub use adjacency::{AdjacencyRule, AdjacencyRules};
pub use catalog::TileCatalog;
pub use model::TileModel;
