//! Directed adjacency rules observed in an example grid
//!
//! A rule `(a, b, d)` says tile `b` may sit one step from tile `a` in direction `d`.
//! Rules are recorded from every in-bounds (cell, neighbour) pair of the example, so
//! the inverse `(b, a, d.opposite())` is always present as well: it is observed when
//! the scan reaches the neighbour.

use crate::algorithm::bitset::TileBitset;
use crate::analysis::catalog::TileCatalog;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::Direction;
use crate::spatial::grid::{positions, valid_directions};
use ndarray::Array2;
use std::hash::Hash;

/// A single observed adjacency between two catalog tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdjacencyRule {
    /// Tile index at the origin cell
    pub from: usize,
    /// Tile index allowed at the neighbouring cell
    pub to: usize,
    /// Direction from the origin to the neighbour
    pub direction: Direction,
}

/// Set of adjacency rules with constant-time lookup
///
/// For each `(tile, direction)` the tiles allowed next to it are kept as a
/// [`TileBitset`], which is what propagation consumes. The distinct rules are
/// also kept in the order they were first observed.
#[derive(Debug, Clone)]
pub struct AdjacencyRules {
    tile_count: usize,
    compatible: Vec<TileBitset>,
    rules: Vec<AdjacencyRule>,
}

impl AdjacencyRules {
    /// Create an empty rule set for a catalog of `tile_count` tiles
    pub fn empty(tile_count: usize) -> Self {
        Self {
            tile_count,
            compatible: vec![TileBitset::new(tile_count); tile_count * Direction::COUNT],
            rules: Vec::new(),
        }
    }

    /// Derive all rules from an example grid and its extracted catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the example holds a value missing from `catalog`, which
    /// only happens when the catalog was extracted from a different example
    pub fn derive<T>(example: &Array2<T>, catalog: &TileCatalog<T>) -> Result<Self>
    where
        T: Clone + Eq + Hash,
    {
        let dimensions = example.dim();
        let mut rules = Self::empty(catalog.len());

        let tile_at = |position: [usize; 2]| {
            example
                .get(position)
                .and_then(|value| catalog.index_of(value))
                .ok_or_else(|| AlgorithmError::InvalidSourceData {
                    reason: format!(
                        "example cell {position:?} holds a value missing from the tile catalog"
                    ),
                })
        };

        for position in positions(dimensions) {
            let from = tile_at(position)?;
            for (direction, neighbor) in valid_directions(position, dimensions) {
                let to = tile_at(neighbor)?;
                rules.insert(AdjacencyRule {
                    from,
                    to,
                    direction,
                });
            }
        }

        Ok(rules)
    }

    /// Record a rule, returning `false` if it was already present
    pub fn insert(&mut self, rule: AdjacencyRule) -> bool {
        if rule.from >= self.tile_count || rule.to >= self.tile_count {
            return false;
        }
        let slot = Self::slot(rule.from, rule.direction);
        match self.compatible.get_mut(slot) {
            Some(allowed) if !allowed.contains(rule.to) => {
                allowed.insert(rule.to);
                self.rules.push(rule);
                true
            }
            _ => false,
        }
    }

    /// Whether `to` may appear one step from `from` in `direction`
    pub fn allows(&self, from: usize, to: usize, direction: Direction) -> bool {
        self.compatible(from, direction)
            .is_some_and(|allowed| allowed.contains(to))
    }

    /// Tiles allowed one step from `from` in `direction`
    pub fn compatible(&self, from: usize, direction: Direction) -> Option<&TileBitset> {
        self.compatible.get(Self::slot(from, direction))
    }

    /// Tiles that at least one member of `possible` allows one step away in `direction`
    ///
    /// This is the support a neighbour's superposition is narrowed against.
    pub fn supported_by(&self, possible: &TileBitset, direction: Direction) -> TileBitset {
        let mut supported = TileBitset::new(self.tile_count);
        for tile in possible.iter() {
            if let Some(allowed) = self.compatible(tile, direction) {
                supported.union_with(allowed);
            }
        }
        supported
    }

    /// Whether any rule points in `direction`
    pub fn has_direction(&self, direction: Direction) -> bool {
        self.rules.iter().any(|rule| rule.direction == direction)
    }

    /// Number of catalog tiles the rules were built for
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Number of distinct rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules were observed (true for a 1x1 example)
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Distinct rules in first-observed order
    pub fn iter(&self) -> impl Iterator<Item = &AdjacencyRule> {
        self.rules.iter()
    }

    const fn slot(tile: usize, direction: Direction) -> usize {
        tile * Direction::COUNT + direction.index()
    }
}
