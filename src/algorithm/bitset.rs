use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over tile indices
///
/// Used both as a cell's superposition (which tiles remain possible) and as the
/// per-direction compatibility sets of the adjacency rules. Indices are 0-based
/// positions in the tile catalog; out-of-range indices are ignored on insert and
/// reported absent on lookup.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Create a bitset containing every tile of the catalog
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Create a bitset holding exactly one tile
    pub fn single(tile_count: usize, tile: usize) -> Self {
        let mut bitset = Self::new(tile_count);
        bitset.insert(tile);
        bitset
    }

    /// Capacity of the set, i.e. the catalog size it was built for
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile index
    pub fn insert(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Remove a tile index, returning whether it was present
    pub fn remove(&mut self, tile: usize) -> bool {
        if tile < self.bits.len() {
            self.bits.replace(tile, false)
        } else {
            false
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Add every tile of `other` to this set
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test whether every tile of this set is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.intersection(other) == *self
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The only tile in the set, if exactly one is present
    pub fn sole(&self) -> Option<usize> {
        let mut ones = self.bits.iter_ones();
        let first = ones.next()?;
        ones.next().is_none().then_some(first)
    }

    /// Iterate present tile indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all tile indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
