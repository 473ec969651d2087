//! Spatial data structures for the output grid
//!
//! This module contains spatial-related functionality including:
//! - Cardinal directions and their opposites
//! - Bounded neighbour stepping over `[row, col]` positions

/// Cardinal directions
pub mod direction;
/// Grid coordinates and neighbour enumeration
pub mod grid;

pub use direction::Direction;
pub use grid::Position;
