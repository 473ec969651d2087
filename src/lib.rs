//! Wave function collapse over single-cell adjacency rules learned from an example grid
//!
//! The example is reduced to a catalog of distinct tiles weighted by frequency and a
//! set of directed adjacency rules. The solver then repeatedly collapses the
//! lowest-entropy cell of the output and propagates the consequences, restarting
//! from scratch whenever a cell runs out of possible tiles.

#![forbid(unsafe_code)]

/// Core algorithm implementation including wave state, propagation and the collapse loop
pub mod algorithm;
/// Tile catalog and adjacency rule extraction from example grids
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for entropy calculations
pub mod math;
/// Grid coordinates and cardinal directions
pub mod spatial;

pub use algorithm::executor::{Solver, SolverConfig, generate};
pub use io::error::{AlgorithmError, Result};
