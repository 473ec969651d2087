//! Mathematical utilities for the algorithm

/// Weighted Shannon entropy with explicit contradiction detection
pub mod probability;
