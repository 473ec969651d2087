/// Fixed-size bitset used for superpositions and compatibility sets
pub mod bitset;
/// Collapse loop, restart policy and the `generate` entry point
pub mod executor;
/// Worklist constraint propagation
pub mod propagation;
/// Seeded weighted random choices
pub mod selection;
/// Per-cell superposition and entropy state
pub mod wave;
