//! Input/output: errors, configuration, the image tile codec and the CLI

/// Command-line interface and batch file processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Tile codec between images and tile id grids
pub mod image;
/// Terminal progress reporting
pub mod progress;
