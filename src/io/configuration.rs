//! Algorithm constants and runtime configuration defaults

// Default output size, counted in tiles
/// Default number of tile columns in the generated grid
pub const DEFAULT_OUTPUT_WIDTH: usize = 10;
/// Default number of tile rows in the generated grid
pub const DEFAULT_OUTPUT_HEIGHT: usize = 10;

// Default tile size, counted in pixels
/// Default width of one tile block
pub const DEFAULT_TILE_WIDTH: u32 = 128;
/// Default height of one tile block
pub const DEFAULT_TILE_HEIGHT: u32 = 128;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
