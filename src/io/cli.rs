//! Command-line interface for batch processing PNG examples into generated images

use crate::algorithm::executor::{NoopObserver, Solver, SolverConfig, TieBreak};
use crate::io::configuration::{
    DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_SEED, DEFAULT_TILE_HEIGHT,
    DEFAULT_TILE_WIDTH, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{encode_tiles, load_rgba, save_rgba};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilecollapse")]
#[command(
    author,
    version,
    about = "Generate tile images with wave function collapse from an example PNG"
)]
/// Command-line arguments for the tile generation tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: usize,

    /// Output height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: usize,

    /// Width of one tile in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Height of one tile in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Give up after this many restarts instead of retrying forever
    #[arg(short = 'r', long)]
    pub max_restarts: Option<usize>,

    /// Break lowest-entropy ties at random instead of by scan order
    #[arg(long)]
    pub random_ties: bool,

    /// Output path (single-file targets only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver configuration described by the arguments
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            max_restarts: self.max_restarts,
            tie_break: if self.random_ties {
                TieBreak::Random
            } else {
                TieBreak::FirstInScanOrder
            },
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.solver_config().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            if self.cli.output.is_some() {
                return Err(invalid_parameter(
                    "output",
                    &self.cli.target.display(),
                    &"an explicit output path needs a single-file target",
                ));
            }
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !Self::is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = self.output_path(input_path);
        let config = self.cli.solver_config();

        let example = load_rgba(input_path)?;
        let sheet = encode_tiles(&example, self.cli.tile_width, self.cli.tile_height)?;
        let mut solver = Solver::new(&sheet.grid, config)?;

        let collapsed = if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, config.width * config.height);
            solver.solve(&mut pm.observer(index))?
        } else {
            solver.solve(&mut NoopObserver)?
        };

        let generated = sheet.decode(&collapsed)?;
        save_rgba(&generated, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn output_path(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::get_output_path(input_path))
    }

    fn is_generated_output(path: &Path) -> bool {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
    }

    /// Default output location: `<stem>_result.<ext>` next to the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
