//! Multi-file progress tracking with automatic batching for large sets

use crate::algorithm::executor::SolveObserver;
use crate::algorithm::propagation::Contradiction;
use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use crate::spatial::Position;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Display state of one file: name, cells collapsed by choice, cell total, attempt
#[derive(Clone, Debug, Default)]
struct FileState {
    name: String,
    collapsed: usize,
    total: usize,
    attempt: usize,
}

/// Coordinates progress display for batch operations
///
/// Automatically switches between individual progress bars (for small batches)
/// and a single batch progress bar (for large batches) based on file count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    file_states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files the manager was initialized for
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Configure progress bar for a new file whose output has `cells` cells
    pub fn start_file(&mut self, index: usize, path: &Path, cells: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileState {
                name: display_name,
                collapsed: 0,
                total: cells,
                attempt: 0,
            };
        }
        self.update_bars();
    }

    /// Observer feeding one file's solve events into its progress bar
    pub const fn observer(&mut self, index: usize) -> FileObserver<'_> {
        FileObserver {
            manager: self,
            index,
        }
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.collapsed = state.total;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Cells collapsed by choice and attempt number recorded for a file
    pub fn file_status(&self, index: usize) -> Option<(usize, usize)> {
        self.file_states
            .get(index)
            .map(|state| (state.collapsed, state.attempt))
    }

    fn update_file(&mut self, index: usize, update: impl FnOnce(&mut FileState)) {
        if let Some(state) = self.file_states.get_mut(index) {
            update(state);
        }
        self.update_bars();
    }

    /// Update all progress bars to show the last N active files
    fn update_bars(&self) {
        let active_files: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, state) in visible_files.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(state.total as u64);
                bar.set_position(state.collapsed.min(state.total) as u64);
                let max_width = state.total.to_string().len();
                bar.set_message(format!(
                    "{:>max_width$}/{} attempt {}",
                    state.collapsed, state.total, state.attempt
                ));
                bar.set_prefix(state.name.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible_files.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}

/// Solve observer bound to one file of a [`ProgressManager`]
pub struct FileObserver<'a> {
    manager: &'a mut ProgressManager,
    index: usize,
}

impl SolveObserver for FileObserver<'_> {
    fn on_attempt_start(&mut self, attempt: usize) {
        self.manager.update_file(self.index, |state| {
            state.attempt = attempt;
            state.collapsed = 0;
        });
    }

    fn on_collapse(&mut self, _position: Position) {
        self.manager
            .update_file(self.index, |state| state.collapsed += 1);
    }

    fn on_contradiction(&mut self, _attempt: usize, _contradiction: &Contradiction) {
        self.manager
            .update_file(self.index, |state| state.collapsed = 0);
    }
}
