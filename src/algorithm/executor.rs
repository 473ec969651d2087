use crate::{
    algorithm::propagation::{Contradiction, propagate},
    algorithm::selection::{RandomSelector, cell_weights},
    algorithm::wave::Wave,
    analysis::model::TileModel,
    io::configuration::{DEFAULT_SEED, MAX_GRID_DIMENSION},
    io::error::{AlgorithmError, Result, invalid_parameter, require_positive},
    spatial::{Direction, Position},
};
use ndarray::Array2;
use std::hash::Hash;

/// How to pick among uncollapsed cells sharing the lowest entropy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// First such cell in row-major scan order
    #[default]
    FirstInScanOrder,
    /// Uniformly among all such cells, using the solver's seeded generator
    Random,
}

/// Output size and run parameters for a solve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of output columns
    pub width: usize,
    /// Number of output rows
    pub height: usize,
    /// Seed for every random choice of the solve
    pub seed: u64,
    /// Restarts allowed after the first attempt; `None` retries without bound
    pub max_restarts: Option<usize>,
    /// Lowest-entropy tie-break policy
    pub tie_break: TieBreak,
}

impl SolverConfig {
    /// Configuration for a `width` x `height` output with default settings
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: DEFAULT_SEED,
            max_restarts: None,
            tie_break: TieBreak::FirstInScanOrder,
        }
    }

    /// Check output dimensions before any work is done
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            require_positive(parameter, value)?;
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

/// Result of a single collapse attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every cell holds exactly one tile; values are catalog indices
    Collapsed(Array2<usize>),
    /// Some cell ran out of possible tiles; the attempt must be thrown away
    Contradiction(Contradiction),
}

/// Hooks for watching a solve from the outside
///
/// All methods default to doing nothing.
pub trait SolveObserver {
    /// A fresh, fully superposed attempt is starting (1-based)
    fn on_attempt_start(&mut self, _attempt: usize) {}

    /// A cell was collapsed by random choice
    fn on_collapse(&mut self, _position: Position) {}

    /// An attempt ended in contradiction and will be restarted
    fn on_contradiction(&mut self, _attempt: usize, _contradiction: &Contradiction) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}

/// Wave function collapse solver over a fixed tile model
///
/// The model is derived once; every attempt starts from a freshly superposed wave,
/// and a contradiction throws the whole wave away rather than backtracking.
#[derive(Debug, Clone)]
pub struct Solver<T> {
    model: TileModel<T>,
    config: SolverConfig,
    random_selector: RandomSelector,
    attempts: usize,
}

impl<T> Solver<T>
where
    T: Clone + Eq + Hash,
{
    /// Validate the inputs and build the tile model
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An output dimension is zero or too large
    /// - The example grid has zero rows or columns
    /// - The example can never fill an output of this shape (see [`check_satisfiable`])
    pub fn new(example: &Array2<T>, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let model = TileModel::from_example(example)?;
        check_satisfiable(&model, &config)?;
        Ok(Self::from_model(model, config))
    }

    /// Solve and map the collapsed tile indices back to the example's values
    ///
    /// # Errors
    ///
    /// Returns an error if the restart ceiling is hit, or if an index falls outside
    /// the catalog
    pub fn solve(&mut self, observer: &mut impl SolveObserver) -> Result<Array2<T>> {
        let indices = self.solve_indices(observer)?;
        let catalog = self.model.catalog();
        let mut values = Vec::with_capacity(indices.len());
        for &index in &indices {
            let value = catalog
                .value(index)
                .cloned()
                .ok_or(AlgorithmError::InvalidTileIndex {
                    index,
                    max_tiles: catalog.len(),
                })?;
            values.push(value);
        }
        Array2::from_shape_vec(indices.dim(), values)
            .map_err(|e| invalid_parameter("output", &indices.len(), &e))
    }
}

impl<T> Solver<T> {
    /// Build a solver around an already derived model
    pub fn from_model(model: TileModel<T>, config: SolverConfig) -> Self {
        let random_selector = RandomSelector::new(config.seed);
        Self {
            model,
            config,
            random_selector,
            attempts: 0,
        }
    }

    /// Tile model shared by all attempts
    pub const fn model(&self) -> &TileModel<T> {
        &self.model
    }

    /// Run configuration
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Attempts made so far, including the successful one
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Collapse the output until it succeeds, restarting on every contradiction
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::RestartLimitExceeded`] only when `max_restarts` is
    /// set and exhausted
    pub fn solve_indices(&mut self, observer: &mut impl SolveObserver) -> Result<Array2<usize>> {
        loop {
            self.attempts += 1;
            let attempt = self.attempts;
            observer.on_attempt_start(attempt);

            match self.attempt(observer) {
                SolveOutcome::Collapsed(indices) => return Ok(indices),
                SolveOutcome::Contradiction(contradiction) => {
                    observer.on_contradiction(attempt, &contradiction);
                    if self.config.max_restarts.is_some_and(|max| attempt > max) {
                        return Err(AlgorithmError::RestartLimitExceeded { attempts: attempt });
                    }
                }
            }
        }
    }

    /// Run one collapse attempt from a fully superposed wave
    ///
    /// Repeatedly collapses the lowest-entropy cell by weighted random choice and
    /// propagates, until every cell is collapsed or a contradiction appears.
    pub fn attempt(&mut self, observer: &mut impl SolveObserver) -> SolveOutcome {
        let weights = self.model.weights();
        let rules = self.model.rules();
        let mut wave = Wave::initialize(self.config.width, self.config.height, weights);

        while !wave.is_fully_collapsed() {
            let Some(position) =
                next_cell(&mut self.random_selector, self.config.tie_break, &wave)
            else {
                break;
            };

            let Some(possible) = wave.possible(position) else {
                break;
            };
            let candidates = cell_weights(possible.iter(), weights);
            let Some(tile) = self.random_selector.weighted_choice(&candidates) else {
                return SolveOutcome::Contradiction(Contradiction { position });
            };

            wave.collapse(position, tile);
            observer.on_collapse(position);

            if let Err(contradiction) = propagate(&mut wave, rules, weights, position) {
                return SolveOutcome::Contradiction(contradiction);
            }
        }

        match wave.collapsed_indices() {
            Some(indices) => SolveOutcome::Collapsed(indices),
            None => {
                let position = wave
                    .cells()
                    .indexed_iter()
                    .find(|(_, cell)| cell.count() != 1)
                    .map_or([0, 0], |((row, col), _)| [row, col]);
                SolveOutcome::Contradiction(Contradiction { position })
            }
        }
    }
}

/// Reject outputs that contradict on every attempt
///
/// With two or more tiles, any collapse forces its neighbours through the rules. If
/// the output has a neighbour in some direction but the example never showed an
/// adjacency that way (e.g. a single-row example and a multi-row output), every
/// attempt would contradict and the restart loop would never end.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidSourceData`] naming the missing direction
pub fn check_satisfiable<T>(model: &TileModel<T>, config: &SolverConfig) -> Result<()> {
    if model.tile_count() < 2 {
        return Ok(());
    }
    let needed = [
        (config.height > 1, [Direction::Up, Direction::Down]),
        (config.width > 1, [Direction::Left, Direction::Right]),
    ];
    for (required, directions) in needed {
        if !required {
            continue;
        }
        if let Some(direction) = directions
            .into_iter()
            .find(|&direction| !model.rules().has_direction(direction))
        {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!(
                    "example has no {direction} adjacencies, so a {}x{} output cannot collapse",
                    config.width, config.height
                ),
            });
        }
    }
    Ok(())
}

fn next_cell(
    selector: &mut RandomSelector,
    tie_break: TieBreak,
    wave: &Wave,
) -> Option<Position> {
    match tie_break {
        TieBreak::FirstInScanOrder => wave.lowest_entropy_cell(),
        TieBreak::Random => selector.choose_position(&wave.lowest_entropy_cells()),
    }
}

/// Generate a `width` x `height` grid locally resembling `example`
///
/// Uses the default seed and retries contradictions without bound. The result has
/// `height` rows and `width` columns, each holding a value that occurs in `example`.
///
/// # Errors
///
/// Returns an error if the example grid is empty or an output dimension is zero
pub fn generate<T>(example: &Array2<T>, width: usize, height: usize) -> Result<Array2<T>>
where
    T: Clone + Eq + Hash,
{
    let mut solver = Solver::new(example, SolverConfig::new(width, height))?;
    solver.solve(&mut NoopObserver)
}
