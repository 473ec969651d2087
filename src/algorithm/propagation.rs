use crate::{
    algorithm::wave::{Narrowing, Wave},
    analysis::adjacency::AdjacencyRules,
    spatial::{Position, grid::valid_directions},
};
use ndarray::Array2;
use std::collections::VecDeque;
use std::fmt;

/// A cell whose superposition was emptied during propagation
///
/// Not an error: the solver answers it by discarding the wave and restarting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contradiction {
    /// Cell left with no possible tile
    pub position: Position,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contradiction at row {}, column {}",
            self.position[0], self.position[1]
        )
    }
}

/// Work done by one propagation pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Cells popped from the worklist and used to narrow their neighbours
    pub cells_visited: usize,
    /// Narrowing steps that removed at least one tile
    pub cells_narrowed: usize,
}

/// Worklist of cells whose superposition shrank and must be re-propagated
///
/// A cell is queued at most once at a time; if it narrows again while pending it is
/// processed once with its latest state.
#[derive(Debug)]
pub struct PropagationQueue {
    /// Cells waiting to be processed, oldest first
    pub queue: VecDeque<Position>,
    pending: Array2<bool>,
}

impl PropagationQueue {
    /// Create an empty queue for a grid of the given `(rows, cols)`
    pub fn new(dimensions: (usize, usize)) -> Self {
        Self {
            queue: VecDeque::new(),
            pending: Array2::from_elem(dimensions, false),
        }
    }

    /// Add a cell unless it is already waiting
    pub fn push(&mut self, position: Position) {
        if let Some(pending) = self.pending.get_mut(position) {
            if !*pending {
                *pending = true;
                self.queue.push_back(position);
            }
        }
    }

    /// Remove and return the next cell
    pub fn take_next(&mut self) -> Option<Position> {
        let position = self.queue.pop_front()?;
        if let Some(pending) = self.pending.get_mut(position) {
            *pending = false;
        }
        Some(position)
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Get the number of pending cells
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Propagate the narrowing of `origin` through the wave until a fixed point
///
/// For every processed cell, each in-bounds neighbour keeps only the tiles that some
/// tile still possible in the cell allows in that direction. Neighbours that lose a
/// tile have their entropy refreshed and are queued in turn. Termination follows from
/// superpositions only ever shrinking.
///
/// # Errors
///
/// Returns the first [`Contradiction`] met; the wave is then left partially updated
/// and must be discarded.
pub fn propagate(
    wave: &mut Wave,
    rules: &AdjacencyRules,
    weights: &[u32],
    origin: Position,
) -> Result<PropagationReport, Contradiction> {
    let dimensions = wave.dimensions();
    let mut queue = PropagationQueue::new(dimensions);
    let mut report = PropagationReport::default();
    queue.push(origin);

    while let Some(position) = queue.take_next() {
        let Some(possible) = wave.possible(position).cloned() else {
            continue;
        };
        if possible.is_empty() {
            return Err(Contradiction { position });
        }
        report.cells_visited += 1;

        for (direction, neighbor) in valid_directions(position, dimensions) {
            let support = rules.supported_by(&possible, direction);
            match wave.narrow(neighbor, &support, weights) {
                Narrowing::Unchanged => {}
                Narrowing::Narrowed => {
                    report.cells_narrowed += 1;
                    queue.push(neighbor);
                }
                Narrowing::Contradicted => {
                    return Err(Contradiction { position: neighbor });
                }
            }
        }
    }

    Ok(report)
}
