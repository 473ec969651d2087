//! Bounded grid coordinates and neighbour stepping
//!
//! Positions are `[row, col]` pairs into a grid of known `(rows, cols)` dimensions.
//! Nothing here wraps around the edges: a step that would leave the grid yields `None`.

use crate::spatial::direction::Direction;

/// Grid coordinates as `[row, col]`
pub type Position = [usize; 2];

/// Move one cell from `position` in `direction`, staying inside `dimensions`
pub fn step(
    position: Position,
    direction: Direction,
    dimensions: (usize, usize),
) -> Option<Position> {
    let [dr, dc] = direction.offset();
    let row = position[0].checked_add_signed(dr)?;
    let col = position[1].checked_add_signed(dc)?;
    (row < dimensions.0 && col < dimensions.1).then_some([row, col])
}

/// Directions from `position` whose neighbour lies inside `dimensions`
pub fn valid_directions(
    position: Position,
    dimensions: (usize, usize),
) -> impl Iterator<Item = (Direction, Position)> {
    Direction::ALL.into_iter().filter_map(move |direction| {
        step(position, direction, dimensions).map(|neighbor| (direction, neighbor))
    })
}

/// Iterate every position of a grid in row-major order
pub fn positions(dimensions: (usize, usize)) -> impl Iterator<Item = Position> {
    let (rows, cols) = dimensions;
    (0..rows).flat_map(move |row| (0..cols).map(move |col| [row, col]))
}
