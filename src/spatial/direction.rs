//! Cardinal directions used for adjacency rules and propagation

use std::fmt;

/// One of the four cardinal steps between grid cells
///
/// Row indices grow downward, so `Up` decreases the row and `Left` decreases the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

impl Direction {
    /// All directions in a fixed order, matching [`Direction::index`]
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Number of distinct directions
    pub const COUNT: usize = Self::ALL.len();

    /// The direction pointing back the way this one came
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Row and column delta of a single step
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::Up => [-1, 0],
            Self::Down => [1, 0],
            Self::Left => [0, -1],
            Self::Right => [0, 1],
        }
    }

    /// Dense index in `0..Direction::COUNT`, used to address per-direction tables
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
