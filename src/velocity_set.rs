// ------------------------------------------------------------------------------- MODULES

mod d2q9;

// ------------------------------------------------------------------------------- IMPORTS

use crate::constants::Float;

pub const D: usize = d2q9::D;

pub const Q: usize = d2q9::Q;

// --------------------------------------------------------------------- ENUM: Direction

/// The nine discrete velocities of the D2Q9 lattice, in buffer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Rest = 0,
    North = 1,
    NorthEast = 2,
    East = 3,
    SouthEast = 4,
    South = 5,
    SouthWest = 6,
    West = 7,
    NorthWest = 8,
}

pub use Direction::*;

impl Direction {
    pub const ALL: [Direction; Q] = [
        Rest, North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest,
    ];

    /// # Examples
    /// ```
    /// # use lbfoil::velocity_set::Direction;
    /// assert_eq!(Direction::from_index(3), Some(Direction::East));
    /// assert_eq!(Direction::from_index(9), None);
    /// ```
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn get_c(self) -> [i32; D] {
        d2q9::C[self.index()]
    }

    pub fn get_w(self) -> Float {
        d2q9::W[self.index()]
    }

    /// # Examples
    /// ```
    /// # use lbfoil::velocity_set::Direction::*;
    /// assert_eq!(Rest.get_opposite(), Rest);
    /// assert_eq!(North.get_opposite(), South);
    /// assert_eq!(NorthEast.get_opposite(), SouthWest);
    /// assert_eq!(West.get_opposite(), East);
    /// ```
    pub fn get_opposite(self) -> Self {
        Self::ALL[d2q9::Q_BAR[self.index()]]
    }
}

// ----------------------------------------------------------------------------- FUNCTIONS

pub fn get_c() -> &'static [[i32; D]; Q] {
    &d2q9::C
}

pub fn get_w() -> &'static [Float; Q] {
    &d2q9::W
}

pub fn get_q_bar() -> &'static [usize; Q] {
    &d2q9::Q_BAR
}

pub fn get_opposite_direction(direction: usize) -> usize {
    d2q9::Q_BAR[direction]
}
