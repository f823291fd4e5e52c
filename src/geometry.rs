// ------------------------------------------------------------------------------- MODULES

mod adjacent;
mod polygon;

// ------------------------------------------------------------------------------- IMPORTS

use crate::constants::Float;
pub use adjacent::ShapeAdjacentCoords;
pub use polygon::{BoundingBox, Polygon, Segment};

pub type Point = nalgebra::Point2<Float>;

pub type Vector = nalgebra::Vector2<Float>;

/// Integer lattice coordinate; may fall outside the grid.
pub type Coord = (isize, isize);
