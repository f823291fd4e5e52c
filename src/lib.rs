pub mod config;
pub mod constants;
pub mod error;
pub mod flow;
pub mod geometry;
pub mod kernel;
mod prelude_crate;
pub mod velocity_set;

pub use config::Config;
pub use error::{Axis, LbError, LbResult};

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::constants::{Float, Real};
    pub use crate::error::{Axis, LbError, LbResult};
    pub use crate::flow::{EdgePressureCalc, Lattice, NodeProperties, Parameters, Tracer};
    pub use crate::geometry::{Point, Polygon, ShapeAdjacentCoords, Vector};
    pub use crate::velocity_set::Direction;
    pub use crate::{BoundaryFace, SiteType};
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoundaryFace {
    West = 0,
    East = 1,
    South = 2,
    North = 3,
}

pub const FACES_2D: [BoundaryFace; 4] = [
    BoundaryFace::West,
    BoundaryFace::East,
    BoundaryFace::South,
    BoundaryFace::North,
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SiteType {
    Fluid = 0,
    Boundary = 1,
    Obstacle = 2,
}

impl SiteType {
    /// Obstacle wins over boundary.
    ///
    /// # Examples
    /// ```
    /// # use lbfoil::SiteType;
    /// assert_eq!(SiteType::classify(true, true), SiteType::Obstacle);
    /// assert_eq!(SiteType::classify(false, true), SiteType::Boundary);
    /// assert_eq!(SiteType::classify(false, false), SiteType::Fluid);
    /// ```
    pub fn classify(is_obstacle: bool, is_boundary: bool) -> Self {
        if is_obstacle {
            SiteType::Obstacle
        } else if is_boundary {
            SiteType::Boundary
        } else {
            SiteType::Fluid
        }
    }
}
