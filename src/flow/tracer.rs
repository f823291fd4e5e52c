use crate::prelude_crate::*;

/// Region a tracer is kept inside of; fluid enters at `x_min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracerBounds {
    pub x_min: Float,
    pub y_min: Float,
    pub x_max: Float,
    pub y_max: Float,
}

impl TracerBounds {
    /// Site centres of a `width` x `height` grid.
    pub fn from_extent(width: usize, height: usize) -> Self {
        TracerBounds {
            x_min: 0.0,
            y_min: 0.0,
            x_max: width.saturating_sub(1) as Float,
            y_max: height.saturating_sub(1) as Float,
        }
    }
}

// ------------------------------------------------------------------------ STRUCT: Tracer

/// Massless marker carried along by the local flow velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracer {
    x0: Float,
    y0: Float,
    x: Float,
    y: Float,
}

impl Tracer {
    pub fn new(x: Float, y: Float) -> Self {
        Tracer { x0: x, y0: y, x, y }
    }

    pub fn get_x(&self) -> Float {
        self.x
    }

    pub fn get_y(&self) -> Float {
        self.y
    }

    pub fn get_x0(&self) -> Float {
        self.x0
    }

    pub fn get_y0(&self) -> Float {
        self.y0
    }

    /// Nearest lattice site.
    pub fn get_site(&self) -> (isize, isize) {
        ((self.x + 0.5).floor() as isize, (self.y + 0.5).floor() as isize)
    }

    /// # Examples
    /// ```
    /// # use lbfoil::flow::{Tracer, TracerBounds};
    /// let bounds = TracerBounds::from_extent(10, 10);
    /// let mut tracer = Tracer::new(8.0, 4.0);
    ///
    /// tracer.move_by(0.5, 0.5, &bounds);
    /// assert_eq!((tracer.get_x(), tracer.get_y()), (8.5, 4.5));
    ///
    /// // Leaving through the outflow edge re-releases it at the inflow edge.
    /// tracer.move_by(1.0, 0.0, &bounds);
    /// assert_eq!((tracer.get_x(), tracer.get_y()), (0.0, 4.0));
    /// ```
    pub fn move_by(&mut self, dx: Float, dy: Float, bounds: &TracerBounds) {
        self.x += dx;
        self.y += dy;
        if self.x < bounds.x_min {
            self.x = bounds.x_min;
        } else if self.x > bounds.x_max {
            self.x = bounds.x_min;
            self.y = self.y0;
        }
        self.y = self.y.clamp(bounds.y_min, bounds.y_max);
    }
}
