use super::{Point, Vector};
use crate::constants::{Float, VERTICAL_EDGE_TOLERANCE};

// ------------------------------------------------------------------------ STRUCT: Segment

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub pf: Point,
}

impl Segment {
    pub fn new(p0: Point, pf: Point) -> Self {
        Segment { p0, pf }
    }

    /// Upward edges include their start point and exclude their end point.
    pub fn crosses_upward(&self, y: Float) -> bool {
        self.p0.y < self.pf.y && self.p0.y <= y && y < self.pf.y
    }

    /// Downward edges exclude their start point and include their end point.
    pub fn crosses_downward(&self, y: Float) -> bool {
        self.p0.y > self.pf.y && self.pf.y <= y && y < self.p0.y
    }

    /// x coordinate where the horizontal ray through `ray_origin` meets this edge.
    ///
    /// Must not be called for horizontal edges. For an edge with no x-span the
    /// result is `ray_origin.x - 1.0` whenever the ray misses the edge's y-range,
    /// so the crossing is never counted.
    ///
    /// # Examples
    /// ```
    /// # use lbfoil::geometry::{Point, Segment};
    /// let edge = Segment::new(Point::new(1.0, 0.0), Point::new(1.0000001, 5.0));
    ///
    /// assert_eq!(edge.x_intersect(&Point::new(-3.0, 2.0)), 1.0);
    /// assert_eq!(edge.x_intersect(&Point::new(-3.0, 7.0)), -4.0);
    ///
    /// let edge = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 2.0));
    /// assert!((edge.x_intersect(&Point::new(0.0, 1.0)) - 2.0).abs() < 1e-12);
    /// ```
    pub fn x_intersect(&self, ray_origin: &Point) -> Float {
        let dx = self.pf.x - self.p0.x;
        let dy = self.pf.y - self.p0.y;
        if dx.abs() < VERTICAL_EDGE_TOLERANCE {
            let ry = ray_origin.y;
            let (y_min, y_max) = if self.p0.y < self.pf.y {
                (self.p0.y, self.pf.y)
            } else {
                (self.pf.y, self.p0.y)
            };
            if ry < y_min || ry > y_max {
                return ray_origin.x - 1.0;
            }
            return self.p0.x;
        }
        let dy_fraction = (ray_origin.y - self.p0.y) / dy;
        self.p0.x + dy_fraction * dx
    }

    pub fn as_vector(&self) -> Vector {
        self.pf - self.p0
    }

    pub fn length(&self) -> Float {
        self.as_vector().norm()
    }

    pub fn midpoint(&self) -> Point {
        nalgebra::center(&self.p0, &self.pf)
    }
}

// -------------------------------------------------------------------- STRUCT: BoundingBox

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    fn from_points(points: &[Point]) -> Self {
        let mut points_iter = points.iter();
        let first = points_iter.next().copied().unwrap_or_else(Point::origin);
        points_iter.fold(
            BoundingBox {
                min: first,
                max: first,
            },
            |bbox, p| BoundingBox {
                min: Point::new(bbox.min.x.min(p.x), bbox.min.y.min(p.y)),
                max: Point::new(bbox.max.x.max(p.x), bbox.max.y.max(p.y)),
            },
        )
    }

    /// Half-open test: `min <= p < max` on both axes.
    pub fn contains(&self, point: &Point) -> bool {
        self.min.x <= point.x && point.x < self.max.x && self.min.y <= point.y && point.y < self.max.y
    }

    pub fn width(&self) -> Float {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> Float {
        self.max.y - self.min.y
    }
}

// ------------------------------------------------------------------------ STRUCT: Polygon

/// An implicitly closed polygon: edge `i` joins vertex `i` to vertex `(i + 1) % n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Segment>,
    edge_normals: Vec<Vector>,
    bbox: BoundingBox,
    center: Point,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        let num_vertices = vertices.len();
        let edges = (0..num_vertices)
            .map(|i| Segment::new(vertices[i], vertices[(i + 1) % num_vertices]))
            .collect::<Vec<Segment>>();
        // Counter-clockwise winding needs the clockwise rotation to face outward.
        let counter_clockwise = signed_area(&vertices) > 0.0;
        let edge_normals = edges
            .iter()
            .map(|edge| {
                let v = edge.as_vector();
                let normal = if counter_clockwise {
                    Vector::new(v.y, -v.x)
                } else {
                    Vector::new(-v.y, v.x)
                };
                normal.try_normalize(0.0).unwrap_or_else(Vector::zeros)
            })
            .collect::<Vec<Vector>>();
        let bbox = BoundingBox::from_points(&vertices);
        let center = if num_vertices == 0 {
            Point::origin()
        } else {
            let sum = vertices
                .iter()
                .fold(Vector::zeros(), |acc, v| acc + v.coords);
            Point::from(sum / num_vertices as Float)
        };
        Polygon {
            vertices,
            edges,
            edge_normals,
            bbox,
            center,
        }
    }

    /// # Examples
    /// ```
    /// # use lbfoil::geometry::Polygon;
    /// let square = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    ///
    /// assert_eq!(square.get_edges().len(), 4);
    /// assert_eq!(square.get_center().x, 1.0);
    /// assert_eq!(square.get_bbox().width(), 2.0);
    /// ```
    pub fn from_coords(coords: &[(Float, Float)]) -> Self {
        Polygon::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Places a profile table: normalises it by its x-span, rotates it clockwise
    /// by `alpha_rad` about the origin, scales it to `width` and moves its lower
    /// left corner to `(left, bottom)`.
    pub fn placed(
        profile: &[(Float, Float)],
        left: Float,
        bottom: Float,
        width: Float,
        alpha_rad: Float,
    ) -> Self {
        let x_min = profile.iter().map(|p| p.0).fold(Float::INFINITY, Float::min);
        let x_max = profile.iter().map(|p| p.0).fold(Float::NEG_INFINITY, Float::max);
        let y_min = profile.iter().map(|p| p.1).fold(Float::INFINITY, Float::min);
        let span = x_max - x_min;
        let span = if span > 0.0 { span } else { 1.0 };
        let rotation = nalgebra::Rotation2::new(-alpha_rad);
        let vertices = profile
            .iter()
            .map(|&(x, y)| {
                let normed = Vector::new((x - x_min) / span, (y - y_min) / span);
                let rotated = rotation * normed;
                Point::new(rotated.x * width + left, rotated.y * width + bottom)
            })
            .collect();
        Polygon::new(vertices)
    }

    /// Even-odd ray cast toward +x.
    ///
    /// # Examples
    /// ```
    /// # use lbfoil::geometry::Polygon;
    /// let rect = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]);
    ///
    /// assert!(rect.contains_xy(1.0, 1.0));
    /// assert!(!rect.contains_xy(5.0, 1.0));
    /// assert!(!rect.contains_xy(1.0, -0.5));
    /// ```
    pub fn contains(&self, point: &Point) -> bool {
        if !self.bbox.contains(point) {
            return false;
        }
        let num_crossings = self
            .edges
            .iter()
            .filter(|edge| edge.crosses_upward(point.y) || edge.crosses_downward(point.y))
            .filter(|edge| point.x < edge.x_intersect(point))
            .count();
        num_crossings % 2 != 0
    }

    pub fn contains_xy(&self, x: Float, y: Float) -> bool {
        self.contains(&Point::new(x, y))
    }

    pub fn contains_site(&self, x: isize, y: isize) -> bool {
        self.contains_xy(x as Float, y as Float)
    }

    pub fn get_vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn get_edges(&self) -> &[Segment] {
        &self.edges
    }

    /// Outward unit normal of every edge.
    pub fn get_edge_normals(&self) -> &[Vector] {
        &self.edge_normals
    }

    pub fn get_bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn get_center(&self) -> &Point {
        &self.center
    }
}

fn signed_area(vertices: &[Point]) -> Float {
    let n = vertices.len();
    0.5 * (0..n)
        .map(|i| {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum::<Float>()
}
