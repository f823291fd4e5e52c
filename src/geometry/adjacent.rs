use super::{Coord, Point, Polygon, Segment, Vector};
use crate::constants::Float;
use std::collections::HashSet;

/// Lattice coordinates lying just outside each edge of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeAdjacentCoords {
    adjacents: Vec<Vec<Coord>>,
}

impl ShapeAdjacentCoords {
    /// # Examples
    /// ```
    /// # use lbfoil::geometry::{Polygon, ShapeAdjacentCoords};
    /// let shape = Polygon::from_coords(&[(10.2, 5.2), (19.7, 5.2), (19.7, 14.7), (10.2, 14.7)]);
    /// let adjacent_coords = ShapeAdjacentCoords::new(&shape);
    ///
    /// assert_eq!(adjacent_coords.get_adjacents().len(), 4);
    /// assert!(adjacent_coords.get_adjacents()[0].contains(&(12, 5)));
    /// ```
    pub fn new(shape: &Polygon) -> Self {
        let adjacents = shape
            .get_edges()
            .iter()
            .zip(shape.get_edge_normals().iter())
            .map(|(edge, normal)| get_adjacent_coords(shape, edge, normal))
            .collect();
        ShapeAdjacentCoords { adjacents }
    }

    pub fn get_adjacents(&self) -> &[Vec<Coord>] {
        &self.adjacents
    }

    /// Sampling sites for edge `edge`, `None` past the last edge.
    pub fn get_edge_adjacents(&self, edge: usize) -> Option<&[Coord]> {
        self.adjacents.get(edge).map(Vec::as_slice)
    }
}

/// Walks the edge shifted half a cell along its outward normal, one unit at a
/// time along its longer axis, keeping rounded points outside `shape`.
fn get_adjacent_coords(shape: &Polygon, edge: &Segment, normal: &Vector) -> Vec<Coord> {
    let offset = normal * 0.5;
    let p0 = edge.p0 + offset;
    let pf = edge.pf + offset;
    let delta = pf - p0;
    let along_y = delta.x.abs() < delta.y.abs();
    let span = if along_y { delta.y } else { delta.x };
    let step = if span < 0.0 { -1.0 } else { 1.0 };
    let num_steps = span.abs().floor() as usize;

    let mut seen = HashSet::new();
    (0..=num_steps)
        .map(|k| {
            let t = k as Float * step;
            if span == 0.0 {
                p0
            } else if along_y {
                Point::new(p0.x + delta.x * t / delta.y, p0.y + t)
            } else {
                Point::new(p0.x + t, p0.y + delta.y * t / delta.x)
            }
        })
        .map(|p| (p.x.round() as isize, p.y.round() as isize))
        .filter(|&(x, y)| !shape.contains_site(x, y))
        .filter(|coord| seen.insert(*coord))
        .collect()
}
