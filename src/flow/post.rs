use super::{Lattice, PropertyCalc};
use crate::geometry::{Point, Polygon, ShapeAdjacentCoords, Vector};
use crate::prelude_crate::*;
use rayon::prelude::*;

// -------------------------------------------------------------- STRUCT: EdgePressureCalc

/// Density-based pressure on each edge of a shape, sampled just outside it.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePressureCalc {
    edge_midpoints: Vec<Point>,
    edge_pressures: Vec<Float>,
    edge_pressure_vectors: Vec<Vector>,
    net_pressure: Vector,
}

impl EdgePressureCalc {
    /// Each edge's pressure is the mean density over its in-grid adjacent sites
    /// times the edge length, pushing against the outward normal.
    ///
    /// # Examples
    /// ```
    /// # use lbfoil::flow::{EdgePressureCalc, Lattice, Parameters};
    /// # use lbfoil::geometry::Polygon;
    /// # use lbfoil::Config;
    /// let lattice = Lattice::new(Config::default(), Parameters::new(20, 20)).unwrap();
    /// let square = Polygon::from_coords(&[(5.0, 5.0), (9.0, 5.0), (9.0, 9.0), (5.0, 9.0)]);
    /// let calc = EdgePressureCalc::new(lattice.get_property_calc(), &square);
    ///
    /// // Uniform density: the edges balance out.
    /// assert!((calc.get_edge_pressures()[0] - 4.0).abs() < 1e-5);
    /// assert!(calc.get_net_pressure().norm() < 1e-5);
    /// ```
    pub fn new(property_calc: &PropertyCalc, shape: &Polygon) -> Self {
        let adjacent_coords = ShapeAdjacentCoords::new(shape);
        let edge_pressures = shape
            .get_edges()
            .iter()
            .zip(adjacent_coords.get_adjacents().iter())
            .map(|(edge, coords)| {
                let densities = coords
                    .iter()
                    .filter_map(|&(x, y)| property_calc.get_node_properties(x, y).ok())
                    .map(|properties| properties.rho)
                    .collect::<Vec<Float>>();
                if densities.is_empty() {
                    return 0.0;
                }
                let rho_mean = densities.iter().sum::<Float>() / densities.len() as Float;
                rho_mean * edge.length()
            })
            .collect::<Vec<Float>>();
        let edge_midpoints = shape
            .get_edges()
            .iter()
            .map(|edge| edge.midpoint())
            .collect();
        let edge_pressure_vectors = shape
            .get_edge_normals()
            .iter()
            .zip(edge_pressures.iter())
            .map(|(normal, &pressure)| -(normal * pressure))
            .collect::<Vec<Vector>>();
        let net_pressure = edge_pressure_vectors.iter().sum();
        EdgePressureCalc {
            edge_midpoints,
            edge_pressures,
            edge_pressure_vectors,
            net_pressure,
        }
    }

    pub fn get_edge_midpoints(&self) -> &[Point] {
        &self.edge_midpoints
    }

    pub fn get_edge_pressures(&self) -> &[Float] {
        &self.edge_pressures
    }

    pub fn get_edge_pressure_vectors(&self) -> &[Vector] {
        &self.edge_pressure_vectors
    }

    pub fn get_net_pressure(&self) -> &Vector {
        &self.net_pressure
    }
}

// ----------------------------------------------------------------------------- FUNCTIONS

/// Mean density over fluid sites, `0.0` when the lattice has none.
pub fn compute_mean_density(lattice: &Lattice) -> Float {
    let (rho_sum, number_of_fluid_nodes) = lattice.pool.install(|| {
        lattice
            .get_property_calc()
            .get_nodes()
            .par_iter()
            .enumerate()
            .filter(|(node, _)| lattice.get_node_type(*node) == SiteType::Fluid)
            .map(|(_, properties)| (properties.rho, 1_usize))
            .reduce(|| (0.0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
    });
    if number_of_fluid_nodes == 0 {
        return 0.0;
    }
    rho_sum / number_of_fluid_nodes as Float
}
