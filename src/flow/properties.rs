use super::{Distributions, Extent};
use crate::prelude_crate::*;
use rayon::prelude::*;

// ---------------------------------------------------------------- STRUCT: NodeProperties

/// Macroscopic density and velocity of a site (or of the whole grid).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeProperties {
    pub rho: Float,
    pub ux: Float,
    pub uy: Float,
}

/// Grid-wide aggregate: mean density and mass-weighted mean velocity.
pub type SystemProperties = NodeProperties;

impl NodeProperties {
    pub fn new(rho: Float, ux: Float, uy: Float) -> Self {
        NodeProperties { rho, ux, uy }
    }

    /// Velocity is zero wherever the density is.
    fn from_moments(rho: Float, jx: Float, jy: Float) -> Self {
        if rho == 0.0 {
            return NodeProperties::new(rho, 0.0, 0.0);
        }
        NodeProperties::new(rho, jx / rho, jy / rho)
    }

    /// # Examples
    /// ```
    /// # use lbfoil::flow::NodeProperties;
    /// let f = [0.0, 0.0, 0.0, 0.75, 0.0, 0.0, 0.0, 0.25, 0.0];
    /// let properties = NodeProperties::from_distributions(&f);
    ///
    /// assert_eq!(properties, NodeProperties::new(1.0, 0.5, 0.0));
    /// assert_eq!(NodeProperties::from_distributions(&[0.0; 9]), NodeProperties::default());
    /// ```
    pub fn from_distributions(f: &[Real]) -> Self {
        let (rho, jx, jy) = compute_moments(f);
        NodeProperties::from_moments(rho, jx, jy)
    }

    pub fn get_velocity_magnitude(&self) -> Float {
        (self.ux * self.ux + self.uy * self.uy).sqrt()
    }
}

/// Zeroth and first moments `(rho, rho * ux, rho * uy)` of one site.
fn compute_moments(f: &[Real]) -> (Float, Float, Float) {
    let c = velocity_set::get_c();
    f.iter()
        .zip(c.iter())
        .fold((0.0, 0.0, 0.0), |(rho, jx, jy), (&f_i, c_i)| {
            let f_i = f_i as Float;
            (rho + f_i, jx + f_i * c_i[0] as Float, jy + f_i * c_i[1] as Float)
        })
}

// ------------------------------------------------------------------ STRUCT: PropertyCalc

/// Macroscopic properties of every site, reduced from a distribution buffer.
#[derive(Debug, Clone)]
pub struct PropertyCalc {
    extent: Extent,
    nodes: Vec<NodeProperties>,
    system: SystemProperties,
}

impl PropertyCalc {
    pub fn new(distributions: &Distributions) -> Self {
        let extent = distributions.get_extent();
        let mut property_calc = PropertyCalc {
            extent,
            nodes: vec![NodeProperties::default(); extent.get_number_of_nodes()],
            system: SystemProperties::default(),
        };
        property_calc.recompute(distributions);
        property_calc
    }

    /// Refreshes every site from `distributions`, which must share this extent.
    ///
    /// Runs on the current rayon pool.
    pub fn recompute(&mut self, distributions: &Distributions) {
        let (rho, jx, jy) = self
            .nodes
            .par_iter_mut()
            .zip(distributions.as_slice().par_chunks_exact(Q))
            .map(|(node, f)| {
                let (rho, jx, jy) = compute_moments(f);
                *node = NodeProperties::from_moments(rho, jx, jy);
                (rho, jx, jy)
            })
            .reduce(
                || (0.0, 0.0, 0.0),
                |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2),
            );
        let num_nodes = self.nodes.len().max(1) as Float;
        self.system = NodeProperties::from_moments(rho / num_nodes, jx / num_nodes, jy / num_nodes);
    }

    pub fn get_extent(&self) -> Extent {
        self.extent
    }

    pub fn get_properties(&self) -> SystemProperties {
        self.system
    }

    /// # Examples
    /// ```
    /// # use lbfoil::flow::{Distributions, Extent, PropertyCalc};
    /// # use lbfoil::kernel::equilibrium_distribution;
    /// # use lbfoil::flow::NodeProperties;
    /// let f_eq = equilibrium_distribution(&NodeProperties::new(1.0, 0.1, 0.0)).map(|f| f as f32);
    /// let distributions = Distributions::uniform(Extent::new(10, 10), &f_eq);
    /// let property_calc = PropertyCalc::new(&distributions);
    ///
    /// let properties = property_calc.get_node_properties(3, 7).unwrap();
    /// assert!((properties.rho - 1.0).abs() < 1e-6);
    /// assert!((properties.ux - 0.1).abs() < 1e-6);
    /// assert!(property_calc.get_node_properties(10, 0).is_err());
    /// assert!(property_calc.get_node_properties(0, -1).is_err());
    /// ```
    pub fn get_node_properties(&self, x: isize, y: isize) -> LbResult<NodeProperties> {
        let node = self.extent.checked_node_index(x, y)?;
        Ok(self.nodes[node])
    }

    pub fn get_nodes(&self) -> &[NodeProperties] {
        &self.nodes
    }

    pub(crate) fn get_node(&self, node: usize) -> NodeProperties {
        self.nodes[node]
    }
}
