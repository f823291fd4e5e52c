use super::Lattice;
use crate::prelude_crate::*;
use rayon::prelude::*;

impl Lattice {
    /// Relaxes fluid sites toward equilibrium and reflects obstacle sites.
    /// Boundary sites are left untouched.
    pub(crate) fn collide(&mut self) {
        let chunk_len = self.config.get_chunk_len(self.extent.get_number_of_nodes());
        let omega = self.omega;
        let property_calc = &self.property_calc;
        let is_obstacle = &self.is_obstacle;
        let is_boundary = &self.is_boundary;
        let f = self.f.as_mut_slice();
        self.pool.install(|| {
            f.par_chunks_mut(chunk_len * Q)
                .enumerate()
                .for_each(|(chunk, f_chunk)| {
                    let first_node = chunk * chunk_len;
                    f_chunk
                        .chunks_exact_mut(Q)
                        .enumerate()
                        .for_each(|(offset, f_node)| {
                            let node = first_node + offset;
                            match SiteType::classify(is_obstacle[node], is_boundary[node]) {
                                SiteType::Obstacle => kernel::bounce_back(f_node),
                                SiteType::Boundary => {}
                                SiteType::Fluid => {
                                    let properties = property_calc.get_node(node);
                                    kernel::bgk_collision(f_node, &properties, omega);
                                }
                            }
                        });
                });
        });
    }
}
