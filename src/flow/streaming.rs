use super::Lattice;
use crate::prelude_crate::*;
use rayon::prelude::*;

impl Lattice {
    /// Periodic pull streaming into the scratch buffer, which then becomes current.
    ///
    /// Boundary sites keep their own values instead of pulling from upstream.
    pub(crate) fn stream(&mut self) {
        let extent = self.extent;
        let chunk_rows = self.config.get_chunk_len(extent.height);
        let c = velocity_set::get_c();
        let f = self.f.as_slice();
        let is_boundary = &self.is_boundary;
        let f_stream = self.f_stream.as_mut_slice();
        self.pool.install(|| {
            f_stream
                .par_chunks_mut(chunk_rows * extent.width * Q)
                .enumerate()
                .for_each(|(chunk, f_chunk)| {
                    let first_node = chunk * chunk_rows * extent.width;
                    f_chunk
                        .chunks_exact_mut(Q)
                        .enumerate()
                        .for_each(|(offset, f_node)| {
                            let node = first_node + offset;
                            if is_boundary[node] {
                                f_node.copy_from_slice(&f[node * Q..(node + 1) * Q]);
                                return;
                            }
                            let (x, y) = extent.coordinates(node);
                            f_node.iter_mut().enumerate().for_each(|(i, f_i)| {
                                let (x_src, y_src) = extent.wrapped(x, y, -c[i][0], -c[i][1]);
                                *f_i = f[extent.node_index(x_src, y_src) * Q + i];
                            });
                        });
                });
        });
        std::mem::swap(&mut self.f, &mut self.f_stream);
    }
}
