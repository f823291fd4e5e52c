use crate::prelude_crate::*;

// ------------------------------------------------------------------------- STRUCT: Extent

/// Grid size plus the row-major site numbering shared by masks and buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: usize,
    pub height: usize,
}

impl Extent {
    pub fn new(width: usize, height: usize) -> Self {
        Extent { width, height }
    }

    pub fn get_number_of_nodes(&self) -> usize {
        self.width * self.height
    }

    pub fn node_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// # Examples
    /// ```
    /// # use lbfoil::flow::Extent;
    /// let extent = Extent::new(10, 10);
    ///
    /// assert_eq!(extent.checked_node_index(3, 7).ok(), Some(73));
    /// assert!(extent.checked_node_index(-1, 0).is_err());
    /// assert!(extent.checked_node_index(0, 10).is_err());
    /// ```
    pub fn checked_node_index(&self, x: isize, y: isize) -> LbResult<usize> {
        let x = check_index(Axis::X, x, self.width)?;
        let y = check_index(Axis::Y, y, self.height)?;
        Ok(self.node_index(x, y))
    }

    /// Offset of the first of the `Q` values belonging to site `(x, y)`.
    pub fn site_index(&self, x: isize, y: isize) -> LbResult<usize> {
        Ok(self.checked_node_index(x, y)? * Q)
    }

    pub fn coordinates(&self, node: usize) -> (usize, usize) {
        (node % self.width, node / self.width)
    }

    /// Periodic neighbour of `(x, y)` displaced by `(dx, dy)`.
    pub fn wrapped(&self, x: usize, y: usize, dx: i32, dy: i32) -> (usize, usize) {
        let x = (x as isize + dx as isize).rem_euclid(self.width as isize) as usize;
        let y = (y as isize + dy as isize).rem_euclid(self.height as isize) as usize;
        (x, y)
    }
}

// ------------------------------------------------------------------ STRUCT: Distributions

/// Flat `width * height * Q` buffer laid out as `node * Q + direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Distributions {
    extent: Extent,
    f: Vec<Real>,
}

impl Distributions {
    pub fn new(extent: Extent) -> Self {
        Distributions {
            extent,
            f: vec![0.0; extent.get_number_of_nodes() * Q],
        }
    }

    /// Every site holds the same `node_f`.
    pub fn uniform(extent: Extent, node_f: &[Real; Q]) -> Self {
        let f = node_f
            .iter()
            .copied()
            .cycle()
            .take(extent.get_number_of_nodes() * Q)
            .collect();
        Distributions { extent, f }
    }

    pub fn get_extent(&self) -> Extent {
        self.extent
    }

    pub fn len(&self) -> usize {
        self.f.len()
    }

    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }

    /// Buffer offset of `(node, direction)`, `None` when either is out of range.
    fn offset(&self, node: usize, direction: usize) -> Option<usize> {
        if node >= self.extent.get_number_of_nodes() || direction >= Q {
            return None;
        }
        Some(node * Q + direction)
    }

    pub fn get(&self, node: usize, direction: usize) -> Option<Real> {
        self.offset(node, direction).map(|i| self.f[i])
    }

    pub fn set(&mut self, node: usize, direction: usize, value: Real) -> LbResult<()> {
        let i = self
            .offset(node, direction)
            .ok_or(LbError::Site { node, direction })?;
        self.f[i] = value;
        Ok(())
    }

    pub fn get_node(&self, node: usize) -> Option<&[Real]> {
        let start = self.offset(node, 0)?;
        Some(&self.f[start..start + Q])
    }

    pub fn get_node_mut(&mut self, node: usize) -> Option<&mut [Real]> {
        let start = self.offset(node, 0)?;
        Some(&mut self.f[start..start + Q])
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.f
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Real] {
        &mut self.f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_index() {
        let extent = Extent::new(10, 10);
        assert!(extent.site_index(-1, 0).is_err());
        assert!(extent.site_index(0, -1).is_err());
        assert!(extent.site_index(10, 0).is_err());
        assert!(extent.site_index(0, 10).is_err());
        [(0, 0), (9, 9), (5, 5), (9, 5), (5, 9), (1, 5), (5, 1)]
            .iter()
            .for_each(|&(x, y)| {
                let expected = (y as usize * 10 + x as usize) * Q;
                assert_eq!(extent.site_index(x, y).ok(), Some(expected));
            });
    }

    #[test]
    fn test_coordinates_and_wrapping() {
        let extent = Extent::new(4, 3);
        assert_eq!(extent.coordinates(extent.node_index(3, 2)), (3, 2));
        assert_eq!(extent.wrapped(0, 0, -1, -1), (3, 2));
        assert_eq!(extent.wrapped(3, 2, 1, 1), (0, 0));
        assert_eq!(extent.wrapped(1, 1, 1, -1), (2, 0));
    }

    #[test]
    fn test_uniform_buffer() {
        let extent = Extent::new(3, 2);
        let node_f = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut distributions = Distributions::uniform(extent, &node_f);
        assert_eq!(distributions.len(), 3 * 2 * Q);
        (0..extent.get_number_of_nodes()).for_each(|node| {
            assert_eq!(distributions.get_node(node), Some(&node_f[..]));
        });

        distributions.set(4, 2, 9.5).unwrap();
        assert_eq!(distributions.get(4, 2), Some(9.5));
        assert_eq!(distributions.as_slice()[4 * Q + 2], 9.5);
        distributions.get_node_mut(5).unwrap().fill(0.0);
        assert_eq!(distributions.get_node(5), Some(&[0.0; Q][..]));
    }

    #[test]
    fn test_accessors_reject_out_of_range_sites() {
        let mut distributions = Distributions::new(Extent::new(2, 1));
        distributions.set(1, 0, 7.0).unwrap();

        // Direction Q of site 0 must not alias the rest population of site 1.
        assert_eq!(distributions.get(0, Q), None);
        assert_eq!(distributions.get(0, 9), None);
        assert_eq!(distributions.get(1, 0), Some(7.0));
        assert_eq!(distributions.get(2, 0), None);
        assert!(matches!(
            distributions.set(0, Q, 1.0),
            Err(LbError::Site { node: 0, direction: 9 })
        ));
        assert!(distributions.set(2, 0, 1.0).is_err());
        assert_eq!(distributions.get(1, 0), Some(7.0));
        assert!(distributions.get_node(2).is_none());
        assert!(distributions.get_node_mut(2).is_none());
    }
}
