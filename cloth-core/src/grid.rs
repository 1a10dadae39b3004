use crate::types::NodeId;
use glam::Vec3;

/// A single point mass of the cloth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridNode {
    pub pos: Vec3,
    pub pinned: bool,
}

/// Row-major grid of nodes.
///
/// Node `(x, y)` lives at index `y * width + x` and starts at world
/// position `(x, 0, y)`: rows extend along +z, the cloth lies flat in the
/// `y = 0` plane.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    pub nodes: Vec<GridNode>,
}

impl GridNode {
    pub fn new(pos: Vec3) -> Self {
        Self { pos, pinned: false }
    }
}

impl Grid {
    /// Builds a flat, unpinned grid. Callers are expected to have validated
    /// that `width * height` is non-zero and does not overflow.
    pub fn flat(width: usize, height: usize) -> Self {
        let nodes = (0..width * height)
            .map(|i| GridNode::new(Self::rest_position(width, i)))
            .collect();
        Self {
            width,
            height,
            nodes,
        }
    }

    /// Initial position of node `id` in a grid of the given width.
    #[inline]
    pub fn rest_position(width: usize, id: NodeId) -> Vec3 {
        Vec3::new((id % width) as f32, 0.0, (id / width) as f32)
    }

    /// Moves every node back to its flat initial position. Pin flags are kept.
    pub fn restore_flat(&mut self) {
        let width = self.width;
        for (id, node) in self.nodes.iter_mut().enumerate() {
            node.pos = Self::rest_position(width, id);
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Linear index of `(x, y)`, or `None` if the coordinate is off the grid.
    #[inline]
    pub fn index(&self, x: isize, y: isize) -> Option<NodeId> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Grid coordinate of a linear index.
    #[inline]
    pub fn coords(&self, id: NodeId) -> (usize, usize) {
        (id % self.width, id / self.width)
    }

    /// Neighbor of `id` at offset `(dx, dy)`, if it is on the grid.
    pub fn offset(&self, id: NodeId, dx: isize, dy: isize) -> Option<NodeId> {
        let (x, y) = self.coords(id);
        self.index(x as isize + dx, y as isize + dy)
    }

    /// Current position of node `(x, y)`, or `None` off the grid.
    #[inline]
    pub fn position(&self, x: isize, y: isize) -> Option<Vec3> {
        self.index(x, y).map(|id| self.nodes[id].pos)
    }

    pub fn find_non_finite(&self) -> Option<NodeId> {
        self.nodes.iter().position(|n| !n.pos.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_grid_lays_rows_along_z() {
        let grid = Grid::flat(3, 2);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.nodes[0].pos, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(grid.nodes[2].pos, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(grid.nodes[4].pos, Vec3::new(1.0, 0.0, 1.0));
        assert!(grid.nodes.iter().all(|n| !n.pinned));
    }

    #[test]
    fn index_uses_width_for_rows_on_non_square_grids() {
        let grid = Grid::flat(4, 2);
        assert_eq!(grid.index(3, 1), Some(7));
        assert_eq!(grid.coords(7), (3, 1));
        assert_eq!(grid.nodes[7].pos, Vec3::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn out_of_bounds_lookups_are_absent() {
        let grid = Grid::flat(3, 3);
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(0, -1), None);
        assert_eq!(grid.index(3, 0), None);
        assert_eq!(grid.index(0, 3), None);
        assert_eq!(grid.position(5, 5), None);
        assert_eq!(grid.offset(0, -2, 0), None);
        assert_eq!(grid.offset(0, 2, 2), Some(8));
    }

    #[test]
    fn restore_flat_keeps_pins() {
        let mut grid = Grid::flat(2, 2);
        grid.nodes[0].pinned = true;
        grid.nodes[3].pos = Vec3::new(9.0, -4.0, 1.0);

        grid.restore_flat();

        assert!(grid.nodes[0].pinned);
        assert_eq!(grid.nodes[3].pos, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn find_non_finite_reports_first_bad_node() {
        let mut grid = Grid::flat(3, 1);
        assert_eq!(grid.find_non_finite(), None);
        grid.nodes[2].pos.y = f32::INFINITY;
        grid.nodes[1].pos.x = f32::NAN;
        assert_eq!(grid.find_non_finite(), Some(1));
    }
}
