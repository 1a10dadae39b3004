use crate::{grid::Grid, types::NodeId};
use glam::Vec3;

/// A pinned node together with the position it was pinned at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub node: NodeId,
    pub rest: Vec3,
}

#[derive(Clone, Debug, Default)]
pub struct AnchorSet {
    pub points: Vec<Anchor>,
}

impl AnchorSet {
    /// Pins the given nodes of `grid` and records their current positions.
    ///
    /// Duplicate ids are recorded once.
    pub fn pin_nodes(grid: &mut Grid, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let mut points: Vec<Anchor> = Vec::new();
        for node in nodes {
            if points.iter().any(|a| a.node == node) {
                continue;
            }
            let n = &mut grid.nodes[node];
            n.pinned = true;
            points.push(Anchor { node, rest: n.pos });
        }
        Self { points }
    }

    /// Pins the two top corners `(0, 0)` and `(width - 1, 0)`.
    pub fn top_corners(grid: &mut Grid) -> Self {
        let right = grid.width() - 1;
        Self::pin_nodes(grid, [0, right])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.points.iter().any(|a| a.node == node)
    }
}
