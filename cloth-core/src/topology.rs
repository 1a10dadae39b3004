//! Precomputed spring adjacency.
//!
//! The neighbor relation of a grid never changes after it is built, so it
//! is resolved once into a flat arena of [`Neighbor`] entries. Node `i`
//! owns the slice `entries[offsets[i]..offsets[i + 1]]`.

use crate::{
    grid::Grid,
    types::{NodeId, SpringKind},
};

/// One spring endpoint as seen from the node that owns the entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub id: NodeId,
    pub kind: SpringKind,
}

/// Flat adjacency table covering structural, diagonal and bend springs.
#[derive(Clone, Debug)]
pub struct Topology {
    entries: Vec<Neighbor>,
    offsets: Vec<usize>,
}

impl Topology {
    /// Resolves every in-bounds neighbor of every node in `grid`.
    ///
    /// Entries of a node are grouped by [`SpringKind`] in the order
    /// structural, diagonal, bend. Off-grid offsets are simply skipped.
    pub fn build(grid: &Grid) -> Self {
        let n = grid.len();
        let mut entries = Vec::with_capacity(n * 12);
        let mut offsets = Vec::with_capacity(n + 1);

        for id in 0..n {
            offsets.push(entries.len());
            for kind in SpringKind::ALL {
                for (dx, dy) in kind.offsets() {
                    if let Some(other) = grid.offset(id, dx, dy) {
                        entries.push(Neighbor { id: other, kind });
                    }
                }
            }
        }
        offsets.push(entries.len());

        Self { entries, offsets }
    }

    /// All neighbors of `id`.
    ///
    /// ### Panics
    /// Panics if `id` is not a node of the grid this table was built from.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        &self.entries[self.offsets[id]..self.offsets[id + 1]]
    }

    /// Neighbors of `id` of a single spring class.
    pub fn neighbors_of_kind(
        &self,
        id: NodeId,
        kind: SpringKind,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors(id)
            .iter()
            .filter(move |n| n.kind == kind)
            .map(|n| n.id)
    }

    pub fn count(&self, id: NodeId, kind: SpringKind) -> usize {
        self.neighbors_of_kind(id, kind).count()
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of directed entries (each spring appears twice).
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
