/// Identifier for a node in a [`crate::grid::Grid`].
///
/// This is the row-major linear index `y * width + x`, and is only
/// meaningful within the lifetime of a given grid.
pub type NodeId = usize;

/// Topology class of a spring between two nodes.
///
/// The rest length depends only on the class, never on the distance the
/// two nodes happened to have when the grid was built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpringKind {
    /// Axis-aligned neighbor one step away.
    Structural,
    /// Diagonal neighbor one step away on both axes.
    Diagonal,
    /// Axis-aligned neighbor two steps away; resists folding.
    Bend,
}

impl SpringKind {
    pub const ALL: [SpringKind; 3] = [
        SpringKind::Structural,
        SpringKind::Diagonal,
        SpringKind::Bend,
    ];

    /// Rest length of a spring of this class, in grid units.
    #[inline]
    pub fn rest_length(self) -> f32 {
        match self {
            SpringKind::Structural => 1.0,
            SpringKind::Diagonal => std::f32::consts::SQRT_2,
            SpringKind::Bend => 2.0,
        }
    }

    /// Grid offsets `(dx, dy)` of the neighbors of this class.
    pub fn offsets(self) -> [(isize, isize); 4] {
        match self {
            SpringKind::Structural => [(1, 0), (0, 1), (-1, 0), (0, -1)],
            SpringKind::Diagonal => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
            SpringKind::Bend => [(2, 0), (0, 2), (-2, 0), (0, -2)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_rest_length_matches_unit_diagonal() {
        let diag = glam::Vec3::new(1.0, 0.0, 1.0).length();
        assert_eq!(SpringKind::Diagonal.rest_length(), diag);
    }

    #[test]
    fn offsets_are_distinct_per_kind() {
        for kind in SpringKind::ALL {
            let offs = kind.offsets();
            for (i, a) in offs.iter().enumerate() {
                for b in &offs[i + 1..] {
                    assert_ne!(a, b, "{kind:?} has a duplicated offset");
                }
            }
        }
    }
}
