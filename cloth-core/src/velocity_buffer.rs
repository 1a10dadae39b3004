use crate::types::NodeId;
use glam::Vec3;

/// Per-node velocity accumulated during a single step.
///
/// The buffer is cleared at the start of every step and rebuilt from the
/// gravity and spring terms, so no momentum carries over between steps.
/// Velocities already include the `dt` factor: integrating is a plain
/// `position += velocity`.
///
/// `vel[i]` corresponds to node `i` of the grid the buffer was sized for.
#[derive(Clone, Debug)]
pub struct VelocityBuffer {
    vel: Vec<Vec3>,
}

impl VelocityBuffer {
    /// Creates a zeroed buffer for `len` nodes.
    pub fn with_len(len: usize) -> Self {
        Self {
            vel: vec![Vec3::ZERO; len],
        }
    }

    /// Sets every velocity to zero without changing the length.
    pub fn clear(&mut self) {
        self.vel.fill(Vec3::ZERO);
    }

    pub fn len(&self) -> usize {
        self.vel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vel.is_empty()
    }

    /// Adds `dv` to the velocity of node `id`.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn add(&mut self, id: NodeId, dv: Vec3) {
        self.vel[id] += dv;
    }

    #[inline]
    pub fn reset(&mut self, id: NodeId) {
        self.vel[id] = Vec3::ZERO;
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Vec3 {
        self.vel[id]
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.vel
    }
}
