//! Simulation phases of a single cloth step.
//!
//! One step runs, in order:
//! 1. [`gravity_phase`] — clears the [`VelocityBuffer`] and seeds every
//!    free node with the damped gravity term.
//! 2. [`spring_phase`] — every node accumulates the Hookean pull of all its
//!    structural, diagonal and bend neighbors.
//! 3. [`integration_phase`] — free nodes move by their velocity.
//! 4. [`pin_phase`] — pinned nodes have their velocity zeroed.
//!
//! Velocities are rebuilt from scratch each step, so the cloth behaves as
//! an overdamped spring system without momentum.

use crate::{config::Config, grid::Grid, topology::Topology, velocity_buffer::VelocityBuffer};
use glam::Vec3;

/// Resets all velocities and applies gravity to free nodes.
///
/// Each non-pinned node receives `(0, -gravity * gravity_scale * dt, 0)`.
/// Pinned nodes are left at zero.
///
/// ### Parameters
/// - `grid` - Current grid; only pin flags are read.
/// - `cfg` - Supplies `gravity` and `gravity_scale`.
/// - `dt` - Elapsed time for this step, in seconds.
/// - `vel` - Velocity buffer; must have one entry per node.
pub fn gravity_phase(grid: &Grid, cfg: &Config, dt: f32, vel: &mut VelocityBuffer) {
    vel.clear();
    let dv = Vec3::new(0.0, -cfg.gravity * cfg.gravity_scale * dt, 0.0);
    for (id, node) in grid.nodes.iter().enumerate() {
        if !node.pinned {
            vel.add(id, dv);
        }
    }
}

/// Accumulates spring forces into the velocity buffer.
///
/// For every node and every neighbor listed in `topology`:
///
/// 1. `diff = self.pos - neighbor.pos`, `dist = |diff|`.
/// 2. If `dist` is below `cfg.min_spring_length` the pair is skipped, as
///    the direction `diff / dist` is undefined for coincident nodes.
/// 3. Otherwise `stiffness * (rest - dist) * (diff / dist) * dt` is added
///    to the node's velocity, where `rest` comes from the spring class.
///
/// Pinned nodes accumulate too; [`pin_phase`] discards their share.
///
/// ### Parameters
/// - `grid` - Current node positions.
/// - `topology` - Adjacency table built from the same grid.
/// - `cfg` - Supplies `stiffness` and `min_spring_length`.
/// - `dt` - Elapsed time for this step, in seconds.
/// - `vel` - Velocity buffer seeded by [`gravity_phase`].
pub fn spring_phase(
    grid: &Grid,
    topology: &Topology,
    cfg: &Config,
    dt: f32,
    vel: &mut VelocityBuffer,
) {
    let k_dt = cfg.stiffness * dt;
    for (id, node) in grid.nodes.iter().enumerate() {
        for n in topology.neighbors(id) {
            let diff = node.pos - grid.nodes[n.id].pos;
            let dist = diff.length();
            if dist < cfg.min_spring_length {
                continue;
            }
            let stretch = n.kind.rest_length() - dist;
            vel.add(id, (diff / dist) * (stretch * k_dt));
        }
    }
}

/// Moves every free node by its accumulated velocity.
///
/// Velocities already carry the `dt` factor, so this is a single explicit
/// Euler update: `pos += vel`.
pub fn integration_phase(grid: &mut Grid, vel: &VelocityBuffer) {
    for (id, node) in grid.nodes.iter_mut().enumerate() {
        if !node.pinned {
            node.pos += vel.get(id);
        }
    }
}

/// Zeroes the velocity of pinned nodes.
///
/// Their positions are never written by [`integration_phase`], which keeps
/// them at the position they were pinned at.
pub fn pin_phase(grid: &Grid, vel: &mut VelocityBuffer) {
    for (id, node) in grid.nodes.iter().enumerate() {
        if node.pinned {
            vel.reset(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorSet;

    fn setup(width: usize, height: usize) -> (Grid, Topology, VelocityBuffer) {
        let mut grid = Grid::flat(width, height);
        AnchorSet::top_corners(&mut grid);
        let topo = Topology::build(&grid);
        let vel = VelocityBuffer::with_len(grid.len());
        (grid, topo, vel)
    }

    #[test]
    fn gravity_phase_skips_pinned_nodes() {
        let (grid, _, mut vel) = setup(3, 2);
        let cfg = Config::default().with_gravity(1.0);

        vel.add(0, Vec3::ONE);
        gravity_phase(&grid, &cfg, 0.5, &mut vel);

        assert_eq!(vel.get(0), Vec3::ZERO);
        assert_eq!(vel.get(2), Vec3::ZERO);
        let expected = Vec3::new(0.0, -1.0 * 0.7 * 0.5, 0.0);
        for id in [1, 3, 4, 5] {
            assert_eq!(vel.get(id), expected);
        }
    }

    #[test]
    fn spring_phase_at_rest_adds_nothing() {
        let (grid, topo, mut vel) = setup(4, 4);
        let cfg = Config::default();

        spring_phase(&grid, &topo, &cfg, 0.016, &mut vel);

        for v in vel.as_slice() {
            assert!(v.length() < 1e-6, "unexpected spring force {v:?}");
        }
    }

    #[test]
    fn stretched_structural_spring_pulls_nodes_together() {
        let mut grid = Grid::flat(2, 1);
        grid.nodes[1].pos = Vec3::new(3.0, 0.0, 0.0);
        let topo = Topology::build(&grid);
        let mut vel = VelocityBuffer::with_len(grid.len());
        let cfg = Config::default();

        spring_phase(&grid, &topo, &cfg, 0.1, &mut vel);

        // rest 1, dist 3: 5 * (1 - 3) * dir * 0.1 = -1 along diff.
        assert!((vel.get(0) - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
        assert!((vel.get(1) - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn coincident_nodes_are_skipped() {
        let mut grid = Grid::flat(2, 1);
        grid.nodes[1].pos = grid.nodes[0].pos;
        let topo = Topology::build(&grid);
        let mut vel = VelocityBuffer::with_len(grid.len());

        spring_phase(&grid, &topo, &Config::default(), 0.1, &mut vel);

        assert_eq!(vel.get(0), Vec3::ZERO);
        assert_eq!(vel.get(1), Vec3::ZERO);
    }

    #[test]
    fn node_at_origin_is_a_real_neighbor() {
        // Node 1 sits on the origin; it must still be pushed away from node 0.
        let mut grid = Grid::flat(2, 1);
        grid.nodes[0].pos = Vec3::new(0.5, 0.0, 0.0);
        grid.nodes[1].pos = Vec3::ZERO;
        let topo = Topology::build(&grid);
        let mut vel = VelocityBuffer::with_len(grid.len());

        spring_phase(&grid, &topo, &Config::default(), 0.1, &mut vel);

        assert!(vel.get(0).x > 0.0);
        assert!(vel.get(1).x < 0.0);
    }

    #[test]
    fn integration_and_pin_phase_leave_pinned_nodes_in_place() {
        let (mut grid, _, mut vel) = setup(3, 1);
        for id in 0..3 {
            vel.add(id, Vec3::new(0.0, -1.0, 0.0));
        }

        integration_phase(&mut grid, &vel);
        pin_phase(&grid, &mut vel);

        assert_eq!(grid.nodes[0].pos, Vec3::ZERO);
        assert_eq!(grid.nodes[2].pos, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(grid.nodes[1].pos, Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(vel.get(0), Vec3::ZERO);
        assert_eq!(vel.get(1), Vec3::new(0.0, -1.0, 0.0));
    }
}
