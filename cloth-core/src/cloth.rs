//! The cloth simulation facade used by hosts.

use crate::{
    anchor::AnchorSet,
    config::{Config, ensure_finite},
    error::ClothError,
    grid::Grid,
    phases,
    topology::Topology,
    types::NodeId,
    velocity_buffer::VelocityBuffer,
};
use glam::Vec3;

/// A rectangular mass–spring cloth hanging from its two top corners.
///
/// Hosts build one with [`Cloth::new`], call [`Cloth::step`] once per frame
/// with the elapsed time, and read positions back through
/// [`Cloth::node_position`] or [`Cloth::edges`] for drawing.
#[derive(Clone, Debug)]
pub struct Cloth {
    cfg: Config,
    grid: Grid,
    topology: Topology,
    anchors: AnchorSet,
    vel: VelocityBuffer,
}

impl Cloth {
    /// Builds a flat `width x height` cloth in the `y = 0` plane with the
    /// two top corners pinned.
    ///
    /// ### Errors
    /// Returns a [`ClothError`] if the dimensions are empty or overflow, or
    /// if any scalar parameter is not finite.
    pub fn new(cfg: Config) -> Result<Self, ClothError> {
        let count = cfg.validate()?;

        let mut grid = Grid::flat(cfg.width, cfg.height);
        let anchors = AnchorSet::top_corners(&mut grid);
        let topology = Topology::build(&grid);
        let vel = VelocityBuffer::with_len(count);

        log::debug!(
            "cloth {}x{} built: {} nodes, {} spring entries, {} anchors",
            cfg.width,
            cfg.height,
            count,
            topology.entry_count(),
            anchors.len()
        );

        Ok(Self {
            cfg,
            grid,
            topology,
            anchors,
            vel,
        })
    }

    /// Advances the simulation by one tick of `dt` seconds.
    ///
    /// `dt` is not clamped; very large values can destabilize the cloth.
    /// A zero `dt` leaves every position unchanged. Validating `dt` (e.g.
    /// rejecting NaN) is up to the caller.
    pub fn step(&mut self, dt: f32) {
        phases::gravity_phase(&self.grid, &self.cfg, dt, &mut self.vel);
        phases::spring_phase(&self.grid, &self.topology, &self.cfg, dt, &mut self.vel);
        phases::integration_phase(&mut self.grid, &self.vel);
        phases::pin_phase(&self.grid, &mut self.vel);
    }

    /// Position of node `(x, y)`, or [`Vec3::ZERO`] if it is off the grid.
    ///
    /// The zero vector is only a drawing convenience; use
    /// [`Cloth::try_node_position`] to tell "absent" from "at the origin".
    pub fn node_position(&self, x: isize, y: isize) -> Vec3 {
        self.try_node_position(x, y).unwrap_or(Vec3::ZERO)
    }

    pub fn try_node_position(&self, x: isize, y: isize) -> Option<Vec3> {
        self.grid.position(x, y)
    }

    /// Index pairs of every horizontal `(x, y)-(x+1, y)` and vertical
    /// `(x, y)-(x, y+1)` edge of the grid.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        let (w, h) = (self.grid.width(), self.grid.height());
        (0..self.grid.len()).flat_map(move |id| {
            let (x, y) = (id % w, id / w);
            let right = (x + 1 < w).then_some((id, id + 1));
            let down = (y + 1 < h).then_some((id, id + w));
            right.into_iter().chain(down)
        })
    }

    /// Checks every position for NaN or infinity.
    ///
    /// ### Errors
    /// [`ClothError::Unstable`] naming the first non-finite node.
    pub fn check_finite(&self) -> Result<(), ClothError> {
        match self.grid.find_non_finite() {
            Some(node) => {
                log::warn!("cloth diverged at node {node}");
                Err(ClothError::Unstable { node })
            }
            None => Ok(()),
        }
    }

    /// Puts every node back in the flat initial layout with zero velocity.
    /// Dimensions, pins and tunables are kept.
    pub fn reset(&mut self) {
        self.grid.restore_flat();
        self.vel.clear();
        log::debug!("cloth {}x{} reset", self.cfg.width, self.cfg.height);
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.grid.nodes.iter().map(|n| n.pos)
    }

    /// Velocities computed by the last step (already scaled by its `dt`).
    pub fn velocities(&self) -> &[Vec3] {
        self.vel.as_slice()
    }

    pub fn position(&self, id: NodeId) -> Vec3 {
        self.grid.nodes[id].pos
    }

    pub fn is_pinned(&self, id: NodeId) -> bool {
        self.grid.nodes[id].pinned
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn node_count(&self) -> usize {
        self.grid.len()
    }

    pub fn gravity(&self) -> f32 {
        self.cfg.gravity
    }

    /// Sets gravity for subsequent steps.
    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), ClothError> {
        ensure_finite("gravity", gravity)?;
        self.cfg.gravity = gravity;
        Ok(())
    }

    pub fn stiffness(&self) -> f32 {
        self.cfg.stiffness
    }

    pub fn set_stiffness(&mut self, stiffness: f32) -> Result<(), ClothError> {
        ensure_finite("stiffness", stiffness)?;
        self.cfg.stiffness = stiffness;
        Ok(())
    }
}
