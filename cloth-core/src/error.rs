use crate::types::NodeId;
use thiserror::Error;

/// Errors reported by the cloth simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothError {
    #[error("cloth dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cloth of {width}x{height} nodes does not fit in memory")]
    NodeCountOverflow { width: usize, height: usize },

    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f32 },

    #[error("node {node} has a non-finite position; the integration diverged")]
    Unstable { node: NodeId },
}
