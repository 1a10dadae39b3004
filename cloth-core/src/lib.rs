//! Mass–spring cloth simulation library.
//!
//! Main components:
//! - [`cloth`] — the [`cloth::Cloth`] facade: build, step, query.
//! - [`grid`] — node positions, pin flags and grid coordinates.
//! - [`topology`] — precomputed structural / diagonal / bend adjacency.
//! - [`anchor`] — pinned nodes and their recorded rest positions.
//! - [`velocity_buffer`] — per-step velocity accumulation.
//! - [`phases`] — gravity, spring, integration and pin phases of a step.
//! - [`config`] — construction parameters and tunables.
//! - [`error`] — [`error::ClothError`].
//! - [`types`] — shared type aliases and spring classes.

pub mod anchor;
pub mod cloth;
pub mod config;
pub mod error;
pub mod grid;
pub mod phases;
pub mod topology;
pub mod types;
pub mod velocity_buffer;

pub use cloth::Cloth;
pub use config::Config;
pub use error::ClothError;
