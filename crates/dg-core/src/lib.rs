//! dg-core: level generation core
//!
//! Places rooms, links them into a sparse graph, carves corridors between
//! linked rooms across a shared grid and classifies the finished grid into
//! placement directives for a renderer.
//!
//! Everything here is pure data generation. Nothing in this crate draws,
//! spawns or otherwise materializes the result.

pub mod config;
pub mod dungeon;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod path;

mod consts;
mod rng;

pub use config::{CorridorCosts, GeneratorConfig};
pub use consts::*;
pub use error::{ConfigError, GenerationError, GraphError, GridError};
pub use geometry::{Coord, Direction, Point};
pub use grid::SpatialGrid;
pub use rng::LevelRng;
