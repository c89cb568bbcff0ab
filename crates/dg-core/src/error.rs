//! Error types for level generation
//!
//! An unreachable corridor target is not an error: the pathfinder reports it
//! as `None` and the caller skips that corridor.

use thiserror::Error;

use crate::geometry::Coord;
use crate::graph::VertexId;

/// Grid access outside the declared extent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("position {pos} is outside the grid (size {width}x{height}, offset {offset})")]
    OutOfBounds {
        pos: Coord,
        width: i32,
        height: i32,
        offset: Coord,
    },
}

/// Graph and spanning tree precondition violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("cannot build a spanning tree from an empty edge list")]
    EmptyEdgeList,

    #[error("unknown vertex {0:?}")]
    UnknownVertex(VertexId),
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Anything that can stop a generation run
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Grid(#[from] GridError),
}
