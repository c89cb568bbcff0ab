//! Level layout
//!
//! Contains cell categories, rooms and their placement, corridor carving,
//! tile classification and the end-to-end generation pipeline.

mod cell;
mod corridor;
mod generation;
mod placer;
mod room;
mod tiles;

pub use cell::CellType;
pub use corridor::{Corridor, CorridorReport, carve_corridors};
pub use generation::{GeneratedLevel, LevelGenerator};
pub use placer::{RejectionPlacer, RoomPlacer};
pub use room::Room;
pub use tiles::{
    Archetype, Axis, CorridorTile, Mask, Neighborhood, Pattern, PatternLibrary, Rotation, Sides,
    TileClassification, TilePlacement, classify, classify_cell, encode_neighborhood,
};
