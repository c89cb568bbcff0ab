//! Tile classification ("autotiling")
//!
//! Turns a finished occupancy grid into placement directives. Corridor cells
//! get an archetype and rotation from their 3x3 neighbourhood; room cells get
//! wall and door flags per side, and concave corners next to corridors get a
//! pillar.
//!
//! Neighbourhood slots are row-major from the north-west corner:
//!
//! ```text
//! 0 1 2     NW N  NE
//! 3 4 5  =  W  C  E
//! 6 7 8     SW S  SE
//! ```

use std::sync::OnceLock;

use bitflags::bitflags;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::debug;

use crate::geometry::{Coord, Direction};
use crate::grid::SpatialGrid;

use super::cell::CellType;

bitflags! {
    /// Set of cardinal sides of a cell
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Sides: u8 {
        const NORTH = 0x01;
        const EAST = 0x02;
        const SOUTH = 0x04;
        const WEST = 0x08;
    }
}

impl Sides {
    /// Quarter turn clockwise: north becomes east, east becomes south
    pub const fn rotate_cw(self) -> Sides {
        let bits = self.bits();
        Sides::from_bits_truncate((bits << 1) | (bits >> 3))
    }

    pub const fn rotated(self, rotation: Rotation) -> Sides {
        let mut sides = self;
        let mut turns = rotation.quarter_turns();
        while turns > 0 {
            sides = sides.rotate_cw();
            turns -= 1;
        }
        sides
    }
}

impl Serialize for Sides {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Sides {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Sides::from_bits_truncate(bits))
    }
}

/// Per-slot neighbourhood code
///
/// `Any` appears only in patterns, never in an encoded neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Mask {
    Open = 0,
    Solid = 2,
    Any = 5,
}

impl Mask {
    /// Code for a grid lookup; out of bounds encodes as `Open`
    pub fn of(cell: Option<&CellType>) -> Mask {
        match cell {
            Some(cell) if cell.is_solid() => Mask::Solid,
            _ => Mask::Open,
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Does this pattern slot accept `actual`
    pub fn accepts(self, actual: Mask) -> bool {
        self == Mask::Any || self == actual
    }
}

/// Encoded 3x3 neighbourhood
pub type Neighborhood = [Mask; 9];

const CENTER: usize = 4;

/// Slot index of a cardinal neighbour
const fn slot(dir: Direction) -> usize {
    match dir {
        Direction::North => 1,
        Direction::West => 3,
        Direction::East => 5,
        Direction::South => 7,
    }
}

/// Encode the 3x3 block centred on `pos`
pub fn encode_neighborhood(grid: &SpatialGrid<CellType>, pos: Coord) -> Neighborhood {
    let mut out = [Mask::Open; 9];
    for dy in -1..=1 {
        for dx in -1..=1 {
            let i = ((dy + 1) * 3 + (dx + 1)) as usize;
            out[i] = Mask::of(grid.get(pos + Coord::new(dx, dy)));
        }
    }
    out
}

/// Named corridor shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Archetype {
    Straight,
    Corner,
    TJunction,
    Crossroads,
    /// Single connection; lowest priority
    DeadEnd,
}

impl Archetype {
    /// Priority order used when matching
    pub const ALL: [Archetype; 5] = [
        Archetype::Straight,
        Archetype::Corner,
        Archetype::TJunction,
        Archetype::Crossroads,
        Archetype::DeadEnd,
    ];

    /// Connected sides before any rotation
    pub const fn base_connections(self) -> Sides {
        match self {
            Archetype::Straight => Sides::NORTH.union(Sides::SOUTH),
            Archetype::Corner => Sides::NORTH.union(Sides::EAST),
            Archetype::TJunction => Sides::WEST.union(Sides::NORTH).union(Sides::EAST),
            Archetype::Crossroads => Sides::all(),
            Archetype::DeadEnd => Sides::NORTH,
        }
    }

    /// Unrotated pattern: centre and cardinals fixed, diagonals wildcard
    pub fn base_pattern(self) -> Neighborhood {
        let mut slots = [Mask::Any; 9];
        slots[CENTER] = Mask::Solid;
        let connected = self.base_connections();
        for dir in Direction::ALL {
            slots[slot(dir)] = if connected.contains(dir.side()) {
                Mask::Solid
            } else {
                Mask::Open
            };
        }
        slots
    }
}

/// Clockwise rotation applied to an archetype's base pattern
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub const fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }
}

/// Orientation of a straight run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Rotate a 3x3 pattern a quarter turn clockwise
fn rotate_cw(slots: &Neighborhood) -> Neighborhood {
    let mut out = [Mask::Open; 9];
    for r in 0..3 {
        for c in 0..3 {
            out[r * 3 + c] = slots[(2 - c) * 3 + r];
        }
    }
    out
}

/// One entry of the pattern library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub archetype: Archetype,
    pub rotation: Rotation,
    pub slots: Neighborhood,
}

impl Pattern {
    pub fn matches(&self, neighborhood: &Neighborhood) -> bool {
        self.slots
            .iter()
            .zip(neighborhood)
            .all(|(want, got)| want.accepts(*got))
    }
}

/// Ordered set of rotation-derived patterns
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    /// Build from every archetype and its four rotations, dropping
    /// rotations that reproduce an earlier pattern
    pub fn build() -> Self {
        let mut patterns: Vec<Pattern> = Vec::new();
        for archetype in Archetype::ALL {
            let mut slots = archetype.base_pattern();
            for rotation in Rotation::ALL {
                if !patterns.iter().any(|p| p.slots == slots) {
                    patterns.push(Pattern {
                        archetype,
                        rotation,
                        slots,
                    });
                }
                slots = rotate_cw(&slots);
            }
        }
        Self { patterns }
    }

    /// Shared library, built on first use
    pub fn standard() -> &'static PatternLibrary {
        static LIBRARY: OnceLock<PatternLibrary> = OnceLock::new();
        LIBRARY.get_or_init(PatternLibrary::build)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// First pattern in priority order that matches
    pub fn find(&self, neighborhood: &Neighborhood) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.matches(neighborhood))
    }
}

/// Corridor archetype chosen for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorridorTile {
    pub archetype: Archetype,
    pub rotation: Rotation,
}

impl CorridorTile {
    /// Sides this tile opens onto
    pub fn connections(&self) -> Sides {
        self.archetype.base_connections().rotated(self.rotation)
    }

    /// Axis of a straight run; `None` for every other archetype
    pub fn axis(&self) -> Option<Axis> {
        match (self.archetype, self.rotation) {
            (Archetype::Straight, Rotation::Deg0 | Rotation::Deg180) => Some(Axis::Vertical),
            (Archetype::Straight, Rotation::Deg90 | Rotation::Deg270) => Some(Axis::Horizontal),
            _ => None,
        }
    }
}

/// Directives for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TilePlacement {
    pub corridor: Option<CorridorTile>,
    pub walls: Sides,
    pub doors: Sides,
}

impl TilePlacement {
    pub fn is_empty(&self) -> bool {
        self.corridor.is_none() && self.walls.is_empty() && self.doors.is_empty()
    }
}

/// Classifier output for a whole grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileClassification {
    pub cells: SpatialGrid<TilePlacement>,
    /// Lattice corners that get a pillar, in discovery order
    pub pillars: Vec<Coord>,
}

impl TileClassification {
    pub fn get(&self, pos: Coord) -> Option<&TilePlacement> {
        self.cells.get(pos)
    }
}

/// Corridor archetype for the cell at `pos`
///
/// Room cells and positions outside the grid are never classified.
pub fn classify_cell(grid: &SpatialGrid<CellType>, pos: Coord) -> Option<CorridorTile> {
    match grid.get(pos) {
        None | Some(CellType::Room) => None,
        Some(_) => {
            let neighborhood = encode_neighborhood(grid, pos);
            PatternLibrary::standard()
                .find(&neighborhood)
                .map(|p| CorridorTile {
                    archetype: p.archetype,
                    rotation: p.rotation,
                })
        }
    }
}

/// Lattice corner of `pos` in the diagonal direction `toward`
///
/// Cell (x, y) spans corners x..=x+1 by y..=y+1.
fn corner_of(pos: Coord, toward: Coord) -> Coord {
    Coord::new(pos.x + toward.x.max(0), pos.y + toward.y.max(0))
}

fn decorate_room(
    grid: &SpatialGrid<CellType>,
    pos: Coord,
    placement: &mut TilePlacement,
    seen: &mut HashSet<Coord>,
    pillars: &mut Vec<Coord>,
) {
    let cell_at = |p: Coord| grid.get(p).copied().unwrap_or_default();

    for wall in Direction::ALL {
        match cell_at(pos.step(wall)) {
            CellType::Empty => placement.walls |= wall.side(),
            CellType::Corridor => {
                placement.doors |= wall.side();
                continue;
            }
            CellType::Room => continue,
        }

        for along in wall.perpendicular() {
            let beside = pos.step(along);
            if cell_at(beside) != CellType::Room {
                continue;
            }
            if cell_at(beside.step(wall)) != CellType::Corridor {
                continue;
            }
            let corner = corner_of(pos, along.offset() + wall.offset());
            if seen.insert(corner) {
                pillars.push(corner);
            }
        }
    }
}

/// Classify every cell of a finished grid
pub fn classify(grid: &SpatialGrid<CellType>) -> TileClassification {
    let mut cells: SpatialGrid<TilePlacement> = SpatialGrid::new(grid.size(), grid.offset());
    let mut seen = HashSet::new();
    let mut pillars = Vec::new();

    for (pos, cell) in grid.iter() {
        let Some(placement) = cells.get_mut(pos) else {
            continue;
        };
        match cell {
            CellType::Room => {
                if !grid.on_border(pos) {
                    decorate_room(grid, pos, placement, &mut seen, &mut pillars);
                }
            }
            CellType::Corridor | CellType::Empty => {
                placement.corridor = classify_cell(grid, pos);
            }
        }
    }

    debug!(
        corridor_tiles = cells.iter().filter(|(_, t)| t.corridor.is_some()).count(),
        pillars = pillars.len(),
        "classified tiles"
    );

    TileClassification { cells, pillars }
}
