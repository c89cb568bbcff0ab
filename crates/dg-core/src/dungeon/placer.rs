//! Room placement
//!
//! Rooms are proposed at random and kept only when they leave a one-cell gap
//! to every room already placed.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::geometry::Coord;
use crate::grid::SpatialGrid;
use crate::rng::LevelRng;

use super::cell::CellType;
use super::room::Room;

/// Produces non-overlapping rooms and stamps them onto the grid
pub trait RoomPlacer {
    fn place(
        &self,
        grid: &mut SpatialGrid<CellType>,
        rng: &mut LevelRng,
    ) -> Result<Vec<Room>, GenerationError>;
}

/// Rejection sampler: propose, test, keep or discard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectionPlacer {
    pub room_count: u32,
    pub room_max_size: Coord,
    pub max_attempts: u32,
}

impl RejectionPlacer {
    pub fn new(room_count: u32, room_max_size: Coord, max_attempts: u32) -> Self {
        Self {
            room_count,
            room_max_size,
            max_attempts,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            config.room_count,
            config.room_max_size(),
            config.max_placement_attempts,
        )
    }

    /// Draw one candidate room. Position first, then size.
    fn propose(&self, grid: &SpatialGrid<CellType>, rng: &mut LevelRng) -> Room {
        let origin = -grid.offset();
        let x = origin.x + rng.range(0, grid.width() - self.room_max_size.x);
        let y = origin.y + rng.range(0, grid.height() - self.room_max_size.y);
        let width = rng.range(1, self.room_max_size.x + 1);
        let height = rng.range(1, self.room_max_size.y + 1);
        Room::new(x, y, width, height)
    }

    /// Rejects rooms closer than one cell to a placed room, and rooms whose
    /// far edge reaches the last row or column.
    fn accepts(&self, candidate: &Room, placed: &[Room], grid: &SpatialGrid<CellType>) -> bool {
        let buffer = candidate.inflate(1);
        if placed.iter().any(|room| room.intersects(&buffer)) {
            return false;
        }
        grid.contains(candidate.position())
            && grid.contains(Coord::new(candidate.x_max(), candidate.y_max()))
    }
}

impl RoomPlacer for RejectionPlacer {
    fn place(
        &self,
        grid: &mut SpatialGrid<CellType>,
        rng: &mut LevelRng,
    ) -> Result<Vec<Room>, GenerationError> {
        let mut rooms: Vec<Room> = Vec::new();
        let mut attempts = 0;

        while rooms.len() < self.room_count as usize && attempts < self.max_attempts {
            attempts += 1;
            let candidate = self.propose(grid, rng);
            if !self.accepts(&candidate, &rooms, grid) {
                continue;
            }

            for pos in candidate.cells() {
                grid.set(pos, CellType::Room)?;
            }
            rooms.push(candidate);
        }

        debug!(
            placed = rooms.len(),
            requested = self.room_count,
            attempts,
            "room placement finished"
        );
        Ok(rooms)
    }
}
