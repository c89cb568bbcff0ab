//! Corridor carving between linked rooms
//!
//! One search per selected edge, run against the grid as it stands after the
//! previous corridors were committed. Only `Empty` cells turn into
//! `Corridor`; rooms are tunnelled through but never overwritten.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CorridorCosts;
use crate::error::{GenerationError, GraphError};
use crate::geometry::Coord;
use crate::graph::{Graph, SelectedEdges, VertexId};
use crate::grid::SpatialGrid;
use crate::path::{GridPathfinder, corridor_cost};

use super::cell::CellType;
use super::room::Room;

/// A carved route between two rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub from: VertexId,
    pub to: VertexId,
    /// Full route from the first room's center to the second's, inclusive
    pub cells: Vec<Coord>,
}

/// What a carving pass produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorridorReport {
    pub corridors: Vec<Corridor>,
    /// Edges whose rooms could not be joined
    pub skipped: Vec<(VertexId, VertexId)>,
}

fn room_center(graph: &Graph<Room>, id: VertexId) -> Result<Coord, GraphError> {
    graph
        .vertex(id)
        .map(|v| v.payload().center_cell())
        .ok_or(GraphError::UnknownVertex(id))
}

/// Carve a corridor for every selected edge, tree edges first
pub fn carve_corridors(
    grid: &mut SpatialGrid<CellType>,
    graph: &Graph<Room>,
    selected: &SelectedEdges,
    costs: CorridorCosts,
) -> Result<CorridorReport, GenerationError> {
    let mut finder = GridPathfinder::for_grid(&*grid);
    let mut report = CorridorReport::default();

    for edge in selected.iter() {
        let start = room_center(graph, edge.u())?;
        let goal = room_center(graph, edge.v())?;

        let path = finder.find_path(start, goal, corridor_cost(&*grid, goal, costs))?;
        let Some(cells) = path else {
            warn!(from = ?edge.u(), to = ?edge.v(), %start, %goal, "no route between rooms");
            report.skipped.push((edge.u(), edge.v()));
            continue;
        };

        let mut carved = 0;
        for &pos in &cells {
            if let Some(cell) = grid.get_mut(pos)
                && *cell == CellType::Empty
            {
                *cell = CellType::Corridor;
                carved += 1;
            }
        }
        debug!(from = ?edge.u(), to = ?edge.v(), length = cells.len(), carved, "carved corridor");

        report.corridors.push(Corridor {
            from: edge.u(),
            to: edge.v(),
            cells,
        });
    }

    Ok(report)
}
