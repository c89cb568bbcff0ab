//! Level generation pipeline
//!
//! Rooms, candidate links, spanning selection, corridors, tiles. The RNG is
//! consumed by room placement first and by extra-edge selection second, so a
//! seed reproduces a level only while that order holds.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::geometry::Coord;
use crate::graph::{
    BowyerWatson, Edge, Graph, SelectedEdges, Triangulator, VertexId, select_edges,
};
use crate::grid::SpatialGrid;
use crate::rng::LevelRng;

use super::cell::CellType;
use super::corridor::{CorridorReport, carve_corridors};
use super::placer::{RejectionPlacer, RoomPlacer};
use super::room::Room;
use super::tiles::{TileClassification, classify};

/// Everything one run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedLevel {
    pub config: GeneratorConfig,
    pub grid: SpatialGrid<CellType>,
    pub rooms: Vec<Room>,
    /// One vertex per room, positioned at the room center
    pub graph: Graph<Room>,
    /// Triangulation edges the selection started from
    pub candidate_edges: Vec<Edge>,
    pub selected: SelectedEdges,
    pub corridors: CorridorReport,
    pub tiles: TileClassification,
}

impl GeneratedLevel {
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn size(&self) -> Coord {
        self.grid.size()
    }
}

/// Runs the pipeline with pluggable triangulation and room placement
#[derive(Debug, Clone)]
pub struct LevelGenerator<T: Triangulator = BowyerWatson, R: RoomPlacer = RejectionPlacer> {
    config: GeneratorConfig,
    triangulator: T,
    placer: R,
}

impl LevelGenerator {
    /// Generator with the default triangulator and placer
    pub fn new(config: GeneratorConfig) -> Self {
        let placer = RejectionPlacer::from_config(&config);
        Self::with_parts(config, BowyerWatson, placer)
    }
}

impl<T: Triangulator, R: RoomPlacer> LevelGenerator<T, R> {
    pub fn with_parts(config: GeneratorConfig, triangulator: T, placer: R) -> Self {
        Self {
            config,
            triangulator,
            placer,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build a level from the configured seed
    pub fn generate(&self) -> Result<GeneratedLevel, GenerationError> {
        self.config.validate()?;
        let mut rng = LevelRng::new(self.config.seed);
        let mut grid = SpatialGrid::new(self.config.size(), Coord::ZERO);

        let rooms = self.placer.place(&mut grid, &mut rng)?;

        let mut graph = Graph::new();
        for room in &rooms {
            graph.add_vertex(room.center(), *room);
        }

        let candidate_edges = self
            .triangulator
            .triangulate(&graph.positions())
            .into_iter()
            .map(|[a, b]| graph.edge(VertexId(a as u32), VertexId(b as u32)))
            .collect::<Result<Vec<_>, _>>()?;

        let (selected, corridors) = match candidate_edges.first() {
            Some(first) => {
                let selected = select_edges(
                    &candidate_edges,
                    first.u(),
                    &mut rng,
                    self.config.extra_edge_chance,
                )?;
                let corridors = carve_corridors(&mut grid, &graph, &selected, self.config.costs)?;
                (selected, corridors)
            }
            None => {
                warn!(rooms = rooms.len(), "fewer than two rooms, no corridors to carve");
                (SelectedEdges::default(), CorridorReport::default())
            }
        };

        let tiles = classify(&grid);

        info!(
            seed = self.config.seed,
            rooms = rooms.len(),
            candidates = candidate_edges.len(),
            selected = selected.len(),
            corridors = corridors.corridors.len(),
            skipped = corridors.skipped.len(),
            pillars = tiles.pillars.len(),
            "level generated"
        );

        Ok(GeneratedLevel {
            config: self.config.clone(),
            grid,
            rooms,
            graph,
            candidate_edges,
            selected,
            corridors,
            tiles,
        })
    }
}
