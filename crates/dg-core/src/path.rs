//! Lowest-cost grid search for corridor routing
//!
//! The frontier is ordered by cumulative path cost alone. There is no
//! separate remaining-distance estimate: callers that want to steer toward
//! the goal fold a distance term into each step cost instead. That makes
//! this a cost-ordered best-first expansion rather than textbook A*, and the
//! returned route is not guaranteed to be globally cheapest when the step
//! cost includes such a term.
//!
//! One `GridPathfinder` is reused for many queries against the same extent.
//! All per-query state is wiped at the start of every `find_path` call.

use core::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::config::CorridorCosts;
use crate::dungeon::CellType;
use crate::error::GridError;
use crate::geometry::{Coord, Direction};
use crate::grid::SpatialGrid;

/// Result of evaluating one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCost {
    pub traversable: bool,
    pub cost: f32,
}

impl PathCost {
    pub const fn step(cost: f32) -> Self {
        Self {
            traversable: true,
            cost,
        }
    }

    pub const BLOCKED: PathCost = PathCost {
        traversable: false,
        cost: f32::INFINITY,
    };
}

/// Per-cell search record
#[derive(Debug, Clone, Copy, PartialEq)]
struct SearchNode {
    cost: f32,
    previous: Option<Coord>,
    closed: bool,
}

impl SearchNode {
    const UNVISITED: SearchNode = SearchNode {
        cost: f32::INFINITY,
        previous: None,
        closed: false,
    };
}

impl Default for SearchNode {
    fn default() -> Self {
        Self::UNVISITED
    }
}

/// Frontier entry; reversed ordering turns `BinaryHeap` into a min-heap
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    cost: f32,
    /// Insertion counter; equal costs pop first-in first-out
    seq: u64,
    pos: Coord,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable 4-directional search bound to one grid extent
#[derive(Debug, Clone)]
pub struct GridPathfinder {
    nodes: SpatialGrid<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
    seq: u64,
}

impl GridPathfinder {
    /// Pathfinder covering a grid of `size` with the given addressing offset
    pub fn new(size: Coord, offset: Coord) -> Self {
        Self {
            nodes: SpatialGrid::new(size, offset),
            frontier: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Pathfinder covering the same extent as `grid`
    pub fn for_grid<T>(grid: &SpatialGrid<T>) -> Self {
        Self::new(grid.size(), grid.offset())
    }

    fn reset(&mut self) {
        self.nodes.fill(SearchNode::UNVISITED);
        self.frontier.clear();
        self.seq = 0;
    }

    fn push(&mut self, pos: Coord, cost: f32) {
        self.frontier.push(FrontierEntry {
            cost,
            seq: self.seq,
            pos,
        });
        self.seq += 1;
    }

    /// Cheapest route from `start` to `goal` under `cost_fn`
    ///
    /// `cost_fn(current, neighbor)` is called once per candidate step.
    /// Returns the route from `start` to `goal` inclusive, or `Ok(None)` when
    /// the goal cannot be reached. Endpoints outside the grid are an error.
    pub fn find_path<F>(
        &mut self,
        start: Coord,
        goal: Coord,
        mut cost_fn: F,
    ) -> Result<Option<Vec<Coord>>, GridError>
    where
        F: FnMut(Coord, Coord) -> PathCost,
    {
        self.reset();

        for pos in [start, goal] {
            if !self.nodes.contains(pos) {
                return Err(GridError::OutOfBounds {
                    pos,
                    width: self.nodes.width(),
                    height: self.nodes.height(),
                    offset: self.nodes.offset(),
                });
            }
        }

        self.nodes[start].cost = 0.0;
        self.push(start, 0.0);

        while let Some(entry) = self.frontier.pop() {
            let current = entry.pos;
            let node = self.nodes[current];
            // Stale duplicate left behind by a later cost improvement
            if node.closed {
                continue;
            }
            self.nodes[current].closed = true;

            if current == goal {
                return Ok(Some(self.reconstruct(goal)));
            }

            for dir in Direction::ALL {
                let next = current.step(dir);
                let Some(neighbor) = self.nodes.get(next).copied() else {
                    continue;
                };
                if neighbor.closed {
                    continue;
                }

                let step = cost_fn(current, next);
                if !step.traversable {
                    continue;
                }

                let new_cost = node.cost + step.cost;
                if new_cost < neighbor.cost {
                    let slot = &mut self.nodes[next];
                    slot.cost = new_cost;
                    slot.previous = Some(current);
                    self.push(next, new_cost);
                }
            }
        }

        Ok(None)
    }

    fn reconstruct(&self, goal: Coord) -> Vec<Coord> {
        let mut path = vec![goal];
        let mut cursor = goal;
        while let Some(prev) = self.nodes[cursor].previous {
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        path
    }
}

/// Step cost used for corridor carving
///
/// Distance from the step's target cell to `goal`, plus a surcharge for the
/// target cell's category. Every cell is traversable.
pub fn corridor_cost(
    grid: &SpatialGrid<CellType>,
    goal: Coord,
    costs: CorridorCosts,
) -> impl Fn(Coord, Coord) -> PathCost + '_ {
    move |_from, to| {
        let surcharge = match grid.get(to) {
            Some(CellType::Room) => costs.room,
            Some(CellType::Empty) => costs.empty,
            Some(CellType::Corridor) => costs.corridor,
            None => return PathCost::BLOCKED,
        };
        PathCost::step(to.distance(goal) + surcharge)
    }
}
