use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use dg_core::graph::{Edge, VertexId};
use dg_core::path::{GridPathfinder, PathCost};
use dg_core::{Coord, SpatialGrid};
use proptest::prelude::*;

fn hash_of(edge: &Edge) -> u64 {
    let mut hasher = DefaultHasher::new();
    edge.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn edge_equality_ignores_direction(u in 0u32..64, v in 0u32..64, w in 0.0f32..100.0) {
        let forward = Edge::new(VertexId(u), VertexId(v), w);
        let backward = Edge::new(VertexId(v), VertexId(u), w);
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn grid_set_then_get(
        w in 1i32..20,
        h in 1i32..20,
        ox in -10i32..10,
        oy in -10i32..10,
        x in -30i32..30,
        y in -30i32..30,
        value in any::<u16>(),
    ) {
        let mut grid: SpatialGrid<u16> = SpatialGrid::new(Coord::new(w, h), Coord::new(ox, oy));
        let pos = Coord::new(x, y);
        let inside = x + ox >= 0 && x + ox < w && y + oy >= 0 && y + oy < h;

        prop_assert_eq!(grid.contains(pos), inside);
        prop_assert_eq!(grid.set(pos, value).is_ok(), inside);
        if inside {
            prop_assert_eq!(grid.get(pos), Some(&value));
        } else {
            prop_assert_eq!(grid.get(pos), None);
        }
    }

    #[test]
    fn uniform_path_is_shortest(
        w in 2i32..12,
        h in 2i32..12,
        sx in 0i32..12, sy in 0i32..12,
        gx in 0i32..12, gy in 0i32..12,
    ) {
        let start = Coord::new(sx % w, sy % h);
        let goal = Coord::new(gx % w, gy % h);
        let mut finder = GridPathfinder::new(Coord::new(w, h), Coord::ZERO);

        let path = finder.find_path(start, goal, |_, _| PathCost::step(1.0)).unwrap().unwrap();
        let d = goal - start;
        prop_assert_eq!(path.len() as i32, d.x.abs() + d.y.abs() + 1);
        prop_assert_eq!(path.first(), Some(&start));
        prop_assert_eq!(path.last(), Some(&goal));

        let again = finder.find_path(start, goal, |_, _| PathCost::step(1.0)).unwrap().unwrap();
        prop_assert_eq!(path, again);
    }
}
