//! Spanning tree selection with stochastic loop reintroduction
//!
//! Prim's algorithm in its simple O(V·E) form: every round rescans the whole
//! edge list for the lightest edge crossing the cut. Room graphs are small,
//! so no priority queue is involved.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GraphError;
use crate::rng::LevelRng;

use super::{Edge, VertexId};

/// Minimum spanning tree over `edges`, grown from `start`
///
/// Ties between equally light crossing edges go to the first one in
/// `edges`. If the graph is disconnected the result only spans the
/// component containing `start`.
pub fn minimum_spanning_tree(edges: &[Edge], start: VertexId) -> Result<Vec<Edge>, GraphError> {
    if edges.is_empty() {
        return Err(GraphError::EmptyEdgeList);
    }

    let mut open: HashSet<VertexId> = HashSet::new();
    for edge in edges {
        open.insert(edge.u());
        open.insert(edge.v());
    }
    let mut closed: HashSet<VertexId> = HashSet::new();
    closed.insert(start);
    open.remove(&start);

    let mut tree = Vec::new();

    while !open.is_empty() {
        let mut chosen: Option<Edge> = None;
        let mut min_weight = f32::INFINITY;

        for edge in edges {
            let crossing = closed.contains(&edge.u()) != closed.contains(&edge.v());
            if crossing && edge.weight() < min_weight {
                min_weight = edge.weight();
                chosen = Some(*edge);
            }
        }

        let Some(edge) = chosen else {
            warn!(
                unreached = open.len(),
                spanned = closed.len(),
                "edge list is disconnected; returning a partial spanning forest"
            );
            break;
        };

        tree.push(edge);
        open.remove(&edge.u());
        open.remove(&edge.v());
        closed.insert(edge.u());
        closed.insert(edge.v());
    }

    Ok(tree)
}

/// Edges kept for corridor carving
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedEdges {
    /// Spanning tree edges, in the order Prim's algorithm picked them
    pub tree: Vec<Edge>,
    /// Discarded edges that won their retention draw, in input order
    pub extra: Vec<Edge>,
}

impl SelectedEdges {
    /// Tree edges first, then extras
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.tree.iter().chain(self.extra.iter())
    }

    pub fn len(&self) -> usize {
        self.tree.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty() && self.extra.is_empty()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.iter().any(|e| e == edge)
    }
}

/// Spanning tree plus a random share of the discarded edges
///
/// Every distinct edge left out of the tree gets one `rng.chance(extra_chance)`
/// draw, in the order the edges appear in `edges`. Keeping a few of them
/// turns the tree into a graph with loops.
pub fn select_edges(
    edges: &[Edge],
    start: VertexId,
    rng: &mut LevelRng,
    extra_chance: f64,
) -> Result<SelectedEdges, GraphError> {
    let tree = minimum_spanning_tree(edges, start)?;

    let mut seen: HashSet<Edge> = tree.iter().copied().collect();
    let mut extra = Vec::new();
    for edge in edges {
        if !seen.insert(*edge) {
            continue;
        }
        if rng.chance(extra_chance) {
            extra.push(*edge);
        }
    }

    debug!(
        candidates = edges.len(),
        tree = tree.len(),
        extra = extra.len(),
        "selected corridor edges"
    );

    Ok(SelectedEdges { tree, extra })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::graph::Graph;

    fn triangle() -> (Graph<()>, Vec<Edge>) {
        let mut g = Graph::new();
        let a = g.add_vertex(Point::new(0.0, 0.0), ());
        let b = g.add_vertex(Point::new(3.0, 0.0), ());
        let c = g.add_vertex(Point::new(0.0, 4.0), ());
        let edges = vec![
            g.edge(a, b).unwrap(),
            g.edge(a, c).unwrap(),
            g.edge(b, c).unwrap(),
        ];
        (g, edges)
    }

    #[test]
    fn test_empty_edge_list_is_error() {
        assert_eq!(
            minimum_spanning_tree(&[], VertexId(0)),
            Err(GraphError::EmptyEdgeList)
        );
    }

    #[test]
    fn test_triangle_mst() {
        let (_, edges) = triangle();
        let tree = minimum_spanning_tree(&edges, VertexId(0)).unwrap();

        assert_eq!(tree.len(), 2);
        assert!(tree.contains(&Edge::new(VertexId(0), VertexId(1), 3.0)));
        assert!(tree.contains(&Edge::new(VertexId(0), VertexId(2), 4.0)));
        assert!(!tree.contains(&Edge::new(VertexId(1), VertexId(2), 5.0)));
        let total: f32 = tree.iter().map(|e| e.weight()).sum();
        assert_eq!(total, 7.0);
    }

    #[test]
    fn test_ties_go_to_first_edge() {
        let edges = vec![
            Edge::new(VertexId(0), VertexId(1), 1.0),
            Edge::new(VertexId(0), VertexId(2), 1.0),
            Edge::new(VertexId(1), VertexId(2), 1.0),
        ];
        let tree = minimum_spanning_tree(&edges, VertexId(0)).unwrap();
        assert_eq!(tree[0], edges[0]);
        assert_eq!(tree[1], edges[1]);
    }

    #[test]
    fn test_disconnected_graph_gives_partial_forest() {
        let edges = vec![
            Edge::new(VertexId(0), VertexId(1), 1.0),
            Edge::new(VertexId(2), VertexId(3), 1.0),
        ];
        let tree = minimum_spanning_tree(&edges, VertexId(0)).unwrap();
        assert_eq!(tree, vec![edges[0]]);
    }

    #[test]
    fn test_start_outside_edges_spans_nothing() {
        let edges = vec![Edge::new(VertexId(0), VertexId(1), 1.0)];
        let tree = minimum_spanning_tree(&edges, VertexId(5)).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_select_edges_deterministic() {
        let mut edges = Vec::new();
        for i in 0..8u32 {
            for j in (i + 1)..8 {
                edges.push(Edge::new(VertexId(i), VertexId(j), (i * 7 + j * 3) as f32));
            }
        }
        let a = select_edges(&edges, VertexId(0), &mut LevelRng::new(11), 0.125).unwrap();
        let b = select_edges(&edges, VertexId(0), &mut LevelRng::new(11), 0.125).unwrap();
        assert_eq!(a.tree, b.tree);
        assert_eq!(a.extra, b.extra);
        assert_eq!(a.tree.len(), 7);
    }

    #[test]
    fn test_select_edges_draws_once_per_discarded_edge() {
        let (_, edges) = triangle();
        let mut rng = LevelRng::new(3);
        let mut reference = rng.clone();

        select_edges(&edges, VertexId(0), &mut rng, 0.5).unwrap();
        reference.next_f64();
        assert_eq!(rng.next_f64(), reference.next_f64());
    }

    #[test]
    fn test_select_edges_all_or_nothing() {
        let (_, edges) = triangle();
        let none = select_edges(&edges, VertexId(0), &mut LevelRng::new(1), 0.0).unwrap();
        assert!(none.extra.is_empty());
        let all = select_edges(&edges, VertexId(0), &mut LevelRng::new(1), 1.0).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&Edge::new(VertexId(2), VertexId(1), 5.0)));
    }

    #[test]
    fn test_duplicate_edges_drawn_once() {
        let edges = vec![
            Edge::new(VertexId(0), VertexId(1), 1.0),
            Edge::new(VertexId(1), VertexId(2), 2.0),
            Edge::new(VertexId(0), VertexId(2), 3.0),
            Edge::new(VertexId(2), VertexId(0), 3.0),
        ];
        let all = select_edges(&edges, VertexId(0), &mut LevelRng::new(1), 1.0).unwrap();
        assert_eq!(all.extra.len(), 1);
    }
}
