//! Vertices and the graph that owns them

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::geometry::Point;

use super::Edge;

/// Vertex identity within one `Graph`
///
/// Two vertices at the same position are still distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A positioned vertex carrying a typed payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<P> {
    id: VertexId,
    position: Point,
    payload: P,
}

impl<P> Vertex<P> {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }
}

/// Owns vertices in insertion order and mints edges between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<P> {
    vertices: Vec<Vertex<P>>,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<P> Graph<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its id
    pub fn add_vertex(&mut self, position: Point, payload: P) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex {
            id,
            position,
            payload,
        });
        id
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<P>> {
        self.vertices.get(id.index())
    }

    pub fn vertices(&self) -> &[Vertex<P>] {
        &self.vertices
    }

    /// Vertex positions in id order
    pub fn positions(&self) -> Vec<Point> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edge between two vertices, weighted by the distance between them
    pub fn edge(&self, u: VertexId, v: VertexId) -> Result<Edge, GraphError> {
        let a = self.vertex(u).ok_or(GraphError::UnknownVertex(u))?;
        let b = self.vertex(v).ok_or(GraphError::UnknownVertex(v))?;
        Ok(Edge::new(u, v, a.position.distance(b.position)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(Point::new(0.0, 0.0), "a");
        let b = graph.add_vertex(Point::new(0.0, 0.0), "b");
        assert_eq!(a, VertexId(0));
        assert_eq!(b, VertexId(1));
        assert_ne!(a, b, "same position must not merge vertices");
        assert_eq!(graph.vertex(b).map(|v| *v.payload()), Some("b"));
    }

    #[test]
    fn test_edge_weight_is_distance() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(Point::new(0.0, 0.0), ());
        let b = graph.add_vertex(Point::new(3.0, 4.0), ());
        let e = graph.edge(a, b).unwrap();
        assert_eq!(e.weight(), 5.0);
    }

    #[test]
    fn test_edge_unknown_vertex() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(Point::new(0.0, 0.0), ());
        assert_eq!(
            graph.edge(a, VertexId(9)),
            Err(GraphError::UnknownVertex(VertexId(9)))
        );
    }
}
