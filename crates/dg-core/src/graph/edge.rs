//! Undirected weighted edges

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::VertexId;

/// Undirected edge between two vertices
///
/// `u`/`v` keep the order the edge was built with, but equality and hashing
/// only look at the unordered endpoint pair: `Edge(u, v) == Edge(v, u)` and
/// both hash the same. The weight is derived from the endpoints and takes no
/// part in either.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
    weight: f32,
}

impl Edge {
    pub fn new(u: VertexId, v: VertexId, weight: f32) -> Self {
        Self { u, v, weight }
    }

    pub fn u(&self) -> VertexId {
        self.u
    }

    pub fn v(&self) -> VertexId {
        self.v
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Endpoints ordered by id
    pub fn key(&self) -> (VertexId, VertexId) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(e: &Edge) -> u64 {
        let mut h = DefaultHasher::new();
        e.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_edge_symmetry() {
        let a = Edge::new(VertexId(1), VertexId(4), 2.0);
        let b = Edge::new(VertexId(4), VertexId(1), 2.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_distinct_pairs_differ() {
        // XOR-style hashing would collide (1^2 == 5^6); the ordered key does not compare equal
        let a = Edge::new(VertexId(1), VertexId(2), 1.0);
        let b = Edge::new(VertexId(5), VertexId(6), 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_self_loop_key() {
        let e = Edge::new(VertexId(3), VertexId(3), 0.0);
        assert_eq!(e.key(), (VertexId(3), VertexId(3)));
    }

    #[test]
    fn test_orientation_is_kept() {
        let e = Edge::new(VertexId(7), VertexId(2), 1.0);
        assert_eq!(e.u(), VertexId(7));
        assert_eq!(e.v(), VertexId(2));
        assert_eq!(e.key(), (VertexId(2), VertexId(7)));
    }
}
