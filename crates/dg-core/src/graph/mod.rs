//! Room connectivity graph
//!
//! Contains the vertex/edge model, the Delaunay triangulator that proposes
//! candidate edges, and the spanning tree selector that thins them out.

mod delaunay;
mod edge;
mod mst;
mod vertex;

pub use delaunay::{BowyerWatson, Triangulator};
pub use edge::Edge;
pub use mst::{SelectedEdges, minimum_spanning_tree, select_edges};
pub use vertex::{Graph, Vertex, VertexId};
