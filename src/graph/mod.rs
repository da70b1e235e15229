//! Undirected multigraph over curve points.
//!
//! Vertices are the split points of an artwork's curves and edges are the
//! curve segments between them. A [`CurveGraph`] is built once per solve,
//! classified, and then consumed by trail extraction.

mod classify;
mod trail;

pub use classify::EulerKind;
pub use trail::{Trail, Walk};

use tracing::debug;

use crate::error::GraphError;
use crate::geometry::CurvePoint;
use crate::math::distance_2d::distance_sq;
use crate::math::{Point2, TOLERANCE};

/// Curve points joined by curve segments, with parallel edges allowed.
///
/// Vertex indices are assigned in input order and never change. Each
/// vertex owns an ordered neighbor list holding one entry per incident
/// edge, so an edge `(u, v)` appears once in `u`'s list and once in `v`'s.
#[derive(Debug, Clone)]
pub struct CurveGraph {
    vertices: Vec<CurvePoint>,
    adjacency: Vec<Vec<usize>>,
    tolerance: f64,
}

impl CurveGraph {
    /// Creates a graph with one isolated vertex per curve point.
    ///
    /// Input points are not deduplicated: two entries at the same position
    /// become two vertices, and edge lookups always resolve to the first.
    #[must_use]
    pub fn new(vertices: Vec<CurvePoint>) -> Self {
        Self::with_tolerance(vertices, TOLERANCE)
    }

    /// Creates a graph whose positional lookups use `tolerance`.
    #[must_use]
    pub fn with_tolerance(vertices: Vec<CurvePoint>, tolerance: f64) -> Self {
        let adjacency = vec![Vec::new(); vertices.len()];
        Self {
            vertices,
            adjacency,
            tolerance,
        }
    }

    // --- Queries ---

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges still present.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the number of edges incident to `index` (0 when out of range).
    #[must_use]
    pub fn degree(&self, index: usize) -> usize {
        self.adjacency.get(index).map_or(0, Vec::len)
    }

    /// Returns the neighbor list of `index`, one entry per incident edge.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the curve point stored at `index`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&CurvePoint> {
        self.vertices.get(index)
    }

    /// Returns all curve points in index order.
    #[must_use]
    pub fn vertices(&self) -> &[CurvePoint] {
        &self.vertices
    }

    /// Returns the positional tolerance used to resolve curve points.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Resolves a curve point to the first vertex at the same position.
    ///
    /// This is a linear scan; vertex counts are bounded by the number of
    /// intersections in one artwork.
    #[must_use]
    pub fn vertex_index(&self, point: &CurvePoint) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| v.coincides(point, self.tolerance))
    }

    /// Returns the vertex with at least one edge that lies closest to `target`.
    #[must_use]
    pub fn nearest_vertex(&self, target: &Point2) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in self.vertices.iter().enumerate() {
            if self.adjacency[i].is_empty() {
                continue;
            }
            let d = distance_sq(&v.point, target);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    // --- Edge insertion ---

    /// Adds an edge between the vertices at the positions of `a` and `b`.
    ///
    /// Returns `false` and leaves the graph untouched when the edge would be
    /// a self-loop or when either position is not a vertex of this graph.
    /// Repeating a pair adds a parallel edge.
    pub fn add_edge(&mut self, a: &CurvePoint, b: &CurvePoint) -> bool {
        match self.try_add_edge(a, b) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "edge rejected");
                false
            }
        }
    }

    /// Adds an edge between the vertices at the positions of `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if both points resolve to one vertex,
    /// or [`GraphError::UnresolvedEndpoint`] if either position is not in
    /// the vertex table.
    pub fn try_add_edge(&mut self, a: &CurvePoint, b: &CurvePoint) -> Result<(), GraphError> {
        if a.coincides(b, self.tolerance) {
            return Err(GraphError::SelfLoop);
        }
        let u = self.resolve(a)?;
        let v = self.resolve(b)?;
        if u == v {
            return Err(GraphError::SelfLoop);
        }
        self.link(u, v);
        Ok(())
    }

    /// Adds an edge between two vertex indices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown index, or
    /// [`GraphError::SelfLoop`] if `u == v`.
    pub fn add_edge_by_index(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop);
        }
        self.link(u, v);
        Ok(())
    }

    pub(crate) fn check_vertex(&self, index: usize) -> Result<(), GraphError> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                index,
                count: self.vertices.len(),
            })
        }
    }

    fn resolve(&self, point: &CurvePoint) -> Result<usize, GraphError> {
        self.vertex_index(point)
            .ok_or(GraphError::UnresolvedEndpoint {
                x: point.point.x,
                y: point.point.y,
            })
    }

    /// Appends the symmetric pair. Both indices must be in range.
    pub(crate) fn link(&mut self, u: usize, v: usize) {
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
    }

    /// Removes one copy of the edge `(u, v)` from both neighbor lists.
    fn unlink(&mut self, u: usize, v: usize) {
        if let Some(pos) = self.adjacency[u].iter().position(|&n| n == v) {
            self.adjacency[u].remove(pos);
        }
        if let Some(pos) = self.adjacency[v].iter().position(|&n| n == u) {
            self.adjacency[v].remove(pos);
        }
    }
}
