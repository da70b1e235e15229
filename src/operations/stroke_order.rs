use tracing::info;

use crate::error::{GraphError, Result};
use crate::graph::{CurveGraph, EulerKind, Trail};
use crate::math::Point2;

/// How [`StrokeOrder2D`] chooses the vertex the pen starts on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StartVertex {
    /// Lowest odd vertex of a path graph, lowest vertex with edges otherwise.
    #[default]
    Auto,
    /// A caller-chosen vertex; rejected if it cannot start a single stroke.
    Index(usize),
    /// The vertex with edges closest to a reference point, e.g. the pen's
    /// current position. Falls back to [`Auto`](Self::Auto) when that vertex
    /// cannot start the stroke.
    Nearest(Point2),
}

/// Result of a [`StrokeOrder2D`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeOrder {
    /// Classification of the solved graph.
    pub kind: EulerKind,
    /// Vertex the pen starts on.
    pub start: usize,
    /// Draw order, beginning at `start`.
    pub trail: Trail,
}

/// Orders the segments of a curve graph into one continuous stroke.
///
/// Classifies the graph, resolves the start vertex, and extracts the trail.
/// Unlike [`CurveGraph::extract_trail`], the returned trail is in draw
/// order: it begins at the chosen start vertex.
#[derive(Debug)]
pub struct StrokeOrder2D {
    graph: CurveGraph,
    start: StartVertex,
}

impl StrokeOrder2D {
    /// Creates a new stroke-order operation with [`StartVertex::Auto`].
    #[must_use]
    pub fn new(graph: CurveGraph) -> Self {
        Self {
            graph,
            start: StartVertex::Auto,
        }
    }

    /// Sets the start vertex policy.
    #[must_use]
    pub fn with_start(mut self, start: StartVertex) -> Self {
        self.start = start;
        self
    }

    /// Executes the solve, consuming the graph.
    ///
    /// # Errors
    ///
    /// Returns `TraversalError::NonEulerian` if no single stroke exists,
    /// `TraversalError::InvalidStart` for an [`StartVertex::Index`] that
    /// cannot start it, or `GraphError::VertexOutOfRange` for an unknown
    /// index or an empty graph.
    pub fn execute(self) -> Result<StrokeOrder> {
        let kind = self.graph.classify();
        if !kind.is_eulerian() {
            return Err(self.graph.non_eulerian().into());
        }

        let start = match self.start {
            StartVertex::Auto => self.graph.auto_start(kind),
            StartVertex::Index(i) => {
                self.graph.check_vertex(i)?;
                Some(i)
            }
            StartVertex::Nearest(target) => self
                .graph
                .nearest_vertex(&target)
                .filter(|&i| kind != EulerKind::Path || self.graph.degree(i) % 2 == 1)
                .or_else(|| self.graph.auto_start(kind)),
        };
        let Some(start) = start else {
            return Err(GraphError::VertexOutOfRange {
                index: 0,
                count: self.graph.vertex_count(),
            }
            .into());
        };

        let edges = self.graph.edge_count();
        let trail = self.graph.extract_classified(kind, start)?.reversed();
        info!(%kind, start, edges, "stroke order solved");
        Ok(StrokeOrder { kind, start, trail })
    }
}
