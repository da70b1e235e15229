use tracing::{debug, trace, warn};

use crate::error::{GraphError, Result, TraversalError};
use crate::geometry::CurvePoint;
use crate::math::distance_2d::polyline_length;
use crate::math::Point2;

use super::{CurveGraph, EulerKind};

/// An ordered run of curve points covering every edge of a graph once.
///
/// Consecutive points are joined by exactly one original edge and no edge
/// appears twice, so `len() == edge_count() + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    indices: Vec<usize>,
    points: Vec<CurvePoint>,
}

impl Trail {
    /// Returns the vertex indices in trail order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the curve points in trail order.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Consumes the trail, returning its curve points.
    #[must_use]
    pub fn into_points(self) -> Vec<CurvePoint> {
        self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the trail has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of edges walked.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.indices.len().saturating_sub(1)
    }

    /// Returns whether the trail walks at least one edge and ends where it started.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.indices.len() > 1 && self.indices.first() == self.indices.last()
    }

    /// Returns the point positions, e.g. to feed a plotter.
    #[must_use]
    pub fn positions(&self) -> Vec<Point2> {
        self.points.iter().map(|p| p.point).collect()
    }

    /// Returns the straight-line length of the trail.
    #[must_use]
    pub fn length(&self) -> f64 {
        polyline_length(&self.positions())
    }

    /// Returns the same trail walked from the other end.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            indices: self.indices.iter().rev().copied().collect(),
            points: self.points.iter().rev().copied().collect(),
        }
    }
}

/// Unchecked outcome of a Hierholzer walk.
///
/// The walk records vertices in the order they were popped. When the walk
/// was started from a vertex that cannot begin a single stroke, the popped
/// sequence jumps between vertices that share no consumed edge; each such
/// jump is counted as a break.
#[derive(Debug, Clone)]
pub struct Walk {
    start: usize,
    order: Vec<usize>,
    vertices: Vec<CurvePoint>,
    breaks: usize,
    residual_edges: usize,
}

impl Walk {
    /// Returns the start vertex of the walk.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the vertex indices in popped order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// Returns the number of jumps between non-adjacent vertices.
    #[must_use]
    pub fn breaks(&self) -> usize {
        self.breaks
    }

    /// Returns the number of edges the walk never reached.
    #[must_use]
    pub fn residual_edges(&self) -> usize {
        self.residual_edges
    }

    /// Returns whether the walk forms one stroke over every edge.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.breaks == 0 && self.residual_edges == 0
    }

    /// Converts a complete walk into a [`Trail`].
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::IncompleteTraversal`] if the walk has breaks
    /// or left edges behind.
    pub fn into_trail(self) -> Result<Trail> {
        if !self.is_complete() {
            return Err(TraversalError::IncompleteTraversal {
                start: self.start,
                breaks: self.breaks,
                residual_edges: self.residual_edges,
            }
            .into());
        }
        let points = self.order.iter().map(|&i| self.vertices[i]).collect();
        Ok(Trail {
            indices: self.order,
            points,
        })
    }
}

impl CurveGraph {
    /// Extracts the single-stroke trail starting the walk at `start`.
    ///
    /// The trail is reported in Hierholzer's completion order, so it ends at
    /// `start`; use [`Trail::reversed`] to begin there instead. The graph
    /// is consumed.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    /// - [`TraversalError::NonEulerian`] if the graph classifies as
    ///   [`EulerKind::None`].
    /// - [`TraversalError::InvalidStart`] if `start` has no edges while
    ///   others do, or is not one of the two odd vertices of a
    ///   [`EulerKind::Path`] graph.
    pub fn extract_trail(self, start: usize) -> Result<Trail> {
        self.check_vertex(start)?;
        let kind = self.classify();
        self.extract_classified(kind, start)
    }

    /// Extracts the single-stroke trail from a start vertex chosen by parity.
    ///
    /// Path graphs start at their lowest odd vertex, circuits at their
    /// lowest vertex with edges.
    ///
    /// # Errors
    ///
    /// Same as [`extract_trail`](Self::extract_trail); an empty graph
    /// reports `VertexOutOfRange`.
    pub fn extract_trail_auto(self) -> Result<Trail> {
        let kind = self.classify();
        let Some(start) = self.auto_start(kind) else {
            return Err(if kind.is_eulerian() {
                GraphError::VertexOutOfRange {
                    index: 0,
                    count: self.vertex_count(),
                }
                .into()
            } else {
                self.non_eulerian().into()
            });
        };
        self.extract_classified(kind, start)
    }

    /// Runs Hierholzer's algorithm from `start` without validating the start.
    ///
    /// Every edge reachable from `start` is consumed. The result reports
    /// breaks and residual edges instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `VertexOutOfRange` if `start` is not a vertex.
    pub fn walk(mut self, start: usize) -> Result<Walk> {
        self.check_vertex(start)?;
        let edges = self.edge_count();
        let (order, breaks) = self.hierholzer(start);
        let residual_edges = self.edge_count();
        if breaks > 0 || residual_edges > 0 {
            warn!(start, breaks, residual_edges, "walk did not form a single stroke");
        } else {
            debug!(start, edges, points = order.len(), "walk complete");
        }
        Ok(Walk {
            start,
            order,
            vertices: self.vertices,
            breaks,
            residual_edges,
        })
    }

    /// Picks a start vertex that yields a complete trail for `kind`.
    pub(crate) fn auto_start(&self, kind: EulerKind) -> Option<usize> {
        let first = |odd: bool| {
            self.adjacency
                .iter()
                .position(|adj| !adj.is_empty() && (!odd || adj.len() % 2 == 1))
        };
        match kind {
            EulerKind::Path => first(true),
            EulerKind::Circuit => {
                first(false).or_else(|| (!self.vertices.is_empty()).then_some(0))
            }
            EulerKind::None => None,
        }
    }

    pub(crate) fn extract_classified(self, kind: EulerKind, start: usize) -> Result<Trail> {
        if kind == EulerKind::None {
            return Err(self.non_eulerian().into());
        }
        let degree = self.degree(start);
        if degree == 0 && self.edge_count() > 0 {
            return Err(TraversalError::InvalidStart {
                start,
                reason: "vertex has no incident edges",
            }
            .into());
        }
        if kind == EulerKind::Path && degree % 2 == 0 {
            return Err(TraversalError::InvalidStart {
                start,
                reason: "an open trail must start at an odd-degree vertex",
            }
            .into());
        }
        self.walk(start)?.into_trail()
    }

    pub(crate) fn non_eulerian(&self) -> TraversalError {
        TraversalError::NonEulerian {
            odd_vertices: self.odd_vertices().len(),
            connected: self.is_connected(),
        }
    }

    /// Stack-based Hierholzer. Returns the popped order and the number of
    /// pops that did not land on the vertex the previous pop came from.
    fn hierholzer(&mut self, start: usize) -> (Vec<usize>, usize) {
        let mut stack = vec![start];
        let mut order = Vec::with_capacity(self.edge_count() + 1);
        let mut expected: Option<usize> = None;
        let mut breaks = 0;

        while let Some(&u) = stack.last() {
            if let Some(&v) = self.adjacency[u].first() {
                self.unlink(u, v);
                trace!(from = u, to = v, "consume edge");
                stack.push(v);
            } else {
                stack.pop();
                if expected.is_some_and(|p| p != u) {
                    breaks += 1;
                }
                expected = stack.last().copied();
                order.push(u);
            }
        }

        (order, breaks)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::{GraphError, StitchError, TraversalError};
    use crate::geometry::CurvePoint;
    use crate::graph::CurveGraph;

    fn square_points() -> Vec<CurvePoint> {
        vec![
            CurvePoint::at(0.0, 0.0, 0, 0.0),
            CurvePoint::at(1.0, 0.0, 0, 0.25),
            CurvePoint::at(1.0, 1.0, 0, 0.5),
            CurvePoint::at(0.0, 1.0, 0, 0.75),
        ]
    }

    fn graph(edges: &[(usize, usize)]) -> CurveGraph {
        let mut g = CurveGraph::new(square_points());
        for &(u, v) in edges {
            g.add_edge_by_index(u, v).unwrap();
        }
        g
    }

    #[test]
    fn triangle_circuit_starts_and_ends_at_start() {
        let pts = square_points();
        let (a, b, c) = (pts[0], pts[1], pts[2]);
        let mut g = CurveGraph::new(vec![a, b, c]);
        assert!(g.add_edge(&a, &b));
        assert!(g.add_edge(&b, &c));
        assert!(g.add_edge(&c, &a));

        let trail = g.extract_trail(0).unwrap();
        assert_eq!(trail.len(), 4);
        assert_eq!(trail.points()[0], a);
        assert_eq!(trail.points()[3], a);
        assert!(trail.is_closed());
        assert_eq!(trail.indices(), &[0, 2, 1, 0]);
    }

    #[test]
    fn open_chain_is_reported_in_completion_order() {
        let pts = square_points();
        let (a, b, c) = (pts[0], pts[1], pts[2]);
        let mut g = CurveGraph::new(vec![a, b, c]);
        assert!(g.add_edge(&a, &b));
        assert!(g.add_edge(&b, &c));

        let trail = g.extract_trail(0).unwrap();
        assert_eq!(trail.points(), &[c, b, a]);
        assert_eq!(trail.reversed().points(), &[a, b, c]);
        assert!(!trail.is_closed());
        assert_eq!(trail.edge_count(), 2);
    }

    #[test]
    fn parallel_copies_are_each_walked_once() {
        let g = graph(&[(0, 1), (0, 1)]);
        let trail = g.extract_trail(0).unwrap();
        assert_eq!(trail.indices(), &[0, 1, 0]);
    }

    #[test]
    fn figure_with_chord_uses_every_edge() {
        // Square plus one diagonal: 0 and 2 are odd.
        let g = graph(&[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        let trail = g.extract_trail(2).unwrap();
        assert_eq!(trail.len(), 6);
        let mut walked: Vec<(usize, usize)> = trail
            .indices()
            .windows(2)
            .map(|w| (w[0].min(w[1]), w[0].max(w[1])))
            .collect();
        walked.sort_unstable();
        assert_eq!(walked, vec![(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);
        assert_relative_eq!(trail.length(), 4.0 + 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn non_eulerian_graph_is_refused() {
        let err = graph(&[(0, 1), (2, 3)]).extract_trail(0).unwrap_err();
        assert!(matches!(
            err,
            StitchError::Traversal(TraversalError::NonEulerian {
                odd_vertices: 4,
                connected: false
            })
        ));
    }

    #[test]
    fn path_graph_rejects_even_start() {
        let err = graph(&[(0, 1), (1, 2)]).extract_trail(1).unwrap_err();
        assert!(matches!(
            err,
            StitchError::Traversal(TraversalError::InvalidStart { start: 1, .. })
        ));
    }

    #[test]
    fn isolated_start_is_rejected() {
        let err = graph(&[(0, 1), (1, 2), (2, 0)]).extract_trail(3).unwrap_err();
        assert!(matches!(
            err,
            StitchError::Traversal(TraversalError::InvalidStart { start: 3, .. })
        ));
    }

    #[test]
    fn out_of_range_start_is_rejected() {
        let err = graph(&[(0, 1)]).extract_trail(4).unwrap_err();
        assert!(matches!(
            err,
            StitchError::Graph(GraphError::VertexOutOfRange { index: 4, count: 4 })
        ));
    }

    #[test]
    fn edgeless_graph_yields_single_point() {
        let trail = graph(&[]).extract_trail(2).unwrap();
        assert_eq!(trail.indices(), &[2]);
        assert_eq!(trail.edge_count(), 0);
        assert!(!trail.is_closed());
    }

    #[test]
    fn auto_start_picks_odd_vertex_on_path() {
        let trail = graph(&[(1, 2), (2, 3)]).extract_trail_auto().unwrap();
        assert_eq!(trail.indices(), &[3, 2, 1]);
    }

    #[test]
    fn auto_start_on_non_eulerian_graph_fails() {
        let err = graph(&[(0, 1), (0, 2), (0, 3)]).extract_trail_auto().unwrap_err();
        assert!(matches!(
            err,
            StitchError::Traversal(TraversalError::NonEulerian {
                odd_vertices: 4,
                connected: true
            })
        ));
    }

    #[test]
    fn auto_start_on_empty_graph_fails() {
        let err = CurveGraph::new(Vec::new()).extract_trail_auto().unwrap_err();
        assert!(matches!(
            err,
            StitchError::Graph(GraphError::VertexOutOfRange { index: 0, count: 0 })
        ));
    }

    #[test]
    fn walk_from_even_vertex_of_path_reports_break() {
        let walk = graph(&[(0, 1), (1, 2)]).walk(1).unwrap();
        assert_eq!(walk.indices(), &[0, 2, 1]);
        assert_eq!(walk.breaks(), 1);
        assert_eq!(walk.residual_edges(), 0);
        let err = walk.into_trail().unwrap_err();
        assert!(matches!(
            err,
            StitchError::Traversal(TraversalError::IncompleteTraversal {
                start: 1,
                breaks: 1,
                residual_edges: 0
            })
        ));
    }

    #[test]
    fn walk_on_disconnected_graph_leaves_residual_edges() {
        let walk = graph(&[(0, 1), (2, 3)]).walk(0).unwrap();
        assert_eq!(walk.indices(), &[1, 0]);
        assert_eq!(walk.residual_edges(), 1);
        assert!(!walk.is_complete());
    }

    #[test]
    fn walk_from_valid_start_is_complete() {
        let walk = graph(&[(0, 1), (1, 2), (2, 3), (3, 0)]).walk(1).unwrap();
        assert_eq!(walk.start(), 1);
        assert!(walk.is_complete());
        let trail = walk.into_trail().unwrap();
        assert_eq!(trail.len(), 5);
        assert_eq!(trail.indices()[0], 1);
    }
}
