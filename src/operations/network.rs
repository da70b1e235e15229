use tracing::debug;

use crate::geometry::CurvePoint;
use crate::graph::CurveGraph;
use crate::math::TOLERANCE;

/// A split point recorded on one curve.
#[derive(Debug, Clone, Copy)]
struct Stop {
    curve: usize,
    t: f64,
    vertex: usize,
}

/// Collects the split points of an artwork's curves and links them into a
/// [`CurveGraph`].
///
/// Every point is recorded on the curve named by its [`CurveRef`]. Points
/// at the same position share one vertex, so a crossing reported once per
/// curve joins both curves. [`build`](Self::build) then orders each
/// curve's points by parameter and adds one edge per consecutive pair.
///
/// [`CurveRef`]: crate::geometry::CurveRef
#[derive(Debug, Clone)]
pub struct CurveNetwork {
    vertices: Vec<CurvePoint>,
    stops: Vec<Stop>,
    closed: Vec<usize>,
    tolerance: f64,
}

impl Default for CurveNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveNetwork {
    /// Creates an empty network using [`TOLERANCE`] for position matching.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tolerance(TOLERANCE)
    }

    /// Creates an empty network with an explicit position tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            vertices: Vec::new(),
            stops: Vec::new(),
            closed: Vec::new(),
            tolerance,
        }
    }

    /// Records a split point and returns the index of its vertex.
    ///
    /// The first point seen at a position becomes the vertex's
    /// representative curve point.
    pub fn add_point(&mut self, point: CurvePoint) -> usize {
        let vertex = self.ensure_vertex(point);
        self.stops.push(Stop {
            curve: point.curve.curve,
            t: point.curve.t,
            vertex,
        });
        vertex
    }

    /// Marks `curve` as closed: its last point links back to its first.
    pub fn closed_curve(&mut self, curve: usize) {
        if !self.closed.contains(&curve) {
            self.closed.push(curve);
        }
    }

    /// Returns the number of distinct vertices recorded so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges [`build`](Self::build) would add.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments().len()
    }

    /// Builds the graph: one edge per curve segment between split points.
    #[must_use]
    pub fn build(self) -> CurveGraph {
        let segments = self.segments();
        let mut graph = CurveGraph::with_tolerance(self.vertices, self.tolerance);
        for &(u, v) in &segments {
            graph.link(u, v);
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = segments.len(),
            "curve network built"
        );
        graph
    }

    /// Consecutive vertex pairs along each curve, curves in ascending order.
    fn segments(&self) -> Vec<(usize, usize)> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| {
            a.curve
                .cmp(&b.curve)
                .then(a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal))
        });

        let mut segments = Vec::new();
        for run in stops.chunk_by(|a, b| a.curve == b.curve) {
            for pair in run.windows(2) {
                if pair[0].vertex != pair[1].vertex {
                    segments.push((pair[0].vertex, pair[1].vertex));
                }
            }
            if let (Some(first), Some(last)) = (run.first(), run.last()) {
                if self.closed.contains(&first.curve) && first.vertex != last.vertex {
                    segments.push((last.vertex, first.vertex));
                }
            }
        }
        segments
    }

    /// Finds or inserts a vertex at the point's position.
    fn ensure_vertex(&mut self, point: CurvePoint) -> usize {
        if let Some(i) = self
            .vertices
            .iter()
            .position(|v| v.coincides(&point, self.tolerance))
        {
            return i;
        }
        self.vertices.push(point);
        self.vertices.len() - 1
    }
}
