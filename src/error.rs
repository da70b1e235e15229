use thiserror::Error;

/// Top-level error type for the stroke solver.
#[derive(Debug, Error)]
pub enum StitchError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

/// Errors raised while populating a [`CurveGraph`](crate::graph::CurveGraph).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("edge endpoints resolve to the same vertex")]
    SelfLoop,

    #[error("no vertex at ({x}, {y})")]
    UnresolvedEndpoint { x: f64, y: f64 },

    #[error("vertex index {index} is out of range for {count} vertices")]
    VertexOutOfRange { index: usize, count: usize },
}

/// Errors raised while extracting a trail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("graph has no single-stroke trail ({odd_vertices} odd vertices, connected: {connected})")]
    NonEulerian { odd_vertices: usize, connected: bool },

    #[error("vertex {start} cannot start a trail: {reason}")]
    InvalidStart { start: usize, reason: &'static str },

    #[error(
        "walk from vertex {start} did not form one stroke ({breaks} breaks, {residual_edges} edges left)"
    )]
    IncompleteTraversal {
        start: usize,
        breaks: usize,
        residual_edges: usize,
    },
}

/// Convenience type alias for results using [`StitchError`].
pub type Result<T> = std::result::Result<T, StitchError>;
