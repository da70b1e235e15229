//! Continuous-stroke path solver.
//!
//! Curves cut at their mutual intersections form a multigraph whose
//! vertices are the cut points and whose edges are the pieces between
//! them. When that graph has an Eulerian trail, a plotter or stitching
//! machine can draw the whole artwork without lifting the pen.
//!
//! ```text
//! CurveNetwork --build--> CurveGraph --classify--> EulerKind
//!                              |
//!                              +--extract_trail / StrokeOrder2D--> Trail
//! ```

pub mod error;
pub mod geometry;
pub mod graph;
pub mod math;
pub mod operations;

pub use error::{Result, StitchError};
pub use geometry::{CurvePoint, CurveRef};
pub use graph::{CurveGraph, EulerKind, Trail, Walk};
pub use operations::{CurveNetwork, StartVertex, StrokeOrder, StrokeOrder2D};
