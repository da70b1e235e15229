mod network;
mod stroke_order;

pub use network::CurveNetwork;
pub use stroke_order::{StartVertex, StrokeOrder, StrokeOrder2D};
