pub mod curve_point;

pub use curve_point::{CurvePoint, CurveRef};
