pub mod distance_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for treating two curve points as the same position.
///
/// Intersection finders report the same crossing from both curves with
/// slightly different rounding, so exact equality would split one vertex
/// into two.
pub const TOLERANCE: f64 = 1e-9;
