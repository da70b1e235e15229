use super::Point2;

/// Squared Euclidean distance between two points.
#[must_use]
pub fn distance_sq(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm_squared()
}

/// Returns whether `a` and `b` lie within `tolerance` of each other.
///
/// A `tolerance` of `0.0` degrades to exact coordinate equality.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    if tolerance <= 0.0 {
        return a == b;
    }
    distance_sq(a, b) <= tolerance * tolerance
}

/// Total length of the polyline through `points`, in order.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| distance_sq(&w[0], &w[1]).sqrt())
        .sum()
}
