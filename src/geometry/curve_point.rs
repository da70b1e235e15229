use crate::math::distance_2d::points_coincide;
use crate::math::Point2;

/// Reference to the source curve a [`CurvePoint`] was found on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveRef {
    /// Index of the curve in the caller's artwork.
    pub curve: usize,
    /// Curve parameter of the point, used to order points along the curve.
    pub t: f64,
}

impl CurveRef {
    /// Creates a new curve reference.
    #[must_use]
    pub fn new(curve: usize, t: f64) -> Self {
        Self { curve, t }
    }
}

/// A position on a vector curve: an intersection or an end point.
///
/// Graph identity is positional. Two curve points found independently on
/// two crossing curves carry different [`CurveRef`]s but name the same
/// vertex when [`coincides`](Self::coincides) holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// The 2D position of the point.
    pub point: Point2,
    /// The curve this point lies on.
    pub curve: CurveRef,
}

impl CurvePoint {
    /// Creates a new curve point.
    #[must_use]
    pub fn new(point: Point2, curve: CurveRef) -> Self {
        Self { point, curve }
    }

    /// Creates a curve point at `(x, y)` on `curve` at parameter `t`.
    #[must_use]
    pub fn at(x: f64, y: f64, curve: usize, t: f64) -> Self {
        Self {
            point: Point2::new(x, y),
            curve: CurveRef::new(curve, t),
        }
    }

    /// Returns whether both points denote the same graph vertex.
    #[must_use]
    pub fn coincides(&self, other: &CurvePoint, tolerance: f64) -> bool {
        points_coincide(&self.point, &other.point, tolerance)
    }
}
