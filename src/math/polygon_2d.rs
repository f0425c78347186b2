use super::Point3;

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The z component
/// is ignored, so a polygon that is not parallel to the XY plane yields its
/// projected area.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Unsigned area of a polygon in the XY plane.
#[must_use]
pub fn area_2d(points: &[Point3]) -> f64 {
    signed_area_2d(points).abs()
}

/// Euclidean distance between two points, using all three components.
#[must_use]
pub fn segment_length(a: &Point3, b: &Point3) -> f64 {
    (b - a).norm()
}
