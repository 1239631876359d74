use super::{Point2, TOLERANCE};

/// Orientation of a closed polygon in the XY plane (Y up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
}

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
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

/// Signed area of the triangle `(a, b, c)`; positive when counter-clockwise.
#[must_use]
pub fn triangle_signed_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    0.5 * cross(a, b, c)
}

/// Twice the signed area of `(a, b, c)`: positive when `c` is left of `a -> b`.
fn cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Returns the winding of a polygon, or `None` if its area is (nearly) zero.
#[must_use]
pub fn winding(points: &[Point2]) -> Option<Winding> {
    let area = signed_area_2d(points);
    if area > TOLERANCE {
        Some(Winding::CounterClockwise)
    } else if area < -TOLERANCE {
        Some(Winding::Clockwise)
    } else {
        None
    }
}

/// Returns `true` if the turn `previous -> current -> next` bends with
/// `winding` by more than [`TOLERANCE`].
///
/// Collinear and reflex vertices are not convex.
#[must_use]
pub fn is_convex(previous: &Point2, current: &Point2, next: &Point2, winding: Winding) -> bool {
    let turn = cross(previous, current, next);
    match winding {
        Winding::CounterClockwise => turn > TOLERANCE,
        Winding::Clockwise => turn < -TOLERANCE,
    }
}

/// Returns `true` if `point` lies inside the triangle `(a, b, c)` or within
/// [`TOLERANCE`] of its boundary, for either orientation.
///
/// The triangle must not be degenerate.
#[must_use]
pub fn point_in_triangle(a: &Point2, b: &Point2, c: &Point2, point: &Point2) -> bool {
    let sides = [cross(a, b, point), cross(b, c, point), cross(c, a, point)];
    let any_left = sides.iter().any(|&side| side > TOLERANCE);
    let any_right = sides.iter().any(|&side| side < -TOLERANCE);
    !(any_left && any_right)
}

/// Largest cosine among the three interior angles of the triangle `(a, b, c)`.
///
/// This is the cosine of the triangle's smallest angle. Returns `None` when
/// an edge has zero length.
#[must_use]
pub fn max_cosine(a: &Point2, b: &Point2, c: &Point2) -> Option<f64> {
    let ab = (b - a).try_normalize(TOLERANCE)?;
    let ac = (c - a).try_normalize(TOLERANCE)?;
    let bc = (c - b).try_normalize(TOLERANCE)?;

    let cos_a = ab.dot(&ac);
    let cos_b = (-ab).dot(&bc);
    let cos_c = (-ac).dot(&(-bc));
    Some(cos_a.max(cos_b).max(cos_c))
}
