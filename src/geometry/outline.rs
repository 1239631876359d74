use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// A closed 2D polygon stored as an ordered list of vertices.
///
/// The last vertex connects back to the first. Vertices are only ever
/// appended; insertion order is the traversal order of the outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    vertices: Vec<Point2>,
}

impl Outline {
    /// Creates an empty outline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty outline with room for `vertex_count` vertices.
    #[must_use]
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
        }
    }

    /// Reserves room for at least `additional` more vertices.
    pub fn reserve(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    /// Appends a vertex to the end of the outline.
    pub fn push(&mut self, vertex: Point2) {
        self.vertices.push(vertex);
    }

    /// The vertices in traversal order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the outline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace area; positive when the outline runs counter-clockwise (Y up).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }
}

impl From<Vec<Point2>> for Outline {
    fn from(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }
}

impl FromIterator<Point2> for Outline {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}
