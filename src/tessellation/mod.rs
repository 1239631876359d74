mod ear_clip;

pub use ear_clip::Triangulate;

use crate::geometry::Outline;
use crate::math::Point3;

/// How the triangulator picks among the valid ears of one clipping pass.
///
/// The score of an ear is the largest cosine of its three angles; lower is
/// better (a fatter triangle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EarSelection {
    /// Take the first valid ear after the ring head and stop scanning. Every
    /// valid ear scores at most 1.0, so no ear is ever passed over.
    #[default]
    FirstAcceptable,
    /// Score every valid ear in the ring and take the lowest; ties go to the
    /// ear found first.
    BestInPass,
}

/// A triangulated 2D polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    /// The outline the triangles index into.
    pub outline: Outline,
    /// Triangle indices into `outline` (each triple defines a triangle).
    pub triangles: Vec<[u32; 3]>,
}

impl Face {
    /// Number of outline vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.outline.len()
    }

    /// Number of indices in the flattened triangle list.
    #[must_use]
    pub fn index_count(&self) -> usize {
        3 * self.triangles.len()
    }
}

/// A closed triangle mesh built by extruding a [`Face`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolidMesh {
    /// Vertex positions: front copies first, then back copies.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl SolidMesh {
    /// Creates an empty mesh with room for the given vertex and triangle counts.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count),
        }
    }

    /// Number of indices in the flattened index buffer.
    #[must_use]
    pub fn index_count(&self) -> usize {
        3 * self.indices.len()
    }

    /// The index buffer as a flat list, ready for upload.
    #[must_use]
    pub fn flat_indices(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }
}
