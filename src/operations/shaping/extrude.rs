use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::tessellation::{Face, SolidMesh};

/// Extrudes a triangulated face along Z into a closed solid mesh.
///
/// The solid is centred on `z = 0`: front cap at `+depth / 2`, back cap at
/// `-depth / 2`. Vertex layout is all front copies followed by all back
/// copies, so back vertex `i` is `i + n`. Index layout is front triangles,
/// back triangles, then two triangles per outline edge for the side walls.
///
/// Faces and walls share one winding: outward-facing when the face outline
/// runs counter-clockwise seen from +Z, inward-facing otherwise.
pub struct Extrude {
    depth: f64,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(depth: f64) -> Self {
        Self { depth }
    }

    /// Executes the extrusion.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the depth is not a
    /// positive finite number, the face has fewer than 3 vertices, or the
    /// vertex count exceeds the `u32` index range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self, face: &Face) -> Result<SolidMesh> {
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "extrude depth must be positive, got {}",
                self.depth
            ))
            .into());
        }

        let n = face.vertex_count();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "cannot extrude a face with {n} vertices"
            ))
            .into());
        }
        let Some(vertex_count) = n.checked_mul(2).filter(|&c| u32::try_from(c).is_ok()) else {
            return Err(OperationError::InvalidInput(format!(
                "{n} face vertices exceed the u32 index range"
            ))
            .into());
        };

        let front_z = 0.5 * self.depth;
        let back_z = -0.5 * self.depth;
        let triangle_count = 2 * face.triangles.len() + 2 * n;
        let mut mesh = SolidMesh::with_capacity(vertex_count, triangle_count);

        let points = face.outline.vertices();
        mesh.vertices
            .extend(points.iter().map(|p| Point3::new(p.x, p.y, front_z)));
        mesh.vertices
            .extend(points.iter().map(|p| Point3::new(p.x, p.y, back_z)));

        let back = n as u32;

        // Front cap keeps the 2D winding; the back cap is reversed.
        mesh.indices.extend_from_slice(&face.triangles);
        mesh.indices.extend(
            face.triangles
                .iter()
                .map(|&[a, b, c]| [a + back, c + back, b + back]),
        );

        // One quad per outline edge, wrapping last -> first.
        let mut previous = back - 1;
        for front in 0..back {
            let previous_back = previous + back;
            let front_back = front + back;
            mesh.indices.push([previous, previous_back, front]);
            mesh.indices.push([previous_back, front_back, front]);
            previous = front;
        }

        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Outline;
    use crate::math::{Point2, Vector3};
    use crate::operations::query::IsValid;
    use crate::tessellation::Triangulate;

    fn face(points: &[(f64, f64)]) -> Face {
        let outline: Outline = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        let triangles = Triangulate::new(&outline).execute().unwrap();
        Face { outline, triangles }
    }

    fn unit_square() -> Face {
        face(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    // ── Counts ─────────────────────────────────────────────────

    #[test]
    fn unit_cube_counts() {
        let square = unit_square();
        let mesh = Extrude::new(1.0).execute(&square).unwrap();

        assert_eq!(mesh.vertices.len(), 8);
        // 2 front + 2 back + 4 sides × 2
        assert_eq!(mesh.indices.len(), 12);
        assert_eq!(mesh.index_count(), 2 * square.index_count() + 6 * square.vertex_count());
    }

    #[test]
    fn l_shape_counts() {
        let l = face(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (2.0, 2.0), (2.0, 4.0), (0.0, 4.0)]);
        let mesh = Extrude::new(3.0).execute(&l).unwrap();
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.index_count(), 2 * 12 + 6 * 6);
        assert!(IsValid::new(&mesh).execute());
    }

    // ── Layout ─────────────────────────────────────────────────

    #[test]
    fn front_then_back_copies() {
        let square = unit_square();
        let mesh = Extrude::new(2.0).execute(&square).unwrap();
        for (i, p) in square.outline.vertices().iter().enumerate() {
            assert_eq!(mesh.vertices[i], Point3::new(p.x, p.y, 1.0));
            assert_eq!(mesh.vertices[i + 4], Point3::new(p.x, p.y, -1.0));
        }
    }

    #[test]
    fn back_cap_swaps_second_and_third_index() {
        let square = unit_square();
        let mesh = Extrude::new(1.0).execute(&square).unwrap();
        let t = square.triangles.len();
        for (i, &[a, b, c]) in square.triangles.iter().enumerate() {
            assert_eq!(mesh.indices[i], [a, b, c]);
            assert_eq!(mesh.indices[t + i], [a + 4, c + 4, b + 4]);
        }
    }

    #[test]
    fn first_wall_quad_closes_the_loop() {
        let square = unit_square();
        let mesh = Extrude::new(1.0).execute(&square).unwrap();
        let walls = &mesh.indices[2 * square.triangles.len()..];
        assert_eq!(walls[0], [3, 7, 0]);
        assert_eq!(walls[1], [7, 4, 0]);
        assert_eq!(walls[2], [0, 4, 1]);
    }

    // ── Orientation ────────────────────────────────────────────

    #[test]
    fn counter_clockwise_face_gives_outward_normals() {
        let mesh = Extrude::new(3.0)
            .execute(&face(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]))
            .unwrap();
        let centroid = Point3::new(1.0, 1.0, 0.0);

        for &[a, b, c] in &mesh.indices {
            let (pa, pb, pc) = (
                mesh.vertices[a as usize],
                mesh.vertices[b as usize],
                mesh.vertices[c as usize],
            );
            let normal: Vector3 = (pb - pa).cross(&(pc - pa));
            let center = Point3::from((pa.coords + pb.coords + pc.coords) / 3.0);
            assert!(
                normal.dot(&(center - centroid)) > 0.0,
                "triangle [{a}, {b}, {c}] faces inward"
            );
        }
    }

    #[test]
    fn solid_is_closed() {
        let mesh = Extrude::new(1.0).execute(&unit_square()).unwrap();
        assert!(IsValid::new(&mesh).execute());
    }

    // ── Error cases ────────────────────────────────────────────

    #[test]
    fn non_positive_depth_returns_error() {
        let square = unit_square();
        assert!(Extrude::new(0.0).execute(&square).is_err());
        assert!(Extrude::new(-1.0).execute(&square).is_err());
        assert!(Extrude::new(f64::INFINITY).execute(&square).is_err());
    }

    #[test]
    fn empty_face_returns_error() {
        assert!(Extrude::new(1.0).execute(&Face::default()).is_err());
    }
}
