use crate::error::{OperationError, Result};
use crate::geometry::Outline;
use crate::math::polygon_2d::triangle_signed_area;
use crate::tessellation::Face;

/// Computes the signed area of an outline or of its triangulation.
///
/// Positive for counter-clockwise (Y up). A correct triangulation covers the
/// outline exactly, so both values agree up to rounding.
pub struct SignedArea<'a> {
    outline: &'a Outline,
    triangles: Option<&'a [[u32; 3]]>,
}

impl<'a> SignedArea<'a> {
    /// Creates a query for the shoelace area of `outline`.
    #[must_use]
    pub fn of_outline(outline: &'a Outline) -> Self {
        Self {
            outline,
            triangles: None,
        }
    }

    /// Creates a query summing the signed areas of `triangles` over `outline`.
    #[must_use]
    pub fn of_triangles(outline: &'a Outline, triangles: &'a [[u32; 3]]) -> Self {
        Self {
            outline,
            triangles: Some(triangles),
        }
    }

    /// Creates a query summing the triangles of a face.
    #[must_use]
    pub fn of_face(face: &'a Face) -> Self {
        Self::of_triangles(&face.outline, &face.triangles)
    }

    /// Executes the query, returning the signed area.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if a triangle indexes past
    /// the end of the outline.
    pub fn execute(&self) -> Result<f64> {
        let Some(triangles) = self.triangles else {
            return Ok(self.outline.signed_area());
        };

        let points = self.outline.vertices();
        let mut area = 0.0;
        for triangle in triangles {
            let [a, b, c] = triangle.map(|i| points.get(i as usize));
            let (Some(pa), Some(pb), Some(pc)) = (a, b, c) else {
                return Err(OperationError::InvalidInput(format!(
                    "triangle {triangle:?} indexes past {} outline vertices",
                    points.len()
                ))
                .into());
            };
            area += triangle_signed_area(pa, pb, pc);
        }
        Ok(area)
    }
}
