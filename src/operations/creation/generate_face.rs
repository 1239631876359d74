use tracing::debug;

use crate::context::JigsawContext;
use crate::error::{GeometryError, Result};
use crate::geometry::{Outline, Permutation, Side};
use crate::tessellation::{Face, Triangulate};

/// Builds and triangulates the 2D face of a piece with the given permutation.
///
/// The outline starts at the top-left corner and walks top, right, bottom,
/// then left; each side contributes its start corner followed by its arc
/// vertices, if any. In a Y-up frame this walk is clockwise.
pub struct GenerateFace {
    permutation: Permutation,
}

impl GenerateFace {
    /// Creates a new `GenerateFace` operation.
    #[must_use]
    pub fn new(permutation: Permutation) -> Self {
        Self { permutation }
    }

    /// Builds the closed outline without triangulating it.
    #[must_use]
    pub fn outline(&self, ctx: &JigsawContext) -> Outline {
        let config = ctx.config();
        let arc = ctx.end_arc();
        let (width, height) = (config.width, config.height);

        let mut outline = Outline::with_capacity(self.permutation.vertex_count(arc.len()));
        for side in Side::ALL {
            outline.push(side.start_corner(width, height));
            for vertex in arc.placed(side, self.permutation.edge(side), width, height) {
                outline.push(vertex);
            }
        }
        outline
    }

    /// Executes the operation, returning the triangulated face.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::FlatPermutation`] for the all-flat
    /// permutation, or a tessellation error if the outline cannot be
    /// triangulated.
    pub fn execute(&self, ctx: &JigsawContext) -> Result<Face> {
        if self.permutation.is_all_flat() {
            return Err(GeometryError::FlatPermutation.into());
        }

        let outline = self.outline(ctx);
        let triangles = Triangulate::new(&outline)
            .with_selection(ctx.config().ear_selection)
            .execute()?;

        debug!(
            permutation = %self.permutation,
            vertices = outline.len(),
            triangles = triangles.len(),
            "generated face"
        );
        Ok(Face { outline, triangles })
    }
}
