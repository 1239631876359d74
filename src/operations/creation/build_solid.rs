use crate::context::JigsawContext;
use crate::error::Result;
use crate::geometry::Permutation;
use crate::operations::shaping::Extrude;
use crate::tessellation::SolidMesh;

use super::GenerateFace;

/// Runs the full pipeline for one permutation: outline, triangulation and
/// extrusion to the configured depth.
pub struct BuildSolid {
    permutation: Permutation,
}

impl BuildSolid {
    /// Creates a new `BuildSolid` operation.
    #[must_use]
    pub fn new(permutation: Permutation) -> Self {
        Self { permutation }
    }

    /// Executes the pipeline, returning the solid mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the face cannot be generated or extruded.
    pub fn execute(&self, ctx: &JigsawContext) -> Result<SolidMesh> {
        let face = GenerateFace::new(self.permutation).execute(ctx)?;
        Extrude::new(ctx.config().depth).execute(&face)
    }
}
