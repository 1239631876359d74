use crate::error::Result;
use crate::geometry::Permutation;
use crate::math::Point2;
use crate::tessellation::SolidMesh;

use super::{MeshId, MeshLibrary};

/// A placed jigsaw piece: where it is, its edge profile, and the shared mesh it renders with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JigsawPiece {
    /// Position of the piece centre in the puzzle plane.
    pub position: Point2,
    /// Edge profile of the piece.
    pub permutation: Permutation,
    /// Handle to the mesh in the owning [`MeshLibrary`].
    pub mesh: MeshId,
}

impl JigsawPiece {
    /// Creates a piece from its parts.
    #[must_use]
    pub fn new(position: Point2, permutation: Permutation, mesh: MeshId) -> Self {
        Self {
            position,
            permutation,
            mesh,
        }
    }

    /// Resolves the piece's mesh in `library`.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is no longer in the library.
    pub fn mesh<'a>(&self, library: &'a MeshLibrary) -> Result<&'a SolidMesh> {
        library.mesh(self.mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::PieceConfig;
    use crate::context::JigsawContext;
    use crate::geometry::EdgeType::{Flat, Inward, Outward};

    #[test]
    fn pieces_with_equal_permutations_share_a_mesh() {
        let ctx = JigsawContext::new(PieceConfig::default()).unwrap();
        let mut library = MeshLibrary::new();
        let p = Permutation::new(Flat, Outward, Inward, Flat);

        let a = library.spawn_piece(&ctx, Point2::new(0.0, 0.0), p).unwrap();
        let b = library.spawn_piece(&ctx, Point2::new(4.0, 0.0), p).unwrap();

        assert_eq!(a.mesh, b.mesh);
        assert_ne!(a.position, b.position);
        assert_eq!(library.len(), 1);
        assert_eq!(a.mesh(&library).unwrap().vertices.len(), 2 * (4 + 22));
    }

    #[test]
    fn stale_piece_mesh_is_an_error() {
        let ctx = JigsawContext::new(PieceConfig::default()).unwrap();
        let mut library = MeshLibrary::new();
        let piece = library
            .spawn_piece(&ctx, Point2::origin(), Permutation::FIRST)
            .unwrap();
        library.clear();
        assert!(piece.mesh(&library).is_err());
    }
}
