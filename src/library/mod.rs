pub mod piece;

pub use piece::JigsawPiece;

use std::collections::BTreeMap;

use slotmap::SlotMap;
use tracing::{debug, info};

use crate::context::JigsawContext;
use crate::error::{GeometryError, Result};
use crate::geometry::Permutation;
use crate::math::Point2;
use crate::operations::BuildSolid;
use crate::tessellation::SolidMesh;

slotmap::new_key_type! {
    /// Handle to a mesh owned by a [`MeshLibrary`].
    pub struct MeshId;
}

/// Owns one solid mesh per permutation.
///
/// Meshes live in a slot arena and are found through an ordered
/// permutation index, so pieces can share a mesh by holding its [`MeshId`].
/// The library does not track which context built its meshes; call
/// [`clear`](Self::clear) after switching to a context with a different
/// configuration.
#[derive(Debug, Default)]
pub struct MeshLibrary {
    meshes: SlotMap<MeshId, SolidMesh>,
    index: BTreeMap<Permutation, MeshId>,
}

impl MeshLibrary {
    /// Creates a new, empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and stores a mesh for every enumerated permutation not yet present.
    ///
    /// Returns the number of meshes built.
    ///
    /// # Errors
    ///
    /// Returns the first pipeline error; meshes built before it are kept.
    pub fn populate(&mut self, ctx: &JigsawContext) -> Result<usize> {
        let mut built = 0;
        for permutation in Permutation::all() {
            if self.index.contains_key(&permutation) {
                continue;
            }
            self.insert(ctx, permutation)?;
            built += 1;
        }
        info!(built, total = self.len(), "populated mesh library");
        Ok(built)
    }

    /// Returns the mesh for `permutation`, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::FlatPermutation`] for the all-flat
    /// permutation, or the pipeline error if the mesh cannot be built.
    pub fn get_or_build(&mut self, ctx: &JigsawContext, permutation: Permutation) -> Result<MeshId> {
        if let Some(&id) = self.index.get(&permutation) {
            return Ok(id);
        }
        self.insert(ctx, permutation)
    }

    /// Creates a piece at `position`, sharing the library's mesh for its permutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh cannot be built.
    pub fn spawn_piece(
        &mut self,
        ctx: &JigsawContext,
        position: Point2,
        permutation: Permutation,
    ) -> Result<JigsawPiece> {
        let mesh = self.get_or_build(ctx, permutation)?;
        Ok(JigsawPiece::new(position, permutation, mesh))
    }

    fn insert(&mut self, ctx: &JigsawContext, permutation: Permutation) -> Result<MeshId> {
        if permutation.is_all_flat() {
            return Err(GeometryError::FlatPermutation.into());
        }
        let mesh = BuildSolid::new(permutation).execute(ctx)?;
        debug!(
            %permutation,
            vertices = mesh.vertices.len(),
            indices = mesh.index_count(),
            "cached mesh"
        );
        let id = self.meshes.insert(mesh);
        self.index.insert(permutation, id);
        Ok(id)
    }

    /// The handle of the mesh cached for `permutation`, if any.
    #[must_use]
    pub fn mesh_id(&self, permutation: &Permutation) -> Option<MeshId> {
        self.index.get(permutation).copied()
    }

    /// Returns a reference to the mesh, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is not in this library.
    pub fn mesh(&self, id: MeshId) -> Result<&SolidMesh> {
        self.meshes
            .get(id)
            .ok_or_else(|| GeometryError::EntityNotFound("mesh".into()).into())
    }

    /// Returns `true` if a mesh is cached for `permutation`.
    #[must_use]
    pub fn contains(&self, permutation: &Permutation) -> bool {
        self.index.contains_key(permutation)
    }

    /// Cached permutations in ascending order.
    pub fn permutations(&self) -> impl Iterator<Item = &Permutation> + '_ {
        self.index.keys()
    }

    /// Number of cached meshes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no mesh is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Drops every cached mesh. Existing [`MeshId`]s become stale.
    pub fn clear(&mut self) {
        self.meshes.clear();
        self.index.clear();
    }
}
