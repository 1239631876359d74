//! Procedural jigsaw piece meshes.
//!
//! A piece is a rectangle whose four sides are each an outward tab, an
//! inward notch or flat. [`GenerateFace`](operations::GenerateFace) builds
//! the closed outline for a [`Permutation`](geometry::Permutation) and
//! triangulates it by ear clipping; [`Extrude`](operations::Extrude) turns
//! the face into a closed solid; [`MeshLibrary`](library::MeshLibrary)
//! caches one solid per permutation.
//!
//! ```
//! use jigsaw_mesh::config::PieceConfig;
//! use jigsaw_mesh::context::JigsawContext;
//! use jigsaw_mesh::geometry::{EdgeType, Permutation};
//! use jigsaw_mesh::operations::BuildSolid;
//!
//! let ctx = JigsawContext::new(PieceConfig::default())?;
//! let permutation = Permutation::new(
//!     EdgeType::Outward,
//!     EdgeType::Outward,
//!     EdgeType::Inward,
//!     EdgeType::Inward,
//! );
//! let mesh = BuildSolid::new(permutation).execute(&ctx)?;
//! assert_eq!(mesh.vertices.len(), 96);
//! # Ok::<(), jigsaw_mesh::JigsawError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod library;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{JigsawError, Result};
