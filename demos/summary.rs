//! Builds the full mesh library and logs a summary of it.
//!
//! Run with `RUST_LOG=jigsaw_mesh=debug` to see every cached mesh.

use jigsaw_mesh::config::PieceConfig;
use jigsaw_mesh::context::JigsawContext;
use jigsaw_mesh::geometry::{EdgeType, Permutation};
use jigsaw_mesh::library::MeshLibrary;
use jigsaw_mesh::math::Point2;
use jigsaw_mesh::operations::IsValid;
use tracing::info;

fn main() -> Result<(), jigsaw_mesh::JigsawError> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("summary=info".parse().unwrap_or_default())
        .add_directive("jigsaw_mesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ctx = JigsawContext::new(PieceConfig::default())?;
    let mut library = MeshLibrary::new();
    library.populate(&ctx)?;

    let (vertices, indices) = library
        .permutations()
        .filter_map(|p| library.mesh_id(p))
        .filter_map(|id| library.mesh(id).ok())
        .fold((0, 0), |(v, i), mesh| {
            (v + mesh.vertices.len(), i + mesh.index_count())
        });
    info!(meshes = library.len(), vertices, indices, "library ready");

    let permutation = Permutation::new(
        EdgeType::Outward,
        EdgeType::Outward,
        EdgeType::Inward,
        EdgeType::Inward,
    );
    let piece = library.spawn_piece(&ctx, Point2::new(0.0, 0.0), permutation)?;
    let mesh = piece.mesh(&library)?;
    info!(
        %permutation,
        vertices = mesh.vertices.len(),
        indices = mesh.index_count(),
        closed = IsValid::new(mesh).execute(),
        "sample piece"
    );

    Ok(())
}
