#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use jigsaw_mesh::config::PieceConfig;
use jigsaw_mesh::context::JigsawContext;
use jigsaw_mesh::geometry::EdgeType::{Flat, Inward, Outward};
use jigsaw_mesh::geometry::Permutation;
use jigsaw_mesh::operations::{BuildSolid, GenerateFace, IsValid, SignedArea};
use jigsaw_mesh::tessellation::{EarSelection, Face};

fn check_face(ctx: &JigsawContext, permutation: Permutation, face: &Face) {
    let n = face.vertex_count();
    let expected = 4 + permutation.non_flat_sides() * ctx.config().arc_vertex_count();
    assert_eq!(n, expected, "{permutation}");
    assert_eq!(face.triangles.len(), n - 2, "{permutation}");
    assert!(
        face.triangles
            .iter()
            .flatten()
            .all(|&i| (i as usize) < n),
        "{permutation}"
    );

    // The triangles tile the outline exactly.
    let outline_area = SignedArea::of_outline(&face.outline).execute().unwrap().abs();
    let triangle_area = SignedArea::of_face(face).execute().unwrap().abs();
    assert_relative_eq!(outline_area, triangle_area, epsilon = 1e-9);
}

fn check_every_permutation(config: PieceConfig) {
    let ctx = JigsawContext::new(config).unwrap();
    for permutation in Permutation::all() {
        let face = GenerateFace::new(permutation).execute(&ctx).unwrap();
        check_face(&ctx, permutation, &face);

        let n = face.vertex_count();
        let solid = BuildSolid::new(permutation).execute(&ctx).unwrap();
        assert_eq!(solid.vertices.len(), 2 * n, "{permutation}");
        assert_eq!(solid.index_count(), 2 * (n - 2) * 3 + n * 6, "{permutation}");
        assert!(IsValid::new(&solid).execute(), "{permutation}");
    }
}

#[test]
fn every_permutation_with_default_config() {
    check_every_permutation(PieceConfig::default());
}

#[test]
fn every_permutation_with_best_ear_selection() {
    check_every_permutation(PieceConfig::default().with_ear_selection(EarSelection::BestInPass));
}

#[test]
fn every_permutation_with_finer_arcs() {
    check_every_permutation(PieceConfig::default().with_segments(8));
}

#[test]
fn every_permutation_with_single_segment_arcs() {
    check_every_permutation(PieceConfig::default().with_segments(1));
}

#[test]
fn every_permutation_with_shallow_tabs() {
    check_every_permutation(PieceConfig::default().with_circle_fraction(0.6));
}

#[test]
fn every_permutation_on_a_square_piece() {
    check_every_permutation(
        PieceConfig::default()
            .with_size(3.0, 3.0)
            .with_radius(0.4)
            .with_circle_fraction(0.7)
            .with_depth(0.25),
    );
}

#[test]
fn every_permutation_with_minimal_square_arcs() {
    let config = PieceConfig::default()
        .with_size(3.0, 3.0)
        .with_radius(0.2)
        .with_segments(1)
        .with_circle_fraction(0.5);
    check_every_permutation(config);
    check_every_permutation(config.with_ear_selection(EarSelection::BestInPass));
}

#[test]
fn every_permutation_with_wide_necked_tabs() {
    let config = PieceConfig::default()
        .with_radius(0.7)
        .with_circle_fraction(0.7);
    check_every_permutation(config);
    check_every_permutation(config.with_ear_selection(EarSelection::BestInPass));
}

#[test]
fn every_valid_config_in_a_parameter_grid_triangulates() {
    let mut checked = 0;
    for (width, height) in [(3.0, 3.0), (4.0, 3.25), (2.0, 5.0)] {
        for radius in [0.2, 0.6, 0.95] {
            for segments in [1, 3] {
                for circle_fraction in [0.5, 0.7, 0.9] {
                    for selection in [EarSelection::FirstAcceptable, EarSelection::BestInPass] {
                        let config = PieceConfig::default()
                            .with_size(width, height)
                            .with_radius(radius)
                            .with_segments(segments)
                            .with_circle_fraction(circle_fraction)
                            .with_ear_selection(selection);
                        let Ok(ctx) = JigsawContext::new(config) else {
                            continue;
                        };
                        for permutation in Permutation::all() {
                            let face = GenerateFace::new(permutation)
                                .execute(&ctx)
                                .unwrap_or_else(|e| panic!("{:?} {permutation}: {e}", ctx.config()));
                            check_face(&ctx, permutation, &face);
                        }
                        checked += 1;
                    }
                }
            }
        }
    }
    assert!(checked > 0);
}

#[test]
fn two_tabs_two_notches_piece() {
    let ctx = JigsawContext::new(PieceConfig::default()).unwrap();
    let permutation = Permutation::new(Outward, Outward, Inward, Inward);

    let face = GenerateFace::new(permutation).execute(&ctx).unwrap();
    assert_eq!(face.vertex_count(), 48);
    assert_eq!(face.triangles.len(), 46);

    let solid = BuildSolid::new(permutation).execute(&ctx).unwrap();
    assert_eq!(solid.vertices.len(), 96);
    assert_eq!(solid.flat_indices().len(), 576);
    assert!(solid.vertices.iter().all(|v| (v.z.abs() - 0.5).abs() < 1e-12));
}

#[test]
fn one_tab_piece_counts() {
    let ctx = JigsawContext::new(PieceConfig::default()).unwrap();
    let face = GenerateFace::new(Permutation::new(Outward, Flat, Flat, Flat))
        .execute(&ctx)
        .unwrap();
    assert_eq!(face.vertex_count(), 15);
    assert_eq!(face.triangles.len(), 13);
}

#[test]
fn generation_is_deterministic() {
    let ctx = JigsawContext::new(PieceConfig::default()).unwrap();
    for permutation in [
        Permutation::FIRST,
        Permutation::new(Inward, Flat, Outward, Inward),
        Permutation::new(Flat, Flat, Flat, Inward),
    ] {
        let a = BuildSolid::new(permutation).execute(&ctx).unwrap();
        let b = BuildSolid::new(permutation).execute(&ctx).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn invalid_config_is_rejected_before_generation() {
    assert!(JigsawContext::new(PieceConfig::default().with_segments(0)).is_err());
    assert!(JigsawContext::new(PieceConfig::default().with_radius(2.0)).is_err());
    assert!(JigsawContext::new(PieceConfig::default().with_depth(-1.0)).is_err());
}
