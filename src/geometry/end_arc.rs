use std::f64::consts::PI;

use crate::config::PieceConfig;
use crate::math::{lerp, Point2, Vector2};

use super::edge::{EdgeType, Side};

/// Canonical tab profile: offsets along the bottom side, bulging outward (-Y).
///
/// The first and last offsets sit on the edge line (`y = 0`); the middle
/// offset is the apex. Offsets run from +X to -X, matching the direction in
/// which the outline walks the bottom side. Every other side and edge type
/// reuses these offsets through [`Side::transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct EndArc {
    offsets: Vec<Vector2>,
}

impl EndArc {
    /// Builds the arc for the radius, segment count and circle fraction of `config`.
    ///
    /// `config` is expected to be validated.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(config: &PieceConfig) -> Self {
        let radius = config.radius;
        let segments = config.segments;

        // Shift the circle so the arc starts exactly on the edge line.
        let start_y = ((config.circle_fraction - 0.5) * 2.0).clamp(-1.0, 1.0);
        let start_angle = start_y.acos();
        let offset_y = -radius * start_angle.cos();

        let half: Vec<Vector2> = (0..segments)
            .map(|i| {
                let angle = lerp(start_angle, PI, i as f64 / segments as f64);
                Vector2::new(radius * angle.sin(), radius * angle.cos() + offset_y)
            })
            .collect();
        let apex = Vector2::new(0.0, -radius + offset_y);

        let mut offsets = Vec::with_capacity(config.arc_vertex_count());
        offsets.extend_from_slice(&half);
        offsets.push(apex);
        offsets.extend(half.iter().rev().map(|v| Vector2::new(-v.x, v.y)));

        Self { offsets }
    }

    /// The canonical offsets.
    #[must_use]
    pub fn offsets(&self) -> &[Vector2] {
        &self.offsets
    }

    /// Number of vertices in one arc.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the arc has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Arc vertices placed on `side` of a `width` x `height` piece.
    ///
    /// Yields nothing for [`EdgeType::Flat`].
    pub fn placed(
        &self,
        side: Side,
        edge: EdgeType,
        width: f64,
        height: f64,
    ) -> impl Iterator<Item = Point2> + '_ {
        let center = side.center(width, height);
        let offsets: &[Vector2] = if edge == EdgeType::Flat {
            &[]
        } else {
            &self.offsets
        };
        offsets
            .iter()
            .map(move |offset| center + side.transform(offset, edge))
    }
}
