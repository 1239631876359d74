use tracing::{debug, warn};

use crate::error::{Result, TessellationError};
use crate::geometry::Outline;
use crate::math::polygon_2d::{is_convex, max_cosine, point_in_triangle, winding, Winding};
use crate::math::Point2;

use super::EarSelection;

/// Worst possible ear score (the cosine of a zero angle).
const MAX_SCORE: f64 = 1.0;

/// Triangulates a simple polygon by ear clipping.
///
/// Produces `n - 2` triangles over the outline's vertex indices. Each
/// triangle is emitted as `(previous, ear, next)` and keeps the winding of
/// the outline. The outline may run either way round.
pub struct Triangulate<'a> {
    outline: &'a Outline,
    selection: EarSelection,
}

impl<'a> Triangulate<'a> {
    /// Creates a new `Triangulate` operation with the default ear selection.
    #[must_use]
    pub fn new(outline: &'a Outline) -> Self {
        Self {
            outline,
            selection: EarSelection::default(),
        }
    }

    /// Sets the ear selection policy.
    #[must_use]
    pub fn with_selection(mut self, selection: EarSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Executes the triangulation, returning the triangle index list.
    ///
    /// # Errors
    ///
    /// - [`TessellationError::TooFewVertices`] for fewer than 3 vertices.
    /// - [`TessellationError::Degenerate`] if the outline has zero area or
    ///   too many vertices for `u32` indices.
    /// - [`TessellationError::NoEar`] if a clipping pass finds no removable
    ///   ear, which means the outline is not simple. Collinear vertices and
    ///   vertices lying on a candidate diagonal are fine.
    pub fn execute(&self) -> Result<Vec<[u32; 3]>> {
        let points = self.outline.vertices();
        let n = points.len();
        if n < 3 {
            return Err(TessellationError::TooFewVertices(n).into());
        }
        if u32::try_from(n).is_err() {
            return Err(TessellationError::Degenerate(format!(
                "{n} vertices exceed the u32 index range"
            ))
            .into());
        }
        let winding = winding(points)
            .ok_or_else(|| TessellationError::Degenerate("outline has zero area".into()))?;

        let mut ring = Ring::new(points, winding);
        let mut triangles = Vec::with_capacity(n - 2);
        while ring.len > 3 {
            let Some(ear) = ring.select(self.selection) else {
                warn!(remaining = ring.len, "no removable ear, outline is not simple");
                return Err(TessellationError::NoEar {
                    remaining: ring.len,
                }
                .into());
            };
            triangles.push(ring.clip(ear));
        }
        triangles.push(ring.last());

        debug!(vertices = n, triangles = triangles.len(), ?winding, "triangulated outline");
        Ok(triangles)
    }
}

/// One vertex of the clipping ring. `next`/`prev` are positions in the arena.
#[derive(Debug, Clone, Copy)]
struct RingNode {
    index: u32,
    next: usize,
    prev: usize,
}

/// Circular doubly linked list of the vertices not yet clipped.
struct Ring<'a> {
    points: &'a [Point2],
    nodes: Vec<RingNode>,
    winding: Winding,
    head: usize,
    len: usize,
}

impl<'a> Ring<'a> {
    #[allow(clippy::cast_possible_truncation)]
    fn new(points: &'a [Point2], winding: Winding) -> Self {
        let n = points.len();
        let nodes = (0..n)
            .map(|i| RingNode {
                index: i as u32,
                next: (i + 1) % n,
                prev: (i + n - 1) % n,
            })
            .collect();
        Self {
            points,
            nodes,
            winding,
            head: 0,
            len: n,
        }
    }

    fn point(&self, node: usize) -> &Point2 {
        &self.points[self.nodes[node].index as usize]
    }

    /// The `(previous, current, next)` positions around `node`.
    fn corner(&self, node: usize) -> (&Point2, &Point2, &Point2) {
        let RingNode { next, prev, .. } = self.nodes[node];
        (self.point(prev), self.point(node), self.point(next))
    }

    /// A strictly convex vertex whose closed triangle holds no other ring vertex.
    ///
    /// Vertices on the diagonal count as inside: clipping past them would
    /// leave a remainder that folds over itself.
    fn is_ear(&self, node: usize) -> bool {
        let (prev, cur, next) = self.corner(node);
        if !is_convex(prev, cur, next, self.winding) {
            return false;
        }

        let RingNode {
            next: next_node,
            prev: end,
            ..
        } = self.nodes[node];

        let mut other = self.nodes[next_node].next;
        while other != end {
            if point_in_triangle(cur, prev, next, self.point(other)) {
                return false;
            }
            other = self.nodes[other].next;
        }
        true
    }

    /// Largest angle cosine of the ear triangle, capped at [`MAX_SCORE`].
    fn score(&self, node: usize) -> f64 {
        let (prev, cur, next) = self.corner(node);
        max_cosine(cur, prev, next).map_or(MAX_SCORE, |cos| cos.min(MAX_SCORE))
    }

    /// Picks the next ear to clip, scanning the ring once from the head.
    fn select(&self, selection: EarSelection) -> Option<usize> {
        let mut best: Option<(f64, usize)> = None;
        let mut node = self.head;
        for _ in 0..self.len {
            if self.is_ear(node) {
                match selection {
                    EarSelection::FirstAcceptable => return Some(node),
                    EarSelection::BestInPass => {
                        let score = self.score(node);
                        if best.is_none_or(|(lowest, _)| score < lowest) {
                            best = Some((score, node));
                        }
                    }
                }
            }
            node = self.nodes[node].next;
        }
        best.map(|(_, node)| node)
    }

    /// Unlinks `node` and returns its triangle.
    fn clip(&mut self, node: usize) -> [u32; 3] {
        let RingNode { index, next, prev } = self.nodes[node];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        if node == self.head {
            self.head = next;
        }
        self.len -= 1;
        [self.nodes[prev].index, index, self.nodes[next].index]
    }

    /// The triangle left once the ring is down to three vertices.
    fn last(&self) -> [u32; 3] {
        let RingNode { index, next, prev } = self.nodes[self.head];
        [self.nodes[prev].index, index, self.nodes[next].index]
    }
}
