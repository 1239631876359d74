use std::fmt;

use super::edge::{EdgeType, Side};

/// Assignment of an [`EdgeType`] to each side of a piece.
///
/// Ordering is lexicographic on `(top, right, bottom, left)` by edge type
/// discriminant, which is the field order of the derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permutation {
    pub top: EdgeType,
    pub right: EdgeType,
    pub bottom: EdgeType,
    pub left: EdgeType,
}

impl Permutation {
    /// First permutation of the enumeration: every side is a tab.
    pub const FIRST: Self = Self::uniform(EdgeType::Outward);

    /// The degenerate all-flat permutation; never enumerated.
    pub const ALL_FLAT: Self = Self::uniform(EdgeType::Flat);

    /// Number of permutations visited by [`Permutations`].
    pub const COUNT: usize = 3 * 3 * 3 * 3 - 1;

    /// Creates a permutation from its four sides.
    #[must_use]
    pub const fn new(top: EdgeType, right: EdgeType, bottom: EdgeType, left: EdgeType) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates a permutation with the same edge type on every side.
    #[must_use]
    pub const fn uniform(edge: EdgeType) -> Self {
        Self::new(edge, edge, edge, edge)
    }

    /// Edge type of the given side.
    #[must_use]
    pub fn edge(&self, side: Side) -> EdgeType {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Returns `true` if every side is flat.
    #[must_use]
    pub fn is_all_flat(&self) -> bool {
        *self == Self::ALL_FLAT
    }

    /// Number of sides carrying a tab or notch.
    #[must_use]
    pub fn non_flat_sides(&self) -> usize {
        Side::ALL
            .iter()
            .filter(|&&side| self.edge(side) != EdgeType::Flat)
            .count()
    }

    /// Outline vertex count: four corners plus one arc per non-flat side.
    #[must_use]
    pub fn vertex_count(&self, arc_vertex_count: usize) -> usize {
        4 + arc_vertex_count * self.non_flat_sides()
    }

    /// Odometer increment with `top` as the least significant digit.
    ///
    /// Wraps from all-flat back to all-outward.
    #[must_use]
    pub fn next(self) -> Self {
        let mut result = self;

        result.top = result.top.next();
        if result.top != EdgeType::Outward {
            return result;
        }

        result.right = result.right.next();
        if result.right != EdgeType::Outward {
            return result;
        }

        result.bottom = result.bottom.next();
        if result.bottom != EdgeType::Outward {
            return result;
        }

        result.left = result.left.next();
        result
    }

    /// Iterates every valid permutation in enumeration order.
    #[must_use]
    pub fn all() -> Permutations {
        Permutations::new()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:?}, {:?}, {:?}, {:?})",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Iterator over every permutation from [`Permutation::FIRST`] up to, but
/// excluding, [`Permutation::ALL_FLAT`].
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Permutation,
}

impl Permutations {
    /// Starts a fresh enumeration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Permutation::FIRST,
        }
    }
}

impl Default for Permutations {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Permutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= Permutation::ALL_FLAT {
            return None;
        }
        let item = self.current;
        self.current = item.next();
        Some(item)
    }
}
