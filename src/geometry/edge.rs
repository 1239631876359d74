use crate::math::{Point2, Vector2};

/// Profile of one side of a jigsaw piece.
///
/// The discriminants define the enumeration order of permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeType {
    /// A tab bulging away from the piece.
    Outward = 0,
    /// A notch cut into the piece.
    Inward = 1,
    /// A straight edge.
    Flat = 2,
}

impl EdgeType {
    /// All edge types in enumeration order.
    pub const ALL: [Self; 3] = [Self::Outward, Self::Inward, Self::Flat];

    /// Cyclic successor: `Outward -> Inward -> Flat -> Outward`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Outward => Self::Inward,
            Self::Inward => Self::Flat,
            Self::Flat => Self::Outward,
        }
    }

    /// Sign applied to the canonical arc's bulge axis.
    fn bulge_sign(self) -> f64 {
        if self == Self::Inward {
            -1.0
        } else {
            1.0
        }
    }
}

/// One of the four sides of a piece, in outline emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in outline emission order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The corner the outline visits just before this side's arc.
    #[must_use]
    pub fn start_corner(self, width: f64, height: f64) -> Point2 {
        let (hw, hh) = (0.5 * width, 0.5 * height);
        match self {
            Self::Top => Point2::new(-hw, hh),
            Self::Right => Point2::new(hw, hh),
            Self::Bottom => Point2::new(hw, -hh),
            Self::Left => Point2::new(-hw, -hh),
        }
    }

    /// Midpoint of this side, where its arc is anchored.
    #[must_use]
    pub fn center(self, width: f64, height: f64) -> Point2 {
        match self {
            Self::Top => Point2::new(0.0, 0.5 * height),
            Self::Right => Point2::new(0.5 * width, 0.0),
            Self::Bottom => Point2::new(0.0, -0.5 * height),
            Self::Left => Point2::new(-0.5 * width, 0.0),
        }
    }

    /// Maps an offset from canonical arc space (bottom side, outward tab)
    /// into this side's frame for the given edge type.
    #[must_use]
    pub fn transform(self, offset: &Vector2, edge: EdgeType) -> Vector2 {
        let k = edge.bulge_sign();
        match self {
            Self::Top => Vector2::new(-offset.x, -offset.y * k),
            Self::Right => Vector2::new(-offset.y * k, offset.x),
            Self::Bottom => Vector2::new(offset.x, offset.y * k),
            Self::Left => Vector2::new(offset.y * k, -offset.x),
        }
    }
}
