use crate::error::ConfigError;
use crate::tessellation::EarSelection;

/// Dimensions and arc parameters shared by every generated piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceConfig {
    /// Width of the piece rectangle along X.
    pub width: f64,
    /// Height of the piece rectangle along Y.
    pub height: f64,
    /// Radius of the circle a tab or notch is cut from.
    pub radius: f64,
    /// Segments per half arc; each arc has `2 * segments + 1` vertices.
    pub segments: usize,
    /// Fraction of the circle, in `(0, 1)`, that rises above the edge line.
    ///
    /// Values above `0.5` make the tab neck narrower than its head.
    pub circle_fraction: f64,
    /// Extrusion depth of the solid along Z.
    pub depth: f64,
    /// Ear selection policy used by the triangulator.
    pub ear_selection: EarSelection,
}

impl Default for PieceConfig {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 3.25,
            radius: 0.5,
            segments: 5,
            circle_fraction: 0.8,
            depth: 1.0,
            ear_selection: EarSelection::default(),
        }
    }
}

impl PieceConfig {
    /// Sets the rectangle size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the arc radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the number of segments per half arc.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Sets the circle fraction.
    #[must_use]
    pub fn with_circle_fraction(mut self, circle_fraction: f64) -> Self {
        self.circle_fraction = circle_fraction;
        self
    }

    /// Sets the extrusion depth.
    #[must_use]
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the ear selection policy.
    #[must_use]
    pub fn with_ear_selection(mut self, ear_selection: EarSelection) -> Self {
        self.ear_selection = ear_selection;
        self
    }

    /// Number of vertices in one tab or notch arc.
    #[must_use]
    pub fn arc_vertex_count(&self) -> usize {
        2 * self.segments + 1
    }

    /// Distance from the edge line to the apex of a tab.
    #[must_use]
    pub fn tab_depth(&self) -> f64 {
        let start_y = ((self.circle_fraction - 0.5) * 2.0).clamp(-1.0, 1.0);
        self.radius * (1.0 + start_y)
    }

    /// Checks that the parameters describe a simple, non-degenerate outline
    /// for every permutation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (parameter, value) in [
            ("width", self.width),
            ("height", self.height),
            ("radius", self.radius),
            ("depth", self.depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { parameter, value });
            }
        }

        if self.segments == 0 {
            return Err(ConfigError::ZeroSegments);
        }

        // 0 collapses the arc to a point, 1 closes it into a full circle.
        if !(self.circle_fraction > 0.0 && self.circle_fraction < 1.0) {
            return Err(ConfigError::ParameterOutOfRange {
                parameter: "circle_fraction",
                value: self.circle_fraction,
                min: 0.0,
                max: 1.0,
            });
        }

        let short_side = self.width.min(self.height);
        let long_side = self.width.max(self.height);

        if self.radius >= 0.5 * short_side {
            return Err(ConfigError::ArcTooWide {
                radius: self.radius,
                half_edge: 0.5 * short_side,
            });
        }

        let depth = self.tab_depth();
        if 2.0 * depth >= short_side {
            return Err(ConfigError::NotchOverlap(format!(
                "opposite notches of depth {depth} meet across a side of length {short_side}"
            )));
        }
        if self.radius + depth >= 0.5 * long_side {
            return Err(ConfigError::NotchOverlap(format!(
                "adjacent notches of radius {} and depth {depth} meet at the corners",
                self.radius
            )));
        }

        Ok(())
    }
}
