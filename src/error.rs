use thiserror::Error;

/// Top-level error type for jigsaw mesh generation.
#[derive(Debug, Error)]
pub enum JigsawError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors raised while validating a [`PieceConfig`](crate::config::PieceConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{parameter} must be finite and positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("arc segment count must be at least 1")]
    ZeroSegments,

    #[error("parameter {parameter} = {value} is out of range ({min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("arc radius {radius} does not fit on an edge of half-length {half_edge}")]
    ArcTooWide { radius: f64, half_edge: f64 },

    #[error("inward notches would overlap: {0}")]
    NotchOverlap(String),
}

/// Errors related to the piece geometry model.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("the all-flat permutation is not a valid jigsaw piece")]
    FlatPermutation,

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to mesh operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to polygon triangulation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("degenerate polygon: {0}")]
    Degenerate(String),

    #[error("no removable ear found with {remaining} vertices left; polygon is not simple")]
    NoEar { remaining: usize },
}

/// Convenience type alias for results using [`JigsawError`].
pub type Result<T> = std::result::Result<T, JigsawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_display_transparently() {
        let err: JigsawError = TessellationError::NoEar { remaining: 7 }.into();
        assert!(err.to_string().contains("7 vertices left"));

        let err: JigsawError = ConfigError::ZeroSegments.into();
        assert_eq!(err.to_string(), "arc segment count must be at least 1");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JigsawError>();
    }
}
