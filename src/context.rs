use tracing::debug;

use crate::config::PieceConfig;
use crate::error::Result;
use crate::geometry::EndArc;

/// Validated configuration plus the canonical end arc derived from it.
///
/// Built once and passed by reference to every generation call. Immutable
/// after construction; to change parameters, build a new context and clear
/// any [`MeshLibrary`](crate::library::MeshLibrary) filled from the old one.
#[derive(Debug, Clone)]
pub struct JigsawContext {
    config: PieceConfig,
    end_arc: EndArc,
}

impl JigsawContext {
    /// Validates `config` and precomputes the end arc.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) if the
    /// configuration is invalid.
    pub fn new(config: PieceConfig) -> Result<Self> {
        config.validate()?;
        let end_arc = EndArc::new(&config);
        debug!(
            width = config.width,
            height = config.height,
            radius = config.radius,
            arc_vertices = end_arc.len(),
            "built jigsaw context"
        );
        Ok(Self { config, end_arc })
    }

    /// The configuration this context was built from.
    #[must_use]
    pub fn config(&self) -> &PieceConfig {
        &self.config
    }

    /// The canonical end arc.
    #[must_use]
    pub fn end_arc(&self) -> &EndArc {
        &self.end_arc
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, JigsawError};

    #[test]
    fn builds_arc_from_config() {
        let ctx = JigsawContext::new(PieceConfig::default().with_segments(8)).unwrap();
        assert_eq!(ctx.end_arc().len(), 17);
        assert_eq!(ctx.config().segments, 8);
    }

    #[test]
    fn rejects_invalid_config() {
        let err = JigsawContext::new(PieceConfig::default().with_segments(0)).unwrap_err();
        assert!(matches!(err, JigsawError::Config(ConfigError::ZeroSegments)));
    }

    #[test]
    fn context_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JigsawContext>();
    }
}
