//! Error types for the feature showcase.

use thiserror::Error;

/// Errors raised by [`crate::showcase::Showcase`] construction and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowcaseError {
    /// A showcase needs at least one feature to cycle through
    #[error("showcase needs at least one feature")]
    Empty,
    /// Direct selection outside `[0, len)`
    #[error("feature index {index} out of range (showcase has {len} features)")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of features in the showcase
        len: usize,
    },
}

/// Scroll geometry that cannot be used to derive pinned/active state.
///
/// Returned when the section has not been laid out yet (zero height) or the
/// browser reported non-finite values. Callers treat it as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Bounding box or viewport could not be measured
    #[error("unmeasured geometry (top={top}, height={height}, viewport={viewport_height})")]
    Unmeasured {
        /// Bounding box top relative to the viewport
        top: f64,
        /// Bounding box height
        height: f64,
        /// Viewport (window inner) height
        viewport_height: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = ShowcaseError::OutOfRange { index: 7, len: 5 };
        assert_eq!(
            err.to_string(),
            "feature index 7 out of range (showcase has 5 features)"
        );
    }

    #[test]
    fn unmeasured_message_includes_geometry() {
        let err = GeometryError::Unmeasured {
            top: 0.0,
            height: 0.0,
            viewport_height: 800.0,
        };
        assert!(err.to_string().contains("viewport=800"));
    }
}
