//! # Disc Mesh Errors
//!
//! Error types for disc mesh generation.
//!
//! ## Error Policy
//!
//! - No fallback mesh when inputs are invalid
//! - Either a fully valid mesh is produced or an error is returned
//! - Errors carry the offending values for debugging

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during disc mesh generation.
///
/// ## Example
///
/// ```rust
/// use disc_mesh::{DiscMesh, DiscMeshError, Rgb8};
/// use glam::DVec3;
///
/// match DiscMesh::with_params(DVec3::ZERO, 1.0, DVec3::ZERO, Rgb8::BLACK, 8) {
///     Err(DiscMeshError::InvalidGeometry { message }) => assert!(message.contains("normal")),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum DiscMeshError {
    /// Inputs cannot describe a disc: non-positive radius, fewer than three
    /// segments, or a zero-length / non-finite normal or center.
    #[error("Invalid geometry: {message}")]
    InvalidGeometry {
        /// What was wrong with the input
        message: String,
    },

    /// Requested segment count exceeds the configured maximum.
    #[error("Too many segments: {count} (max: {max})")]
    SegmentLimitExceeded {
        /// Requested segment count
        count: u32,
        /// Configured upper bound
        max: u32,
    },

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Configuration or parameter JSON could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl DiscMeshError {
    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for disc mesh operations.
pub type DiscMeshResult<T> = Result<T, DiscMeshError>;

// =============================================================================
// TESTS
// =============================================================================
