//! # Disc Parameters
//!
//! The full set of inputs describing one disc. Every field has a default, so
//! parameter files only need to name what differs.

use crate::color::Rgb8;
use crate::error::DiscMeshResult;
use config::constants::{DEFAULT_DISC_NORMAL, DEFAULT_DISC_RADIUS};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Inputs for building a [`DiscMesh`](crate::DiscMesh).
///
/// # Example
///
/// ```rust
/// use disc_mesh::DiscParams;
/// use glam::DVec3;
///
/// let params = DiscParams::from_json(r#"{ "center": [1.0, 2.0, 3.0], "segments": 8 }"#)?;
/// assert_eq!(params.center, DVec3::new(1.0, 2.0, 3.0));
/// assert_eq!(params.radius, 1.0);
/// assert_eq!(params.segments, Some(8));
/// # Ok::<(), disc_mesh::DiscMeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscParams {
    /// Center of the disc
    pub center: DVec3,
    /// Radius, must be positive
    pub radius: f64,
    /// Plane normal, need not be unit length
    pub normal: DVec3,
    /// 8-bit face color
    pub color: Rgb8,
    /// Boundary segment count; `None` uses the mesher's configured default
    pub segments: Option<u32>,
}

impl DiscParams {
    /// Parameters for a default disc centered at `center`.
    pub fn new(center: DVec3) -> Self {
        Self {
            center,
            ..Self::default()
        }
    }

    /// Parses parameters from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> DiscMeshResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the normal.
    pub fn with_normal(mut self, normal: DVec3) -> Self {
        self.normal = normal;
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Rgb8) -> Self {
        self.color = color;
        self
    }

    /// Sets an explicit segment count.
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = Some(segments);
        self
    }
}

impl Default for DiscParams {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            radius: DEFAULT_DISC_RADIUS,
            normal: DVec3::from_array(DEFAULT_DISC_NORMAL),
            color: Rgb8::BLACK,
            segments: None,
        }
    }
}
