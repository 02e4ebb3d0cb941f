//! Mesher-level configuration building on the shared `config` crate.
//!
//! Keeps the disc generator decoupled from literal constants and lets callers
//! bound the segment count of untrusted input.

use crate::error::DiscMeshResult;
use config::constants::GlobalConfig;
use serde::{Deserialize, Serialize};

/// Disc mesher configuration.
///
/// # Examples
/// ```
/// use disc_mesh::MesherConfig;
/// let cfg = MesherConfig::default();
/// assert_eq!(cfg.default_segments, 120);
/// assert!(cfg.parallel_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MesherConfig {
    /// Tolerance for treating the normal as parallel to the basis seed.
    pub parallel_tolerance: f64,
    /// Segment count used when parameters leave it unspecified.
    pub default_segments: u32,
    /// Largest segment count the mesher accepts.
    pub max_segments: u32,
}

impl MesherConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use disc_mesh::MesherConfig;
    /// let cfg = MesherConfig::new(1.0e-6, 48, 4096).unwrap();
    /// assert_eq!(cfg.default_segments, 48);
    /// assert!(MesherConfig::new(1.0e-6, 2, 4096).is_err());
    /// ```
    pub fn new(
        parallel_tolerance: f64,
        default_segments: u32,
        max_segments: u32,
    ) -> DiscMeshResult<Self> {
        let global = GlobalConfig::new(parallel_tolerance, default_segments, max_segments)?;
        Ok(global.into())
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> DiscMeshResult<Self> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.parallel_tolerance, raw.default_segments, raw.max_segments)
    }
}

impl From<GlobalConfig> for MesherConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            parallel_tolerance: cfg.tolerance,
            default_segments: cfg.default_segments,
            max_segments: cfg.max_segments,
        }
    }
}

impl Default for MesherConfig {
    fn default() -> Self {
        GlobalConfig::default().into()
    }
}
