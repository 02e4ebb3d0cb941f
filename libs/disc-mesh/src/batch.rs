//! # Batch Generation
//!
//! Builds many independent discs in parallel. Each disc owns its storage, so
//! the work needs no coordination beyond collecting results in input order.

use crate::config::MesherConfig;
use crate::disc::DiscMesh;
use crate::error::DiscMeshResult;
use crate::params::DiscParams;
use rayon::prelude::*;
use tracing::warn;

/// Generates one disc per parameter set using the rayon thread pool.
///
/// Results are returned in the same order as `params`; a failing entry does
/// not affect the others.
///
/// # Example
///
/// ```rust
/// use disc_mesh::{generate_batch, DiscParams, MesherConfig};
/// use glam::DVec3;
///
/// let params = [
///     DiscParams::new(DVec3::ZERO).with_segments(8),
///     DiscParams::new(DVec3::X).with_radius(-1.0),
/// ];
/// let results = generate_batch(&params, &MesherConfig::default());
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn generate_batch(
    params: &[DiscParams],
    config: &MesherConfig,
) -> Vec<DiscMeshResult<DiscMesh>> {
    params
        .par_iter()
        .enumerate()
        .map(|(index, disc)| {
            DiscMesh::from_params(disc, config).inspect_err(|err| {
                warn!(index, error = %err, "disc generation failed");
            })
        })
        .collect()
}
