//! # Disc Mesh
//!
//! Triangle-fan meshes approximating a planar disc embedded in 3D space.
//!
//! ## Architecture
//!
//! ```text
//! DiscParams + MesherConfig
//!       ↓
//! PlaneBasis (two orthogonal radius-length vectors spanning the disc plane)
//!       ↓
//! DiscMesh (center + N boundary vertices, N fan triangles)
//!       ↓
//! flat f32 buffers / fan indices for rendering
//! ```
//!
//! All geometry is computed in f64. Conversion to f32 only happens when
//! exporting flat buffers for GPU upload.
//!
//! ## Usage
//!
//! ```rust
//! use disc_mesh::{DiscMesh, Rgb8};
//! use glam::DVec3;
//!
//! let disc = DiscMesh::with_params(DVec3::ZERO, 2.0, DVec3::Y, Rgb8::new(255, 0, 0), 16)?;
//! assert_eq!(disc.vertices().len(), 17);
//! assert_eq!(disc.faces().len(), 16);
//! assert_eq!(disc.faces_as_flat_floats().len(), 16 * 9);
//! # Ok::<(), disc_mesh::DiscMeshError>(())
//! ```

pub mod basis;
pub mod batch;
pub mod color;
pub mod config;
pub mod disc;
pub mod error;
pub mod params;
pub mod triangle;

pub use basis::PlaneBasis;
pub use batch::generate_batch;
pub use color::{Color, Rgb8};
pub use crate::config::MesherConfig;
pub use disc::DiscMesh;
pub use error::{DiscMeshError, DiscMeshResult};
pub use params::DiscParams;
pub use triangle::Triangle;
