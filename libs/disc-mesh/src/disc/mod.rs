//! # Disc Mesh
//!
//! Generates a triangle fan approximating a disc.
//!
//! Vertex 0 is the center; vertices `1..=N` walk the boundary at angles
//! `i * 2π/N` starting from the basis `u` axis. Face `i - 1` is
//! `(vertex[i], vertex[0], vertex[i + 1])` and the last face closes the fan
//! with `(vertex[N], vertex[0], vertex[1])`.
//!
//! With the boundary running counter-clockwise around the normal, the
//! (boundary, center, next-boundary) winding gives every face a geometric
//! normal pointing against the disc normal.

use crate::basis::PlaneBasis;
use crate::color::{Color, Rgb8};
use crate::config::MesherConfig;
use crate::error::{DiscMeshError, DiscMeshResult};
use crate::params::DiscParams;
use crate::triangle::Triangle;
use config::constants::{FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX, MIN_DISC_SEGMENTS};
use glam::DVec3;
use std::f64::consts::TAU;
use tracing::debug;

/// An immutable triangle-fan mesh of a disc.
///
/// Vertices and faces are computed once at construction. To change any
/// parameter, build a new disc.
///
/// # Example
///
/// ```rust
/// use disc_mesh::{DiscMesh, Rgb8};
/// use glam::DVec3;
///
/// let disc = DiscMesh::new(DVec3::new(1.0, 2.0, 3.0), Rgb8::WHITE)?;
/// assert_eq!(disc.segments(), 120);
/// assert_eq!(disc.vertices()[0], DVec3::new(1.0, 2.0, 3.0));
/// # Ok::<(), disc_mesh::DiscMeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscMesh {
    center: DVec3,
    radius: f64,
    normal: DVec3,
    unit_normal: DVec3,
    color: Color,
    segments: u32,
    /// Center followed by the boundary, `segments + 1` entries
    vertices: Vec<DVec3>,
    faces: Vec<Triangle>,
}

impl DiscMesh {
    /// Creates a unit disc in the XY plane with the default segment count.
    ///
    /// # Errors
    ///
    /// [`DiscMeshError::InvalidGeometry`] if `center` is not finite.
    pub fn new(center: DVec3, color: Rgb8) -> DiscMeshResult<Self> {
        let params = DiscParams::new(center).with_color(color);
        Self::from_params(&params, &MesherConfig::default())
    }

    /// Creates a fully specified disc using the default configuration.
    ///
    /// # Errors
    ///
    /// [`DiscMeshError::InvalidGeometry`] for a non-positive radius, a zero
    /// normal or fewer than three segments;
    /// [`DiscMeshError::SegmentLimitExceeded`] above the default maximum.
    pub fn with_params(
        center: DVec3,
        radius: f64,
        normal: DVec3,
        color: Rgb8,
        segments: u32,
    ) -> DiscMeshResult<Self> {
        let params = DiscParams {
            center,
            radius,
            normal,
            color,
            segments: Some(segments),
        };
        Self::from_params(&params, &MesherConfig::default())
    }

    /// Creates a disc from parameters under an explicit configuration.
    ///
    /// A missing segment count falls back to `config.default_segments`.
    ///
    /// # Errors
    ///
    /// [`DiscMeshError::InvalidGeometry`] for fewer than three segments, a
    /// non-finite center, a non-positive radius or a zero normal;
    /// [`DiscMeshError::SegmentLimitExceeded`] above `config.max_segments`.
    pub fn from_params(params: &DiscParams, config: &MesherConfig) -> DiscMeshResult<Self> {
        let segments = params.segments.unwrap_or(config.default_segments);
        if segments < MIN_DISC_SEGMENTS {
            return Err(DiscMeshError::invalid_geometry(format!(
                "Disc segments must be at least {MIN_DISC_SEGMENTS}: {segments}"
            )));
        }
        if segments > config.max_segments {
            return Err(DiscMeshError::SegmentLimitExceeded {
                count: segments,
                max: config.max_segments,
            });
        }
        if !params.center.is_finite() {
            return Err(DiscMeshError::invalid_geometry(format!(
                "Disc center must be finite: {}",
                params.center
            )));
        }

        let basis = PlaneBasis::new(params.normal, params.radius, config.parallel_tolerance)?;
        let color = Color::from(params.color);
        let vertices = generate_vertices(params.center, &basis, segments);
        let faces = fan_indices(segments)
            .into_iter()
            .map(|[a, b, c]| {
                Triangle::new(
                    vertices[a as usize],
                    vertices[b as usize],
                    vertices[c as usize],
                    color,
                )
            })
            .collect();

        debug!(
            segments,
            radius = params.radius,
            center = %params.center,
            "generated disc mesh"
        );

        Ok(Self {
            center: params.center,
            radius: params.radius,
            normal: params.normal,
            unit_normal: basis.unit_normal(),
            color,
            segments,
            vertices,
            faces,
        })
    }

    /// The disc center.
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// The disc radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The normal as supplied (not necessarily unit length).
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// The normal scaled to unit length.
    #[inline]
    pub fn unit_normal(&self) -> DVec3 {
        self.unit_normal
    }

    /// The normalized face color shared by every triangle.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of boundary segments (and triangles).
    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Triangles in fan order.
    #[inline]
    pub fn faces(&self) -> &[Triangle] {
        &self.faces
    }

    /// Center followed by the boundary vertices in angular order.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Flattens every face into 9 floats (three xyz vertices), in face order.
    ///
    /// The result holds `segments * 9` values and is laid out for direct
    /// upload into a non-indexed vertex buffer.
    pub fn faces_as_flat_floats(&self) -> Vec<f32> {
        let mut floats = Vec::with_capacity(self.faces.len() * FLOATS_PER_TRIANGLE);
        for face in &self.faces {
            floats.extend_from_slice(&face.to_floats());
        }
        floats
    }

    /// Flattens the vertices into 3 floats each, center first.
    pub fn vertices_as_flat_floats(&self) -> Vec<f32> {
        let mut floats = Vec::with_capacity(self.vertices.len() * FLOATS_PER_VERTEX);
        for vertex in &self.vertices {
            floats.extend_from_slice(&vertex.as_vec3().to_array());
        }
        floats
    }

    /// Triangle indices into [`vertices`](Self::vertices), same fan and
    /// winding as [`faces`](Self::faces).
    pub fn indices(&self) -> Vec<[u32; 3]> {
        fan_indices(self.segments)
    }

    /// Sum of the face areas. Approaches `π r²` as the segment count grows.
    pub fn area(&self) -> f64 {
        self.faces.iter().map(Triangle::area).sum()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        self.vertices.iter().fold(
            (self.center, self.center),
            |(min, max), v| (min.min(*v), max.max(*v)),
        )
    }
}

/// Places the center and `segments` boundary points around it.
fn generate_vertices(center: DVec3, basis: &PlaneBasis, segments: u32) -> Vec<DVec3> {
    let step = TAU / f64::from(segments);
    let mut vertices = Vec::with_capacity(segments as usize + 1);
    vertices.push(center);
    for i in 0..segments {
        vertices.push(center + basis.point_at(f64::from(i) * step));
    }
    vertices
}

/// Fan indices `(i, 0, i + 1)` for `i` in `1..segments`, closed by
/// `(segments, 0, 1)`.
fn fan_indices(segments: u32) -> Vec<[u32; 3]> {
    (1..segments)
        .map(|i| [i, 0, i + 1])
        .chain(std::iter::once([segments, 0, 1]))
        .collect()
}
