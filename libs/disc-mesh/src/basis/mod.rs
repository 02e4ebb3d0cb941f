//! # Plane Basis
//!
//! Two orthogonal vectors spanning the plane perpendicular to a disc normal.
//!
//! ## Algorithm
//!
//! 1. Cross the normal with the seed `(1, 0, 1)`
//! 2. If that vanishes (normal parallel to the seed), use `(0, 1, 1)` instead
//! 3. `u = normal × seed`, `v = normal × u`
//! 4. Scale both to the disc radius
//!
//! Because `v = n × u`, sweeping from `u` towards `v` turns counter-clockwise
//! when viewed from the tip of the normal.

use crate::error::{DiscMeshError, DiscMeshResult};
use config::constants::{FALLBACK_BASIS_SEED, PRIMARY_BASIS_SEED};
use glam::DVec3;
use tracing::debug;

/// Orthogonal in-plane axes of a disc, each `radius` long.
///
/// # Example
///
/// ```rust
/// use disc_mesh::PlaneBasis;
/// use glam::DVec3;
///
/// let basis = PlaneBasis::new(DVec3::new(0.0, 0.0, 5.0), 2.0, 1e-5)?;
/// assert!((basis.u().length() - 2.0).abs() < 1e-12);
/// assert!(basis.u().dot(basis.v()).abs() < 1e-12);
/// assert!(basis.u().dot(basis.unit_normal()).abs() < 1e-12);
/// # Ok::<(), disc_mesh::DiscMeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneBasis {
    u: DVec3,
    v: DVec3,
    normal: DVec3,
    radius: f64,
}

impl PlaneBasis {
    /// Builds the basis for `normal` with axes of length `radius`.
    ///
    /// `tolerance` is compared against the components of `normal × seed`,
    /// with the normal as given, to decide when it counts as parallel to the
    /// primary seed. The normal does not need to be unit length, but its
    /// magnitude affects that test.
    ///
    /// # Errors
    ///
    /// [`DiscMeshError::InvalidGeometry`] if the radius is not a positive
    /// finite number, the normal is zero-length or not finite, or the normal
    /// is too small for its cross product with either seed to be normalized.
    pub fn new(normal: DVec3, radius: f64, tolerance: f64) -> DiscMeshResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(DiscMeshError::invalid_geometry(format!(
                "Disc radius must be positive: {radius}"
            )));
        }

        let unit_normal = normal.try_normalize().ok_or_else(|| {
            DiscMeshError::invalid_geometry(format!(
                "Disc normal must be non-zero and finite: {normal}"
            ))
        })?;

        let primary = DVec3::from_array(PRIMARY_BASIS_SEED);
        let mut axis = normal.cross(primary);
        if axis.abs_diff_eq(DVec3::ZERO, tolerance) {
            debug!(%normal, "normal parallel to primary basis seed, using fallback seed");
            axis = normal.cross(DVec3::from_array(FALLBACK_BASIS_SEED));
        }

        let u = scale_to(axis, radius, normal)?;
        let v = scale_to(normal.cross(u), radius, normal)?;

        Ok(Self {
            u,
            v,
            normal: unit_normal,
            radius,
        })
    }

    /// First in-plane axis (angle 0).
    #[inline]
    pub fn u(&self) -> DVec3 {
        self.u
    }

    /// Second in-plane axis (angle π/2).
    #[inline]
    pub fn v(&self) -> DVec3 {
        self.v
    }

    /// The normal scaled to unit length.
    #[inline]
    pub fn unit_normal(&self) -> DVec3 {
        self.normal
    }

    /// Length of both axes.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Offset from the disc center to the boundary at `angle` radians.
    ///
    /// The result is re-normalized to exactly `radius` so trig rounding
    /// never pulls a point off the circle.
    pub fn point_at(&self, angle: f64) -> DVec3 {
        let (sin, cos) = angle.sin_cos();
        (self.u * cos + self.v * sin).normalize_or_zero() * self.radius
    }

    /// Angle of `offset` (relative to the disc center) measured from `u`
    /// towards `v`, in `(-π, π]`.
    pub fn angle_of(&self, offset: DVec3) -> f64 {
        offset.dot(self.v).atan2(offset.dot(self.u))
    }
}

fn scale_to(axis: DVec3, radius: f64, normal: DVec3) -> DiscMeshResult<DVec3> {
    axis.try_normalize().map(|unit| unit * radius).ok_or_else(|| {
        DiscMeshError::invalid_geometry(format!(
            "Cannot build a plane basis for normal {normal}"
        ))
    })
}
