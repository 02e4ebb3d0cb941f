//! # Triangle
//!
//! A single colored face. Vertices are stored by value so a triangle never
//! aliases the vertex storage of the mesh it came from.

use crate::color::Color;
use config::constants::{approx_zero, FLOATS_PER_TRIANGLE};
use glam::DVec3;

/// Three vertices plus a flat color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex
    pub v1: DVec3,
    /// Second vertex
    pub v2: DVec3,
    /// Third vertex
    pub v3: DVec3,
    /// Flat color applied to the whole face
    pub color: Color,
}

impl Triangle {
    /// Creates a triangle from three vertices and a color.
    pub fn new(v1: DVec3, v2: DVec3, v3: DVec3, color: Color) -> Self {
        Self { v1, v2, v3, color }
    }

    /// Returns the vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> [DVec3; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Flattens the vertices into `[v1.x, v1.y, v1.z, v2.x, .., v3.z]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use disc_mesh::{Color, Triangle};
    /// use glam::DVec3;
    ///
    /// let tri = Triangle::new(DVec3::X, DVec3::ZERO, DVec3::Y, Color::default());
    /// assert_eq!(tri.to_floats(), [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    /// ```
    pub fn to_floats(&self) -> [f32; FLOATS_PER_TRIANGLE] {
        let [a, b, c] = self.vertices().map(|v| v.as_vec3().to_array());
        [a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2]]
    }

    /// Unit geometric normal following the winding order (right-hand rule).
    ///
    /// Returns zero for a degenerate triangle.
    pub fn face_normal(&self) -> DVec3 {
        self.edge_cross().normalize_or_zero()
    }

    /// Surface area of the triangle.
    pub fn area(&self) -> f64 {
        0.5 * self.edge_cross().length()
    }

    /// True when the triangle encloses no area.
    pub fn is_degenerate(&self) -> bool {
        approx_zero(self.area())
    }

    fn edge_cross(&self) -> DVec3 {
        (self.v2 - self.v1).cross(self.v3 - self.v1)
    }
}
