//! # Colors
//!
//! 8-bit input colors and their normalized float form used by triangles.

use config::constants::COLOR_CHANNEL_MAX;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color as supplied by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Opaque black, the default disc color.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color with channels normalized to `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use disc_mesh::{Color, Rgb8};
///
/// let color = Color::from(Rgb8::new(255, 0, 51));
/// assert_eq!(color.to_array(), [1.0, 0.0, 0.2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// Returns the channels as `[r, g, b]`.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb8> for Color {
    fn from(color: Rgb8) -> Self {
        Self {
            r: f32::from(color.r) / COLOR_CHANNEL_MAX,
            g: f32::from(color.g) / COLOR_CHANNEL_MAX,
            b: f32::from(color.b) / COLOR_CHANNEL_MAX,
        }
    }
}
