//! # Configuration Constants
//!
//! Centralized constants for the disc mesh pipeline. All geometry calculations,
//! tessellation parameters, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Disc Defaults**: Radius, normal and segment count used when unspecified
//! - **Limits**: Maximum values for safety bounds
//! - **Layout**: Flattened buffer strides for rendering output

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used to decide whether a cross product vanished.
///
/// When the disc normal is parallel to the primary basis seed, the cross
/// product of the two is the zero vector within this tolerance and the
/// fallback seed is used instead.
///
/// # Example
///
/// ```rust
/// use config::constants::PARALLEL_TOLERANCE;
///
/// let component: f64 = 1e-7;
/// assert!(component.abs() < PARALLEL_TOLERANCE);
/// ```
pub const PARALLEL_TOLERANCE: f64 = 1e-5;

/// Tolerance for checking that boundary vertices sit on the circle.
pub const RADIUS_TOLERANCE: f64 = 1e-4;

// =============================================================================
// DISC DEFAULTS
// =============================================================================

/// Default disc radius.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DISC_RADIUS;
///
/// let user_radius: Option<f64> = None;
/// assert_eq!(user_radius.unwrap_or(DEFAULT_DISC_RADIUS), 1.0);
/// ```
pub const DEFAULT_DISC_RADIUS: f64 = 1.0;

/// Default disc normal (+Z). The disc lies in the XY plane.
pub const DEFAULT_DISC_NORMAL: [f64; 3] = [0.0, 0.0, 1.0];

/// Default number of boundary segments (and triangles) for a disc.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DISC_SEGMENTS;
///
/// let triangles = DEFAULT_DISC_SEGMENTS;
/// assert_eq!(triangles, 120);
/// ```
pub const DEFAULT_DISC_SEGMENTS: u32 = 120;

/// Minimum segment count. A fan needs at least 3 boundary points to
/// enclose any area.
pub const MIN_DISC_SEGMENTS: u32 = 3;

/// Seed vector crossed with the normal to obtain the first basis vector.
pub const PRIMARY_BASIS_SEED: [f64; 3] = [1.0, 0.0, 1.0];

/// Seed used when the normal is parallel to [`PRIMARY_BASIS_SEED`].
pub const FALLBACK_BASIS_SEED: [f64; 3] = [0.0, 1.0, 1.0];

/// Maximum value of an 8-bit color channel.
///
/// Input colors are normalized by dividing each channel by this value.
///
/// # Example
///
/// ```rust
/// use config::constants::COLOR_CHANNEL_MAX;
///
/// let normalized = 255.0 / COLOR_CHANNEL_MAX;
/// assert_eq!(normalized, 1.0);
/// ```
pub const COLOR_CHANNEL_MAX: f32 = 255.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of segments for a single disc.
///
/// Safety limit to prevent unbounded allocation from a caller-supplied
/// segment count. Each segment costs one vertex and one triangle.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_DISC_SEGMENTS;
///
/// let requested = 1_000_000;
/// assert!(requested > MAX_DISC_SEGMENTS);
/// ```
pub const MAX_DISC_SEGMENTS: u32 = 65_536;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Floats emitted per vertex in flattened buffers (x, y, z).
pub const FLOATS_PER_VERTEX: usize = 3;

/// Floats emitted per triangle in flattened buffers (three xyz vertices).
///
/// # Example
///
/// ```rust
/// use config::constants::{FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX};
///
/// assert_eq!(FLOATS_PER_TRIANGLE, 3 * FLOATS_PER_VERTEX);
/// ```
pub const FLOATS_PER_TRIANGLE: usize = 3 * FLOATS_PER_VERTEX;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert!(config.max_segments >= config.default_segments);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Tolerance used by the basis parallelism test.
    pub tolerance: f64,
    /// Segment count used when a disc does not specify one.
    pub default_segments: u32,
    /// Upper bound on the segment count of any single disc.
    pub max_segments: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and segment bounds.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24, 1024).expect("valid config");
    /// assert_eq!(cfg.default_segments, 24);
    /// ```
    pub fn new(
        tolerance: f64,
        default_segments: u32,
        max_segments: u32,
    ) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_segments < MIN_DISC_SEGMENTS {
            return Err(ConfigError::InvalidSegments(default_segments));
        }
        if max_segments < default_segments {
            return Err(ConfigError::InvalidMaxSegments {
                max: max_segments,
                default: default_segments,
            });
        }
        Ok(Self {
            tolerance,
            default_segments,
            max_segments,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: PARALLEL_TOLERANCE,
            default_segments: DEFAULT_DISC_SEGMENTS,
            max_segments: MAX_DISC_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the default segment count is too small to form a polygon.
    InvalidSegments(u32),
    /// Raised when the maximum segment count is below the default.
    InvalidMaxSegments { max: u32, default: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "default_segments must be >= {MIN_DISC_SEGMENTS}: {value}")
            }
            ConfigError::InvalidMaxSegments { max, default } => {
                write!(f, "max_segments ({max}) must be >= default_segments ({default})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
