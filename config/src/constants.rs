//! # Configuration Constants
//!
//! Centralized constants for the prism-mesh pipeline. All geometry
//! tolerances, build defaults, and classification thresholds are defined
//! here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Region**: Parameters for synthesized hole and seed-point rings
//! - **Defaults**: Default build parameters
//! - **Smoothing**: Face classification thresholds and group ids

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Base epsilon for geometric comparisons.
///
/// All coarser tolerances in the pipeline are expressed as multiples of
/// this value.
///
/// # Example
///
/// ```rust
/// use config::constants::BASE_EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < BASE_EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-5));
/// ```
pub const BASE_EPSILON: f64 = 0.001;

/// Multiplier applied to [`BASE_EPSILON`] when collapsing degenerate
/// boundary points.
///
/// Two consecutive exterior-ring points closer than
/// `DEGENERATE_POINT_FACTOR * BASE_EPSILON` (= 0.1 world units) are treated
/// as one point; the second of the pair is dropped during region cleanup.
pub const DEGENERATE_POINT_FACTOR: f64 = 100.0;

// =============================================================================
// REGION CONSTANTS
// =============================================================================

/// Number of segments used when synthesizing a circular hole.
///
/// A positive hole radius with no explicit hole rings produces one circular
/// hole with exactly this many boundary points.
pub const CIRCULAR_HOLE_SEGMENTS: usize = 200;

/// Divisor applied to the bounding-box diagonal when placing seed points.
///
/// Seed (Steiner) points are distributed on an interior circle of radius
/// `bounds.diagonal() / STEINER_RADIUS_DIVISOR` centered at the bounding-box
/// center.
pub const STEINER_RADIUS_DIVISOR: f64 = 8.0;

// =============================================================================
// DEFAULT BUILD PARAMETERS
// =============================================================================

/// Default subdivision level.
///
/// Each level replaces every triangle with four via edge-midpoint
/// subdivision. Level 0 is the raw extruded prism.
pub const DEFAULT_LEVEL: u32 = 1;

/// Default extrusion height in world units.
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Default circular-hole radius. Zero disables the synthesized hole.
pub const DEFAULT_HOLE_RADIUS: f64 = 0.0;

/// Default number of interior seed points. Zero disables seeding.
pub const DEFAULT_STEINER_POINTS: usize = 0;

// =============================================================================
// SMOOTHING CLASSIFICATION
// =============================================================================

/// Threshold on the vertical component of a face normal.
///
/// A face whose unit normal has `z > AXIS_ALIGNED_THRESHOLD` is classified
/// as top-cap-like; `z < -AXIS_ALIGNED_THRESHOLD` as bottom-cap-like;
/// everything else as a side wall.
pub const AXIS_ALIGNED_THRESHOLD: f64 = 0.99;

/// Smoothing group id for downward-facing (bottom cap) triangles.
pub const SMOOTHING_GROUP_BOTTOM: u32 = 1;

/// Smoothing group id for upward-facing (top cap) triangles.
pub const SMOOTHING_GROUP_TOP: u32 = 2;

/// Smoothing group id for side-wall and sloped triangles.
pub const SMOOTHING_GROUP_SIDE: u32 = 4;
