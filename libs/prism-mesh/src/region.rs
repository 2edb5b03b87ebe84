//! # Planar Region
//!
//! Cleaned 2D boundary description: an exterior ring plus either explicit
//! hole rings, one synthesized circular hole, or interior seed points.

use crate::error::MeshError;
use config::constants::{
    BASE_EPSILON, CIRCULAR_HOLE_SEGMENTS, DEGENERATE_POINT_FACTOR, STEINER_RADIUS_DIVISOR,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// An axis-aligned bounding rectangle in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner (minX, minY)
    pub min: DVec2,
    /// Maximum corner (maxX, maxY)
    pub max: DVec2,
}

impl Bounds {
    /// Creates a bounds rectangle from its corners.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Computes the bounds of a point set.
    pub fn from_points(points: &[DVec2]) -> Self {
        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self { min, max }
    }

    /// Returns the width (X extent).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the height (Y extent).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the center point.
    #[inline]
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the diagonal length.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).length()
    }
}

/// A cleaned planar region ready for triangulation.
///
/// Exactly one interior form is active per region: explicit hole rings, one
/// synthesized circular hole, or seed (Steiner) points. Which one is chosen
/// follows the argument precedence of [`PlanarRegion::new`].
#[derive(Debug, Clone)]
pub struct PlanarRegion {
    exterior: Vec<DVec2>,
    holes: Vec<Vec<DVec2>>,
    seeds: Vec<DVec2>,
    bounds: Bounds,
}

impl PlanarRegion {
    /// Builds a region from raw boundary data.
    ///
    /// # Arguments
    ///
    /// * `exterior` - Exterior ring, counter-clockwise
    /// * `holes` - Explicit hole rings; takes precedence over `hole_radius`
    /// * `hole_radius` - If positive and no explicit holes, synthesize one
    ///   circular hole of this radius at the bounding-box center
    /// * `steiner_points` - Number of interior seed points to place when no
    ///   hole of either form is present
    /// * `bounds_override` - Rectangle to use for UV normalization and hole
    ///   centering instead of the exterior-derived bounds
    ///
    /// Consecutive exterior points closer than 100x the base epsilon are
    /// collapsed: the second point of each offending pair is removed, with
    /// removals applied back-to-front so earlier indices stay valid.
    pub fn new(
        exterior: Vec<DVec2>,
        holes: Option<Vec<Vec<DVec2>>>,
        hole_radius: f64,
        steiner_points: usize,
        bounds_override: Option<Bounds>,
    ) -> Result<Self, MeshError> {
        let exterior = remove_degenerate_points(exterior);
        if exterior.len() < 3 {
            return Err(MeshError::degenerate(format!(
                "exterior ring has {} points after cleanup, need at least 3",
                exterior.len()
            )));
        }

        let bounds = bounds_override.unwrap_or_else(|| Bounds::from_points(&exterior));
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "region bounds have zero extent: {} x {}",
                bounds.width(),
                bounds.height()
            )));
        }

        let mut resolved_holes = Vec::new();
        let mut seeds = Vec::new();

        if let Some(rings) = holes {
            for ring in rings {
                let ring = dedup_ring(ring);
                if ring.len() < 3 {
                    return Err(MeshError::degenerate(format!(
                        "hole ring has {} points after deduplication, need at least 3",
                        ring.len()
                    )));
                }
                resolved_holes.push(ring);
            }
        } else if hole_radius > 0.0 {
            resolved_holes.push(circular_hole(bounds.center(), hole_radius));
        } else {
            seeds = seed_circle(bounds.center(), bounds.diagonal() / STEINER_RADIUS_DIVISOR, steiner_points);
        }

        Ok(Self {
            exterior,
            holes: resolved_holes,
            seeds,
            bounds,
        })
    }

    /// Returns the cleaned exterior ring.
    #[inline]
    pub fn exterior(&self) -> &[DVec2] {
        &self.exterior
    }

    /// Returns the resolved hole rings.
    #[inline]
    pub fn holes(&self) -> &[Vec<DVec2>] {
        &self.holes
    }

    /// Returns the resolved seed points.
    #[inline]
    pub fn seeds(&self) -> &[DVec2] {
        &self.seeds
    }

    /// Returns the region bounds.
    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Returns the total number of hole-ring points.
    pub fn hole_point_count(&self) -> usize {
        self.holes.iter().map(Vec::len).sum()
    }
}

/// Removes the second point of every consecutive pair (wrapping) closer
/// than the degenerate-point threshold. Single pass over the input order.
fn remove_degenerate_points(ring: Vec<DVec2>) -> Vec<DVec2> {
    let threshold = DEGENERATE_POINT_FACTOR * BASE_EPSILON;
    let n = ring.len();
    if n == 0 {
        return ring;
    }

    let mut removals: Vec<usize> = (0..n)
        .filter(|&i| ring[i].distance(ring[(i + 1) % n]) < threshold)
        .map(|i| (i + 1) % n)
        .collect();
    removals.sort_unstable();
    removals.dedup();

    let mut ring = ring;
    for &i in removals.iter().rev() {
        ring.remove(i);
    }
    ring
}

/// Removes exact-value duplicates from a hole ring, keeping first
/// occurrences in order.
fn dedup_ring(ring: Vec<DVec2>) -> Vec<DVec2> {
    let mut out: Vec<DVec2> = Vec::with_capacity(ring.len());
    for p in ring {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Synthesizes the circular hole ring in reverse angular order.
///
/// Index i maps to angle (n - i) * 2 * PI / n, so the ring winds opposite
/// to a counter-clockwise exterior; the triangulation engine's hole
/// semantics require the opposing winding.
fn circular_hole(center: DVec2, radius: f64) -> Vec<DVec2> {
    let n = CIRCULAR_HOLE_SEGMENTS;
    (0..n)
        .map(|i| {
            let angle = (n - i) as f64 * 2.0 * PI / n as f64;
            center + radius * DVec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Places seed points on an interior circle, forward angular order.
fn seed_circle(center: DVec2, radius: f64, count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let angle = i as f64 * 2.0 * PI / count as f64;
            center + radius * DVec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]
    }

    /// Shoelace formula; positive for counter-clockwise rings.
    fn signed_area(ring: &[DVec2]) -> f64 {
        let n = ring.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum * 0.5
    }

    #[test]
    fn test_region_square() {
        let region = PlanarRegion::new(square(), None, 0.0, 0, None).unwrap();
        assert_eq!(region.exterior().len(), 4);
        assert!(region.holes().is_empty());
        assert!(region.seeds().is_empty());
    }

    #[test]
    fn test_cleanup_removes_second_of_close_pair() {
        let mut ring = square();
        ring.insert(1, DVec2::new(0.05, 0.0)); // 0.05 from the first point
        let region = PlanarRegion::new(ring, None, 0.0, 0, None).unwrap();
        assert_eq!(region.exterior().len(), 4);
        assert_eq!(region.exterior()[0], DVec2::new(0.0, 0.0));
        assert_eq!(region.exterior()[1], DVec2::new(10.0, 0.0));
    }

    #[test]
    fn test_cleanup_wrapping_pair_removes_first_index() {
        let mut ring = square();
        ring.push(DVec2::new(0.0, 0.01)); // Too close to the ring start
        let region = PlanarRegion::new(ring, None, 0.0, 0, None).unwrap();
        assert_eq!(region.exterior().len(), 4);
        // The wrap pair (last, 0) drops index 0
        assert_eq!(region.exterior()[0], DVec2::new(10.0, 0.0));
    }

    #[test]
    fn test_too_few_points_after_cleanup() {
        let ring = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.05, 0.0),
            DVec2::new(0.05, 0.05),
        ];
        let result = PlanarRegion::new(ring, None, 0.0, 0, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_bounds_from_exterior() {
        let region = PlanarRegion::new(square(), None, 0.0, 0, None).unwrap();
        assert_eq!(region.bounds().min, DVec2::new(0.0, 0.0));
        assert_eq!(region.bounds().max, DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_bounds_override() {
        let bounds = Bounds::new(DVec2::new(-5.0, -5.0), DVec2::new(15.0, 15.0));
        let region = PlanarRegion::new(square(), None, 0.0, 0, Some(bounds)).unwrap();
        assert_eq!(*region.bounds(), bounds);
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let ring = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 5.0),
            DVec2::new(0.0, 10.0),
        ];
        let result = PlanarRegion::new(ring, None, 0.0, 0, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_hole_dedup() {
        let hole = vec![
            DVec2::new(4.0, 4.0),
            DVec2::new(6.0, 4.0),
            DVec2::new(6.0, 4.0), // Exact duplicate
            DVec2::new(6.0, 6.0),
            DVec2::new(4.0, 6.0),
        ];
        let region = PlanarRegion::new(square(), Some(vec![hole]), 0.0, 0, None).unwrap();
        assert_eq!(region.holes().len(), 1);
        assert_eq!(region.holes()[0].len(), 4);
        assert_eq!(region.hole_point_count(), 4);
    }

    #[test]
    fn test_circular_hole_point_count_and_center() {
        let region = PlanarRegion::new(square(), None, 2.0, 0, None).unwrap();
        assert_eq!(region.holes().len(), 1);
        let hole = &region.holes()[0];
        assert_eq!(hole.len(), 200);
        for p in hole {
            assert!((p.distance(DVec2::new(5.0, 5.0)) - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_circular_hole_winds_opposite_to_ccw_exterior() {
        let region = PlanarRegion::new(square(), None, 2.0, 0, None).unwrap();
        assert!(signed_area(region.exterior()) > 0.0);
        assert!(signed_area(&region.holes()[0]) < 0.0);
    }

    #[test]
    fn test_hole_radius_takes_no_seeds() {
        let region = PlanarRegion::new(square(), None, 2.0, 8, None).unwrap();
        assert!(region.seeds().is_empty());
    }

    #[test]
    fn test_seed_points_on_interior_circle() {
        let region = PlanarRegion::new(square(), None, 0.0, 8, None).unwrap();
        assert!(region.holes().is_empty());
        assert_eq!(region.seeds().len(), 8);
        let expected_radius = (200.0_f64).sqrt() / 8.0; // diagonal / 8
        for p in region.seeds() {
            assert!((p.distance(DVec2::new(5.0, 5.0)) - expected_radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_seed_points_by_default() {
        let region = PlanarRegion::new(square(), None, 0.0, 0, None).unwrap();
        assert!(region.seeds().is_empty());
    }
}
