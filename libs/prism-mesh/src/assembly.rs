//! # Mesh Assembly
//!
//! The build pipeline: validate parameters, build the planar region,
//! triangulate, extrude level 0, subdivide to the configured level, then
//! classify smoothing groups and attach the size hints.

use crate::error::MeshError;
use crate::extrude::extrude_prism;
use crate::mesh::PrismMesh;
use crate::region::{Bounds, PlanarRegion};
use crate::smoothing::classify_faces;
use crate::subdivide::subdivide;
use crate::triangulate::triangulate;
use config::constants::{
    DEFAULT_HEIGHT, DEFAULT_HOLE_RADIUS, DEFAULT_LEVEL, DEFAULT_STEINER_POINTS,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Build parameters for a prism mesh.
///
/// Explicit `holes` and a positive `hole_radius` are mutually exclusive;
/// `steiner_points` is only consulted when neither hole form is present.
///
/// # Example
///
/// ```rust,ignore
/// let params = MeshParams {
///     exterior: square_ring(),
///     height: 5.0,
///     level: 2,
///     ..Default::default()
/// };
/// let mesh = build_mesh(&params)?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshParams {
    /// Exterior boundary ring, counter-clockwise
    pub exterior: Vec<DVec2>,
    /// Explicit hole rings
    pub holes: Option<Vec<Vec<DVec2>>>,
    /// Subdivision level; 0 keeps the raw prism
    pub level: u32,
    /// Extrusion height along Z, must be positive
    pub height: f64,
    /// Radius of the synthesized circular hole; 0 disables it
    pub hole_radius: f64,
    /// Number of interior seed points when no hole is present
    pub steiner_points: usize,
    /// Bounds override for UV normalization and hole centering
    pub bounds: Option<Bounds>,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            exterior: Vec::new(),
            holes: None,
            level: DEFAULT_LEVEL,
            height: DEFAULT_HEIGHT,
            hole_radius: DEFAULT_HOLE_RADIUS,
            steiner_points: DEFAULT_STEINER_POINTS,
            bounds: None,
        }
    }
}

/// Builds the complete mesh for the given parameters.
///
/// Pure function: the same parameters always produce the same buffers.
/// Callers re-invoke it after any parameter change; there is no partial
/// rebuild.
pub fn build_mesh(params: &MeshParams) -> Result<PrismMesh, MeshError> {
    validate_params(params)?;

    let region = PlanarRegion::new(
        params.exterior.clone(),
        params.holes.clone(),
        params.hole_radius,
        params.steiner_points,
        params.bounds,
    )?;
    let triangulation = triangulate(&region)?;

    let mut mesh = extrude_prism(&triangulation, params.height, region.bounds());
    for _ in 0..params.level {
        mesh = subdivide(&mesh);
    }

    finalize(&mut mesh, region.bounds());
    Ok(mesh)
}

/// Rejects invalid configurations before any geometry work begins.
fn validate_params(params: &MeshParams) -> Result<(), MeshError> {
    if params.exterior.is_empty() {
        return Err(MeshError::invalid_config("exterior ring is empty"));
    }
    if params.height <= 0.0 {
        return Err(MeshError::invalid_config(format!(
            "height must be positive: {}",
            params.height
        )));
    }
    if params.holes.is_some() && params.hole_radius > 0.0 {
        return Err(MeshError::invalid_config(
            "explicit holes and a positive hole radius are mutually exclusive",
        ));
    }
    Ok(())
}

/// Attaches final-level metadata: smoothing groups, region extents, and
/// the approximate square texture-atlas dimensions derived from the total
/// flat UV-buffer length.
fn finalize(mesh: &mut PrismMesh, bounds: &Bounds) {
    let groups = classify_faces(mesh.vertices(), mesh.faces());
    mesh.set_smoothing_groups(groups);

    mesh.set_region_size(DVec2::new(bounds.width(), bounds.height()));

    let flat_len = mesh.tex_coord_count() * 2;
    let width = (flat_len as f64).sqrt() as u32;
    if width > 0 {
        mesh.set_atlas_size(width, flat_len as u32 / width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subdivide::distinct_edge_count;
    use config::constants::{
        SMOOTHING_GROUP_BOTTOM, SMOOTHING_GROUP_SIDE, SMOOTHING_GROUP_TOP,
    };

    fn square_params() -> MeshParams {
        MeshParams {
            exterior: vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(10.0, 0.0),
                DVec2::new(10.0, 10.0),
                DVec2::new(0.0, 10.0),
            ],
            height: 5.0,
            level: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_square_level_zero() {
        let mesh = build_mesh(&square_params()).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        // 2 triangulation triangles per cap + 4 wall segments x 2
        assert_eq!(mesh.face_count(), 12);
        assert!(mesh.validate());
    }

    #[test]
    fn test_square_level_one_quadruples_faces() {
        let level0 = build_mesh(&square_params()).unwrap();

        let mut params = square_params();
        params.level = 1;
        let level1 = build_mesh(&params).unwrap();

        assert_eq!(level1.face_count(), level0.face_count() * 4);
        assert_eq!(
            level1.vertex_count(),
            level0.vertex_count() + distinct_edge_count(level0.faces())
        );
        assert!(level1.validate());
    }

    #[test]
    fn test_subdivision_multiplicative_across_levels() {
        let mut previous = build_mesh(&square_params()).unwrap();
        for level in 1..=3 {
            let mut params = square_params();
            params.level = level;
            let mesh = build_mesh(&params).unwrap();
            assert_eq!(mesh.face_count(), previous.face_count() * 4);
            previous = mesh;
        }
    }

    #[test]
    fn test_smoothing_groups_on_final_level() {
        let mesh = build_mesh(&square_params()).unwrap();
        let groups = mesh.smoothing_groups().unwrap();
        assert_eq!(groups.len(), mesh.face_count());
        let bottoms = groups.iter().filter(|&&g| g == SMOOTHING_GROUP_BOTTOM).count();
        let tops = groups.iter().filter(|&&g| g == SMOOTHING_GROUP_TOP).count();
        let sides = groups.iter().filter(|&&g| g == SMOOTHING_GROUP_SIDE).count();
        assert_eq!(bottoms, 2);
        assert_eq!(tops, 2);
        assert_eq!(sides, 8);
    }

    #[test]
    fn test_smoothing_groups_survive_subdivision() {
        let mut params = square_params();
        params.level = 1;
        let mesh = build_mesh(&params).unwrap();
        let groups = mesh.smoothing_groups().unwrap();
        assert_eq!(groups.iter().filter(|&&g| g == SMOOTHING_GROUP_BOTTOM).count(), 8);
        assert_eq!(groups.iter().filter(|&&g| g == SMOOTHING_GROUP_TOP).count(), 8);
        assert_eq!(groups.iter().filter(|&&g| g == SMOOTHING_GROUP_SIDE).count(), 32);
    }

    #[test]
    fn test_identical_rebuilds_are_bit_identical() {
        let params = {
            let mut p = square_params();
            p.level = 2;
            p
        };
        let first = build_mesh(&params).unwrap();
        let second = build_mesh(&params).unwrap();
        assert_eq!(first.faces(), second.faces());
        assert_eq!(first.tex_faces(), second.tex_faces());
        assert_eq!(first.vertices(), second.vertices());
        assert_eq!(first.tex_coords(), second.tex_coords());
    }

    #[test]
    fn test_explicit_hole_scenario() {
        let mut params = square_params();
        params.holes = Some(vec![vec![
            DVec2::new(4.0, 4.0),
            DVec2::new(6.0, 4.0),
            DVec2::new(6.0, 6.0),
            DVec2::new(4.0, 6.0),
        ]]);
        let mesh = build_mesh(&params).unwrap();
        // Hole points appear in both layers
        assert_eq!(mesh.vertex_count(), 2 * (4 + 4));
        let cap_faces = mesh.face_count() - 8 - 8;
        assert!(cap_faces > 0 && cap_faces % 2 == 0);
        assert!(mesh.validate());
    }

    #[test]
    fn test_circular_hole_scenario() {
        let mut params = square_params();
        params.hole_radius = 2.0;
        let mesh = build_mesh(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * (4 + 200));
        assert!(mesh.validate());
    }

    #[test]
    fn test_seed_point_scenario() {
        let mut params = square_params();
        params.steiner_points = 8;
        let mesh = build_mesh(&params).unwrap();
        // Seeds join both vertex layers but add no walls
        assert_eq!(mesh.vertex_count(), 2 * (4 + 8));
        assert!(mesh.validate());
    }

    #[test]
    fn test_size_hints() {
        let mesh = build_mesh(&square_params()).unwrap();
        assert_eq!(mesh.region_size(), Some(DVec2::new(10.0, 10.0)));
        // 8 tex coords -> flat length 16 -> 4 x 4 atlas
        assert_eq!(mesh.atlas_size(), Some((4, 4)));
    }

    #[test]
    fn test_bounds_override_drives_uv() {
        let mut params = square_params();
        params.bounds = Some(Bounds::new(DVec2::new(0.0, 0.0), DVec2::new(20.0, 20.0)));
        let mesh = build_mesh(&params).unwrap();
        // Corner (10,10) lands at UV (0.5, 0.5) under the widened bounds
        assert_eq!(mesh.tex_coord(2), DVec2::new(0.5, 0.5));
        assert_eq!(mesh.region_size(), Some(DVec2::new(20.0, 20.0)));
    }

    #[test]
    fn test_rejects_empty_exterior() {
        let params = MeshParams::default();
        assert!(matches!(
            build_mesh(&params),
            Err(MeshError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_height() {
        let mut params = square_params();
        params.height = 0.0;
        assert!(matches!(
            build_mesh(&params),
            Err(MeshError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_holes_combined_with_radius() {
        let mut params = square_params();
        params.holes = Some(vec![vec![
            DVec2::new(4.0, 4.0),
            DVec2::new(6.0, 4.0),
            DVec2::new(5.0, 6.0),
        ]]);
        params.hole_radius = 1.0;
        assert!(matches!(
            build_mesh(&params),
            Err(MeshError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_default_params() {
        let params = MeshParams::default();
        assert_eq!(params.level, 1);
        assert_eq!(params.height, 1.0);
        assert_eq!(params.hole_radius, 0.0);
        assert_eq!(params.steiner_points, 0);
    }
}
