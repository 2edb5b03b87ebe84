//! # Smoothing Classification
//!
//! Assigns a smoothing-group id to each face from the vertical component
//! of its unit normal. Runs once, on the final subdivision level.

use config::constants::{
    AXIS_ALIGNED_THRESHOLD, SMOOTHING_GROUP_BOTTOM, SMOOTHING_GROUP_SIDE, SMOOTHING_GROUP_TOP,
};
use glam::DVec3;

/// Classifies every face into a smoothing group.
///
/// For face (v1, v2, v3) the normal is normalize((v2-v1) x (v3-v1)):
/// group 1 for downward-facing triangles (normal.z < -0.99), group 2 for
/// upward-facing (normal.z > 0.99), group 4 for everything else.
pub fn classify_faces(vertices: &[DVec3], faces: &[[u32; 3]]) -> Vec<u32> {
    faces
        .iter()
        .map(|face| {
            let a = vertices[face[0] as usize];
            let b = vertices[face[1] as usize];
            let c = vertices[face[2] as usize];
            let nz = (b - a).cross(c - a).normalize_or_zero().z;
            if nz < -AXIS_ALIGNED_THRESHOLD {
                SMOOTHING_GROUP_BOTTOM
            } else if nz > AXIS_ALIGNED_THRESHOLD {
                SMOOTHING_GROUP_TOP
            } else {
                SMOOTHING_GROUP_SIDE
            }
        })
        .collect()
}
