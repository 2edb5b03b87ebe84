//! # Prism Extrusion
//!
//! Builds the level-0 mesh from a planar triangulation: doubled bottom/top
//! vertex layers, normalized texture coordinates, and staged face groups in
//! a fixed order (bottom cap, top cap, exterior walls, interior walls).

use crate::mesh::PrismMesh;
use crate::region::Bounds;
use crate::triangulate::PlanarTriangulation;
use glam::{DVec2, DVec3};

/// Extrudes a triangulated region into a capped prism.
///
/// Vertex layout: all bottom vertices (z = 0) in canonical point order,
/// then all top vertices (z = `height`); bottom index `i` corresponds to
/// top index `i + N` where N is the canonical point count. Texture
/// coordinates are normalized against `bounds` and duplicated the same way.
///
/// Texture faces mirror vertex faces index-for-index at this level; the
/// lists only diverge once subdivision introduces seam-dependent midpoints.
pub fn extrude_prism(
    triangulation: &PlanarTriangulation,
    height: f64,
    bounds: &Bounds,
) -> PrismMesh {
    let n = triangulation.points.len();
    let wall_segments = triangulation.exterior_count + triangulation.hole_sizes.iter().sum::<usize>();
    let mut mesh = PrismMesh::with_capacity(
        2 * n,
        2 * triangulation.triangles.len() + 2 * wall_segments,
    );

    for p in &triangulation.points {
        mesh.add_vertex(DVec3::new(p.x, p.y, 0.0));
    }
    for p in &triangulation.points {
        mesh.add_vertex(DVec3::new(p.x, p.y, height));
    }

    // Bottom and top layers share identical texture coordinates
    for _ in 0..2 {
        for p in &triangulation.points {
            mesh.add_tex_coord(DVec2::new(
                (p.x - bounds.min.x) / bounds.width(),
                (p.y - bounds.min.y) / bounds.height(),
            ));
        }
    }

    let n = n as u32;

    // Bottom cap, reversed so it faces downward
    for t in &triangulation.triangles {
        push_face(&mut mesh, t[0] as u32, t[2] as u32, t[1] as u32);
    }

    // Top cap
    for t in &triangulation.triangles {
        push_face(&mut mesh, n + t[0] as u32, n + t[1] as u32, n + t[2] as u32);
    }

    // Exterior walls, outward winding; the wrap pair closes the ring
    let exterior_count = triangulation.exterior_count as u32;
    for i in 0..exterior_count {
        let a = i;
        let b = (i + 1) % exterior_count;
        push_face(&mut mesh, a, b, b + n);
        push_face(&mut mesh, a, b + n, a + n);
    }

    // Interior walls per hole, opposite orientation to the exterior
    let mut base = (triangulation.exterior_count + triangulation.seed_count) as u32;
    for &size in &triangulation.hole_sizes {
        let size = size as u32;
        for i in 0..size {
            let a = base + i;
            let b = base + (i + 1) % size;
            push_face(&mut mesh, a, b + n, b);
            push_face(&mut mesh, a, a + n, b + n);
        }
        base += size;
    }

    mesh
}

/// Appends a triangle whose texture face mirrors its vertex face.
fn push_face(mesh: &mut PrismMesh, a: u32, b: u32, c: u32) {
    mesh.add_face([a, b, c], [a, b, c]);
}
