//! # Triangulation Adapter
//!
//! Hands a [`PlanarRegion`] to the constrained Delaunay engine and marshals
//! the result back as a canonical point list plus index triples.

use crate::error::MeshError;
use crate::region::PlanarRegion;
use glam::DVec2;
use spade::handles::FixedVertexHandle;
use spade::{ConstrainedDelaunayTriangulation, Point2, Triangulation as _};
use std::collections::HashMap;

/// Result of triangulating a planar region.
///
/// `points` is the canonical ordered point list: exterior-ring points first,
/// then hole-ring points in addition order, then seed points. Every triangle
/// references three indices into `points`.
#[derive(Debug, Clone)]
pub struct PlanarTriangulation {
    /// Canonical ordered point list
    pub points: Vec<DVec2>,
    /// Triangles as index triples into `points`
    pub triangles: Vec<[usize; 3]>,
    /// Number of exterior-ring points at the front of `points`
    pub exterior_count: usize,
    /// Ring lengths of each hole, in addition order
    pub hole_sizes: Vec<usize>,
    /// Number of trailing seed points
    pub seed_count: usize,
}

/// Triangulates the region interior, honoring hole boundaries.
///
/// Constraint edges are inserted along the exterior ring and every hole
/// ring; triangles whose centroid falls outside the exterior or inside a
/// hole are discarded. Corners are resolved back to canonical indices
/// through a handle-index map recorded at insertion time; a corner with no
/// canonical match fails the build naming the offending coordinate.
pub fn triangulate(region: &PlanarRegion) -> Result<PlanarTriangulation, MeshError> {
    let mut points: Vec<DVec2> = region.exterior().to_vec();
    for hole in region.holes() {
        points.extend_from_slice(hole);
    }
    points.extend_from_slice(region.seeds());

    let mut cdt: ConstrainedDelaunayTriangulation<Point2<f64>> =
        ConstrainedDelaunayTriangulation::new();

    // Canonical index of each engine vertex, recorded once at insertion.
    // Exact-duplicate points merge onto their first canonical index.
    let mut handles: Vec<FixedVertexHandle> = Vec::with_capacity(points.len());
    let mut canonical: HashMap<usize, usize> = HashMap::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let handle = cdt.insert(Point2::new(p.x, p.y))?;
        canonical.entry(handle.index()).or_insert(i);
        handles.push(handle);
    }

    let exterior_count = region.exterior().len();
    add_ring_constraints(&mut cdt, &handles[..exterior_count])?;
    let mut offset = exterior_count;
    for hole in region.holes() {
        add_ring_constraints(&mut cdt, &handles[offset..offset + hole.len()])?;
        offset += hole.len();
    }

    let mut triangles = Vec::new();
    for face in cdt.inner_faces() {
        let positions = face.positions();
        let centroid = DVec2::new(
            (positions[0].x + positions[1].x + positions[2].x) / 3.0,
            (positions[0].y + positions[1].y + positions[2].y) / 3.0,
        );

        // The engine fills the convex hull; keep only triangles that lie
        // in the region interior.
        if !point_in_ring(centroid, region.exterior()) {
            continue;
        }
        if region.holes().iter().any(|h| point_in_ring(centroid, h)) {
            continue;
        }

        let mut triangle = [0usize; 3];
        for (corner, vertex) in face.vertices().iter().enumerate() {
            match canonical.get(&vertex.fix().index()) {
                Some(&index) => triangle[corner] = index,
                None => {
                    let position = vertex.position();
                    return Err(MeshError::UnresolvedCorner {
                        x: position.x,
                        y: position.y,
                    });
                }
            }
        }
        triangles.push(triangle);
    }

    Ok(PlanarTriangulation {
        points,
        triangles,
        exterior_count,
        hole_sizes: region.holes().iter().map(Vec::len).collect(),
        seed_count: region.seeds().len(),
    })
}

/// Adds constraint edges along a closed ring of vertex handles.
fn add_ring_constraints(
    cdt: &mut ConstrainedDelaunayTriangulation<Point2<f64>>,
    ring: &[FixedVertexHandle],
) -> Result<(), MeshError> {
    let n = ring.len();
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if a == b {
            continue;
        }
        if !cdt.can_add_constraint(a, b) {
            return Err(MeshError::triangulation_failed(
                "boundary constraint edges intersect",
            ));
        }
        cdt.add_constraint(a, b);
    }
    Ok(())
}

/// Even-odd ray-casting point-in-polygon test.
fn point_in_ring(p: DVec2, ring: &[DVec2]) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];
        if (a.y > p.y) != (b.y > p.y) {
            let crossing_x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
