//! # Midpoint Subdivision
//!
//! One refinement level per call: every triangle becomes four, new vertices
//! are edge midpoints, deduplicated within the pass via a symmetric edge
//! key. The geometric and texture meshes are refined in lock-step with
//! independent caches, since geometric adjacency and UV adjacency can
//! differ at seams.

use crate::mesh::PrismMesh;
use std::collections::HashMap;
use std::ops::{Add, Mul};

/// Midpoint lookup for one subdivision pass over one index space.
///
/// Keyed by the unordered index pair (min, max); a miss appends the
/// midpoint to the buffer, so the next index is always the buffer length.
/// The cache lives for exactly one pass and must never be shared between
/// the vertex and texture-coordinate index spaces or across builds.
struct MidpointCache {
    map: HashMap<(u32, u32), u32>,
}

impl MidpointCache {
    fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    fn midpoint<T>(&mut self, buffer: &mut Vec<T>, a: u32, b: u32) -> u32
    where
        T: Copy + Add<Output = T> + Mul<f64, Output = T>,
    {
        let key = (a.min(b), a.max(b));
        if let Some(&index) = self.map.get(&key) {
            return index;
        }
        let mid = (buffer[a as usize] + buffer[b as usize]) * 0.5;
        let index = buffer.len() as u32;
        buffer.push(mid);
        self.map.insert(key, index);
        index
    }
}

/// Applies one level of edge-midpoint subdivision.
///
/// Child triangles preserve the parent winding: for parent (v1, v2, v3)
/// with edge midpoints a = mid(v1,v2), b = mid(v2,v3), c = mid(v3,v1), the
/// children are (v1,a,c), (v2,b,a), (v3,c,b), (a,b,c). The face count is
/// exactly quadrupled; the vertex count grows by the number of distinct
/// undirected edges.
pub fn subdivide(mesh: &PrismMesh) -> PrismMesh {
    let mut vertices = mesh.vertices().to_vec();
    let mut tex_coords = mesh.tex_coords().to_vec();
    let mut faces = Vec::with_capacity(mesh.face_count() * 4);
    let mut tex_faces = Vec::with_capacity(mesh.face_count() * 4);

    let mut vertex_cache = MidpointCache::new();
    let mut tex_cache = MidpointCache::new();

    for (face, tex_face) in mesh.faces().iter().zip(mesh.tex_faces()) {
        let [v1, v2, v3] = *face;
        let a = vertex_cache.midpoint(&mut vertices, v1, v2);
        let b = vertex_cache.midpoint(&mut vertices, v2, v3);
        let c = vertex_cache.midpoint(&mut vertices, v3, v1);
        faces.push([v1, a, c]);
        faces.push([v2, b, a]);
        faces.push([v3, c, b]);
        faces.push([a, b, c]);

        let [t1, t2, t3] = *tex_face;
        let a = tex_cache.midpoint(&mut tex_coords, t1, t2);
        let b = tex_cache.midpoint(&mut tex_coords, t2, t3);
        let c = tex_cache.midpoint(&mut tex_coords, t3, t1);
        tex_faces.push([t1, a, c]);
        tex_faces.push([t2, b, a]);
        tex_faces.push([t3, c, b]);
        tex_faces.push([a, b, c]);
    }

    PrismMesh::from_buffers(vertices, tex_coords, faces, tex_faces)
}

/// Counts the distinct undirected edges of a face list.
pub fn distinct_edge_count(faces: &[[u32; 3]]) -> usize {
    let mut edges = std::collections::HashSet::new();
    for face in faces {
        for (a, b) in [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])] {
            edges.insert((a.min(b), a.max(b)));
        }
    }
    edges.len()
}
