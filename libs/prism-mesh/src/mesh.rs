//! # Mesh Data Structure
//!
//! Core mesh representation: vertex positions, texture coordinates, and the
//! parallel face / texture-face index lists.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A triangle mesh produced by the prism pipeline.
///
/// All geometry calculations use f64 internally. Export to f32 only happens
/// at the GPU boundary.
///
/// The face list indexes into the vertex buffer and the texture-face list
/// indexes into the texture-coordinate buffer. The two lists are always the
/// same length and triangle `i` in one corresponds to triangle `i` in the
/// other; a geometric vertex may carry distinct texture coordinates per face
/// at UV seams, which is why the lists are kept separate.
///
/// # Example
///
/// ```rust
/// use prism_mesh::PrismMesh;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = PrismMesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_tex_coord(DVec2::new(0.0, 0.0));
/// mesh.add_tex_coord(DVec2::new(1.0, 0.0));
/// mesh.add_tex_coord(DVec2::new(0.0, 1.0));
/// mesh.add_face([0, 1, 2], [0, 1, 2]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrismMesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Texture coordinates, normalized to the region bounds
    tex_coords: Vec<DVec2>,
    /// Triangle indices into the vertex buffer
    faces: Vec<[u32; 3]>,
    /// Triangle indices into the texture-coordinate buffer
    tex_faces: Vec<[u32; 3]>,
    /// One smoothing-group id per face, populated at the final level only
    smoothing_groups: Option<Vec<u32>>,
    /// Region extents in world units (width, height), final level only
    region_size: Option<DVec2>,
    /// Approximate square texture-atlas dimensions, final level only
    atlas_size: Option<(u32, u32)>,
}

impl Default for PrismMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl PrismMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            faces: Vec::new(),
            tex_faces: Vec::new(),
            smoothing_groups: None,
            region_size: None,
            atlas_size: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            tex_coords: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            tex_faces: Vec::with_capacity(face_count),
            smoothing_groups: None,
            region_size: None,
            atlas_size: None,
        }
    }

    /// Builds a mesh directly from pre-assembled buffers.
    ///
    /// The face and texture-face lists must be the same length.
    pub(crate) fn from_buffers(
        vertices: Vec<DVec3>,
        tex_coords: Vec<DVec2>,
        faces: Vec<[u32; 3]>,
        tex_faces: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(faces.len(), tex_faces.len());
        Self {
            vertices,
            tex_coords,
            faces,
            tex_faces,
            smoothing_groups: None,
            region_size: None,
            atlas_size: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of texture coordinates.
    #[inline]
    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a texture coordinate and returns its index.
    pub fn add_tex_coord(&mut self, uv: DVec2) -> u32 {
        let index = self.tex_coords.len() as u32;
        self.tex_coords.push(uv);
        index
    }

    /// Adds a triangle with its texture-face counterpart.
    pub fn add_face(&mut self, vertices: [u32; 3], tex_coords: [u32; 3]) {
        self.faces.push(vertices);
        self.tex_faces.push(tex_coords);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn tex_coords(&self) -> &[DVec2] {
        &self.tex_coords
    }

    /// Returns a reference to the triangle faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns a reference to the texture faces.
    #[inline]
    pub fn tex_faces(&self) -> &[[u32; 3]] {
        &self.tex_faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the texture coordinate at the given index.
    #[inline]
    pub fn tex_coord(&self, index: u32) -> DVec2 {
        self.tex_coords[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> [u32; 3] {
        self.faces[index]
    }

    /// Sets the smoothing-group ids (one per face).
    pub fn set_smoothing_groups(&mut self, groups: Vec<u32>) {
        self.smoothing_groups = Some(groups);
    }

    /// Returns the smoothing-group ids, if classified.
    pub fn smoothing_groups(&self) -> Option<&[u32]> {
        self.smoothing_groups.as_deref()
    }

    /// Sets the region world-space extents hint.
    pub fn set_region_size(&mut self, size: DVec2) {
        self.region_size = Some(size);
    }

    /// Returns the region world-space extents (width, height), if finalized.
    pub fn region_size(&self) -> Option<DVec2> {
        self.region_size
    }

    /// Sets the approximate texture-atlas dimensions hint.
    pub fn set_atlas_size(&mut self, width: u32, height: u32) {
        self.atlas_size = Some((width, height));
    }

    /// Returns the approximate texture-atlas dimensions, if finalized.
    pub fn atlas_size(&self) -> Option<(u32, u32)> {
        self.atlas_size
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Face and texture-face lists have the same length
    /// - All indices are in range for their buffer
    /// - No degenerate faces (repeated indices)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.faces.len() != self.tex_faces.len() {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;
        let tex_count = self.tex_coords.len() as u32;

        for face in &self.faces {
            if face[0] >= vertex_count || face[1] >= vertex_count || face[2] >= vertex_count {
                return false;
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return false;
            }
        }

        for face in &self.tex_faces {
            if face[0] >= tex_count || face[1] >= tex_count || face[2] >= tex_count {
                return false;
            }
        }

        if let Some(groups) = &self.smoothing_groups {
            if groups.len() != self.faces.len() {
                return false;
            }
        }

        true
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports texture coordinates as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn tex_coords_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.tex_coords.len() * 2);
        for uv in &self.tex_coords {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports the face indices interleaved with texture-face indices.
    ///
    /// Returns 6 values per triangle: [v0, t0, v1, t1, v2, t2, ...], the
    /// layout consumed by renderers that address positions and texture
    /// coordinates through separate index streams.
    pub fn indices_interleaved(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.faces.len() * 6);
        for (face, tex) in self.faces.iter().zip(&self.tex_faces) {
            result.push(face[0]);
            result.push(tex[0]);
            result.push(face[1]);
            result.push(tex[1]);
            result.push(face[2]);
            result.push(tex[2]);
        }
        result
    }
}
