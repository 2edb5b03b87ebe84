//! # Prism Mesh
//!
//! Closed solid meshes from 2D planar boundaries. Takes an exterior polygon
//! (plus optional hole rings, one synthesized circular hole, or interior
//! seed points), triangulates the planar region, extrudes it into a capped
//! prism, refines it by edge-midpoint subdivision, and classifies every
//! face into a smoothing group.
//!
//! ## Architecture
//!
//! ```text
//! PlanarRegion -> triangulate -> extrude_prism -> subdivide^level -> classify
//! ```
//!
//! All stages are pure and single-threaded; `build_mesh` recomputes the
//! whole pipeline from scratch on every call.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use prism_mesh::{build_mesh, MeshParams};
//!
//! let params = MeshParams {
//!     exterior: vec![
//!         DVec2::new(0.0, 0.0),
//!         DVec2::new(10.0, 0.0),
//!         DVec2::new(10.0, 10.0),
//!         DVec2::new(0.0, 10.0),
//!     ],
//!     height: 5.0,
//!     level: 0,
//!     ..Default::default()
//! };
//! let mesh = build_mesh(&params).unwrap();
//! assert_eq!(mesh.vertex_count(), 8);
//! ```

pub mod assembly;
pub mod error;
pub mod extrude;
pub mod mesh;
pub mod region;
pub mod smoothing;
pub mod subdivide;
pub mod triangulate;

pub use assembly::{build_mesh, MeshParams};
pub use error::MeshError;
pub use mesh::PrismMesh;
pub use region::{Bounds, PlanarRegion};
pub use triangulate::PlanarTriangulation;
