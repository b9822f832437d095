//! A **winged-edge** boundary representation for polygonal meshes, built
//! around constant-time local topology walks: every edge records its two
//! endpoint vertices, up to two incident faces, and the next/previous
//! boundary edge on each of its sides.
//!
//! Meshes are built from ordered vertex and face records, or from
//! OBJ-style text via [`io`]. Construction is total: malformed records
//! and non-manifold side claims degrade to [`errors::MeshWarning`]s
//! instead of failing the build. The resulting [`mesh::WingedMesh`]
//! answers vertex/edge/face adjacency queries, applies composed affine
//! transforms to its vertices, resets to its original records, and
//! exports back to the same textual form.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{MeshWarning, QueryError};
pub use mesh::{
    BoundaryWalk, Edge, EdgeKey, EdgeSide, Face, MeshRecords, Vertex, WingedMesh, edge_key,
};
