//! Affine transforms over vertex positions.
//!
//! Transforms touch positions only; connectivity (edges, faces, links) is
//! untouched, so adjacency queries give the same answers before and after.

use crate::errors::MeshWarning;
use crate::float_types::Real;
use crate::mesh::WingedMesh;
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

/// Translation by `(dx, dy, dz)` as a homogeneous matrix.
pub fn translation(dx: Real, dy: Real, dz: Real) -> Matrix4<Real> {
    Translation3::new(dx, dy, dz).to_homogeneous()
}

/// Non-uniform scaling about the origin.
pub fn scaling(sx: Real, sy: Real, sz: Real) -> Matrix4<Real> {
    Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
}

/// Rotation about the x axis by `degrees`.
pub fn rotation_x(degrees: Real) -> Matrix4<Real> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), degrees.to_radians()).to_homogeneous()
}

/// Rotation about the y axis by `degrees`.
pub fn rotation_y(degrees: Real) -> Matrix4<Real> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), degrees.to_radians()).to_homogeneous()
}

/// Rotation about the z axis by `degrees`.
pub fn rotation_z(degrees: Real) -> Matrix4<Real> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), degrees.to_radians()).to_homogeneous()
}

/// Combine a sequence of transforms into a single matrix. Each step is
/// pre-multiplied onto the running composite, so the first listed
/// transform is the first applied to points.
pub fn compose(steps: &[Matrix4<Real>]) -> Matrix4<Real> {
    steps
        .iter()
        .fold(Matrix4::identity(), |composite, step| step * composite)
}

impl WingedMesh {
    /// Apply a homogeneous transform to every vertex position.
    ///
    /// A vertex the matrix sends to homogeneous w = 0 cannot be projected
    /// back to a point; it keeps its old position and a warning is
    /// recorded. All other vertices still update, the pass is not rolled
    /// back. Returns the warnings this call produced (they are also
    /// appended to [`WingedMesh::warnings`]).
    pub fn apply_transform(&mut self, matrix: &Matrix4<Real>) -> Vec<MeshWarning> {
        let mut skipped = Vec::new();
        for vertex in &mut self.vertices {
            let hom = matrix * vertex.position.to_homogeneous();
            match Point3::from_homogeneous(hom) {
                Some(position) => vertex.position = position,
                None => {
                    skipped.push(MeshWarning::DegenerateTransform { vertex: vertex.id });
                },
            }
        }
        for warning in skipped.iter().cloned() {
            self.push_warning(warning);
        }
        skipped
    }

    /// Translate every vertex by `(dx, dy, dz)`.
    pub fn translate(&mut self, dx: Real, dy: Real, dz: Real) -> Vec<MeshWarning> {
        self.apply_transform(&translation(dx, dy, dz))
    }

    /// Scale every vertex about the origin.
    pub fn scale(&mut self, sx: Real, sy: Real, sz: Real) -> Vec<MeshWarning> {
        self.apply_transform(&scaling(sx, sy, sz))
    }

    /// Rotate every vertex about the x, then y, then z axis, angles in
    /// degrees.
    pub fn rotate(&mut self, x_deg: Real, y_deg: Real, z_deg: Real) -> Vec<MeshWarning> {
        self.apply_transform(&compose(&[
            rotation_x(x_deg),
            rotation_y(y_deg),
            rotation_z(z_deg),
        ]))
    }
}
