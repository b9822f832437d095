//! OBJ-style text import and export.

use crate::errors::MeshWarning;
use crate::float_types::Real;
use crate::mesh::{MeshRecords, WingedMesh};
use hashbrown::HashMap;
use nalgebra::Point3;
use std::fs;
use std::path::Path;

/// Parse OBJ-style text into raw mesh records.
///
/// `v` lines need exactly three numeric tokens. `f` lines take each
/// token's value up to its first `/`, so `5/1/3` references vertex 5 and
/// the texture/normal indices are dropped. A line that fails to parse is
/// skipped with a [`MeshWarning::MalformedRecord`]; lines with any other
/// first token are ignored outright.
pub fn parse_obj(text: &str) -> (MeshRecords, Vec<MeshWarning>) {
    let mut records = MeshRecords::default();
    let mut warnings = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let coords: Result<Vec<Real>, _> =
                    tokens.map(|t| t.parse::<Real>()).collect();
                match coords {
                    Ok(c) if c.len() == 3 => {
                        records.vertices.push(Point3::new(c[0], c[1], c[2]));
                    },
                    _ => malformed(
                        &mut warnings,
                        line_no,
                        "vertex line needs exactly 3 numeric coordinates",
                    ),
                }
            },
            Some("f") => {
                let refs: Result<Vec<usize>, _> = tokens
                    .map(|t| t.split('/').next().unwrap_or("").parse::<usize>())
                    .collect();
                match refs {
                    Ok(r) => records.faces.push(r),
                    Err(_) => malformed(
                        &mut warnings,
                        line_no,
                        "face reference is not a positive integer",
                    ),
                }
            },
            _ => {},
        }
    }
    (records, warnings)
}

fn malformed(warnings: &mut Vec<MeshWarning>, line: usize, reason: &str) {
    let warning = MeshWarning::MalformedRecord {
        line,
        reason: reason.to_string(),
    };
    log::warn!("{warning}");
    warnings.push(warning);
}

/// Serialize a mesh to OBJ-style text, returning the text and any export
/// warnings.
///
/// Vertices are written in ascending id order and renumbered contiguously
/// from 1; `f` lines use the renumbered ids with vertices in
/// boundary-walk order. A face whose derived boundary is empty is skipped
/// with a [`MeshWarning::EmptyFaceBoundary`].
pub fn to_obj_string(mesh: &WingedMesh) -> (String, Vec<MeshWarning>) {
    let mut out = String::new();
    let mut warnings = Vec::new();
    out.push_str("# winged-edge mesh export\n");
    out.push_str(&format!(
        "# {} vertices, {} edges, {} faces\n",
        mesh.num_vertices(),
        mesh.num_edges(),
        mesh.num_faces()
    ));

    let mut remap = HashMap::new();
    for (i, vertex) in mesh.vertices.iter().enumerate() {
        remap.insert(vertex.id, i + 1);
        out.push_str(&format!(
            "v {:.6} {:.6} {:.6}\n",
            vertex.position.x, vertex.position.y, vertex.position.z
        ));
    }

    for face in &mesh.faces {
        let vertices = mesh.face_vertices(face.id).unwrap_or_default();
        if vertices.is_empty() {
            let warning = MeshWarning::EmptyFaceBoundary { face: face.id };
            log::warn!("{warning}");
            warnings.push(warning);
            continue;
        }
        out.push('f');
        for v in vertices {
            out.push_str(&format!(" {}", remap.get(&v).copied().unwrap_or(v)));
        }
        out.push('\n');
    }
    (out, warnings)
}

/// Read a mesh from an OBJ file. Only filesystem failures are errors;
/// malformed content becomes warnings on the returned mesh.
pub fn load_obj(path: impl AsRef<Path>) -> std::io::Result<WingedMesh> {
    let text = fs::read_to_string(path)?;
    Ok(WingedMesh::from_obj_text(&text))
}

/// Write a mesh to an OBJ file, returning the export warnings.
pub fn save_obj(
    mesh: &WingedMesh,
    path: impl AsRef<Path>,
) -> std::io::Result<Vec<MeshWarning>> {
    let (text, warnings) = to_obj_string(mesh);
    fs::write(path, text)?;
    Ok(warnings)
}

impl WingedMesh {
    /// Build a mesh directly from OBJ-style text. Parse warnings precede
    /// build warnings in the result's warning list.
    pub fn from_obj_text(text: &str) -> Self {
        let (records, mut warnings) = parse_obj(text);
        let mut mesh = Self::from_records(records);
        warnings.append(&mut mesh.warnings);
        mesh.warnings = warnings;
        mesh
    }

    /// Serialize to OBJ-style text; see [`to_obj_string`].
    pub fn to_obj_string(&self) -> (String, Vec<MeshWarning>) {
        to_obj_string(self)
    }
}
