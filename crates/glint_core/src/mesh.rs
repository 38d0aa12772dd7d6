//! Triangle mesh geometry and a Wavefront OBJ subset loader.
//!
//! Only vertex positions (`v`) and triangular faces (`f`) are read. Normals,
//! texture coordinates, groups and materials are ignored. The loader is
//! lenient: a line that does not parse is skipped instead of failing the
//! whole file.

use std::fs;
use std::path::Path;

use glint_math::Vec3;
use thiserror::Error;

/// Errors that can occur during mesh loading.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MeshResult<T> = Result<T, MeshError>;

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices, 0-based (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterate over the triangles as `[v0, v1, v2]` vertex triplets.
    ///
    /// Faces with an index outside the position array are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(move |face| {
            let vertex = |i: u32| self.positions.get(i as usize).copied();

            match (vertex(face[0]), vertex(face[1]), vertex(face[2])) {
                (Some(v0), Some(v1), Some(v2)) => Some([v0, v1, v2]),
                _ => {
                    log::warn!(
                        "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                        face[0],
                        face[1],
                        face[2],
                        self.positions.len()
                    );
                    None
                }
            }
        })
    }
}

/// Load an OBJ file, translating every vertex by `offset`.
pub fn load_obj(path: impl AsRef<Path>, offset: Vec3) -> MeshResult<Mesh> {
    let path = path.as_ref();
    // Non-UTF-8 bytes only spoil the lines they appear on
    let bytes = fs::read(path)?;
    let mesh = parse_obj(&String::from_utf8_lossy(&bytes), offset);

    log::info!(
        "Loaded mesh {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

/// Parse OBJ source text, translating every vertex by `offset`.
///
/// Faces may only reference vertices defined on earlier lines. Lines with the
/// wrong number of tokens, unparsable numbers or out-of-range references are
/// skipped.
pub fn parse_obj(source: &str, offset: Vec3) -> Mesh {
    let mut mesh = Mesh::default();

    for (line_no, line) in source.lines().enumerate() {
        let mut tokens = line.split_whitespace();

        let parsed = match tokens.next() {
            Some("v") => parse_vertex(tokens).map(|p| mesh.positions.push(p + offset)),
            Some("f") => parse_face(tokens, mesh.positions.len())
                .map(|face| mesh.indices.extend_from_slice(&face)),
            _ => continue,
        };

        if parsed.is_none() {
            log::trace!("Skipping malformed OBJ line {}: {:?}", line_no + 1, line);
        }
    }

    mesh
}

/// Parse `x y z [w]`; the optional weight is ignored.
fn parse_vertex<'a>(tokens: impl Iterator<Item = &'a str>) -> Option<Vec3> {
    let coords = tokens
        .map(|t| t.parse::<f32>().ok())
        .collect::<Option<Vec<_>>>()?;

    match coords.as_slice() {
        [x, y, z] | [x, y, z, _] => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}

/// Parse three vertex references (`i`, `i/t`, `i//n` or `i/t/n`, 1-based)
/// into 0-based indices.
fn parse_face<'a>(tokens: impl Iterator<Item = &'a str>, vertex_count: usize) -> Option<[u32; 3]> {
    let refs = tokens
        .map(|t| parse_vertex_ref(t, vertex_count))
        .collect::<Option<Vec<_>>>()?;

    match refs.as_slice() {
        [a, b, c] => Some([*a, *b, *c]),
        _ => None,
    }
}

fn parse_vertex_ref(token: &str, vertex_count: usize) -> Option<u32> {
    let index: u32 = token.split('/').next()?.parse().ok()?;

    if index == 0 || index as usize > vertex_count {
        return None;
    }

    Some(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
# two triangles
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
vn 0 0 1
vt 0.5 0.5
f 1/1/1 2/1/1 3/1/1
f 2//1 4//1 3//1
";

    #[test]
    fn test_parse_quad() {
        let mesh = parse_obj(QUAD, Vec3::ZERO);

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn test_offset_applied() {
        let mesh = parse_obj("v 1 2 3\n", Vec3::new(0.0, -3.0, -26.0));
        assert_eq!(mesh.positions, vec![Vec3::new(1.0, -1.0, -23.0)]);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let source = "\
v 0 0 0
v 1 0
v 1 0 0
v a b c
v 0 1 0
f 1 2
f 1 2 3 4
f 1 2 x
f 1 2 3
";
        let mesh = parse_obj(source, Vec3::ZERO);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_out_of_range_faces_skipped() {
        // A face may not reference a vertex defined after it
        let source = "\
v 0 0 0
v 1 0 0
f 1 2 3
v 0 1 0
f 0 1 2
f 1 2 3
";
        let mesh = parse_obj(source, Vec3::ZERO);

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_triangles_iterator() {
        let mesh = parse_obj(QUAD, Vec3::ZERO);
        let triangles: Vec<_> = mesh.triangles().collect();

        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[1], [Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y]);
    }

    #[test]
    fn test_triangles_skip_invalid_indices() {
        let mesh = Mesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2, 0, 1, 7]);
        assert_eq!(mesh.triangles().count(), 1);
    }

    #[test]
    fn test_load_non_utf8_comment() {
        let path = std::env::temp_dir().join(format!("glint_latin1_{}.obj", std::process::id()));
        fs::write(&path, b"# cr\xe9\xe9 par blender\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let mesh = load_obj(&path, Vec3::ZERO);
        fs::remove_file(&path).ok();

        let mesh = mesh.unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_non_utf8_vertex_line_skipped() {
        let source = String::from_utf8_lossy(b"v 0 0 0\nv 1 \xff 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
        let mesh = parse_obj(&source, Vec3::ZERO);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_obj("does/not/exist.obj", Vec3::ZERO);
        assert!(matches!(result, Err(MeshError::Io(_))));
    }
}
